//! Helpers shared by the compile pipeline.
//!
//! - `glob_matcher`: expansion of input paths and glob patterns

pub mod glob_matcher;

pub use glob_matcher::*;
