//! Catalog compilation engine.
//!
//! ## Module Structure
//!
//! - `catalog`: the key to message mapping of one language
//! - `parsers`: JSON catalog loading
//! - `validate`: line-break and key hygiene checks
//! - `synonyms`: alias table and alias statement block
//! - `merge`: reconciliation of a target catalog against the source
//! - `emit`: rendering and writing generated message files
//! - `compile`: per-run setup and per-target compilation
//! - `utils`: input path expansion

pub mod catalog;
pub mod compile;
pub mod emit;
pub mod merge;
pub mod parsers;
pub mod synonyms;
pub mod utils;
pub mod validate;

pub use catalog::*;
pub use compile::*;
pub use emit::*;
pub use merge::*;
pub use synonyms::*;
