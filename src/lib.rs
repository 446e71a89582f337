//! msgc - localization catalog compiler
//!
//! msgc merges a source-language JSON message catalog, a synonym table and
//! any number of target-language catalogs into generated message definition
//! files (one `goog.provide` module per language).
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog loading, validation, merging and emission
//! - `issues`: Issue type definitions and reporting

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
