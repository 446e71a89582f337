//! Catalog file readers.
//!
//! - `json`: flat JSON message catalogs (one per language, plus the synonym table)

pub mod json;
