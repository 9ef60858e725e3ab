//! Data ingestion
//!
//! Line-oriented loading of the season results file.

pub mod loader;

pub use loader::load_matches;
