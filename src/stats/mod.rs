//! Aggregate queries over a season of match records
//!
//! Every query is a pure function of the full record sequence: none mutates
//! the input or holds state, so they can run in any order against the same
//! loaded season and always produce the same results.

pub mod queries;

pub use queries::{HomeAwaySplit, OutcomeGroups};
