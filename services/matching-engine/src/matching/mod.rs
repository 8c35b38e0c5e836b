//! Matching logic module
//!
//! Implements price-time priority matching helpers

pub mod crossing;
pub mod executor;

pub use crossing::crosses;
pub use executor::MatchExecutor;
