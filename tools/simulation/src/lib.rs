//! Simulation harness for the limit order book
//!
//! Reproduces the surrounding system the matching core is extracted from:
//! a random order feed, a bounded periodic match driver, and a trade sink.
//! Everything is deterministic under a fixed seed.
//!
//! # Modules
//! - `config` — Simulation parameters (seed, rounds, ticker universe)
//! - `feed` — Seeded random order generation
//! - `runner` — Per-ticker books and the periodic match cycle
//! - `report` — Trade sink: structured logging and the JSON summary

pub mod config;
pub mod feed;
pub mod report;
pub mod runner;

pub use config::SimulationConfig;
pub use report::{SimulationReport, TradeSink};
pub use runner::SimulationRunner;
