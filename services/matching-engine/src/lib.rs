//! Matching Engine
//!
//! Single-instrument limit order book with continuous price-time-priority
//! matching. Callers submit resting orders with [`OrderBook::add_order`] and,
//! on their own schedule, run [`OrderBook::match_orders`] to pair crossing
//! orders and collect the resulting trades.
//!
//! **Key Invariants:**
//! - Price-time priority strictly enforced (FIFO within a price level)
//! - Deterministic matching (same inputs → same outputs)
//! - No resting order with zero quantity
//! - Conservation of quantity

pub mod book;
pub mod engine;
pub mod matching;

pub use engine::{BookSnapshot, OrderBook, OrderError};
