//! Resting order types
//!
//! An order's quantity is its remaining open amount: it is decremented by the
//! matching loop and the order leaves its side when it reaches zero.

use crate::ids::{OrderId, Ticker};
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::BUY => Side::SELL,
            Side::SELL => Side::BUY,
        }
    }
}

/// A resting limit order
///
/// `sequence` is the monotonically increasing arrival index assigned by the
/// book at admission; among equal prices it decides time priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub ticker: Ticker,
    pub side: Side,
    pub price: Price,
    /// Remaining open quantity (strictly positive while resting)
    pub quantity: Quantity,
    pub sequence: u64,
}

impl Order {
    /// Create a new resting order with a fresh OrderId
    pub fn new(ticker: Ticker, side: Side, price: Price, quantity: Quantity, sequence: u64) -> Self {
        Self {
            order_id: OrderId::new(),
            ticker,
            side,
            price,
            quantity,
            sequence,
        }
    }

    /// Decrement the remaining quantity by a matched amount
    ///
    /// # Panics
    /// Panics if the fill exceeds the remaining quantity
    pub fn fill(&mut self, fill_quantity: Quantity) {
        self.quantity = self
            .quantity
            .checked_sub(fill_quantity)
            .expect("Fill would exceed remaining quantity");
    }

    /// Check whether the order is fully consumed
    pub fn is_filled(&self) -> bool {
        self.quantity.is_zero()
    }
}
