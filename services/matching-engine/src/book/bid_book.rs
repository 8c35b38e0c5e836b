//! Bid (buy-side) order book
//!
//! Maintains buy orders sorted by price descending (best bid first).
//! Uses BTreeMap for deterministic iteration order; within a price level,
//! orders queue in arrival order.

use std::collections::BTreeMap;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

use super::price_level::PriceLevel;

/// Bid (buy) side order book
///
/// Orders are sorted by price descending, so the highest bid is first.
/// At each price level, orders are maintained in FIFO order.
#[derive(Debug, Clone, Default)]
pub struct BidBook {
    /// Price levels keyed ascending; the best bid is the last key
    levels: BTreeMap<Price, PriceLevel>,
}

impl BidBook {
    /// Create a new empty bid book
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Insert an order at the back of its price level
    pub fn insert(&mut self, order: Order) {
        debug_assert_eq!(order.side, Side::BUY);
        self.levels
            .entry(order.price)
            .or_insert_with(PriceLevel::new)
            .push_back(order);
    }

    /// Get the best bid price (highest)
    pub fn best_price(&self) -> Option<Price> {
        self.levels.keys().next_back().copied()
    }

    /// Get the best bid level's price and total quantity
    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        // BTreeMap iter is ascending, so the best bid is the last entry
        self.levels
            .iter()
            .next_back()
            .map(|(price, level)| (*price, level.total_quantity()))
    }

    /// Peek at the front order of the best level (highest price, earliest arrival)
    pub fn best_order(&self) -> Option<&Order> {
        self.levels
            .values()
            .next_back()
            .and_then(|level| level.front())
    }

    /// Fill the front order of the best level by a matched amount
    ///
    /// Removes the order when exhausted and drops the level once it holds no
    /// orders, so the next best price surfaces immediately.
    pub fn fill_best(&mut self, quantity: Quantity) {
        let Some((price, level)) = self.levels.iter_mut().next_back().map(|(p, l)| (*p, l)) else {
            return;
        };
        level.fill_front(quantity);
        if level.is_empty() {
            self.levels.remove(&price);
        }
    }

    /// Get depth snapshot (top N price levels, best first)
    pub fn depth_snapshot(&self, depth: usize) -> Vec<(Price, Quantity)> {
        self.levels
            .iter()
            .rev()
            .take(depth)
            .map(|(price, level)| (*price, level.total_quantity()))
            .collect()
    }

    /// Iterate all resting orders, best price first, FIFO within price
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.levels.values().rev().flat_map(|level| level.iter())
    }

    /// Check if the bid book is empty
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get the total number of price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Get the number of resting orders across all levels
    pub fn order_count(&self) -> usize {
        self.levels.values().map(|level| level.order_count()).sum()
    }

    /// Get the total resting quantity across all levels
    pub fn total_quantity(&self) -> Quantity {
        self.levels
            .values()
            .fold(Quantity::zero(), |acc, level| acc + level.total_quantity())
    }
}
