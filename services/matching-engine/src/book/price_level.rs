//! Price level implementation with FIFO queue
//!
//! A price level contains all orders resting at a specific price point.
//! Orders are maintained in FIFO (First-In-First-Out) order to enforce
//! time priority: a new order at an already-represented price goes to the
//! back of the queue, never ahead of an earlier arrival.

use std::collections::VecDeque;
use types::numeric::Quantity;
use types::order::Order;

/// A price level containing orders at a specific price
///
/// Maintains strict FIFO ordering for time-priority matching. The level
/// owns its orders; the price itself is the key of the enclosing side map.
#[derive(Debug, Clone, Default)]
pub struct PriceLevel {
    /// Queue of orders at this price level (FIFO order)
    orders: VecDeque<Order>,
    /// Total quantity available at this level
    total_quantity: Quantity,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new() -> Self {
        Self {
            orders: VecDeque::new(),
            total_quantity: Quantity::zero(),
        }
    }

    /// Insert an order at the back of the queue (time priority)
    pub fn push_back(&mut self, order: Order) {
        self.total_quantity = self.total_quantity + order.quantity;
        self.orders.push_back(order);
    }

    /// Peek at the front order without removing it
    pub fn front(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Fill the front order by a matched amount
    ///
    /// Decrements the front order's remaining quantity; if it reaches zero
    /// the order is removed from the queue. Returns false if the level is
    /// empty.
    ///
    /// # Panics
    /// Panics if the fill exceeds the front order's remaining quantity.
    pub fn fill_front(&mut self, quantity: Quantity) -> bool {
        let Some(order) = self.orders.front_mut() else {
            return false;
        };

        order.fill(quantity);
        self.total_quantity = self
            .total_quantity
            .checked_sub(quantity)
            .unwrap_or(Quantity::zero());

        if order.is_filled() {
            self.orders.pop_front();
        }
        true
    }

    /// Check if the price level is empty
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Get the total quantity at this price level
    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    /// Get the number of orders at this level
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Iterate the resting orders in time priority order
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }
}
