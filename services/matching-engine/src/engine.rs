//! Matching engine core
//!
//! The order book for a single instrument: ordered insertion of resting
//! orders plus the incremental matching loop over both sides.

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use types::ids::{OrderId, Ticker};
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};
use types::trade::Trade;

use crate::book::{AskBook, BidBook};
use crate::matching::{crossing, MatchExecutor};

/// Rejection reasons for an incoming order
///
/// All variants are raised before the book is touched; on `Err` the book
/// state is unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    #[error("invalid quantity {0}: must be positive")]
    InvalidQuantity(Decimal),

    #[error("invalid price {0}: must be positive")]
    InvalidPrice(Decimal),

    #[error("ticker mismatch: book holds {expected}, order is for {got}")]
    TickerMismatch { expected: Ticker, got: Ticker },
}

/// Limit order book for a single instrument
///
/// Holds the bid and ask sides and assigns each admitted order an arrival
/// sequence number. Matching runs only when the caller invokes
/// [`match_orders`](OrderBook::match_orders); submission never trades.
pub struct OrderBook {
    ticker: Ticker,
    bids: BidBook,
    asks: AskBook,
    /// Arrival counter; each admitted order takes the next value as its
    /// time-priority rank
    next_sequence: u64,
    executor: MatchExecutor,
}

impl OrderBook {
    /// Create an empty book for one instrument
    pub fn new(ticker: Ticker) -> Self {
        Self {
            ticker,
            bids: BidBook::new(),
            asks: AskBook::new(),
            next_sequence: 0,
            executor: MatchExecutor::new(0),
        }
    }

    /// The instrument this book holds
    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Admit a new resting order
    ///
    /// Validates quantity > 0, price > 0 and the instrument before any
    /// mutation, then inserts at the back of the order's price level:
    /// strict FIFO within a level, best price first across levels.
    pub fn add_order(
        &mut self,
        side: Side,
        ticker: Ticker,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<OrderId, OrderError> {
        let quantity = Quantity::try_new(quantity)
            .filter(|q| !q.is_zero())
            .ok_or(OrderError::InvalidQuantity(quantity))?;
        let price = Price::try_new(price).ok_or(OrderError::InvalidPrice(price))?;
        if ticker != self.ticker {
            return Err(OrderError::TickerMismatch {
                expected: self.ticker.clone(),
                got: ticker,
            });
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let order = Order::new(ticker, side, price, quantity, sequence);
        let order_id = order.order_id;
        match side {
            Side::BUY => self.bids.insert(order),
            Side::SELL => self.asks.insert(order),
        }
        Ok(order_id)
    }

    /// Run one match pass, pairing crossing orders until none remain
    ///
    /// While the best bid price is >= the best ask price, the front order of
    /// each best level trades min(bid remainder, ask remainder); exhausted
    /// orders leave their side. A single best order may pair repeatedly
    /// within one call. Returns the trades in execution order; on a
    /// non-crossing book this is a no-op returning an empty Vec.
    pub fn match_orders(&mut self) -> Vec<Trade> {
        let mut trades = Vec::new();

        loop {
            let (Some(bid), Some(ask)) = (self.bids.best_order(), self.asks.best_order()) else {
                break;
            };
            if !crossing::crosses(bid.price, ask.price) {
                break;
            }

            let quantity = bid.quantity.min(ask.quantity);
            trades.push(self.executor.execute(&self.ticker, bid, ask, quantity));

            self.bids.fill_best(quantity);
            self.asks.fill_best(quantity);
        }

        trades
    }

    /// Best bid price and aggregate quantity at that level
    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        self.bids.best_bid()
    }

    /// Best ask price and aggregate quantity at that level
    pub fn best_ask(&self) -> Option<(Price, Quantity)> {
        self.asks.best_ask()
    }

    /// Aggregated top-N levels per side
    pub fn depth(&self, levels: usize) -> BookSnapshot {
        BookSnapshot {
            ticker: self.ticker.clone(),
            bids: self.bids.depth_snapshot(levels),
            asks: self.asks.depth_snapshot(levels),
        }
    }

    /// Iterate resting bids, best price first, FIFO within price
    pub fn bid_orders(&self) -> impl Iterator<Item = &Order> {
        self.bids.orders()
    }

    /// Iterate resting asks, best price first, FIFO within price
    pub fn ask_orders(&self) -> impl Iterator<Item = &Order> {
        self.asks.orders()
    }

    /// Number of resting bid orders
    pub fn bid_order_count(&self) -> usize {
        self.bids.order_count()
    }

    /// Number of resting ask orders
    pub fn ask_order_count(&self) -> usize {
        self.asks.order_count()
    }

    /// Total resting bid quantity
    pub fn bid_quantity(&self) -> Quantity {
        self.bids.total_quantity()
    }

    /// Total resting ask quantity
    pub fn ask_quantity(&self) -> Quantity {
        self.asks.total_quantity()
    }

    /// Check if both sides are empty
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}

/// Order book snapshot for reporting
#[derive(Debug, Clone, Serialize)]
pub struct BookSnapshot {
    pub ticker: Ticker,
    /// Best bids in descending price order
    pub bids: Vec<(Price, Quantity)>,
    /// Best asks in ascending price order
    pub asks: Vec<(Price, Quantity)>,
}
