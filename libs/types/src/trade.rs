//! Trade output records
//!
//! A trade records one pairing of a resting bid against a resting ask. Both
//! sides' limit prices are kept — the book emits no single clearing price.

use crate::ids::{OrderId, Ticker, TradeId};
use crate::numeric::{Price, Quantity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An executed match between one bid and one ask
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub trade_id: TradeId,
    /// Monotonic per-book execution sequence
    pub sequence: u64,
    pub ticker: Ticker,

    // Order references
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,

    // Both limit prices; buy_price >= sell_price always holds
    pub buy_price: Price,
    pub sell_price: Price,

    pub quantity: Quantity,
}

impl Trade {
    /// Create a new trade record
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sequence: u64,
        ticker: Ticker,
        buy_order_id: OrderId,
        sell_order_id: OrderId,
        buy_price: Price,
        sell_price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            trade_id: TradeId::new(),
            sequence,
            ticker,
            buy_order_id,
            sell_order_id,
            buy_price,
            sell_price,
            quantity,
        }
    }

    /// The gap between the bid and ask limits at execution
    pub fn spread(&self) -> Decimal {
        self.buy_price.as_decimal() - self.sell_price.as_decimal()
    }

    /// Check the crossing condition that every trade must satisfy
    pub fn prices_cross(&self) -> bool {
        self.buy_price >= self.sell_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_trade(buy: u64, sell: u64, qty: u64) -> Trade {
        Trade::new(
            1,
            Ticker::new("AAPL"),
            OrderId::new(),
            OrderId::new(),
            Price::from_u64(buy),
            Price::from_u64(sell),
            Quantity::from_u64(qty),
        )
    }

    #[test]
    fn test_trade_creation() {
        let trade = test_trade(105, 95, 5);
        assert_eq!(trade.sequence, 1);
        assert_eq!(trade.quantity, Quantity::from_u64(5));
        assert!(trade.prices_cross());
    }

    #[test]
    fn test_trade_spread() {
        let trade = test_trade(105, 95, 5);
        assert_eq!(trade.spread(), Decimal::from(10));

        let flat = test_trade(100, 100, 1);
        assert_eq!(flat.spread(), Decimal::ZERO);
        assert!(flat.prices_cross());
    }

    #[test]
    fn test_trade_serialization() {
        let trade = test_trade(105, 95, 5);
        let json = serde_json::to_string(&trade).unwrap();
        let deserialized: Trade = serde_json::from_str(&json).unwrap();

        assert_eq!(trade.trade_id, deserialized.trade_id);
        assert_eq!(trade.buy_price, deserialized.buy_price);
        assert_eq!(trade.sell_price, deserialized.sell_price);
        assert_eq!(trade.quantity, deserialized.quantity);
    }
}
