//! Random order feed
//!
//! Generates order arrivals with a deterministic seeded RNG, standing in for
//! a real market feed. The same seed always yields the same order stream.

use crate::config::SimulationConfig;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;
use types::ids::Ticker;
use types::order::Side;

/// One generated order arrival
#[derive(Debug, Clone)]
pub struct FeedOrder {
    pub ticker: Ticker,
    pub side: Side,
    pub quantity: Decimal,
    pub price: Decimal,
}

/// Deterministic random order source over a ticker universe
pub struct OrderFeed {
    tickers: Vec<Ticker>,
    min_quantity: u64,
    max_quantity: u64,
    min_price: u64,
    max_price: u64,
    rng: ChaCha8Rng,
}

impl OrderFeed {
    /// Create a feed seeded from the configuration
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            tickers: config.tickers.iter().map(|t| Ticker::new(t.as_str())).collect(),
            min_quantity: config.min_quantity,
            max_quantity: config.max_quantity,
            min_price: config.min_price,
            max_price: config.max_price,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
        }
    }

    /// Generate the next order arrival
    pub fn next_order(&mut self) -> FeedOrder {
        let side = if self.rng.gen_bool(0.5) {
            Side::BUY
        } else {
            Side::SELL
        };
        let ticker = self.tickers[self.rng.gen_range(0..self.tickers.len())].clone();
        let quantity = self.rng.gen_range(self.min_quantity..=self.max_quantity);
        let price = self.rng.gen_range(self.min_price..=self.max_price);

        FeedOrder {
            ticker,
            side,
            quantity: Decimal::from(quantity),
            price: Decimal::from(price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_respects_configured_ranges() {
        let config = SimulationConfig::default();
        let mut feed = OrderFeed::new(&config);

        for _ in 0..200 {
            let order = feed.next_order();
            assert!(order.quantity >= Decimal::from(config.min_quantity));
            assert!(order.quantity <= Decimal::from(config.max_quantity));
            assert!(order.price >= Decimal::from(config.min_price));
            assert!(order.price <= Decimal::from(config.max_price));
            assert!(config.tickers.contains(&order.ticker.as_str().to_string()));
        }
    }

    #[test]
    fn test_feed_is_deterministic_per_seed() {
        let config = SimulationConfig::default();
        let mut a = OrderFeed::new(&config);
        let mut b = OrderFeed::new(&config);

        for _ in 0..50 {
            let oa = a.next_order();
            let ob = b.next_order();
            assert_eq!(oa.ticker, ob.ticker);
            assert_eq!(oa.side, ob.side);
            assert_eq!(oa.quantity, ob.quantity);
            assert_eq!(oa.price, ob.price);
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let config = SimulationConfig::default();
        let other = SimulationConfig {
            seed: 43,
            ..config.clone()
        };

        let mut a = OrderFeed::new(&config);
        let mut b = OrderFeed::new(&other);

        let same = (0..50).all(|_| {
            let oa = a.next_order();
            let ob = b.next_order();
            oa.side == ob.side && oa.price == ob.price && oa.quantity == ob.quantity
        });
        assert!(!same, "Different seeds should produce different order flow");
    }
}
