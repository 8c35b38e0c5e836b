//! Simulation configuration

use serde::{Deserialize, Serialize};

/// Parameters for one simulation run
///
/// Equal configurations produce identical order flow and identical trades.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// RNG seed for the order feed
    pub seed: u64,
    /// Number of match cycles to run
    pub rounds: usize,
    /// Random orders submitted before each match cycle
    pub orders_per_round: usize,
    /// Ticker universe; one order book per entry
    pub tickers: Vec<String>,
    /// Inclusive quantity range for generated orders
    pub min_quantity: u64,
    pub max_quantity: u64,
    /// Inclusive price range for generated orders
    pub min_price: u64,
    pub max_price: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            rounds: 20,
            orders_per_round: 16,
            tickers: ["AAPL", "GOOG", "MSFT", "AMZN", "TSLA"]
                .map(String::from)
                .to_vec(),
            min_quantity: 1,
            max_quantity: 99,
            min_price: 100,
            max_price: 1499,
        }
    }
}
