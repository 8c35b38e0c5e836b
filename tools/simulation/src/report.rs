//! Trade sink and simulation report
//!
//! The sink consumes the trade sequences returned by each match pass: every
//! trade is logged at `info` level and folded into per-ticker statistics.
//! At the end of a run the statistics become a JSON-exportable report.

use matching_engine::{BookSnapshot, OrderBook};
use serde::Serialize;
use std::collections::BTreeMap;
use types::numeric::Quantity;
use types::trade::Trade;

/// Accumulating consumer of matched trades
#[derive(Debug, Default)]
pub struct TradeSink {
    stats: BTreeMap<String, TickerStats>,
}

/// Running totals for one ticker
#[derive(Debug, Clone, Default, Serialize)]
pub struct TickerStats {
    pub trade_count: u64,
    pub matched_quantity: Quantity,
}

impl TradeSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the trades of one match pass
    pub fn consume(&mut self, trades: &[Trade]) {
        for trade in trades {
            tracing::info!(
                ticker = %trade.ticker,
                quantity = %trade.quantity,
                buy_price = %trade.buy_price,
                sell_price = %trade.sell_price,
                sequence = trade.sequence,
                "matched"
            );

            let stats = self
                .stats
                .entry(trade.ticker.as_str().to_string())
                .or_default();
            stats.trade_count += 1;
            stats.matched_quantity = stats.matched_quantity + trade.quantity;
        }
    }

    /// Per-ticker totals accumulated so far
    pub fn stats(&self) -> &BTreeMap<String, TickerStats> {
        &self.stats
    }

    /// Fold the accumulated totals and the final book states into a report
    pub fn into_report<'a>(
        self,
        seed: u64,
        rounds: usize,
        books: impl Iterator<Item = &'a OrderBook>,
    ) -> SimulationReport {
        let mut tickers = BTreeMap::new();
        for book in books {
            let key = book.ticker().as_str().to_string();
            let stats = self.stats.get(&key).cloned().unwrap_or_default();
            tickers.insert(
                key,
                TickerReport {
                    trade_count: stats.trade_count,
                    matched_quantity: stats.matched_quantity,
                    resting_bid_quantity: book.bid_quantity(),
                    resting_ask_quantity: book.ask_quantity(),
                    depth: book.depth(5),
                },
            );
        }
        SimulationReport {
            seed,
            rounds,
            tickers,
        }
    }
}

/// Final summary of a simulation run
#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub seed: u64,
    pub rounds: usize,
    pub tickers: BTreeMap<String, TickerReport>,
}

/// Per-ticker outcome: matched totals plus the resting book
#[derive(Debug, Serialize)]
pub struct TickerReport {
    pub trade_count: u64,
    pub matched_quantity: Quantity,
    pub resting_bid_quantity: Quantity,
    pub resting_ask_quantity: Quantity,
    pub depth: BookSnapshot,
}

impl SimulationReport {
    /// Export the report as pretty-printed JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
