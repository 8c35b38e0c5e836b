//! Bounded periodic match driver
//!
//! Owns one order book per ticker and drives the add-then-match cycle the
//! original system ran on a timer: each round submits a burst of random
//! orders, then every book runs one match pass and its trades go to the
//! sink. Rounds are logical ticks; the driver never sleeps.

use crate::config::SimulationConfig;
use crate::feed::OrderFeed;
use crate::report::{SimulationReport, TradeSink};
use matching_engine::OrderBook;
use std::collections::HashMap;
use types::ids::Ticker;

/// Drives a full simulation run over a per-ticker set of books
///
/// Ticker dispatch lives here, outside the matching core: each book holds
/// exactly one instrument.
pub struct SimulationRunner {
    config: SimulationConfig,
    feed: OrderFeed,
    /// Universe in configuration order, for deterministic match-cycle order
    tickers: Vec<Ticker>,
    books: HashMap<Ticker, OrderBook>,
    sink: TradeSink,
}

impl SimulationRunner {
    /// Build the runner: a seeded feed and one empty book per ticker
    pub fn new(config: SimulationConfig) -> Self {
        let tickers: Vec<Ticker> = config
            .tickers
            .iter()
            .map(|t| Ticker::new(t.as_str()))
            .collect();
        let books = tickers
            .iter()
            .map(|t| (t.clone(), OrderBook::new(t.clone())))
            .collect();
        let feed = OrderFeed::new(&config);

        Self {
            config,
            feed,
            tickers,
            books,
            sink: TradeSink::new(),
        }
    }

    /// Run the configured number of rounds and produce the final report
    pub fn run(mut self) -> SimulationReport {
        for round in 0..self.config.rounds {
            for _ in 0..self.config.orders_per_round {
                let order = self.feed.next_order();
                let Some(book) = self.books.get_mut(&order.ticker) else {
                    continue;
                };
                if let Err(err) =
                    book.add_order(order.side, order.ticker, order.quantity, order.price)
                {
                    tracing::warn!(%err, "order rejected");
                }
            }

            let mut round_trades = 0usize;
            for ticker in &self.tickers {
                let Some(book) = self.books.get_mut(ticker) else {
                    continue;
                };
                let trades = book.match_orders();
                round_trades += trades.len();
                self.sink.consume(&trades);
            }
            tracing::debug!(round, trades = round_trades, "match cycle complete");
        }

        let Self {
            config,
            tickers,
            books,
            sink,
            ..
        } = self;
        sink.into_report(
            config.seed,
            config.rounds,
            tickers.iter().filter_map(|t| books.get(t)),
        )
    }
}
