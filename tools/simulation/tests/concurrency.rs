//! Concurrency tests
//!
//! The book has no interior locking; callers pick a mutual-exclusion
//! boundary. Both supported patterns are exercised here: one owner thread
//! per book, and a shared book behind a Mutex with concurrent producers and
//! a periodic matcher.

use matching_engine::OrderBook;
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};
use std::thread;
use types::ids::Ticker;
use types::numeric::Quantity;
use types::order::Side;

#[test]
fn test_one_owner_thread_per_book() {
    let tickers = ["AAPL", "GOOG", "MSFT", "AMZN"];

    let handles: Vec<_> = tickers
        .into_iter()
        .map(|sym| {
            thread::spawn(move || {
                let mut book = OrderBook::new(Ticker::new(sym));

                for _ in 0..500 {
                    book.add_order(Side::SELL, Ticker::new(sym), Decimal::ONE, Decimal::from(100))
                        .unwrap();
                    book.add_order(Side::BUY, Ticker::new(sym), Decimal::ONE, Decimal::from(100))
                        .unwrap();
                }

                let trades = book.match_orders();
                assert!(book.is_empty());
                trades.len()
            })
        })
        .collect();

    let total_trades: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(total_trades, 2000); // 500 trades × 4 books
}

#[test]
fn test_mutex_boundary_covers_add_and_match() {
    let book = Arc::new(Mutex::new(OrderBook::new(Ticker::new("AAPL"))));

    let producers: Vec<_> = (0..4)
        .map(|_| {
            let book = Arc::clone(&book);
            thread::spawn(move || {
                for _ in 0..50 {
                    let mut book = book.lock().unwrap();
                    book.add_order(Side::BUY, Ticker::new("AAPL"), Decimal::ONE, Decimal::from(100))
                        .unwrap();
                    book.add_order(Side::SELL, Ticker::new("AAPL"), Decimal::ONE, Decimal::from(100))
                        .unwrap();
                }
            })
        })
        .collect();

    // Periodic matcher competing with the producers for the same lock
    let matcher = {
        let book = Arc::clone(&book);
        thread::spawn(move || {
            let mut matched = Quantity::zero();
            for _ in 0..100 {
                for trade in book.lock().unwrap().match_orders() {
                    matched = matched + trade.quantity;
                }
                thread::yield_now();
            }
            matched
        })
    };

    for producer in producers {
        producer.join().unwrap();
    }
    let mut matched = matcher.join().unwrap();

    // Drain whatever the periodic matcher did not reach
    for trade in book.lock().unwrap().match_orders() {
        matched = matched + trade.quantity;
    }

    let book = book.lock().unwrap();

    // 4 producers × 50 units per side, all at one price: everything matches
    assert_eq!(matched, Quantity::from_u64(200));
    assert!(book.is_empty());
}
