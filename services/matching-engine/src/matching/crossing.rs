//! Crossing detection logic
//!
//! Determines when a bid and ask can match based on price compatibility

use types::numeric::Price;

/// Check if a bid and ask can match at given prices
///
/// A buy order matches a sell order when the buy price is >= the sell price.
/// Because both sides are kept sorted, once the top-of-book fails this test
/// no deeper pair can cross either.
pub fn crosses(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}
