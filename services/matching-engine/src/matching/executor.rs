//! Trade construction
//!
//! Builds trade records for matched pairs and numbers them with a
//! monotonically increasing execution sequence.

use types::ids::Ticker;
use types::numeric::Quantity;
use types::order::Order;
use types::trade::Trade;

/// Match executor for handling trade generation
pub struct MatchExecutor {
    sequence_counter: u64,
}

impl MatchExecutor {
    /// Create a new match executor with starting sequence number
    pub fn new(starting_sequence: u64) -> Self {
        Self {
            sequence_counter: starting_sequence,
        }
    }

    /// Get next sequence number (monotonically increasing)
    fn next_sequence(&mut self) -> u64 {
        let seq = self.sequence_counter;
        self.sequence_counter += 1;
        seq
    }

    /// Record one pairing of the front bid against the front ask
    ///
    /// The trade carries both resting orders' limit prices; the matched
    /// quantity must already be capped at both remainders by the caller.
    pub fn execute(&mut self, ticker: &Ticker, bid: &Order, ask: &Order, quantity: Quantity) -> Trade {
        debug_assert!(bid.price >= ask.price);
        debug_assert!(quantity <= bid.quantity && quantity <= ask.quantity);

        let sequence = self.next_sequence();

        Trade::new(
            sequence,
            ticker.clone(),
            bid.order_id,
            ask.order_id,
            bid.price,
            ask.price,
            quantity,
        )
    }
}
