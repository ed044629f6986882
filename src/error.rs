//! Error types for round operations.
//!
//! Precondition failures of [`split`](crate::Round::split) and
//! [`double_down`](crate::Round::double_down) are soft and reported as
//! `Ok(false)`; only structural failures surface here.

use thiserror::Error;

/// Errors that can occur while operating on a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Hand index out of range.
    #[error("hand index {0} out of range")]
    HandNotFound(usize),
    /// The deck ran out of cards mid-round.
    ///
    /// The deck is never reshuffled; a 52-card deck covers any realistic
    /// round, so running dry is treated as fatal.
    #[error("deck exhausted")]
    DeckExhausted,
}
