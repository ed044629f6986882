//! A single-round blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that plays exactly one round: it
//! shuffles a 52-card deck, deals the player and the dealer, and exposes the
//! player decisions (hit, stand, split, double-down). Terminal actions settle
//! the hand against the dealer and accumulate the signed payout in
//! [`Round::wager_earned`].
//!
//! # Example
//!
//! ```
//! use twentyone::{Round, RoundOptions};
//!
//! let options = RoundOptions::default().with_max_wager(10.0);
//! let mut round = Round::new(5.0, options, 42).unwrap();
//! round.stand(0).unwrap();
//! assert!(!round.hand(0).unwrap().is_active());
//! let _net = round.wager_earned();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, Face, Suit};
pub use error::RoundError;
pub use hand::{DealerHand, PlayerHand};
pub use options::RoundOptions;
pub use result::HandOutcome;
pub use round::Round;
