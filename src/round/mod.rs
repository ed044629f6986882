//! Round engine and state.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Face, Suit};
use crate::error::RoundError;
use crate::hand::{DealerHand, PlayerHand};
use crate::options::RoundOptions;

mod actions;
mod dealer;

/// One round of blackjack.
///
/// The round owns the shuffled deck, the player hands (one, or two after a
/// split), and the dealer hand. Construction deals two cards each to the
/// player and the dealer and immediately resolves a natural blackjack. Use
/// [`RoundOptions`] to configure the wager ceiling, the dealer's stopping
/// total, and the split and double-down rules.
#[derive(Debug, Clone)]
pub struct Round {
    /// Remaining cards, drawn from the back.
    deck: Vec<Card>,
    /// Player hands; a second entry appears after a split.
    players: Vec<PlayerHand>,
    /// Dealer's hand.
    dealer: DealerHand,
    /// Round rules.
    options: RoundOptions,
    /// Round-level split permission, consumed by the first `split` call.
    split_available: bool,
    /// Signed payout accumulated across all settled hands.
    wager_earned: f64,
}

impl Round {
    /// Creates a round with a freshly shuffled 52-card deck and deals it.
    ///
    /// Two cards go to the player, then two to the dealer; a two-card 21 is
    /// resolved on the spot (see [`Round::verify_blackjack`]).
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::DeckExhausted`] if the deck runs dry while an
    /// initial natural forces dealer draws, which cannot happen with a full
    /// deck but is reported rather than assumed away.
    pub fn new(wager: f64, options: RoundOptions, seed: u64) -> Result<Self, RoundError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Self::create_deck();
        deck.shuffle(&mut rng);
        Self::with_deck(wager, options, deck)
    }

    /// Creates a round from a prepared deck, drawn from the back.
    ///
    /// The deck is used as given, without shuffling. Intended for stacked
    /// decks in tests and simulations.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::DeckExhausted`] if the deck cannot cover the
    /// initial deal, plus any dealer draws triggered by a dealt natural.
    pub fn with_deck(
        wager: f64,
        options: RoundOptions,
        deck: Vec<Card>,
    ) -> Result<Self, RoundError> {
        let split_available = options.allow_split;
        let allow_double_down = options.allow_double_down;

        let mut round = Self {
            deck,
            players: alloc::vec![PlayerHand::new(wager, allow_double_down)],
            dealer: DealerHand::new(),
            options,
            split_available,
            wager_earned: 0.0,
        };

        for _ in 0..2 {
            let card = round.draw()?;
            round.players[0].add_card(card);
        }
        for _ in 0..2 {
            let card = round.draw()?;
            round.dealer.add_card(card);
        }

        round.verify_blackjack(0)?;

        Ok(round)
    }

    /// Creates an unshuffled 52-card deck.
    fn create_deck() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for face in Face::ALL {
                cards.push(Card::new(suit, face));
            }
        }
        cards
    }

    /// Draws a card from the deck.
    pub(crate) fn draw(&mut self) -> Result<Card, RoundError> {
        self.deck.pop().ok_or(RoundError::DeckExhausted)
    }

    /// Returns the player hand at `hand_idx`.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::HandNotFound`] for an out-of-range index.
    pub fn hand(&self, hand_idx: usize) -> Result<&PlayerHand, RoundError> {
        self.players
            .get(hand_idx)
            .ok_or(RoundError::HandNotFound(hand_idx))
    }

    /// Returns all player hands.
    #[must_use]
    pub fn hands(&self) -> &[PlayerHand] {
        &self.players
    }

    /// Returns the number of player hands (1, or 2 after a split).
    #[must_use]
    pub fn hand_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the value of the player hand at `hand_idx`.
    ///
    /// Player totals always count aces softly.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::HandNotFound`] for an out-of-range index.
    pub fn hand_value(&self, hand_idx: usize) -> Result<u8, RoundError> {
        Ok(self.hand(hand_idx)?.value())
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the dealer's up card.
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<&Card> {
        self.dealer.up_card()
    }

    /// Returns the signed payout accumulated across all settled hands.
    #[must_use]
    pub const fn wager_earned(&self) -> f64 {
        self.wager_earned
    }

    /// Returns whether a split is still permitted this round.
    ///
    /// The permission is consumed by the first [`Round::split`] call, even
    /// one that fails, and by the first hit.
    #[must_use]
    pub const fn split_allowed(&self) -> bool {
        self.split_available
    }

    /// Returns the round rules.
    #[must_use]
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the remaining deck, in draw order from the back.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }
}
