//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Face};
use crate::result::HandOutcome;

/// Evaluates a card sequence to its best blackjack total.
///
/// Every achievable total is tracked as a candidate: each card adds its base
/// value to all candidates, and when `soft_totals` is enabled each ace also
/// branches by re-counting itself as 1 in every candidate still below 21.
/// With `soft_totals` disabled aces stay at their base value of 11. The
/// answer is the highest candidate at or below 21; if every candidate busts,
/// the lowest one is reported.
pub(crate) fn evaluate_cards(cards: &[Card], soft_totals: bool) -> u8 {
    let mut totals: Vec<u8> = alloc::vec![0];

    for card in cards {
        for total in &mut totals {
            *total = total.saturating_add(card.face.value());
        }
        if card.face == Face::Ace && soft_totals {
            let lowered: Vec<u8> = totals
                .iter()
                .copied()
                .filter(|&total| total < 21)
                .map(|total| total - 10)
                .collect();
            totals.extend(lowered);
        }
    }

    totals
        .iter()
        .copied()
        .filter(|&total| total <= 21)
        .max()
        .unwrap_or_else(|| totals.iter().copied().min().unwrap_or(0))
}

/// A player's hand.
#[derive(Debug, Clone)]
pub struct PlayerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Wager riding on this hand.
    wager: f64,
    /// Whether the hand can still take actions.
    active: bool,
    /// Whether this hand may double down.
    allow_double_down: bool,
    /// Settled outcome, `None` until the hand is resolved.
    result: Option<HandOutcome>,
}

impl PlayerHand {
    /// Creates a new empty hand with the given wager.
    #[must_use]
    pub const fn new(wager: f64, allow_double_down: bool) -> Self {
        Self {
            cards: Vec::new(),
            wager,
            active: true,
            allow_double_down,
            result: None,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 wherever that does not bust, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards, true)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns the wager riding on this hand.
    #[must_use]
    pub const fn wager(&self) -> f64 {
        self.wager
    }

    /// Returns whether the hand can still take actions.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns whether this hand may double down.
    #[must_use]
    pub const fn can_double_down(&self) -> bool {
        self.allow_double_down
    }

    /// Returns the settled outcome, or `None` while the hand is unresolved.
    #[must_use]
    pub const fn result(&self) -> Option<HandOutcome> {
        self.result
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the second card (for splitting).
    pub(crate) fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }

    /// Replaces the wager (double-down adjustment).
    pub(crate) const fn set_wager(&mut self, wager: f64) {
        self.wager = wager;
    }

    /// Clears double-down eligibility.
    pub(crate) const fn forbid_double_down(&mut self) {
        self.allow_double_down = false;
    }

    /// Records the outcome and retires the hand.
    pub(crate) const fn resolve(&mut self, outcome: HandOutcome) {
        self.result = Some(outcome);
        self.active = false;
    }
}

/// The dealer's hand.
#[derive(Debug, Clone)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the up card (first card dealt).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Calculates the value of the hand.
    ///
    /// `soft_totals` selects whether aces may drop from 11 to 1 to avoid a
    /// bust; with it disabled every ace counts as 11.
    #[must_use]
    pub fn value(&self, soft_totals: bool) -> u8 {
        evaluate_cards(&self.cards, soft_totals)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
