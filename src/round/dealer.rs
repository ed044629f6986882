use crate::error::RoundError;
use crate::result::HandOutcome;

use super::Round;

impl Round {
    /// Returns the dealer's total under the round's soft-total policy.
    #[must_use]
    pub fn dealer_hand_value(&self) -> u8 {
        self.dealer.value(self.options.dealer_soft_total)
    }

    /// Player action: Stand (settle the hand against the dealer).
    ///
    /// The dealer first draws until reaching at least the stopping total,
    /// then exactly one outcome is recorded and its payout added to
    /// [`Round::wager_earned`]:
    ///
    /// - blackjack: two-card 21 against a dealer without one, pays 1.5x;
    /// - push: equal totals, or both sides bust;
    /// - bust: only the hand is over 21, loses the wager;
    /// - won: the dealer busts or the hand scores higher, pays the wager;
    /// - lost: the dealer scores higher, loses the wager.
    ///
    /// Standing an already-resolved hand is a no-op, so a forced stand
    /// followed by an explicit one never settles twice.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand index is out of range or the deck is
    /// exhausted during the dealer's draws.
    pub fn stand(&mut self, hand_idx: usize) -> Result<(), RoundError> {
        if !self.hand(hand_idx)?.is_active() {
            return Ok(());
        }

        // Dealer draws up to the stopping total (default 17).
        while self.dealer_hand_value() < self.options.dealer_min {
            let card = self.draw()?;
            self.dealer.add_card(card);
        }

        let dealer_value = self.dealer_hand_value();
        let dealer_natural = dealer_value == 21 && self.dealer.len() == 2;

        let hand = &self.players[hand_idx];
        let player_value = hand.value();
        let wager = hand.wager();

        let (outcome, delta) = if player_value == 21 && hand.len() == 2 && !dealer_natural {
            (HandOutcome::Blackjack, 1.5 * wager)
        } else if player_value == dealer_value || (player_value > 21 && dealer_value > 21) {
            (HandOutcome::Push, 0.0)
        } else if player_value > 21 {
            (HandOutcome::Bust, -wager)
        } else if dealer_value > 21 || player_value > dealer_value {
            (HandOutcome::Won, wager)
        } else {
            (HandOutcome::Lost, -wager)
        };

        self.wager_earned += delta;
        self.players[hand_idx].resolve(outcome);

        Ok(())
    }
}
