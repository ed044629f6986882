use crate::error::RoundError;
use crate::hand::PlayerHand;

use super::Round;

impl Round {
    /// Player action: Hit (draw a card).
    ///
    /// The dealer plays interleaved with player hits: whenever the dealer's
    /// total is below the stopping total, the dealer draws one card here as
    /// well. A hit that busts the hand force-stands it, and the first hit of
    /// the round retires double-down for the hand and split for the round.
    ///
    /// Hitting an already-resolved hand draws no card for the player but
    /// still runs the dealer check and the flag cleanup.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand index is out of range or the deck is
    /// exhausted.
    pub fn hit(&mut self, hand_idx: usize) -> Result<(), RoundError> {
        if hand_idx >= self.players.len() {
            return Err(RoundError::HandNotFound(hand_idx));
        }

        if self.players[hand_idx].is_active() {
            let card = self.draw()?;
            self.players[hand_idx].add_card(card);
        }

        if self.dealer_hand_value() < self.options.dealer_min {
            let card = self.draw()?;
            self.dealer.add_card(card);
        }

        if self.players[hand_idx].is_bust() {
            self.stand(hand_idx)?;
        }

        // First hit: no more double-down on this hand, no more split this round.
        self.players[hand_idx].forbid_double_down();
        self.split_available = false;

        Ok(())
    }

    /// Player action: Split (divide the two-card hand into two hands).
    ///
    /// Permitted once per round, only while the single initial hand is still
    /// active and the wager ceiling covers twice its wager. The second card
    /// moves into a new hand, each hand draws one fresh card, and the wager
    /// is copied. Double-down eligibility of both resulting hands combines
    /// [`RoundOptions::double_after_split`](crate::RoundOptions) with the
    /// pre-split eligibility.
    ///
    /// The split permission is consumed even when the attempt fails; see
    /// [`Round::split_allowed`].
    ///
    /// Returns whether the split occurred.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is exhausted while completing the hands.
    pub fn split(&mut self) -> Result<bool, RoundError> {
        let permitted = self.split_available
            && self.players.len() == 1
            && self.players[0].is_active()
            && self.options.max_wager >= self.players[0].wager() * 2.0;

        // One attempt per round, successful or not.
        self.split_available = false;

        if !permitted {
            return Ok(false);
        }

        let allow_double_down = if self.options.double_after_split
            && self.players[0].can_double_down()
        {
            true
        } else {
            self.players[0].forbid_double_down();
            false
        };

        let Some(card) = self.players[0].take_split_card() else {
            return Ok(false);
        };

        let mut second = PlayerHand::new(self.players[0].wager(), allow_double_down);
        second.add_card(card);

        let card = self.draw()?;
        self.players[0].add_card(card);
        let card = self.draw()?;
        second.add_card(card);

        self.players.push(second);

        Ok(true)
    }

    /// Player action: Double down (raise the wager, take one card, stand).
    ///
    /// The required total is the sum of every hand's current wager plus this
    /// hand's wager once more. If the ceiling covers it the wager doubles;
    /// otherwise the wager is raised to exactly the ceiling (a partial
    /// double). Either way the hand then receives exactly one more card and
    /// is stood.
    ///
    /// Returns whether the double-down occurred.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand index is out of range or the deck is
    /// exhausted.
    pub fn double_down(&mut self, hand_idx: usize) -> Result<bool, RoundError> {
        if hand_idx >= self.players.len() {
            return Err(RoundError::HandNotFound(hand_idx));
        }

        let required: f64 = self.players.iter().map(PlayerHand::wager).sum::<f64>()
            + self.players[hand_idx].wager();

        let hand = &mut self.players[hand_idx];
        if !(hand.can_double_down() && hand.is_active()) {
            return Ok(false);
        }

        if self.options.max_wager >= required {
            hand.set_wager(hand.wager() * 2.0);
        } else {
            // Partial double: raise to the ceiling itself.
            hand.set_wager(self.options.max_wager);
        }

        self.hit(hand_idx)?;
        self.stand(hand_idx)?;

        Ok(true)
    }

    /// Checks for a natural blackjack and settles it on the spot.
    ///
    /// If the hand holds exactly two cards totaling 21 it is stood (and so
    /// resolved against the dealer) immediately. Invoked on the initial hand
    /// right after the deal.
    ///
    /// Returns whether the hand was a natural.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand index is out of range or the deck is
    /// exhausted during the dealer's draws.
    pub fn verify_blackjack(&mut self, hand_idx: usize) -> Result<bool, RoundError> {
        let hand = self.hand(hand_idx)?;
        if hand.value() == 21 && hand.len() == 2 {
            self.stand(hand_idx)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
