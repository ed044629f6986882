//! Hand outcome types.

/// Settled outcome of a single player hand.
///
/// An unresolved hand carries no outcome (`Option::None` on
/// [`PlayerHand::result`](crate::hand::PlayerHand::result)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandOutcome {
    /// Two-card 21 against a dealer without one; pays 1.5x the wager.
    Blackjack,
    /// Tie, or both sides bust; the wager is returned.
    Push,
    /// Hand went over 21 while the dealer did not; loses the wager.
    Bust,
    /// Dealer busted or the hand outscored the dealer; pays the wager.
    Won,
    /// Dealer outscored the hand; loses the wager.
    Lost,
}
