//! Round configuration options.

/// Configuration options for one round of blackjack.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::RoundOptions;
///
/// let options = RoundOptions::default()
///     .with_max_wager(100.0)
///     .with_dealer_min(16)
///     .with_double_after_split(false);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOptions {
    /// Ceiling for the sum of wagers across all hands.
    pub max_wager: f64,
    /// Total the dealer must reach before stopping (typically 17).
    pub dealer_min: u8,
    /// Whether the dealer's stopping total counts aces softly.
    pub dealer_soft_total: bool,
    /// Whether splitting is allowed.
    pub allow_split: bool,
    /// Whether doubling down is allowed.
    pub allow_double_down: bool,
    /// Whether doubling down is allowed after a split.
    pub double_after_split: bool,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            max_wager: 1.0,
            dealer_min: 17,
            dealer_soft_total: true,
            allow_split: true,
            allow_double_down: true,
            double_after_split: true,
        }
    }
}

impl RoundOptions {
    /// Sets the wager ceiling.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_max_wager(50.0);
    /// assert_eq!(options.max_wager, 50.0);
    /// ```
    #[must_use]
    pub const fn with_max_wager(mut self, max_wager: f64) -> Self {
        self.max_wager = max_wager;
        self
    }

    /// Sets the dealer's stopping total.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_dealer_min(16);
    /// assert_eq!(options.dealer_min, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_min(mut self, dealer_min: u8) -> Self {
        self.dealer_min = dealer_min;
        self
    }

    /// Sets whether the dealer's stopping total counts aces softly.
    #[must_use]
    pub const fn with_dealer_soft_total(mut self, soft: bool) -> Self {
        self.dealer_soft_total = soft;
        self
    }

    /// Sets whether splitting is allowed.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_allow_split(false);
    /// assert!(!options.allow_split);
    /// ```
    #[must_use]
    pub const fn with_allow_split(mut self, allowed: bool) -> Self {
        self.allow_split = allowed;
        self
    }

    /// Sets whether doubling down is allowed.
    #[must_use]
    pub const fn with_allow_double_down(mut self, allowed: bool) -> Self {
        self.allow_double_down = allowed;
        self
    }

    /// Sets whether doubling down is allowed after a split.
    #[must_use]
    pub const fn with_double_after_split(mut self, allowed: bool) -> Self {
        self.double_after_split = allowed;
        self
    }
}
