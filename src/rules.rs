//! Dealer drawing policy.

/// Decides whether the dealer takes another card.
///
/// The dealer draws while their score is below the stand threshold *and*
/// below the player's score. A dealer already ahead of the player stops even
/// under 17.
///
/// # Example
///
/// ```
/// use bjround::DealerPolicy;
///
/// let policy = DealerPolicy::default();
/// assert!(policy.should_draw(16, 18));
/// assert!(!policy.should_draw(18, 16));
/// assert!(!policy.should_draw(17, 17));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DealerPolicy {
    /// The dealer never draws at or above this score.
    pub stands_at: u16,
}

impl DealerPolicy {
    /// Standard threshold: the dealer stands on 17.
    pub const STANDARD: Self = Self { stands_at: 17 };

    /// Creates a policy with the given stand threshold.
    #[must_use]
    pub const fn new(stands_at: u16) -> Self {
        Self { stands_at }
    }

    /// Returns whether the dealer should draw another card.
    #[must_use]
    pub const fn should_draw(&self, dealer_score: u16, player_score: u16) -> bool {
        dealer_score < self.stands_at && dealer_score < player_score
    }
}

impl Default for DealerPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}
