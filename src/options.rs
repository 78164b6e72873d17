//! Game configuration options.

use crate::rules::DealerPolicy;
use crate::shoe::ShoeComposition;

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::{GameOptions, ShoeComposition};
///
/// let options = GameOptions::default()
///     .with_dealer_stands_at(17)
///     .with_baseline(ShoeComposition::FULL_DECK);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Score at which the dealer stops drawing regardless of the player's score.
    pub dealer_stands_at: u16,
    /// Composition the shoe estimate is reset to on a new game.
    pub baseline: ShoeComposition,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_at: DealerPolicy::STANDARD.stands_at,
            baseline: ShoeComposition::FULL_DECK,
        }
    }
}

impl GameOptions {
    /// Sets the dealer's stand threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_at(18);
    /// assert_eq!(options.dealer_stands_at, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, score: u16) -> Self {
        self.dealer_stands_at = score;
        self
    }

    /// Sets the composition baseline used on a new game.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{GameOptions, ShoeComposition};
    ///
    /// let baseline = ShoeComposition {
    ///     cards_remaining: 104,
    ///     aces_remaining: 8,
    ///     tens_remaining: 32,
    /// };
    /// let options = GameOptions::default().with_baseline(baseline);
    /// assert_eq!(options.baseline.aces_remaining, 8);
    /// ```
    #[must_use]
    pub const fn with_baseline(mut self, baseline: ShoeComposition) -> Self {
        self.baseline = baseline;
        self
    }

    /// Returns the dealer policy these options describe.
    #[must_use]
    pub const fn dealer_policy(&self) -> DealerPolicy {
        DealerPolicy::new(self.dealer_stands_at)
    }
}
