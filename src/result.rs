//! Round outcome resolution and the session score board.

/// Outcome of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher score).
    PlayerWins,
    /// Dealer wins (player busts or dealer has the higher score).
    DealerWins,
    /// Push (tie).
    Push,
}

/// Resolves a round from the final scores.
///
/// A player bust loses even when the dealer also busts.
///
/// # Example
///
/// ```
/// use bjround::{Outcome, resolve};
///
/// assert_eq!(resolve(22, 20), Outcome::DealerWins);
/// assert_eq!(resolve(20, 22), Outcome::PlayerWins);
/// assert_eq!(resolve(20, 20), Outcome::Push);
/// ```
#[must_use]
pub const fn resolve(player_score: u16, dealer_score: u16) -> Outcome {
    if player_score > 21 {
        Outcome::DealerWins
    } else if dealer_score > 21 || player_score > dealer_score {
        Outcome::PlayerWins
    } else if dealer_score > player_score {
        Outcome::DealerWins
    } else {
        Outcome::Push
    }
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_score: u16,
    /// The dealer's final hand value.
    pub dealer_score: u16,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl RoundResult {
    /// Builds the result for the given final scores.
    #[must_use]
    pub const fn from_scores(player_score: u16, dealer_score: u16) -> Self {
        Self {
            outcome: resolve(player_score, dealer_score),
            player_score,
            dealer_score,
            player_bust: player_score > 21,
            dealer_bust: dealer_score > 21,
        }
    }
}

/// Cumulative win/loss/push counters for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScoreBoard {
    /// Rounds won by the player.
    pub player_wins: u32,
    /// Rounds won by the dealer.
    pub dealer_wins: u32,
    /// Tied rounds.
    pub pushes: u32,
}

impl ScoreBoard {
    /// Creates an empty score board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            player_wins: 0,
            dealer_wins: 0,
            pushes: 0,
        }
    }

    /// Counts one resolved round. Must be called exactly once per round.
    pub const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWins => self.player_wins += 1,
            Outcome::DealerWins => self.dealer_wins += 1,
            Outcome::Push => self.pushes += 1,
        }
    }

    /// Total number of rounds counted.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.player_wins + self.dealer_wins + self.pushes
    }

    /// Zeroes every counter.
    pub const fn reset(&mut self) {
        *self = Self::new();
    }
}
