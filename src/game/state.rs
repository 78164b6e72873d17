//! Round state, snapshot and event types.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ServiceError;
use crate::result::{RoundResult, ScoreBoard};
use crate::shoe::ShoeComposition;

/// Phase of the current round.
///
/// Transitions: `Idle -> Dealt -> PlayerActing -> DealerActing -> Resolved`,
/// with `Dealt -> DealerActing` on an immediate stand. Any phase returns to
/// `Idle` when a new deal starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundState {
    /// No hands on the table.
    #[default]
    Idle,
    /// Initial four cards dealt.
    Dealt,
    /// Player has taken at least one card.
    PlayerActing,
    /// Hole card revealed; dealer is drawing.
    DealerActing,
    /// Round finished and counted.
    Resolved,
}

/// A dealer card as the table shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardFace {
    /// The card is visible.
    Up(Card),
    /// The hole card before the reveal.
    Down,
}

/// Read-only view of the table for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Current phase.
    pub phase: RoundState,
    /// Player cards in draw order.
    pub player_hand: Vec<Card>,
    /// Dealer cards with the hole card face down until revealed.
    pub dealer_hand: Vec<CardFace>,
    /// Player's hand value.
    pub player_score: u16,
    /// Dealer's hand value, `None` while the hole card is hidden.
    pub dealer_score: Option<u16>,
    /// Whether the player's hand is over 21.
    pub player_busted: bool,
    /// Local estimate of the shoe.
    pub shoe: ShoeComposition,
    /// Session counters.
    pub score_board: ScoreBoard,
    /// Result of the round once resolved.
    pub result: Option<RoundResult>,
}

/// Conditions raised by commands, queued until drained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The player's hand went over 21.
    PlayerBusted {
        /// The busted score.
        score: u16,
    },
    /// The round was resolved and counted.
    RoundResolved(RoundResult),
    /// A call to the shoe service failed.
    ServiceUnavailable(ServiceError),
    /// A draw was refused because the shoe is short.
    InsufficientCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards the service reported as remaining.
        remaining: usize,
    },
    /// The shoe was reshuffled.
    Reshuffled {
        /// Cards in the shoe after the shuffle.
        cards_remaining: usize,
    },
}
