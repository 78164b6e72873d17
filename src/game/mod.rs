//! Round engine and state management.

use core::mem;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{DrawError, ReshuffleError, ServiceError};
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::result::{RoundResult, ScoreBoard};
use crate::shoe::{ShoeComposition, ShoeService, ShoeTracker};

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::{CardFace, Event, RoundState, Snapshot};

/// A single-player blackjack round engine.
///
/// The game owns both hands, the shoe tracker (and through it the shoe
/// service), and the session score board. Commands take `&mut self`, so a
/// command in flight excludes every other; the [`RoundState`] guard rejects
/// commands issued in the wrong phase.
///
/// Conditions worth showing the user are queued as [`Event`]s. The queue
/// holds one round's worth: events not drained before the next deal are
/// discarded when that deal starts.
pub struct Game<S> {
    /// Game options.
    pub options: GameOptions,
    /// Shoe access and composition mirror.
    tracker: ShoeTracker<S>,
    /// Current round state.
    state: RoundState,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: DealerHand,
    /// Session counters.
    scores: ScoreBoard,
    /// Result of the current round once resolved.
    result: Option<RoundResult>,
    /// Conditions not yet drained by the caller.
    events: Vec<Event>,
}

impl<S: ShoeService> Game<S> {
    /// Creates a new game over the given shoe service.
    ///
    /// The service is not contacted until the first command.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Game, GameOptions, LocalShoe, RoundState};
    ///
    /// let game = Game::new(GameOptions::default(), LocalShoe::new(42));
    /// assert_eq!(game.state(), RoundState::Idle);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, service: S) -> Self {
        Self {
            options,
            tracker: ShoeTracker::new(service, options.baseline),
            state: RoundState::Idle,
            player: Hand::new(),
            dealer: DealerHand::new(),
            scores: ScoreBoard::new(),
            result: None,
            events: Vec::new(),
        }
    }

    /// Returns the current round state.
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    ///
    /// This exposes the hole card; use [`snapshot`](Self::snapshot) for the
    /// table view.
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the player's current score.
    pub fn player_score(&self) -> u16 {
        self.player.value()
    }

    /// Returns the dealer's score, or `None` while the hole card is hidden.
    pub fn dealer_score(&self) -> Option<u16> {
        self.dealer
            .is_hole_revealed()
            .then(|| self.dealer.value())
    }

    /// Returns whether the player's hand is over 21.
    pub fn player_busted(&self) -> bool {
        self.player.is_bust()
    }

    /// Returns the shoe composition estimate.
    pub const fn composition(&self) -> ShoeComposition {
        self.tracker.composition()
    }

    /// Returns the session score board.
    pub const fn score_board(&self) -> ScoreBoard {
        self.scores
    }

    /// Returns the result of the current round once resolved.
    pub const fn last_result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Returns the shoe service.
    pub const fn shoe(&self) -> &S {
        self.tracker.service()
    }

    /// Returns the shoe service mutably.
    pub const fn shoe_mut(&mut self) -> &mut S {
        self.tracker.service_mut()
    }

    /// Builds a table view for the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        let hidden = !self.dealer.is_hole_revealed();
        let dealer_hand = self
            .dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if hidden && index == DealerHand::HOLE_INDEX {
                    CardFace::Down
                } else {
                    CardFace::Up(card.clone())
                }
            })
            .collect();

        Snapshot {
            phase: self.state,
            player_hand: self.player.cards().to_vec(),
            dealer_hand,
            player_score: self.player_score(),
            dealer_score: self.dealer_score(),
            player_busted: self.player_busted(),
            shoe: self.composition(),
            score_board: self.scores,
            result: self.result,
        }
    }

    /// Returns and clears the queued events.
    pub fn drain_events(&mut self) -> Vec<Event> {
        mem::take(&mut self.events)
    }

    /// Zeroes the score board. Hands and round state are left alone.
    pub const fn reset_stats(&mut self) {
        self.scores.reset();
    }

    /// Reshuffles the shoe.
    ///
    /// Hands, round state and the ace/ten counters are not touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe service call fails.
    pub fn reshuffle(&mut self) -> Result<usize, ReshuffleError> {
        self.shuffle_shoe().map_err(ReshuffleError::from)
    }

    fn shuffle_shoe(&mut self) -> Result<usize, ServiceError> {
        match self.tracker.shuffle() {
            Ok(cards_remaining) => {
                self.events.push(Event::Reshuffled { cards_remaining });
                Ok(cards_remaining)
            }
            Err(err) => {
                log::warn!("shuffle failed: {err}");
                self.events.push(Event::ServiceUnavailable(err));
                Err(err)
            }
        }
    }

    /// Draws cards through the tracker, queueing an event on failure.
    fn draw(&mut self, count: usize) -> Result<Vec<Card>, DrawError> {
        self.tracker.request_draw(count).inspect_err(|err| {
            self.events.push(match *err {
                DrawError::ServiceUnavailable(err) => Event::ServiceUnavailable(err),
                DrawError::InsufficientCards {
                    requested,
                    remaining,
                } => Event::InsufficientCards {
                    requested,
                    remaining,
                },
            });
        })
    }

    /// Draws a single card.
    fn draw_one(&mut self) -> Result<Card, DrawError> {
        self.draw(1)?
            .into_iter()
            .next()
            .ok_or(DrawError::ServiceUnavailable(ServiceError::ShortDraw {
                requested: 1,
                returned: 0,
            }))
    }

    /// Clears both hands, the round result and any undrained events,
    /// returning to `Idle`.
    fn clear_round(&mut self) {
        if !self.events.is_empty() {
            log::trace!("discarding {} undrained event(s)", self.events.len());
            self.events.clear();
        }
        self.player.clear();
        self.dealer.clear();
        self.result = None;
        self.state = RoundState::Idle;
    }
}
