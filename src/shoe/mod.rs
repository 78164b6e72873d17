//! Shoe access and composition tracking.
//!
//! The authoritative shoe lives in an external service reached through
//! [`ShoeService`]. [`ShoeTracker`] is the only caller of that service; it
//! keeps a local [`ShoeComposition`] mirror for display and exhaustion checks.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::{ACES_PER_DECK, Card, DECK_SIZE, TENS_PER_DECK};
use crate::error::{DrawError, ServiceError};

pub mod local;

/// Identifier of a shoe held by the service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShoeId(String);

impl ShoeId {
    /// Wraps a service-issued identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShoeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Response to [`ShoeService::new_shoe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShoe {
    /// Identifier of the created shoe.
    pub id: ShoeId,
    /// Cards in the new shoe.
    pub cards_remaining: usize,
}

/// The narrow interface the engine consumes from the external shoe service.
///
/// Every call may fail; the engine surfaces failures as
/// `ServiceUnavailable` without corrupting resolved state.
pub trait ShoeService {
    /// Creates a new shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached.
    fn new_shoe(&mut self) -> Result<NewShoe, ServiceError>;

    /// Returns every card to the shoe and shuffles it.
    ///
    /// Returns the number of cards in the shoe afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached or the shoe is unknown.
    fn shuffle(&mut self, id: &ShoeId) -> Result<usize, ServiceError>;

    /// Returns the number of cards remaining in the shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached or the shoe is unknown.
    fn status(&mut self, id: &ShoeId) -> Result<usize, ServiceError>;

    /// Draws `count` cards from the shoe.
    ///
    /// Implementations must return exactly `count` cards or fail.
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached, the shoe is unknown,
    /// or the shoe holds fewer than `count` cards.
    fn draw(&mut self, id: &ShoeId, count: usize) -> Result<Vec<Card>, ServiceError>;
}

impl<S: ShoeService + ?Sized> ShoeService for &mut S {
    fn new_shoe(&mut self) -> Result<NewShoe, ServiceError> {
        (**self).new_shoe()
    }

    fn shuffle(&mut self, id: &ShoeId) -> Result<usize, ServiceError> {
        (**self).shuffle(id)
    }

    fn status(&mut self, id: &ShoeId) -> Result<usize, ServiceError> {
        (**self).status(id)
    }

    fn draw(&mut self, id: &ShoeId, count: usize) -> Result<Vec<Card>, ServiceError> {
        (**self).draw(id, count)
    }
}

/// Local estimate of what is left in the shoe.
///
/// Not authoritative: the service owns the real count. The ace and
/// ten-valued counters are decremented independently per drawn card and
/// never go below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShoeComposition {
    /// Cards left in the shoe.
    pub cards_remaining: usize,
    /// Aces left in the shoe.
    pub aces_remaining: usize,
    /// Ten-valued cards (10, J, Q, K) left in the shoe.
    pub tens_remaining: usize,
}

impl ShoeComposition {
    /// A full 52-card deck: 4 aces and 16 ten-valued cards.
    pub const FULL_DECK: Self = Self {
        cards_remaining: DECK_SIZE,
        aces_remaining: ACES_PER_DECK,
        tens_remaining: TENS_PER_DECK,
    };

    /// Returns whether the shoe is believed to be empty.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.cards_remaining == 0
    }

    /// Removes drawn cards from the estimate.
    pub fn observe(&mut self, cards: &[Card]) {
        for card in cards {
            self.cards_remaining = self.cards_remaining.saturating_sub(1);
            if card.is_ten_valued() {
                self.tens_remaining = self.tens_remaining.saturating_sub(1);
            }
            if card.is_ace() {
                self.aces_remaining = self.aces_remaining.saturating_sub(1);
            }
        }
    }
}

impl Default for ShoeComposition {
    fn default() -> Self {
        Self::FULL_DECK
    }
}

/// Owns the connection to the shoe service and mirrors its composition.
#[derive(Debug)]
pub struct ShoeTracker<S> {
    service: S,
    shoe: Option<ShoeId>,
    composition: ShoeComposition,
}

impl<S: ShoeService> ShoeTracker<S> {
    /// Creates a tracker over `service` starting from `initial`. No shoe is
    /// created until first use.
    #[must_use]
    pub const fn new(service: S, initial: ShoeComposition) -> Self {
        Self {
            service,
            shoe: None,
            composition: initial,
        }
    }

    /// Returns the current composition estimate.
    #[must_use]
    pub const fn composition(&self) -> ShoeComposition {
        self.composition
    }

    /// Returns whether the shoe is believed to be empty and needs a reshuffle.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.composition.is_exhausted()
    }

    /// Returns the id of the shoe in use, if one has been created.
    #[must_use]
    pub const fn shoe_id(&self) -> Option<&ShoeId> {
        self.shoe.as_ref()
    }

    /// Returns the underlying service.
    #[must_use]
    pub const fn service(&self) -> &S {
        &self.service
    }

    /// Returns the underlying service mutably.
    pub const fn service_mut(&mut self) -> &mut S {
        &mut self.service
    }

    /// Resets the composition to the given full-shoe baseline.
    pub const fn reset(&mut self, baseline: ShoeComposition) {
        self.composition = baseline;
    }

    /// Removes drawn cards from the composition estimate.
    pub fn observe_draw(&mut self, cards: &[Card]) {
        self.composition.observe(cards);
    }

    fn ensure_shoe(&mut self) -> Result<ShoeId, ServiceError> {
        if let Some(id) = &self.shoe {
            return Ok(id.clone());
        }

        let created = self.service.new_shoe()?;
        log::debug!(
            "created shoe {} with {} cards",
            created.id,
            created.cards_remaining
        );
        self.composition.cards_remaining = created.cards_remaining;
        self.shoe = Some(created.id.clone());
        Ok(created.id)
    }

    /// Asks the service to shuffle the shoe.
    ///
    /// Only `cards_remaining` is refreshed; the ace and ten counters keep
    /// their values until the next [`reset`](Self::reset).
    ///
    /// # Errors
    ///
    /// Returns an error if the service call fails.
    pub fn shuffle(&mut self) -> Result<usize, ServiceError> {
        let id = self.ensure_shoe()?;
        let remaining = self.service.shuffle(&id)?;
        log::debug!("shuffled shoe {id}, {remaining} cards remaining");
        self.composition.cards_remaining = remaining;
        Ok(remaining)
    }

    /// Refreshes `cards_remaining` from the service.
    ///
    /// # Errors
    ///
    /// Returns an error if the service call fails.
    pub fn refresh(&mut self) -> Result<usize, ServiceError> {
        let id = self.ensure_shoe()?;
        let remaining = self.service.status(&id)?;
        self.composition.cards_remaining = remaining;
        Ok(remaining)
    }

    /// Draws exactly `count` cards.
    ///
    /// The remaining count is checked first; when the shoe is short nothing
    /// is drawn and the caller is expected to reshuffle.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InsufficientCards`] if the shoe holds fewer than
    /// `count` cards, or [`DrawError::ServiceUnavailable`] if a service call
    /// fails or hands out fewer cards than asked.
    pub fn request_draw(&mut self, count: usize) -> Result<Vec<Card>, DrawError> {
        let remaining = self.refresh()?;
        if remaining < count {
            log::warn!("shoe has {remaining} cards, {count} requested");
            return Err(DrawError::InsufficientCards {
                requested: count,
                remaining,
            });
        }

        let id = self.ensure_shoe()?;
        let cards = self.service.draw(&id, count)?;
        self.observe_draw(&cards);

        if cards.len() != count {
            log::warn!(
                "shoe {id} returned {} of {count} requested cards",
                cards.len()
            );
            return Err(DrawError::ServiceUnavailable(ServiceError::ShortDraw {
                requested: count,
                returned: cards.len(),
            }));
        }

        log::debug!(
            "drew {count} card(s), {} remaining",
            self.composition.cards_remaining
        );
        Ok(cards)
    }
}
