//! In-memory shoe service.

use alloc::format;
use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::ServiceError;

use super::{NewShoe, ShoeId, ShoeService};

/// A [`ShoeService`] that keeps single-deck shoes in memory.
///
/// Useful offline and for demos. Shuffles are deterministic for a given seed.
///
/// # Example
///
/// ```
/// use bjround::{LocalShoe, ShoeService};
///
/// let mut service = LocalShoe::new(7);
/// let shoe = service.new_shoe().unwrap();
/// let cards = service.draw(&shoe.id, 2).unwrap();
/// assert_eq!(cards.len(), 2);
/// assert_eq!(service.status(&shoe.id).unwrap(), 50);
/// ```
pub struct LocalShoe {
    /// Cards per shoe; the top of the shoe is the end of the vector.
    shoes: HashMap<ShoeId, Vec<Card>>,
    next_id: u32,
    rng: ChaCha8Rng,
}

impl LocalShoe {
    /// Creates an empty service with the given shuffle seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            shoes: HashMap::new(),
            next_id: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Builds a full deck and shuffles it.
    fn fresh_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Replaces the contents of a shoe so that cards come out in `draws` order.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe is unknown.
    pub fn stack(&mut self, id: &ShoeId, draws: &[Card]) -> Result<(), ServiceError> {
        let cards = self.shoes.get_mut(id).ok_or(ServiceError::UnknownShoe)?;
        cards.clear();
        cards.extend(draws.iter().rev().cloned());
        Ok(())
    }
}

impl ShoeService for LocalShoe {
    fn new_shoe(&mut self) -> Result<NewShoe, ServiceError> {
        let id = ShoeId::new(format!("local-{}", self.next_id));
        self.next_id += 1;

        let cards = Self::fresh_deck(&mut self.rng);
        let cards_remaining = cards.len();
        self.shoes.insert(id.clone(), cards);

        Ok(NewShoe {
            id,
            cards_remaining,
        })
    }

    fn shuffle(&mut self, id: &ShoeId) -> Result<usize, ServiceError> {
        let cards = self.shoes.get_mut(id).ok_or(ServiceError::UnknownShoe)?;
        *cards = Self::fresh_deck(&mut self.rng);
        Ok(cards.len())
    }

    fn status(&mut self, id: &ShoeId) -> Result<usize, ServiceError> {
        self.shoes
            .get(id)
            .map(Vec::len)
            .ok_or(ServiceError::UnknownShoe)
    }

    fn draw(&mut self, id: &ShoeId, count: usize) -> Result<Vec<Card>, ServiceError> {
        let cards = self.shoes.get_mut(id).ok_or(ServiceError::UnknownShoe)?;
        if cards.len() < count {
            return Err(ServiceError::NotEnoughCards);
        }

        let mut drawn = cards.split_off(cards.len() - count);
        drawn.reverse();
        Ok(drawn)
    }
}
