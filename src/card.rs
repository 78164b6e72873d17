//! Card types and deck constants.

use alloc::string::String;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];
}

/// A playing card as handed out by the shoe service.
///
/// Cards are immutable once drawn. The image reference is carried through
/// untouched for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// Image reference supplied by the shoe service, if any.
    pub image: Option<String>,
}

impl Card {
    /// Creates a new card without an image reference.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but score as zero.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            image: None,
        }
    }

    /// Attaches an image reference to the card.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }

    /// Returns whether the card is ten-valued (10, Jack, Queen or King).
    #[must_use]
    pub const fn is_ten_valued(&self) -> bool {
        self.rank >= 10
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of aces per deck.
pub const ACES_PER_DECK: usize = 4;

/// Number of ten-valued cards (10, J, Q, K) per deck.
pub const TENS_PER_DECK: usize = 16;
