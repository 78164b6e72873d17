//! A single-player blackjack round engine with optional `no_std` support.
//!
//! Cards come from an external shoe service reached through the
//! [`ShoeService`] trait. The crate provides a [`Game`] type that runs the
//! round flow (deal, hit, stand, dealer play, resolution), mirrors the shoe
//! composition, and keeps a session [`ScoreBoard`].
//!
//! # Example
//!
//! ```no_run
//! use bjround::{Game, GameOptions, LocalShoe};
//!
//! let mut game = Game::new(GameOptions::default(), LocalShoe::new(42));
//! game.start_new_game().unwrap();
//! let result = game.stand().unwrap();
//! let _ = result.outcome;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod rules;
pub mod shoe;

// Re-export main types
pub use card::{ACES_PER_DECK, Card, DECK_SIZE, Suit, TENS_PER_DECK};
pub use error::{ActionError, DealError, DrawError, ReshuffleError, ServiceError};
pub use game::{CardFace, Event, Game, RoundState, Snapshot};
pub use hand::{DealerHand, Hand, score};
pub use options::GameOptions;
pub use result::{Outcome, RoundResult, ScoreBoard, resolve};
pub use rules::DealerPolicy;
pub use shoe::local::LocalShoe;
pub use shoe::{NewShoe, ShoeComposition, ShoeId, ShoeService, ShoeTracker};
