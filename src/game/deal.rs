use crate::error::{DealError, DrawError};
use crate::shoe::ShoeService;

use super::{Game, RoundState};

/// Cards dealt at the start of a round: two to the player, two to the dealer.
const INITIAL_CARDS: usize = 4;

impl<S: ShoeService> Game<S> {
    /// Deals the opening cards in order: player, player, dealer, dealer.
    fn deal_initial(&mut self) -> Result<(), DrawError> {
        let mut cards = self.draw(INITIAL_CARDS)?.into_iter();

        for card in cards.by_ref().take(2) {
            self.player.add_card(card);
        }
        for card in cards {
            self.dealer.add_card(card);
        }

        self.state = RoundState::Dealt;
        log::debug!(
            "dealt player {} against dealer up card {:?}",
            self.player.value(),
            self.dealer.up_card().map(|c| c.rank)
        );
        Ok(())
    }

    /// Starts a new game: reshuffles the shoe, resets the composition
    /// estimate to the baseline and deals a fresh round.
    ///
    /// The score board is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if a shoe service call fails or the shoe is short of
    /// cards even after the shuffle. The game is left `Idle` in both cases.
    pub fn start_new_game(&mut self) -> Result<(), DealError> {
        self.clear_round();
        self.tracker.reset(self.options.baseline);
        self.shuffle_shoe()?;
        log::info!("starting new game");

        self.deal_initial()?;
        Ok(())
    }

    /// Deals the next round from the current shoe.
    ///
    /// When the shoe is short the deal is abandoned: the shoe is reshuffled,
    /// the table stays empty and `Idle`, and the deal is not retried.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] if the shoe had to be
    /// reshuffled, or [`DealError::ServiceUnavailable`] if a shoe service call
    /// fails.
    pub fn new_deal(&mut self) -> Result<(), DealError> {
        self.clear_round();

        match self.deal_initial() {
            Ok(()) => Ok(()),
            Err(err @ DrawError::InsufficientCards { .. }) => {
                log::info!("shoe exhausted, reshuffling");
                self.shuffle_shoe()?;
                Err(err.into())
            }
            Err(err) => Err(err.into()),
        }
    }
}
