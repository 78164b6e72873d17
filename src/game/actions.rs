use crate::card::Card;
use crate::error::ActionError;
use crate::result::RoundResult;
use crate::shoe::ShoeService;

use super::{Event, Game, RoundState};

impl<S: ShoeService> Game<S> {
    /// Player action: Hit (draw a card).
    ///
    /// The hit that first takes the hand over 21 raises
    /// [`Event::PlayerBusted`]; the round is settled when the player stands.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::IllegalAction`] unless the round is dealt and
    /// unresolved, or a shoe error if the card cannot be drawn. On error the
    /// hand is unchanged.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if !matches!(self.state, RoundState::Dealt | RoundState::PlayerActing)
            || self.player.is_empty()
        {
            return Err(ActionError::IllegalAction);
        }

        let card = self.draw_one()?;
        let before = self.player.value();
        self.player.add_card(card.clone());
        self.state = RoundState::PlayerActing;

        let score = self.player.value();
        if before <= 21 && score > 21 {
            log::debug!("player busts with {score}");
            self.events.push(Event::PlayerBusted { score });
        }

        Ok(card)
    }

    /// Player action: Stand (reveal the hole card and let the dealer play).
    ///
    /// Returns the round result, which is already counted on the score board.
    /// If a draw fails during the dealer's turn the round stays in
    /// [`RoundState::DealerActing`] with the cards drawn so far; calling
    /// `stand` again resumes from that hand.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::IllegalAction`] if there is no hand or the round
    /// is already resolved, or a shoe error if the dealer cannot draw.
    pub fn stand(&mut self) -> Result<RoundResult, ActionError> {
        let can_stand = matches!(
            self.state,
            RoundState::Dealt | RoundState::PlayerActing | RoundState::DealerActing
        );
        if !can_stand || self.player.is_empty() {
            return Err(ActionError::IllegalAction);
        }

        self.state = RoundState::DealerActing;
        self.dealer.reveal_hole();

        self.dealer_play()?;

        Ok(self.settle())
    }
}
