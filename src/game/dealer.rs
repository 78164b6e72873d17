use crate::error::DrawError;
use crate::result::RoundResult;
use crate::shoe::ShoeService;

use super::{Event, Game, RoundState};

impl<S: ShoeService> Game<S> {
    /// Dealer draws from the current dealer hand until the policy says stop.
    ///
    /// Cards already drawn stay in the hand if a draw fails.
    pub(super) fn dealer_play(&mut self) -> Result<(), DrawError> {
        let policy = self.options.dealer_policy();
        let player_score = self.player.value();

        while policy.should_draw(self.dealer.value(), player_score) {
            let card = self.draw_one()?;
            self.dealer.add_card(card);
        }

        log::debug!(
            "dealer stands on {} with {} card(s)",
            self.dealer.value(),
            self.dealer.len()
        );
        Ok(())
    }

    /// Resolves the round and counts it. Only reachable once per round since
    /// `stand` rejects a resolved round.
    pub(super) fn settle(&mut self) -> RoundResult {
        let result = RoundResult::from_scores(self.player.value(), self.dealer.value());

        self.scores.record(result.outcome);
        self.result = Some(result);
        self.state = RoundState::Resolved;
        self.events.push(Event::RoundResolved(result));

        log::info!(
            "round resolved: {:?} (player {}, dealer {})",
            result.outcome,
            result.player_score,
            result.dealer_score
        );
        result
    }
}
