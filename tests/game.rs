//! Round engine integration tests.

use bjround::{
    ActionError, Card, CardFace, DealError, Event, Game, GameOptions, LocalShoe, NewShoe, Outcome,
    ReshuffleError, RoundState, ServiceError, ShoeComposition, ShoeId, ShoeService, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Shoe service that hands out a fixed sequence of cards.
///
/// Shuffling keeps the remaining script, so tests control every draw.
#[derive(Default)]
struct ScriptedShoe {
    /// Remaining cards; the next draw is the end of the vector.
    cards: Vec<Card>,
    shuffles: usize,
    /// Successful draw calls allowed before the service goes down.
    draws_before_outage: Option<usize>,
    offline: bool,
    /// Hand out one card fewer than asked.
    short_draws: bool,
}

impl ScriptedShoe {
    fn new(draws: &[Card]) -> Self {
        let mut shoe = Self::default();
        shoe.load(draws);
        shoe
    }

    fn load(&mut self, draws: &[Card]) {
        self.cards = draws.iter().rev().cloned().collect();
    }

    fn check_online(&self) -> Result<(), ServiceError> {
        if self.offline {
            Err(ServiceError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl ShoeService for ScriptedShoe {
    fn new_shoe(&mut self) -> Result<NewShoe, ServiceError> {
        self.check_online()?;
        Ok(NewShoe {
            id: ShoeId::new("scripted"),
            cards_remaining: self.cards.len(),
        })
    }

    fn shuffle(&mut self, _id: &ShoeId) -> Result<usize, ServiceError> {
        self.check_online()?;
        self.shuffles += 1;
        Ok(self.cards.len())
    }

    fn status(&mut self, _id: &ShoeId) -> Result<usize, ServiceError> {
        self.check_online()?;
        Ok(self.cards.len())
    }

    fn draw(&mut self, _id: &ShoeId, count: usize) -> Result<Vec<Card>, ServiceError> {
        self.check_online()?;
        match &mut self.draws_before_outage {
            Some(0) => return Err(ServiceError::Unavailable),
            Some(left) => *left -= 1,
            None => {}
        }
        if self.cards.len() < count {
            return Err(ServiceError::NotEnoughCards);
        }
        let handed = if self.short_draws {
            count.saturating_sub(1)
        } else {
            count
        };
        Ok((0..handed).filter_map(|_| self.cards.pop()).collect())
    }
}

fn game_with(draws: &[Card]) -> Game<ScriptedShoe> {
    Game::new(GameOptions::default(), ScriptedShoe::new(draws))
}

#[test]
fn start_new_game_deals_in_fixed_order() {
    let mut game = game_with(&[
        card(Suit::Hearts, 1),   // player
        card(Suit::Clubs, 13),   // player
        card(Suit::Spades, 9),   // dealer up
        card(Suit::Diamonds, 5), // dealer hole
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 3),
    ]);

    game.start_new_game().unwrap();

    assert_eq!(game.state(), RoundState::Dealt);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.player_score(), 21);
    assert_eq!(game.dealer_hand().value(), 14);
    assert_eq!(game.dealer_score(), None);
    assert_eq!(game.shoe().shuffles, 1);

    let composition = game.composition();
    assert_eq!(composition.cards_remaining, 2);
    assert_eq!(composition.aces_remaining, 3);
    assert_eq!(composition.tens_remaining, 15);
}

#[test]
fn snapshot_hides_hole_card_until_stand() {
    let mut game = game_with(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 9),
        card(Suit::Spades, 8),
        card(Suit::Diamonds, 10),
    ]);
    game.start_new_game().unwrap();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.phase, RoundState::Dealt);
    assert_eq!(snapshot.player_score, 19);
    assert_eq!(snapshot.dealer_score, None);
    assert_eq!(
        snapshot.dealer_hand,
        vec![CardFace::Up(card(Suit::Spades, 8)), CardFace::Down]
    );

    // Dealer 18 vs player 19: policy stops at 17 or more.
    game.stand().unwrap();
    let snapshot = game.snapshot();
    assert_eq!(snapshot.dealer_score, Some(18));
    assert_eq!(snapshot.dealer_hand[1], CardFace::Up(card(Suit::Diamonds, 10)));
    assert_eq!(snapshot.result.map(|r| r.outcome), Some(Outcome::PlayerWins));
}

#[test]
fn basic_round_flow() {
    let mut game = game_with(&[
        card(Suit::Hearts, 8),   // player
        card(Suit::Diamonds, 7), // player
        card(Suit::Clubs, 6),    // dealer up
        card(Suit::Spades, 5),   // dealer hole
        card(Suit::Hearts, 4),   // player hit
        card(Suit::Clubs, 3),    // dealer draw -> 14
        card(Suit::Clubs, 13),   // dealer draw -> 24
    ]);

    game.start_new_game().unwrap();

    let hit = game.hit().unwrap();
    assert_eq!(hit.rank, 4);
    assert_eq!(game.state(), RoundState::PlayerActing);
    assert_eq!(game.player_score(), 19);

    let result = game.stand().unwrap();
    assert_eq!(game.state(), RoundState::Resolved);
    assert_eq!(game.dealer_hand().len(), 4);
    assert_eq!(result.dealer_score, 24);
    assert!(result.dealer_bust);
    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert_eq!(game.score_board().player_wins, 1);
    assert_eq!(game.last_result(), Some(result));
}

#[test]
fn dealer_ahead_of_player_stops_under_17() {
    let mut game = game_with(&[
        card(Suit::Hearts, 10),
        card(Suit::Hearts, 3), // player 13
        card(Suit::Clubs, 10),
        card(Suit::Clubs, 5), // dealer 15
        card(Suit::Spades, 10),
    ]);

    game.start_new_game().unwrap();
    let result = game.stand().unwrap();

    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(game.composition().cards_remaining, 1);
}

#[test]
fn tie_is_a_push() {
    let mut game = game_with(&[
        card(Suit::Hearts, 10),
        card(Suit::Hearts, 7),
        card(Suit::Clubs, 12),
        card(Suit::Clubs, 7),
    ]);

    game.start_new_game().unwrap();
    let result = game.stand().unwrap();

    assert_eq!(result.outcome, Outcome::Push);
    assert_eq!(game.score_board().pushes, 1);
}

#[test]
fn player_bust_is_reported_and_loses() {
    let mut game = game_with(&[
        card(Suit::Hearts, 10),
        card(Suit::Hearts, 6),
        card(Suit::Clubs, 10),
        card(Suit::Clubs, 6),
        card(Suit::Spades, 9), // player hit -> 25
    ]);

    game.start_new_game().unwrap();
    game.drain_events();

    game.hit().unwrap();
    assert!(game.player_busted());
    assert_eq!(game.drain_events(), vec![Event::PlayerBusted { score: 25 }]);

    // Dealer 16 still draws against 25 and busts; the player bust wins for
    // the dealer anyway.
    game.shoe_mut().load(&[card(Suit::Diamonds, 10)]);
    let result = game.stand().unwrap();
    assert!(result.player_bust);
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(game.score_board().dealer_wins, 1);
    assert!(matches!(
        game.drain_events().as_slice(),
        [Event::RoundResolved(r)] if r.outcome == Outcome::DealerWins
    ));
}

#[test]
fn bust_is_reported_once_per_round() {
    let mut game = game_with(&[
        card(Suit::Hearts, 10),
        card(Suit::Hearts, 6),
        card(Suit::Clubs, 10),
        card(Suit::Clubs, 7),
        card(Suit::Spades, 9), // player hit -> 25
        card(Suit::Spades, 2), // player hit -> 27
    ]);

    game.start_new_game().unwrap();
    game.drain_events();

    game.hit().unwrap();
    game.hit().unwrap();
    assert_eq!(game.player_score(), 27);
    assert_eq!(game.drain_events(), vec![Event::PlayerBusted { score: 25 }]);
}

#[test]
fn undrained_events_are_dropped_at_next_deal() {
    let mut game = game_with(&[
        card(Suit::Hearts, 10),
        card(Suit::Hearts, 9),
        card(Suit::Clubs, 10),
        card(Suit::Clubs, 8),
        card(Suit::Spades, 2),
        card(Suit::Spades, 3),
        card(Suit::Spades, 4),
        card(Suit::Spades, 5),
    ]);

    game.start_new_game().unwrap();
    game.stand().unwrap();
    game.new_deal().unwrap();

    assert!(game.drain_events().is_empty());
    assert_eq!(game.score_board().rounds(), 1);
}

#[test]
fn actions_rejected_without_hand() {
    let mut game = game_with(&[]);

    assert_eq!(game.stand().unwrap_err(), ActionError::IllegalAction);
    assert_eq!(game.hit().unwrap_err(), ActionError::IllegalAction);
    assert_eq!(game.state(), RoundState::Idle);
    assert!(game.shoe().cards.is_empty());
}

#[test]
fn actions_rejected_after_resolution() {
    let mut game = game_with(&[
        card(Suit::Hearts, 10),
        card(Suit::Hearts, 9),
        card(Suit::Clubs, 10),
        card(Suit::Clubs, 8),
        card(Suit::Spades, 2),
    ]);

    game.start_new_game().unwrap();
    game.stand().unwrap();

    assert_eq!(game.hit().unwrap_err(), ActionError::IllegalAction);
    assert_eq!(game.stand().unwrap_err(), ActionError::IllegalAction);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.score_board().rounds(), 1);
    assert_eq!(game.composition().cards_remaining, 1);
}

#[test]
fn new_deal_short_shoe_reshuffles_and_stays_idle() {
    let mut game = game_with(&[
        card(Suit::Hearts, 10),
        card(Suit::Hearts, 9),
        card(Suit::Clubs, 10),
        card(Suit::Clubs, 8),
        card(Suit::Spades, 2),
        card(Suit::Spades, 3),
        card(Suit::Spades, 4),
    ]);

    game.start_new_game().unwrap();
    game.stand().unwrap();
    game.drain_events();

    let err = game.new_deal().unwrap_err();
    assert_eq!(
        err,
        DealError::InsufficientCards {
            requested: 4,
            remaining: 3
        }
    );
    assert_eq!(game.state(), RoundState::Idle);
    assert!(game.player_hand().is_empty());
    assert!(game.dealer_hand().is_empty());
    assert_eq!(game.shoe().shuffles, 2);
    assert_eq!(game.shoe().cards.len(), 3);
    assert_eq!(
        game.drain_events(),
        vec![
            Event::InsufficientCards {
                requested: 4,
                remaining: 3
            },
            Event::Reshuffled { cards_remaining: 3 },
        ]
    );
}

#[test]
fn new_deal_keeps_composition_baseline() {
    let mut game = game_with(&[
        card(Suit::Hearts, 1),
        card(Suit::Hearts, 9),
        card(Suit::Clubs, 10),
        card(Suit::Clubs, 8),
        card(Suit::Spades, 1),
        card(Suit::Spades, 13),
        card(Suit::Spades, 4),
        card(Suit::Spades, 5),
    ]);

    game.start_new_game().unwrap();
    game.stand().unwrap();
    game.new_deal().unwrap();

    let composition = game.composition();
    assert_eq!(composition.aces_remaining, 2);
    assert_eq!(composition.tens_remaining, 14);
    assert_eq!(composition.cards_remaining, 0);
    assert_eq!(game.state(), RoundState::Dealt);
    assert_eq!(game.last_result(), None);
}

#[test]
fn hit_with_short_shoe_leaves_hand_unchanged() {
    let mut game = game_with(&[
        card(Suit::Hearts, 5),
        card(Suit::Hearts, 6),
        card(Suit::Clubs, 9),
        card(Suit::Clubs, 7),
    ]);

    game.start_new_game().unwrap();
    assert_eq!(
        game.hit().unwrap_err(),
        ActionError::InsufficientCards {
            requested: 1,
            remaining: 0
        }
    );
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.state(), RoundState::Dealt);

    // Reshuffle and try again.
    game.shoe_mut().load(&[card(Suit::Spades, 10)]);
    assert_eq!(game.reshuffle().unwrap(), 1);
    game.hit().unwrap();
    assert_eq!(game.player_score(), 21);
}

#[test]
fn dealer_outage_leaves_round_unresolved_and_stand_resumes() {
    let mut game = game_with(&[
        card(Suit::Hearts, 10),
        card(Suit::Hearts, 9), // player 19
        card(Suit::Clubs, 5),
        card(Suit::Clubs, 6), // dealer 11
        card(Suit::Spades, 2), // dealer 13
        card(Suit::Spades, 7), // dealer 20
    ]);

    game.start_new_game().unwrap();
    game.shoe_mut().draws_before_outage = Some(1);

    let err = game.stand().unwrap_err();
    assert_eq!(err, ActionError::ServiceUnavailable(ServiceError::Unavailable));
    assert_eq!(game.state(), RoundState::DealerActing);
    assert_eq!(game.dealer_hand().len(), 3);
    assert_eq!(game.score_board().rounds(), 0);
    assert_eq!(game.last_result(), None);
    assert_eq!(game.hit().unwrap_err(), ActionError::IllegalAction);

    game.shoe_mut().draws_before_outage = None;
    let result = game.stand().unwrap();
    assert_eq!(game.dealer_hand().len(), 4);
    assert_eq!(result.dealer_score, 20);
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(game.score_board().rounds(), 1);
}

#[test]
fn offline_service_fails_new_game_without_dealing() {
    let mut game = game_with(&vec![card(Suit::Hearts, 10); 4]);
    game.shoe_mut().offline = true;

    assert_eq!(
        game.start_new_game().unwrap_err(),
        DealError::ServiceUnavailable(ServiceError::Unavailable)
    );
    assert_eq!(game.state(), RoundState::Idle);
    assert!(game.player_hand().is_empty());
    assert_eq!(
        game.reshuffle().unwrap_err(),
        ReshuffleError::ServiceUnavailable(ServiceError::Unavailable)
    );
    assert!(
        game.drain_events()
            .iter()
            .all(|event| matches!(event, Event::ServiceUnavailable(_)))
    );

    game.shoe_mut().offline = false;
    game.start_new_game().unwrap();
    assert_eq!(game.state(), RoundState::Dealt);
}

#[test]
fn short_draw_fails_deal_and_keeps_observed_cards() {
    let mut game = game_with(&[
        card(Suit::Hearts, 1),
        card(Suit::Hearts, 13),
        card(Suit::Clubs, 5),
        card(Suit::Clubs, 8),
        card(Suit::Spades, 2),
        card(Suit::Spades, 3),
    ]);
    game.shoe_mut().short_draws = true;

    assert_eq!(
        game.start_new_game().unwrap_err(),
        DealError::ServiceUnavailable(ServiceError::ShortDraw {
            requested: 4,
            returned: 3
        })
    );
    assert_eq!(game.state(), RoundState::Idle);
    assert!(game.player_hand().is_empty());
    assert!(game.dealer_hand().is_empty());

    // The three cards handed out are gone from the shoe.
    let composition = game.composition();
    assert_eq!(composition.cards_remaining, 3);
    assert_eq!(composition.aces_remaining, 3);
    assert_eq!(composition.tens_remaining, 15);
    assert_eq!(game.shoe().cards.len(), 3);
}

#[test]
fn reset_stats_keeps_round_and_shoe() {
    let mut game = game_with(&[
        card(Suit::Hearts, 10),
        card(Suit::Hearts, 9),
        card(Suit::Clubs, 10),
        card(Suit::Clubs, 7),
        card(Suit::Spades, 2),
        card(Suit::Spades, 3),
        card(Suit::Spades, 4),
        card(Suit::Spades, 5),
    ]);

    game.start_new_game().unwrap();
    game.stand().unwrap();
    game.new_deal().unwrap();
    assert_eq!(game.score_board().player_wins, 1);

    let composition = game.composition();
    game.reset_stats();

    assert_eq!(game.score_board().rounds(), 0);
    assert_eq!(game.composition(), composition);
    assert_eq!(game.state(), RoundState::Dealt);
    assert_eq!(game.player_hand().len(), 2);
}

#[test]
fn custom_baseline_and_threshold() {
    let baseline = ShoeComposition {
        cards_remaining: 104,
        aces_remaining: 8,
        tens_remaining: 32,
    };
    let options = GameOptions::default()
        .with_baseline(baseline)
        .with_dealer_stands_at(19);
    let mut game = Game::new(
        options,
        ScriptedShoe::new(&[
            card(Suit::Hearts, 10),
            card(Suit::Hearts, 10), // player 20
            card(Suit::Clubs, 10),
            card(Suit::Clubs, 8), // dealer 18, draws under 19
            card(Suit::Spades, 1),
        ]),
    );

    game.start_new_game().unwrap();
    assert_eq!(game.composition().aces_remaining, 8);
    assert_eq!(game.composition().tens_remaining, 29);

    let result = game.stand().unwrap();
    assert_eq!(result.dealer_score, 19);
    assert_eq!(result.outcome, Outcome::PlayerWins);
}

#[test]
fn baseline_changed_after_construction_applies_to_new_game() {
    let mut game = game_with(&[
        card(Suit::Hearts, 1),
        card(Suit::Hearts, 13),
        card(Suit::Clubs, 10),
        card(Suit::Clubs, 4),
    ]);
    game.options.baseline = ShoeComposition {
        cards_remaining: 104,
        aces_remaining: 8,
        tens_remaining: 32,
    };

    game.start_new_game().unwrap();

    let dealt: Vec<Card> = game
        .player_hand()
        .cards()
        .iter()
        .chain(game.dealer_hand().cards())
        .cloned()
        .collect();
    let aces_dealt = dealt.iter().filter(|c| c.is_ace()).count();
    let tens_dealt = dealt.iter().filter(|c| c.is_ten_valued()).count();

    let composition = game.composition();
    assert_eq!(composition.aces_remaining + aces_dealt, 8);
    assert_eq!(composition.tens_remaining + tens_dealt, 32);
}

#[test]
fn local_shoe_plays_full_rounds() {
    let mut game = Game::new(GameOptions::default(), LocalShoe::new(42));
    game.start_new_game().unwrap();

    for _ in 0..5 {
        if game.player_score() < 12 && game.hit().is_err() {
            game.reshuffle().unwrap();
            game.hit().unwrap();
        }
        if game.stand().is_err() {
            game.reshuffle().unwrap();
            game.stand().unwrap();
        }
        if game.new_deal().is_err() {
            game.new_deal().unwrap();
        }
    }

    assert_eq!(game.score_board().rounds(), 5);
    let composition = game.composition();
    assert!(composition.cards_remaining <= 52);
}
