//! CLI blackjack demo over an in-memory shoe.
//!
//! Set `RUST_LOG=debug` to watch the engine's draws and shuffles.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{
    Card, CardFace, DealError, Event, Game, GameOptions, LocalShoe, Outcome, RoundState, Snapshot,
    Suit,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), LocalShoe::new(seed));

    if let Err(err) = game.start_new_game() {
        println!("Could not start: {err}");
        return;
    }

    loop {
        print_table(&game.snapshot());

        let prompt = match game.state() {
            RoundState::Dealt | RoundState::PlayerActing => "[h]it [s]tand [r]eset stats [q]uit: ",
            RoundState::DealerActing => "[s]tand to resume dealer [n]ew game [q]uit: ",
            RoundState::Resolved | RoundState::Idle => {
                "[d]eal [n]ew game [r]eset stats [q]uit: "
            }
        };

        match prompt_line(prompt).as_str() {
            "h" | "hit" => {
                if let Err(err) = game.hit() {
                    println!("Hit error: {err}");
                }
            }
            "s" | "stand" => {
                if let Err(err) = game.stand() {
                    println!("Stand error: {err}");
                }
            }
            "d" | "deal" => match game.new_deal() {
                Ok(()) => {}
                Err(DealError::InsufficientCards { .. }) => {
                    println!("Not enough cards to deal. Shuffled the deck.");
                }
                Err(err) => println!("Deal error: {err}"),
            },
            "n" | "new" => {
                if let Err(err) = game.start_new_game() {
                    println!("New game error: {err}");
                }
            }
            "r" | "reset" => game.reset_stats(),
            "q" | "quit" => return,
            _ => println!("Unknown action."),
        }

        for event in game.drain_events() {
            announce(&event);
        }
    }
}

fn announce(event: &Event) {
    match event {
        Event::PlayerBusted { score } => println!("Player busts with {score}!"),
        Event::RoundResolved(result) => {
            let text = match result.outcome {
                Outcome::DealerWins if result.player_bust => "Player busts! Dealer wins!",
                Outcome::PlayerWins if result.dealer_bust => "Dealer busts! Player wins!",
                Outcome::PlayerWins => "Player wins!",
                Outcome::DealerWins => "Dealer wins!",
                Outcome::Push => "It's a tie!",
            };
            println!(
                "{} ({} vs {})",
                colorize(text, "33"),
                result.player_score,
                result.dealer_score
            );
        }
        Event::ServiceUnavailable(err) => println!("Shoe service problem: {err}"),
        Event::InsufficientCards {
            requested,
            remaining,
        } => println!("Shoe is short: {remaining} left, {requested} needed."),
        Event::Reshuffled { cards_remaining } => {
            println!("Shoe shuffled ({cards_remaining} cards).");
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(snapshot: &Snapshot) {
    let shoe = snapshot.shoe;
    println!(
        "\nShoe: {} cards | {} aces | {} tens",
        shoe.cards_remaining, shoe.aces_remaining, shoe.tens_remaining
    );

    let dealer = if snapshot.dealer_hand.is_empty() {
        "(no cards)".to_string()
    } else {
        snapshot
            .dealer_hand
            .iter()
            .map(|face| match face {
                CardFace::Up(card) => format_card(card),
                CardFace::Down => "??".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    };
    match snapshot.dealer_score {
        Some(score) => println!("Dealer: {dealer} (score {score})"),
        None => println!("Dealer: {dealer}"),
    }

    let player = if snapshot.player_hand.is_empty() {
        "(no cards)".to_string()
    } else {
        snapshot
            .player_hand
            .iter()
            .map(format_card)
            .collect::<Vec<_>>()
            .join(" ")
    };
    println!("Player: {player} (score {})", snapshot.player_score);

    let board = snapshot.score_board;
    println!(
        "Wins {} | Losses {} | Push {}\n",
        board.player_wins, board.dealer_wins, board.pushes
    );
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };

    colorize(&format!("{rank}{suit}"), color_code)
}
