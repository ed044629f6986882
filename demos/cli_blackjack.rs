//! CLI blackjack demo: one `Round` per table pass, chips tracked across rounds.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Card, Face, HandOutcome, Round, RoundOptions, Suit};

#[derive(Default)]
struct Tally {
    rounds: u32,
    blackjack: u32,
    won: u32,
    lost: u32,
    push: u32,
    bust: u32,
}

impl Tally {
    fn record(&mut self, outcome: HandOutcome) {
        match outcome {
            HandOutcome::Blackjack => self.blackjack += 1,
            HandOutcome::Won => self.won += 1,
            HandOutcome::Lost => self.lost += 1,
            HandOutcome::Push => self.push += 1,
            HandOutcome::Bust => self.bust += 1,
        }
    }
}

fn main() {
    let mut chips = starting_chips();
    let mut tally = Tally::default();

    println!("Welcome to Blackjack");
    println!("{}", "*".repeat(20));
    println!("Play as many rounds as you like, as long as at least 1 chip is left.");

    while chips >= 1.0 {
        println!("\nYou have {chips} chips.");
        if prompt_line("Play a round of blackjack? (y/n): ") != "y" {
            break;
        }

        let wager = prompt_wager(chips);
        match play_round(wager, chips) {
            Ok((outcomes, earned)) => {
                chips += earned;
                tally.rounds += 1;
                for outcome in outcomes {
                    tally.record(outcome);
                }
            }
            Err(err) => {
                println!("Round error: {err}");
                break;
            }
        }
    }

    println!("\nFinal results:");
    println!("{}", "-".repeat(13));
    println!("Chips: {chips} after {} round(s)", tally.rounds);
    println!(
        "Outcomes: {} blackjack, {} won, {} lost, {} bust, {} push",
        tally.blackjack, tally.won, tally.lost, tally.bust, tally.push
    );
    println!("Thanks for playing.");
}

/// Plays one round and returns the per-hand outcomes and the net payout.
fn play_round(wager: f64, max_wager: f64) -> Result<(Vec<HandOutcome>, f64), twentyone::RoundError> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;
    let options = RoundOptions::default().with_max_wager(max_wager);
    let mut round = Round::new(wager, options, seed)?;

    println!(
        "\nYour hand {} has {} points. Your wager is {}.",
        format_cards(round.hand(0)?.cards()),
        round.hand_value(0)?,
        round.hand(0)?.wager()
    );
    if let Some(up_card) = round.dealer_up_card() {
        println!("Dealer's up card is {}.", format_card(up_card));
    }

    if round.hand(0)?.is_active()
        && round.split_allowed()
        && prompt_line("Split the hand? (y/n): ") == "y"
    {
        if round.split()? {
            println!("Hand split. You play one hand at a time.");
        } else {
            println!("Not enough chips to split; playing the round without it.");
        }
    }

    for hand_idx in 0..round.hand_count() {
        if hand_idx == 1 {
            println!("\nNow play your second (split) hand.");
        }
        while round.hand(hand_idx)?.is_active() {
            println!(
                "Your hand {} has {} points.",
                format_cards(round.hand(hand_idx)?.cards()),
                round.hand_value(hand_idx)?
            );
            match prompt_action(round.hand(hand_idx)?.can_double_down()) {
                Action::Hit => round.hit(hand_idx)?,
                Action::Stand => round.stand(hand_idx)?,
                Action::DoubleDown => {
                    if !round.double_down(hand_idx)? {
                        println!("Double-down is not available for this hand.");
                    }
                }
            }
        }
    }

    println!("\nRound results:");
    println!("{}", "-".repeat(13));
    let mut outcomes = Vec::new();
    for (hand_idx, hand) in round.hands().iter().enumerate() {
        println!(
            "Hand {}: {} with {} points, wager {}",
            hand_idx,
            format_cards(hand.cards()),
            hand.value(),
            hand.wager()
        );
        if let Some(outcome) = hand.result() {
            println!("Result: {outcome:?}");
            outcomes.push(outcome);
        }
    }
    println!(
        "Dealer's final hand {} is worth {}.",
        format_cards(round.dealer_hand().cards()),
        round.dealer_hand_value()
    );
    println!("Net this round: {}", round.wager_earned());

    Ok((outcomes, round.wager_earned()))
}

enum Action {
    Hit,
    Stand,
    DoubleDown,
}

fn prompt_action(allow_double_down: bool) -> Action {
    let mut msg = String::from("Select: help (h), hit (1), stand (2)");
    if allow_double_down {
        msg.push_str(", double down (3)");
    }
    msg.push_str(": ");

    loop {
        match prompt_line(&msg).as_str() {
            "1" => return Action::Hit,
            "2" => return Action::Stand,
            "3" if allow_double_down => return Action::DoubleDown,
            "h" => {
                println!("Choose one of the following:");
                println!("Hit (1): draw one more card, closer to 21 but not over.");
                println!("Stand (2): keep your hand and compare against the dealer.");
                if allow_double_down {
                    println!("Double down (3): double the wager for exactly one more card.");
                }
            }
            _ => println!("Unknown action."),
        }
    }
}

fn prompt_wager(max_chips: f64) -> f64 {
    loop {
        let input = prompt_line(&format!("How many chips do you wager? (1-{max_chips}): "));
        match input.parse::<f64>() {
            Ok(value) if value >= 1.0 && value <= max_chips => return value,
            _ => println!("Please enter a number between 1 and {max_chips}."),
        }
    }
}

fn starting_chips() -> f64 {
    let Some(arg) = std::env::args().nth(1) else {
        return 100.0;
    };
    arg.parse().unwrap_or_else(|_| {
        println!("Could not parse starting chips '{arg}'; defaulting to 100.");
        100.0
    })
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

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let face = match card.face {
        Face::Ace => "A".to_string(),
        Face::Jack => "J".to_string(),
        Face::Queen => "Q".to_string(),
        Face::King => "K".to_string(),
        other => other.value().to_string(),
    };

    format!("{face}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
