//! Console blackjack: a thin interactive caller of the engine.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pontoon::{Decision, Hand, RoundOutcome, RoundSummary, Table, TableOptions};

fn main() {
    println!("Blackjack (single deck, dealer hits soft 17)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default();
    let max_bet = options.max_bet;
    let mut table = Table::new(options, seed);

    loop {
        let pot = table.pot();
        if pot == 0 {
            println!("You are out of chips.");
            break;
        }
        println!("\nYou have {pot} chips.");

        let limit = max_bet.min(pot);
        let Some(bet) = prompt_bet(limit) else {
            break;
        };
        if bet == 0 {
            break;
        }

        match table.play_round(bet, prompt_decision) {
            Ok(summary) => print_summary(&summary),
            Err(err) => {
                println!("Round error: {err}");
                break;
            }
        }
    }

    println!("You leave the table with {} chips.", table.pot());
}

fn prompt_bet(limit: u32) -> Option<u32> {
    loop {
        let input = prompt_line(&format!("Bet (0-{limit}, 0 to leave): "));
        match input.parse::<u32>() {
            Ok(bet) if bet <= limit => return Some(bet),
            Ok(_) => println!("The table maximum is {limit}."),
            Err(_) => {
                if input == "q" || input == "quit" {
                    return None;
                }
                println!("Please enter a number.");
            }
        }
    }
}

fn prompt_decision(hand: &Hand) -> Decision {
    println!("Your hand: {} ({})", hand, describe(hand));
    loop {
        match prompt_line("Hit? [y/n] ").as_str() {
            "y" | "yes" | "h" | "hit" => return Decision::Hit,
            "n" | "no" | "s" | "stand" => return Decision::Stand,
            _ => println!("Please answer y or n."),
        }
    }
}

fn describe(hand: &Hand) -> String {
    if hand.is_busted() {
        "busted!".to_string()
    } else if hand.is_blackjack() {
        "Blackjack!".to_string()
    } else if hand.is_soft() {
        format!("soft {}", hand.total())
    } else {
        hand.total().to_string()
    }
}

fn print_summary(summary: &RoundSummary) {
    let player: Vec<String> = summary.player_cards.iter().map(ToString::to_string).collect();
    let dealer: Vec<String> = summary.dealer_cards.iter().map(ToString::to_string).collect();
    println!("Your hand:   {} (value {})", player.join(" "), summary.player_value);
    let dealer_note = if summary.dealer_blackjack {
        " Blackjack!"
    } else {
        ""
    };
    println!(
        "Dealer hand: {} (value {}){}",
        dealer.join(" "),
        summary.dealer_value,
        dealer_note
    );

    match summary.outcome {
        RoundOutcome::Win => println!("You win {} chips.", summary.net),
        RoundOutcome::Blackjack => println!("Blackjack! You win {} chips.", summary.net),
        RoundOutcome::Lose => println!("You lose {} chips.", summary.bet),
        RoundOutcome::Push => println!("Push."),
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
