// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Text output for the command line tool.
use anyhow::Result;
use std::cmp::Ordering;

use showdown_core::{
    game::{CardList, Game, Standing},
    simulation::Outcomes,
};
use showdown_eval::{HandRating, HandType, check_draws};

/// Prints a rating details, draws are checked for fewer than 7 cards.
pub fn print_rating(rating: &HandRating) {
    println!("Hand type:   {}", rating.hand_type());
    println!("Description: {rating}");
    println!("Made hand:   {}", CardList(rating.participating_cards()));
    println!("Kickers:     {}", CardList(rating.kickers()));
    println!("Best hand:   {}", CardList(&rating.best_hand()));

    if rating.cards().len() < 7 {
        let draws = check_draws(rating.cards(), rating.hand_type());
        if draws.is_empty() {
            println!("Draws:       none");
        } else {
            println!("Draws:       {draws}");
        }
    }
}

/// Prints which of two ratings wins.
pub fn print_comparison(first: &HandRating, second: &HandRating, ordering: Ordering) {
    println!("First:  {first}");
    println!("Second: {second}");

    match ordering {
        Ordering::Greater => println!("First hand wins"),
        Ordering::Less => println!("Second hand wins"),
        Ordering::Equal => println!("Tie"),
    }
}

/// Runs a hand printing the players hands at each street.
pub fn run_hand(game: &mut Game) -> Result<()> {
    game.start_hand()?;
    print_street(game);

    while game.street().is_some_and(|s| s.board_size() < 5) {
        game.deal_street()?;
        println!();
        print_street(game);
    }

    let record = game.showdown()?.clone();

    println!("\n======== Showdown ========");
    for (player_id, rating) in record.ratings() {
        let name = game.player(*player_id).map(|p| p.name()).unwrap_or_default();
        let mark = if record.winners().contains(player_id) {
            "*"
        } else {
            " "
        };
        println!("{mark} {name:12} {rating}");
    }

    Ok(())
}

fn print_street(game: &Game) {
    let Some(street) = game.street() else {
        return;
    };

    println!("======== {street} ========");
    if !game.board().is_empty() {
        println!("Board: {}\n", CardList(game.board()));
    }

    for standing in game.standings() {
        let name = game
            .player(standing.player_id)
            .map(|p| p.name())
            .unwrap_or_default();
        println!("{name:12} {}", standing_line(&standing));
    }
}

fn standing_line(standing: &Standing) -> String {
    let mut line = format!("{}  {}", standing.cards, standing.hand_type);
    if !standing.made.is_empty() {
        line.push_str(&format!(" ({})", CardList(&standing.made)));
    }

    if !standing.draws.is_empty() {
        line.push_str(&format!(" [{}]", standing.draws));
    }

    line
}

/// Prints the simulation tables.
pub fn print_outcomes(outcomes: &Outcomes) {
    println!("{} hands, {} players\n", outcomes.hands(), outcomes.players());

    println!("============= All Outcomes =============");
    print_table(|ht| (outcomes.all(ht), outcomes.all_frequency(ht)));

    println!("\n=========== Winning Outcomes ===========");
    print_table(|ht| (outcomes.winning(ht), outcomes.winning_frequency(ht)));

    println!("\n============ Hand Strength =============");
    for ht in HandType::hand_types() {
        let ratio = format!("{} / {}", outcomes.winning(ht), outcomes.all(ht));
        println!("{:16} {ratio:>15}  ({:.2}%)", ht.name(), outcomes.win_ratio(ht));
    }
}

fn print_table<F>(row: F)
where
    F: Fn(HandType) -> (usize, f64),
{
    let mut count_total = 0;
    let mut freq_total = 0.0;

    for ht in HandType::hand_types() {
        let (count, freq) = row(ht);
        count_total += count;
        freq_total += freq;
        println!("{:16} {count:>10}  ({freq:.2}%)", ht.name());
    }

    println!("{}", "-".repeat(40));
    println!("{:16} {count_total:>10}  ({freq_total:.2}%)", "Total");
}
