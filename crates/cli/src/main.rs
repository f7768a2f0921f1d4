// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown command line tool.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use ahash::AHashSet;
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use showdown_core::{
    game::{Game, Player},
    poker::{GameId, PlayerIds},
    simulation::{self, SimulationConfig},
};
use showdown_eval::{Card, compare, parse_cards, rate};

mod report;

#[derive(Debug, Parser)]
struct Cli {
    /// Log dealing steps.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rate 5 to 7 cards, i.e. `showdown rate AS KS 10h 2c 2d`.
    Rate {
        /// The cards to rate.
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Compare two hands.
    Compare {
        /// The first hand cards.
        #[clap(long, short)]
        first: String,
        /// The second hand cards.
        #[clap(long, short)]
        second: String,
    },
    /// Deal a hand street by street.
    Deal {
        /// Number of players.
        #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=23))]
        players: u8,
        /// Seed for a reproducible deal.
        #[clap(long)]
        seed: Option<u64>,
    },
    /// Deal many hands and show hand types statistics.
    Simulate {
        /// Number of hands.
        #[clap(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
        hands: u32,
        /// Number of players.
        #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=23))]
        players: u8,
        /// Number of parallel tasks.
        #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=256))]
        tasks: u16,
        /// Seed for reproducible runs.
        #[clap(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    match cli.command {
        Command::Rate { cards } => {
            let cards = parse_hand(&cards.join(" "))?;
            let rating = rate(&cards)?;
            report::print_rating(&rating);
        }
        Command::Compare { first, second } => {
            let first = rate(&parse_hand(&first).context("Invalid first hand")?)?;
            let second = rate(&parse_hand(&second).context("Invalid second hand")?)?;
            let ordering = compare(&first, &second)?;
            report::print_comparison(&first, &second, ordering);
        }
        Command::Deal { players, seed } => {
            let mut ids = PlayerIds::new();
            let players = (0..players).map(|_| Player::new(ids.next_id())).collect();

            let id = GameId::new(1);
            let mut game = match seed {
                Some(seed) => Game::with_seed(id, players, seed)?,
                None => Game::new(id, players)?,
            };

            report::run_hand(&mut game)?;
        }
        Command::Simulate {
            hands,
            players,
            tasks,
            seed,
        } => {
            let config = SimulationConfig {
                hands: hands as usize,
                players: players as usize,
                tasks: tasks as usize,
                seed,
            };

            let outcomes = simulation::simulate(&config)?;
            report::print_outcomes(&outcomes);
        }
    }

    Ok(())
}

/// Parses a hand from the command line, cards must be unique.
fn parse_hand(text: &str) -> Result<Vec<Card>> {
    let cards = parse_cards(text)?;

    let mut seen = AHashSet::with_capacity(cards.len());
    for card in &cards {
        if !seen.insert(*card) {
            bail!("Duplicate card {card:#}");
        }
    }

    Ok(cards)
}
