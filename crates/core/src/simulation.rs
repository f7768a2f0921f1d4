// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand outcomes simulation.
//!
//! Deals many hands to a table of players, without betting, and counts how
//! often each hand type is made and how often it wins at showdown.
use ahash::AHashMap;
use anyhow::{Context, Result, anyhow, bail};
use log::{debug, info};
use rand::prelude::*;
use showdown_eval::{eval::best_ratings, rate};
use std::thread;

use crate::{
    game::Game,
    poker::{Deck, HandRating, HandType},
};

/// Simulation configuration.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// The number of hands to deal.
    pub hands: usize,
    /// The number of players at the table.
    pub players: usize,
    /// The number of parallel tasks.
    pub tasks: usize,
    /// A seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            hands: 1000,
            players: 4,
            tasks: 1,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Checks the configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.hands < 1 {
            bail!("The number of hands must be > 0");
        }

        if self.players < Game::MIN_PLAYERS {
            bail!("The number of players must be >= {}", Game::MIN_PLAYERS);
        }

        if self.players > Game::MAX_PLAYERS {
            bail!("The number of players must be <= {}", Game::MAX_PLAYERS);
        }

        if self.tasks < 1 {
            bail!("The number of tasks must be > 0");
        }

        Ok(())
    }
}

/// The outcomes of a simulation.
#[derive(Debug, Clone, Default)]
pub struct Outcomes {
    hands: usize,
    players: usize,
    all: AHashMap<HandType, usize>,
    winning: AHashMap<HandType, usize>,
}

impl Outcomes {
    fn new(players: usize) -> Self {
        Self {
            players,
            ..Default::default()
        }
    }

    /// The number of hands dealt.
    pub fn hands(&self) -> usize {
        self.hands
    }

    /// The number of players for each hand.
    pub fn players(&self) -> usize {
        self.players
    }

    /// The number of players hands with this hand type.
    pub fn all(&self, hand_type: HandType) -> usize {
        self.all.get(&hand_type).copied().unwrap_or_default()
    }

    /// The number of winning hands with this hand type, each tied winner
    /// counts once.
    pub fn winning(&self, hand_type: HandType) -> usize {
        self.winning.get(&hand_type).copied().unwrap_or_default()
    }

    /// Total of all players hands.
    pub fn total_all(&self) -> usize {
        self.all.values().sum()
    }

    /// Total of winning hands.
    pub fn total_winning(&self) -> usize {
        self.winning.values().sum()
    }

    /// Percentage of players hands with this hand type.
    pub fn all_frequency(&self, hand_type: HandType) -> f64 {
        percent(self.all(hand_type), self.hands * self.players)
    }

    /// Percentage of hands won by this hand type.
    pub fn winning_frequency(&self, hand_type: HandType) -> f64 {
        percent(self.winning(hand_type), self.hands)
    }

    /// Percentage of hands with this hand type that won.
    pub fn win_ratio(&self, hand_type: HandType) -> f64 {
        percent(self.winning(hand_type), self.all(hand_type))
    }

    fn add_hand(&mut self, ratings: &[HandRating]) {
        self.hands += 1;

        for r in ratings {
            *self.all.entry(r.hand_type()).or_default() += 1;
        }

        for idx in best_ratings(ratings) {
            *self.winning.entry(ratings[idx].hand_type()).or_default() += 1;
        }
    }

    fn merge(&mut self, other: Outcomes) {
        self.hands += other.hands;

        for (hand_type, count) in other.all {
            *self.all.entry(hand_type).or_default() += count;
        }

        for (hand_type, count) in other.winning {
            *self.winning.entry(hand_type).or_default() += count;
        }
    }
}

fn percent(n: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        n as f64 / total as f64 * 100.0
    }
}

/// Runs a simulation.
///
/// Hands are split among `config.tasks` threads, each task has its own deck.
/// With a seed, task `i` uses `seed + i` so that runs with the same seed and
/// the same number of tasks give the same outcomes.
pub fn simulate(config: &SimulationConfig) -> Result<Outcomes> {
    config.validate()?;

    let hands_per_task = config.hands.div_ceil(config.tasks);
    info!(
        "Simulating {} hands with {} players on {} tasks",
        config.hands, config.players, config.tasks
    );

    let results = thread::scope(|s| {
        let mut handles = Vec::with_capacity(config.tasks);

        for task_id in 0..config.tasks {
            let start = task_id * hands_per_task;
            if start >= config.hands {
                break;
            }

            let count = hands_per_task.min(config.hands - start);
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(task_id as u64)),
                None => StdRng::from_os_rng(),
            };

            handles.push(s.spawn(move || {
                debug!("Task {task_id} dealing {count} hands");
                run_task(config.players, count, &mut rng)
            }));
        }

        handles
            .into_iter()
            .map(|h| h.join().map_err(|_| anyhow!("Simulation task panicked"))?)
            .collect::<Result<Vec<_>>>()
    })?;

    let mut outcomes = Outcomes::new(config.players);
    for r in results {
        outcomes.merge(r);
    }

    Ok(outcomes)
}

fn run_task(players: usize, hands: usize, rng: &mut StdRng) -> Result<Outcomes> {
    let mut outcomes = Outcomes::new(players);
    let mut deck = Deck::new_and_shuffled(rng);
    let mut ratings = Vec::with_capacity(players);

    for _ in 0..hands {
        let holes = deck
            .deal_many(2 * players)
            .context("Not enough cards for the hole cards")?;
        let board = deck
            .deal_many(5)
            .context("Not enough cards for the board")?;

        ratings.clear();
        for hole in holes.chunks(2) {
            ratings.push(rate(&[hole, board.as_slice()].concat())?);
        }

        outcomes.add_hand(&ratings);

        deck.add(board);
        deck.add(holes);
        deck.shuffle(rng);
    }

    Ok(outcomes)
}
