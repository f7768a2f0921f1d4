// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example sample7
// ...
// Total hands      1000000
// Elapsed:         ...
// Hands/sec:       ...
//
// High card:       ...
// ```

use rand::prelude::*;
use std::time::Instant;

use showdown_eval::{Deck, HandType, rate};

const SAMPLES: usize = 1_000_000;

fn main() {
    let now = Instant::now();
    let mut counts = [0usize; 10];
    let mut rng = StdRng::seed_from_u64(1);
    let mut deck = Deck::new_and_shuffled(&mut rng);

    for _ in 0..SAMPLES {
        let Some(hand) = deck.deal_many(7) else {
            break;
        };

        if let Ok(rating) = rate(&hand) {
            counts[rating.hand_type().value() as usize - 1] += 1;
        }

        deck.add(hand);
        deck.shuffle(&mut rng);
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for hand_type in HandType::hand_types() {
        let count = counts[hand_type.value() as usize - 1];
        let name = format!("{hand_type}:");
        println!(
            "{name:17}{count:<10} ({:.3}%)",
            100.0 * count as f64 / total as f64
        );
    }
}
