// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah > kd);
//! ```
//!
//! cards can be parsed from text using a rank symbol (`2`..`10`, `T`, `J`,
//! `Q`, `K`, `A`) followed by a suit letter (`C`, `D`, `H`, `S`) or glyph:
//!
//! ```
//! # use showdown_cards::{parse_cards, Card, Rank, Suit};
//! let cards = parse_cards("AS 10h T♦").unwrap();
//! assert_eq!(cards[1], Card::new(Rank::Ten, Suit::Hearts));
//! assert_eq!(cards[2].to_string(), "10♦");
//! ```
//!
//! and a [Deck] type for shuffling, dealing and returning cards:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hand = deck.deal_many(7).unwrap();
//! assert_eq!(deck.count(), 45);
//! deck.add(hand);
//! assert_eq!(deck.count(), Deck::SIZE);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
mod deck;

pub use cards::{Card, ParseCardError, Rank, Suit, parse_cards};
pub use deck::Deck;
