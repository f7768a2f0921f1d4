// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. The evaluator classifies
//! cards into one of the ten hand types, from high card to royal flush, and
//! keeps the cards that make the hand and the kickers so that ratings can be
//! compared down to the last kicker.
//!
//! To use the evaluator rate some cards and compare the ratings:
//!
//! ```
//! # use showdown_eval::*;
//! let board = parse_cards("KD 9C 7H 4S 2D").unwrap();
//! let p1 = [parse_cards("KS 3C").unwrap(), board.clone()].concat();
//! let p2 = [parse_cards("KH 5C").unwrap(), board].concat();
//!
//! let r1 = rate(&p1).unwrap();
//! let r2 = rate(&p2).unwrap();
//! assert_eq!(r1.hand_type(), HandType::Pair);
//! assert!(r2 > r1);
//! assert_eq!(r2.to_string(), "a pair of kings");
//! ```
//!
//! and to check an incomplete board for draws:
//!
//! ```
//! # use showdown_eval::*;
//! let cards = parse_cards("5H 6H 7H 8H KD").unwrap();
//! let draws = check_draws(&cards, rate(&cards).unwrap().hand_type());
//! assert!(draws.contains(Draw::Flush));
//! assert!(draws.contains(Draw::Straight));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub mod eval;

pub use error::{Error, Result};
pub use eval::{Draw, Draws, HandRating, HandType, check_draws, compare, evaluate, rate};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
