// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator finds the best five cards hand in any set of cards by
//! checking each category from the strongest to the weakest, and it returns
//! the cards that make the hand so that they can be shown to players.
//!
//! It provides an [evaluate] function that returns the hand category and the
//! cards that make the hand, a [rate] function that builds a [HandRating] that
//! can be compared with other ratings to find a showdown winner, and a
//! [check_draws] function to find flush and straight draws on incomplete
//! boards.
//!
//! Each category detector is also exported on its own (see [has_straight],
//! [find_highest_n_of_a_kind], ...).

mod detect;
mod draws;
mod hand_type;
mod rating;

pub use detect::{
    HAND_SIZE, find_best_straight, find_biggest_flush, find_highest_n_of_a_kind,
    find_highest_straight, find_longest_straight, has_flush, has_flush_draw, has_four_of_a_kind,
    has_full_house, has_pair, has_straight, has_straight_draw, has_straight_flush,
    has_three_of_a_kind, has_two_pair,
};
pub use draws::{Draw, Draws, check_draws};
pub use hand_type::HandType;
pub use rating::{HandRating, best_ratings, compare, evaluate, rate};
