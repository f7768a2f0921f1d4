// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand categories.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// A poker hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandType {
    /// No other category matches.
    HighCard,
    /// Two cards with the same rank.
    Pair,
    /// Two different pairs.
    TwoPair,
    /// Three cards with the same rank.
    ThreeOfAKind,
    /// Five cards in a sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards with the same rank.
    FourOfAKind,
    /// Five cards in a sequence all of the same suit.
    StraightFlush,
    /// Ace high straight flush.
    RoyalFlush,
}

/// Ordering value, name and if the name takes an article.
static HAND_TYPES: [(HandType, u8, &str, bool); 10] = [
    (HandType::HighCard, 1, "High card", false),
    (HandType::Pair, 2, "Pair", true),
    (HandType::TwoPair, 3, "Two pair", false),
    (HandType::ThreeOfAKind, 4, "Three of a kind", false),
    (HandType::Straight, 5, "Straight", true),
    (HandType::Flush, 6, "Flush", true),
    (HandType::FullHouse, 7, "Full house", true),
    (HandType::FourOfAKind, 8, "Four of a kind", false),
    (HandType::StraightFlush, 9, "Straight flush", true),
    (HandType::RoyalFlush, 10, "Royal flush", true),
];

impl HandType {
    /// Returns all hand types from high card to royal flush.
    pub fn hand_types() -> impl DoubleEndedIterator<Item = HandType> {
        HAND_TYPES.iter().map(|(hand_type, ..)| *hand_type)
    }

    fn entry(self) -> &'static (HandType, u8, &'static str, bool) {
        &HAND_TYPES[self as usize]
    }

    /// The ordering value, 1 for high card up to 10 for royal flush.
    pub fn value(self) -> u8 {
        self.entry().1
    }

    /// The display name, i.e. "Full house".
    pub fn name(self) -> &'static str {
        self.entry().2
    }

    /// The name as used in a sentence, i.e. "a full house" or "two pair".
    pub fn indefinite_form(self) -> String {
        let (_, _, name, article) = self.entry();
        let name = name.to_lowercase();
        if *article { format!("a {name}") } else { name }
    }
}

impl Ord for HandType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl PartialOrd for HandType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
