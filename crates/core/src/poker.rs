// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Types used in a Poker game.
use serde::{Deserialize, Serialize};
use std::fmt;

pub use showdown_eval::{Card, Deck, Draws, HandRating, HandType, Rank, Suit};

/// A player identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(u32);

impl PlayerId {
    /// The integer value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out player identifiers, starting from 1.
///
/// Ids are unique only for the counter that created them.
#[derive(Debug)]
pub struct PlayerIds {
    next: u32,
}

impl Default for PlayerIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl PlayerIds {
    /// Creates a new counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next unused id.
    pub fn next_id(&mut self) -> PlayerId {
        let id = PlayerId(self.next);
        self.next += 1;
        id
    }
}

/// A game identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(u32);

impl GameId {
    /// Creates a game id with the given value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A hand identifier, unique within a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandId(u32);

impl HandId {
    pub(crate) fn from_index(idx: usize) -> Self {
        Self(idx as u32 + 1)
    }

    pub(crate) fn index(&self) -> usize {
        self.0.saturating_sub(1) as usize
    }
}

impl fmt::Display for HandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The player cards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerCards {
    /// The player has no cards.
    #[default]
    None,
    /// The player hole cards.
    Cards(Card, Card),
}

impl PlayerCards {
    /// Returns the cards as a vector, empty if there are no cards.
    pub fn to_vec(&self) -> Vec<Card> {
        match self {
            PlayerCards::None => Vec::new(),
            PlayerCards::Cards(c1, c2) => vec![*c1, *c2],
        }
    }
}

impl fmt::Display for PlayerCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerCards::None => write!(f, "-"),
            PlayerCards::Cards(c1, c2) => write!(f, "{c1} {c2}"),
        }
    }
}
