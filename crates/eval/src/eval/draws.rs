// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Flush and straight draws.
use serde::{Deserialize, Serialize};
use showdown_cards::Card;
use std::fmt;

use super::{HandType, detect::*};

/// A hand one card away from a flush or a straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Draw {
    /// Four cards of the same suit.
    Flush,
    /// Four cards to a straight.
    Straight,
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Draw::Flush => write!(f, "Flush draw"),
            Draw::Straight => write!(f, "Straight draw"),
        }
    }
}

/// The set of draws for a hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Draws {
    flush: bool,
    straight: bool,
}

impl Draws {
    /// Checks if the set contains a draw.
    pub fn contains(&self, draw: Draw) -> bool {
        match draw {
            Draw::Flush => self.flush,
            Draw::Straight => self.straight,
        }
    }

    /// Checks if there are no draws.
    pub fn is_empty(&self) -> bool {
        !self.flush && !self.straight
    }

    /// Iterates the draws, flush first.
    pub fn iter(&self) -> impl Iterator<Item = Draw> {
        [
            self.flush.then_some(Draw::Flush),
            self.straight.then_some(Draw::Straight),
        ]
        .into_iter()
        .flatten()
    }
}

impl fmt::Display for Draws {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, draw) in self.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{draw}")?;
        }

        Ok(())
    }
}

/// Checks the cards for flush and straight draws.
///
/// `hand_type` is the current rating of the cards, hands that already made a
/// straight or better have no draws.
pub fn check_draws(cards: &[Card], hand_type: HandType) -> Draws {
    if hand_type >= HandType::Straight {
        return Draws::default();
    }

    Draws {
        flush: has_flush_draw(cards),
        straight: has_straight_draw(cards),
    }
}
