// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand rating and comparison.
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use showdown_cards::{Card, Rank};
use std::{cmp::Ordering, fmt};

use super::{HandType, detect::*};
use crate::{Error, Result};

/// Classifies cards returning the hand type and the cards that make the hand,
/// highest first.
///
/// Categories are checked from the strongest to the weakest and the first
/// match wins. This works on any number of cards, categories that need five
/// cards never match fewer cards.
pub fn evaluate(cards: &[Card]) -> (HandType, Vec<Card>) {
    if let Some(run) = find_straight_flush(cards) {
        let made = top_of_run(&run);
        let hand_type = if made.last().is_some_and(|c| c.rank() == Rank::Ten) {
            HandType::RoyalFlush
        } else {
            HandType::StraightFlush
        };
        return (hand_type, made);
    }

    if let Some(quads) = find_highest_n_of_a_kind(cards, 4) {
        return (HandType::FourOfAKind, quads);
    }

    if let Some(full_house) = find_full_house(cards) {
        return (HandType::FullHouse, full_house);
    }

    if has_flush(cards) {
        let made: Vec<Card> = find_biggest_flush(cards)
            .into_iter()
            .take(HAND_SIZE)
            .collect();
        return (HandType::Flush, made);
    }

    if has_straight(cards) {
        return (HandType::Straight, top_of_run(&find_longest_straight(cards)));
    }

    if let Some(trips) = find_highest_n_of_a_kind(cards, 3) {
        return (HandType::ThreeOfAKind, trips);
    }

    if let Some(two_pair) = find_two_pair(cards) {
        return (HandType::TwoPair, two_pair);
    }

    if let Some(pair) = find_highest_n_of_a_kind(cards, 2) {
        return (HandType::Pair, pair);
    }

    (HandType::HighCard, Vec::new())
}

/// Rates a set of at least 5 cards.
pub fn rate(cards: &[Card]) -> Result<HandRating> {
    HandRating::new(cards)
}

/// Compares two ratings, fails if any of them is not a rating this evaluator
/// produces for its cards.
pub fn compare(a: &HandRating, b: &HandRating) -> Result<Ordering> {
    if !a.is_consistent() || !b.is_consistent() {
        return Err(Error::TypeMismatch);
    }

    Ok(a.cmp(b))
}

/// Returns the indices of the highest ratings, more than one for a tie.
pub fn best_ratings(ratings: &[HandRating]) -> Vec<usize> {
    let Some(best) = ratings.iter().max() else {
        return Vec::new();
    };

    ratings
        .iter()
        .enumerate()
        .filter(|(_, r)| *r == best)
        .map(|(idx, _)| idx)
        .collect()
}

/// The rating of a set of cards.
///
/// Ratings are totally ordered: first by hand type, then by the ranks of the
/// cards that make the hand and, for hands with fewer than five such cards,
/// by kickers. Kickers with the same rank on both sides do not count, so two
/// hands that share the board compare by their distinct cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandRating {
    cards: Vec<Card>,
    hand_type: HandType,
    participating: Vec<Card>,
    kickers: Vec<Card>,
}

impl HandRating {
    /// Rates the given cards, fails if there are fewer than 5 cards.
    pub fn new(cards: &[Card]) -> Result<Self> {
        if cards.len() < HAND_SIZE {
            return Err(Error::InvalidInput(format!(
                "At least {HAND_SIZE} cards are needed, got {}",
                cards.len()
            )));
        }

        debug_assert!(
            cards.iter().collect::<AHashSet<_>>().len() == cards.len(),
            "Duplicate cards in {cards:?}"
        );

        Ok(Self::from_cards(cards))
    }

    fn from_cards(cards: &[Card]) -> Self {
        let (hand_type, participating) = evaluate(cards);
        let kickers = sorted_desc(&remaining(cards, &participating));

        Self {
            cards: cards.to_vec(),
            hand_type,
            participating,
            kickers,
        }
    }

    /// The rated cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The hand type.
    pub fn hand_type(&self) -> HandType {
        self.hand_type
    }

    /// The cards that make the hand, highest first.
    ///
    /// For a full house the three of a kind comes before the pair, for two
    /// pair the highest pair comes first, for a wheel the ace is last.
    pub fn participating_cards(&self) -> &[Card] {
        &self.participating
    }

    /// The cards that are not part of the hand, highest first.
    pub fn kickers(&self) -> &[Card] {
        &self.kickers
    }

    /// The number of kickers that count for this hand type.
    pub fn kicker_slots(&self) -> usize {
        HAND_SIZE.saturating_sub(self.participating.len())
    }

    /// The best five cards: the participating cards followed by the kickers
    /// that count.
    pub fn best_hand(&self) -> Vec<Card> {
        self.participating
            .iter()
            .chain(self.kickers.iter().take(self.kicker_slots()))
            .copied()
            .collect()
    }

    /// The ranks values of the participating cards, the ace of a wheel is 1.
    pub fn ranks(&self) -> Vec<u8> {
        let wheel = self.is_wheel();
        self.participating
            .iter()
            .map(|c| {
                if wheel && c.rank() == Rank::Ace {
                    Rank::LOW_ACE_VALUE
                } else {
                    c.rank().value()
                }
            })
            .collect()
    }

    fn is_wheel(&self) -> bool {
        matches!(
            self.hand_type,
            HandType::Straight | HandType::StraightFlush
        ) && self.participating.first().is_some_and(|c| c.rank() == Rank::Five)
    }

    /// Checks this rating is what the evaluator produces for its cards.
    pub fn is_consistent(&self) -> bool {
        if self.cards.len() < HAND_SIZE {
            return false;
        }

        let expected = Self::from_cards(&self.cards);
        self.hand_type == expected.hand_type
            && self.participating == expected.participating
            && self.kickers == expected.kickers
    }

    fn cmp_kickers(&self, other: &Self) -> Ordering {
        let slots = self.kicker_slots();
        if slots == 0 {
            return Ordering::Equal;
        }

        let mine = self.kickers.iter().map(Card::rank).collect::<AHashSet<_>>();
        let theirs = other.kickers.iter().map(Card::rank).collect::<AHashSet<_>>();

        let distinct = |a: &AHashSet<Rank>, b: &AHashSet<Rank>| {
            let mut ranks = a.difference(b).copied().collect::<Vec<_>>();
            ranks.sort_by(|x, y| y.cmp(x));
            ranks.truncate(slots);
            ranks
        };

        distinct(&mine, &theirs).cmp(&distinct(&theirs, &mine))
    }
}

impl Ord for HandRating {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hand_type
            .cmp(&other.hand_type)
            .then_with(|| self.ranks().cmp(&other.ranks()))
            .then_with(|| self.cmp_kickers(other))
    }
}

impl PartialOrd for HandRating {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandRating {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandRating {}

impl fmt::Display for HandRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = self.participating.first().map(|c| c.rank().plural_name());
        let last = self.participating.last().map(|c| c.rank().plural_name());

        match (self.hand_type, first, last) {
            (HandType::HighCard, ..) => write!(f, "nothing"),
            (HandType::Pair, Some(r), _) => write!(f, "a pair of {r}"),
            (HandType::ThreeOfAKind, Some(r), _) => write!(f, "three {r}"),
            (HandType::FourOfAKind, Some(r), _) => write!(f, "four {r}"),
            (HandType::TwoPair, Some(r1), Some(r2)) => write!(f, "two pair ({r1} and {r2})"),
            (HandType::FullHouse, Some(r1), Some(r2)) => {
                write!(f, "a full house ({r1} full of {r2})")
            }
            (hand_type, ..) => {
                write!(f, "{} (", hand_type.indefinite_form())?;
                for (idx, card) in self.participating.iter().enumerate() {
                    if idx > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{card}")?;
                }
                write!(f, ")")
            }
        }
    }
}
