// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A deck of cards.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the cards in the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals a card from the top of the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals `count` cards, returns `None` and leaves the deck unchanged if
    /// there are not enough cards.
    pub fn deal_many(&mut self, count: usize) -> Option<Vec<Card>> {
        if count > self.cards.len() {
            return None;
        }

        let at = self.cards.len() - count;
        let mut cards = self.cards.split_off(at);
        cards.reverse();
        Some(cards)
    }

    /// Returns cards to the bottom of the deck.
    pub fn add<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if a card is in the deck.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Iterates the cards in the deck, the last card is the next to be dealt.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    /// An ordered deck, clubs to spades and deuce to ace within a suit.
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_is_unique() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        assert_eq!(deck.count(), Deck::SIZE);

        while let Some(card) = deck.deal() {
            cards.insert(card);
        }

        assert!(deck.is_empty());
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn default_deck_order() {
        let deck = Deck::default();
        let cards = deck.iter().copied().collect::<Vec<_>>();
        assert_eq!(cards[0], Card::new(Rank::Deuce, Suit::Clubs));
        assert_eq!(cards[12], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(cards[51], Card::new(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn deal_and_return() {
        let mut deck = Deck::default();
        let top = deck.iter().last().copied();

        let hand = deck.deal_many(5).unwrap();
        assert_eq!(hand.len(), 5);
        assert_eq!(hand.first().copied(), top);
        assert_eq!(deck.count(), Deck::SIZE - 5);
        assert!(hand.iter().all(|c| !deck.contains(*c)));

        deck.add(hand.iter().copied());
        assert_eq!(deck.count(), Deck::SIZE);
        assert!(hand.iter().all(|c| deck.contains(*c)));

        assert!(deck.deal_many(Deck::SIZE + 1).is_none());
        assert_eq!(deck.count(), Deck::SIZE);
    }

    #[test]
    fn deal_matches_deal_many() {
        let mut d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
        let mut d2 = d1.clone();

        let many = d1.deal_many(3).unwrap();
        let single = (0..3).filter_map(|_| d2.deal()).collect::<Vec<_>>();
        assert_eq!(many, single);
    }

    #[test]
    fn deck_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), Deck::SIZE - 2);
        assert!(!deck.contains(Card::new(Rank::Ace, Suit::Diamonds)));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(3));
        let d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(3));
        assert!(d1.iter().eq(d2.iter()));
        assert!(!d1.iter().eq(Deck::default().iter()));
    }
}
