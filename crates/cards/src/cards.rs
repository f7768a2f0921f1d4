// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};
use thiserror::Error;

/// Text variation selector that may follow a suit glyph.
const VARIATION_SELECTOR: char = '\u{FE0E}';

/// Error returned when parsing a card from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCardError {
    /// The card text is empty.
    #[error("Empty card")]
    Empty,
    /// The rank token is not a known rank.
    #[error("Unknown rank: {0}")]
    InvalidRank(String),
    /// The suit token is not a known suit.
    #[error("Unknown suit: {0}")]
    InvalidSuit(String),
}

/// A Poker card.
///
/// A card is an immutable rank and suit pair, cards order by rank first and
/// by suit for equal ranks.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    /// Formats a card with the suit glyph, i.e. `K♦`, or with the suit
    /// letter using the alternate form `{:#}`, i.e. `KD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}{}", self.rank, self.suit.letter())
        } else {
            write!(f, "{}{}", self.rank, self.suit)
        }
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a card like `AS`, `10h`, `Td` or `2♣`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_end_matches(VARIATION_SELECTOR);
        let mut chars = s.chars();
        let suit = chars.next_back().ok_or(ParseCardError::Empty)?;
        let rank = chars.as_str();

        let rank = Rank::from_symbol(rank)
            .ok_or_else(|| ParseCardError::InvalidRank(rank.to_string()))?;
        let suit = Suit::from_letter(suit)
            .or_else(|| Suit::from_glyph(suit))
            .ok_or_else(|| ParseCardError::InvalidSuit(suit.to_string()))?;

        Ok(Card::new(rank, suit))
    }
}

/// Parses a list of cards separated by whitespace or commas.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

/// Ordering value, symbol and plural name for each rank.
static RANKS: [(Rank, u8, &str, &str); 13] = [
    (Rank::Deuce, 2, "2", "twos"),
    (Rank::Trey, 3, "3", "threes"),
    (Rank::Four, 4, "4", "fours"),
    (Rank::Five, 5, "5", "fives"),
    (Rank::Six, 6, "6", "sixes"),
    (Rank::Seven, 7, "7", "sevens"),
    (Rank::Eight, 8, "8", "eights"),
    (Rank::Nine, 9, "9", "nines"),
    (Rank::Ten, 10, "10", "tens"),
    (Rank::Jack, 11, "J", "jacks"),
    (Rank::Queen, 12, "Q", "queens"),
    (Rank::King, 13, "K", "kings"),
    (Rank::Ace, 14, "A", "aces"),
];

impl Rank {
    /// Ordering value of the low ace in a wheel straight.
    pub const LOW_ACE_VALUE: u8 = 1;

    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        RANKS.iter().map(|(rank, ..)| *rank)
    }

    fn entry(self) -> &'static (Rank, u8, &'static str, &'static str) {
        // The table is indexed by variant, checked in tests.
        &RANKS[self as usize]
    }

    /// The ordering value, 2 for a deuce up to 14 for an ace.
    pub fn value(self) -> u8 {
        self.entry().1
    }

    /// The display symbol.
    pub fn symbol(self) -> &'static str {
        self.entry().2
    }

    /// The rank plural name, i.e. "sixes".
    pub fn plural_name(self) -> &'static str {
        self.entry().3
    }

    /// Gets a rank from a symbol, `T` is accepted for ten.
    pub fn from_symbol(symbol: &str) -> Option<Rank> {
        if symbol.eq_ignore_ascii_case("T") {
            return Some(Rank::Ten);
        }

        RANKS
            .iter()
            .find(|(_, _, s, ..)| s.eq_ignore_ascii_case(symbol))
            .map(|(rank, ..)| *rank)
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

/// Ordering value, letter and glyph for each suit.
static SUITS: [(Suit, u8, char, char); 4] = [
    (Suit::Clubs, 1, 'C', '♣'),
    (Suit::Diamonds, 2, 'D', '♦'),
    (Suit::Hearts, 3, 'H', '♥'),
    (Suit::Spades, 4, 'S', '♠'),
];

impl Suit {
    /// Returns all suits from clubs to spades.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        SUITS.iter().map(|(suit, ..)| *suit)
    }

    fn entry(self) -> &'static (Suit, u8, char, char) {
        &SUITS[self as usize]
    }

    /// The ordering value, 1 for clubs up to 4 for spades.
    pub fn value(self) -> u8 {
        self.entry().1
    }

    /// The suit ASCII letter.
    pub fn letter(self) -> char {
        self.entry().2
    }

    /// The suit display glyph.
    pub fn glyph(self) -> char {
        self.entry().3
    }

    /// Gets a suit from its letter, case insensitive.
    pub fn from_letter(letter: char) -> Option<Suit> {
        let letter = letter.to_ascii_uppercase();
        SUITS
            .iter()
            .find(|(_, _, l, _)| *l == letter)
            .map(|(suit, ..)| *suit)
    }

    /// Gets a suit from its glyph.
    pub fn from_glyph(glyph: char) -> Option<Suit> {
        SUITS
            .iter()
            .find(|(.., g)| *g == glyph)
            .map(|(suit, ..)| *suit)
    }
}

impl Ord for Suit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl PartialOrd for Suit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_tables() {
        for (idx, rank) in Rank::ranks().enumerate() {
            assert_eq!(RANKS[idx].0, rank);
            assert_eq!(rank.value() as usize, idx + 2);
            assert_eq!(Rank::from_symbol(rank.symbol()), Some(rank));
        }

        for (idx, suit) in Suit::suits().enumerate() {
            assert_eq!(SUITS[idx].0, suit);
            assert_eq!(suit.value() as usize, idx + 1);
        }

        assert_eq!(Rank::from_symbol("1"), None);
        assert_eq!(Rank::Six.plural_name(), "sixes");
    }

    #[test]
    fn ordering() {
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Deuce < Rank::Trey);
        assert!(Suit::Spades > Suit::Hearts);
        assert!(Suit::Clubs < Suit::Diamonds);

        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let as_ = Card::new(Rank::Ace, Suit::Spades);
        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert!(ah < as_);
        assert!(kd < ah);

        let mut cards = vec![ah, kd, as_];
        cards.sort();
        assert_eq!(cards, vec![kd, ah, as_]);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "K♦");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5♠");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "10♥");

        let c = Card::new(Rank::Deuce, Suit::Clubs);
        assert_eq!(format!("{c:?}"), "Card(2♣)");
        assert_eq!(format!("{c:#}"), "2C");

        // The letter form parses back.
        let c = Card::new(Rank::Ten, Suit::Diamonds);
        assert_eq!(format!("{c:#}"), "10D");
        assert_eq!(format!("{c:#}").parse::<Card>(), Ok(c));
    }

    #[test]
    fn parse_card() {
        let as_ = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!("AS".parse::<Card>(), Ok(as_));
        assert_eq!("as".parse::<Card>(), Ok(as_));
        assert_eq!(" A♠ ".parse::<Card>(), Ok(as_));
        assert_eq!("A♠\u{FE0E}".parse::<Card>(), Ok(as_));

        let th = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!("10H".parse::<Card>(), Ok(th));
        assert_eq!("Th".parse::<Card>(), Ok(th));
        assert_eq!("t♥".parse::<Card>(), Ok(th));

        let c = Card::new(Rank::Queen, Suit::Diamonds);
        assert_eq!(c.to_string().parse::<Card>(), Ok(c));
    }

    #[test]
    fn parse_card_errors() {
        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!(
            "1S".parse::<Card>(),
            Err(ParseCardError::InvalidRank("1".to_string()))
        );
        assert_eq!(
            "S".parse::<Card>(),
            Err(ParseCardError::InvalidRank(String::new()))
        );
        assert_eq!(
            "AX".parse::<Card>(),
            Err(ParseCardError::InvalidSuit("X".to_string()))
        );
        assert_eq!(
            "11C".parse::<Card>(),
            Err(ParseCardError::InvalidRank("11".to_string()))
        );
    }

    #[test]
    fn parse_card_list() {
        let cards = parse_cards("AS, kd 10h\t2♣").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Ace, Suit::Spades),
                Card::new(Rank::King, Suit::Diamonds),
                Card::new(Rank::Ten, Suit::Hearts),
                Card::new(Rank::Deuce, Suit::Clubs),
            ]
        );

        assert!(parse_cards("").unwrap().is_empty());
        assert!(parse_cards("AS ZZ").is_err());
    }

    #[test]
    fn serde_card() {
        let c = Card::new(Rank::Jack, Suit::Clubs);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), c);
    }
}
