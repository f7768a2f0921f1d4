// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories detectors.
//!
//! Each detector works on any number of cards, detectors that need more cards
//! than given return no match. When several groupings are equivalent the one
//! with the highest ranks wins, and suits break ties so that the same cards
//! always produce the same result regardless of their order.
use showdown_cards::{Card, Rank, Suit};

/// The number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// Returns the cards sorted from the highest to the lowest.
pub(crate) fn sorted_desc(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| b.cmp(a));
    sorted
}

/// Returns the cards that are not in `taken`.
pub(crate) fn remaining(cards: &[Card], taken: &[Card]) -> Vec<Card> {
    cards
        .iter()
        .filter(|c| !taken.contains(c))
        .copied()
        .collect()
}

/// Finds the highest `n` cards with the same rank.
///
/// Returns `None` if `n < 2` or if there are no `n` cards sharing a rank.
pub fn find_highest_n_of_a_kind(cards: &[Card], n: usize) -> Option<Vec<Card>> {
    if n < 2 || cards.len() < n {
        return None;
    }

    // Sorted cards with the same rank are next to each other, so the first
    // window with a single rank is the highest one.
    sorted_desc(cards)
        .windows(n)
        .find(|w| w.iter().all(|c| c.rank() == w[0].rank()))
        .map(<[Card]>::to_vec)
}

/// Checks if the cards contain a pair.
pub fn has_pair(cards: &[Card]) -> bool {
    find_highest_n_of_a_kind(cards, 2).is_some()
}

/// Checks if the cards contain two pairs.
pub fn has_two_pair(cards: &[Card]) -> bool {
    find_two_pair(cards).is_some()
}

/// Checks if the cards contain three of a kind.
pub fn has_three_of_a_kind(cards: &[Card]) -> bool {
    find_highest_n_of_a_kind(cards, 3).is_some()
}

/// Checks if the cards contain four of a kind.
pub fn has_four_of_a_kind(cards: &[Card]) -> bool {
    find_highest_n_of_a_kind(cards, 4).is_some()
}

/// Checks if the cards contain a full house.
pub fn has_full_house(cards: &[Card]) -> bool {
    find_full_house(cards).is_some()
}

/// Finds the highest pair and the highest pair among the other cards.
pub(crate) fn find_two_pair(cards: &[Card]) -> Option<Vec<Card>> {
    let mut first = find_highest_n_of_a_kind(cards, 2)?;
    let second = find_highest_n_of_a_kind(&remaining(cards, &first), 2)?;
    first.extend(second);
    Some(first)
}

/// Finds the highest three of a kind and the highest pair among the other cards.
pub(crate) fn find_full_house(cards: &[Card]) -> Option<Vec<Card>> {
    let mut trips = find_highest_n_of_a_kind(cards, 3)?;
    let pair = find_highest_n_of_a_kind(&remaining(cards, &trips), 2)?;
    trips.extend(pair);
    Some(trips)
}

/// Finds the largest group of cards with the same suit, sorted from the
/// highest to the lowest card.
///
/// When two suits have the same number of cards the higher suit wins.
pub fn find_biggest_flush(cards: &[Card]) -> Vec<Card> {
    Suit::suits()
        .map(|suit| {
            cards
                .iter()
                .filter(|c| c.suit() == suit)
                .copied()
                .collect::<Vec<_>>()
        })
        // The last of equal maximums is returned, suits go clubs to spades.
        .max_by_key(Vec::len)
        .map(|flush| sorted_desc(&flush))
        .unwrap_or_default()
}

/// Checks if the cards contain a flush.
pub fn has_flush(cards: &[Card]) -> bool {
    cards.len() >= HAND_SIZE && find_biggest_flush(cards).len() >= HAND_SIZE
}

/// Checks if the cards contain four cards of the same suit.
pub fn has_flush_draw(cards: &[Card]) -> bool {
    find_biggest_flush(cards).len() == HAND_SIZE - 1
}

/// Sorts cards by rank, removes cards with duplicate ranks and, if there is an
/// ace, puts a copy of it in front so that it can play low in a wheel.
pub(crate) fn straight_sequence(cards: &[Card]) -> Vec<Card> {
    let mut seq = cards.to_vec();
    seq.sort();
    seq.dedup_by_key(|c| c.rank());

    if let Some(&ace) = seq.last().filter(|c| c.rank() == Rank::Ace) {
        seq.insert(0, ace);
    }

    seq
}

/// Checks if `current` follows `previous` in a straight.
fn is_next_in_straight(previous: Card, current: Card) -> bool {
    current.rank().value() == previous.rank().value() + 1
        || (previous.rank() == Rank::Ace && current.rank() == Rank::Deuce)
}

/// The ordering value of a card in a straight sequence, an ace that comes
/// before another card is playing low.
fn straight_value(card: Card) -> u8 {
    if card.rank() == Rank::Ace {
        Rank::LOW_ACE_VALUE
    } else {
        card.rank().value()
    }
}

/// Finds the best run of consecutive ranks, sorted from the lowest to the
/// highest card.
///
/// The `better` closure is called with a run and the best run found so far and
/// returns true if the run should replace the best one.
pub fn find_best_straight<F>(cards: &[Card], better: F) -> Vec<Card>
where
    F: Fn(&[Card], &[Card]) -> bool,
{
    let seq = straight_sequence(cards);
    let mut best: &[Card] = &[];
    let mut start = 0;

    for idx in 1..=seq.len() {
        if idx < seq.len() && is_next_in_straight(seq[idx - 1], seq[idx]) {
            continue;
        }

        let run = &seq[start..idx];
        if better(run, best) {
            best = run;
        }

        start = idx;
    }

    best.to_vec()
}

/// Finds the run of consecutive ranks with the highest top card.
///
/// An ace with no king next to it is a one card run topped by an ace, so it
/// beats any run that does not end with an ace. The ace copy that plays low
/// in a wheel never beats a later run.
pub fn find_highest_straight(cards: &[Card]) -> Vec<Card> {
    find_best_straight(cards, |run, best| {
        // The ace moved in front for the wheel should not win on its own.
        let lone_ace = best.len() == 1 && best[0].rank() == Rank::Ace;
        match (run.last(), best.last()) {
            (Some(r), Some(b)) if !lone_ace => r.rank() > b.rank(),
            _ => true,
        }
    })
}

/// Finds the longest run of consecutive ranks, the lowest run wins a tie.
pub fn find_longest_straight(cards: &[Card]) -> Vec<Card> {
    find_best_straight(cards, |run, best| run.len() > best.len())
}

/// Checks if the cards contain a straight.
pub fn has_straight(cards: &[Card]) -> bool {
    cards.len() >= HAND_SIZE && find_longest_straight(cards).len() >= HAND_SIZE
}

/// Checks if the cards are one card away from a straight.
///
/// That is four cards in a row, or four cards with a single hole in the
/// middle. Cards that already make a straight are not a draw.
pub fn has_straight_draw(cards: &[Card]) -> bool {
    let needed = HAND_SIZE - 1;
    let longest = find_longest_straight(cards).len();
    if longest == needed {
        return true;
    } else if longest > needed {
        return false;
    }

    straight_sequence(cards).windows(needed).any(|w| {
        let mut gaps = w.windows(2).filter_map(|p| {
            let delta = p[1].rank().value() - straight_value(p[0]);
            (delta > 1).then_some(delta)
        });

        matches!((gaps.next(), gaps.next()), (Some(2), None))
    })
}

/// Checks if the cards contain a straight flush.
pub fn has_straight_flush(cards: &[Card]) -> bool {
    find_straight_flush(cards).is_some()
}

/// Finds the longest straight among the biggest flush cards.
pub(crate) fn find_straight_flush(cards: &[Card]) -> Option<Vec<Card>> {
    if !has_flush(cards) {
        return None;
    }

    let run = find_longest_straight(&find_biggest_flush(cards));
    (run.len() >= HAND_SIZE).then_some(run)
}

/// Returns the five highest cards of a straight run, highest first.
pub(crate) fn top_of_run(run: &[Card]) -> Vec<Card> {
    run.iter().rev().take(HAND_SIZE).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::parse_cards;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    #[test]
    fn highest_n_of_a_kind() {
        let hand = cards("2C AS KD AD KC KH");
        assert_eq!(find_highest_n_of_a_kind(&hand, 3), Some(cards("KH KD KC")));
        assert_eq!(find_highest_n_of_a_kind(&hand, 2), Some(cards("AS AD")));
        assert_eq!(find_highest_n_of_a_kind(&hand, 4), None);

        // Degenerate sizes are no match.
        assert_eq!(find_highest_n_of_a_kind(&hand, 1), None);
        assert_eq!(find_highest_n_of_a_kind(&hand, 0), None);
        assert_eq!(find_highest_n_of_a_kind(&cards("AS"), 2), None);
        assert_eq!(find_highest_n_of_a_kind(&[], 2), None);
    }

    #[test]
    fn groupings_ignore_cards_order() {
        let hand = cards("9C 9D 4S 9H 4H 4D");
        let mut reversed = hand.clone();
        reversed.reverse();

        assert_eq!(
            find_highest_n_of_a_kind(&hand, 3),
            find_highest_n_of_a_kind(&reversed, 3)
        );
        assert_eq!(find_full_house(&hand), Some(cards("9H 9D 9C 4S 4H")));
        assert_eq!(find_full_house(&reversed), Some(cards("9H 9D 9C 4S 4H")));
    }

    #[test]
    fn pairs_and_kinds() {
        assert!(has_pair(&cards("2C 2D 5H 9S KD")));
        assert!(!has_pair(&cards("2C 3D 5H 9S KD")));

        assert!(has_two_pair(&cards("2C 2D 5H 5S KD")));
        assert!(!has_two_pair(&cards("2C 2D 5H 9S KD")));
        assert_eq!(
            find_two_pair(&cards("2C 2D 5H 5S KD KS")),
            Some(cards("KS KD 5S 5H"))
        );

        assert!(has_three_of_a_kind(&cards("2C 2D 2H 9S KD")));
        assert!(has_four_of_a_kind(&cards("2C 2D 2H 2S KD")));
        assert!(!has_four_of_a_kind(&cards("2C 2D 2H 9S KD")));

        assert!(has_full_house(&cards("2C 2D 2H 9S 9D")));
        assert!(!has_full_house(&cards("2C 2D 2H 9S KD")));
        // The pair can come from a second three of a kind.
        assert_eq!(
            find_full_house(&cards("KS KH KD 2S 2H 2D 9C")),
            Some(cards("KS KH KD 2S 2H"))
        );
    }

    #[test]
    fn biggest_flush() {
        let hand = cards("2H AH KS 4H 3H QS 5H");
        assert_eq!(find_biggest_flush(&hand), cards("AH 5H 4H 3H 2H"));
        assert!(has_flush(&hand));

        // Ties go to the higher suit.
        assert_eq!(find_biggest_flush(&cards("AH KH QS JS")), cards("QS JS"));
        assert!(find_biggest_flush(&[]).is_empty());

        assert!(has_flush_draw(&cards("AH KH QH JH 2S")));
        assert!(!has_flush_draw(&cards("AH KH QH 2S 3S")));
        assert!(!has_flush(&cards("AH KH QH JH 2S")));
    }

    #[test]
    fn straight_sequence_has_low_ace() {
        let seq = straight_sequence(&cards("5S AD 3C 3H 4H 2S"));
        assert_eq!(seq, cards("AD 2S 3C 4H 5S AD"));

        let seq = straight_sequence(&cards("KS QD"));
        assert_eq!(seq, cards("QD KS"));
    }

    #[test]
    fn longest_and_highest_straight() {
        let hand = cards("2D 3C 4S 9H 10S JD");
        assert_eq!(find_longest_straight(&hand), cards("2D 3C 4S"));
        assert_eq!(find_highest_straight(&hand), cards("9H 10S JD"));

        let hand = cards("2C 3D 4H 5S 6C 9D 10H");
        assert_eq!(find_longest_straight(&hand), cards("2C 3D 4H 5S 6C"));
        assert!(has_straight(&hand));

        // The low ace does not beat an ace high run.
        assert_eq!(find_highest_straight(&cards("AS KD QC")), cards("QC KD AS"));
        assert_eq!(
            find_highest_straight(&cards("AS KD QC 5H 6D")),
            cards("QC KD AS")
        );

        // A lone high ace beats lower runs.
        let hand = cards("AS 5D 6C 7H");
        assert_eq!(find_highest_straight(&hand), cards("AS"));
        assert_eq!(find_highest_straight(&cards("AS 9D 10C JH")), cards("AS"));
        assert_eq!(find_longest_straight(&hand), cards("5D 6C 7H"));

        // Also when the ace plays low in another run.
        let hand = cards("AS 2D 3C");
        assert_eq!(find_longest_straight(&hand), cards("AS 2D 3C"));
        assert_eq!(find_highest_straight(&hand), cards("AS"));

        assert!(find_longest_straight(&[]).is_empty());
    }

    #[test]
    fn wheel_straight() {
        let hand = cards("AS 2D 3C 4H 5S");
        assert_eq!(find_longest_straight(&hand), cards("AS 2D 3C 4H 5S"));
        assert!(has_straight(&hand));

        let hand = cards("AS 2D 3C 4H 5S 6D");
        assert_eq!(find_longest_straight(&hand), cards("AS 2D 3C 4H 5S 6D"));
        assert_eq!(
            top_of_run(&find_longest_straight(&hand)),
            cards("6D 5S 4H 3C 2D")
        );

        // Queen, King, Ace, Deuce, Trey is not a straight.
        assert!(!has_straight(&cards("QS KD AC 2H 3S")));
    }

    #[test]
    fn straight_flush() {
        let hand = cards("9S 10S JS QS KS 2D");
        assert!(has_straight_flush(&hand));

        // A straight and a flush that are not a straight flush.
        let hand = cards("9S 10S JS QS 2S KD");
        assert!(has_straight(&hand));
        assert!(has_flush(&hand));
        assert!(!has_straight_flush(&hand));
    }

    #[test]
    fn straight_draws() {
        // Inside draw.
        assert!(has_straight_draw(&cards("3S 4D 6C 7H KS")));
        // Open ended.
        assert!(has_straight_draw(&cards("5S 6D 7C 8H KD")));
        // Wheel draw.
        assert!(has_straight_draw(&cards("AS 2D 3C 5H 9D")));
        assert!(has_straight_draw(&cards("AS 2D 3C 4H 9D")));

        assert!(!has_straight_draw(&cards("2S 5D 9C JH KD")));
        assert!(!has_straight_draw(&cards("3S 5D 7C 8H")));
        assert!(!has_straight_draw(&cards("3S 4D 7C 8H")));
        // Already a straight.
        assert!(!has_straight_draw(&cards("5S 6D 7C 8H 9D")));
    }
}
