// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A dealer that runs poker hands without betting.
//!
//! A [Game] owns the deck and the players, deals the hole cards and the board
//! street by street and at showdown rates each player hand to find the
//! winners. After the showdown all the cards go back to the deck and the deck
//! is reshuffled, so that a game can run any number of hands.
use ahash::AHashSet;
use anyhow::{Context, Result, bail};
use log::{debug, info};
use rand::prelude::*;
use showdown_eval::{check_draws, eval::best_ratings, evaluate, rate};
use std::fmt;

use crate::poker::{
    Card, Deck, Draws, GameId, HandId, HandRating, HandType, PlayerCards, PlayerId,
};

/// A player at a game.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    name: String,
    cards: PlayerCards,
    hands_played: u32,
    wins: u32,
}

impl Player {
    /// Creates a player with a default name.
    pub fn new(id: PlayerId) -> Self {
        Self::with_name(id, format!("Player {id}"))
    }

    /// Creates a player with the given name.
    pub fn with_name(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cards: PlayerCards::None,
            hands_played: 0,
            wins: 0,
        }
    }

    /// The player id.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The player name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player hole cards.
    pub fn cards(&self) -> PlayerCards {
        self.cards
    }

    /// The number of hands that went to showdown with this player.
    pub fn hands_played(&self) -> u32 {
        self.hands_played
    }

    /// The number of hands won, ties included.
    pub fn wins(&self) -> u32 {
        self.wins
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The hand streets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    /// Hole cards dealt, empty board.
    Preflop,
    /// Three board cards.
    Flop,
    /// Four board cards.
    Turn,
    /// Five board cards.
    River,
}

impl Street {
    /// The number of board cards at this street.
    pub fn board_size(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Street::Preflop => "Pre-Flop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        };

        f.write_str(name)
    }
}

/// A player hand during a street.
#[derive(Debug, Clone)]
pub struct Standing {
    /// The player id.
    pub player_id: PlayerId,
    /// The player hole cards.
    pub cards: PlayerCards,
    /// The current hand type for hole cards and board.
    pub hand_type: HandType,
    /// The cards that make the hand.
    pub made: Vec<Card>,
    /// Draws, only before the river.
    pub draws: Draws,
}

/// A finished hand.
#[derive(Debug, Clone)]
pub struct HandRecord {
    id: HandId,
    game_id: GameId,
    board: Vec<Card>,
    ratings: Vec<(PlayerId, HandRating)>,
    winners: Vec<PlayerId>,
}

impl HandRecord {
    /// The hand id.
    pub fn id(&self) -> HandId {
        self.id
    }

    /// The id of the game that played this hand.
    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    /// The board cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Each player rating at showdown, in seat order.
    pub fn ratings(&self) -> &[(PlayerId, HandRating)] {
        &self.ratings
    }

    /// Returns a player rating.
    pub fn rating(&self, player_id: PlayerId) -> Option<&HandRating> {
        self.ratings
            .iter()
            .find(|(id, _)| *id == player_id)
            .map(|(_, r)| r)
    }

    /// The hand winners, more than one for a tie.
    pub fn winners(&self) -> &[PlayerId] {
        &self.winners
    }
}

/// A game with a dealer and some players.
#[derive(Debug)]
pub struct Game {
    id: GameId,
    players: Vec<Player>,
    deck: Deck,
    rng: StdRng,
    board: Vec<Card>,
    street: Option<Street>,
    hands: Vec<HandRecord>,
}

impl Game {
    /// The minimum number of players.
    pub const MIN_PLAYERS: usize = 2;

    /// The maximum number of players, there must be enough cards for the
    /// hole cards and the board.
    pub const MAX_PLAYERS: usize = 23;

    /// Creates a game with a randomly shuffled deck.
    pub fn new(id: GameId, players: Vec<Player>) -> Result<Self> {
        Self::with_rng(id, players, StdRng::from_os_rng())
    }

    /// Creates a game with a reproducible shuffle.
    pub fn with_seed(id: GameId, players: Vec<Player>, seed: u64) -> Result<Self> {
        Self::with_rng(id, players, StdRng::seed_from_u64(seed))
    }

    fn with_rng(id: GameId, players: Vec<Player>, mut rng: StdRng) -> Result<Self> {
        if !(Self::MIN_PLAYERS..=Self::MAX_PLAYERS).contains(&players.len()) {
            bail!(
                "A game needs {} to {} players, got {}",
                Self::MIN_PLAYERS,
                Self::MAX_PLAYERS,
                players.len()
            );
        }

        let ids = players.iter().map(Player::id).collect::<AHashSet<_>>();
        if ids.len() != players.len() {
            bail!("Duplicate player ids");
        }

        let deck = Deck::new_and_shuffled(&mut rng);

        Ok(Self {
            id,
            players,
            deck,
            rng,
            board: Vec::new(),
            street: None,
            hands: Vec::new(),
        })
    }

    /// The game id.
    pub fn id(&self) -> GameId {
        self.id
    }

    /// The game players in seat order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns a player.
    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// The current board.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The street of the hand in progress.
    pub fn street(&self) -> Option<Street> {
        self.street
    }

    /// The number of cards left in the deck.
    pub fn deck_count(&self) -> usize {
        self.deck.count()
    }

    /// The finished hands.
    pub fn hands(&self) -> &[HandRecord] {
        &self.hands
    }

    /// Returns a finished hand.
    pub fn hand(&self, hand_id: HandId) -> Option<&HandRecord> {
        self.hands.get(hand_id.index())
    }

    /// Starts a new hand dealing two cards to each player.
    pub fn start_hand(&mut self) -> Result<()> {
        if let Some(street) = self.street {
            bail!("Hand in progress at the {street}");
        }

        for player in &mut self.players {
            let mut cards = self
                .deck
                .deal_many(2)
                .context("Not enough cards for the hole cards")?;
            cards.sort_by(|a, b| b.cmp(a));
            player.cards = PlayerCards::Cards(cards[0], cards[1]);
            debug!("Dealt {} to {}", player.cards, player.name);
        }

        self.street = Some(Street::Preflop);
        Ok(())
    }

    /// Deals the next street board cards.
    pub fn deal_street(&mut self) -> Result<Street> {
        let Some(street) = self.street else {
            bail!("No hand in progress");
        };

        let Some(next) = street.next() else {
            bail!("All streets dealt");
        };

        let count = next.board_size() - street.board_size();
        let mut cards = self
            .deck
            .deal_many(count)
            .with_context(|| format!("Not enough cards for the {next}"))?;

        // Flop cards are shown highest first.
        cards.sort_by(|a, b| b.cmp(a));
        self.board.extend(cards);
        self.street = Some(next);

        debug!("{next} {}", CardList(&self.board));
        Ok(next)
    }

    /// Returns the players hands for the current street.
    pub fn standings(&self) -> Vec<Standing> {
        let check = self
            .street
            .is_some_and(|s| s > Street::Preflop && s < Street::River);

        self.players
            .iter()
            .filter(|p| p.cards != PlayerCards::None)
            .map(|p| {
                let cards = self.player_cards(p);
                let (hand_type, made) = evaluate(&cards);
                let draws = if check {
                    check_draws(&cards, hand_type)
                } else {
                    Draws::default()
                };

                Standing {
                    player_id: p.id,
                    cards: p.cards,
                    hand_type,
                    made,
                    draws,
                }
            })
            .collect()
    }

    /// Rates all players hands and finds the winners, then returns all the
    /// cards to the deck and reshuffles it.
    pub fn showdown(&mut self) -> Result<&HandRecord> {
        if self.street != Some(Street::River) {
            bail!("Showdown before the river");
        }

        let mut ratings = Vec::with_capacity(self.players.len());
        for p in &self.players {
            ratings.push((p.id, rate(&self.player_cards(p))?));
        }

        let best = ratings.iter().map(|(_, r)| r.clone()).collect::<Vec<_>>();
        let winners = best_ratings(&best)
            .into_iter()
            .map(|idx| ratings[idx].0)
            .collect::<Vec<_>>();

        for p in &mut self.players {
            p.hands_played += 1;
            if winners.contains(&p.id) {
                p.wins += 1;
            }
        }

        let id = HandId::from_index(self.hands.len());
        let record = HandRecord {
            id,
            game_id: self.id,
            board: self.board.clone(),
            ratings,
            winners,
        };

        for winner in &record.winners {
            if let (Some(player), Some(rating)) = (self.player(*winner), record.rating(*winner)) {
                info!("Hand {id} won by {player} with {rating}");
            }
        }

        self.finish_hand();
        self.hands.push(record);

        self.hands.last().context("Missing hand record")
    }

    /// Plays a hand through all the streets to showdown.
    pub fn play_hand(&mut self) -> Result<&HandRecord> {
        self.start_hand()?;
        while self.street < Some(Street::River) {
            self.deal_street()?;
        }

        self.showdown()
    }

    fn player_cards(&self, player: &Player) -> Vec<Card> {
        let mut cards = player.cards.to_vec();
        cards.extend_from_slice(&self.board);
        cards
    }

    fn finish_hand(&mut self) {
        for p in &mut self.players {
            let cards = p.cards.to_vec();
            self.deck.add(cards);
            p.cards = PlayerCards::None;
        }

        self.deck.add(self.board.drain(..));
        self.deck.shuffle(&mut self.rng);
        self.street = None;

        debug!("Deck reshuffled with {} cards", self.deck.count());
    }
}

/// Formats cards separated by spaces.
pub struct CardList<'a>(pub &'a [Card]);

impl fmt::Display for CardList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poker::PlayerIds;

    fn new_game(players: usize, seed: u64) -> Game {
        let mut ids = PlayerIds::new();
        let players = (0..players).map(|_| Player::new(ids.next_id())).collect();
        Game::with_seed(GameId::new(1), players, seed).unwrap()
    }

    #[test]
    fn player_names() {
        let mut ids = PlayerIds::new();
        let p1 = Player::new(ids.next_id());
        let p2 = Player::with_name(ids.next_id(), "Alice");
        assert_eq!(p1.name(), "Player 1");
        assert_eq!(p2.to_string(), "Alice");
        assert_eq!(p2.id().value(), 2);
    }

    #[test]
    fn players_count() {
        let mut ids = PlayerIds::new();
        let one = vec![Player::new(ids.next_id())];
        assert!(Game::new(GameId::new(1), one).is_err());

        let many = (0..24).map(|_| Player::new(ids.next_id())).collect();
        assert!(Game::new(GameId::new(1), many).is_err());

        let id = ids.next_id();
        let dups = vec![Player::new(id), Player::new(id)];
        assert!(Game::new(GameId::new(1), dups).is_err());
    }

    #[test]
    fn streets_in_order() {
        let mut game = new_game(4, 7);
        assert!(game.deal_street().is_err());
        assert!(game.showdown().is_err());

        game.start_hand().unwrap();
        assert_eq!(game.street(), Some(Street::Preflop));
        assert!(game.start_hand().is_err());
        assert!(game.showdown().is_err());
        assert_eq!(game.deck_count(), Deck::SIZE - 8);

        for p in game.players() {
            let PlayerCards::Cards(c1, c2) = p.cards() else {
                panic!("No cards for {p}");
            };
            assert!(c1 > c2);
        }

        assert_eq!(game.deal_street().unwrap(), Street::Flop);
        assert_eq!(game.board().len(), 3);
        assert!(game.board().windows(2).all(|w| w[0] > w[1]));
        assert_eq!(game.deal_street().unwrap(), Street::Turn);
        assert_eq!(game.deal_street().unwrap(), Street::River);
        assert_eq!(game.board().len(), 5);
        assert!(game.deal_street().is_err());
        assert_eq!(game.deck_count(), Deck::SIZE - 13);
    }

    #[test]
    fn standings_per_street() {
        let mut game = new_game(3, 11);
        game.start_hand().unwrap();

        let standings = game.standings();
        assert_eq!(standings.len(), 3);
        assert!(standings.iter().all(|s| s.draws.is_empty()));

        game.deal_street().unwrap();
        for s in game.standings() {
            if s.hand_type >= HandType::Straight {
                assert!(s.draws.is_empty());
            }
        }

        game.deal_street().unwrap();
        game.deal_street().unwrap();
        assert!(game.standings().iter().all(|s| s.draws.is_empty()));
    }

    #[test]
    fn showdown_returns_cards() {
        let mut game = new_game(6, 3);
        for _ in 0..50 {
            let record = game.play_hand().unwrap();
            assert_eq!(record.board().len(), 5);
            assert_eq!(record.ratings().len(), 6);
            assert!(!record.winners().is_empty());

            assert_eq!(game.deck_count(), Deck::SIZE);
            assert!(game.board().is_empty());
            assert_eq!(game.street(), None);
            assert!(game.players().iter().all(|p| p.cards() == PlayerCards::None));
        }

        assert_eq!(game.hands().len(), 50);
        let wins = game.players().iter().map(|p| p.wins()).sum::<u32>();
        assert!(wins >= 50);
        assert!(game.players().iter().all(|p| p.hands_played() == 50));
    }

    #[test]
    fn showdown_winners_have_best_rating() {
        let mut game = new_game(5, 19);
        for _ in 0..20 {
            let record = game.play_hand().unwrap().clone();
            let best = record.ratings().iter().map(|(_, r)| r).max().unwrap();

            for (id, rating) in record.ratings() {
                assert_eq!(record.winners().contains(id), rating == best);
            }

            // Records refer to their game by id.
            assert_eq!(record.game_id(), game.id());
            assert_eq!(game.hand(record.id()).unwrap().id(), record.id());
        }
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let boards = |seed| {
            let mut game = new_game(4, seed);
            (0..5)
                .map(|_| game.play_hand().unwrap().board().to_vec())
                .collect::<Vec<_>>()
        };

        assert_eq!(boards(42), boards(42));
    }

    #[test]
    fn card_list() {
        let cards = showdown_eval::parse_cards("AS 10D 2C").unwrap();
        assert_eq!(CardList(&cards).to_string(), "A♠ 10♦ 2♣");
        assert_eq!(CardList(&[]).to_string(), "");
    }
}
