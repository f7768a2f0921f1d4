// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker dealer and hand outcomes simulation.
//!
//! A [game::Game] deals hands street by street to a table of players and
//! finds the showdown winners, the [simulation] module runs many hands to
//! collect hand types statistics.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod game;
pub mod poker;
pub mod simulation;
