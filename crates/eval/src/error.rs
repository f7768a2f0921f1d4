// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator errors.
use showdown_cards::ParseCardError;
use thiserror::Error;

/// Evaluator error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed card text or too few cards to evaluate.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// A rating that was not produced by this evaluator.
    #[error("Rating type mismatch")]
    TypeMismatch,
}

impl From<ParseCardError> for Error {
    fn from(e: ParseCardError) -> Self {
        Error::InvalidInput(e.to_string())
    }
}

/// Evaluator result type.
pub type Result<T> = std::result::Result<T, Error>;
