//! Error types for Resolute

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResoluteError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("round limit exceeded after {rounds} rounds without saturating")]
    RoundLimitExceeded { rounds: usize },

    #[error("clause limit exceeded with {clauses} clauses retained")]
    ClauseLimitExceeded { clauses: usize },
}

pub type Result<T> = std::result::Result<T, ResoluteError>;
