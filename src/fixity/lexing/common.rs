//! Common lexer module
//!
//! Errors shared by the tokenizer and the rule compiler.

use crate::fixity::lexing::location::Position;
use thiserror::Error;

/// Errors that can occur during lexing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// No rule matches the input at this offset
    #[error("unrecognized character {character:?} at {position}")]
    Unrecognized {
        character: char,
        offset: usize,
        position: Position,
    },
    /// A rule pattern failed to compile
    #[error("invalid pattern for token type {token_type}: {message}")]
    InvalidPattern { token_type: String, message: String },
}
