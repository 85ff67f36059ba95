//! Parser errors

use crate::fixity::grammar::GrammarError;
use crate::fixity::lexing::{Position, Token};
use crate::fixity::operators::ConfigError;
use std::collections::BTreeSet;
use thiserror::Error;

/// Placeholder used when the input ran out.
pub const END_OF_INPUT: &str = "end of input";

/// A malformed token stream. No partial result accompanies it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}: found {}{}", describe_found(.found), describe_expected(.expected))]
pub struct SyntaxError {
    /// The offending token, `None` at end of input.
    pub found: Option<Token>,
    /// Token types that would have been accepted here.
    pub expected: BTreeSet<String>,
    pub message: String,
}

impl SyntaxError {
    pub fn new<S: Into<String>>(
        found: Option<&Token>,
        expected: impl IntoIterator<Item = S>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            found: found.cloned(),
            expected: expected.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }

    /// Where the error occurred, `None` at end of input.
    pub fn position(&self) -> Option<Position> {
        self.found.as_ref().map(|token| token.position)
    }

    pub fn found_type(&self) -> &str {
        self.found
            .as_ref()
            .map_or(END_OF_INPUT, |token| token.token_type.as_str())
    }
}

fn describe_found(found: &Option<Token>) -> String {
    match found {
        Some(token) => token.to_string(),
        None => END_OF_INPUT.to_string(),
    }
}

fn describe_expected(expected: &BTreeSet<String>) -> String {
    let names: Vec<&str> = expected.iter().map(String::as_str).collect();
    match names.as_slice() {
        [] => String::new(),
        [one] => format!(", expected {}", one),
        many => format!(", expected one of {}", many.join(", ")),
    }
}

/// Raised while constructing a [Parser](super::Parser).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}
