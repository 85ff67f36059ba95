//! Token produced by the tokenizer and consumed by the parser.

use crate::fixity::lexing::location::Position;
use serde::Serialize;
use std::fmt;
use std::ops::Range as ByteRange;

/// A single lexeme.
///
/// `class` groups related types (Keyword, Symbol, Punc, ...) and is what whitespace filtering
/// looks at; `token_type` is the name the operator table and grammar rules refer to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub class: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub value: String,
    pub span: ByteRange<usize>,
    pub position: Position,
}

impl Token {
    pub fn new(
        class: impl Into<String>,
        token_type: impl Into<String>,
        value: impl Into<String>,
        span: ByteRange<usize>,
        position: Position,
    ) -> Self {
        Self {
            class: class.into(),
            token_type: token_type.into(),
            value: value.into(),
            span,
            position,
        }
    }

    pub fn is(&self, token_type: &str) -> bool {
        self.token_type == token_type
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}` at {}", self.token_type, self.value, self.position)
    }
}
