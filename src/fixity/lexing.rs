//! Lexer
//!
//!     The tokenizer is deliberately dumb: it owns an ordered list of lexical rules, each a
//!     `(class, type, pattern)` triple, and at every offset it tries them in declaration order.
//!     The first rule whose pattern matches a non-empty prefix of the remaining input wins.
//!     That ordering is the only disambiguation mechanism, which is why reserved words must be
//!     listed before the generic identifier rule.
//!
//!     Whitespace is tokenized like anything else and filtered afterwards by class, so the
//!     parser never sees it. See [Tokenizer::skipping].
//!
//! Source Positions
//!
//!     Every token carries its byte span and the line/column of its first byte. Positions are
//!     only used for error reporting; the parser consumes token types and values.

pub mod common;
pub mod location;
pub mod rules;
pub mod token;
pub mod tokenizer;

pub use common::LexError;
pub use location::{Position, SourceLocation};
pub use rules::LexRule;
pub use token::Token;
pub use tokenizer::Tokenizer;
