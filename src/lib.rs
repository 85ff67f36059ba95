//! # fixity
//!
//! A configurable front end for small expression-and-statement languages.
//!
//! Source text is tokenized by an ordered list of regex rules, then handed to a
//! table-driven operator-precedence parser. Precedence, associativity and the
//! shape of every construct (prefix, infix, postfix, matchfix, mixfix) come from
//! declarative operator data; statement productions such as function
//! definitions come from a tiny line-oriented grammar language compiled at
//! build time and spliced into the same dispatch loop.
//!
//! File Layout
//!
//! src/fixity
//!   ├── lexing       Regex rule tokenizer and source positions
//!   ├── operators    Operator descriptors and the validated lookup table
//!   ├── grammar      Statement grammar compiler
//!   ├── parsing      The precedence-climbing engine
//!   ├── ast          Node data and S-expression rendering
//!   └── language     Bundled configuration (YAML/JSON) and the sample language
//!
//! For test helpers, see the [testing module](fixity::testing).

#![allow(rustdoc::invalid_html_tags)]

pub mod fixity;

pub use fixity::ast::{AstNode, Capture, CaptureValue, Scalar};
pub use fixity::error::Error;
pub use fixity::grammar::{compile, GrammarError, StatementRule};
pub use fixity::language::{Language, LanguageConfig};
pub use fixity::lexing::{LexError, LexRule, Token, Tokenizer};
pub use fixity::operators::{Assoc, ConfigError, OperatorSpec, OperatorTable};
pub use fixity::parsing::{BuildError, Parser, SyntaxError};
