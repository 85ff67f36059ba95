//! Statement grammar
//!
//!     Statements are the layer above expressions: a function definition, a loop, anything
//!     that starts with a reserved token and mixes fixed tokens with expressions and nested
//!     statements. They are described in a small line-oriented rule language and compiled
//!     into [StatementRule](rule::StatementRule) descriptors that the parser interprets with
//!     the same dispatch machinery it uses for expressions.
//!
//!     One rule per line, blank lines and `#` comments ignored:
//!
//!         # function definition
//!         functionDef DEF name:IDENT LPAREN params:identifier RPAREN stat+ END
//!
//!     The first word names the rule. Every further element is one of:
//!
//!         - `WORD`: a literal token, matched by token type.
//!         - `name:ref`: a capture. `ref` is an operator id (one construct headed by that
//!           operator), the lead token of an atom (exactly one leaf), or `stat`.
//!         - `stat`: one nested statement or expression, captured as `stat`.
//!         - `stat+`, `stat*`, `name:stat+`, `name:stat*`: repetitions of `stat` that run up
//!           to the literal that follows them. A repetition ending its rule stops at the
//!           first token that cannot start a statement or expression.
//!
//!     Compilation only produces descriptors. Rules must start with a literal, the lead of
//!     a rule must be unique, and every operator reference must resolve against the table.

pub mod compile;
pub mod dsl;
pub mod error;
pub mod rule;

pub use compile::compile;
pub use error::GrammarError;
pub use rule::{CaptureTarget, PatternElement, Quantifier, StatementRule, STATEMENT_NONTERMINAL};
