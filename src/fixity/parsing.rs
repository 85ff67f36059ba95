//! Parser
//!
//!     A generalized operator-precedence parser. It knows nothing about any particular
//!     language: every decision is driven by an [OperatorTable](crate::fixity::operators::OperatorTable)
//!     and a list of compiled [StatementRule](crate::fixity::grammar::StatementRule)s.
//!
//! Dispatch
//!
//!     Parsing is a set of mutually recursive procedures over a token cursor:
//!
//!         - lead dispatch: the next token starts something. Atoms become leaves, prefix
//!           operators parse their operand, circumfix operators parse their interior up to the
//!           close token, mixfix operators alternate parts with their separators, and statement
//!           rule leads hand over to statement dispatch.
//!         - continuation dispatch: the next token extends the expression parsed so far
//!           (infix, postfix, ternary infix, postcircumfix).
//!         - statement dispatch: literals and captures of a statement rule, in order.
//!
//!     The climbing loop in [expressions] resolves a head with lead dispatch and then, per
//!     iteration, asks whether the next token continues the head with an admissible operator:
//!     one whose precedence exceeds the current threshold, or equals it while
//!     right-associative. Continuation is always checked before anything else, so an opening
//!     parenthesis right after an operand is a call, and the same token in lead position is a
//!     grouping.
//!
//! Sequences and Assignment
//!
//!     The sequence (comma) and assignment meta operators sit below every table operator and
//!     are handled in [sequences], outside the climbing loop. Bracket interiors, the interior
//!     parts of mixfix constructs, statement bodies and the program root are sequence
//!     contexts; operands of ordinary operators are not.
//!
//! Failure
//!
//!     The first error wins. A [SyntaxError] carries the offending token (or end of input) and
//!     the set of token types that would have been accepted. Nesting deeper than
//!     [MAX_NESTING_DEPTH] expression or statement levels is reported the same way.

pub mod cursor;
pub mod error;
mod expressions;
pub mod parser;
mod sequences;
mod statements;

pub use cursor::TokenCursor;
pub use error::{BuildError, SyntaxError, END_OF_INPUT};
pub use parser::{Parser, MAX_NESTING_DEPTH};
