//! Testing utilities
//!
//!     Parser tests compare S-expressions, not node structs: the rendering is short, shows the
//!     whole tree shape at once, and reads like the grouping it asserts. These helpers run the
//!     sample language and panic with the underlying error on failure, so a test body stays a
//!     single assertion:
//!
//!         assert_eq!(sexpr("1 + 2 * 3"), "(plus 1 (mul 2 3))");
//!         assert_eq!(syntax_error("(1 + 2").found_type(), END_OF_INPUT);
//!
//!     For other languages, build a [Language](crate::fixity::language::Language) and call its
//!     methods directly.

use crate::fixity::error::Error;
use crate::fixity::language::Language;
use crate::fixity::lexing::Token;
use crate::fixity::parsing::SyntaxError;

/// S-expression of `source` parsed as one expression in the sample language.
pub fn sexpr(source: &str) -> String {
    match Language::sample().parse_expression(source) {
        Ok(node) => node.to_string(),
        Err(err) => panic!("failed to parse {:?}: {}", source, err),
    }
}

/// S-expression of `source` parsed as a program in the sample language.
pub fn sexpr_program(source: &str) -> String {
    match Language::sample().parse(source) {
        Ok(node) => node.to_string(),
        Err(err) => panic!("failed to parse {:?}: {}", source, err),
    }
}

/// The syntax error `source` produces as a program in the sample language.
pub fn syntax_error(source: &str) -> SyntaxError {
    match Language::sample().parse(source) {
        Err(Error::Syntax(err)) => err,
        Err(other) => panic!("expected a syntax error for {:?}, got {}", source, other),
        Ok(node) => panic!("expected a syntax error for {:?}, parsed {}", source, node),
    }
}

/// Token types of `source` in the sample language.
pub fn tokens_of(source: &str) -> Vec<String> {
    match Language::sample().tokenize(source) {
        Ok(tokens) => tokens.into_iter().map(|token: Token| token.token_type).collect(),
        Err(err) => panic!("failed to tokenize {:?}: {}", source, err),
    }
}
