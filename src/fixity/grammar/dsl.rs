//! Token definitions for the statement rule language.

use logos::Logos;

#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r]+")]
pub enum DslToken {
    #[regex(r"#[^\n]*")]
    Comment,

    // Rule names, literal token types, capture names and references
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Word(String),

    #[token(":")]
    Colon,

    // Quantifiers
    #[token("+")]
    Plus,
    #[token("*")]
    Star,
}

impl DslToken {
    pub fn is_quantifier(&self) -> bool {
        matches!(self, DslToken::Plus | DslToken::Star)
    }
}
