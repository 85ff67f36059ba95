//! Languages
//!
//!     A [Language] bundles everything needed to go from source text to a tree: the lexical
//!     rules, the operator table and the statement grammar. It is usually described by one
//!     YAML or JSON document ([LanguageConfig]):
//!
//!         keywords: [let, in]
//!         lex_rules:
//!           - { class: WS, type: WS, pattern: '\s+' }
//!           - { class: Symbol, type: IDENT, pattern: '[a-zA-Z_]\w*' }
//!         skip_classes: [WS]
//!         operators:
//!           - { id: identifier, lead: IDENT }
//!         rules: |
//!           functionDef DEF name:IDENT LPAREN params:identifier RPAREN stat+ END
//!
//!     Keywords are expanded into keyword rules placed before every other rule, so they win
//!     over the identifier pattern.
//!
//!     [Language::sample] is a small expression language with lambdas, conditionals, `let`,
//!     calls, lists and function definitions, built once from an embedded document.

pub mod config;

pub use config::LanguageConfig;

use crate::fixity::ast::AstNode;
use crate::fixity::error::Error;
use crate::fixity::lexing::{Token, Tokenizer};
use crate::fixity::parsing::Parser;
use once_cell::sync::Lazy;

const SAMPLE_CONFIG: &str = include_str!("language/sample.yaml");

static SAMPLE: Lazy<Language> = Lazy::new(|| {
    LanguageConfig::from_yaml(SAMPLE_CONFIG)
        .and_then(|config| config.build())
        .expect("embedded sample language is valid")
});

/// Tokenizer and parser for one language.
#[derive(Debug, Clone)]
pub struct Language {
    tokenizer: Tokenizer,
    parser: Parser,
}

impl Language {
    pub fn new(tokenizer: Tokenizer, parser: Parser) -> Self {
        Self { tokenizer, parser }
    }

    /// The bundled sample language.
    pub fn sample() -> &'static Language {
        &SAMPLE
    }

    pub fn sample_config() -> &'static str {
        SAMPLE_CONFIG
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, Error> {
        Ok(self.tokenizer.tokenize(source)?)
    }

    /// Tokenize and parse a program.
    pub fn parse(&self, source: &str) -> Result<AstNode, Error> {
        let tokens = self.tokenize(source)?;
        Ok(self.parser.parse(&tokens)?)
    }

    /// Tokenize and parse a single expression spanning all of `source`.
    pub fn parse_expression(&self, source: &str) -> Result<AstNode, Error> {
        let tokens = self.tokenize(source)?;
        Ok(self.parser.parse_expression(&tokens)?)
    }
}
