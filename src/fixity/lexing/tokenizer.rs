//! Ordered-rule tokenizer
//!
//!     Each rule pattern is compiled once, anchored with `\A`, and applied to the unconsumed
//!     tail of the input. Rules are tried in declaration order and the first non-empty match
//!     produces the token. A rule that can only match the empty string at some offset is
//!     simply skipped there, so a sloppy pattern cannot stall the scan.

use crate::fixity::lexing::common::LexError;
use crate::fixity::lexing::location::SourceLocation;
use crate::fixity::lexing::rules::LexRule;
use crate::fixity::lexing::token::Token;
use log::debug;
use regex::Regex;
use std::collections::HashSet;

#[derive(Debug, Clone)]
struct CompiledRule {
    rule: LexRule,
    regex: Regex,
}

/// Tokenizer built from an ordered rule list.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    rules: Vec<CompiledRule>,
    skipped: HashSet<String>,
}

impl Tokenizer {
    /// Compile `rules` in order. Fails on the first pattern the regex engine rejects.
    pub fn new(rules: impl IntoIterator<Item = LexRule>) -> Result<Self, LexError> {
        let rules = rules
            .into_iter()
            .map(|rule| {
                let anchored = format!(r"\A(?:{})", rule.pattern);
                Regex::new(&anchored)
                    .map(|regex| CompiledRule {
                        rule: rule.clone(),
                        regex,
                    })
                    .map_err(|e| LexError::InvalidPattern {
                        token_type: rule.token_type.clone(),
                        message: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!("compiled tokenizer with {} rules", rules.len());
        Ok(Self {
            rules,
            skipped: HashSet::new(),
        })
    }

    /// Drop tokens of `class` from the output (typically whitespace).
    pub fn skipping(mut self, class: impl Into<String>) -> Self {
        self.skipped.insert(class.into());
        self
    }

    pub fn rules(&self) -> impl Iterator<Item = &LexRule> {
        self.rules.iter().map(|compiled| &compiled.rule)
    }

    /// Tokenize `source`, returning tokens in source order with skipped classes removed.
    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, LexError> {
        let location = SourceLocation::new(source);
        let mut tokens = Vec::new();
        let mut offset = 0;

        while offset < source.len() {
            let rest = &source[offset..];
            let Some((rule, len)) = self.match_at(rest) else {
                let character = rest.chars().next().unwrap_or_default();
                return Err(LexError::Unrecognized {
                    character,
                    offset,
                    position: location.byte_to_position(offset),
                });
            };

            let span = offset..offset + len;
            if !self.skipped.contains(&rule.class) {
                tokens.push(Token::new(
                    rule.class.clone(),
                    rule.token_type.clone(),
                    &source[span.clone()],
                    span.clone(),
                    location.byte_to_position(offset),
                ));
            }
            offset = span.end;
        }

        Ok(tokens)
    }

    fn match_at(&self, rest: &str) -> Option<(&LexRule, usize)> {
        self.rules.iter().find_map(|compiled| {
            compiled
                .regex
                .find(rest)
                .filter(|m| !m.is_empty())
                .map(|m| (&compiled.rule, m.end()))
        })
    }
}
