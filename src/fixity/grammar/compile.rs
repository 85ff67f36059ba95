//! Rule text compiler
//!
//!     Each non-blank line is lexed with [DslToken] and compiled on its own; rules never span
//!     lines. Compilation fails on the first problem, reporting the line it was found on.

use super::dsl::DslToken;
use super::error::GrammarError;
use super::rule::{CaptureTarget, PatternElement, Quantifier, StatementRule, STATEMENT_NONTERMINAL};
use crate::fixity::operators::OperatorTable;
use log::debug;
use logos::Logos;
use std::collections::HashMap;
use std::iter::Peekable;
use std::vec::IntoIter;

/// Compile `text` into statement rules, resolving operator references against `table`.
pub fn compile(text: &str, table: &OperatorTable) -> Result<Vec<StatementRule>, GrammarError> {
    let mut rules: Vec<StatementRule> = Vec::new();
    let mut defined: HashMap<String, usize> = HashMap::new();

    for (index, source) in text.lines().enumerate() {
        let line = index + 1;
        let tokens = lex_line(source, line)?;
        if tokens.is_empty() {
            continue;
        }

        let rule = LineCompiler {
            line,
            table,
            tokens: tokens.into_iter().peekable(),
            rule: "<unnamed>".to_string(),
        }
        .compile()?;

        if let Some(&previous) = defined.get(&rule.name) {
            return Err(GrammarError::DuplicateRule {
                line,
                rule: rule.name,
                previous,
            });
        }
        defined.insert(rule.name.clone(), line);
        rules.push(rule);
    }

    check_leads(&rules, table)?;
    debug!("compiled {} statement rules", rules.len());
    Ok(rules)
}

/// Every rule must start with a literal no other rule and no expression construct starts with.
pub fn check_leads(rules: &[StatementRule], table: &OperatorTable) -> Result<(), GrammarError> {
    let mut leads: HashMap<&str, &str> = HashMap::new();

    for rule in rules {
        let Some(lead) = rule.lead() else {
            return Err(GrammarError::MissingLeadLiteral {
                line: rule.line,
                rule: rule.name.clone(),
            });
        };
        let other = leads
            .get(lead)
            .copied()
            .or_else(|| table.lead(lead).map(|spec| spec.id()));
        if let Some(other) = other {
            return Err(GrammarError::LeadConflict {
                line: rule.line,
                rule: rule.name.clone(),
                token: lead.to_string(),
                other: other.to_string(),
            });
        }
        leads.insert(lead, &rule.name);
    }
    Ok(())
}

fn lex_line(source: &str, line: usize) -> Result<Vec<DslToken>, GrammarError> {
    let mut lexer = DslToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(DslToken::Comment) => {}
            Ok(token) => tokens.push(token),
            Err(()) => {
                return Err(GrammarError::UnexpectedCharacter {
                    line,
                    text: lexer.slice().to_string(),
                })
            }
        }
    }
    Ok(tokens)
}

struct LineCompiler<'a> {
    line: usize,
    table: &'a OperatorTable,
    tokens: Peekable<IntoIter<DslToken>>,
    rule: String,
}

impl LineCompiler<'_> {
    fn compile(mut self) -> Result<StatementRule, GrammarError> {
        self.rule = match self.tokens.next() {
            Some(DslToken::Word(name)) => name,
            _ => return Err(self.malformed("a rule must start with its name")),
        };

        let mut pattern = Vec::new();
        while let Some(token) = self.tokens.next() {
            let element = match token {
                DslToken::Word(word) => self.element(word)?,
                DslToken::Colon => return Err(self.malformed("`:` without a capture name")),
                DslToken::Plus | DslToken::Star => {
                    return Err(self.repetition("quantifier without an operand"))
                }
                DslToken::Comment => continue,
            };
            pattern.push(element);
        }

        self.check_pattern(&pattern)?;
        Ok(StatementRule {
            name: self.rule,
            pattern,
            line: self.line,
        })
    }

    fn element(&mut self, word: String) -> Result<PatternElement, GrammarError> {
        if self.tokens.peek() == Some(&DslToken::Colon) {
            self.tokens.next();
            let reference = match self.tokens.next() {
                Some(DslToken::Word(reference)) => reference,
                _ => {
                    return Err(self.malformed(format!(
                        "capture `{}` has no reference after `:`",
                        word
                    )))
                }
            };
            let quantifier = self.quantifier()?;
            return self.capture(word, reference, quantifier);
        }

        let quantifier = self.quantifier()?;
        if word == STATEMENT_NONTERMINAL {
            return self.capture(word.clone(), word, quantifier);
        }
        match quantifier {
            Some(quantifier) => Err(self.repetition(format!(
                "`{}{}` repeats a literal; only `{}` can repeat",
                word, quantifier, STATEMENT_NONTERMINAL
            ))),
            None => Ok(PatternElement::Literal(word)),
        }
    }

    fn quantifier(&mut self) -> Result<Option<Quantifier>, GrammarError> {
        let quantifier = match self.tokens.peek() {
            Some(DslToken::Plus) => Quantifier::OneOrMore,
            Some(DslToken::Star) => Quantifier::ZeroOrMore,
            _ => return Ok(None),
        };
        self.tokens.next();
        if self.tokens.peek().is_some_and(DslToken::is_quantifier) {
            return Err(self.repetition("doubled quantifier"));
        }
        Ok(Some(quantifier))
    }

    fn capture(
        &self,
        name: String,
        reference: String,
        quantifier: Option<Quantifier>,
    ) -> Result<PatternElement, GrammarError> {
        if reference == STATEMENT_NONTERMINAL {
            return Ok(match quantifier {
                Some(quantifier) => PatternElement::Repeat { name, quantifier },
                None => PatternElement::Capture {
                    name,
                    target: CaptureTarget::Statement,
                },
            });
        }
        if let Some(quantifier) = quantifier {
            return Err(self.repetition(format!(
                "`{}:{}{}` repeats an operator; only `{}` can repeat",
                name, reference, quantifier, STATEMENT_NONTERMINAL
            )));
        }

        let target = match self.table.get(&reference) {
            Some(spec) if !spec.is_meta() => CaptureTarget::Operator(reference),
            _ => match self.table.lead(&reference) {
                Some(spec) if spec.is_atom() => CaptureTarget::Token(reference),
                _ => {
                    return Err(GrammarError::UnknownOperator {
                        line: self.line,
                        rule: self.rule.clone(),
                        reference,
                    })
                }
            },
        };
        Ok(PatternElement::Capture { name, target })
    }

    fn check_pattern(&self, pattern: &[PatternElement]) -> Result<(), GrammarError> {
        if !matches!(pattern.first(), Some(PatternElement::Literal(_))) {
            return Err(GrammarError::MissingLeadLiteral {
                line: self.line,
                rule: self.rule.clone(),
            });
        }
        for pair in pattern.windows(2) {
            if let [PatternElement::Repeat { name, .. }, next] = pair {
                if !matches!(next, PatternElement::Literal(_)) {
                    return Err(self.repetition(format!(
                        "repetition `{}` must be followed by a literal token, found `{}`",
                        name, next
                    )));
                }
            }
        }
        Ok(())
    }

    fn malformed(&self, reason: impl Into<String>) -> GrammarError {
        GrammarError::MalformedElement {
            line: self.line,
            rule: self.rule.clone(),
            reason: reason.into(),
        }
    }

    fn repetition(&self, reason: impl Into<String>) -> GrammarError {
        GrammarError::MalformedRepetition {
            line: self.line,
            rule: self.rule.clone(),
            reason: reason.into(),
        }
    }
}
