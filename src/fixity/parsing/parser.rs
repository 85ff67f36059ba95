//! Parser construction and entry points

use super::cursor::TokenCursor;
use super::error::{BuildError, SyntaxError, END_OF_INPUT};
use crate::fixity::ast::AstNode;
use crate::fixity::grammar::{self, CaptureTarget, GrammarError, PatternElement, StatementRule};
use crate::fixity::lexing::Token;
use crate::fixity::operators::{OperatorSpec, OperatorTable};
use log::debug;
use std::collections::HashMap;

/// How deeply expressions and statements may nest before parsing gives up with a
/// [SyntaxError]. Each level costs a few recursive frames, so this bounds stack use.
pub const MAX_NESTING_DEPTH: usize = 128;

/// A parser for one language: an operator table plus compiled statement rules.
///
/// Immutable after construction; any number of parses may share it.
#[derive(Debug, Clone)]
pub struct Parser {
    table: OperatorTable,
    rules: Vec<StatementRule>,
    statement_leads: HashMap<String, usize>,
}

impl Parser {
    /// Build the operator table from `specs` and compile `rules_text` against it.
    pub fn new(
        specs: impl IntoIterator<Item = OperatorSpec>,
        rules_text: &str,
    ) -> Result<Self, BuildError> {
        let table = OperatorTable::build(specs)?;
        let rules = grammar::compile(rules_text, &table)?;
        Ok(Self::from_parts(table, rules)?)
    }

    /// Assemble a parser from an already built table and rules, re-checking that every rule
    /// resolves against the table.
    pub fn from_parts(
        table: OperatorTable,
        rules: Vec<StatementRule>,
    ) -> Result<Self, GrammarError> {
        grammar::compile::check_leads(&rules, &table)?;
        for rule in &rules {
            check_references(rule, &table)?;
        }

        let statement_leads = rules
            .iter()
            .enumerate()
            .filter_map(|(index, rule)| rule.lead().map(|lead| (lead.to_string(), index)))
            .collect();

        debug!(
            "parser ready: {} operators, {} statement rules",
            table.len(),
            rules.len()
        );
        Ok(Self {
            table,
            rules,
            statement_leads,
        })
    }

    pub fn table(&self) -> &OperatorTable {
        &self.table
    }

    pub fn rules(&self) -> &[StatementRule] {
        &self.rules
    }

    /// Statement rule started by `token_type`.
    pub fn statement_rule(&self, token_type: &str) -> Option<&StatementRule> {
        self.statement_leads
            .get(token_type)
            .map(|&index| &self.rules[index])
    }

    /// Parse a whole program: statements and expressions up to end of input.
    pub fn parse(&self, tokens: &[Token]) -> Result<AstNode, SyntaxError> {
        ParseState::new(self, tokens).program()
    }

    /// Parse exactly one expression (a comma sequence is allowed) spanning all of `tokens`.
    pub fn parse_expression(&self, tokens: &[Token]) -> Result<AstNode, SyntaxError> {
        let mut state = ParseState::new(self, tokens);
        let node = state.sequence_level()?;
        state.expect_end()?;
        Ok(node)
    }
}

fn check_references(rule: &StatementRule, table: &OperatorTable) -> Result<(), GrammarError> {
    for element in &rule.pattern {
        let PatternElement::Capture { target, .. } = element else {
            continue;
        };
        let resolved = match target {
            CaptureTarget::Operator(id) => table.get(id).is_some_and(|spec| !spec.is_meta()),
            CaptureTarget::Token(token) => table.lead(token).is_some_and(OperatorSpec::is_atom),
            CaptureTarget::Statement => true,
        };
        if !resolved {
            let reference = match target {
                CaptureTarget::Operator(reference) | CaptureTarget::Token(reference) => reference,
                CaptureTarget::Statement => grammar::STATEMENT_NONTERMINAL,
            };
            return Err(GrammarError::UnknownOperator {
                line: rule.line,
                rule: rule.name.clone(),
                reference: reference.to_string(),
            });
        }
    }
    Ok(())
}

/// State of one parse call. The dispatch procedures are spread over the sibling modules.
pub(crate) struct ParseState<'p, 't> {
    pub(crate) parser: &'p Parser,
    pub(crate) cursor: TokenCursor<'t>,
    depth: usize,
}

impl<'p, 't> ParseState<'p, 't> {
    pub(crate) fn new(parser: &'p Parser, tokens: &'t [Token]) -> Self {
        Self {
            parser,
            cursor: TokenCursor::new(tokens),
            depth: 0,
        }
    }

    fn program(&mut self) -> Result<AstNode, SyntaxError> {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            statements.push(self.sequence_level()?);
        }
        Ok(AstNode::Program { statements })
    }

    /// Consume a token of type `token_type` or fail with the message `message` builds.
    pub(crate) fn expect(
        &mut self,
        token_type: &str,
        message: impl FnOnce() -> String,
    ) -> Result<&'t Token, SyntaxError> {
        match self.cursor.peek() {
            Some(token) if token.is(token_type) => {
                self.cursor.advance();
                Ok(token)
            }
            found => Err(SyntaxError::new(found, [token_type], message())),
        }
    }

    /// Run `parse` one nesting level deeper, failing past [MAX_NESTING_DEPTH].
    pub(crate) fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.unexpected(
                Vec::<String>::new(),
                format!("nesting too deep (limit {})", MAX_NESTING_DEPTH),
            ));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    pub(crate) fn expect_end(&self) -> Result<(), SyntaxError> {
        match self.cursor.peek() {
            None => Ok(()),
            found => Err(SyntaxError::new(found, [END_OF_INPUT], "unexpected trailing input")),
        }
    }

    /// Error at the next token.
    pub(crate) fn unexpected<S: Into<String>>(
        &self,
        expected: impl IntoIterator<Item = S>,
        message: impl Into<String>,
    ) -> SyntaxError {
        SyntaxError::new(self.cursor.peek(), expected, message)
    }

    /// Whether the next token can start an expression or a statement.
    pub(crate) fn starts_item(&self) -> bool {
        let parser = self.parser;
        self.cursor.peek_type().is_some_and(|token_type| {
            parser.table.lead(token_type).is_some() || parser.statement_rule(token_type).is_some()
        })
    }

    /// Every token that can start an expression or a statement.
    pub(crate) fn lead_tokens(&self) -> Vec<&'p str> {
        let parser = self.parser;
        let mut tokens = parser.table.lead_tokens();
        tokens.extend(parser.statement_leads.keys().map(String::as_str));
        tokens
    }
}
