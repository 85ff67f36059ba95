//! Statement dispatch.

use super::error::SyntaxError;
use super::expressions::leaf;
use super::parser::ParseState;
use crate::fixity::ast::{AstNode, Capture, CaptureValue};
use crate::fixity::grammar::{CaptureTarget, PatternElement, Quantifier, StatementRule};
use crate::fixity::operators::OperatorSpec;
use log::trace;

impl<'p, 't> ParseState<'p, 't> {
    /// Match `rule` from its lead literal onwards.
    pub(super) fn statement(&mut self, rule: &'p StatementRule) -> Result<AstNode, SyntaxError> {
        self.nested(|state| state.match_rule(rule))
    }

    fn match_rule(&mut self, rule: &'p StatementRule) -> Result<AstNode, SyntaxError> {
        let mut captures = Vec::new();

        for (index, element) in rule.pattern.iter().enumerate() {
            match element {
                PatternElement::Literal(token) => {
                    self.expect(token, || format!("`{}` expects `{}`", rule.name, token))?;
                }
                PatternElement::Capture { name, target } => {
                    trace!("statement `{}`: capture `{}`", rule.name, name);
                    let node = self.capture(target)?;
                    captures.push(Capture {
                        name: name.clone(),
                        value: CaptureValue::Single(node),
                    });
                }
                PatternElement::Repeat { name, quantifier } => {
                    let terminator = match rule.pattern.get(index + 1) {
                        Some(PatternElement::Literal(token)) => Some(token.as_str()),
                        _ => None,
                    };
                    let items = self.repetition(rule, name, *quantifier, terminator)?;
                    captures.push(Capture {
                        name: name.clone(),
                        value: CaptureValue::Repeated(items),
                    });
                }
            }
        }

        Ok(AstNode::Statement {
            rule: rule.name.clone(),
            captures,
        })
    }

    fn capture(&mut self, target: &'p CaptureTarget) -> Result<AstNode, SyntaxError> {
        let parser = self.parser;
        match target {
            CaptureTarget::Statement => self.sequence_level(),
            CaptureTarget::Token(token_type) => match parser.table().lead(token_type) {
                Some(spec) => self.atom_leaf(spec),
                None => Err(self.unexpected([token_type.as_str()], "unknown capture token")),
            },
            CaptureTarget::Operator(id) => match parser.table().get(id) {
                Some(spec) if spec.is_atom() => self.atom_run(spec),
                Some(spec) => self.headed_by(spec),
                None => Err(self.unexpected(
                    Vec::<String>::new(),
                    format!("unknown operator `{}`", id),
                )),
            },
        }
    }

    /// Exactly one token of the atom's lead type, as a leaf.
    fn atom_leaf(&mut self, spec: &'p OperatorSpec) -> Result<AstNode, SyntaxError> {
        let OperatorSpec::Atom { id, lead, literal } = spec else {
            return Err(self.unexpected(
                Vec::<String>::new(),
                format!("`{}` is not an atom", spec.id()),
            ));
        };
        let token = self.expect(lead, || format!("expected `{}`", id))?;
        leaf(id, *literal, token)
    }

    /// One or more leaves of the same atom separated by the sequence token. A run of two or
    /// more becomes a sequence node.
    fn atom_run(&mut self, spec: &'p OperatorSpec) -> Result<AstNode, SyntaxError> {
        let parser = self.parser;
        let mut leaves = vec![self.atom_leaf(spec)?];
        let Some(OperatorSpec::Sequence { id, token }) = parser.table().sequence() else {
            return Ok(leaves.swap_remove(0));
        };
        while self.cursor.at(token) {
            self.cursor.advance();
            leaves.push(self.atom_leaf(spec)?);
        }
        if leaves.len() == 1 {
            return Ok(leaves.swap_remove(0));
        }
        Ok(AstNode::operation(id.as_str(), leaves))
    }

    /// A sequence-level expression whose every element is headed by `spec`.
    fn headed_by(&mut self, spec: &'p OperatorSpec) -> Result<AstNode, SyntaxError> {
        let parser = self.parser;
        let start = self.cursor.peek();
        let node = self.sequence_level()?;

        let is_sequence = parser
            .table()
            .sequence()
            .is_some_and(|sequence| node.tag() == sequence.id() && spec.id() != sequence.id());
        let elements = if is_sequence {
            node.children()
        } else {
            std::slice::from_ref(&node)
        };

        if let Some(stray) = elements.iter().find(|element| element.tag() != spec.id()) {
            let expected: Vec<&str> = spec.lead_token().into_iter().collect();
            return Err(SyntaxError::new(
                start,
                expected,
                format!("expected `{}`, found `{}`", spec.id(), stray),
            ));
        }
        Ok(node)
    }

    /// Statements up to the literal that follows the repetition. A repetition that ends its
    /// rule stops at the first token that cannot start another statement, so an enclosing
    /// rule can still find its own terminator.
    fn repetition(
        &mut self,
        rule: &StatementRule,
        name: &str,
        quantifier: Quantifier,
        terminator: Option<&str>,
    ) -> Result<Vec<AstNode>, SyntaxError> {
        let mut items = Vec::new();
        loop {
            let more = match terminator {
                Some(token) => !self.cursor.is_at_end() && !self.cursor.at(token),
                None => self.starts_item(),
            };
            if !more {
                break;
            }
            items.push(self.sequence_level()?);
        }

        if quantifier == Quantifier::OneOrMore && items.is_empty() {
            return Err(self.unexpected(
                self.lead_tokens(),
                format!("`{}` needs at least one `{}`", rule.name, name),
            ));
        }
        Ok(items)
    }
}
