//! Sequence and assignment meta operators.
//!
//! Both sit below every table operator. A comma run of two or more elements becomes one
//! node tagged by the sequence operator's id; a single element is returned as is. Inside
//! brackets the elements are flattened into the enclosing node instead.

use super::error::SyntaxError;
use super::parser::ParseState;
use crate::fixity::ast::AstNode;
use crate::fixity::operators::{AtomKind, OperatorSpec};

impl<'p, 't> ParseState<'p, 't> {
    pub(super) fn sequence_level(&mut self) -> Result<AstNode, SyntaxError> {
        let parser = self.parser;
        let mut elements = self.elements()?;
        match parser.table().sequence() {
            Some(sequence) if elements.len() > 1 => {
                Ok(AstNode::operation(sequence.id(), elements))
            }
            _ => Ok(elements.swap_remove(0)),
        }
    }

    /// One or more elements separated by the sequence token. Every separator must be
    /// followed by an element, so trailing commas are rejected.
    pub(super) fn elements(&mut self) -> Result<Vec<AstNode>, SyntaxError> {
        let parser = self.parser;
        let mut elements = vec![self.element()?];
        if let Some(OperatorSpec::Sequence { token, .. }) = parser.table().sequence() {
            while self.cursor.at(token) {
                self.cursor.advance();
                elements.push(self.element()?);
            }
        }
        Ok(elements)
    }

    /// An expression, or `name = element` when the assignment token follows an identifier.
    /// Assignment groups to the right.
    fn element(&mut self) -> Result<AstNode, SyntaxError> {
        let parser = self.parser;
        let target = self.expression(0)?;

        let Some(OperatorSpec::Assign { id, token }) = parser.table().assign() else {
            return Ok(target);
        };
        if !self.cursor.at(token) {
            return Ok(target);
        }
        if !target.is_identifier() {
            let identifiers = parser.table().iter().filter_map(|spec| match spec {
                OperatorSpec::Atom {
                    lead,
                    literal: AtomKind::Identifier,
                    ..
                } => Some(lead.as_str()),
                _ => None,
            });
            return Err(self.unexpected(
                identifiers,
                format!("`{}` needs an identifier on its left, found `{}`", id, target),
            ));
        }
        self.cursor.advance();
        let value = self.nested(|state| state.element())?;
        Ok(AstNode::operation(id.as_str(), vec![target, value]))
    }
}
