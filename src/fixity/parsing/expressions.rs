//! Lead and continuation dispatch, and the climbing loop that drives them.

use super::error::SyntaxError;
use super::parser::ParseState;
use crate::fixity::ast::{AstNode, Scalar};
use crate::fixity::lexing::Token;
use crate::fixity::operators::{Assoc, AtomKind, OperatorSpec};
use log::trace;

impl<'p, 't> ParseState<'p, 't> {
    /// Parse an expression whose continuations must bind tighter than `min_precedence`.
    pub(super) fn expression(&mut self, min_precedence: u32) -> Result<AstNode, SyntaxError> {
        self.nested(|state| state.climb(min_precedence))
    }

    fn climb(&mut self, min_precedence: u32) -> Result<AstNode, SyntaxError> {
        let mut head = self.lead()?;
        // Statements are complete on their own; nothing continues them.
        if matches!(head, AstNode::Statement { .. }) {
            return Ok(head);
        }
        let mut previous: Option<&'p OperatorSpec> = None;

        loop {
            // Continuation phase: does the next token extend `head`?
            let Some(spec) = self.continuation_operator(min_precedence) else {
                break;
            };
            if let Some(previous) = previous {
                self.check_chaining(previous, spec, min_precedence)?;
            }
            head = self.continuation(head, spec)?;
            previous = Some(spec);
        }

        Ok(head)
    }

    /// The admissible bind-position operator for the next token, if any. Meta operators are
    /// never continuations here; sequence contexts pick them up.
    fn continuation_operator(&self, min_precedence: u32) -> Option<&'p OperatorSpec> {
        let parser = self.parser;
        let token_type = self.cursor.peek_type()?;
        parser
            .table()
            .bind(token_type)
            .filter(|spec| !spec.is_meta() && spec.admissible(min_precedence))
    }

    /// A non-associative operator cannot share its precedence with the operator applied just
    /// before it at the same level. The expected set lists the continuations that could have
    /// followed instead.
    fn check_chaining(
        &self,
        previous: &OperatorSpec,
        next: &OperatorSpec,
        min_precedence: u32,
    ) -> Result<(), SyntaxError> {
        if previous.precedence() != next.precedence() {
            return Ok(());
        }
        let (fixed, other) = match (previous.assoc(), next.assoc()) {
            (Assoc::None, _) => (previous, next),
            (_, Assoc::None) => (next, previous),
            _ => return Ok(()),
        };
        let parser = self.parser;
        let expected = parser
            .table()
            .iter()
            .filter(|spec| {
                !spec.is_meta()
                    && spec.admissible(min_precedence)
                    && spec.precedence() != next.precedence()
            })
            .filter_map(OperatorSpec::bind_token);
        Err(self.unexpected(
            expected,
            format!(
                "`{}` is non-associative and cannot be chained with `{}`",
                fixed.id(),
                other.id()
            ),
        ))
    }

    fn lead(&mut self) -> Result<AstNode, SyntaxError> {
        let parser = self.parser;
        let Some(token) = self.cursor.peek() else {
            return Err(self.unexpected(self.lead_tokens(), "expected an expression"));
        };

        if let Some(rule) = parser.statement_rule(&token.token_type) {
            trace!("statement dispatch: {} starts `{}`", token.token_type, rule.name);
            return self.statement(rule);
        }

        let Some(spec) = parser.table().lead(&token.token_type) else {
            return Err(self.unexpected(self.lead_tokens(), "expected an expression"));
        };
        trace!("lead dispatch: {} starts `{}`", token.token_type, spec.id());
        self.cursor.advance();

        match spec {
            OperatorSpec::Atom { id, literal, .. } => leaf(id, *literal, token),
            OperatorSpec::Prefix { id, precedence, .. } => {
                let operand = self.expression(*precedence)?;
                Ok(AstNode::operation(id.as_str(), vec![operand]))
            }
            OperatorSpec::Circumfix { id, close, .. } => {
                let children = self.enclosed(id, close)?;
                Ok(AstNode::operation(id.as_str(), children))
            }
            OperatorSpec::Mixfix { id, separators, .. } => {
                let mut parts = Vec::with_capacity(separators.len() + 1);
                for separator in separators {
                    parts.push(self.sequence_level()?);
                    self.expect(separator, || {
                        format!("`{}` is missing its `{}`", id, separator)
                    })?;
                }
                parts.push(self.expression(spec.right_operand_threshold())?);
                Ok(AstNode::operation(id.as_str(), parts))
            }
            _ => unreachable!("only lead-position operators are indexed by lead token"),
        }
    }

    fn continuation(
        &mut self,
        left: AstNode,
        spec: &'p OperatorSpec,
    ) -> Result<AstNode, SyntaxError> {
        trace!("continuation dispatch: `{}` extends `{}`", spec.id(), left.tag());
        self.cursor.advance();

        match spec {
            OperatorSpec::Infix { id, .. } => {
                let right = self.expression(spec.right_operand_threshold())?;
                Ok(AstNode::operation(id.as_str(), vec![left, right]))
            }
            OperatorSpec::Postfix { id, .. } => Ok(AstNode::operation(id.as_str(), vec![left])),
            OperatorSpec::TernaryInfix { id, close, .. } => {
                let middle = self.expression(0)?;
                self.expect(close, || format!("`{}` is missing its `{}`", id, close))?;
                let right = self.expression(spec.right_operand_threshold())?;
                Ok(AstNode::operation(id.as_str(), vec![left, middle, right]))
            }
            OperatorSpec::Postcircumfix { id, close, .. } => {
                let mut children = vec![left];
                children.extend(self.enclosed(id, close)?);
                Ok(AstNode::operation(id.as_str(), children))
            }
            _ => unreachable!("only bind-position operators are continuations"),
        }
    }

    /// Bracket interior after the opening token: nothing, or a comma-separated run of
    /// elements, then the close token.
    pub(super) fn enclosed(&mut self, id: &str, close: &str) -> Result<Vec<AstNode>, SyntaxError> {
        if self.cursor.at(close) {
            self.cursor.advance();
            return Ok(Vec::new());
        }
        let elements = self.elements()?;
        self.expect(close, || format!("unclosed `{}`", id))?;
        Ok(elements)
    }
}

/// Leaf for an atom's token.
pub(super) fn leaf(id: &str, literal: AtomKind, token: &Token) -> Result<AstNode, SyntaxError> {
    let value = match literal {
        AtomKind::Identifier => return Ok(AstNode::identifier(id, token.value.as_str())),
        AtomKind::Number => token
            .value
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Scalar::Number)
            .ok_or_else(|| {
                SyntaxError::new(
                    Some(token),
                    Vec::<String>::new(),
                    format!("`{}` is not a valid number", token.value),
                )
            })?,
        AtomKind::String => Scalar::String(unquote(&token.value)),
        AtomKind::True => Scalar::Bool(true),
        AtomKind::False => Scalar::Bool(false),
        AtomKind::Null => Scalar::Null,
    };
    Ok(AstNode::literal(id, value))
}

/// Strip the opening quote and resolve backslash escapes up to the first unescaped closing
/// quote. A string left open at end of input keeps everything after its opening quote.
fn unquote(raw: &str) -> String {
    let inner = raw.strip_prefix('"').unwrap_or(raw);

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '"' {
            break;
        }
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixity::lexing::Position;

    fn token(token_type: &str, value: &str) -> Token {
        Token::new("Test", token_type, value, 0..value.len(), Position::default())
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote(r#""plain""#), "plain");
        assert_eq!(unquote(r#""a\"b\\c\n""#), "a\"b\\c\n");
        assert_eq!(unquote(r#""""#), "");
    }

    #[test]
    fn test_unquote_unterminated() {
        assert_eq!(unquote(r#""abc"#), "abc");
        assert_eq!(unquote(r#""a\""#), "a\"");
        assert_eq!(unquote("\""), "");
    }

    #[test]
    fn test_leaves() {
        assert_eq!(
            leaf("numberLiteral", AtomKind::Number, &token("NUMBER", "42")).unwrap(),
            AstNode::literal("numberLiteral", Scalar::Number(42.0))
        );
        assert_eq!(
            leaf("stringLiteral", AtomKind::String, &token("STRING", r#""hi""#)).unwrap(),
            AstNode::literal("stringLiteral", Scalar::String("hi".into()))
        );
        assert_eq!(
            leaf("identifier", AtomKind::Identifier, &token("IDENT", "x")).unwrap(),
            AstNode::identifier("identifier", "x")
        );
        let err = leaf("numberLiteral", AtomKind::Number, &token("NUMBER", "1x")).unwrap_err();
        assert_eq!(err.found_type(), "NUMBER");
    }

    #[test]
    fn test_overflowing_number_is_rejected() {
        let digits = "9".repeat(400);
        let err = leaf("numberLiteral", AtomKind::Number, &token("NUMBER", &digits)).unwrap_err();
        assert!(err.message.contains("is not a valid number"));
    }
}
