//! Operator descriptors
//!
//! [`OperatorSpec`] has one variant per fixity/arity combination the parser understands.
//! The classification enums ([`Fixity`], [`Arity`], [`Assoc`]) mirror the vocabulary of
//! configuration files; configuration may spell them in either case (`left` or `LEFT`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operator associativity.
///
/// | Variant | Description |
/// |----------|--------------|
/// | [`Assoc::None`]  | Non-associative: cannot chain with an operator of equal precedence. |
/// | [`Assoc::Left`]  | Left-associative: groups from left to right. |
/// | [`Assoc::Right`] | Right-associative: groups from right to left. |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Assoc {
    #[default]
    #[serde(rename = "none", alias = "NONE")]
    None,
    #[serde(rename = "left", alias = "LEFT")]
    Left,
    #[serde(rename = "right", alias = "RIGHT")]
    Right,
}

/// Placement of an operator's defining tokens relative to its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Fixity {
    #[default]
    #[serde(rename = "none", alias = "NONE")]
    None,
    #[serde(rename = "prefix", alias = "PREFIX")]
    Prefix,
    #[serde(rename = "infix", alias = "INFIX")]
    Infix,
    #[serde(rename = "postfix", alias = "POSTFIX")]
    Postfix,
    #[serde(rename = "matchfix", alias = "MATCHFIX")]
    Matchfix,
    #[serde(rename = "mixfix", alias = "MIXFIX")]
    Mixfix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Arity {
    #[default]
    #[serde(rename = "none", alias = "NONE")]
    None,
    #[serde(rename = "unary", alias = "UNARY")]
    Unary,
    #[serde(rename = "binary", alias = "BINARY")]
    Binary,
    #[serde(rename = "ternary", alias = "TERNARY")]
    Ternary,
}

/// The leaf an atom produces from its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AtomKind {
    Number,
    String,
    True,
    False,
    Null,
    #[default]
    Identifier,
}

impl fmt::Display for Assoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Assoc::None => "none",
            Assoc::Left => "left",
            Assoc::Right => "right",
        })
    }
}

impl fmt::Display for Fixity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Fixity::None => "none",
            Fixity::Prefix => "prefix",
            Fixity::Infix => "infix",
            Fixity::Postfix => "postfix",
            Fixity::Matchfix => "matchfix",
            Fixity::Mixfix => "mixfix",
        })
    }
}

/// A validated operator descriptor.
///
/// Lead-position variants ([`Atom`], [`Prefix`], [`Circumfix`], [`Mixfix`]) start a construct;
/// bind-position variants ([`Infix`], [`Postfix`], [`TernaryInfix`], [`Postcircumfix`])
/// continue an existing left operand. [`Sequence`] and [`Assign`] are the two meta operators
/// handled outside the precedence loop.
///
/// [`Atom`]: OperatorSpec::Atom
/// [`Prefix`]: OperatorSpec::Prefix
/// [`Circumfix`]: OperatorSpec::Circumfix
/// [`Mixfix`]: OperatorSpec::Mixfix
/// [`Infix`]: OperatorSpec::Infix
/// [`Postfix`]: OperatorSpec::Postfix
/// [`TernaryInfix`]: OperatorSpec::TernaryInfix
/// [`Postcircumfix`]: OperatorSpec::Postcircumfix
/// [`Sequence`]: OperatorSpec::Sequence
/// [`Assign`]: OperatorSpec::Assign
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorSpec {
    /// Literal or identifier leaf.
    Atom {
        id: String,
        lead: String,
        literal: AtomKind,
    },
    /// `-x`
    Prefix {
        id: String,
        lead: String,
        precedence: u32,
    },
    /// `a + b`
    Infix {
        id: String,
        bind: String,
        precedence: u32,
        assoc: Assoc,
    },
    /// `x++`
    Postfix {
        id: String,
        bind: String,
        precedence: u32,
    },
    /// `a if c else b`
    TernaryInfix {
        id: String,
        bind: String,
        close: String,
        precedence: u32,
        assoc: Assoc,
    },
    /// `( ... )`, `[ ... ]` in lead position
    Circumfix {
        id: String,
        open: String,
        close: String,
        precedence: u32,
    },
    /// `f( ... )`
    Postcircumfix {
        id: String,
        open: String,
        close: String,
        precedence: u32,
        assoc: Assoc,
    },
    /// `lam x -> e`, `let x = 1 in e`, `if c then a else b`
    Mixfix {
        id: String,
        lead: String,
        separators: Vec<String>,
        precedence: u32,
        assoc: Assoc,
    },
    /// Comma-separated element runs
    Sequence { id: String, token: String },
    /// `name = value` inside sequence contexts
    Assign { id: String, token: String },
}

impl OperatorSpec {
    pub fn atom(id: impl Into<String>, lead: impl Into<String>, literal: AtomKind) -> Self {
        OperatorSpec::Atom {
            id: id.into(),
            lead: lead.into(),
            literal,
        }
    }

    pub fn prefix(id: impl Into<String>, lead: impl Into<String>, precedence: u32) -> Self {
        OperatorSpec::Prefix {
            id: id.into(),
            lead: lead.into(),
            precedence,
        }
    }

    pub fn infix(
        id: impl Into<String>,
        bind: impl Into<String>,
        precedence: u32,
        assoc: Assoc,
    ) -> Self {
        OperatorSpec::Infix {
            id: id.into(),
            bind: bind.into(),
            precedence,
            assoc,
        }
    }

    pub fn postfix(id: impl Into<String>, bind: impl Into<String>, precedence: u32) -> Self {
        OperatorSpec::Postfix {
            id: id.into(),
            bind: bind.into(),
            precedence,
        }
    }

    pub fn ternary(
        id: impl Into<String>,
        bind: impl Into<String>,
        close: impl Into<String>,
        precedence: u32,
        assoc: Assoc,
    ) -> Self {
        OperatorSpec::TernaryInfix {
            id: id.into(),
            bind: bind.into(),
            close: close.into(),
            precedence,
            assoc,
        }
    }

    pub fn circumfix(
        id: impl Into<String>,
        open: impl Into<String>,
        close: impl Into<String>,
        precedence: u32,
    ) -> Self {
        OperatorSpec::Circumfix {
            id: id.into(),
            open: open.into(),
            close: close.into(),
            precedence,
        }
    }

    pub fn postcircumfix(
        id: impl Into<String>,
        open: impl Into<String>,
        close: impl Into<String>,
        precedence: u32,
    ) -> Self {
        OperatorSpec::Postcircumfix {
            id: id.into(),
            open: open.into(),
            close: close.into(),
            precedence,
            assoc: Assoc::Left,
        }
    }

    pub fn mixfix<S: Into<String>>(
        id: impl Into<String>,
        lead: impl Into<String>,
        separators: impl IntoIterator<Item = S>,
        precedence: u32,
        assoc: Assoc,
    ) -> Self {
        OperatorSpec::Mixfix {
            id: id.into(),
            lead: lead.into(),
            separators: separators.into_iter().map(Into::into).collect(),
            precedence,
            assoc,
        }
    }

    pub fn sequence(id: impl Into<String>, token: impl Into<String>) -> Self {
        OperatorSpec::Sequence {
            id: id.into(),
            token: token.into(),
        }
    }

    pub fn assign(id: impl Into<String>, token: impl Into<String>) -> Self {
        OperatorSpec::Assign {
            id: id.into(),
            token: token.into(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            OperatorSpec::Atom { id, .. }
            | OperatorSpec::Prefix { id, .. }
            | OperatorSpec::Infix { id, .. }
            | OperatorSpec::Postfix { id, .. }
            | OperatorSpec::TernaryInfix { id, .. }
            | OperatorSpec::Circumfix { id, .. }
            | OperatorSpec::Postcircumfix { id, .. }
            | OperatorSpec::Mixfix { id, .. }
            | OperatorSpec::Sequence { id, .. }
            | OperatorSpec::Assign { id, .. } => id,
        }
    }

    pub fn fixity(&self) -> Fixity {
        match self {
            OperatorSpec::Atom { .. } | OperatorSpec::Sequence { .. } | OperatorSpec::Assign { .. } => {
                Fixity::None
            }
            OperatorSpec::Prefix { .. } => Fixity::Prefix,
            OperatorSpec::Infix { .. } | OperatorSpec::TernaryInfix { .. } => Fixity::Infix,
            OperatorSpec::Postfix { .. } => Fixity::Postfix,
            OperatorSpec::Circumfix { .. } | OperatorSpec::Postcircumfix { .. } => Fixity::Matchfix,
            OperatorSpec::Mixfix { .. } => Fixity::Mixfix,
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            OperatorSpec::Atom { .. } => Arity::None,
            OperatorSpec::Prefix { .. }
            | OperatorSpec::Postfix { .. }
            | OperatorSpec::Circumfix { .. } => Arity::Unary,
            OperatorSpec::Infix { .. }
            | OperatorSpec::Postcircumfix { .. }
            | OperatorSpec::Assign { .. } => Arity::Binary,
            OperatorSpec::TernaryInfix { .. } => Arity::Ternary,
            OperatorSpec::Mixfix { separators, .. } if separators.len() >= 2 => Arity::Ternary,
            OperatorSpec::Mixfix { .. } => Arity::Binary,
            OperatorSpec::Sequence { .. } => Arity::None,
        }
    }

    /// Binding strength. Atoms and meta operators report 0.
    pub fn precedence(&self) -> u32 {
        match self {
            OperatorSpec::Prefix { precedence, .. }
            | OperatorSpec::Infix { precedence, .. }
            | OperatorSpec::Postfix { precedence, .. }
            | OperatorSpec::TernaryInfix { precedence, .. }
            | OperatorSpec::Circumfix { precedence, .. }
            | OperatorSpec::Postcircumfix { precedence, .. }
            | OperatorSpec::Mixfix { precedence, .. } => *precedence,
            OperatorSpec::Atom { .. } | OperatorSpec::Sequence { .. } | OperatorSpec::Assign { .. } => 0,
        }
    }

    pub fn assoc(&self) -> Assoc {
        match self {
            OperatorSpec::Infix { assoc, .. }
            | OperatorSpec::TernaryInfix { assoc, .. }
            | OperatorSpec::Postcircumfix { assoc, .. }
            | OperatorSpec::Mixfix { assoc, .. } => *assoc,
            OperatorSpec::Postfix { .. } => Assoc::Left,
            OperatorSpec::Prefix { .. } | OperatorSpec::Assign { .. } => Assoc::Right,
            OperatorSpec::Atom { .. } | OperatorSpec::Circumfix { .. } | OperatorSpec::Sequence { .. } => {
                Assoc::None
            }
        }
    }

    /// Token that starts this construct, for lead-position operators.
    pub fn lead_token(&self) -> Option<&str> {
        match self {
            OperatorSpec::Atom { lead, .. }
            | OperatorSpec::Prefix { lead, .. }
            | OperatorSpec::Mixfix { lead, .. } => Some(lead),
            OperatorSpec::Circumfix { open, .. } => Some(open),
            _ => None,
        }
    }

    /// Token that continues a left operand, for bind-position operators.
    pub fn bind_token(&self) -> Option<&str> {
        match self {
            OperatorSpec::Infix { bind, .. }
            | OperatorSpec::Postfix { bind, .. }
            | OperatorSpec::TernaryInfix { bind, .. } => Some(bind),
            OperatorSpec::Postcircumfix { open, .. } => Some(open),
            _ => None,
        }
    }

    /// Tokens that end an interior part of this construct (close brackets, mixfix keywords).
    pub fn terminators(&self) -> Vec<&str> {
        match self {
            OperatorSpec::TernaryInfix { close, .. }
            | OperatorSpec::Circumfix { close, .. }
            | OperatorSpec::Postcircumfix { close, .. } => vec![close.as_str()],
            OperatorSpec::Mixfix { separators, .. } => separators.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, OperatorSpec::Atom { .. })
    }

    pub fn is_meta(&self) -> bool {
        matches!(self, OperatorSpec::Sequence { .. } | OperatorSpec::Assign { .. })
    }

    /// Whether this bind-position operator may extend a left operand parsed under
    /// `min_precedence`: it binds tighter, or equally tight while right-associative.
    pub fn admissible(&self, min_precedence: u32) -> bool {
        let precedence = self.precedence();
        precedence > min_precedence || (precedence == min_precedence && self.assoc() == Assoc::Right)
    }

    /// Threshold for the operand to the right of this operator. Right-associative operators
    /// lower it by one so an operator of the same precedence can recurse immediately.
    pub fn right_operand_threshold(&self) -> u32 {
        match self.assoc() {
            Assoc::Right => self.precedence().saturating_sub(1),
            Assoc::Left | Assoc::None => self.precedence(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let lambda = OperatorSpec::mixfix("lambda", "LAM", ["ARROW"], 5, Assoc::Left);
        assert_eq!(lambda.fixity(), Fixity::Mixfix);
        assert_eq!(lambda.arity(), Arity::Binary);
        assert_eq!(lambda.lead_token(), Some("LAM"));
        assert_eq!(lambda.bind_token(), None);

        let cond = OperatorSpec::mixfix("ifThenElse", "IF", ["THEN", "ELSE"], 5, Assoc::Left);
        assert_eq!(cond.arity(), Arity::Ternary);
        assert_eq!(cond.terminators(), vec!["THEN", "ELSE"]);

        let call = OperatorSpec::postcircumfix("call", "LPAREN", "RPAREN", 90);
        assert_eq!(call.fixity(), Fixity::Matchfix);
        assert_eq!(call.bind_token(), Some("LPAREN"));
        assert_eq!(call.lead_token(), None);
    }

    #[test]
    fn test_admissibility() {
        let plus = OperatorSpec::infix("plus", "PLUS", 30, Assoc::Left);
        let exp = OperatorSpec::infix("exp", "EXP", 45, Assoc::Right);

        assert!(plus.admissible(0));
        assert!(!plus.admissible(30));
        assert!(exp.admissible(45));
        assert!(!exp.admissible(46));

        assert_eq!(plus.right_operand_threshold(), 30);
        assert_eq!(exp.right_operand_threshold(), 44);
    }

    #[test]
    fn test_assoc_accepts_either_case() {
        let upper: Assoc = serde_json::from_str(r#""RIGHT""#).unwrap();
        let lower: Assoc = serde_json::from_str(r#""right""#).unwrap();
        assert_eq!(upper, Assoc::Right);
        assert_eq!(lower, Assoc::Right);
        assert_eq!(Assoc::Left.to_string(), "left");
    }
}
