//! Compiled statement rules.

use std::fmt;

/// Name of the generic statement nonterminal in rule text.
pub const STATEMENT_NONTERMINAL: &str = "stat";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// `+`
    OneOrMore,
    /// `*`
    ZeroOrMore,
}

/// What a capture consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureTarget {
    /// One construct headed by the operator with this id. For atoms, a comma-separated
    /// run of leaves.
    Operator(String),
    /// Exactly one token of this type, turned into a leaf by its atom.
    Token(String),
    /// One nested statement or expression.
    Statement,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternElement {
    Literal(String),
    Capture { name: String, target: CaptureTarget },
    Repeat { name: String, quantifier: Quantifier },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementRule {
    pub name: String,
    pub pattern: Vec<PatternElement>,
    /// 1-based line of the rule text.
    pub line: usize,
}

impl StatementRule {
    /// The literal that starts this rule.
    pub fn lead(&self) -> Option<&str> {
        match self.pattern.first() {
            Some(PatternElement::Literal(token)) => Some(token),
            _ => None,
        }
    }

    /// Capture names in pattern order.
    pub fn capture_names(&self) -> impl Iterator<Item = &str> {
        self.pattern.iter().filter_map(|element| match element {
            PatternElement::Capture { name, .. } | PatternElement::Repeat { name, .. } => {
                Some(name.as_str())
            }
            PatternElement::Literal(_) => None,
        })
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Quantifier::OneOrMore => "+",
            Quantifier::ZeroOrMore => "*",
        })
    }
}

impl fmt::Display for PatternElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternElement::Literal(token) => write!(f, "{}", token),
            PatternElement::Capture { name, target } => match target {
                CaptureTarget::Operator(id) => write!(f, "{}:{}", name, id),
                CaptureTarget::Token(token) => write!(f, "{}:{}", name, token),
                CaptureTarget::Statement if name == STATEMENT_NONTERMINAL => f.write_str(name),
                CaptureTarget::Statement => write!(f, "{}:{}", name, STATEMENT_NONTERMINAL),
            },
            PatternElement::Repeat { name, quantifier } if name == STATEMENT_NONTERMINAL => {
                write!(f, "{}{}", name, quantifier)
            }
            PatternElement::Repeat { name, quantifier } => {
                write!(f, "{}:{}{}", name, STATEMENT_NONTERMINAL, quantifier)
            }
        }
    }
}

/// Renders the rule back in rule-text form.
impl fmt::Display for StatementRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for element in &self.pattern {
            write!(f, " {}", element)?;
        }
        Ok(())
    }
}
