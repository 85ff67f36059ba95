//! Statement grammar errors

use thiserror::Error;

/// Raised while compiling rule text, or while checking compiled rules against an operator
/// table. Every variant carries the 1-based line of the offending rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("line {line}: rule `{rule}` references unknown operator `{reference}`")]
    UnknownOperator {
        line: usize,
        rule: String,
        reference: String,
    },

    #[error("line {line}: rule `{rule}` has a malformed repetition: {reason}")]
    MalformedRepetition {
        line: usize,
        rule: String,
        reason: String,
    },

    #[error("line {line}: rule `{rule}` has a malformed element: {reason}")]
    MalformedElement {
        line: usize,
        rule: String,
        reason: String,
    },

    #[error("line {line}: rule `{rule}` is already defined on line {previous}")]
    DuplicateRule {
        line: usize,
        rule: String,
        previous: usize,
    },

    #[error("line {line}: rule `{rule}` must start with a literal token")]
    MissingLeadLiteral { line: usize, rule: String },

    #[error("line {line}: rule `{rule}` starts with {token}, which already starts `{other}`")]
    LeadConflict {
        line: usize,
        rule: String,
        token: String,
        other: String,
    },

    #[error("line {line}: unexpected `{text}`")]
    UnexpectedCharacter { line: usize, text: String },
}

impl GrammarError {
    pub fn line(&self) -> usize {
        match self {
            GrammarError::UnknownOperator { line, .. }
            | GrammarError::MalformedRepetition { line, .. }
            | GrammarError::MalformedElement { line, .. }
            | GrammarError::DuplicateRule { line, .. }
            | GrammarError::MissingLeadLiteral { line, .. }
            | GrammarError::LeadConflict { line, .. }
            | GrammarError::UnexpectedCharacter { line, .. } => *line,
        }
    }
}
