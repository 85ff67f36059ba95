//! Operator table configuration errors

use thiserror::Error;

/// Raised while converting operator records or building an [`OperatorTable`].
///
/// [`OperatorTable`]: crate::fixity::operators::OperatorTable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("operator id `{0}` is declared more than once")]
    DuplicateId(String),

    #[error("lead token {token} is claimed by both `{first}` and `{second}`")]
    LeadConflict {
        token: String,
        first: String,
        second: String,
    },

    #[error("bind token {token} is claimed by both `{first}` and `{second}`; the continuation cannot be chosen deterministically")]
    BindConflict {
        token: String,
        first: String,
        second: String,
    },

    #[error("token {token} terminates a part of `{terminator_of}` but also continues expressions as `{operator}`")]
    TerminatorConflict {
        token: String,
        terminator_of: String,
        operator: String,
    },

    #[error("operator `{id}` is missing its {role} token")]
    MissingToken { id: String, role: &'static str },

    #[error("operator `{id}` has invalid precedence {precedence}: {reason}")]
    InvalidPrecedence {
        id: String,
        precedence: u32,
        reason: &'static str,
    },

    #[error("{kind} meta operator is declared twice (`{first}` and `{second}`)")]
    DuplicateMetaOperator {
        kind: &'static str,
        first: String,
        second: String,
    },

    #[error("operator `{id}`: {reason}")]
    InvalidRecord { id: String, reason: String },
}
