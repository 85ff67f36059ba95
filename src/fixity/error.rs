//! Crate-level error

use crate::fixity::grammar::GrammarError;
use crate::fixity::lexing::LexError;
use crate::fixity::operators::ConfigError;
use crate::fixity::parsing::{BuildError, SyntaxError};
use thiserror::Error;

/// Any failure between configuration text and a finished tree.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<BuildError> for Error {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::Config(err) => Error::Config(err),
            BuildError::Grammar(err) => Error::Grammar(err),
        }
    }
}
