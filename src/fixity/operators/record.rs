//! Flat operator records
//!
//!     Configuration files describe operators with one flat record per operator, the way the
//!     table is usually written by hand:
//!
//!         - id: plus
//!           bind: PLUS
//!           precedence: 30
//!           assoc: left
//!           fixity: infix
//!           arity: binary
//!
//!     The older spelling of the same record (`type`, `nToken`, `lToken`, `oToken`, `prec`,
//!     `affix`, upper-case enum values, explicit nulls) is accepted through serde aliases.
//!
//!     A record says nothing the parser can rely on until it is converted: `TryFrom` checks
//!     that the populated token fields agree with the declared fixity and arity and produces
//!     the matching [OperatorSpec] variant.

use super::error::ConfigError;
use super::spec::{Arity, Assoc, AtomKind, Fixity, OperatorSpec};
use serde::{Deserialize, Serialize};

/// Which family a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OperatorKind {
    #[default]
    #[serde(rename = "oper", alias = "OPER", alias = "operator")]
    Oper,
    #[serde(rename = "sequence", alias = "SEQUENCE")]
    Sequence,
    #[serde(rename = "assign", alias = "ASSIGN")]
    Assign,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OperatorRecord {
    pub id: String,
    #[serde(default, rename = "kind", alias = "type")]
    pub kind: OperatorKind,
    #[serde(default, alias = "nToken", skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,
    #[serde(default, alias = "lToken", skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
    #[serde(default, alias = "oToken", skip_serializing_if = "Option::is_none")]
    pub close: Option<String>,
    #[serde(default, alias = "prec")]
    pub precedence: u32,
    #[serde(default)]
    pub assoc: Assoc,
    #[serde(default, alias = "affix")]
    pub fixity: Fixity,
    #[serde(default)]
    pub arity: Arity,
    /// Leaf kind for atoms. Inferred from the lead token when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal: Option<AtomKind>,
    /// Token of a meta operator.
    #[serde(default, alias = "name", skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl OperatorRecord {
    fn invalid(&self, reason: impl Into<String>) -> ConfigError {
        ConfigError::InvalidRecord {
            id: self.id.clone(),
            reason: reason.into(),
        }
    }

    fn require(&self, field: &Option<String>, role: &'static str) -> Result<String, ConfigError> {
        match field.as_deref() {
            Some(token) if !token.is_empty() => Ok(token.to_string()),
            _ => Err(ConfigError::MissingToken {
                id: self.id.clone(),
                role,
            }),
        }
    }

    fn forbid(&self, field: &Option<String>, role: &str) -> Result<(), ConfigError> {
        match field {
            Some(_) => Err(self.invalid(format!(
                "{} operators take no {} token",
                self.fixity, role
            ))),
            None => Ok(()),
        }
    }

    fn check_arity(&self, allowed: &[Arity]) -> Result<(), ConfigError> {
        if self.arity == Arity::None || allowed.contains(&self.arity) {
            Ok(())
        } else {
            Err(self.invalid(format!(
                "arity {:?} does not fit a {} operator",
                self.arity, self.fixity
            )))
        }
    }

    fn into_atom(self) -> Result<OperatorSpec, ConfigError> {
        let lead = self.require(&self.lead, "lead")?;
        self.forbid(&self.bind, "bind")?;
        self.forbid(&self.close, "close")?;
        if self.precedence != 0 {
            return Err(ConfigError::InvalidPrecedence {
                id: self.id,
                precedence: self.precedence,
                reason: "atoms must have precedence 0",
            });
        }
        if self.arity != Arity::None {
            return Err(self.invalid("atoms take no operands"));
        }
        let literal = self.literal.unwrap_or_else(|| infer_literal(&lead));
        Ok(OperatorSpec::atom(self.id, lead, literal))
    }

    fn into_prefix(self) -> Result<OperatorSpec, ConfigError> {
        let lead = self.require(&self.lead, "lead")?;
        self.forbid(&self.bind, "bind")?;
        self.forbid(&self.close, "close")?;
        self.check_arity(&[Arity::Unary])?;
        Ok(OperatorSpec::prefix(self.id, lead, self.precedence))
    }

    fn into_infix(self) -> Result<OperatorSpec, ConfigError> {
        let bind = self.require(&self.bind, "bind")?;
        self.forbid(&self.lead, "lead")?;
        self.check_arity(&[Arity::Binary, Arity::Ternary])?;
        match (self.arity, self.close.is_some()) {
            (Arity::Ternary, _) | (Arity::None, true) => {
                let close = self.require(&self.close, "close")?;
                Ok(OperatorSpec::ternary(
                    self.id,
                    bind,
                    close,
                    self.precedence,
                    self.assoc,
                ))
            }
            (_, true) => Err(self.invalid("a binary infix operator takes no close token")),
            (_, false) => Ok(OperatorSpec::infix(self.id, bind, self.precedence, self.assoc)),
        }
    }

    fn into_postfix(self) -> Result<OperatorSpec, ConfigError> {
        let bind = self.require(&self.bind, "bind")?;
        self.forbid(&self.lead, "lead")?;
        self.forbid(&self.close, "close")?;
        self.check_arity(&[Arity::Unary])?;
        Ok(OperatorSpec::postfix(self.id, bind, self.precedence))
    }

    fn into_matchfix(self) -> Result<OperatorSpec, ConfigError> {
        let close = self.require(&self.close, "close")?;
        match (self.lead.is_some(), self.bind.is_some()) {
            (true, false) => {
                self.check_arity(&[Arity::Unary])?;
                let open = self.require(&self.lead, "lead")?;
                Ok(OperatorSpec::circumfix(self.id, open, close, self.precedence))
            }
            (false, true) => {
                self.check_arity(&[Arity::Binary])?;
                let open = self.require(&self.bind, "bind")?;
                Ok(OperatorSpec::Postcircumfix {
                    id: self.id,
                    open,
                    close,
                    precedence: self.precedence,
                    assoc: self.assoc,
                })
            }
            (true, true) => {
                Err(self.invalid("a matchfix operator opens with either a lead or a bind token, not both"))
            }
            (false, false) => Err(ConfigError::MissingToken {
                id: self.id,
                role: "opening",
            }),
        }
    }

    fn into_mixfix(self) -> Result<OperatorSpec, ConfigError> {
        let lead = self.require(&self.lead, "lead")?;
        let bind = self.require(&self.bind, "bind")?;
        self.check_arity(&[Arity::Binary, Arity::Ternary])?;
        let mut separators = vec![bind];
        match (self.arity, self.close.is_some()) {
            (Arity::Ternary, _) | (Arity::None, true) => {
                separators.push(self.require(&self.close, "close")?);
            }
            (_, true) => return Err(self.invalid("a binary mixfix operator takes no close token")),
            (_, false) => {}
        }
        Ok(OperatorSpec::mixfix(
            self.id,
            lead,
            separators,
            self.precedence,
            self.assoc,
        ))
    }
}

impl TryFrom<OperatorRecord> for OperatorSpec {
    type Error = ConfigError;

    fn try_from(record: OperatorRecord) -> Result<Self, Self::Error> {
        match record.kind {
            OperatorKind::Sequence => {
                let token = record.require(&record.token, "sequence")?;
                Ok(OperatorSpec::sequence(record.id, token))
            }
            OperatorKind::Assign => {
                let token = record.require(&record.token, "assignment")?;
                Ok(OperatorSpec::assign(record.id, token))
            }
            OperatorKind::Oper => match record.fixity {
                Fixity::None => record.into_atom(),
                Fixity::Prefix => record.into_prefix(),
                Fixity::Infix => record.into_infix(),
                Fixity::Postfix => record.into_postfix(),
                Fixity::Matchfix => record.into_matchfix(),
                Fixity::Mixfix => record.into_mixfix(),
            },
        }
    }
}

/// Leaf kind for an atom whose record does not name one.
fn infer_literal(lead: &str) -> AtomKind {
    match lead.to_ascii_uppercase().as_str() {
        "NUMBER" => AtomKind::Number,
        "STRING" => AtomKind::String,
        "TRUE" => AtomKind::True,
        "FALSE" => AtomKind::False,
        "NULL" => AtomKind::Null,
        _ => AtomKind::Identifier,
    }
}
