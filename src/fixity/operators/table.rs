//! Validated operator table
//!
//!     The table is the parser's only source of truth about operators. Building it checks
//!     every property the parser relies on so that parsing itself never has to resolve an
//!     ambiguity:
//!
//!         - every id is unique;
//!         - a token starts at most one lead-position construct;
//!         - a token continues at most one left operand (meta tokens included);
//!         - no close bracket or mixfix separator is also a continuation token;
//!         - atoms have precedence 0 and every other operator a positive one.
//!
//!     Lookups by lead token, bind token and id are hash lookups into the declaration-ordered
//!     operator list.

use super::error::ConfigError;
use super::spec::OperatorSpec;
use log::debug;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct OperatorTable {
    operators: Vec<OperatorSpec>,
    by_id: HashMap<String, usize>,
    lead: HashMap<String, usize>,
    bind: HashMap<String, usize>,
    sequence: Option<usize>,
    assign: Option<usize>,
}

impl OperatorTable {
    pub fn build(specs: impl IntoIterator<Item = OperatorSpec>) -> Result<Self, ConfigError> {
        let mut table = OperatorTable {
            operators: Vec::new(),
            by_id: HashMap::new(),
            lead: HashMap::new(),
            bind: HashMap::new(),
            sequence: None,
            assign: None,
        };

        for spec in specs {
            table.insert(spec)?;
        }
        table.check_terminators()?;

        debug!(
            "built operator table: {} operators, {} lead tokens, {} bind tokens",
            table.operators.len(),
            table.lead.len(),
            table.bind.len()
        );
        Ok(table)
    }

    fn insert(&mut self, spec: OperatorSpec) -> Result<(), ConfigError> {
        check_tokens(&spec)?;
        check_precedence(&spec)?;

        let index = self.operators.len();
        if self.by_id.insert(spec.id().to_string(), index).is_some() {
            return Err(ConfigError::DuplicateId(spec.id().to_string()));
        }

        if let Some(token) = spec.lead_token() {
            if let Some(&other) = self.lead.get(token) {
                return Err(ConfigError::LeadConflict {
                    token: token.to_string(),
                    first: self.operators[other].id().to_string(),
                    second: spec.id().to_string(),
                });
            }
            self.lead.insert(token.to_string(), index);
        }

        let bind_token = match &spec {
            OperatorSpec::Sequence { token, .. } | OperatorSpec::Assign { token, .. } => {
                Some(token.as_str())
            }
            _ => spec.bind_token(),
        };
        if let Some(token) = bind_token {
            if let Some(&other) = self.bind.get(token) {
                return Err(ConfigError::BindConflict {
                    token: token.to_string(),
                    first: self.operators[other].id().to_string(),
                    second: spec.id().to_string(),
                });
            }
            self.bind.insert(token.to_string(), index);
        }

        match &spec {
            OperatorSpec::Sequence { .. } => {
                set_meta(&mut self.sequence, "sequence", index, &self.operators, &spec)?
            }
            OperatorSpec::Assign { .. } => {
                set_meta(&mut self.assign, "assign", index, &self.operators, &spec)?
            }
            _ => {}
        }

        self.operators.push(spec);
        Ok(())
    }

    fn check_terminators(&self) -> Result<(), ConfigError> {
        for spec in &self.operators {
            for token in spec.terminators() {
                if let Some(&index) = self.bind.get(token) {
                    return Err(ConfigError::TerminatorConflict {
                        token: token.to_string(),
                        terminator_of: spec.id().to_string(),
                        operator: self.operators[index].id().to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Operator started by `token_type` in lead position.
    pub fn lead(&self, token_type: &str) -> Option<&OperatorSpec> {
        self.lead.get(token_type).map(|&i| &self.operators[i])
    }

    /// Operator that continues a left operand when `token_type` follows it. Includes the
    /// sequence and assignment meta operators.
    pub fn bind(&self, token_type: &str) -> Option<&OperatorSpec> {
        self.bind.get(token_type).map(|&i| &self.operators[i])
    }

    pub fn get(&self, id: &str) -> Option<&OperatorSpec> {
        self.by_id.get(id).map(|&i| &self.operators[i])
    }

    pub fn sequence(&self) -> Option<&OperatorSpec> {
        self.sequence.map(|i| &self.operators[i])
    }

    pub fn assign(&self) -> Option<&OperatorSpec> {
        self.assign.map(|i| &self.operators[i])
    }

    /// Every lead token, sorted.
    pub fn lead_tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.lead.keys().map(String::as_str).collect();
        tokens.sort_unstable();
        tokens
    }

    /// Operators in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &OperatorSpec> {
        self.operators.iter()
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

fn set_meta(
    slot: &mut Option<usize>,
    kind: &'static str,
    index: usize,
    operators: &[OperatorSpec],
    spec: &OperatorSpec,
) -> Result<(), ConfigError> {
    if let Some(existing) = *slot {
        return Err(ConfigError::DuplicateMetaOperator {
            kind,
            first: operators[existing].id().to_string(),
            second: spec.id().to_string(),
        });
    }
    *slot = Some(index);
    Ok(())
}

fn check_tokens(spec: &OperatorSpec) -> Result<(), ConfigError> {
    let missing = |role: &'static str| ConfigError::MissingToken {
        id: spec.id().to_string(),
        role,
    };

    if spec.id().is_empty() {
        return Err(ConfigError::InvalidRecord {
            id: String::new(),
            reason: "operator id is empty".to_string(),
        });
    }
    match spec {
        OperatorSpec::Sequence { token, .. } | OperatorSpec::Assign { token, .. }
            if token.is_empty() =>
        {
            return Err(missing("meta"));
        }
        OperatorSpec::Mixfix { separators, .. } if separators.is_empty() => {
            return Err(missing("separator"));
        }
        _ => {}
    }
    if spec.lead_token().is_some_and(str::is_empty) {
        return Err(missing("lead"));
    }
    if spec.bind_token().is_some_and(str::is_empty) {
        return Err(missing("bind"));
    }
    if spec.terminators().iter().any(|t| t.is_empty()) {
        return Err(missing("close"));
    }
    Ok(())
}

fn check_precedence(spec: &OperatorSpec) -> Result<(), ConfigError> {
    if spec.is_atom() || spec.is_meta() {
        return Ok(());
    }
    if spec.precedence() == 0 {
        return Err(ConfigError::InvalidPrecedence {
            id: spec.id().to_string(),
            precedence: 0,
            reason: "precedence 0 is reserved for atoms",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixity::operators::spec::{Assoc, AtomKind};

    fn arithmetic() -> Vec<OperatorSpec> {
        vec![
            OperatorSpec::atom("numberLiteral", "NUMBER", AtomKind::Number),
            OperatorSpec::atom("identifier", "IDENT", AtomKind::Identifier),
            OperatorSpec::infix("plus", "PLUS", 30, Assoc::Left),
            OperatorSpec::infix("minus", "MINUS", 30, Assoc::Left),
            OperatorSpec::prefix("uMinus", "MINUS", 50),
            OperatorSpec::circumfix("parentheses", "LPAREN", "RPAREN", 100),
            OperatorSpec::postcircumfix("call", "LPAREN", "RPAREN", 90),
            OperatorSpec::sequence("sequence", "COMMA"),
            OperatorSpec::assign("assign", "ASSIGN"),
        ]
    }

    #[test]
    fn test_lookups() {
        let table = OperatorTable::build(arithmetic()).unwrap();

        assert_eq!(table.lead("MINUS").map(OperatorSpec::id), Some("uMinus"));
        assert_eq!(table.bind("MINUS").map(OperatorSpec::id), Some("minus"));
        assert_eq!(table.lead("LPAREN").map(OperatorSpec::id), Some("parentheses"));
        assert_eq!(table.bind("LPAREN").map(OperatorSpec::id), Some("call"));
        assert_eq!(table.bind("COMMA").map(OperatorSpec::id), Some("sequence"));
        assert_eq!(table.sequence().map(OperatorSpec::id), Some("sequence"));
        assert_eq!(table.assign().map(OperatorSpec::id), Some("assign"));
        assert!(table.lead("PLUS").is_none());
        assert_eq!(
            table.lead_tokens(),
            vec!["IDENT", "LPAREN", "MINUS", "NUMBER"]
        );
    }

    #[test]
    fn test_identical_specs_build_identical_tables() {
        let a = OperatorTable::build(arithmetic()).unwrap();
        let b = OperatorTable::build(arithmetic()).unwrap();
        for token in ["NUMBER", "IDENT", "PLUS", "MINUS", "LPAREN", "COMMA", "ASSIGN", "RPAREN"] {
            assert_eq!(a.lead(token), b.lead(token));
            assert_eq!(a.bind(token), b.bind(token));
        }
    }

    #[test]
    fn test_duplicate_atom_lead() {
        let mut specs = arithmetic();
        specs.push(OperatorSpec::atom("otherNumber", "NUMBER", AtomKind::Number));
        let err = OperatorTable::build(specs).unwrap_err();
        assert_eq!(
            err,
            ConfigError::LeadConflict {
                token: "NUMBER".into(),
                first: "numberLiteral".into(),
                second: "otherNumber".into(),
            }
        );
    }

    #[test]
    fn test_bind_conflict() {
        let mut specs = arithmetic();
        specs.push(OperatorSpec::postfix("decrement", "MINUS", 60));
        let err = OperatorTable::build(specs).unwrap_err();
        assert!(matches!(err, ConfigError::BindConflict { ref token, .. } if token == "MINUS"));
    }

    #[test]
    fn test_terminator_conflict() {
        let mut specs = arithmetic();
        specs.push(OperatorSpec::circumfix("list", "LBRACK", "PLUS", 100));
        let err = OperatorTable::build(specs).unwrap_err();
        assert_eq!(
            err,
            ConfigError::TerminatorConflict {
                token: "PLUS".into(),
                terminator_of: "list".into(),
                operator: "plus".into(),
            }
        );
    }

    #[test]
    fn test_duplicate_id_and_meta() {
        let mut specs = arithmetic();
        specs.push(OperatorSpec::infix("plus", "CONCAT", 30, Assoc::Left));
        assert_eq!(
            OperatorTable::build(specs).unwrap_err(),
            ConfigError::DuplicateId("plus".into())
        );

        let mut specs = arithmetic();
        specs.push(OperatorSpec::sequence("semicolons", "SEMI"));
        assert!(matches!(
            OperatorTable::build(specs).unwrap_err(),
            ConfigError::DuplicateMetaOperator { kind: "sequence", .. }
        ));
    }

    #[test]
    fn test_precedence_rules() {
        let err = OperatorTable::build(vec![OperatorSpec::infix("plus", "PLUS", 0, Assoc::Left)])
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPrecedence { precedence: 0, .. }));
    }

    #[test]
    fn test_missing_close_token() {
        let err = OperatorTable::build(vec![OperatorSpec::circumfix("list", "LBRACK", "", 100)])
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingToken {
                id: "list".into(),
                role: "close"
            }
        );
    }
}
