//! Language configuration documents.

use super::Language;
use crate::fixity::error::Error;
use crate::fixity::lexing::{LexRule, Tokenizer};
use crate::fixity::operators::{OperatorRecord, OperatorSpec};
use crate::fixity::parsing::Parser;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Reserved words, expanded with [LexRule::keyword] ahead of `lex_rules`.
    pub keywords: Vec<String>,
    /// Ordered lexical rules.
    pub lex_rules: Vec<LexRule>,
    /// Token classes dropped before parsing.
    pub skip_classes: Vec<String>,
    pub operators: Vec<OperatorRecord>,
    /// Statement grammar text.
    pub rules: String,
}

impl LanguageConfig {
    pub fn from_yaml(text: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_json(text: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a configuration file; `.json` files are parsed as JSON, anything else as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json(&text),
            _ => Self::from_yaml(&text),
        }
    }

    /// Keyword rules followed by the configured rules.
    pub fn all_lex_rules(&self) -> Vec<LexRule> {
        self.keywords
            .iter()
            .map(|word| LexRule::keyword(word))
            .chain(self.lex_rules.iter().cloned())
            .collect()
    }

    /// Convert every operator record, failing on the first invalid one.
    pub fn operator_specs(&self) -> Result<Vec<OperatorSpec>, Error> {
        self.operators
            .iter()
            .cloned()
            .map(|record| OperatorSpec::try_from(record).map_err(Error::from))
            .collect()
    }

    pub fn build(&self) -> Result<Language, Error> {
        let tokenizer = self
            .skip_classes
            .iter()
            .fold(Tokenizer::new(self.all_lex_rules())?, |tokenizer, class| {
                tokenizer.skipping(class.as_str())
            });
        let parser = Parser::new(self.operator_specs()?, &self.rules)?;
        Ok(Language::new(tokenizer, parser))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixity::operators::ConfigError;

    const MINIMAL: &str = r#"
keywords: [let, in]
lex_rules:
  - { class: WS, type: WS, pattern: '\s+' }
  - { class: Number, type: NUMBER, pattern: '\d+' }
  - { class: Symbol, type: PLUS, pattern: '\+' }
  - { class: Symbol, type: ASSIGN, pattern: '=' }
  - { class: Symbol, type: IDENT, pattern: '[a-zA-Z_]\w*' }
skip_classes: [WS]
operators:
  - { id: numberLiteral, lead: NUMBER }
  - { id: identifier, lead: IDENT }
  - { id: plus, bind: PLUS, precedence: 30, assoc: left, fixity: infix, arity: binary }
  - { id: let, lead: LET, bind: IN, precedence: 5, fixity: mixfix, arity: binary }
  - { kind: assign, id: assign, token: ASSIGN }
"#;

    #[test]
    fn test_yaml_language() {
        let language = LanguageConfig::from_yaml(MINIMAL).unwrap().build().unwrap();
        let node = language.parse_expression("let x = 1 in x + 2").unwrap();
        assert_eq!(node.to_string(), "(let (assign x 1) (plus x 2))");
    }

    #[test]
    fn test_keywords_come_first() {
        let config = LanguageConfig::from_yaml(MINIMAL).unwrap();
        let types: Vec<String> = config
            .all_lex_rules()
            .into_iter()
            .map(|rule| rule.token_type)
            .collect();
        assert_eq!(&types[..3], ["LET", "IN", "WS"]);
    }

    #[test]
    fn test_json_with_legacy_records() {
        let config = LanguageConfig::from_json(
            r#"{
                "lex_rules": [{"class": "Number", "type": "NUMBER", "pattern": "\\d+"}],
                "operators": [
                    {"type": "oper", "id": "numberLiteral", "nToken": "NUMBER", "lToken": null,
                     "oToken": null, "prec": 0, "assoc": "NONE", "affix": "NONE", "arity": "NONE"}
                ]
            }"#,
        )
        .unwrap();
        let language = config.build().unwrap();
        assert_eq!(language.parse("7").unwrap().to_string(), "(program 7)");
    }

    #[test]
    fn test_invalid_record_surfaces_as_config_error() {
        let config = LanguageConfig::from_yaml(
            "operators:\n  - { id: plus, lead: PLUS, precedence: 30, fixity: infix }\n",
        )
        .unwrap();
        let err = config.build().unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingToken { role: "bind", .. })
        ));
    }

    #[test]
    fn test_malformed_documents() {
        assert!(matches!(
            LanguageConfig::from_yaml("operators: 3").unwrap_err(),
            Error::Yaml(_)
        ));
        assert!(matches!(
            LanguageConfig::from_json("{").unwrap_err(),
            Error::Json(_)
        ));
    }
}
