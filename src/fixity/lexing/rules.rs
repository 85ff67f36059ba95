//! Lexical rule descriptors.

use serde::{Deserialize, Serialize};

/// Class assigned to rules built by [`LexRule::keyword`].
pub const KEYWORD_CLASS: &str = "Keyword";

/// One ordered lexical rule: tokens matching `pattern` get `class` and `token_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexRule {
    pub class: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub pattern: String,
}

impl LexRule {
    pub fn new(
        class: impl Into<String>,
        token_type: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            class: class.into(),
            token_type: token_type.into(),
            pattern: pattern.into(),
        }
    }

    /// A reserved word. The type is the upper-cased word; the pattern refuses to match a
    /// prefix of a longer identifier (`in` does not match the start of `inc`).
    pub fn keyword(word: &str) -> Self {
        Self::new(
            KEYWORD_CLASS,
            word.to_uppercase(),
            format!(r"{}\b", regex::escape(word)),
        )
    }
}
