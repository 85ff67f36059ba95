//! Node types.

use serde::Serialize;

/// Raw literal value carried by a leaf.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    String(String),
    Bool(bool),
    Null,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AstNode {
    /// Number, string, boolean or null leaf, tagged by its atom id.
    Literal { tag: String, value: Scalar },
    /// Identifier leaf, tagged by its atom id.
    Identifier { tag: String, name: String },
    /// Operator application, children in source order.
    Operation { tag: String, children: Vec<AstNode> },
    /// Statement-rule match with one entry per capture element.
    Statement { rule: String, captures: Vec<Capture> },
    Program { statements: Vec<AstNode> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Capture {
    pub name: String,
    pub value: CaptureValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CaptureValue {
    Single(AstNode),
    Repeated(Vec<AstNode>),
}

impl AstNode {
    pub fn literal(tag: impl Into<String>, value: Scalar) -> Self {
        AstNode::Literal {
            tag: tag.into(),
            value,
        }
    }

    pub fn identifier(tag: impl Into<String>, name: impl Into<String>) -> Self {
        AstNode::Identifier {
            tag: tag.into(),
            name: name.into(),
        }
    }

    pub fn operation(tag: impl Into<String>, children: Vec<AstNode>) -> Self {
        AstNode::Operation {
            tag: tag.into(),
            children,
        }
    }

    /// Operator id, rule name, or `program` for the root.
    pub fn tag(&self) -> &str {
        match self {
            AstNode::Literal { tag, .. }
            | AstNode::Identifier { tag, .. }
            | AstNode::Operation { tag, .. } => tag,
            AstNode::Statement { rule, .. } => rule,
            AstNode::Program { .. } => "program",
        }
    }

    /// Direct operands of an operation; empty for every other node.
    pub fn children(&self) -> &[AstNode] {
        match self {
            AstNode::Operation { children, .. } => children,
            _ => &[],
        }
    }

    pub fn capture(&self, name: &str) -> Option<&CaptureValue> {
        match self {
            AstNode::Statement { captures, .. } => captures
                .iter()
                .find(|capture| capture.name == name)
                .map(|capture| &capture.value),
            _ => None,
        }
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, AstNode::Identifier { .. })
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, AstNode::Literal { .. } | AstNode::Identifier { .. })
    }
}

impl CaptureValue {
    pub fn nodes(&self) -> &[AstNode] {
        match self {
            CaptureValue::Single(node) => std::slice::from_ref(node),
            CaptureValue::Repeated(nodes) => nodes,
        }
    }
}
