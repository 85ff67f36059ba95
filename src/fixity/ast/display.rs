//! S-expression rendering.

use super::node::{AstNode, Capture, CaptureValue, Scalar};
use std::fmt;

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole numbers print without a fractional part
            Scalar::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::String(s) => write!(f, "{:?}", s),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Null => f.write_str("null"),
        }
    }
}

impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstNode::Literal { value, .. } => write!(f, "{}", value),
            AstNode::Identifier { name, .. } => f.write_str(name),
            AstNode::Operation { tag, children } => {
                write!(f, "({}", tag)?;
                for child in children {
                    write!(f, " {}", child)?;
                }
                f.write_str(")")
            }
            AstNode::Statement { rule, captures } => {
                write!(f, "({}", rule)?;
                for capture in captures {
                    write!(f, " {}", capture)?;
                }
                f.write_str(")")
            }
            AstNode::Program { statements } => {
                f.write_str("(program")?;
                for statement in statements {
                    write!(f, " {}", statement)?;
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for Capture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

impl fmt::Display for CaptureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureValue::Single(node) => write!(f, "{}", node),
            CaptureValue::Repeated(nodes) => {
                f.write_str("[")?;
                for (i, node) in nodes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", node)?;
                }
                f.write_str("]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn num(n: f64) -> AstNode {
        AstNode::literal("numberLiteral", Scalar::Number(n))
    }

    #[test]
    fn test_operations() {
        let node = AstNode::operation(
            "plus",
            vec![num(1.0), AstNode::operation("mul", vec![num(2.0), num(3.5)])],
        );
        assert_snapshot!(node.to_string(), @"(plus 1 (mul 2 3.5))");
        assert_eq!(AstNode::operation("list", vec![]).to_string(), "(list)");
    }

    #[test]
    fn test_literals() {
        assert_eq!(
            AstNode::literal("stringLiteral", Scalar::String("a \"b\"".into())).to_string(),
            r#""a \"b\"""#
        );
        assert_eq!(AstNode::literal("trueLiteral", Scalar::Bool(true)).to_string(), "true");
        assert_eq!(AstNode::literal("nullLiteral", Scalar::Null).to_string(), "null");
    }

    #[test]
    fn test_statements() {
        let statement = AstNode::Statement {
            rule: "functionDef".into(),
            captures: vec![
                Capture {
                    name: "name".into(),
                    value: CaptureValue::Single(AstNode::identifier("identifier", "f")),
                },
                Capture {
                    name: "stat".into(),
                    value: CaptureValue::Repeated(vec![num(1.0), num(2.0)]),
                },
            ],
        };
        let program = AstNode::Program {
            statements: vec![statement, num(3.0)],
        };
        assert_snapshot!(program.to_string(), @"(program (functionDef name=f stat=[1 2]) 3)");
    }
}
