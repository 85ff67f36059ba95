//! Property-based tests for the tokenizer and the precedence parser
//!
//! Random sources are built from the sample language vocabulary together with the tree the
//! parser is expected to produce for them, so each case checks the exact grouping rather than
//! just the absence of errors.

use fixity::fixity::testing::sexpr;
use fixity::{Language, LanguageConfig};
use proptest::prelude::*;

/// Arithmetic expression with a known rendering both as source and as an S-expression.
#[derive(Debug, Clone)]
enum Expr {
    Number(u32),
    Name(String),
    Negate(Box<Expr>),
    Binary(&'static str, Box<Expr>, Box<Expr>),
}

const OPERATORS: [(&str, &str); 5] = [
    ("plus", "+"),
    ("minus", "-"),
    ("mul", "*"),
    ("div", "/"),
    ("exp", "**"),
];

impl Expr {
    /// Fully parenthesized source text.
    fn source(&self) -> String {
        match self {
            Expr::Number(n) => n.to_string(),
            Expr::Name(name) => name.clone(),
            Expr::Negate(operand) => format!("-{}", operand.source()),
            Expr::Binary(id, left, right) => {
                format!("({} {} {})", left.source(), symbol(id), right.source())
            }
        }
    }

    fn sexpr(&self) -> String {
        match self {
            Expr::Number(n) => n.to_string(),
            Expr::Name(name) => name.clone(),
            Expr::Negate(operand) => format!("(uMinus {})", operand.sexpr()),
            Expr::Binary(id, left, right) => {
                format!("(parentheses ({} {} {}))", id, left.sexpr(), right.sexpr())
            }
        }
    }
}

fn symbol(id: &str) -> &'static str {
    OPERATORS
        .iter()
        .find(|(name, _)| *name == id)
        .map(|(_, symbol)| *symbol)
        .unwrap_or("+")
}

fn expr_strategy() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        (0u32..1000).prop_map(Expr::Number),
        "[xyz][0-9]?".prop_map(Expr::Name),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| Expr::Negate(Box::new(e))),
            (0..OPERATORS.len(), inner.clone(), inner).prop_map(|(op, l, r)| {
                Expr::Binary(OPERATORS[op].0, Box::new(l), Box::new(r))
            }),
        ]
    })
}

/// Whitespace-separated sample language lexemes.
fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[0-9]{1,4}",
            "[a-z_][a-z0-9_]{0,6}",
            r#""[a-z ]{0,5}""#,
            Just("->".to_string()),
            Just("++".to_string()),
            Just("**".to_string()),
            Just("(".to_string()),
            Just(")".to_string()),
            Just(",".to_string()),
            Just("=".to_string()),
            Just(".".to_string()),
        ],
        0..20,
    )
    .prop_map(|lexemes| lexemes.join(" "))
}

proptest! {
    #[test]
    fn test_spans_cover_token_values(source in source_strategy()) {
        let tokens = Language::sample().tokenize(&source).unwrap();
        let mut previous_end = 0;
        for token in &tokens {
            prop_assert!(token.span.start >= previous_end);
            prop_assert!(token.span.start < token.span.end);
            prop_assert_eq!(&source[token.span.clone()], token.value.as_str());
            previous_end = token.span.end;
        }
    }

    #[test]
    fn test_parenthesized_arithmetic(expr in expr_strategy()) {
        prop_assert_eq!(sexpr(&expr.source()), expr.sexpr());
    }

    #[test]
    fn test_left_associative_chains(
        first in 0u32..100,
        rest in prop::collection::vec((prop::bool::ANY, 0u32..100), 1..8),
    ) {
        let mut source = first.to_string();
        let mut expected = first.to_string();
        for (is_plus, n) in &rest {
            let (id, symbol) = if *is_plus { ("plus", "+") } else { ("minus", "-") };
            source = format!("{} {} {}", source, symbol, n);
            expected = format!("({} {} {})", id, expected, n);
        }
        prop_assert_eq!(sexpr(&source), expected);
    }

    #[test]
    fn test_right_associative_chains(operands in prop::collection::vec(0u32..100, 2..8)) {
        let source = operands
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ** ");
        let expected = operands
            .iter()
            .rev()
            .map(ToString::to_string)
            .reduce(|right, left| format!("(exp {} {})", left, right))
            .unwrap_or_default();
        prop_assert_eq!(sexpr(&source), expected);
    }

    #[test]
    fn test_rebuilt_language_parses_identically(expr in expr_strategy()) {
        let rebuilt = LanguageConfig::from_yaml(Language::sample_config())
            .unwrap()
            .build()
            .unwrap();
        let source = expr.source();
        prop_assert_eq!(
            rebuilt.parse(&source).unwrap(),
            Language::sample().parse(&source).unwrap()
        );
    }
}
