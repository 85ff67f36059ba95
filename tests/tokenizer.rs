//! Tokenizing with the sample language rules.

use fixity::fixity::lexing::Position;
use fixity::fixity::testing::tokens_of;
use fixity::{Error, Language, LexError};

#[test]
fn test_keywords_before_identifiers() {
    assert_eq!(
        tokens_of("lam x -> if x then true else null"),
        vec!["LAM", "IDENT", "ARROW", "IF", "IDENT", "THEN", "TRUE", "ELSE", "NULL"]
    );
    assert_eq!(
        tokens_of("define letter inner ending"),
        vec!["IDENT", "IDENT", "IDENT", "IDENT"]
    );
}

#[test]
fn test_longest_symbols_are_listed_first() {
    assert_eq!(
        tokens_of("x++ + 2 ** 3 * 4 -> -1"),
        vec!["IDENT", "INC", "PLUS", "NUMBER", "EXP", "NUMBER", "MUL", "NUMBER", "ARROW", "MINUS", "NUMBER"]
    );
}

#[test]
fn test_strings_with_escapes() {
    let tokens = Language::sample().tokenize(r#"f("a \"quoted\" word", "")"#).unwrap();
    let strings: Vec<&str> = tokens
        .iter()
        .filter(|token| token.is("STRING"))
        .map(|token| token.value.as_str())
        .collect();
    assert_eq!(strings, vec![r#""a \"quoted\" word""#, r#""""#]);
}

#[test]
fn test_unterminated_string_runs_to_end_of_input() {
    let source = r#"print "abc"#;
    let tokens = Language::sample().tokenize(source).unwrap();
    assert_eq!(tokens.len(), 2);
    assert!(tokens[1].is("STRING"));
    assert_eq!(tokens[1].value, r#""abc"#);

    let tree = Language::sample().parse_expression(r#""abc"#).unwrap();
    assert_eq!(tree.to_string(), r#""abc""#);
}

#[test]
fn test_whitespace_is_skipped() {
    let tokens = Language::sample().tokenize("  1\n\t+ 2  ").unwrap();
    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|token| token.class != "WS"));
    assert_eq!(tokens[1].position, Position::new(1, 1));
    assert_eq!(tokens[2].span, 7..8);
}

#[test]
fn test_token_rendering() {
    let rendered: Vec<String> = Language::sample()
        .tokenize("def f")
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    insta::assert_snapshot!(rendered.join("\n"), @r"
    DEF `def` at 0:0
    IDENT `f` at 0:4
    ");
}

#[test]
fn test_unrecognized_character() {
    let err = Language::sample().tokenize("1 +\n  #").unwrap_err();
    match err {
        Error::Lex(LexError::Unrecognized {
            character,
            offset,
            position,
        }) => {
            assert_eq!(character, '#');
            assert_eq!(offset, 6);
            assert_eq!(position, Position::new(1, 2));
        }
        other => panic!("expected an unrecognized character, got {}", other),
    }
}
