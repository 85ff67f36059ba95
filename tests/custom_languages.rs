//! Languages other than the sample one: statement rules with statement captures and
//! operator captures, non-associative operators, and configuration failures.

use fixity::fixity::grammar::GrammarError;
use fixity::fixity::operators::ConfigError;
use fixity::fixity::parsing::SyntaxError;
use fixity::{Error, Language, LanguageConfig};

const LOOPS: &str = r#"
keywords: [while, do, end, print, loop]
lex_rules:
  - { class: WS, type: WS, pattern: '\s+' }
  - { class: Number, type: NUMBER, pattern: '\d+' }
  - { class: Symbol, type: EQ, pattern: '==' }
  - { class: Symbol, type: LT, pattern: '<' }
  - { class: Symbol, type: PLUS, pattern: '\+' }
  - { class: Symbol, type: ASSIGN, pattern: '=' }
  - { class: Punc, type: LBRACK, pattern: '\[' }
  - { class: Punc, type: RBRACK, pattern: '\]' }
  - { class: Punc, type: COMMA, pattern: ',' }
  - { class: Symbol, type: IDENT, pattern: '[a-z]+' }
skip_classes: [WS]
operators:
  - { id: number, lead: NUMBER }
  - { id: name, lead: IDENT }
  - { id: plus, bind: PLUS, precedence: 30, assoc: left, fixity: infix }
  - { id: eq, bind: EQ, precedence: 20, assoc: none, fixity: infix }
  - { id: lt, bind: LT, precedence: 20, assoc: left, fixity: infix }
  - { id: list, lead: LBRACK, close: RBRACK, precedence: 100, fixity: matchfix }
  - { kind: sequence, id: seq, token: COMMA }
  - { kind: assign, id: set, token: ASSIGN }
rules: |
  # loops
  while WHILE cond:stat DO body:stat* END
  # output
  print PRINT items:list
  forever LOOP stat*
"#;

fn loops() -> Language {
    LanguageConfig::from_yaml(LOOPS).unwrap().build().unwrap()
}

fn program(source: &str) -> String {
    loops().parse(source).unwrap().to_string()
}

fn syntax_error(source: &str) -> SyntaxError {
    match loops().parse(source) {
        Err(Error::Syntax(err)) => err,
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

fn syntax_message(source: &str) -> String {
    syntax_error(source).message
}

#[test]
fn test_statement_captures() {
    insta::assert_snapshot!(
        program("while i == 3 do i = i + 1 print [i] end"),
        @"(program (while cond=(eq i 3) body=[(set i (plus i 1)) (print items=(list i))]))"
    );
}

#[test]
fn test_zero_or_more_body() {
    assert_eq!(
        program("while x do end"),
        "(program (while cond=x body=[]))"
    );
}

#[test]
fn test_repetition_ending_a_rule_runs_to_end_of_input() {
    assert_eq!(
        program("loop 1 2 3"),
        "(program (forever stat=[1 2 3]))"
    );
}

#[test]
fn test_trailing_repetition_stops_for_enclosing_terminator() {
    assert_eq!(
        program("while i do loop i end"),
        "(program (while cond=i body=[(forever stat=[i])]))"
    );
    insta::assert_snapshot!(
        program("while a do loop print [a] a = a + 1 end"),
        @"(program (while cond=a body=[(forever stat=[(print items=(list a)) (set a (plus a 1))])]))"
    );
    assert_eq!(
        program("[loop 1 2]"),
        "(program (list (forever stat=[1 2])))"
    );
}

#[test]
fn test_nested_statements_are_bounded() {
    let nest = |depth: usize| "while x do ".repeat(depth) + &"end ".repeat(depth);
    let shallow = nest(10);
    let deep = nest(100);
    let (shallow, deep) = std::thread::Builder::new()
        .stack_size(8 * 1024 * 1024)
        .spawn(move || {
            let language = loops();
            (language.parse(&shallow).is_ok(), language.parse(&deep))
        })
        .unwrap()
        .join()
        .unwrap();
    assert!(shallow);
    match deep {
        Err(Error::Syntax(err)) => assert!(err.message.contains("nesting too deep"), "{}", err),
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

#[test]
fn test_operator_capture_checks_head() {
    assert_eq!(program("print [1, 2]"), "(program (print items=(list 1 2)))");

    let message = syntax_message("print 1 + 2");
    assert!(message.contains("expected `list`"), "{}", message);
}

#[test]
fn test_non_associative_operator_cannot_chain() {
    assert_eq!(program("a == b"), "(program (eq a b))");
    assert_eq!(program("a == b + 1"), "(program (eq a (plus b 1)))");

    let err = syntax_error("a == b == c");
    assert!(err.message.contains("non-associative"), "{}", err);
    assert_eq!(err.found_type(), "EQ");
    assert_eq!(err.expected.iter().collect::<Vec<_>>(), vec!["PLUS"]);

    // Mixed with a left-associative operator of the same precedence.
    let message = syntax_message("a < b == c");
    assert!(message.contains("`eq`"), "{}", message);

    assert_eq!(program("a < b < c"), "(program (lt (lt a b) c))");
}

#[test]
fn test_shared_parser_gives_identical_results() {
    let a = loops();
    let b = loops();
    let source = "while a < 3 do a = a + 1 end";
    assert_eq!(a.parse(source).unwrap(), b.parse(source).unwrap());
}

fn build_error(yaml: &str) -> Error {
    match LanguageConfig::from_yaml(yaml).and_then(|config| config.build()) {
        Err(err) => err,
        Ok(_) => panic!("expected configuration to fail:\n{}", yaml),
    }
}

#[test]
fn test_configuration_errors() {
    let err = build_error(
        "operators:\n  - { id: a, lead: NUMBER }\n  - { id: b, lead: NUMBER }\n",
    );
    assert!(matches!(err, Error::Config(ConfigError::LeadConflict { .. })));

    let err = build_error(
        "operators:\n  - { id: a, bind: PLUS, precedence: 1, fixity: infix }\n  - { id: b, bind: PLUS, precedence: 2, fixity: postfix }\n",
    );
    assert!(matches!(err, Error::Config(ConfigError::BindConflict { .. })));

    let err = build_error(
        "operators:\n  - { id: list, lead: LBRACK, precedence: 100, fixity: matchfix }\n",
    );
    assert!(matches!(
        err,
        Error::Config(ConfigError::MissingToken { role: "close", .. })
    ));

    let err = build_error("lex_rules:\n  - { class: Bad, type: BAD, pattern: '(' }\n");
    assert!(matches!(err, Error::Lex(_)));
}

#[test]
fn test_grammar_errors() {
    let err = build_error(
        "operators:\n  - { id: name, lead: IDENT }\nrules: |\n  show SHOW value:expr\n",
    );
    assert!(matches!(
        err,
        Error::Grammar(GrammarError::UnknownOperator { line: 1, .. })
    ));

    let err = build_error(
        "operators:\n  - { id: name, lead: IDENT }\nrules: |\n  a A stat\n  a B stat\n",
    );
    assert!(matches!(
        err,
        Error::Grammar(GrammarError::DuplicateRule { line: 2, previous: 1, .. })
    ));

    let err = build_error(
        "operators:\n  - { id: name, lead: IDENT }\nrules: |\n  block BEGIN name+ END\n",
    );
    assert!(matches!(
        err,
        Error::Grammar(GrammarError::MalformedRepetition { .. })
    ));
}
