//! Tests for loading and using custom token definitions

use std::sync::Arc;
use tokscan::{tokenize_with, Error, Lexer, TokenDefinitions, TokenKind};

const CALCULATOR: &str = r#"{
    "whitespace": [" ", "\n"],
    "symbols": ["+", "-", "*", "/", "(", ")", "="],
    "fixed": [
        {"name": "LET", "spelling": "let"},
        {"name": "PLUS", "spelling": "+"},
        {"name": "MINUS", "spelling": "-"},
        {"name": "TIMES", "spelling": "*"},
        {"name": "DIVIDE", "spelling": "/"},
        {"name": "POWER", "spelling": "**"},
        {"name": "LPAREN", "spelling": "("},
        {"name": "RPAREN", "spelling": ")"},
        {"name": "ASSIGN", "spelling": "="}
    ]
}"#;

#[test]
fn test_lexing_with_json_definitions() {
    let defs = Arc::new(TokenDefinitions::from_json(CALCULATOR).unwrap());
    let tokens = tokenize_with("let x = 2 ** y", defs).unwrap();
    let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::fixed("let"),
            TokenKind::Identifier,
            TokenKind::fixed("="),
            TokenKind::Integer,
            TokenKind::fixed("**"),
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn test_keywords_are_configuration() {
    let defs = Arc::new(TokenDefinitions::from_json(CALCULATOR).unwrap());
    // `while` is a keyword by default but not in the calculator table
    let lexer = Lexer::with_definitions("while", Arc::clone(&defs)).unwrap();
    assert!(lexer.at(&TokenKind::Identifier));
    assert!(Lexer::new("while").unwrap().at_fixed("while"));
}

#[test]
fn test_tab_is_not_whitespace_when_unconfigured() {
    let defs = Arc::new(TokenDefinitions::from_json(CALCULATOR).unwrap());
    let err = tokenize_with("a\tb", defs).unwrap_err();
    assert!(err.to_string().contains("hasn't been recognized"));
}

#[test]
fn test_definitions_shared_between_threads() {
    let defs = Arc::new(TokenDefinitions::from_json(CALCULATOR).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let defs = Arc::clone(&defs);
            std::thread::spawn(move || tokenize_with(&format!("let v{} = {}", i, i), defs))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap().len(), 4);
    }
}

#[test]
fn test_invalid_json_definitions_rejected() {
    let duplicate = r#"{
        "whitespace": [" "],
        "symbols": ["+"],
        "fixed": [
            {"name": "PLUS", "spelling": "+"},
            {"name": "ADD", "spelling": "+"}
        ]
    }"#;
    assert!(matches!(
        TokenDefinitions::from_json(duplicate),
        Err(Error::InvalidDefinitions(_))
    ));

    let missing_field = r#"{"whitespace": [" "], "symbols": []}"#;
    assert!(matches!(
        TokenDefinitions::from_json(missing_field),
        Err(Error::DefinitionsFormat(_))
    ));
}
