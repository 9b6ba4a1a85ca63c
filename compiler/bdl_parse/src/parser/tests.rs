use super::*;
use bdl_lexer::LexErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn nothing_loaded_before_first_advance() {
    let parser = Parser::new("module");
    assert!(parser.current().is_none());
    assert!(!parser.is_at_end());
}

#[test]
fn expect_ident_matches_lookahead() {
    let mut parser = Parser::new("module AG1280");
    parser.advance().unwrap();

    let ident = parser.expect_ident().unwrap();
    assert_eq!(ident.name(), "module");

    // Rules do not consume.
    assert_eq!(parser.expect_ident().unwrap().name(), "module");

    parser.advance().unwrap();
    assert_eq!(parser.expect_ident().unwrap().name(), "AG1280");
}

#[test]
fn expect_ident_mismatch() {
    let mut parser = Parser::new("  (");
    parser.advance().unwrap();

    let err = parser.expect_ident().unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedToken {
            expected: TokenKind::Ident,
            found: Some(TokenKind::LParen),
            pos: Position::new(2, 0, 2),
        }
    );
}

#[test]
fn expect_ident_at_end() {
    let mut parser = Parser::new("x ");
    parser.advance().unwrap();
    assert!(parser.advance().unwrap().is_none());
    assert!(parser.is_at_end());

    let err = parser.expect_ident().unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedToken {
            expected: TokenKind::Ident,
            found: None,
            pos: Position::new(2, 0, 2),
        }
    );
}

#[test]
fn advance_past_end_stays_at_end() {
    let mut parser = Parser::new("");
    assert!(parser.advance().unwrap().is_none());
    assert!(parser.advance().unwrap().is_none());
    assert!(parser.is_at_end());
}

#[test]
fn expect_kind_returns_token() {
    let mut parser = Parser::new("(");
    parser.advance().unwrap();
    let token = parser.expect_kind(TokenKind::LParen).unwrap();
    assert_eq!(token.literal, "(");
    assert!(parser.expect_kind(TokenKind::RParen).is_err());
}

#[test]
fn expect_int_value() {
    let mut parser = Parser::new("4700");
    parser.advance().unwrap();
    let lit = parser.expect_int().unwrap();
    assert_eq!(lit.value, 4700);
    assert_eq!(lit.token.literal, "4700");
}

#[test]
fn expect_int_max_and_overflow() {
    let mut parser = Parser::new("18446744073709551615 18446744073709551616");
    parser.advance().unwrap();
    assert_eq!(parser.expect_int().unwrap().value, u64::MAX);

    parser.advance().unwrap();
    let err = parser.expect_int().unwrap_err();
    assert_eq!(
        err,
        ParseError::IntOverflow {
            literal: "18446744073709551616".to_owned(),
            pos: Position::new(21, 0, 21),
        }
    );
}

#[test]
fn expect_int_rejects_ident() {
    let mut parser = Parser::new("d");
    parser.advance().unwrap();
    assert!(matches!(
        parser.expect_int(),
        Err(ParseError::UnexpectedToken {
            expected: TokenKind::Int,
            found: Some(TokenKind::Ident),
            ..
        })
    ));
}

#[test]
fn scan_errors_surface_from_advance() {
    let mut parser = Parser::new("a &&");
    parser.advance().unwrap();
    let err = parser.advance().unwrap_err();
    match err {
        ParseError::Lex(lex) => {
            assert!(matches!(lex.kind, LexErrorKind::UnknownOperator { .. }));
        }
        other => panic!("expected a scan error, got {other:?}"),
    }
}

#[test]
fn failed_advance_clears_lookahead() {
    let mut parser = Parser::new("a && b");
    parser.advance().unwrap();
    assert!(parser.advance().is_err());

    assert_eq!(parser.current_kind(), None);
    assert!(!parser.is_at_end());
    assert_eq!(
        parser.expect_ident().unwrap_err(),
        ParseError::UnexpectedToken {
            expected: TokenKind::Ident,
            found: None,
            pos: Position::new(4, 0, 4),
        }
    );

    // No further tokens once scanning has failed.
    assert!(parser.advance().unwrap().is_none());
    assert!(parser.expect_ident().is_err());
}

#[test]
fn unterminated_comment_is_not_end_of_input() {
    let mut parser = Parser::new("/* open");
    let err = parser.advance().unwrap_err();
    assert_eq!(err.position(), Position::START);
    assert!(!parser.is_at_end());
}

#[test]
fn statement_ends_with_config() {
    let config = ScannerConfig {
        newline_terminates_statements: true,
    };
    let mut parser = Parser::with_config("a\nb", config);
    parser.advance().unwrap();
    parser.advance().unwrap();
    assert_eq!(parser.current_kind(), Some(TokenKind::StmtEnd));
}

#[test]
fn comments_are_visible_through_parser() {
    let mut parser = Parser::new("// header\nmodule");
    parser.advance().unwrap();
    assert_eq!(parser.comments().len(), 1);
    assert_eq!(parser.comments()[0].text, " header");
}

#[test]
fn position_without_lookahead_is_scanner_position() {
    let mut parser = Parser::new("x\n\n");
    assert_eq!(parser.position(), Position::START);
    parser.advance().unwrap();
    parser.advance().unwrap();
    assert_eq!(parser.position(), Position::new(3, 2, 0));
}
