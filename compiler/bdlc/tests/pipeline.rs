//! End-to-end tests over the public pipeline: source text in, token
//! listings, summaries and rendered diagnostics out.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use bdl_ir::{Module, Pin, PinKind, PinRef, ResistorExpr, TokenKind};
use bdl_lexer::{lex, ScannerConfig};
use bdl_parse::Parser;
use bdlc::commands::{check_source, lex_source, CheckSummary};
use bdlc::diagnostic;
use pretty_assertions::assert_eq;

const BOARD: &str = "\
// AG1280 breakout
module AG1280 (
    VCC, GND /* rails */
)
";

#[test]
fn lex_listing() {
    let listing = lex_source("module AG1280 (\n)\n", ScannerConfig::default()).unwrap();
    assert_eq!(
        listing,
        "1:1-1:7 Ident \"module\"\n\
         1:8-1:14 Ident \"AG1280\"\n\
         1:15-1:16 LParen \"(\"\n\
         2:1-2:2 RParen \")\"\n"
    );
}

#[test]
fn lex_listing_with_statement_ends() {
    let config = ScannerConfig {
        newline_terminates_statements: true,
    };
    let listing = lex_source("a\n", config).unwrap();
    assert_eq!(listing, "1:1-1:2 Ident \"a\"\n1:2-2:1 StmtEnd \"\\n\"\n");
}

#[test]
fn check_counts_tokens_idents_and_comments() {
    let summary = check_source(BOARD, ScannerConfig::default()).unwrap();
    assert_eq!(
        summary,
        CheckSummary {
            tokens: 7,
            idents: 4,
            comments: 2,
        }
    );
}

#[test]
fn check_counts_idents_among_delimiters_and_ints() {
    let summary = check_source("R1 (4700, R2) 10", ScannerConfig::default()).unwrap();
    assert_eq!(
        summary,
        CheckSummary {
            tokens: 7,
            idents: 2,
            comments: 0,
        }
    );
}

#[test]
fn check_reports_unknown_operator_with_snippet() {
    let err = check_source("module X (&&)", ScannerConfig::default()).unwrap_err();
    let rendered = diagnostic::render("board.bdl", "module X (&&)", &err);
    assert_eq!(
        rendered,
        "error: board.bdl:1:11: unknown operator `&&`\n\
         module X (&&)\n          ^"
    );
}

#[test]
fn check_reports_unterminated_comment_at_its_start() {
    let source = "module X\n  /* never closed\n";
    let err = check_source(source, ScannerConfig::default()).unwrap_err();
    assert_eq!(
        diagnostic::render("x.bdl", source, &err),
        "error: x.bdl:2:3: block comment is not closed\n  /* never closed\n  ^"
    );
}

#[test]
fn check_reports_int_overflow() {
    let err = check_source("R1 99999999999999999999", ScannerConfig::default()).unwrap_err();
    assert_eq!(err.position().column, 3);
}

#[test]
fn parser_and_lexer_agree_on_tokens() {
    let tokens = lex(BOARD, ScannerConfig::default()).unwrap();
    let mut parser = Parser::new(BOARD);
    let mut kinds = Vec::new();
    while let Some(token) = parser.advance().unwrap() {
        kinds.push(token.kind);
    }
    let expected: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, expected);
}

#[test]
fn parsed_values_feed_the_hierarchy_model() {
    // Hand-built until declarations are wired to the model.
    let mut parser = Parser::new("R1 4700");
    parser.advance().unwrap();
    let name = parser.expect_ident().unwrap();
    parser.advance().unwrap();
    let value = ResistorExpr::from(&parser.expect_int().unwrap());
    assert_eq!(value.value, 4700);

    let mut resistor = Module::new();
    resistor.add_port(Pin::new(PinKind::Passive, format!("{}.1", name.name())));
    resistor.add_port(Pin::new(PinKind::Passive, format!("{}.2", name.name())));

    let mut board = Module::new();
    let vcc = board.add_port(Pin::new(PinKind::Power, "VCC"));
    let r1 = board.add_child(resistor);
    let net = board
        .connect(vec![PinRef::port(vcc), PinRef::child(r1, 0)])
        .unwrap();

    assert_eq!(net, 0);
    assert_eq!(
        board.resolve(PinRef::child(r1, 0)).map(|p| p.name.as_str()),
        Some("R1.1")
    );
}
