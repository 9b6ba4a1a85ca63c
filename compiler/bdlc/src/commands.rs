//! `lex` and `check` commands.

use std::fmt::Write as _;
use std::path::Path;
use std::process::ExitCode;

use bdl_ir::TokenKind;
use bdl_lexer::{Scanner, ScannerConfig};
use bdl_parse::{ParseError, Parser};
use tracing::debug;

use crate::diagnostic;

/// One line per token: `from-to KIND "literal"`.
pub fn lex_source(source: &str, config: ScannerConfig) -> Result<String, ParseError> {
    let mut out = String::new();
    for token in Scanner::with_config(source, config) {
        let token = token?;
        let _ = writeln!(out, "{} {:?} {:?}", token.range, token.kind, token.literal);
    }
    Ok(out)
}

/// Counts gathered by [`check_source`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CheckSummary {
    pub tokens: usize,
    pub idents: usize,
    pub comments: usize,
}

/// Drive the parser over the whole input, stopping at the first error.
pub fn check_source(source: &str, config: ScannerConfig) -> Result<CheckSummary, ParseError> {
    let mut parser = Parser::with_config(source, config);
    let mut summary = CheckSummary::default();
    while parser.advance()?.is_some() {
        summary.tokens += 1;
        match parser.current_kind() {
            Some(TokenKind::Ident) => {
                parser.expect_ident()?;
                summary.idents += 1;
            }
            Some(TokenKind::Int) => {
                parser.expect_int()?;
            }
            _ => {}
        }
    }
    summary.comments = parser.comments().len();
    debug!(?summary, "check finished");
    Ok(summary)
}

fn read(path: &Path) -> Result<String, ExitCode> {
    std::fs::read_to_string(path).map_err(|err| {
        eprintln!("error: cannot read {}: {err}", path.display());
        ExitCode::FAILURE
    })
}

/// `bdl lex <file>`
pub fn lex_file(path: &Path, config: ScannerConfig) -> ExitCode {
    let source = match read(path) {
        Ok(source) => source,
        Err(code) => return code,
    };
    match lex_source(&source, config) {
        Ok(listing) => {
            print!("{listing}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", diagnostic::render(&path.display().to_string(), &source, &err));
            ExitCode::FAILURE
        }
    }
}

/// `bdl check <file>`
pub fn check_file(path: &Path, config: ScannerConfig) -> ExitCode {
    let source = match read(path) {
        Ok(source) => source,
        Err(code) => return code,
    };
    match check_source(&source, config) {
        Ok(summary) => {
            println!(
                "{}: ok ({} tokens, {} identifiers, {} comments)",
                path.display(),
                summary.tokens,
                summary.idents,
                summary.comments
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", diagnostic::render(&path.display().to_string(), &source, &err));
            ExitCode::FAILURE
        }
    }
}
