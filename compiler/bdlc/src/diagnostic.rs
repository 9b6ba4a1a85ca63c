//! Error rendering for the command line.

use bdl_lexer::BufferScanner;
use bdl_parse::ParseError;

/// `error: <file>:<line>:<col>: <message>` followed by the offending
/// source line and a caret under the column.
pub fn render(file: &str, source: &str, err: &ParseError) -> String {
    let snippet = BufferScanner::new(source).snippet(err.position());
    format!("error: {file}:{err}\n{snippet}")
}
