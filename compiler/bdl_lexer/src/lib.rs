//! Scanner for BDL source text.
//!
//! Two layers:
//! - [`BufferScanner`]: character cursor with line/column tracking
//! - [`Scanner`]: whitespace and comment skipping plus token classification
//!
//! The whole source is held in memory before scanning starts; there is no
//! incremental input.

mod cursor;
mod lex_error;
mod scanner;

pub use cursor::BufferScanner;
pub use lex_error::{LexError, LexErrorKind};
pub use scanner::{is_mark, Scanner, ScannerConfig};

use bdl_ir::Token;

/// Scan `source` to completion.
///
/// Returns every token, or the first error other than the end of input.
pub fn lex(source: &str, config: ScannerConfig) -> Result<Vec<Token>, LexError> {
    Scanner::with_config(source, config).collect()
}
