//! Error-tolerant scanner for a small boolean assignment language.
//!
//! Programs are `|`-separated assignments such as
//! `x := TRUE | y := (x OR FALSE) AND NOT x`. The scanner turns source
//! text into classified tokens and never stops at malformed input:
//! problems are collected as [`ScanError`]s and scanning continues
//! after the offending text.
//!
//! # Quick start
//!
//! ```
//! use boolscan::{TokenKind, scan};
//!
//! let result = scan("x := TRUE | y := x");
//! assert!(result.errors.is_empty());
//! assert_eq!(result.tokens[0].kind, TokenKind::Identifier);
//! assert_eq!(result.tokens[0].value, 1);
//! assert_eq!(result.tokens[6].lexeme, "x");
//! assert_eq!(result.tokens[6].value, 1);
//! ```
//!
//! ## Errors are data
//!
//! ```
//! use boolscan::Scanner;
//!
//! let mut scanner = Scanner::new();
//! scanner.scan("x : TRUE");
//! assert_eq!(
//!     scanner.error_messages()[0],
//!     "Error at line 1, column 3: Invalid token ':' at line 1, column 3"
//! );
//! assert_eq!(scanner.tokens().len(), 2);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod error;
pub mod report;
pub mod scanner;
pub mod source;
pub mod token;

pub use error::{Error, ScanError, ScanErrorKind};
pub use report::{format_report, format_token};
pub use scanner::{Scan, Scanner, scan};
pub use source::{SAMPLE_PROGRAMS, join_lines, read_program};
pub use token::{Span, Token, TokenKind};

/// Read a program file and scan it in one step.
pub fn scan_file(path: impl AsRef<std::path::Path>) -> Result<Scan, Error> {
    let text = read_program(path)?;
    Ok(scan(&text))
}
