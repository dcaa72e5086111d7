use std::fmt;
use std::path::PathBuf;

use crate::token::Span;

/// Classifies a scan error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// `/*` with no matching `*/` before end of input.
    UnclosedComment,
    /// Word longer than the identifier limit.
    IdentifierTooLong,
    /// Word that is not ASCII letters only.
    InvalidIdentifier(String),
    /// `:` not followed by `=`.
    InvalidColon,
    /// Character that cannot start any token.
    UnexpectedCharacter(char),
}

impl ScanErrorKind {
    /// Render the message body, which repeats the position it was
    /// detected at.
    #[must_use]
    pub fn message(&self, span: &Span) -> String {
        Message { kind: self, span }.to_string()
    }
}

struct Message<'a> {
    kind: &'a ScanErrorKind,
    span: &'a Span,
}

impl fmt::Display for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Span { line, column } = *self.span;
        match self.kind {
            ScanErrorKind::UnclosedComment => {
                write!(
                    f,
                    "Unclosed comment starting at line {line}, column {column}"
                )
            }
            ScanErrorKind::IdentifierTooLong => {
                write!(f, "Identifier too long at line {line}, column {column}")
            }
            ScanErrorKind::InvalidIdentifier(word) => {
                write!(
                    f,
                    "Invalid identifier '{word}' at line {line}, column {column}"
                )
            }
            ScanErrorKind::InvalidColon => {
                write!(f, "Invalid token ':' at line {line}, column {column}")
            }
            ScanErrorKind::UnexpectedCharacter(ch) => {
                write!(
                    f,
                    "Unexpected character '{ch}' at line {line}, column {column}"
                )
            }
        }
    }
}

/// Error recorded during scanning. Never returned from a scan; collected
/// alongside the tokens instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Error at line {}, column {}: {}",
    span.line,
    span.column,
    kind.message(span)
)]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub span: Span,
}

/// Errors from loading program text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The program file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
