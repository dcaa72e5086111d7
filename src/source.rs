//! Loading program text for the scanner.
//!
//! Program files are flattened before scanning: empty lines are dropped
//! and the remaining lines are joined with a single space. Line numbers
//! reported by the scanner therefore refer to the flattened text, not
//! to the file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Error;

/// Built-in example programs, in the order the CLI runs them.
pub const SAMPLE_PROGRAMS: [(&str, &str); 6] = [
    ("correct", "x := TRUE | y := FALSE | z := x OR y"),
    (
        "errors",
        "var_with_very_long_name := TRUE | x := 123 | y := TRUEE",
    ),
    (
        "comments",
        "/* This is a comment */ x := TRUE /* Another comment */ | y := FALSE",
    ),
    (
        "complex",
        "a := (TRUE AND FALSE) XOR (NOT TRUE) | b := a OROR FALSE",
    ),
    ("unclosed comment", "x := TRUE /* Unclosed comment"),
    (
        "multiline",
        "vara := TRUE | varb := FALSE |\n\
         result := (vara OR varb) AND\n\
         (NOT vara XOR varb) |\n",
    ),
];

/// Drop empty lines and join the rest with single spaces.
#[must_use]
pub fn join_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Read a program file and flatten it with [`join_lines`].
pub fn read_program(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read program");
    Ok(join_lines(&text))
}
