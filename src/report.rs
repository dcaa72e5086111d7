//! Plain-text rendering of scan results.

use std::fmt::Write;

use crate::error::ScanError;
use crate::token::{BOOLEAN_VALUE, NO_VALUE, Token};

/// Format one token as a table row: kind, quoted lexeme, value.
///
/// The value column is blank for tokens without a value, repeats the
/// lexeme for booleans, and shows `name: value` for identifiers.
#[must_use]
pub fn format_token(token: &Token) -> String {
    let quoted = format!("'{}'", token.lexeme);
    let value = match token.value {
        NO_VALUE => " ".to_string(),
        BOOLEAN_VALUE => token.lexeme.clone(),
        n => format!("{}: {n}", token.lexeme),
    };
    format!("{:<12} {quoted:<10} {value}", token.kind)
}

/// Format the error list (if any) followed by the token table.
#[must_use]
pub fn format_report(tokens: &[Token], errors: &[ScanError]) -> String {
    let mut out = String::new();

    if !errors.is_empty() {
        out.push_str("\n=== Errors ===\n");
        for error in errors {
            let _ = writeln!(out, "{error}");
        }
    }

    out.push_str("=== Tokens Table ===\n");
    let _ = writeln!(out, "{:<12} {:<10} VALUE", "TYPE", "NAME");
    for token in tokens {
        out.push_str(&format_token(token));
        out.push('\n');
    }

    out
}
