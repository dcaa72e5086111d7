#![allow(dead_code)]

use boolscan::{Scan, TokenKind, scan};

pub fn kinds(input: &str) -> Vec<TokenKind> {
    scan(input).tokens.iter().map(|t| t.kind).collect()
}

pub fn messages(input: &str) -> Vec<String> {
    scan(input).errors.iter().map(ToString::to_string).collect()
}

/// Scan input that must be error free.
pub fn scan_clean(input: &str) -> Scan {
    let result = scan(input);
    assert!(
        result.errors.is_empty(),
        "unexpected errors for {input:?}:\n{:#?}",
        result.errors
    );
    result
}

pub fn count(input: &str, kind: TokenKind) -> usize {
    scan(input).tokens.iter().filter(|t| t.kind == kind).count()
}
