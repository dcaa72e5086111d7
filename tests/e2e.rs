//! End-to-end tests: program files and sample programs through
//! loading, scanning and reporting.

use std::fs;
use std::path::PathBuf;

use boolscan::{
    Error, SAMPLE_PROGRAMS, Span, TokenKind, format_report, read_program, scan, scan_file,
};

fn write_program(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("boolscan-e2e-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write program");
    path
}

fn sample(name: &str) -> &'static str {
    SAMPLE_PROGRAMS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, p)| *p)
        .expect("sample exists")
}

// -----------------------------------------------------------
// File loading.
// -----------------------------------------------------------

#[test]
fn file_lines_are_joined() {
    let path = write_program("joined.txt", "a := TRUE |\n\nb := a\n");
    let text = read_program(&path).expect("read");
    assert_eq!(text, "a := TRUE | b := a");

    let result = scan(&text);
    assert!(result.errors.is_empty());
    // everything lands on one line after joining
    assert!(result.tokens.iter().all(|t| t.span.line == 1));
    assert_eq!(result.tokens[4].span, Span { line: 1, column: 13 });
}

#[test]
fn scan_file_reports_errors() {
    let path = write_program("broken.txt", "x : TRUE\n| y := @\n");
    let result = scan_file(&path).expect("scan file");
    assert_eq!(result.errors.len(), 2);
    assert_eq!(result.errors[1].span, Span { line: 1, column: 17 });
}

#[test]
fn scan_file_missing() {
    let err = scan_file("/nonexistent/boolscan/missing.txt").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

// -----------------------------------------------------------
// Sample programs.
// -----------------------------------------------------------

#[test]
fn sample_correct() {
    let result = scan(sample("correct"));
    assert!(result.errors.is_empty());
    assert_eq!(result.tokens.len(), 13);
    let z = result.tokens.iter().find(|t| t.lexeme == "z").unwrap();
    assert_eq!(z.value, 3);
}

#[test]
fn sample_errors() {
    let result = scan(sample("errors"));
    let messages: Vec<_> = result.errors.iter().map(ToString::to_string).collect();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].contains("Identifier too long at line 1, column 1"));
    assert!(messages[1].contains("Invalid identifier '123'"));
    let truee = result.tokens.iter().find(|t| t.lexeme == "TRUEE").unwrap();
    assert_eq!(truee.kind, TokenKind::Identifier);
}

#[test]
fn sample_comments() {
    let result = scan(sample("comments"));
    assert!(result.errors.is_empty());
    assert_eq!(result.tokens.len(), 7);
}

#[test]
fn sample_complex() {
    let result = scan(sample("complex"));
    assert!(result.errors.is_empty());
    let oror = result.tokens.iter().find(|t| t.lexeme == "OROR").unwrap();
    assert_eq!(oror.kind, TokenKind::Identifier);
}

#[test]
fn sample_unclosed_comment() {
    let result = scan(sample("unclosed comment"));
    assert_eq!(result.tokens.len(), 3);
    assert_eq!(
        result.errors[0].to_string(),
        "Error at line 1, column 11: Unclosed comment starting at line 1, column 11"
    );
}

#[test]
fn sample_multiline() {
    let result = scan(sample("multiline"));
    assert!(result.errors.is_empty());
    assert_eq!(result.tokens.last().unwrap().kind, TokenKind::Pipe);
    let second_line = result.tokens.iter().find(|t| t.lexeme == "result").unwrap();
    assert_eq!(second_line.span.line, 2);
}

#[test]
fn every_sample_reports() {
    for (name, program) in SAMPLE_PROGRAMS {
        let result = scan(program);
        let report = format_report(&result.tokens, &result.errors);
        assert!(report.contains("=== Tokens Table ==="), "{name}");
        assert_eq!(report.contains("=== Errors ==="), !result.errors.is_empty(), "{name}");
    }
}
