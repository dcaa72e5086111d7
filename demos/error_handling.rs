//! Demonstrate how scan errors are reported alongside tokens.

use boolscan::{ScanErrorKind, scan};

fn main() {
    let result = scan("x : TRUE | 1abc := y | total_count_of_all_items := FALSE /* open");

    println!("{} token(s), {} error(s)", result.tokens.len(), result.errors.len());
    for error in &result.errors {
        println!("{error}");
        println!("  Kind: {:?}", error.kind);
        println!(
            "  Location: line {}, column {}",
            error.span.line, error.span.column
        );
        if let ScanErrorKind::InvalidIdentifier(word) = &error.kind {
            println!("  Rejected word: {word}");
        }
    }
}
