//! Scan the built-in sample programs and print their token tables.

use boolscan::{SAMPLE_PROGRAMS, Scanner, format_report};

fn main() {
    let mut scanner = Scanner::new();
    for (name, program) in SAMPLE_PROGRAMS {
        scanner.scan(program);
        println!("### {name}");
        println!("{program}");
        print!("{}", format_report(scanner.tokens(), scanner.errors()));
        println!();
    }
}
