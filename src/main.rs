//! CLI tool to scan boolean assignment programs and print their tokens.

use std::process::ExitCode;

use anyhow::Context;
use boolscan::{SAMPLE_PROGRAMS, format_report, read_program, scan};
use tracing_subscriber::EnvFilter;

fn usage() -> ExitCode {
    eprintln!("Usage: boolscan <command> [files...]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  scan      Print the source, errors and token table");
    eprintln!("  check     Report only whether program(s) scan cleanly");
    eprintln!("  samples   Scan the built-in sample programs");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  boolscan scan program.txt");
    eprintln!("  boolscan check a.txt b.txt");
    eprintln!("  boolscan samples");
    eprintln!();
    eprintln!("Log verbosity is read from RUST_LOG (default: warn).");
    ExitCode::from(2)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_scan(text: &str) -> bool {
    let result = scan(text);
    println!("\n=== Source Program ===");
    println!("{text}");
    println!("\nAnalysis results:");
    print!("{}", format_report(&result.tokens, &result.errors));
    result.has_errors()
}

fn scan_path(path: &str) -> anyhow::Result<bool> {
    let text = read_program(path).with_context(|| format!("cannot scan {path}"))?;
    Ok(print_scan(&text))
}

fn check_path(path: &str) -> anyhow::Result<bool> {
    let text = read_program(path).with_context(|| format!("cannot check {path}"))?;
    let result = scan(&text);
    if result.has_errors() {
        for error in &result.errors {
            eprintln!("{path}: {error}");
        }
    } else {
        eprintln!("{path}: ok ({} token(s))", result.tokens.len());
    }
    Ok(result.has_errors())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        return usage();
    }

    init_logging();

    let command = args[1].as_str();
    let files = &args[2..];

    let mut had_error = false;

    match command {
        "samples" => {
            for (name, program) in SAMPLE_PROGRAMS {
                println!("\n### {name}");
                had_error |= print_scan(program);
            }
        }
        "scan" | "check" => {
            if files.is_empty() {
                eprintln!("Error: no files specified");
                return ExitCode::from(2);
            }
            for path in files {
                let outcome = if command == "scan" {
                    scan_path(path)
                } else {
                    check_path(path)
                };
                match outcome {
                    Ok(failed) => had_error |= failed,
                    Err(e) => {
                        eprintln!("{e:#}");
                        had_error = true;
                    }
                }
            }
        }
        _ => {
            eprintln!("Unknown command: {command}");
            return ExitCode::from(2);
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
