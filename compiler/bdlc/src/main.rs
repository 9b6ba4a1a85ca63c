//! BDL front-end CLI.

use std::path::Path;
use std::process::ExitCode;

use bdl_lexer::ScannerConfig;
use bdlc::commands::{check_file, lex_file};

fn print_usage() {
    eprintln!("Usage: bdl <command> <file.bdl> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  lex      Print every token with its position");
    eprintln!("  check    Scan and parse the file, report the first error");
    eprintln!("  help     Show this message");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --newlines   Treat newlines as statement terminators");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=bdl_lexer=trace) for scanner logs.");
}

fn main() -> ExitCode {
    bdlc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_usage();
        return ExitCode::FAILURE;
    };

    let mut config = ScannerConfig::default();
    let mut file = None;
    for arg in args.iter().skip(2) {
        match arg.as_str() {
            "--newlines" => config.newline_terminates_statements = true,
            flag if flag.starts_with('-') => {
                eprintln!("error: unknown option `{flag}`");
                return ExitCode::FAILURE;
            }
            path if file.is_none() => file = Some(path),
            extra => {
                eprintln!("error: unexpected argument `{extra}`");
                return ExitCode::FAILURE;
            }
        }
    }

    match command.as_str() {
        "lex" | "check" => {
            let Some(file) = file else {
                eprintln!("error: missing file path");
                eprintln!("Usage: bdl {command} <file.bdl> [--newlines]");
                return ExitCode::FAILURE;
            };
            if command == "lex" {
                lex_file(Path::new(file), config)
            } else {
                check_file(Path::new(file), config)
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        other => {
            eprintln!("error: unknown command `{other}`");
            print_usage();
            ExitCode::FAILURE
        }
    }
}
