//! Tyex CLI

use std::io;

use tyexc::commands::{explain_error, run_demo};
use tyexc::{init_tracing, LogConfig};

fn main() {
    init_tracing(&LogConfig::from_env());

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        print_usage();
        return;
    };

    match command.as_str() {
        "demo" => {
            let stdout = io::stdout();
            if let Err(e) = run_demo(&mut stdout.lock()) {
                eprintln!("error: failed to write output: {e}");
                std::process::exit(1);
            }
        }
        "explain" => {
            let Some(code) = args.get(2) else {
                eprintln!("Usage: tyex explain <CODE>");
                std::process::exit(1);
            };
            match explain_error(code) {
                Ok(doc) => println!("{doc}"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => println!("tyex {}", env!("CARGO_PKG_VERSION")),
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            eprintln!("Run 'tyex help' for usage information.");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("tyex - typed expression trees");
    println!();
    println!("Usage: tyex <command> [args]");
    println!();
    println!("Commands:");
    println!("  demo            Build, type-check and evaluate sample expressions");
    println!("  explain <CODE>  Show documentation for an error code (e.g. E2001)");
    println!("  help            Show this message");
    println!("  version         Show version information");
    println!();
    println!("Environment:");
    println!("  RUST_LOG        Log filter, e.g. RUST_LOG=tyex_expr=trace");
    println!("  TYEX_LOG_TREE   Show logs as an indented span tree");
}
