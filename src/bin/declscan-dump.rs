//! Reads a header file and prints the scanned schema tree.

use std::env;
use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: declscan-dump <header-file>");
            return ExitCode::FAILURE;
        }
    };

    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("declscan-dump: {}: {}", path, err);
            return ExitCode::FAILURE;
        }
    };

    let (tree, diagnostics) = declscan::parse_with_diagnostics(&text);
    for diagnostic in &diagnostics {
        eprintln!("declscan-dump: {}: {}", path, diagnostic);
    }
    print!("{}", declscan::render(&tree));

    // The scan is best-effort by contract; diagnostics do not fail the run.
    ExitCode::SUCCESS
}
