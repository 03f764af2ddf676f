// naamrot-convert: Convert English text to Naamrot.
//
// Converts the text given as arguments, or reads lines from stdin and
// converts each one.
//
// Usage:
//   naamrot-convert [-r RULES_FILE] [TEXT...]
//
// Options:
//   -r, --rules FILE   JSON rule file overriding the built-in tables
//   -h, --help         Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (rules_path, args) = naamrot_cli::parse_rules_path(&args);

    if naamrot_cli::wants_help(&args) {
        println!("naamrot-convert: Convert English text to Naamrot.");
        println!();
        println!("Usage: naamrot-convert [-r RULES_FILE] [TEXT...]");
        println!();
        println!("With TEXT arguments, converts them as one line.");
        println!("Without arguments, reads lines from stdin and converts each.");
        println!();
        println!("Options:");
        println!("  -r, --rules FILE   JSON rule file overriding the built-in tables");
        println!("  -h, --help         Print this help");
        return;
    }

    let handle =
        naamrot_cli::load_handle(rules_path.as_deref()).unwrap_or_else(|e| naamrot_cli::fatal(&e));

    if !args.is_empty() {
        println!("{}", handle.convert(&args.join(" ")));
        return;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let _ = writeln!(out, "{}", handle.convert(&line));
    }
}
