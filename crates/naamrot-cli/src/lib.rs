// naamrot-cli: shared utilities for CLI tools.

use std::process;

use naamrot_en::{NaamrotHandle, RuleSet};

/// Parse a `--rules=PATH` or `-r PATH` argument from command line args.
///
/// Returns `(rules_path, remaining_args)`.
pub fn parse_rules_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut rules_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--rules=") {
            rules_path = Some(val.to_string());
        } else if arg == "--rules" || arg == "-r" {
            if i + 1 < args.len() {
                rules_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (rules_path, remaining)
}

/// Create a handle, loading a rule file when a path was given and falling
/// back to the built-in tables otherwise.
pub fn load_handle(rules_path: Option<&str>) -> Result<NaamrotHandle, String> {
    match rules_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read {path}: {e}"))?;
            let rules = RuleSet::from_json(&json)
                .map_err(|e| format!("failed to parse {path}: {e}"))?;
            Ok(NaamrotHandle::with_rules(rules))
        }
        None => Ok(NaamrotHandle::new()),
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
