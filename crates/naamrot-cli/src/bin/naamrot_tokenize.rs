// naamrot-tokenize: Tokenize text from stdin.
//
// Reads text from stdin and prints tokens with their types; `--convert`
// also shows each word token's converted form. Debug aid for the token
// scanner.
//
// Usage:
//   naamrot-tokenize [OPTIONS]
//
// Options:
//   --convert          Also show the converted form of word tokens
//   -h, --help         Print help

use std::io::{self, Read, Write};

use naamrot_core::token::TokenType;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (rules_path, args) = naamrot_cli::parse_rules_path(&args);

    if naamrot_cli::wants_help(&args) {
        println!("naamrot-tokenize: Tokenize English text.");
        println!();
        println!("Usage: naamrot-tokenize [OPTIONS]");
        println!();
        println!("Reads text from stdin, prints tokens with types:");
        println!("  WORD:        <text>");
        println!("  WHITESPACE:  <text>");
        println!("  DIGIT:       <text>");
        println!("  PUNCTUATION: <text>");
        println!("  OTHER:       <text>");
        println!();
        println!("Options:");
        println!("  -r, --rules FILE   JSON rule file overriding the built-in tables");
        println!("  --convert          Also show the converted form of word tokens");
        println!("  -h, --help         Print this help");
        return;
    }

    let show_converted = args.iter().any(|a| a == "--convert");

    let handle =
        naamrot_cli::load_handle(rules_path.as_deref()).unwrap_or_else(|e| naamrot_cli::fatal(&e));

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| naamrot_cli::fatal(&format!("failed to read stdin: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for token in handle.tokens(&input) {
        let type_str = match token.token_type {
            TokenType::Word => "WORD",
            TokenType::Whitespace => "WHITESPACE",
            TokenType::Digit => "DIGIT",
            TokenType::Punctuation => "PUNCTUATION",
            TokenType::Other => "OTHER",
            TokenType::None => "NONE",
        };
        let display_text = token
            .text
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t");
        if show_converted && token.token_type == TokenType::Word {
            let _ = writeln!(
                out,
                "{type_str:12} [{:>4}..{:>4}]: {display_text} → {}",
                token.pos,
                token.pos + token.token_len,
                handle.convert(&token.text)
            );
        } else {
            let _ = writeln!(
                out,
                "{type_str:12} [{:>4}..{:>4}]: {display_text}",
                token.pos,
                token.pos + token.token_len
            );
        }
    }
}
