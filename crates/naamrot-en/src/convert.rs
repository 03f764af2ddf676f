// Whole-text conversion: the token orchestrator.
//
// Scans the input for word tokens, drives each hyphen/apostrophe-joined
// part through the per-part pipeline, reinserts every other span
// verbatim, and upper-cases the whole output once at the end. Uppercasing
// is ASCII-only, so pass-through spans stay byte-identical.

use std::sync::LazyLock;

use naamrot_core::character::{is_word_separator, simple_upper};
use naamrot_core::token::TokenType;

use crate::pipeline::transform_part;
use crate::ruleset::RuleSet;
use crate::tokenizer;

/// The process-wide default tables, built once on first use.
static DEFAULT_RULES: LazyLock<RuleSet> = LazyLock::new(RuleSet::default);

/// Convert text to Naamrot using the built-in rule tables.
///
/// Total and non-throwing: any string, including empty, separator-only
/// or letter-free input, produces a result.
pub fn convert(text: &str) -> String {
    convert_with(text, &DEFAULT_RULES)
}

/// Convert text to Naamrot using the given rule tables.
pub fn convert_with(text: &str, rules: &RuleSet) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + text.len() / 4);

    let mut pos = 0;
    loop {
        let (token_type, len) = tokenizer::next_token(&chars, pos);
        if token_type == TokenType::None {
            break;
        }
        let span = &chars[pos..pos + len];
        if token_type == TokenType::Word {
            convert_token(span, rules, &mut out);
        } else {
            out.extend(span.iter());
        }
        pos += len;
    }

    out.chars().map(simple_upper).collect()
}

/// Convert one word token: split on separators (keeping them), transform
/// each letter part, rejoin in original order.
fn convert_token(token: &[char], rules: &RuleSet, out: &mut String) {
    let mut start = 0;
    for (i, &c) in token.iter().enumerate() {
        if is_word_separator(c) {
            let part: String = token[start..i].iter().collect();
            out.push_str(&transform_part(&part, rules));
            out.push(c);
            start = i + 1;
        }
    }
    let part: String = token[start..].iter().collect();
    out.push_str(&transform_part(&part, rules));
}
