// NaamrotHandle: top-level integration point for the converter.
//
// Owns an immutable rule set and exposes the conversion and tokenization
// entry points behind one facade. Construction is the only place rules
// are chosen; nothing mutates them afterwards, so a handle is safe to
// share across concurrent readers.

use naamrot_core::token::Token;

use crate::convert::convert_with;
use crate::pipeline::transform_part;
use crate::ruleset::RuleSet;
use crate::tokenizer;

/// Handle owning the rule tables for a conversion session.
pub struct NaamrotHandle {
    rules: RuleSet,
}

impl NaamrotHandle {
    /// Create a handle with the built-in rule tables.
    pub fn new() -> Self {
        Self {
            rules: RuleSet::default(),
        }
    }

    /// Create a handle with injected rule tables.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// The rule tables this handle converts with.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Convert text to Naamrot.
    pub fn convert(&self, text: &str) -> String {
        convert_with(text, &self.rules)
    }

    /// Transform a single word part, without the final casing pass.
    /// Mainly a debugging aid; `convert` is the real entry point.
    pub fn convert_part(&self, part: &str) -> String {
        transform_part(part, &self.rules)
    }

    /// Tokenize text without converting it.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        tokenizer::tokenize(text)
    }
}

impl Default for NaamrotHandle {
    fn default() -> Self {
        Self::new()
    }
}
