// Rule tables: the exception table and the protected-suffix list.
//
// A `RuleSet` is an immutable configuration value injected into the
// engine at construction. The built-in defaults live behind a `LazyLock`
// and are built once per process; alternate tables can be constructed in
// code or, with the `config` feature, loaded from a JSON rule file.

use regex::Captures;

use crate::rules::exception::{ExceptionOutput, ExceptionRule};

/// The exception table and protected-suffix list driving a conversion.
///
/// Exceptions keep their table order (first match wins); the suffix list
/// is normalized to uppercase and longest-first at construction so the
/// vowel swap's first match is always the longest.
#[derive(Debug, Clone)]
pub struct RuleSet {
    exceptions: Vec<ExceptionRule>,
    protected_suffixes: Vec<String>,
}

impl RuleSet {
    /// Build a rule set from an ordered exception table and a
    /// protected-suffix list.
    pub fn new(exceptions: Vec<ExceptionRule>, protected_suffixes: Vec<String>) -> Self {
        let mut protected_suffixes: Vec<String> = protected_suffixes
            .into_iter()
            .map(|s| s.to_ascii_uppercase())
            .collect();
        protected_suffixes.sort_by(|a, b| b.len().cmp(&a.len()));
        Self {
            exceptions,
            protected_suffixes,
        }
    }

    /// The ordered exception table.
    pub fn exceptions(&self) -> &[ExceptionRule] {
        &self.exceptions
    }

    /// The protected-suffix list, uppercase and longest-first.
    pub fn protected_suffixes(&self) -> &[String] {
        &self.protected_suffixes
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(default_exceptions(), default_protected_suffixes())
    }
}

// ---------------------------------------------------------------------------
// Built-in tables
// ---------------------------------------------------------------------------

/// Endings beyond which vowel swapping never applies.
const DEFAULT_PROTECTED_SUFFIXES: &[&str] =
    &["EASE", "SHAN", "AKE", "AEH", "TEH", "LEH", "AH", "EH"];

fn default_protected_suffixes() -> Vec<String> {
    DEFAULT_PROTECTED_SUFFIXES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// The built-in exception table, in priority order.
///
/// `ExceptionRule::pattern` returns `None` for a pattern that does not
/// compile; `extend` drops such an entry, matching the contract that a
/// malformed rule is skipped rather than fatal.
fn default_exceptions() -> Vec<ExceptionRule> {
    let mut table = Vec::new();

    table.push(ExceptionRule::literal("the", "tha"));
    table.push(ExceptionRule::literal("one", "wan"));

    // -formation words keep their opening vowel; the pipeline's vowel
    // swap would flatten it.
    table.extend(ExceptionRule::pattern(
        "([a-z]*)formation",
        ExceptionOutput::Computed(formation_output),
    ));

    // Single-syllable short-o words: the lone O between consonant runs
    // flattens to A ("don" → "dan", "stop" → "stap").
    table.extend(ExceptionRule::pattern(
        "([b-df-hj-np-tv-z]+)o([b-df-hj-np-tv-z]+)",
        ExceptionOutput::Computed(flat_o_output),
    ));

    table
}

fn formation_output(caps: &Captures<'_>, _part: &str) -> String {
    format!("{}formashan", &caps[1])
}

fn flat_o_output(caps: &Captures<'_>, _part: &str) -> String {
    format!("{}a{}", &caps[1], &caps[2])
}

// ---------------------------------------------------------------------------
// Rule file loading (feature `config`)
//
// The editable document form of the tables. Only literal and
// fixed-output entries are expressible in a file; computed outputs are a
// code-level construct.
// ---------------------------------------------------------------------------

#[cfg(feature = "config")]
mod file {
    use serde::Deserialize;

    use super::RuleSet;
    use crate::rules::exception::{ExceptionOutput, ExceptionRule};

    /// Error loading a rule file.
    #[derive(Debug, thiserror::Error)]
    pub enum RuleSetError {
        /// The document is not valid JSON for the rule-file schema.
        #[error("invalid rule file: {0}")]
        Parse(#[from] serde_json::Error),
    }

    /// Document form of the rule tables.
    #[derive(Debug, Deserialize)]
    struct RuleFile {
        #[serde(default)]
        exceptions: Vec<ExceptionEntry>,
        #[serde(default)]
        protected_suffixes: Vec<String>,
    }

    /// One exception entry: `word` (literal) or `pattern`, plus `output`.
    #[derive(Debug, Deserialize)]
    struct ExceptionEntry {
        #[serde(default)]
        word: Option<String>,
        #[serde(default)]
        pattern: Option<String>,
        #[serde(default)]
        output: Option<String>,
    }

    impl RuleSet {
        /// Load a rule set from a JSON rule file.
        ///
        /// Entries without a matcher or an output, and entries whose
        /// pattern does not compile, are skipped; they never match and do
        /// not abort the rest of the table.
        pub fn from_json(json: &str) -> Result<RuleSet, RuleSetError> {
            let file: RuleFile = serde_json::from_str(json)?;

            let mut exceptions = Vec::new();
            for entry in file.exceptions {
                let Some(output) = entry.output else { continue };
                if let Some(word) = entry.word {
                    exceptions.push(ExceptionRule::literal(&word, &output));
                } else if let Some(pattern) = entry.pattern {
                    exceptions
                        .extend(ExceptionRule::pattern(&pattern, ExceptionOutput::Fixed(output)));
                }
            }

            Ok(RuleSet::new(exceptions, file.protected_suffixes))
        }
    }
}

#[cfg(feature = "config")]
pub use file::RuleSetError;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::exception::lookup;

    #[test]
    fn default_suffixes_are_longest_first() {
        let rules = RuleSet::default();
        let lens: Vec<usize> = rules.protected_suffixes().iter().map(|s| s.len()).collect();
        let mut sorted = lens.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lens, sorted);
    }

    #[test]
    fn new_normalizes_suffix_list() {
        let rules = RuleSet::new(Vec::new(), vec!["eh".into(), "ease".into(), "ake".into()]);
        let got: Vec<&str> = rules.protected_suffixes().iter().map(|s| s.as_str()).collect();
        assert_eq!(got, vec!["EASE", "AKE", "EH"]);
    }

    #[test]
    fn default_exceptions_cover_the_known_words() {
        let rules = RuleSet::default();
        let table = rules.exceptions();
        assert_eq!(lookup("the", table), Some("tha".to_string()));
        assert_eq!(lookup("THE", table), Some("tha".to_string()));
        assert_eq!(lookup("one", table), Some("wan".to_string()));
        assert_eq!(lookup("information", table), Some("informashan".to_string()));
        assert_eq!(lookup("don", table), Some("dan".to_string()));
        assert_eq!(lookup("stop", table), Some("stap".to_string()));
    }

    #[test]
    fn short_o_pattern_needs_a_lone_o() {
        let rules = RuleSet::default();
        let table = rules.exceptions();
        // Words with any other vowel fall through to the pipeline.
        assert_eq!(lookup("stone", table), None);
        assert_eq!(lookup("onion", table), None);
        assert_eq!(lookup("clean", table), None);
    }

    #[test]
    fn computed_outputs_preserve_captured_text() {
        let rules = RuleSet::default();
        let table = rules.exceptions();
        assert_eq!(lookup("word", table), Some("ward".to_string()));
        assert_eq!(lookup("WORD", table), Some("WaRD".to_string()));
    }

    #[cfg(feature = "config")]
    mod config {
        use super::*;

        #[test]
        fn rule_file_round_trip() {
            let json = r#"{
                "exceptions": [
                    { "word": "cat", "output": "kot" },
                    { "pattern": "do+m", "output": "doom" }
                ],
                "protected_suffixes": ["ing", "ease"]
            }"#;
            let rules = RuleSet::from_json(json).expect("valid rule file");
            assert_eq!(lookup("cat", rules.exceptions()), Some("kot".to_string()));
            assert_eq!(lookup("dooom", rules.exceptions()), Some("doom".to_string()));
            let got: Vec<&str> = rules.protected_suffixes().iter().map(|s| s.as_str()).collect();
            assert_eq!(got, vec!["EASE", "ING"]);
        }

        #[test]
        fn malformed_entries_are_skipped() {
            let json = r#"{
                "exceptions": [
                    { "word": "cat" },
                    { "output": "orphan" },
                    { "pattern": "(unclosed", "output": "x" },
                    { "word": "dog", "output": "dag" }
                ]
            }"#;
            let rules = RuleSet::from_json(json).expect("valid rule file");
            assert_eq!(rules.exceptions().len(), 1);
            assert_eq!(lookup("dog", rules.exceptions()), Some("dag".to_string()));
        }

        #[test]
        fn invalid_json_is_an_error() {
            assert!(RuleSet::from_json("not json").is_err());
        }

        #[test]
        fn entry_order_is_preserved() {
            let json = r#"{
                "exceptions": [
                    { "pattern": "st.*", "output": "first" },
                    { "word": "stop", "output": "second" }
                ]
            }"#;
            let rules = RuleSet::from_json(json).expect("valid rule file");
            assert_eq!(lookup("stop", rules.exceptions()), Some("first".to_string()));
        }
    }
}
