// Whole-word exception lookup.
//
// The exception table is an ordered list of rules matched against a whole
// word part before any other stage runs. The first matching rule wins and
// its output fully replaces the part, bypassing the rest of the pipeline.

use regex::{Captures, Regex};

/// Output function for computed exception rules: a pure function of the
/// pattern captures and the original part text.
pub type ComputedOutput = fn(&Captures<'_>, &str) -> String;

/// How an exception rule matches a word part.
#[derive(Debug, Clone)]
pub enum ExceptionMatcher {
    /// Case-insensitive equality against the whole part.
    Literal(String),
    /// Anchored, case-insensitive pattern tested against the whole part.
    /// Partial matches are impossible; the constructor wraps the pattern
    /// in `^(?:…)$`.
    Pattern(Regex),
}

/// What a matching exception rule produces.
#[derive(Debug, Clone)]
pub enum ExceptionOutput {
    /// A fixed replacement string.
    Fixed(String),
    /// A replacement computed from the captures and the original text.
    Computed(ComputedOutput),
}

/// One entry of the exception table.
#[derive(Debug, Clone)]
pub struct ExceptionRule {
    matcher: ExceptionMatcher,
    output: ExceptionOutput,
}

impl ExceptionRule {
    /// A literal rule: the whole part equals `word` (ignoring case).
    pub fn literal(word: &str, replacement: &str) -> Self {
        Self {
            matcher: ExceptionMatcher::Literal(word.to_string()),
            output: ExceptionOutput::Fixed(replacement.to_string()),
        }
    }

    /// A pattern rule. The pattern is compiled case-insensitive and
    /// anchored to the whole part. Returns `None` if the pattern does not
    /// compile; a malformed entry is skipped rather than aborting table
    /// construction.
    pub fn pattern(pattern: &str, output: ExceptionOutput) -> Option<Self> {
        let regex = Regex::new(&format!("(?i)^(?:{pattern})$")).ok()?;
        Some(Self {
            matcher: ExceptionMatcher::Pattern(regex),
            output,
        })
    }

    /// Apply this rule to a word part. Returns the computed output on a
    /// match, `None` otherwise.
    pub fn apply(&self, part: &str) -> Option<String> {
        match (&self.matcher, &self.output) {
            (ExceptionMatcher::Literal(word), ExceptionOutput::Fixed(replacement)) => {
                part.eq_ignore_ascii_case(word).then(|| replacement.clone())
            }
            (ExceptionMatcher::Literal(word), ExceptionOutput::Computed(f)) => {
                // A literal matcher has no captures to hand to the output
                // function; reuse the part itself as the sole capture via
                // a trivial full match.
                if !part.eq_ignore_ascii_case(word) {
                    return None;
                }
                let regex = Regex::new("^(.*)$").ok()?;
                regex.captures(part).map(|caps| f(&caps, part))
            }
            (ExceptionMatcher::Pattern(regex), ExceptionOutput::Fixed(replacement)) => {
                regex.is_match(part).then(|| replacement.clone())
            }
            (ExceptionMatcher::Pattern(regex), ExceptionOutput::Computed(f)) => {
                regex.captures(part).map(|caps| f(&caps, part))
            }
        }
    }
}

/// Look a word part up in the exception table. First match in table order
/// wins.
pub fn lookup(part: &str, table: &[ExceptionRule]) -> Option<String> {
    table.iter().find_map(|rule| rule.apply(part))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper_output(_caps: &Captures<'_>, part: &str) -> String {
        part.to_ascii_uppercase()
    }

    fn swap_captures(caps: &Captures<'_>, _part: &str) -> String {
        format!("{}{}", &caps[2], &caps[1])
    }

    #[test]
    fn literal_matches_ignore_case() {
        let rule = ExceptionRule::literal("the", "tha");
        assert_eq!(rule.apply("the"), Some("tha".to_string()));
        assert_eq!(rule.apply("THE"), Some("tha".to_string()));
        assert_eq!(rule.apply("them"), None);
    }

    #[test]
    fn pattern_is_anchored() {
        let rule = ExceptionRule::pattern("do", ExceptionOutput::Fixed("da".into()))
            .expect("pattern compiles");
        assert_eq!(rule.apply("do"), Some("da".to_string()));
        // No partial matches: the pattern must cover the whole part.
        assert_eq!(rule.apply("dog"), None);
        assert_eq!(rule.apply("ado"), None);
    }

    #[test]
    fn pattern_is_case_insensitive() {
        let rule = ExceptionRule::pattern("sto+p", ExceptionOutput::Fixed("stap".into()))
            .expect("pattern compiles");
        assert_eq!(rule.apply("STOOP"), Some("stap".to_string()));
    }

    #[test]
    fn computed_output_sees_captures_and_original() {
        let rule = ExceptionRule::pattern("(ab)(cd)", ExceptionOutput::Computed(swap_captures))
            .expect("pattern compiles");
        assert_eq!(rule.apply("abcd"), Some("cdab".to_string()));

        let rule = ExceptionRule::pattern(".*o.*", ExceptionOutput::Computed(upper_output))
            .expect("pattern compiles");
        assert_eq!(rule.apply("stop"), Some("STOP".to_string()));
    }

    #[test]
    fn malformed_pattern_is_skipped() {
        assert!(ExceptionRule::pattern("(unclosed", ExceptionOutput::Fixed("x".into())).is_none());
    }

    #[test]
    fn lookup_first_match_wins() {
        let table = vec![
            ExceptionRule::literal("stop", "first"),
            ExceptionRule::literal("stop", "second"),
        ];
        assert_eq!(lookup("stop", &table), Some("first".to_string()));
        assert_eq!(lookup("go", &table), None);
    }

    #[test]
    fn lookup_empty_table() {
        assert_eq!(lookup("anything", &[]), None);
    }
}
