// Per-word-part transformation pipeline.
//
// Drives one hyphen/apostrophe-free word part through the rule stages in
// their fixed priority order. An exception hit replaces the part outright
// and skips every later stage.

use naamrot_core::segment::SegmentString;

use crate::rules::{PartContext, cluster, exception, prefix, suffix, vowel};
use crate::ruleset::RuleSet;

/// Transform a single word part. The result is not yet upper-cased; the
/// orchestrator applies the final casing pass to the whole output.
pub fn transform_part(part: &str, rules: &RuleSet) -> String {
    if let Some(output) = exception::lookup(part, rules.exceptions()) {
        return output;
    }

    let mut ctx = PartContext::default();
    let word = SegmentString::from_word(part);
    let word = suffix::apply(word, &mut ctx);
    let word = prefix::apply(word);
    let word = cluster::apply(word);
    let word = vowel::apply(word, &ctx, rules.protected_suffixes());
    word.render()
}
