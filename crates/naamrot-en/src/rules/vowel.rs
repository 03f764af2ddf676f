// Vowel swap stage: the lowest-priority pass.
//
// Swaps eligible vowels to a lowercase "o", left to right. Only A, E and
// I ever swap, only in segments the user typed, and only when none of the
// three protections apply. All protections are computed once from the
// pre-swap state.

use naamrot_core::character::{is_vowel, simple_lower};
use naamrot_core::segment::SegmentString;

use super::PartContext;

/// Apply the vowel swap with suffix-boundary, tail and digraph
/// protections.
pub fn apply(
    mut word: SegmentString,
    ctx: &PartContext,
    protected_suffixes: &[String],
) -> SegmentString {
    let boundary = suffix_boundary(&word, protected_suffixes);
    let tail_protected = tail_protected_indices(&word, ctx);
    let digraph_protected = digraph_protected_indices(&word);

    for i in 0..boundary {
        let Some(seg) = word.get(i) else { break };
        if !seg.origin {
            continue;
        }
        if !matches!(simple_lower(seg.ch), 'a' | 'e' | 'i') {
            continue;
        }
        if tail_protected.contains(&i) || digraph_protected.contains(&i) {
            continue;
        }
        word.replace_range(i, i + 1, "o");
    }

    word
}

/// Index of the vowel-swap boundary: positions at or after it are exempt.
///
/// The table is normalized longest-first, so the first entry that matches
/// the current uppercase rendering is the longest match. With no match
/// the boundary is the sequence length and no position is exempt.
fn suffix_boundary(word: &SegmentString, protected_suffixes: &[String]) -> usize {
    let rendered = word.render_upper();
    for suffix in protected_suffixes {
        if rendered.ends_with(suffix.as_str()) {
            return word.len() - suffix.chars().count();
        }
    }
    word.len()
}

/// Indices protected by the tail rule: when the ending did not become
/// "AH", the last original vowel is protected, and with exactly four
/// original vowels the second-to-last is too.
fn tail_protected_indices(word: &SegmentString, ctx: &PartContext) -> Vec<usize> {
    if ctx.ending_changed_to_ah {
        return Vec::new();
    }

    let originals: Vec<usize> = word
        .iter()
        .enumerate()
        .filter(|(_, seg)| seg.origin && is_vowel(seg.ch))
        .map(|(i, _)| i)
        .collect();

    let mut protected = Vec::new();
    if let Some(&last) = originals.last() {
        protected.push(last);
    }
    if originals.len() == 4 {
        protected.push(originals[2]);
    }
    protected
}

/// Indices protected by the digraph rule: a vowel immediately followed by
/// another vowel letter, whatever its origin.
fn digraph_protected_indices(word: &SegmentString) -> Vec<usize> {
    let mut protected = Vec::new();
    for i in 0..word.len() {
        let Some(seg) = word.get(i) else { break };
        if !is_vowel(seg.ch) {
            continue;
        }
        if let Some(next) = word.get(i + 1) {
            if is_vowel(next.ch) {
                protected.push(i);
            }
        }
    }
    protected
}
