// Cluster insertion stage: soften an onset consonant cluster with a
// single vowel.
//
// Two cases, first one wins, at most one insertion per word part. Y
// counts as a consonant here.

use naamrot_core::character::{char_eq_ignore_case, is_consonant};
use naamrot_core::segment::SegmentString;

/// Insert a synthesized "A" into an onset consonant cluster.
pub fn apply(mut word: SegmentString) -> SegmentString {
    // 1. consonant + consonant + R: insert after the first two letters.
    if word.len() >= 3 {
        let (a, b, c) = (word.get(0), word.get(1), word.get(2));
        if let (Some(a), Some(b), Some(c)) = (a, b, c) {
            if is_consonant(a.ch) && is_consonant(b.ch) && char_eq_ignore_case(c.ch, 'R') {
                word.replace_range(2, 2, "A");
                return word;
            }
        }
    }

    // 2. consonant + (R or L): insert after the first letter.
    if word.len() >= 2 {
        if let (Some(a), Some(b)) = (word.get(0), word.get(1)) {
            if is_consonant(a.ch)
                && (char_eq_ignore_case(b.ch, 'R') || char_eq_ignore_case(b.ch, 'L'))
            {
                word.replace_range(1, 1, "A");
            }
        }
    }

    word
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(word: &str) -> String {
        apply(SegmentString::from_word(word)).render()
    }

    #[test]
    fn double_consonant_r_inserts_after_two() {
        assert_eq!(run("street"), "stAreet");
        assert_eq!(run("STRONG"), "STARONG");
    }

    #[test]
    fn consonant_l_inserts_after_one() {
        assert_eq!(run("please"), "pAlease");
        assert_eq!(run("clean"), "cAlean");
    }

    #[test]
    fn consonant_r_inserts_after_one() {
        assert_eq!(run("grow"), "gArow");
    }

    #[test]
    fn first_case_wins_over_second() {
        // "str" matches case 1; case 2 must not fire as well.
        assert_eq!(run("str"), "stAr");
    }

    #[test]
    fn y_counts_as_consonant() {
        // d + r would be case 2; y + r is also a cluster.
        assert_eq!(run("yr"), "yAr");
    }

    #[test]
    fn vowel_onset_is_untouched() {
        assert_eq!(run("open"), "open");
        assert_eq!(run("army"), "army");
    }

    #[test]
    fn non_cluster_consonants_are_untouched() {
        assert_eq!(run("stop"), "stop");
        assert_eq!(run("the"), "the");
    }

    #[test]
    fn inserted_vowel_is_synthesized() {
        let word = apply(SegmentString::from_word("clean"));
        assert!(!word.get(1).unwrap().origin);
        assert!(word.get(0).unwrap().origin);
        assert!(word.get(2).unwrap().origin);
    }

    #[test]
    fn short_words() {
        assert_eq!(run(""), "");
        assert_eq!(run("r"), "r");
        assert_eq!(run("br"), "bAr");
    }
}
