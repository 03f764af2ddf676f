// Prefix rule stage: a fixed ordered sequence of starting replacements.

use naamrot_core::character::is_vowel;
use naamrot_core::segment::SegmentString;

/// Apply the prefix rules in their fixed order.
pub fn apply(mut word: SegmentString) -> SegmentString {
    // 1. SN- → SAN-
    if word.starts_with_ignore_case("SN") {
        word.replace_range(0, 2, "SAN");
    }

    // 2. SW- → SAW-
    if word.starts_with_ignore_case("SW") {
        word.replace_range(0, 2, "SAW");
    }

    // 3. RE- → RO- when the third character is a vowel. The bare part
    // "re" is left unchanged (the length guard covers it). Note the
    // discriminator is literal: any vowel in third position converts,
    // including words like "reason".
    if word.len() >= 3 && word.starts_with_ignore_case("RE") {
        if let Some(third) = word.get(2) {
            if is_vowel(third.ch) {
                word.replace_range(0, 2, "RO");
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
    fn sn_becomes_san() {
        assert_eq!(run("snake"), "SANake");
        assert_eq!(run("SNOW"), "SANOW");
    }

    #[test]
    fn sw_becomes_saw() {
        assert_eq!(run("sweet"), "SAWeet");
    }

    #[test]
    fn bare_re_is_unchanged() {
        assert_eq!(run("re"), "re");
    }

    #[test]
    fn re_with_vowel_third_becomes_ro() {
        assert_eq!(run("reason"), "ROason");
    }

    #[test]
    fn re_with_consonant_third_is_unchanged() {
        assert_eq!(run("remember"), "remember");
        assert_eq!(run("red"), "red");
    }

    #[test]
    fn replacements_are_synthesized() {
        let word = apply(SegmentString::from_word("snake"));
        assert!(!word.get(0).unwrap().origin);
        assert!(!word.get(1).unwrap().origin);
        assert!(!word.get(2).unwrap().origin);
        assert!(word.get(3).unwrap().origin);
    }

    #[test]
    fn non_matching_words_pass_through() {
        assert_eq!(run("stop"), "stop");
        assert_eq!(run(""), "");
        assert_eq!(run("s"), "s");
    }
}
