// Suffix rule stage: a fixed ordered sequence of ending replacements.
//
// Each step reads the cumulative result of the steps before it, so a step
// may act on an ending an earlier step produced. Every replacement writes
// synthesized segments.

use naamrot_core::segment::SegmentString;

use super::PartContext;

/// Apply the suffix rules in their fixed order and record whether the
/// ending-AH rule fired in `ctx`.
pub fn apply(mut word: SegmentString, ctx: &mut PartContext) -> SegmentString {
    // 1-2. Internal digram replacements. "Internal" means the match may
    // not reach the final character; a trailing "ER" is left for the
    // ending-AH rule below.
    replace_internal_pairs(&mut word, ['E', 'R'], "AH");
    replace_internal_pairs(&mut word, ['I', 'R'], "AR");

    // 3. -TION → -SHAN
    if word.len() >= 4 && word.ends_with_ignore_case("TION") {
        let n = word.len();
        word.replace_range(n - 4, n, "SHAN");
    }

    // 4. -TY → -TEH
    if word.len() >= 2 && word.ends_with_ignore_case("TY") {
        let n = word.len();
        word.replace_range(n - 2, n, "TEH");
    }

    // 5. -LEY → -LEH, else -LY → -LEH
    if word.len() >= 3 && word.ends_with_ignore_case("LEY") {
        let n = word.len();
        word.replace_range(n - 3, n, "LEH");
    } else if word.len() >= 2 && word.ends_with_ignore_case("LY") {
        let n = word.len();
        word.replace_range(n - 2, n, "LEH");
    }

    // 6. Ending-AH rule. The flag it records drives tail protection in
    // the vowel swap stage.
    ctx.ending_changed_to_ah = false;
    if word.len() >= 2
        && (word.ends_with_ignore_case("ER") || word.ends_with_ignore_case("UR"))
    {
        let n = word.len();
        word.replace_range(n - 2, n, "AH");
        ctx.ending_changed_to_ah = true;
    } else if word.ends_with_ignore_case("A") {
        let n = word.len();
        word.replace_range(n - 1, n, "AH");
        ctx.ending_changed_to_ah = true;
    }

    // 7. -AY → -AEH
    if word.len() >= 2 && word.ends_with_ignore_case("AY") {
        let n = word.len();
        word.replace_range(n - 2, n, "AEH");
    }

    // 8. Trailing Y → EH, unless the current state still ends in one of
    // the endings handled above.
    if word.ends_with_ignore_case("Y")
        && !word.ends_with_ignore_case("LY")
        && !word.ends_with_ignore_case("LEY")
        && !word.ends_with_ignore_case("TY")
    {
        let n = word.len();
        word.replace_range(n - 1, n, "EH");
    }

    word
}

/// Replace every non-overlapping internal occurrence of `pair` with
/// `replacement`. A match ending on the final character is not internal
/// and is skipped.
fn replace_internal_pairs(word: &mut SegmentString, pair: [char; 2], replacement: &str) {
    let step = replacement.chars().count();
    let mut i = 0;
    while i + 2 < word.len() {
        if word.pair_at_ignore_case(i, pair) {
            word.replace_range(i, i + 2, replacement);
            i += step;
        } else {
            i += 1;
        }
    }
}
