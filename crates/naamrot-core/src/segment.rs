// Origin-tagged character sequence.
//
// Every word part travels through the rule stages as a sequence of
// segments, each one character tagged with where it came from: typed by
// the user (`origin = true`) or synthesized by a rule (`origin = false`).
// The tag is what keeps later stages, in particular the vowel swap, from
// compounding on text an earlier rule already produced.
//
// Invariant: the only mutation primitive is `replace_range`, and it always
// writes `origin = false` segments. Synthesized text can therefore never
// regain original status.

use crate::character::{char_eq_ignore_case, simple_upper};

/// One character of a word part, tagged with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// The character as currently spelled.
    pub ch: char,
    /// `true` if the character was typed by the user, `false` if a rule
    /// synthesized it.
    pub origin: bool,
}

/// An ordered sequence of segments representing a word part's current
/// spelling. Created fresh per word part and discarded after rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentString {
    segments: Vec<Segment>,
}

impl SegmentString {
    /// Build a segment sequence from user-typed text. Every segment starts
    /// with `origin = true`.
    pub fn from_word(word: &str) -> Self {
        Self {
            segments: word
                .chars()
                .map(|ch| Segment { ch, origin: true })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segment at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Segment> {
        self.segments.get(index).copied()
    }

    /// Iterate over the segments in order.
    pub fn iter(&self) -> impl Iterator<Item = Segment> + '_ {
        self.segments.iter().copied()
    }

    /// Render the current spelling.
    pub fn render(&self) -> String {
        self.segments.iter().map(|s| s.ch).collect()
    }

    /// Render the current spelling in uppercase, for rule matching.
    pub fn render_upper(&self) -> String {
        self.segments.iter().map(|s| simple_upper(s.ch)).collect()
    }

    /// Atomically replace the segments in `start..end` with the characters
    /// of `replacement`, all tagged `origin = false`. A zero-width range
    /// (`start == end`) is an insertion; an empty replacement is a
    /// deletion.
    ///
    /// Panics if the range is out of bounds or inverted; rule stages only
    /// construct ranges from indices they just validated.
    pub fn replace_range(&mut self, start: usize, end: usize, replacement: &str) {
        assert!(start <= end && end <= self.segments.len());
        self.segments.splice(
            start..end,
            replacement.chars().map(|ch| Segment { ch, origin: false }),
        );
    }

    // -- Matching helpers used by the rule stages ---------------------------

    /// Check whether the spelling ends with `suffix`, ignoring ASCII case.
    pub fn ends_with_ignore_case(&self, suffix: &str) -> bool {
        let n = suffix.chars().count();
        if n > self.len() {
            return false;
        }
        self.segments[self.len() - n..]
            .iter()
            .zip(suffix.chars())
            .all(|(seg, c)| char_eq_ignore_case(seg.ch, c))
    }

    /// Check whether the spelling starts with `prefix`, ignoring ASCII case.
    pub fn starts_with_ignore_case(&self, prefix: &str) -> bool {
        let n = prefix.chars().count();
        if n > self.len() {
            return false;
        }
        self.segments[..n]
            .iter()
            .zip(prefix.chars())
            .all(|(seg, c)| char_eq_ignore_case(seg.ch, c))
    }

    /// Check whether the two segments at `index` spell `pair`, ignoring
    /// ASCII case. Used by the internal-digram suffix rules.
    pub fn pair_at_ignore_case(&self, index: usize, pair: [char; 2]) -> bool {
        index + 1 < self.len()
            && char_eq_ignore_case(self.segments[index].ch, pair[0])
            && char_eq_ignore_case(self.segments[index + 1].ch, pair[1])
    }
}
