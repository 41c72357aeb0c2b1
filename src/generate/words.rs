//! Word list and clue selection

use super::rng::Xorshift32;

/// Clue vocabulary. Hyphen and digit entries exercise the `-` and `.` display tokens.
pub const WORDS: &[&str] = &[
    "ANCHOR", "BEACON", "CIPHER", "DAGGER", "EMBER", "FALCON",
    "GLYPH", "HARBOR", "ICICLE", "JASPER", "KERNEL", "LANTERN",
    "MIRROR", "NEBULA", "ORACLE", "PRISM", "QUARTZ", "RIDDLE",
    "SHADOW", "TEMPEST", "UMBRA", "VAULT", "WILLOW", "XENON",
    "YONDER", "ZENITH", "COMPASS", "LABYRINTH", "SPECTRUM", "OBSIDIAN",
    "X-RAY", "HI-FI", "WALKIE-TALKIE", "AGENT-7", "R2D2", "ECHO",
];

/// Draw `count` words with replacement, one draw each, in step order.
///
/// An empty list yields no clues and consumes no draws.
pub fn select_clues(rng: &mut Xorshift32, words: &[&str], count: usize) -> Vec<String> {
    if words.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|_| words[rng.next_index(words.len())].to_string())
        .collect()
}
