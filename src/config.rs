//! Game configuration - grid geometry, clue count and runtime switches

/// Fixed shape of a puzzle. `Default` is the shipped game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of clues drawn, and therefore the number of steps
    pub clue_count: usize,
    pub rows: usize,
    pub cols: usize,
    /// Characters of a clue embedded in the grid; longer words are cut
    pub max_word_len: usize,
    /// Length of a freshly generated base-36 seed
    pub seed_len: usize,
}

impl GameConfig {
    pub const fn grid_size(&self) -> usize {
        self.rows * self.cols
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            clue_count: 10,
            rows: 4,
            cols: 8,
            max_word_len: 6,
            seed_len: 8,
        }
    }
}

/// URL parameter that overrides the session seed
pub const SEED_PARAM: &str = "seed";
/// URL parameter that switches the diagnostic panel on (`1`) or off (`0`)
pub const DEBUG_PARAM: &str = "debug";
/// `localStorage` key remembering the debug choice across sessions
pub const DEBUG_KEY: &str = "clueGridDebug";

/// Resolve debug mode from the URL flag and the remembered value.
/// An explicit `1`/`0` in the URL wins; anything else defers to storage.
pub fn debug_enabled(url_flag: Option<&str>, stored: Option<&str>) -> bool {
    match url_flag {
        Some("1") => true,
        Some("0") => false,
        _ => stored == Some("1"),
    }
}
