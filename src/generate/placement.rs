//! Grid placement - embeds each clue's leading characters into the cell grid

use serde::Serialize;

use crate::config::GameConfig;
use crate::primitives::{Rgb, Token};
use super::rng::Xorshift32;

/// Where a clue landed in the linear grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub word: String,
    pub start: usize,
    /// Embedded characters, at most `max_word_len`
    pub len: usize,
}

impl Placement {
    /// The placement without its word
    pub fn masked(&self, index: usize) -> MaskedPlacement {
        MaskedPlacement {
            index,
            start: self.start,
            len: self.len,
        }
    }
}

/// Offset and length of a clue, safe to show the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaskedPlacement {
    /// 0-based clue index
    pub index: usize,
    pub start: usize,
    pub len: usize,
}

impl MaskedPlacement {
    /// 1-based step this clue answers
    pub const fn step(&self) -> usize {
        self.index + 1
    }

    pub fn describe(&self) -> String {
        format!(
            "clue {} starts at cell {} and spans {} cell{}",
            self.step(),
            self.start,
            self.len,
            if self.len == 1 { "" } else { "s" }
        )
    }
}

/// Hidden state of one occupied cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub token: Token,
    pub color: Rgb,
    /// Flipped only by the player through the browser inspector
    pub revealed: bool,
}

/// Fixed-size linear grid rendered as `rows x cols`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    cells: Vec<Option<Cell>>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            cells: vec![None; rows * cols],
        }
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &[Option<Cell>] {
        &self.cells
    }

    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index).and_then(Option::as_ref)
    }

    /// Write a cell; positions past the end are dropped.
    pub fn set(&mut self, index: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = Some(cell);
        }
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

/// Place every clue in order and paint its cells.
///
/// Per clue: one draw for the start offset, then one draw per embedded
/// character for its colour. Later clues overwrite earlier ones where
/// they overlap.
pub fn place_clues(
    rng: &mut Xorshift32,
    clues: &[String],
    config: &GameConfig,
) -> (Vec<Placement>, Grid) {
    let mut grid = Grid::new(config.rows, config.cols);
    let grid_size = config.grid_size();
    let mut placements = Vec::with_capacity(clues.len());

    for word in clues {
        let chars: Vec<char> = word.chars().take(config.max_word_len).collect();
        let len = chars.len();
        let start = rng.next_index(grid_size.saturating_sub(len));

        for (offset, &c) in chars.iter().enumerate() {
            let color = Rgb::from_unit(rng.next_f64());
            grid.set(
                start + offset,
                Cell {
                    token: Token::from_char(c),
                    color,
                    revealed: false,
                },
            );
        }

        placements.push(Placement {
            word: word.clone(),
            start,
            len,
        });
    }

    (placements, grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clues(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn long_words_are_truncated() {
        let mut rng = Xorshift32::new(7);
        let (placements, grid) = place_clues(&mut rng, &clues(&["LABYRINTH"]), &GameConfig::default());
        assert_eq!(placements[0].len, 6);
        assert_eq!(placements[0].word, "LABYRINTH");
        let p = &placements[0];
        let shown: String = (p.start..p.start + p.len)
            .map(|i| grid.get(i).map(|c| c.token.as_char()).unwrap_or(' '))
            .collect();
        assert_eq!(shown, "LABYRI");
    }

    #[test]
    fn draw_order_is_start_then_colours() {
        let mut rng = Xorshift32::new(2024);
        let mut expected = rng.clone();
        let (placements, grid) = place_clues(&mut rng, &clues(&["ECHO", "X-RAY"]), &GameConfig::default());

        let first_start = (expected.next_f64() * 28.0).floor() as usize;
        assert_eq!(placements[0].start, first_start);
        let first_colours: Vec<Rgb> = (0..4).map(|_| Rgb::from_unit(expected.next_f64())).collect();
        let second_start = (expected.next_f64() * 27.0).floor() as usize;
        assert_eq!(placements[1].start, second_start);

        // the second word paints last, so check the first word only where it survived
        let second = placements[1].start..placements[1].start + placements[1].len;
        for (i, colour) in first_colours.iter().enumerate() {
            let pos = first_start + i;
            if !second.contains(&pos) {
                assert_eq!(grid.get(pos).map(|c| c.color), Some(*colour));
            }
        }
        assert_eq!(rng, {
            for _ in 0..5 {
                expected.next_f64();
            }
            expected
        });
    }

    #[test]
    fn hyphen_and_digit_tokens() {
        let mut rng = Xorshift32::new(11);
        let (placements, grid) = place_clues(&mut rng, &clues(&["AGENT-7"]), &GameConfig::default());
        let p = &placements[0];
        assert_eq!(p.len, 6);
        assert_eq!(grid.get(p.start + 5).map(|c| c.token), Some(Token::Hyphen));

        let mut rng = Xorshift32::new(11);
        let (placements, grid) = place_clues(&mut rng, &clues(&["R2D2"]), &GameConfig::default());
        assert_eq!(grid.get(placements[0].start + 1).map(|c| c.token), Some(Token::Blank));
    }

    #[test]
    fn cells_start_hidden() {
        let mut rng = Xorshift32::new(5);
        let (_, grid) = place_clues(&mut rng, &clues(&["EMBER", "PRISM"]), &GameConfig::default());
        assert!(grid.cells().iter().flatten().all(|c| !c.revealed));
    }

    #[test]
    fn overlapping_words_overwrite() {
        let config = GameConfig { rows: 1, cols: 3, ..GameConfig::default() };
        let mut rng = Xorshift32::new(5);
        let (placements, grid) = place_clues(&mut rng, &clues(&["AB", "CD"]), &config);
        // grid of 3 and words of 2: both starts fall in 0..1
        assert_eq!(placements[0].start, 0);
        assert_eq!(placements[1].start, 0);
        assert_eq!(grid.get(0).map(|c| c.token), Some(Token::Letter('C')));
        assert_eq!(grid.get(1).map(|c| c.token), Some(Token::Letter('D')));
        assert!(grid.get(2).is_none());
    }

    #[test]
    fn writes_past_the_end_are_dropped() {
        let mut grid = Grid::new(1, 2);
        let cell = Cell { token: Token::Letter('A'), color: Rgb::from_unit(0.0), revealed: false };
        grid.set(1, cell);
        grid.set(9, cell);
        assert_eq!(grid.cells().len(), 2);
        assert_eq!(grid.occupied(), 1);
        assert_eq!(grid.get(1), Some(&cell));
    }

    #[test]
    fn masked_placement_hides_word() {
        let p = Placement { word: "SECRET".into(), start: 3, len: 6 };
        let masked = p.masked(4);
        assert_eq!(masked.step(), 5);
        assert!(!masked.describe().contains("SECRET"));
        assert_eq!(masked.describe(), "clue 5 starts at cell 3 and spans 6 cells");
    }

    mod proptests {
        use super::*;
        use crate::generate::words::{WORDS, select_clues};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn starts_leave_room_for_the_word(seed: u32) {
                let config = GameConfig::default();
                let mut rng = Xorshift32::new(seed);
                let clues = select_clues(&mut rng, WORDS, config.clue_count);
                let (placements, _) = place_clues(&mut rng, &clues, &config);
                for p in &placements {
                    prop_assert!(p.len <= config.max_word_len);
                    prop_assert!(p.start + p.len <= config.grid_size());
                    prop_assert!(p.start < config.grid_size() - p.len);
                }
            }
        }
    }
}
