//! Xorshift32 - the single draw stream every puzzle is derived from

use rand::RngCore;

/// xorshift32 generator.
///
/// A puzzle is built from exactly one instance, threaded by `&mut` through
/// clue selection and then placement. Reseeding or cloning it between the
/// two stages changes the puzzle for a given seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    fn step(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Next draw as `x / 0xFFFFFFFF`.
    ///
    /// Only `x == u32::MAX` maps to exactly `1.0`; callers turning draws
    /// into indices go through [`Self::next_index`].
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.step()) / f64::from(u32::MAX)
    }

    /// `floor(r * n)` for the next draw, kept inside `0..n` (0 when `n == 0`).
    pub fn next_index(&mut self, n: usize) -> usize {
        let r = self.next_f64();
        ((r * n as f64) as usize).min(n.saturating_sub(1))
    }
}

impl RngCore for Xorshift32 {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.step());
        let lo = u64::from(self.step());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
