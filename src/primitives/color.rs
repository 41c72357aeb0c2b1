//! Rgb - 24-bit cell ink colour with CSS output

/// A colour packed as `0xRRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb(u32);

impl Rgb {
    pub const MAX: u32 = 0xFF_FFFF;

    /// Map a draw in [0, 1] onto the 24-bit range with `floor(r * 0xFFFFFF)`.
    pub fn from_unit(r: f64) -> Self {
        let scaled = (r * Self::MAX as f64).floor();
        Self((scaled.max(0.0) as u32).min(Self::MAX))
    }

    pub fn to_css(&self) -> String {
        format!("#{:06x}", self.0)
    }
}
