//! Text width measurement.
//!
//! Label truncation and input scrolling only need the rendered width of a
//! string; the font itself lives with the renderer.

/// Measures the rendered width of a string in logical units.
pub trait TextMeasure {
    fn width(&self, text: &str) -> i32;
}

/// Fixed advance per character, which is what both a pixel font and a
/// terminal cell grid give us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceMeasure {
    glyph_width: i32,
}

impl MonospaceMeasure {
    pub fn new(glyph_width: i32) -> Self {
        Self {
            glyph_width: glyph_width.max(1),
        }
    }

    pub fn glyph_width(&self) -> i32 {
        self.glyph_width
    }
}

impl Default for MonospaceMeasure {
    /// Advance of the 14px pixel font the card labels are laid out for
    fn default() -> Self {
        Self::new(14)
    }
}

impl TextMeasure for MonospaceMeasure {
    fn width(&self, text: &str) -> i32 {
        let chars = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        chars.saturating_mul(self.glyph_width)
    }
}
