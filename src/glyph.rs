//! Glyph rasterization into fixed-size boolean masks.

use crate::{AsciiArtError, Result};
use fontdue::{Font, FontSettings};
use log::warn;
use std::path::Path;

/// Side length of a glyph mask in cells.
pub const GLYPH_SIZE: usize = 16;

/// Rasterized glyph: `true` where the character puts ink.
pub type GlyphBitmap = [[bool; GLYPH_SIZE]; GLYPH_SIZE];

/// Coverage at or above this value counts as ink.
const INK_THRESHOLD: u8 = 128;

/// Maps a character to its rasterized shape.
///
/// Implementations must be pure: the same character always yields the same mask.
/// Any `Fn(char) -> GlyphBitmap` closure qualifies.
pub trait GlyphMask: Send + Sync {
    fn mask(&self, c: char) -> GlyphBitmap;
}

impl<F> GlyphMask for F
where
    F: Fn(char) -> GlyphBitmap + Send + Sync,
{
    fn mask(&self, c: char) -> GlyphBitmap {
        self(c)
    }
}

/// Number of inked cells in a mask.
pub fn ink_count(bitmap: &GlyphBitmap) -> usize {
    bitmap.iter().flatten().filter(|&&on| on).count()
}

/// Glyph masks rendered from a TrueType/OpenType font.
pub struct FontGlyphMask {
    font: Font,
    font_size: f32,
}

impl FontGlyphMask {
    /// ~87.5% of the cell so descenders stay inside the mask.
    pub const DEFAULT_FONT_SIZE: f32 = GLYPH_SIZE as f32 * 0.875;

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(data)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|e| AsciiArtError::Font(e.to_string()))?;
        Ok(Self { font, font_size: Self::DEFAULT_FONT_SIZE })
    }

    pub fn with_font_size(mut self, px: f32) -> Self {
        self.font_size = px;
        self
    }
}

impl GlyphMask for FontGlyphMask {
    fn mask(&self, c: char) -> GlyphBitmap {
        let mut bitmap = [[false; GLYPH_SIZE]; GLYPH_SIZE];

        if self.font.lookup_glyph_index(c) == 0 {
            if !c.is_whitespace() {
                warn!("font has no glyph for {:?}, treating it as blank", c);
            }
            return bitmap;
        }

        let (metrics, coverage) = self.font.rasterize(c, self.font_size);
        if metrics.width == 0 || metrics.height == 0 {
            return bitmap;
        }

        let size = GLYPH_SIZE as i32;
        // Baseline at ~75% down
        let baseline_y = (GLYPH_SIZE as f32 * 0.75) as i32;
        let y_offset = baseline_y - metrics.height as i32 - metrics.ymin;
        let x_offset = (size - metrics.width as i32) / 2;

        for sy in 0..metrics.height {
            for sx in 0..metrics.width {
                let tx = x_offset + sx as i32;
                let ty = y_offset + sy as i32;
                if tx >= 0 && tx < size && ty >= 0 && ty < size {
                    bitmap[ty as usize][tx as usize] =
                        coverage[sy * metrics.width + sx] >= INK_THRESHOLD;
                }
            }
        }

        bitmap
    }
}
