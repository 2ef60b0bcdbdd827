//! Image to ASCII art converter using glyph brightness matching.

pub mod brightness;
pub mod charset;
pub mod engine;
pub mod glyph;
pub mod output;
pub mod partition;
pub mod shell;
pub mod table;

pub use brightness::region_brightness;
pub use engine::{check_resolution_bounds, min_chars_in_row, render, CharGrid};
pub use glyph::{FontGlyphMask, GlyphBitmap, GlyphMask, GLYPH_SIZE};
pub use partition::{pad_to_power_of_two, partition, Region, RegionGrid};
pub use table::{BrightnessTable, RoundingMode};

use thiserror::Error;

/// Smallest charset a render accepts.
pub const MIN_CHARS: usize = 2;

#[derive(Error, Debug)]
pub enum AsciiArtError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Font error: {0}")]
    Font(String),
    #[error("Charset error: {0}")]
    Charset(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Did not {action} due to incorrect format.")]
    InvalidFormat { action: &'static str },
    #[error("Did not change resolution due to exceeding boundaries.")]
    OutOfBounds { requested: u32, min: u32, max: u32 },
    #[error("Did not execute. Charset is too small.")]
    TooFewCharacters { count: usize },
}

pub type Result<T> = std::result::Result<T, AsciiArtError>;
