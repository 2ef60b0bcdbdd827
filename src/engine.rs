//! Rendering engine: pad, partition, score and match every region.

use crate::brightness::region_brightness;
use crate::partition::{pad_to_power_of_two, partition};
use crate::table::{BrightnessTable, RoundingMode};
use crate::{AsciiArtError, Result, MIN_CHARS};
use image::RgbImage;
use log::debug;
use rayon::prelude::*;

/// Rendered characters, one inner `Vec` per output row.
pub type CharGrid = Vec<Vec<char>>;

/// Render `image` as `columns` characters per row.
///
/// Fails with [`AsciiArtError::TooFewCharacters`] when `table` holds fewer than two
/// characters and with [`AsciiArtError::OutOfBounds`] when `columns` is zero or wider
/// than the image. The result depends only on the arguments.
pub fn render(
    image: &RgbImage,
    columns: u32,
    table: &BrightnessTable,
    mode: RoundingMode,
) -> Result<CharGrid> {
    if table.len() < MIN_CHARS {
        return Err(AsciiArtError::TooFewCharacters { count: table.len() });
    }
    if columns == 0 || columns > image.width() {
        return Err(AsciiArtError::OutOfBounds {
            requested: columns,
            min: 1,
            max: image.width(),
        });
    }

    let padded = pad_to_power_of_two(image);
    let grid = partition(&padded, columns)?;
    debug!(
        "rendering {}x{} image (padded {}x{}) as {}x{} cells of {}px, mode {}",
        image.width(),
        image.height(),
        padded.width(),
        padded.height(),
        grid.columns(),
        grid.rows(),
        grid.region_size(),
        mode
    );

    let rows: CharGrid = (0..grid.rows())
        .into_par_iter()
        .map(|row| {
            (0..grid.columns())
                .map(|col| {
                    let brightness = region_brightness(&grid.region(col, row));
                    table.lookup(brightness, mode).unwrap_or(' ')
                })
                .collect::<Vec<char>>()
        })
        .collect();

    Ok(rows)
}

/// Fewest characters per row an image may be rendered with.
pub fn min_chars_in_row(width: u32, height: u32) -> u32 {
    (width / height.max(1)).max(1)
}

/// Whether `columns` lies within `[min_chars_in_row(width, height), width]`.
pub fn check_resolution_bounds(columns: u32, width: u32, height: u32) -> bool {
    columns >= min_chars_in_row(width, height) && columns <= width
}
