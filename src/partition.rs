//! Image partitioning - pads to power-of-two dimensions and splits into square regions.

use crate::{AsciiArtError, Result};
use image::{imageops, Rgb, RgbImage};
use std::borrow::Cow;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Pad `image` with white so both dimensions become powers of two.
///
/// The source pixels are centered; with an odd difference the extra pixel goes
/// to the bottom/right. Images that already qualify are returned borrowed.
pub fn pad_to_power_of_two(image: &RgbImage) -> Cow<'_, RgbImage> {
    let (width, height) = image.dimensions();
    let (new_w, new_h) = (width.next_power_of_two(), height.next_power_of_two());

    if (new_w, new_h) == (width, height) {
        return Cow::Borrowed(image);
    }

    let mut padded = RgbImage::from_pixel(new_w, new_h, WHITE);
    let x = (new_w - width) / 2;
    let y = (new_h - height) / 2;
    imageops::replace(&mut padded, image, i64::from(x), i64::from(y));
    Cow::Owned(padded)
}

/// Split `image` into `columns` square regions per row.
///
/// The region side is `width / columns` and the row count `height / side`.
/// Pixels past the last whole region on either axis belong to no region.
pub fn partition(image: &RgbImage, columns: u32) -> Result<RegionGrid<'_>> {
    let (width, height) = image.dimensions();
    if columns == 0 || columns > width {
        return Err(AsciiArtError::OutOfBounds { requested: columns, min: 1, max: width });
    }

    let region_size = width / columns;
    let rows = height / region_size;
    Ok(RegionGrid { image, region_size, columns, rows })
}

/// Row-major grid of equal square regions over an image.
pub struct RegionGrid<'a> {
    image: &'a RgbImage,
    region_size: u32,
    columns: u32,
    rows: u32,
}

impl<'a> RegionGrid<'a> {
    pub fn region_size(&self) -> u32 {
        self.region_size
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Region at (col, row)
    pub fn region(&self, col: u32, row: u32) -> Region<'a> {
        debug_assert!(col < self.columns && row < self.rows);
        Region {
            image: self.image,
            x: col * self.region_size,
            y: row * self.region_size,
            size: self.region_size,
        }
    }

    /// All regions in row-major order.
    pub fn regions(&self) -> impl Iterator<Item = Region<'a>> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.columns).map(move |col| self.region(col, row)))
    }
}

/// Square view into an image.
#[derive(Clone, Copy)]
pub struct Region<'a> {
    image: &'a RgbImage,
    x: u32,
    y: u32,
    size: u32,
}

impl<'a> Region<'a> {
    /// Top-left corner as (x, y).
    pub fn origin(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn pixels(&self) -> impl Iterator<Item = &'a Rgb<u8>> + 'a {
        let Region { image, x, y, size } = *self;
        (y..y + size).flat_map(move |py| (x..x + size).map(move |px| image.get_pixel(px, py)))
    }
}
