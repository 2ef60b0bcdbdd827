//! End-to-end tests for the rendering core.
//!
//! Glyph masks are synthetic so results do not depend on an installed font.

use asciiart::*;
use image::{Rgb, RgbImage};

/// '0'..'9' ink grows with the digit; everything else is blank.
fn digit_mask(c: char) -> GlyphBitmap {
    let ink = c.to_digit(10).map_or(0, |d| d as usize * 20);
    let mut bitmap = [[false; GLYPH_SIZE]; GLYPH_SIZE];
    for cell in bitmap.iter_mut().flatten().take(ink) {
        *cell = true;
    }
    bitmap
}

/// 'm' carries more ink than 'o'.
fn mo_mask(c: char) -> GlyphBitmap {
    let ink = match c {
        'm' => 120,
        'o' => 70,
        _ => 0,
    };
    let mut bitmap = [[false; GLYPH_SIZE]; GLYPH_SIZE];
    for cell in bitmap.iter_mut().flatten().take(ink) {
        *cell = true;
    }
    bitmap
}

fn gray(level: u8) -> Rgb<u8> {
    Rgb([level, level, level])
}

// ==================== Concrete scenarios ====================

#[test]
fn black_image_renders_darkest_digit() {
    let table = BrightnessTable::new(digit_mask, '0'..='9');
    let img = RgbImage::from_pixel(2, 2, gray(0));

    let grid = render(&img, 1, &table, RoundingMode::Nearest).unwrap();

    assert_eq!(grid, vec![vec!['0']]);
    assert_eq!(table.brightness_of('0'), Some(0.0));
}

#[test]
fn midpoint_tie_resolves_to_lower_char() {
    let table = BrightnessTable::new(mo_mask, ['o', 'm']);
    let mid = (table.brightness_of('m').unwrap() + table.brightness_of('o').unwrap()) / 2.0;

    for _ in 0..3 {
        assert_eq!(table.lookup(mid, RoundingMode::Nearest), Some('m'));
    }
}

#[test]
fn round_up_past_the_top_returns_brightest() {
    let table = BrightnessTable::new(digit_mask, '0'..='9');
    assert_eq!(table.lookup(1.5, RoundingMode::RoundUp), Some('9'));
}

// ==================== Properties ====================

#[test]
fn normalized_scores_stay_in_unit_interval() {
    let mut table = BrightnessTable::new(digit_mask, "13579".chars());
    for c in ['0', '2', 'x', '8'] {
        table.add(c);
        let scores: Vec<f64> = table.members().filter_map(|c| table.brightness_of(c)).collect();
        assert!(scores.iter().all(|b| (0.0..=1.0).contains(b)));
        assert!(scores.contains(&0.0));
        assert!(scores.contains(&1.0));
    }
}

#[test]
fn rounding_modes_bracket_the_target() {
    let table = BrightnessTable::new(digit_mask, '0'..='9');
    for step in 0..=20 {
        let target = step as f64 / 20.0;
        let up = table.brightness_of(table.lookup(target, RoundingMode::RoundUp).unwrap()).unwrap();
        let down = table.brightness_of(table.lookup(target, RoundingMode::RoundDown).unwrap()).unwrap();
        assert!(up >= target, "up {up} below {target}");
        assert!(down <= target, "down {down} above {target}");
    }
}

#[test]
fn rendering_is_deterministic() {
    let table = BrightnessTable::new(digit_mask, '0'..='9');
    let img = RgbImage::from_fn(37, 23, |x, y| gray(((x * 7 + y * 11) % 256) as u8));

    let first = render(&img, 8, &table, RoundingMode::Nearest).unwrap();
    let second = render(&img, 8, &table, RoundingMode::Nearest).unwrap();
    assert_eq!(first, second);
    // 37x23 pads to 64x32: 8px regions, 4 rows
    assert_eq!(first.len(), 4);
    assert!(first.iter().all(|row| row.len() == 8));
}

#[test]
fn padding_shows_up_as_white_border() {
    let table = BrightnessTable::new(digit_mask, '0'..='9');
    // 3x3 black pads to 4x4 with white on the right column and bottom row
    let img = RgbImage::from_pixel(3, 3, gray(0));

    let grid = render(&img, 2, &table, RoundingMode::Nearest).unwrap();

    // top-left quadrant all black; the others mix in white
    assert_eq!(grid[0][0], '0');
    assert_ne!(grid[1][1], '0');
}

#[test]
fn gradient_brightens_left_to_right() {
    let table = BrightnessTable::new(digit_mask, '0'..='9');
    let img = RgbImage::from_fn(64, 8, |x, _| gray((x * 4) as u8));

    let grid = render(&img, 8, &table, RoundingMode::Nearest).unwrap();
    let row = &grid[0];
    for pair in row.windows(2) {
        assert!(pair[0] <= pair[1], "{row:?} not monotonic");
    }
    assert_eq!(row[0], '0');
}

#[test]
fn render_guards_charset_size() {
    let img = RgbImage::new(4, 4);
    let mut table = BrightnessTable::new(digit_mask, ['3', '4']);
    assert!(render(&img, 2, &table, RoundingMode::Nearest).is_ok());

    table.remove('4');
    let err = render(&img, 2, &table, RoundingMode::Nearest).unwrap_err();
    assert!(matches!(err, AsciiArtError::TooFewCharacters { count: 1 }));
}
