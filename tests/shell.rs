//! Shell sessions driven through in-memory input and output.

use asciiart::output::Output;
use asciiart::shell::{Shell, ShellSettings};
use asciiart::{AsciiArtError, BrightnessTable, GlyphBitmap, RoundingMode, GLYPH_SIZE};
use image::{Rgb, RgbImage};
use std::io::Cursor;

/// Ink grows with the character code above '0'.
fn code_mask(c: char) -> GlyphBitmap {
    let ink = (c as usize).saturating_sub('0' as usize).min(GLYPH_SIZE * GLYPH_SIZE);
    let mut bitmap = [[false; GLYPH_SIZE]; GLYPH_SIZE];
    for cell in bitmap.iter_mut().flatten().take(ink) {
        *cell = true;
    }
    bitmap
}

fn shell(width: u32, height: u32) -> Shell {
    let image = RgbImage::from_pixel(width, height, Rgb([0, 0, 0]));
    let table = BrightnessTable::new(code_mask, '0'..='9');
    Shell::new(image, table, ShellSettings::default()).unwrap()
}

fn session(shell: &mut Shell, script: &str) -> String {
    let mut out = Vec::new();
    shell.run(Cursor::new(script), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn chars_lists_members_in_order() {
    let mut sh = shell(8, 8);
    let out = session(&mut sh, "chars\nexit\n");
    assert_eq!(out, ">>> 0 1 2 3 4 5 6 7 8 9\n>>> ");
}

#[test]
fn add_and_remove_ranges() {
    let mut sh = shell(8, 8);
    session(&mut sh, "remove 0-9\nadd a\nadd c-b\nadd space\nexit\n");
    let members: String = sh.table().members().collect();
    assert_eq!(members, " abc");

    session(&mut sh, "add all\n");
    assert_eq!(sh.table().len(), 95);
    session(&mut sh, "remove all\n");
    assert!(sh.table().is_empty());
}

#[test]
fn resolution_moves_within_bounds() {
    let mut sh = shell(8, 4);
    let out = session(&mut sh, "res up\nres up\nres up\nres\n");
    assert_eq!(sh.resolution(), 8);
    assert!(out.contains("Resolution set to 4.\n"));
    assert!(out.contains("Did not change resolution due to exceeding boundaries.\n"));
    assert!(out.ends_with("Resolution set to 8.\n>>> "));

    // min chars in row is 8 / 4 == 2
    let out = session(&mut sh, "res down\nres down\nres down\n");
    assert_eq!(sh.resolution(), 2);
    assert!(out.contains("Did not change resolution due to exceeding boundaries.\n"));
}

#[test]
fn malformed_commands_leave_state_untouched() {
    let mut sh = shell(8, 8);
    let out = session(&mut sh, "round sideways\nres left\nadd xyz\noutput pdf\nfly\n");
    assert_eq!(sh.rounding(), RoundingMode::Nearest);
    assert_eq!(sh.resolution(), 2);
    assert_eq!(sh.table().len(), 10);
    assert_eq!(sh.output(), &Output::Console);
    assert_eq!(out.matches("incorrect format").count(), 5);
}

#[test]
fn round_and_output_switch_state() {
    let mut sh = shell(8, 8);
    session(&mut sh, "round up\noutput html\n");
    assert_eq!(sh.rounding(), RoundingMode::RoundUp);
    assert!(matches!(sh.output(), Output::Html { .. }));

    session(&mut sh, "round abs\noutput console\n");
    assert_eq!(sh.rounding(), RoundingMode::Nearest);
    assert_eq!(sh.output(), &Output::Console);
}

#[test]
fn ascii_art_prints_grid() {
    let mut sh = shell(4, 4);
    let out = session(&mut sh, "asciiArt\nexit\n");
    assert_eq!(out, ">>> 00\n00\n>>> ");
}

#[test]
fn ascii_art_needs_two_chars() {
    let mut sh = shell(4, 4);
    let out = session(&mut sh, "remove 1-9\nasciiArt\nadd 5\nasciiArt\n");
    assert!(out.contains("Did not execute. Charset is too small.\n"));
    assert!(out.contains("00\n00\n"));
}

#[test]
fn html_output_goes_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.html");
    let image = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
    let table = BrightnessTable::new(code_mask, '0'..='9');
    let settings = ShellSettings { html_file: path.clone(), ..ShellSettings::default() };
    let mut sh = Shell::new(image, table, settings).unwrap();

    let out = session(&mut sh, "output html\nasciiArt\nexit\n");

    assert_eq!(out, ">>> >>> >>> ");
    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("99\n99\n"));
    assert!(html.contains("Courier New"));
}

#[test]
fn starting_resolution_must_fit_image() {
    // 8x4: at least 2 and at most 8 characters per row
    let start = |resolution: u32| {
        let image = RgbImage::from_pixel(8, 4, Rgb([0, 0, 0]));
        let table = BrightnessTable::new(code_mask, '0'..='9');
        Shell::new(image, table, ShellSettings { resolution, ..ShellSettings::default() })
    };

    assert!(matches!(
        start(1).err(),
        Some(AsciiArtError::OutOfBounds { requested: 1, min: 2, max: 8 })
    ));
    assert!(matches!(
        start(100).err(),
        Some(AsciiArtError::OutOfBounds { requested: 100, min: 2, max: 8 })
    ));

    let mut sh = start(8).unwrap();
    let out = session(&mut sh, "asciiArt\n");
    assert_eq!(out, format!(">>> {}>>> ", "00000000\n".repeat(4)));
}
