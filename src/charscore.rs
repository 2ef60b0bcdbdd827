//! charscore - Print glyph brightness for a charset, darkest first

use asciiart::charset::{load_charset, DEFAULT_CHARSET, PRINTABLE_ASCII};
use asciiart::{AsciiArtError, BrightnessTable, FontGlyphMask};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "charscore", about = "Score characters by glyph brightness")]
struct Args {
    /// Characters to score (defaults to the digits)
    chars: Option<String>,
    /// JSON charset file ({"chars": [...]})
    #[arg(long, conflicts_with_all = ["chars", "ascii"])]
    charset: Option<PathBuf>,
    /// Score all printable ASCII characters
    #[arg(short, long, conflicts_with = "chars")]
    ascii: bool,
    /// Font file for rendering glyphs
    #[arg(short, long, default_value = "assets/DejaVuSansMono.ttf")]
    font: PathBuf,
    /// Glyph rasterization size in pixels
    #[arg(long, default_value_t = FontGlyphMask::DEFAULT_FONT_SIZE)]
    font_size: f32,
    /// Only print the characters as a dark-to-bright ramp
    #[arg(short, long)]
    ramp: bool,
    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), AsciiArtError> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let chars: Vec<char> = if let Some(path) = &args.charset {
        load_charset(path)?
    } else if args.ascii {
        PRINTABLE_ASCII.collect()
    } else if let Some(chars) = &args.chars {
        chars.chars().collect()
    } else {
        DEFAULT_CHARSET.collect()
    };

    let mask = FontGlyphMask::open(&args.font)?.with_font_size(args.font_size);
    let table = BrightnessTable::new(mask, chars);

    let mut scored: Vec<(char, f64, f64)> = table
        .members()
        .filter_map(|c| Some((c, table.raw_brightness_of(c)?, table.brightness_of(c)?)))
        .collect();
    scored.sort_by(|a, b| a.2.total_cmp(&b.2).then(a.0.cmp(&b.0)));

    if args.ramp {
        println!("{}", scored.iter().map(|(c, _, _)| *c).collect::<String>());
        return Ok(());
    }

    println!("char  raw     normalized");
    for (c, raw, normalized) in scored {
        println!("{:<5} {:.4}  {:.4}", format!("{c:?}"), raw, normalized);
    }
    Ok(())
}
