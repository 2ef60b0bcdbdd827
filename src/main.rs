//! asciiart CLI - interactive shell turning an image into ASCII art

use asciiart::charset::{load_charset, DEFAULT_CHARSET};
use asciiart::output::{Output, DEFAULT_HTML_FILE, DEFAULT_HTML_FONT};
use asciiart::shell::{Shell, ShellSettings};
use asciiart::{AsciiArtError, BrightnessTable, FontGlyphMask, RoundingMode};
use clap::{Parser, ValueEnum};
use std::io;
use std::path::PathBuf;

#[derive(Clone, Copy, ValueEnum)]
enum OutputArg {
    Console,
    Html,
}

#[derive(Parser)]
#[command(name = "asciiart", about = "Convert an image to ASCII art interactively")]
struct Args {
    /// Input image file
    image: PathBuf,
    /// Font used to measure glyph brightness
    #[arg(short, long, default_value = "assets/DejaVuSansMono.ttf")]
    font: PathBuf,
    /// Glyph rasterization size in pixels
    #[arg(long, default_value_t = FontGlyphMask::DEFAULT_FONT_SIZE)]
    font_size: f32,
    /// JSON charset file ({"chars": [...]})
    #[arg(long, conflicts_with = "chars")]
    charset: Option<PathBuf>,
    /// Initial characters, e.g. "@#*+=-:. "
    #[arg(long)]
    chars: Option<String>,
    /// Characters per row
    #[arg(short, long, default_value = "2")]
    resolution: u32,
    /// Rounding mode: abs, up or down
    #[arg(long, default_value = "abs")]
    round: RoundingMode,
    /// Initial output target
    #[arg(short, long, value_enum, default_value = "console")]
    output: OutputArg,
    /// File written by the html output
    #[arg(long, default_value = DEFAULT_HTML_FILE)]
    html_file: PathBuf,
    /// Font family used in the html output
    #[arg(long, default_value = DEFAULT_HTML_FONT)]
    html_font: String,
    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), AsciiArtError> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let chars: Vec<char> = match (&args.charset, &args.chars) {
        (Some(path), _) => load_charset(path)?,
        (None, Some(chars)) => chars.chars().collect(),
        (None, None) => DEFAULT_CHARSET.collect(),
    };

    let mask = FontGlyphMask::open(&args.font)?.with_font_size(args.font_size);
    let table = BrightnessTable::new(mask, chars);
    let image = image::open(&args.image)?.to_rgb8();
    log::info!("loaded {} ({}x{})", args.image.display(), image.width(), image.height());

    let output = match args.output {
        OutputArg::Console => Output::Console,
        OutputArg::Html => Output::html(&args.html_file, &args.html_font),
    };
    let settings = ShellSettings {
        resolution: args.resolution,
        rounding: args.round,
        output,
        html_file: args.html_file,
        html_font: args.html_font,
    };

    let mut shell = Shell::new(image, table, settings)?;
    let stdin = io::stdin();
    shell.run(stdin.lock(), &mut io::stdout())
}
