//! Interactive command shell around the rendering core.
//!
//! Commands:
//! - `exit`: leave the shell
//! - `chars`: list active characters
//! - `add <arg>` / `remove <arg>`: change the charset, where `<arg>` is a single
//!   character, `all`, `space` or a range such as `a-z`
//! - `res [up|down]`: double or halve characters per row
//! - `round <abs|up|down>`: pick the rounding mode
//! - `output <console|html>`: pick where rendered art goes
//! - `asciiArt`: render the image

use crate::charset::PRINTABLE_ASCII;
use crate::engine::{check_resolution_bounds, min_chars_in_row, render};
use crate::output::{Output, DEFAULT_HTML_FILE, DEFAULT_HTML_FONT};
use crate::table::{BrightnessTable, RoundingMode};
use crate::{AsciiArtError, Result, MIN_CHARS};
use image::RgbImage;
use log::info;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::path::PathBuf;

const PROMPT: &str = ">>> ";

/// Resolution change requested by `res`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResChange {
    Up,
    Down,
}

/// Output target requested by `output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Console,
    Html,
}

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Chars,
    Add(RangeInclusive<char>),
    Remove(RangeInclusive<char>),
    Res(Option<ResChange>),
    Round(RoundingMode),
    Output(OutputKind),
    AsciiArt,
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    ///
    /// Only the first argument is looked at; anything after it is ignored.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let arg = words.next().unwrap_or("");

        let command = match name {
            "exit" => Self::Exit,
            "chars" => Self::Chars,
            "add" => Self::Add(parse_selection(arg, "add")?),
            "remove" => Self::Remove(parse_selection(arg, "remove")?),
            "res" => Self::Res(match arg {
                "" => None,
                "up" => Some(ResChange::Up),
                "down" => Some(ResChange::Down),
                _ => return Err(AsciiArtError::InvalidFormat { action: "change resolution" }),
            }),
            "round" => Self::Round(arg.parse()?),
            "output" => Self::Output(match arg {
                "console" => OutputKind::Console,
                "html" => OutputKind::Html,
                _ => return Err(AsciiArtError::InvalidFormat { action: "change output method" }),
            }),
            "asciiArt" => Self::AsciiArt,
            _ => return Err(AsciiArtError::InvalidFormat { action: "execute" }),
        };
        Ok(Some(command))
    }
}

/// `c`, `all`, `space` or an inclusive range `a-z` (either order).
fn parse_selection(arg: &str, action: &'static str) -> Result<RangeInclusive<char>> {
    let chars: Vec<char> = arg.chars().collect();
    match (arg, chars.as_slice()) {
        (_, &[c]) => Ok(c..=c),
        ("all", _) => Ok(PRINTABLE_ASCII),
        ("space", _) => Ok(' '..=' '),
        (_, &[a, '-', b]) if a != '-' && b != '-' => Ok(a.min(b)..=a.max(b)),
        _ => Err(AsciiArtError::InvalidFormat { action }),
    }
}

/// Initial shell state.
#[derive(Debug, Clone)]
pub struct ShellSettings {
    pub resolution: u32,
    pub rounding: RoundingMode,
    pub output: Output,
    pub html_file: PathBuf,
    pub html_font: String,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            resolution: MIN_CHARS as u32,
            rounding: RoundingMode::Nearest,
            output: Output::Console,
            html_file: PathBuf::from(DEFAULT_HTML_FILE),
            html_font: DEFAULT_HTML_FONT.to_string(),
        }
    }
}

/// Whether the shell keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Session state: source image, charset, resolution, rounding and output.
///
/// A failed command leaves every part of the state untouched.
pub struct Shell {
    image: RgbImage,
    table: BrightnessTable,
    resolution: u32,
    rounding: RoundingMode,
    output: Output,
    html_file: PathBuf,
    html_font: String,
}

impl Shell {
    /// Fails with [`AsciiArtError::OutOfBounds`] when the starting resolution is
    /// outside `[min_chars_in_row, width]` for `image`.
    pub fn new(image: RgbImage, table: BrightnessTable, settings: ShellSettings) -> Result<Self> {
        let (width, height) = image.dimensions();
        if !check_resolution_bounds(settings.resolution, width, height) {
            return Err(AsciiArtError::OutOfBounds {
                requested: settings.resolution,
                min: min_chars_in_row(width, height),
                max: width,
            });
        }
        Ok(Self {
            image,
            table,
            resolution: settings.resolution,
            rounding: settings.rounding,
            output: settings.output,
            html_file: settings.html_file,
            html_font: settings.html_font,
        })
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn table(&self) -> &BrightnessTable {
        &self.table
    }

    /// Read commands from `input` until `exit` or end of input.
    ///
    /// Command errors are reported on `out` and the loop continues.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        let mut line = String::new();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Ok(());
            }

            let result = Command::parse(&line).and_then(|command| match command {
                Some(command) => self.execute(command, out),
                None => Ok(Flow::Continue),
            });
            match result {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(e) => writeln!(out, "{e}")?,
            }
        }
    }

    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::Exit => return Ok(Flow::Exit),
            Command::Chars => {
                if !self.table.is_empty() {
                    let chars: Vec<String> = self.table.members().map(String::from).collect();
                    writeln!(out, "{}", chars.join(" "))?;
                }
            }
            Command::Add(range) => {
                let added = range.filter(|&c| self.table.add(c)).count();
                info!("added {added} chars, {} active", self.table.len());
            }
            Command::Remove(range) => {
                let removed = range.filter(|&c| self.table.remove(c)).count();
                info!("removed {removed} chars, {} active", self.table.len());
            }
            Command::Res(change) => self.change_resolution(change, out)?,
            Command::Round(mode) => {
                self.rounding = mode;
                info!("rounding set to {mode}");
            }
            Command::Output(kind) => {
                self.output = match kind {
                    OutputKind::Console => Output::Console,
                    OutputKind::Html => Output::html(&self.html_file, &self.html_font),
                };
            }
            Command::AsciiArt => {
                if self.table.len() < MIN_CHARS {
                    return Err(AsciiArtError::TooFewCharacters { count: self.table.len() });
                }
                let grid = render(&self.image, self.resolution, &self.table, self.rounding)?;
                self.output.write(&grid, out)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn change_resolution<W: Write>(&mut self, change: Option<ResChange>, out: &mut W) -> Result<()> {
        let (width, height) = self.image.dimensions();
        if let Some(change) = change {
            let requested = match change {
                ResChange::Up => self.resolution.saturating_mul(2),
                ResChange::Down => self.resolution / 2,
            };
            if !check_resolution_bounds(requested, width, height) {
                return Err(AsciiArtError::OutOfBounds {
                    requested,
                    min: min_chars_in_row(width, height),
                    max: width,
                });
            }
            self.resolution = requested;
            info!("resolution set to {requested}");
        }
        writeln!(out, "Resolution set to {}.", self.resolution)?;
        Ok(())
    }
}
