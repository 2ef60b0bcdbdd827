//! Presentation of rendered grids.

use crate::engine::CharGrid;
use crate::Result;
use log::info;
use std::io::Write;
use std::path::PathBuf;

pub const DEFAULT_HTML_FILE: &str = "out.html";
pub const DEFAULT_HTML_FONT: &str = "Courier New";

/// Where a rendered grid goes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Output {
    /// One text line per row on the console.
    #[default]
    Console,
    /// A standalone HTML document.
    Html { path: PathBuf, font: String },
}

impl Output {
    pub fn html(path: impl Into<PathBuf>, font: impl Into<String>) -> Self {
        Self::Html { path: path.into(), font: font.into() }
    }

    /// Write `grid` to its destination; `console` receives console output.
    pub fn write(&self, grid: &CharGrid, console: &mut impl Write) -> Result<()> {
        match self {
            Self::Console => {
                for row in grid {
                    let line: String = row.iter().collect();
                    writeln!(console, "{line}")?;
                }
            }
            Self::Html { path, font } => {
                std::fs::write(path, to_html(grid, font))?;
                info!("wrote {}x{} grid to {}", grid.first().map_or(0, Vec::len), grid.len(), path.display());
            }
        }
        Ok(())
    }
}

/// Render `grid` as an HTML document in the given font family.
pub fn to_html(grid: &CharGrid, font: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n</head>\n");
    html.push_str(&format!(
        "<body style=\"margin:0\">\n<pre style=\"font-family:'{}',monospace;font-size:8px;line-height:8px;letter-spacing:1px\">\n",
        escape(font)
    ));
    for row in grid {
        for &c in row {
            push_escaped(&mut html, c);
        }
        html.push('\n');
    }
    html.push_str("</pre>\n</body>\n</html>\n");
    html
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        push_escaped(&mut out, c);
    }
    out
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(c),
    }
}
