//! Candidate characters scored by glyph brightness.

use crate::glyph::{ink_count, GlyphMask, GLYPH_SIZE};
use crate::{AsciiArtError, Result};
use log::debug;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// How a target brightness is matched against the candidate characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Minimum absolute difference.
    #[default]
    Nearest,
    /// Smallest brightness at or above the target.
    RoundUp,
    /// Largest brightness at or below the target.
    RoundDown,
}

impl FromStr for RoundingMode {
    type Err = AsciiArtError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "abs" | "nearest" => Ok(Self::Nearest),
            "up" => Ok(Self::RoundUp),
            "down" => Ok(Self::RoundDown),
            _ => Err(AsciiArtError::InvalidFormat { action: "change rounding method" }),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Nearest => "abs",
            Self::RoundUp => "up",
            Self::RoundDown => "down",
        })
    }
}

/// The active character set with raw and normalized glyph brightness.
///
/// Raw brightness is the inked fraction of a character's 16×16 mask. Normalized
/// brightness rescales the raw values so the darkest member sits at 0 and the
/// brightest at 1; it is recomputed for every member whenever membership changes.
/// When all members share one raw value (a single member included) every
/// member normalizes to 1.0.
///
/// Iteration, and therefore tie-breaking, is in ascending character order.
pub struct BrightnessTable {
    mask: Box<dyn GlyphMask>,
    raw: BTreeMap<char, f64>,
    normalized: BTreeMap<char, f64>,
}

impl BrightnessTable {
    pub fn new(mask: impl GlyphMask + 'static, chars: impl IntoIterator<Item = char>) -> Self {
        let mut table = Self {
            mask: Box::new(mask),
            raw: BTreeMap::new(),
            normalized: BTreeMap::new(),
        };
        for c in chars {
            if !table.raw.contains_key(&c) {
                let raw = table.raw_score(c);
                table.raw.insert(c, raw);
            }
        }
        table.normalize();
        table
    }

    /// Add a character. Returns `false` if it was already present.
    pub fn add(&mut self, c: char) -> bool {
        if self.raw.contains_key(&c) {
            return false;
        }
        let raw = self.raw_score(c);
        self.raw.insert(c, raw);
        self.normalize();
        true
    }

    /// Remove a character. Returns `false` if it was absent.
    pub fn remove(&mut self, c: char) -> bool {
        if self.raw.remove(&c).is_none() {
            return false;
        }
        self.normalized.remove(&c);
        self.normalize();
        true
    }

    pub fn contains(&self, c: char) -> bool {
        self.raw.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Active characters in ascending order.
    pub fn members(&self) -> impl Iterator<Item = char> + '_ {
        self.raw.keys().copied()
    }

    pub fn brightness_of(&self, c: char) -> Option<f64> {
        self.normalized.get(&c).copied()
    }

    pub fn raw_brightness_of(&self, c: char) -> Option<f64> {
        self.raw.get(&c).copied()
    }

    /// Character whose normalized brightness best matches `brightness` under `mode`.
    ///
    /// The rounding modes fall back to [`RoundingMode::Nearest`] when no member lies
    /// on the requested side of the target. Returns `None` only for an empty table.
    pub fn lookup(&self, brightness: f64, mode: RoundingMode) -> Option<char> {
        let mut best: Option<(char, f64)> = None;

        match mode {
            RoundingMode::Nearest => return self.nearest(brightness),
            RoundingMode::RoundUp => {
                for (&c, &b) in &self.normalized {
                    if b >= brightness && best.map_or(true, |(_, best_b)| b < best_b) {
                        best = Some((c, b));
                    }
                }
            }
            RoundingMode::RoundDown => {
                for (&c, &b) in &self.normalized {
                    if b <= brightness && best.map_or(true, |(_, best_b)| b > best_b) {
                        best = Some((c, b));
                    }
                }
            }
        }

        match best {
            Some((c, _)) => Some(c),
            None => self.nearest(brightness),
        }
    }

    fn nearest(&self, brightness: f64) -> Option<char> {
        let mut best: Option<(char, f64)> = None;
        for (&c, &b) in &self.normalized {
            let diff = (b - brightness).abs();
            if best.map_or(true, |(_, best_diff)| diff < best_diff) {
                best = Some((c, diff));
            }
        }
        best.map(|(c, _)| c)
    }

    fn raw_score(&self, c: char) -> f64 {
        ink_count(&self.mask.mask(c)) as f64 / (GLYPH_SIZE * GLYPH_SIZE) as f64
    }

    fn normalize(&mut self) {
        self.normalized.clear();
        if self.raw.is_empty() {
            return;
        }

        let lo = self.raw.values().copied().fold(f64::INFINITY, f64::min);
        let hi = self.raw.values().copied().fold(f64::NEG_INFINITY, f64::max);
        let span = hi - lo;

        for (&c, &raw) in &self.raw {
            let normalized = if span > 0.0 { (raw - lo) / span } else { 1.0 };
            self.normalized.insert(c, normalized);
        }
        debug!("normalized {} glyphs over raw range [{lo:.4}, {hi:.4}]", self.raw.len());
    }
}
