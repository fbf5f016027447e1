use core::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use ordermap::OrderMap;

use crate::error::{Error, Result};

/// Color used for every character without a mapping.
pub const DEFAULT_COLOR: &str = "#FFFFFF";

/// Characters accepted between the key and the color in a mapping line.
const SEPARATORS: [char; 4] = [',', ':', ' ', '\t'];

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the color as `0xRRGGBB`.
    pub fn to_u32(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Parses `#rrggbb` (either case).
impl FromStr for Color {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let err = || Error::ColorParsing(String::from(s));
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| err())?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| err())?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| err())?;
        Ok(Self::rgb(r, g, b))
    }
}

/// Formats the color as uppercase `#RRGGBB`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Why a mapping line was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// No `#` color token after the key.
    MissingColor,
    /// Key already mapped by an earlier line.
    Duplicate(char),
}

/// A malformed mapping line that was skipped while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-based line number.
    pub line: usize,
    pub content: String,
    pub kind: WarningKind,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            WarningKind::MissingColor => write!(
                f,
                "line {}: no #RRGGBB color in '{}'",
                self.line, self.content
            ),
            WarningKind::Duplicate(ch) => write!(
                f,
                "line {}: mapping for '{}' duplicates an earlier one",
                self.line, ch
            ),
        }
    }
}

/// A mapping from characters to `#RRGGBB` color strings.
///
/// The mapping file holds one rule per line: the first character of the line
/// is the key, optionally followed by one separator (`,`, `:`, space or tab),
/// then the color token. Because the key is positional, separators can be keys
/// themselves (`,,#000000` maps the comma).
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ColorMap {
    map: OrderMap<char, String>,
}

impl ColorMap {
    /// Creates an empty map; every lookup yields [`DEFAULT_COLOR`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses mapping text, logging and skipping malformed lines.
    pub fn load(text: &str) -> Self {
        let (map, warnings) = Self::load_with_warnings(text);
        for warning in &warnings {
            log::warn!("skipping color mapping {}", warning);
        }
        map
    }

    /// Parses mapping text and returns skipped lines alongside the map.
    pub fn load_with_warnings(text: &str) -> (Self, Vec<ParseWarning>) {
        let mut map: OrderMap<char, String> = OrderMap::new();
        let mut warnings = Vec::new();
        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let warn = |kind| ParseWarning {
                line: i + 1,
                content: line.into(),
                kind,
            };
            match parse_line(line) {
                Some((key, _)) if map.contains_key(&key) => {
                    warnings.push(warn(WarningKind::Duplicate(key)));
                }
                Some((key, color)) => {
                    map.insert(key, color.to_string());
                }
                None => warnings.push(warn(WarningKind::MissingColor)),
            }
        }
        log::debug!(
            "loaded {} color mappings ({} lines skipped)",
            map.len(),
            warnings.len()
        );
        (Self { map }, warnings)
    }

    /// Reads and parses a mapping file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::load(&fs::read_to_string(path)?))
    }

    /// Returns the color for `ch`, or [`DEFAULT_COLOR`] when unmapped.
    pub fn color_for(&self, ch: char) -> &str {
        self.map.get(&ch).map_or(DEFAULT_COLOR, String::as_str)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.map.contains_key(&ch)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates mappings in file order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.map.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

fn parse_line(line: &str) -> Option<(char, &str)> {
    let mut chars = line.chars();
    let key = chars.next()?;
    let mut rest = chars.as_str();
    if let Some(sep) = rest.chars().next().filter(|c| SEPARATORS.contains(c)) {
        rest = &rest[sep.len_utf8()..];
    }
    let color = rest.trim();
    if color.starts_with('#') {
        Some((key, color))
    } else {
        None
    }
}

/// Formats the map as `<char>,<color>` lines.
impl fmt::Display for ColorMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (key, color) in &self.map {
            writeln!(f, "{},{}", key, color)?;
        }
        Ok(())
    }
}

impl FromStr for ColorMap {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Ok(Self::load(s))
    }
}
