use core::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use ordermap::OrderSet;

use crate::error::{Error, Result};

/// Character read from cells past the end of a short row.
pub const BLANK: char = ' ';

/// Art shown before any file is loaded.
pub const DEFAULT_ART: &str = concat!(
    "      _           _\n",
    "     / \\_______ /|_\\\n",
    "    /          /_/ \\__\n",
    "   /             \\_/ /\n",
    " _|_              |/|_\n",
    " _|_  O    _    O  _|_\n",
    " _|_      (_)      _|_\n",
    "  \\                 /\n",
    "   _\\_____________/_\n",
    "  /  \\/  (___)  \\/  \\\n",
    "  \\__(  o     o  )__/",
);

/// A piece of ascii art split into rows of characters.
///
/// Rows keep their literal length, so the grid may be ragged. `width` is the
/// longest row and every cell past a shorter row's end reads as [`BLANK`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtGrid {
    rows: Vec<Vec<char>>,
    width: usize,
    num_chars: usize,
    unique_chars: OrderSet<char>,
}

impl ArtGrid {
    /// Splits text into rows on `\n` / `\r\n`.
    /// A trailing newline does not start an extra row.
    pub fn load(text: &str) -> Self {
        let rows: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let num_chars = rows.iter().map(Vec::len).sum();
        let unique_chars = rows.iter().flatten().copied().collect();
        log::debug!(
            "loaded {}x{} art with {} characters",
            width,
            rows.len(),
            num_chars
        );
        Self {
            rows,
            width,
            num_chars,
            unique_chars,
        }
    }

    /// Reads art from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::load(&fs::read_to_string(path)?))
    }

    /// Reads art from any reader.
    pub fn from_reader<R: Read>(mut r: R) -> Result<Self> {
        let mut text = String::new();
        r.read_to_string(&mut text)?;
        Ok(Self::load(&text))
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns the length of the longest row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the total count of characters over all rows.
    pub fn num_chars(&self) -> usize {
        self.num_chars
    }

    /// Returns distinct characters in order of first occurrence.
    pub fn unique_chars(&self) -> &OrderSet<char> {
        &self.unique_chars
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Option<&[char]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Returns the character at `(row, col)`.
    ///
    /// Any column past the end of the row yields [`BLANK`]; a row past
    /// the last one is [`Error::OutOfRange`].
    pub fn char_at(&self, row: usize, col: usize) -> Result<char> {
        match self.rows.get(row) {
            Some(cells) => Ok(cells.get(col).copied().unwrap_or(BLANK)),
            None => Err(Error::OutOfRange {
                row,
                col,
                height: self.height(),
                width: self.width,
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.rows.is_empty()
    }
}

impl Default for ArtGrid {
    fn default() -> Self {
        Self::load(DEFAULT_ART)
    }
}

/// Writes every row followed by a newline.
impl fmt::Display for ArtGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl FromStr for ArtGrid {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Ok(Self::load(s))
    }
}
