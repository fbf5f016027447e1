use std::io::Cursor;
use std::str::FromStr;

use image::{ImageFormat, Rgb, RgbImage};

use crate::colors::Color;
use crate::error::{Error, Result};
use crate::render::{HexGrid, PixelBuffer};

fn to_rgb(color: Color) -> Rgb<u8> {
    Rgb([color.r, color.g, color.b])
}

fn dimension(v: usize) -> Result<u32> {
    u32::try_from(v).map_err(|_| Error::Encode(format!("dimension {} is too large", v)))
}

/// Encodes the buffer as an 8-bit RGB png, one pixel per cell.
///
/// An empty buffer is written as a single default-colored pixel since png
/// cannot hold a zero-sized image.
pub fn encode_image(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    let image = if buffer.is_empty() {
        RgbImage::from_pixel(1, 1, to_rgb(Color::default()))
    } else {
        let width = dimension(buffer.width())?;
        let height = dimension(buffer.height())?;
        let mut image = RgbImage::new(width, height);
        for (i, color) in buffer.pixels().iter().enumerate() {
            let x = (i % buffer.width()) as u32;
            let y = (i / buffer.width()) as u32;
            image.put_pixel(x, y, to_rgb(*color));
        }
        image
    };
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    log::debug!(
        "encoded {}x{} png ({} bytes)",
        image.width(),
        image.height(),
        bytes.len()
    );
    Ok(bytes)
}

/// Writes one line per row with codes separated by single spaces.
/// Lines carry no trailing space and each ends with `\n`.
pub fn encode_hex_text(grid: &HexGrid) -> String {
    let mut text = String::with_capacity(grid.height() * (grid.width() * 8 + 1));
    for row in grid.rows() {
        text += &row.join(" ");
        text.push('\n');
    }
    text
}

/// Parses text written by [`encode_hex_text`].
///
/// Tokens may be separated by any whitespace and blank lines are ignored.
/// Codes are normalized to uppercase.
pub fn decode_hex_text(text: &str) -> Result<HexGrid> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        let row = line
            .split_whitespace()
            .map(|token| token.parse::<Color>().map(|c| c.to_string()))
            .collect::<Result<Vec<_>>>()?;
        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(Error::WidthMismatch);
            }
        }
        rows.push(row);
    }
    Ok(HexGrid { rows })
}

impl FromStr for HexGrid {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        decode_hex_text(s)
    }
}
