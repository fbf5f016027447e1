use std::fs;
use std::path::Path;

use crate::colors::{Color, ColorMap};
use crate::encode::{encode_hex_text, encode_image};
use crate::error::{Error, Result};
use crate::grid::ArtGrid;

/// One RGB pixel per art cell, stored row-major.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Creates a buffer filled with `fill`.
    pub fn new(width: usize, height: usize, fill: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Returns the pixel at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// Returns row `y` as a slice.
    pub fn row(&self, y: usize) -> Option<&[Color]> {
        if y < self.height {
            Some(&self.pixels[y * self.width..(y + 1) * self.width])
        } else {
            None
        }
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}

/// Hex color codes laid out like the art, one `#RRGGBB` per cell.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct HexGrid {
    pub(crate) rows: Vec<Vec<String>>,
}

impl HexGrid {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the code at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

/// Resolves the color of one cell.
fn cell_color(grid: &ArtGrid, map: &ColorMap, row: usize, col: usize) -> Result<Color> {
    let code = map.color_for(grid.char_at(row, col)?);
    code.parse::<Color>().map_err(|_| Error::InvalidColor {
        row,
        col,
        color: code.into(),
    })
}

/// Colors every cell of `grid` with `map`, walking rows top to bottom and
/// cells left to right.
///
/// Art without rows or columns yields an empty buffer and grid, so its hex
/// text has no lines even when the art had blank rows.
pub fn render(grid: &ArtGrid, map: &ColorMap) -> Result<(PixelBuffer, HexGrid)> {
    if grid.is_empty() {
        return Ok((PixelBuffer::default(), HexGrid::default()));
    }
    let (width, height) = (grid.width(), grid.height());
    let mut pixels = PixelBuffer::new(width, height, Color::default());
    let mut rows = Vec::with_capacity(height);
    for row in 0..height {
        let mut codes = Vec::with_capacity(width);
        for col in 0..width {
            let color = cell_color(grid, map, row, col)?;
            pixels.set(col, row, color);
            codes.push(color.to_string());
        }
        rows.push(codes);
    }
    log::debug!("rendered {}x{} cells", width, height);
    Ok((pixels, HexGrid { rows }))
}

/// Renders only the pixel buffer.
pub fn render_pixels(grid: &ArtGrid, map: &ColorMap) -> Result<PixelBuffer> {
    render(grid, map).map(|(pixels, _)| pixels)
}

/// Renders only the hex grid.
pub fn render_hex(grid: &ArtGrid, map: &ColorMap) -> Result<HexGrid> {
    render(grid, map).map(|(_, hex)| hex)
}

/// Both outputs of one rendering, ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub pixels: PixelBuffer,
    pub hex: HexGrid,
}

impl Conversion {
    pub fn new(grid: &ArtGrid, map: &ColorMap) -> Result<Self> {
        let (pixels, hex) = render(grid, map)?;
        Ok(Self { pixels, hex })
    }

    pub fn to_png(&self) -> Result<Vec<u8>> {
        encode_image(&self.pixels)
    }

    pub fn to_hex_text(&self) -> String {
        encode_hex_text(&self.hex)
    }

    /// Writes the image as png.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_png()?)?;
        Ok(())
    }

    /// Writes the hex grid as text.
    pub fn save_hex<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_hex_text())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RED: Color = Color::rgb(0xff, 0, 0);
    const GREEN: Color = Color::rgb(0, 0xff, 0);

    #[test]
    fn ragged_row_uses_blank_color() {
        let grid = ArtGrid::load("AB\nC");
        let map = ColorMap::load("A,#FF0000\nB,#00FF00");
        let (pixels, hex) = render(&grid, &map).unwrap();

        assert_eq!(pixels.row(0).unwrap(), &[RED, GREEN]);
        assert_eq!(pixels.row(1).unwrap(), &[Color::WHITE, Color::WHITE]);
        assert_eq!(
            hex.rows(),
            &[
                vec!["#FF0000".to_string(), "#00FF00".to_string()],
                vec!["#FFFFFF".to_string(), "#FFFFFF".to_string()],
            ]
        );
    }

    #[test]
    fn mapped_space_colors_short_rows() {
        let grid = ArtGrid::load("AB\nC");
        let map = ColorMap::load(" ,#000000");
        let hex = render_hex(&grid, &map).unwrap();
        assert_eq!(hex.get(1, 1), Some("#000000"));
        assert_eq!(hex.get(1, 0), Some("#FFFFFF"));
    }

    #[test]
    fn pixel_orientation() {
        let grid = ArtGrid::load("A.\n..\n.A");
        let map = ColorMap::load("A,#FF0000\n.,#00FF00");
        let pixels = render_pixels(&grid, &map).unwrap();
        assert_eq!(pixels.width(), 2);
        assert_eq!(pixels.height(), 3);
        assert_eq!(pixels.get(0, 0), Some(RED));
        assert_eq!(pixels.get(1, 0), Some(GREEN));
        assert_eq!(pixels.get(1, 2), Some(RED));
        assert_eq!(pixels.get(0, 2), Some(GREEN));
        assert_eq!(pixels.get(2, 0), None);
    }

    #[test]
    fn lowercase_mapping_is_normalized() {
        let grid = ArtGrid::load("q");
        let map = ColorMap::load("q #abcdef");
        let (pixels, hex) = render(&grid, &map).unwrap();
        assert_eq!(pixels.get(0, 0), Some(Color::rgb(0xab, 0xcd, 0xef)));
        assert_eq!(hex.get(0, 0), Some("#ABCDEF"));
    }

    #[test]
    fn invalid_color_fails_the_cell() {
        let grid = ArtGrid::load("ok\nkz");
        let map = ColorMap::load("z,#12345G");
        match render(&grid, &map) {
            Err(Error::InvalidColor { row, col, color }) => {
                assert_eq!((row, col, color.as_str()), (1, 1, "#12345G"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn degenerate_grids() {
        for text in ["", "\n\n"] {
            let (pixels, hex) = render(&ArtGrid::load(text), &ColorMap::new()).unwrap();
            assert!(pixels.is_empty());
            assert!(hex.is_empty());
            assert_eq!(hex.width(), 0);
            assert_eq!(encode_hex_text(&hex), "");
        }
    }

    #[test]
    fn deterministic() {
        let grid = ArtGrid::default();
        let map = ColorMap::load("/,#101010\n\\,#202020\n_,#303030");
        assert_eq!(render(&grid, &map).unwrap(), render(&grid, &map).unwrap());
    }
}
