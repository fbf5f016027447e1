//! Convert ascii art into png images and hex color grids.
//!
//! ```
//! use artii::{render, encode_hex_text, ArtGrid, ColorMap};
//!
//! let art = ArtGrid::load("AB\nC");
//! let map = ColorMap::load("A,#FF0000\nB,#00FF00");
//! let (_, hex) = render(&art, &map).unwrap();
//! assert_eq!(encode_hex_text(&hex), "#FF0000 #00FF00\n#FFFFFF #FFFFFF\n");
//! ```
pub mod colors;
pub mod encode;
pub mod error;
pub mod grid;
pub mod library;
pub mod render;
pub mod session;

pub use colors::{Color, ColorMap, ParseWarning, WarningKind, DEFAULT_COLOR};
pub use encode::{decode_hex_text, encode_hex_text, encode_image};
pub use error::{Error, Result};
pub use grid::{ArtGrid, BLANK, DEFAULT_ART};
pub use library::Library;
pub use render::{render, render_hex, render_pixels, Conversion, HexGrid, PixelBuffer};
pub use session::{ArtInfo, Session};
