use core::fmt;

use crate::colors::ColorMap;
use crate::error::Result;
use crate::grid::ArtGrid;
use crate::render::Conversion;

/// Name of the built-in art.
pub const DEFAULT_NAME: &str = "default";

/// The currently loaded art together with its color map.
///
/// Loading replaces the whole session; nothing is mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    name: String,
    art: ArtGrid,
    color_map: ColorMap,
}

impl Session {
    pub fn new(name: impl Into<String>, art: ArtGrid, color_map: ColorMap) -> Self {
        Self {
            name: name.into(),
            art,
            color_map,
        }
    }

    /// Replaces the art and its color map with freshly parsed ones.
    pub fn load(&mut self, name: impl Into<String>, art_text: &str, map_text: &str) {
        *self = Self::new(name, ArtGrid::load(art_text), ColorMap::load(map_text));
        log::debug!("session switched to '{}'", self.name);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn art(&self) -> &ArtGrid {
        &self.art
    }

    pub fn color_map(&self) -> &ColorMap {
        &self.color_map
    }

    /// Renders the current art with its color map.
    pub fn convert(&self) -> Result<Conversion> {
        Conversion::new(&self.art, &self.color_map)
    }

    pub fn info(&self) -> ArtInfo {
        ArtInfo {
            height: self.art.height(),
            width: self.art.width(),
            unique_chars: self.art.unique_chars().iter().copied().collect(),
            num_chars: self.art.num_chars(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_NAME, ArtGrid::default(), ColorMap::default())
    }
}

/// Statistics about a piece of art.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtInfo {
    pub height: usize,
    pub width: usize,
    pub unique_chars: Vec<char>,
    pub num_chars: usize,
}

impl fmt::Display for ArtInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let used: Vec<String> = self.unique_chars.iter().map(char::to_string).collect();
        writeln!(f, "height: {}", self.height)?;
        writeln!(f, "width: {}", self.width)?;
        writeln!(f, "characters used: [{}]", used.join(", "))?;
        writeln!(f, "total characters: {}", self.num_chars)
    }
}
