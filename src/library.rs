use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::colors::ColorMap;
use crate::error::{Error, Result};
use crate::grid::ArtGrid;
use crate::session::Session;

/// On-disk layout of art sources and generated files.
///
/// ```text
/// <root>/ascii-art-files/<name>.txt      art
/// <root>/ascii-art-files/<name>.map      color mapping
/// <root>/generated-png-files/<name>.png
/// <root>/generated-hex-files/<name>.hex
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Library {
    pub root: PathBuf,
    pub art_dir: String,
    pub png_dir: String,
    pub hex_dir: String,
}

impl Default for Library {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            art_dir: "ascii-art-files".into(),
            png_dir: "generated-png-files".into(),
            hex_dir: "generated-hex-files".into(),
        }
    }
}

impl Library {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn art_path(&self, name: &str) -> PathBuf {
        self.root.join(&self.art_dir).join(format!("{}.txt", name))
    }

    pub fn map_path(&self, name: &str) -> PathBuf {
        self.root.join(&self.art_dir).join(format!("{}.map", name))
    }

    pub fn png_path(&self, name: &str) -> PathBuf {
        self.root.join(&self.png_dir).join(format!("{}.png", name))
    }

    pub fn hex_path(&self, name: &str) -> PathBuf {
        self.root.join(&self.hex_dir).join(format!("{}.hex", name))
    }

    /// Returns the sorted names of all `.txt` art files.
    pub fn available_art(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(self.root.join(&self.art_dir))? {
            let path = entry?.path();
            if !path.is_file() || path.extension().map_or(true, |ext| ext != "txt") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn art_exists(&self, name: &str) -> Result<bool> {
        Ok(self.available_art()?.iter().any(|n| n == name))
    }

    /// Loads the named art and its color map.
    /// A missing map file leaves every cell at the default color.
    pub fn load_session(&self, name: &str) -> Result<Session> {
        let art = ArtGrid::from_file(self.art_path(name))?;
        let map = match ColorMap::from_file(self.map_path(name)) {
            Err(Error::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                log::warn!("no color map for '{}', using default colors", name);
                ColorMap::default()
            }
            map => map?,
        };
        Ok(Session::new(name, art, map))
    }

    /// Creates the png and hex output directories.
    pub fn ensure_output_dirs(&self) -> Result<()> {
        fs::create_dir_all(self.root.join(&self.png_dir))?;
        fs::create_dir_all(self.root.join(&self.hex_dir))?;
        Ok(())
    }
}
