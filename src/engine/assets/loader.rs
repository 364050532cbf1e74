// Asset discovery on disk

use super::handle::{AssetId, FrameHandle};
use super::layout::TileLayout;
use super::{AssetError, FrameSource};
use std::path::{Path, PathBuf};

/// Supported asset types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetType {
    /// Sprite frames, one folder per animation
    Graphics,
    /// Tile layouts exported as CSV
    Map,
}

impl AssetType {
    /// Get the default directory for this asset type
    pub fn default_directory(&self) -> &'static str {
        match self {
            AssetType::Graphics => "graphics",
            AssetType::Map => "map",
        }
    }

    /// Get supported file extensions for this asset type
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            AssetType::Graphics => &["png"],
            AssetType::Map => &["csv"],
        }
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| self.extensions().contains(&ext.to_string_lossy().as_ref()))
            .unwrap_or(false)
    }
}

/// Asset loader responsible for finding and reading asset files
#[derive(Debug, Clone)]
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, asset_type: AssetType, name: &str) -> PathBuf {
        self.base_path
            .join(asset_type.default_directory())
            .join(name)
    }

    /// Check if an asset exists
    pub fn exists(&self, asset_type: AssetType, name: &str) -> bool {
        self.resolve_path(asset_type, name).exists()
    }

    /// Read and parse a tile layout from the map directory
    pub fn load_layout(&self, name: &str) -> Result<TileLayout, AssetError> {
        let path = self.resolve_path(AssetType::Map, name);

        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }

        let text = std::fs::read_to_string(&path)?;
        TileLayout::parse(&text).map_err(|source| AssetError::Layout {
            path: path.to_string_lossy().to_string(),
            source,
        })
    }

    /// List the frames of one animation folder.
    ///
    /// Numbered files (`0.png`, `1.png`, ..., `10.png`) come first in numeric
    /// order; anything else follows in file-name order.
    pub fn list_frames(&self, folder: &str) -> Result<Vec<FrameHandle>, AssetError> {
        let dir = self.resolve_path(AssetType::Graphics, folder);

        if !dir.is_dir() {
            return Err(AssetError::NotFound(dir.to_string_lossy().to_string()));
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_file() && AssetType::Graphics.accepts(&path) {
                files.push(path);
            }
        }
        files.sort_by_key(|path| frame_order_key(path));

        Ok(files
            .iter()
            .map(|path| FrameHandle::new(AssetId::from_path(&path.to_string_lossy())))
            .collect())
    }
}

/// Numbered frames first, by number; then the rest by name
fn frame_order_key(path: &Path) -> (bool, u64, PathBuf) {
    let number = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(|stem| stem.parse::<u64>().ok());
    (number.is_none(), number.unwrap_or(0), path.to_path_buf())
}

impl FrameSource for AssetLoader {
    fn frames(&self, folder: &str) -> Vec<FrameHandle> {
        match self.list_frames(folder) {
            Ok(frames) => frames,
            Err(e) => {
                log::warn!("Could not list frames for '{}': {}", folder, e);
                Vec::new()
            }
        }
    }
}
