// Asset discovery
//
// The core never decodes images. It only needs to know which frames make up
// each animation (so frame counts drive animation wrap) and which tile codes
// make up each map layer.

pub mod handle;
pub mod layout;
pub mod loader;

pub use handle::FrameHandle;
pub use layout::{LayoutError, TileLayout};
pub use loader::{AssetLoader, AssetType};

/// Supplies the ordered frames of an animation folder
/// (e.g. `player/down_idle`, `monsters/bamboo/attack`)
pub trait FrameSource {
    /// Frames in playback order; empty when the folder has none
    fn frames(&self, folder: &str) -> Vec<FrameHandle>;
}

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Malformed layout {path}: {source}")]
    Layout {
        path: String,
        #[source]
        source: LayoutError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
