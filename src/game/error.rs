// Game configuration errors
//
// All of these point at broken content (missing sprites, typos in the
// species table), never at a runtime condition the game could recover from.

use crate::engine::assets::AssetError;

#[derive(Debug, thiserror::Error)]
pub enum EntityError {
    #[error("{owner} has no animation for status '{status}'")]
    MissingAnimation { owner: String, status: String },

    #[error("Animation '{status}' of {owner} has no frames")]
    EmptyAnimation { owner: String, status: String },

    #[error("Unknown enemy species '{0}'")]
    UnknownSpecies(String),
}

/// Errors while assembling a level
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("Failed to load level layout: {0}")]
    Asset(#[from] AssetError),

    #[error("Failed to create entity: {0}")]
    Entity(#[from] EntityError),
}
