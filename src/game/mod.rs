// Game-specific code built on the engine

pub mod entities;
pub mod error;
pub mod level;
pub mod settings;
pub mod stats;

pub use level::{Level, LevelLayouts};
