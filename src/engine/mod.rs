// Engine modules: timing, physics, input, assets

pub mod assets;
pub mod clock;
pub mod cooldown;
pub mod game_loop;
pub mod input;
pub mod physics;
