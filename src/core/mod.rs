// Core types shared by engine and game code

pub mod math;
pub mod rect;

pub use rect::Rect;
