// Math utilities and helper functions

use glam::Vec2;

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Distance from `from` to `to`, and the unit vector pointing that way.
///
/// Coincident points give a zero direction instead of a NaN one.
pub fn distance_and_direction(from: Vec2, to: Vec2) -> (f32, Vec2) {
    let offset = to - from;
    let distance = offset.length();

    if distance > 0.0 {
        (distance, offset / distance)
    } else {
        (0.0, Vec2::ZERO)
    }
}
