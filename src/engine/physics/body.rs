// Kinematic body: display rect, hitbox and movement

use glam::Vec2;

use super::collision::{resolve_axis, Axis};
use super::obstacles::ObstacleSet;
use crate::core::Rect;

/// The movable part of an entity.
///
/// `rect` is what gets drawn and Y-sorted; `hitbox` is an inset copy used for
/// collision and distance checks. Both always share the same center.
#[derive(Debug, Clone)]
pub struct Body {
    rect: Rect,
    hitbox: Rect,
    /// Unit length or zero once `move_by` has run
    pub direction: Vec2,
}

impl Body {
    /// Create a body from its display rect and the hitbox inset (as passed
    /// to [`Rect::inflate`], so negative values shrink)
    pub fn new(rect: Rect, hitbox_inset: Vec2) -> Self {
        Self {
            rect,
            hitbox: rect.inflate(hitbox_inset.x, hitbox_inset.y),
            direction: Vec2::ZERO,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn hitbox(&self) -> Rect {
        self.hitbox
    }

    pub fn center(&self) -> Vec2 {
        self.hitbox.center()
    }

    /// Advance by `speed` along `direction`, horizontal axis first.
    ///
    /// The direction is normalized in place (a zero direction stays zero).
    /// Each axis is displaced and then resolved against the obstacles before
    /// the next one moves, and the display rect follows the hitbox.
    pub fn move_by(&mut self, speed: f32, obstacles: &ObstacleSet) {
        self.direction = self.direction.normalize_or_zero();

        self.hitbox.x += self.direction.x * speed;
        resolve_axis(&mut self.hitbox, self.direction, Axis::Horizontal, obstacles);

        self.hitbox.y += self.direction.y * speed;
        resolve_axis(&mut self.hitbox, self.direction, Axis::Vertical, obstacles);

        self.rect.set_center(self.hitbox.center());
    }
}
