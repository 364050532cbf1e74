// Shared base for every animated, moving entity

use glam::Vec2;

use super::animation::{AnimationSet, Animator};
use crate::core::Rect;
use crate::engine::assets::FrameHandle;
use crate::engine::physics::{Body, ObstacleSet};
use crate::game::error::EntityError;

/// Sprite classification, used by other systems to tell entities apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteType {
    Player,
    Enemy,
}

/// Position, direction and animation state common to player and enemies.
///
/// Player and Enemy each own one and drive it from their own update.
#[derive(Debug, Clone)]
pub struct Entity {
    pub body: Body,
    #[allow(dead_code)]
    pub sprite_type: SpriteType,
    animations: AnimationSet,
    animator: Animator,
    image: FrameHandle,
}

impl Entity {
    pub fn new(
        sprite_type: SpriteType,
        rect: Rect,
        hitbox_inset: Vec2,
        animations: AnimationSet,
        animation_speed: f32,
        initial_status: &str,
    ) -> Result<Self, EntityError> {
        let image = animations.clip(initial_status)?.frame(0.0);

        Ok(Self {
            body: Body::new(rect, hitbox_inset),
            sprite_type,
            animations,
            animator: Animator::new(animation_speed),
            image,
        })
    }

    /// Move along the current direction, colliding with `obstacles`
    pub fn move_by(&mut self, speed: f32, obstacles: &ObstacleSet) {
        self.body.move_by(speed, obstacles);
    }

    /// Advance the looping animation for `status`
    pub fn animate(&mut self, status: &str) -> Result<(), EntityError> {
        let clip = self.animations.clip(status)?;
        self.image = self.animator.advance_looping(clip);
        Ok(())
    }

    /// Advance the animation for `status`, restarting at the first frame when
    /// it runs out. Returns true on the tick a cycle completes.
    pub fn animate_cycle(&mut self, status: &str) -> Result<bool, EntityError> {
        let clip = self.animations.clip(status)?;
        let (image, completed) = self.animator.advance_cycle(clip);
        self.image = image;
        Ok(completed)
    }

    /// Frame to draw this tick
    pub fn image(&self) -> FrameHandle {
        self.image
    }

    #[allow(dead_code)]
    pub fn frame_index(&self) -> f32 {
        self.animator.frame_index()
    }

    pub fn rect(&self) -> Rect {
        self.body.rect()
    }

    pub fn hitbox(&self) -> Rect {
        self.body.hitbox()
    }

    pub fn center(&self) -> Vec2 {
        self.body.center()
    }

    pub fn direction(&self) -> Vec2 {
        self.body.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::animation::tests::FixedFrames;

    fn entity(frames: usize) -> Entity {
        let animations =
            AnimationSet::load(&FixedFrames(frames), "test", "test", ["idle", "move"]).unwrap();
        Entity::new(
            SpriteType::Enemy,
            Rect::new(0.0, 0.0, 64.0, 64.0),
            Vec2::new(0.0, -10.0),
            animations,
            0.5,
            "idle",
        )
        .unwrap()
    }

    #[test]
    fn test_initial_image_is_first_frame() {
        let entity = entity(3);
        let first = entity.animations.clip("idle").unwrap().frame(0.0);
        assert_eq!(entity.image(), first);
        assert_eq!(entity.frame_index(), 0.0);
    }

    #[test]
    fn test_unknown_initial_status() {
        let animations = AnimationSet::load(&FixedFrames(1), "test", "test", ["idle"]).unwrap();
        let result = Entity::new(
            SpriteType::Player,
            Rect::new(0.0, 0.0, 64.0, 64.0),
            Vec2::ZERO,
            animations,
            0.15,
            "down_idle",
        );
        assert!(matches!(result, Err(EntityError::MissingAnimation { .. })));
    }

    #[test]
    fn test_animate_missing_status_is_error() {
        let mut entity = entity(2);
        assert!(entity.animate("attack").is_err());
    }

    #[test]
    fn test_animate_advances_image() {
        let mut entity = entity(2);
        entity.animate("move").unwrap();
        entity.animate("move").unwrap();
        let second = entity.animations.clip("move").unwrap().frame(1.0);
        assert_eq!(entity.image(), second);
    }

    #[test]
    fn test_animate_cycle_reports_completion() {
        let mut entity = entity(1);
        assert!(!entity.animate_cycle("idle").unwrap());
        assert!(entity.animate_cycle("idle").unwrap());
        assert_eq!(entity.frame_index(), 0.0);
    }
}
