// Enemy: distance-driven AI state machine

use glam::Vec2;
use log::debug;

use super::animation::AnimationSet;
use super::entity::{Entity, SpriteType};
use super::player::Player;
use super::status::EnemyStatus;
use crate::core::math::distance_and_direction;
use crate::core::Rect;
use crate::engine::assets::FrameHandle;
use crate::engine::clock::Clock;
use crate::engine::cooldown::Cooldown;
use crate::engine::physics::ObstacleSet;
use crate::game::error::EntityError;
use crate::game::settings::{
    ENEMY_ANIMATION_SPEED, ENEMY_ATTACK_COOLDOWN_MS, ENEMY_HITBOX_INSET, ENEMY_SIZE, TILESIZE,
};
use crate::game::stats::{enemy_stats, EnemyStats};

/// A monster roaming the level
#[derive(Debug)]
pub struct Enemy {
    entity: Entity,
    species: String,
    stats: &'static EnemyStats,
    health: f32,
    status: EnemyStatus,
    /// Where the enemy was placed. Idle enemies do not walk back here yet.
    spawn_position: Vec2,
    can_attack: bool,
    attack_timer: Cooldown,
}

impl Enemy {
    /// Create an enemy of `species` on the tile whose top-left is `tile_top_left`
    pub fn new(
        species: &str,
        tile_top_left: Vec2,
        animations: AnimationSet,
    ) -> Result<Self, EntityError> {
        let stats = enemy_stats(species)?;
        animations.require(EnemyStatus::ALL.map(EnemyStatus::as_str))?;

        let spawn_position = tile_top_left + Vec2::splat(TILESIZE / 2.0);
        let status = EnemyStatus::default();
        let entity = Entity::new(
            SpriteType::Enemy,
            Rect::from_center(spawn_position, ENEMY_SIZE),
            ENEMY_HITBOX_INSET,
            animations,
            ENEMY_ANIMATION_SPEED,
            status.as_str(),
        )?;

        Ok(Self {
            entity,
            species: species.to_string(),
            stats,
            health: stats.health,
            status,
            spawn_position,
            can_attack: true,
            attack_timer: Cooldown::new(),
        })
    }

    /// AI pass: pick a status from the distance to the player and act on it
    pub fn enemy_update(&mut self, player: &Player, clock: &dyn Clock) {
        self.think(player.center(), clock.now_ms());
    }

    fn think(&mut self, target: Vec2, now: u64) {
        let (distance, direction) = distance_and_direction(self.entity.center(), target);

        let status = if distance >= self.stats.max_follow_distance {
            EnemyStatus::Idle
        } else if distance <= self.stats.attack_radius && self.can_attack {
            self.attack_timer.arm(now);
            EnemyStatus::Attack
        } else if distance <= self.stats.notice_radius {
            EnemyStatus::Move
        } else {
            EnemyStatus::Idle
        };

        if status != self.status {
            debug!(
                "{} at {:?}: {} -> {}",
                self.species,
                self.entity.center(),
                self.status,
                status
            );
            self.status = status;
        }

        match self.status {
            // Attacking keeps the last heading; the generic pass still moves along it
            EnemyStatus::Attack => {}
            EnemyStatus::Move => self.entity.body.direction = direction,
            EnemyStatus::Idle => self.entity.body.direction = Vec2::ZERO,
        }
    }

    /// Generic pass: move, animate, then resolve the attack cooldown
    pub fn update(&mut self, clock: &dyn Clock, obstacles: &ObstacleSet) -> Result<(), EntityError> {
        self.entity.move_by(self.stats.speed, obstacles);
        self.animate()?;
        self.cooldown(clock);
        Ok(())
    }

    fn animate(&mut self) -> Result<(), EntityError> {
        let completed = self.entity.animate_cycle(self.status.as_str())?;
        // A finished attack animation spends the attack
        if completed && self.status == EnemyStatus::Attack {
            self.can_attack = false;
        }
        Ok(())
    }

    fn cooldown(&mut self, clock: &dyn Clock) {
        if !self.can_attack
            && self
                .attack_timer
                .expired(clock.now_ms(), ENEMY_ATTACK_COOLDOWN_MS)
        {
            self.can_attack = true;
        }
    }
}

// Read access for drawing and the HUD
#[allow(dead_code)]
impl Enemy {
    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn stats(&self) -> &'static EnemyStats {
        self.stats
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn status(&self) -> EnemyStatus {
        self.status
    }

    pub fn can_attack(&self) -> bool {
        self.can_attack
    }

    pub fn spawn_position(&self) -> Vec2 {
        self.spawn_position
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn rect(&self) -> Rect {
        self.entity.rect()
    }

    pub fn hitbox(&self) -> Rect {
        self.entity.hitbox()
    }

    pub fn center(&self) -> Vec2 {
        self.entity.center()
    }

    pub fn direction(&self) -> Vec2 {
        self.entity.direction()
    }

    pub fn image(&self) -> FrameHandle {
        self.entity.image()
    }
}
