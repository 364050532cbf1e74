// Player character: input-driven action state machine

use glam::Vec2;
use log::debug;

use super::animation::AnimationSet;
use super::entity::{Entity, SpriteType};
use super::status::{Facing, PlayerStatus};
use super::weapon::{AttackHandler, WeaponData, WEAPON_DATA};
use crate::core::Rect;
use crate::engine::assets::FrameHandle;
use crate::engine::clock::Clock;
use crate::engine::cooldown::Cooldown;
use crate::engine::input::{Action, PlayerInput};
use crate::engine::physics::ObstacleSet;
use crate::game::error::EntityError;
use crate::game::settings::{
    ATTACK_WINDOW_MS, PLAYER_ANIMATION_SPEED, PLAYER_HITBOX_INSET, PLAYER_SIZE,
    ROLL_COOLDOWN_MS, ROLL_RECOVERY_SPEED_FACTOR, ROLL_SPEED_FACTOR, ROLL_WINDOW_MS,
    WEAPON_SWITCH_COOLDOWN_MS,
};
use crate::game::stats::{PlayerStats, StatKind, PLAYER_MAX_STATS};

/// The player character
#[derive(Debug)]
pub struct Player {
    entity: Entity,
    status: PlayerStatus,

    // Stats
    stats: PlayerStats,
    health: f32,
    energy: f32,
    exp: u32,

    // Weapon
    weapon_index: usize,
    can_switch_weapons: bool,
    switch_timer: Cooldown,

    // Attack
    attacking: bool,
    attack_timer: Cooldown,

    // Roll
    rolling: bool,
    invulnerable: bool,
    /// Set when a roll ends; blocks the next roll and slows the player
    roll_used: bool,
    roll_timer: Cooldown,
    roll_recovery_timer: Cooldown,
}

impl Player {
    /// Create the player with its display rect's top-left at `top_left`.
    ///
    /// Fails unless `animations` covers every facing/activity combination.
    pub fn new(top_left: Vec2, animations: AnimationSet) -> Result<Self, EntityError> {
        animations.require(PlayerStatus::all().map(|status| status.to_string()))?;

        let status = PlayerStatus::default();
        let entity = Entity::new(
            SpriteType::Player,
            Rect::from_top_left(top_left, PLAYER_SIZE),
            PLAYER_HITBOX_INSET,
            animations,
            PLAYER_ANIMATION_SPEED,
            &status.to_string(),
        )?;
        let stats = PlayerStats::default();

        Ok(Self {
            entity,
            status,
            health: stats.health,
            energy: stats.energy,
            stats,
            exp: 0,
            weapon_index: 0,
            can_switch_weapons: true,
            switch_timer: Cooldown::new(),
            attacking: false,
            attack_timer: Cooldown::new(),
            rolling: false,
            invulnerable: false,
            roll_used: false,
            roll_timer: Cooldown::new(),
            roll_recovery_timer: Cooldown::new(),
        })
    }

    /// Run one frame: input, cooldowns, status, animation, movement.
    ///
    /// The order matters: expired timers must be cleared before the status
    /// is derived, and the animation must match the status it moves with.
    pub fn update(
        &mut self,
        input: &PlayerInput,
        clock: &dyn Clock,
        obstacles: &ObstacleSet,
        attacks: &mut dyn AttackHandler,
    ) -> Result<(), EntityError> {
        self.input(input, clock, attacks);
        self.cooldowns(clock, attacks);
        self.derive_status();
        self.entity.animate(&self.status.to_string())?;
        self.entity.move_by(self.current_speed(), obstacles);
        Ok(())
    }

    fn input(&mut self, input: &PlayerInput, clock: &dyn Clock, attacks: &mut dyn AttackHandler) {
        // A roll keeps its momentum whatever is held
        if self.rolling {
            self.entity.body.direction = self.status.facing.unit();
            return;
        }

        self.entity.body.direction = Vec2::ZERO;

        if self.attacking {
            return;
        }

        // Later keys overwrite the facing of earlier ones
        let mut direction = Vec2::ZERO;
        if input.is_pressed(Action::MoveUp) {
            direction.y -= 1.0;
            self.status.face(Facing::Up);
        }
        if input.is_pressed(Action::MoveDown) {
            direction.y += 1.0;
            self.status.face(Facing::Down);
        }
        if input.is_pressed(Action::MoveLeft) {
            direction.x -= 1.0;
            self.status.face(Facing::Left);
        }
        if input.is_pressed(Action::MoveRight) {
            direction.x += 1.0;
            self.status.face(Facing::Right);
        }
        self.entity.body.direction = direction;

        if input.is_pressed(Action::Attack) {
            self.attacking = true;
            self.attack_timer.arm(clock.now_ms());
            self.entity.body.direction = Vec2::ZERO;
            debug!("Player attacks with {}", self.weapon().name);
            attacks.create_attack(self);
            return;
        }

        if input.is_pressed(Action::Roll) && !self.roll_used {
            self.rolling = true;
            self.invulnerable = true;
            self.roll_timer.arm(clock.now_ms());
            debug!("Player rolls {}", self.status.facing.as_str());
        }

        if input.is_pressed(Action::SwitchWeapon) && self.can_switch_weapons {
            self.can_switch_weapons = false;
            self.switch_timer.arm(clock.now_ms());
            self.weapon_index = (self.weapon_index + 1) % WEAPON_DATA.len();
            debug!("Player switched to {}", self.weapon().name);
        }
    }

    fn cooldowns(&mut self, clock: &dyn Clock, attacks: &mut dyn AttackHandler) {
        if self.attacking && self.attack_timer.expired(clock.now_ms(), self.attack_window_ms()) {
            self.attacking = false;
            self.status.end_attack();
            attacks.destroy_attack();
        }

        if self.rolling && self.roll_timer.expired(clock.now_ms(), ROLL_WINDOW_MS) {
            self.rolling = false;
            self.status.end_roll();
            self.roll_used = true;
            self.invulnerable = false;
            self.roll_recovery_timer.arm(clock.now_ms());
        }

        if self.roll_used && self.roll_recovery_timer.expired(clock.now_ms(), ROLL_COOLDOWN_MS) {
            self.roll_used = false;
        }

        if !self.can_switch_weapons
            && self.switch_timer.expired(clock.now_ms(), WEAPON_SWITCH_COOLDOWN_MS)
        {
            self.can_switch_weapons = true;
        }
    }

    fn derive_status(&mut self) {
        if self.entity.direction() == Vec2::ZERO {
            self.status.settle_idle();
        }
        if self.attacking {
            self.status.begin_attack();
        }
        if self.rolling {
            self.status.begin_roll();
        }
    }

    /// Base speed with the roll boost and the post-roll slowdown applied
    pub fn current_speed(&self) -> f32 {
        let mut speed = self.stats.speed;
        // Not an else-if: each modifier follows its own flag
        if self.rolling {
            speed *= ROLL_SPEED_FACTOR;
        }
        if self.roll_used {
            speed *= ROLL_RECOVERY_SPEED_FACTOR;
        }
        speed
    }

    /// How long an attack with the current weapon stays active
    pub fn attack_window_ms(&self) -> u64 {
        ATTACK_WINDOW_MS + self.weapon().cooldown_ms
    }
}

// Progression and read access for drawing and the HUD
#[allow(dead_code)]
impl Player {
    /// Raise a stat, capped at its maximum. Returns the new value.
    pub fn upgrade(&mut self, kind: StatKind, amount: f32) -> f32 {
        self.stats.raise(kind, amount, &PLAYER_MAX_STATS)
    }

    pub fn gain_exp(&mut self, amount: u32) {
        self.exp = self.exp.saturating_add(amount);
    }

    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn energy(&self) -> f32 {
        self.energy
    }

    pub fn exp(&self) -> u32 {
        self.exp
    }

    pub fn weapon_index(&self) -> usize {
        self.weapon_index
    }

    pub fn weapon(&self) -> &'static WeaponData {
        &WEAPON_DATA[self.weapon_index]
    }

    pub fn is_attacking(&self) -> bool {
        self.attacking
    }

    pub fn is_rolling(&self) -> bool {
        self.rolling
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable
    }

    pub fn roll_used(&self) -> bool {
        self.roll_used
    }

    pub fn can_switch_weapons(&self) -> bool {
        self.can_switch_weapons
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
