// Game setup constants

use glam::Vec2;

// Window
pub const WIDTH: u32 = 1080;
pub const HEIGHT: u32 = 680;
pub const FPS: u32 = 60;

// Map
pub const TILESIZE: f32 = 64.0;

// Player
pub const PLAYER_SIZE: Vec2 = Vec2::new(TILESIZE, TILESIZE);
pub const PLAYER_HITBOX_INSET: Vec2 = Vec2::new(0.0, -26.0);
/// Used when the map has no player cell
pub const PLAYER_DEFAULT_SPAWN: Vec2 = Vec2::new(2000.0, 1400.0);
pub const PLAYER_ANIMATION_SPEED: f32 = 0.15;

/// Base attack window; the equipped weapon's cooldown is added on top
pub const ATTACK_WINDOW_MS: u64 = 400;
pub const ROLL_WINDOW_MS: u64 = 300;
/// Recovery period after a roll ends, during which the player is slowed
pub const ROLL_COOLDOWN_MS: u64 = 800;
pub const WEAPON_SWITCH_COOLDOWN_MS: u64 = 200;

pub const ROLL_SPEED_FACTOR: f32 = 1.4;
pub const ROLL_RECOVERY_SPEED_FACTOR: f32 = 0.6;

// Enemies
pub const ENEMY_SIZE: Vec2 = Vec2::new(TILESIZE, TILESIZE);
pub const ENEMY_HITBOX_INSET: Vec2 = Vec2::new(0.0, -10.0);
pub const ENEMY_ANIMATION_SPEED: f32 = 0.15;
pub const ENEMY_ATTACK_COOLDOWN_MS: u64 = 600;
