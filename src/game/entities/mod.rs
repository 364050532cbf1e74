// Player, enemies and what they share

pub mod animation;
pub mod enemy;
pub mod entity;
pub mod player;
pub mod status;
pub mod weapon;

pub use animation::AnimationSet;
pub use enemy::Enemy;
pub use player::Player;
pub use status::{EnemyStatus, PlayerStatus};
pub use weapon::{AttackHandler, Weapon};
