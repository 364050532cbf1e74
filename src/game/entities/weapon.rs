// Weapons: static weapon table and the transient attack sprite

use glam::Vec2;

use super::player::Player;
use super::status::Facing;
use crate::core::Rect;

/// Static description of a weapon
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponData {
    pub name: &'static str,
    /// Added to the base attack window
    pub cooldown_ms: u64,
    pub damage: f32,
    /// Sprite size when held pointing up or down
    pub size: Vec2,
}

/// Every weapon, in switching order
pub const WEAPON_DATA: &[WeaponData] = &[
    WeaponData {
        name: "sword",
        cooldown_ms: 100,
        damage: 15.0,
        size: Vec2::new(20.0, 48.0),
    },
    WeaponData {
        name: "lance",
        cooldown_ms: 400,
        damage: 30.0,
        size: Vec2::new(16.0, 64.0),
    },
    WeaponData {
        name: "axe",
        cooldown_ms: 300,
        damage: 20.0,
        size: Vec2::new(28.0, 44.0),
    },
    WeaponData {
        name: "rapier",
        cooldown_ms: 50,
        damage: 8.0,
        size: Vec2::new(12.0, 52.0),
    },
    WeaponData {
        name: "sai",
        cooldown_ms: 80,
        damage: 10.0,
        size: Vec2::new(16.0, 36.0),
    },
];

/// Receives the player's attack lifecycle.
///
/// `create_attack` fires on the tick an attack starts, `destroy_attack` on
/// the tick its window expires.
pub trait AttackHandler {
    fn create_attack(&mut self, attacker: &Player);
    fn destroy_attack(&mut self);
}

/// The weapon sprite shown while an attack is active
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct Weapon {
    pub data: &'static WeaponData,
    pub facing: Facing,
    pub rect: Rect,
}

impl Weapon {
    /// Place the attacker's current weapon in front of them
    pub fn new(attacker: &Player) -> Self {
        let data = attacker.weapon();
        let facing = attacker.status().facing;
        let owner = attacker.rect();

        let size = match facing {
            Facing::Left | Facing::Right => Vec2::new(data.size.y, data.size.x),
            Facing::Up | Facing::Down => data.size,
        };

        let mut rect = Rect::from_top_left(Vec2::ZERO, size);
        match facing {
            Facing::Right => {
                let anchor = owner.mid_right() + Vec2::new(0.0, 16.0);
                rect.x = anchor.x;
                rect.y = anchor.y - size.y / 2.0;
            }
            Facing::Left => {
                let anchor = owner.mid_left() + Vec2::new(0.0, 16.0);
                rect.x = anchor.x - size.x;
                rect.y = anchor.y - size.y / 2.0;
            }
            Facing::Down => {
                let anchor = owner.mid_bottom() + Vec2::new(-10.0, 0.0);
                rect.x = anchor.x - size.x / 2.0;
                rect.y = anchor.y;
            }
            Facing::Up => {
                let anchor = owner.mid_top() + Vec2::new(-10.0, 0.0);
                rect.x = anchor.x - size.x / 2.0;
                rect.y = anchor.y - size.y;
            }
        }

        Self { data, facing, rect }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weapon_table() {
        assert_eq!(WEAPON_DATA.len(), 5);
        assert_eq!(WEAPON_DATA[0].name, "sword");
        assert_eq!(WEAPON_DATA[1].cooldown_ms, 400);
    }

    #[test]
    fn test_weapon_names_unique() {
        let names: std::collections::HashSet<_> = WEAPON_DATA.iter().map(|w| w.name).collect();
        assert_eq!(names.len(), WEAPON_DATA.len());
    }
}
