// Player and enemy stats
//
// Static tables only: looked up by reference, never mutated at runtime.

use super::error::EntityError;

/// The player's upgradable stats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerStats {
    pub health: f32,
    pub energy: f32,
    /// Base melee damage, added to the weapon's
    pub attack: f32,
    /// Pixels per frame
    pub speed: f32,
}

/// Starting stats of a fresh character
pub const PLAYER_BASE_STATS: PlayerStats = PlayerStats {
    health: 100.0,
    energy: 60.0,
    attack: 10.0,
    speed: 5.0,
};

/// Upgrade caps
pub const PLAYER_MAX_STATS: PlayerStats = PlayerStats {
    health: 300.0,
    energy: 140.0,
    attack: 20.0,
    speed: 10.0,
};

/// Names one of the fields of [`PlayerStats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Health,
    Energy,
    Attack,
    Speed,
}

impl Default for PlayerStats {
    fn default() -> Self {
        PLAYER_BASE_STATS
    }
}

impl PlayerStats {
    pub fn get(&self, kind: StatKind) -> f32 {
        match kind {
            StatKind::Health => self.health,
            StatKind::Energy => self.energy,
            StatKind::Attack => self.attack,
            StatKind::Speed => self.speed,
        }
    }

    fn get_mut(&mut self, kind: StatKind) -> &mut f32 {
        match kind {
            StatKind::Health => &mut self.health,
            StatKind::Energy => &mut self.energy,
            StatKind::Attack => &mut self.attack,
            StatKind::Speed => &mut self.speed,
        }
    }

    /// Raise a stat by `amount`, never past the matching cap in `max`.
    /// Returns the new value.
    pub fn raise(&mut self, kind: StatKind, amount: f32, max: &PlayerStats) -> f32 {
        let value = self.get_mut(kind);
        *value = crate::core::math::clamp(*value + amount, 0.0, max.get(kind));
        *value
    }
}

/// How an enemy's attack is flavoured (drives effects and sounds)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackType {
    Slash,
    Claw,
    Thunder,
    LeafAttack,
}

/// Per-species enemy stats
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyStats {
    pub health: f32,
    /// Experience granted when defeated
    pub exp: u32,
    pub damage: f32,
    pub attack_type: AttackType,
    pub speed: f32,
    pub resistance: f32,
    pub attack_radius: f32,
    pub notice_radius: f32,
    /// Beyond this distance the enemy gives up the chase
    pub max_follow_distance: f32,
}

pub const ENEMY_DATA: &[(&str, EnemyStats)] = &[
    (
        "squid",
        EnemyStats {
            health: 100.0,
            exp: 100,
            damage: 20.0,
            attack_type: AttackType::Slash,
            speed: 3.0,
            resistance: 3.0,
            attack_radius: 80.0,
            notice_radius: 360.0,
            max_follow_distance: 600.0,
        },
    ),
    (
        "raccoon",
        EnemyStats {
            health: 300.0,
            exp: 250,
            damage: 40.0,
            attack_type: AttackType::Claw,
            speed: 2.0,
            resistance: 3.0,
            attack_radius: 120.0,
            notice_radius: 400.0,
            max_follow_distance: 700.0,
        },
    ),
    (
        "spirit",
        EnemyStats {
            health: 100.0,
            exp: 110,
            damage: 8.0,
            attack_type: AttackType::Thunder,
            speed: 4.0,
            resistance: 3.0,
            attack_radius: 60.0,
            notice_radius: 350.0,
            max_follow_distance: 550.0,
        },
    ),
    (
        "bamboo",
        EnemyStats {
            health: 70.0,
            exp: 120,
            damage: 6.0,
            attack_type: AttackType::LeafAttack,
            speed: 3.0,
            resistance: 3.0,
            attack_radius: 50.0,
            notice_radius: 300.0,
            max_follow_distance: 500.0,
        },
    ),
];

/// Look up a species in [`ENEMY_DATA`]
pub fn enemy_stats(species: &str) -> Result<&'static EnemyStats, EntityError> {
    ENEMY_DATA
        .iter()
        .find(|(name, _)| *name == species)
        .map(|(_, stats)| stats)
        .ok_or_else(|| EntityError::UnknownSpecies(species.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = PlayerStats::default();
        assert_eq!(stats.speed, 5.0);
        assert_eq!(stats.health, 100.0);
    }

    #[test]
    fn test_base_stats_within_caps() {
        for kind in [
            StatKind::Health,
            StatKind::Energy,
            StatKind::Attack,
            StatKind::Speed,
        ] {
            assert!(PLAYER_BASE_STATS.get(kind) <= PLAYER_MAX_STATS.get(kind));
        }
    }

    #[test]
    fn test_raise_is_capped() {
        let mut stats = PlayerStats::default();
        assert_eq!(stats.raise(StatKind::Speed, 2.0, &PLAYER_MAX_STATS), 7.0);
        assert_eq!(stats.raise(StatKind::Speed, 100.0, &PLAYER_MAX_STATS), 10.0);
        assert_eq!(stats.speed, 10.0);
        assert_eq!(stats.attack, 10.0);
    }

    #[test]
    fn test_enemy_lookup() {
        let bamboo = enemy_stats("bamboo").unwrap();
        assert_eq!(bamboo.attack_radius, 50.0);
        assert_eq!(bamboo.notice_radius, 300.0);
        assert_eq!(bamboo.attack_type, AttackType::LeafAttack);
    }

    #[test]
    fn test_unknown_species() {
        assert!(matches!(
            enemy_stats("dragon"),
            Err(EntityError::UnknownSpecies(name)) if name == "dragon"
        ));
    }

    #[test]
    fn test_radii_are_ordered() {
        for (name, stats) in ENEMY_DATA {
            assert!(
                stats.attack_radius <= stats.notice_radius
                    && stats.notice_radius <= stats.max_follow_distance,
                "{} has inconsistent radii",
                name
            );
        }
    }
}
