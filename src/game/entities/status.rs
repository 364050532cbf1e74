// Player and enemy status tags

use glam::Vec2;
use std::fmt;

/// Which way the player looks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Up, Facing::Down, Facing::Left, Facing::Right];

    /// Unit vector in screen space (y grows downward)
    pub fn unit(self) -> Vec2 {
        match self {
            Facing::Up => Vec2::new(0.0, -1.0),
            Facing::Down => Vec2::new(0.0, 1.0),
            Facing::Left => Vec2::new(-1.0, 0.0),
            Facing::Right => Vec2::new(1.0, 0.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Facing::Up => "up",
            Facing::Down => "down",
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

/// What the player is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    Moving,
    Idle,
    Attacking,
    Rolling,
}

impl Activity {
    pub const ALL: [Activity; 4] = [
        Activity::Moving,
        Activity::Idle,
        Activity::Attacking,
        Activity::Rolling,
    ];

    /// Suffix appended to the facing in animation keys
    pub fn suffix(self) -> &'static str {
        match self {
            Activity::Moving => "",
            Activity::Idle => "_idle",
            Activity::Attacking => "_attack",
            Activity::Rolling => "_roll",
        }
    }
}

/// Facing × activity; displays as the animation key (`down_idle`, `left`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerStatus {
    pub facing: Facing,
    pub activity: Activity,
}

impl Default for PlayerStatus {
    fn default() -> Self {
        Self {
            facing: Facing::Down,
            activity: Activity::Moving,
        }
    }
}

impl PlayerStatus {
    /// Every status the player can be in
    pub fn all() -> impl Iterator<Item = PlayerStatus> {
        Facing::ALL.into_iter().flat_map(|facing| {
            Activity::ALL
                .into_iter()
                .map(move |activity| PlayerStatus { facing, activity })
        })
    }

    /// A movement key was handled: face that way and drop any suffix
    pub fn face(&mut self, facing: Facing) {
        self.facing = facing;
        self.activity = Activity::Moving;
    }

    /// Standing still without attacking or rolling counts as idle
    pub fn settle_idle(&mut self) {
        if self.activity == Activity::Moving {
            self.activity = Activity::Idle;
        }
    }

    /// Attack suffix replaces whatever suffix was there
    pub fn begin_attack(&mut self) {
        self.activity = Activity::Attacking;
    }

    pub fn begin_roll(&mut self) {
        self.activity = Activity::Rolling;
    }

    /// Strip the attack suffix, if present
    pub fn end_attack(&mut self) {
        if self.activity == Activity::Attacking {
            self.activity = Activity::Moving;
        }
    }

    /// Strip the roll suffix, if present
    pub fn end_roll(&mut self) {
        if self.activity == Activity::Rolling {
            self.activity = Activity::Moving;
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.facing.as_str(), self.activity.suffix())
    }
}

/// Enemy AI status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnemyStatus {
    #[default]
    Idle,
    Move,
    Attack,
}

impl EnemyStatus {
    pub const ALL: [EnemyStatus; 3] = [EnemyStatus::Idle, EnemyStatus::Move, EnemyStatus::Attack];

    /// Animation key
    pub fn as_str(self) -> &'static str {
        match self {
            EnemyStatus::Idle => "idle",
            EnemyStatus::Move => "move",
            EnemyStatus::Attack => "attack",
        }
    }
}

impl fmt::Display for EnemyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keys() {
        let mut status = PlayerStatus::default();
        assert_eq!(status.to_string(), "down");

        status.settle_idle();
        assert_eq!(status.to_string(), "down_idle");

        status.face(Facing::Left);
        assert_eq!(status.to_string(), "left");

        status.begin_attack();
        assert_eq!(status.to_string(), "left_attack");

        status.face(Facing::Up);
        status.begin_roll();
        assert_eq!(status.to_string(), "up_roll");
    }

    #[test]
    fn test_sixteen_distinct_keys() {
        let keys: std::collections::HashSet<String> =
            PlayerStatus::all().map(|s| s.to_string()).collect();
        assert_eq!(keys.len(), 16);
        assert!(keys.contains("right_idle"));
        assert!(keys.contains("up"));
    }

    #[test]
    fn test_every_key_has_one_facing_and_at_most_one_suffix() {
        for status in PlayerStatus::all() {
            let key = status.to_string();
            let facings = Facing::ALL
                .iter()
                .filter(|f| key.starts_with(f.as_str()))
                .count();
            let suffixes = ["_idle", "_attack", "_roll"]
                .iter()
                .filter(|s| key.contains(*s))
                .count();
            assert_eq!(facings, 1, "{}", key);
            assert!(suffixes <= 1, "{}", key);
        }
    }

    #[test]
    fn test_settle_idle_leaves_actions_alone() {
        let mut attacking = PlayerStatus {
            facing: Facing::Right,
            activity: Activity::Attacking,
        };
        attacking.settle_idle();
        assert_eq!(attacking.activity, Activity::Attacking);

        let mut rolling = PlayerStatus {
            facing: Facing::Right,
            activity: Activity::Rolling,
        };
        rolling.settle_idle();
        assert_eq!(rolling.activity, Activity::Rolling);
    }

    #[test]
    fn test_end_only_strips_own_suffix() {
        let mut status = PlayerStatus {
            facing: Facing::Down,
            activity: Activity::Rolling,
        };
        status.end_attack();
        assert_eq!(status.activity, Activity::Rolling);
        status.end_roll();
        assert_eq!(status.activity, Activity::Moving);
    }

    #[test]
    fn test_facing_units() {
        for facing in Facing::ALL {
            assert_eq!(facing.unit().length(), 1.0);
        }
        assert_eq!(Facing::Up.unit(), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_enemy_keys() {
        assert_eq!(EnemyStatus::default(), EnemyStatus::Idle);
        assert_eq!(EnemyStatus::Move.to_string(), "move");
    }
}
