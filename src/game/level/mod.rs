// Level: builds the map and entities, and runs them each frame

pub mod tile;

pub use tile::{Tile, TileKind};

use glam::Vec2;
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::engine::assets::{AssetError, AssetLoader, AssetType, FrameSource, TileLayout};
use crate::engine::clock::Clock;
use crate::engine::input::PlayerInput;
use crate::engine::physics::ObstacleSet;
use crate::game::entities::{
    AnimationSet, AttackHandler, Enemy, EnemyStatus, Player, PlayerStatus, Weapon,
};
use crate::game::error::{EntityError, LevelError};
use crate::game::settings::{PLAYER_DEFAULT_SPAWN, TILESIZE};

/// Entity layer code that places the player
pub const PLAYER_CODE: i32 = 394;

/// Species spawned for an entity layer code
pub fn species_for_code(code: i32) -> &'static str {
    match code {
        390 => "bamboo",
        391 => "spirit",
        392 => "raccoon",
        _ => "squid",
    }
}

/// The map layers of one level
#[derive(Debug, Clone, Default)]
pub struct LevelLayouts {
    pub boundary: TileLayout,
    pub grass: TileLayout,
    pub objects: TileLayout,
    /// Player and enemy placement; optional so bare maps still load
    pub entities: Option<TileLayout>,
}

impl LevelLayouts {
    /// Read every layer from the asset root's `map/` directory
    pub fn load(loader: &AssetLoader) -> Result<Self, AssetError> {
        let entities = if loader.exists(AssetType::Map, "map_Entities.csv") {
            Some(loader.load_layout("map_Entities.csv")?)
        } else {
            None
        };

        Ok(Self {
            boundary: loader.load_layout("map_FloorBlocks.csv")?,
            grass: loader.load_layout("map_Grass.csv")?,
            objects: loader.load_layout("map_Objects.csv")?,
            entities,
        })
    }
}

/// Holds the weapon of the attack in progress
#[derive(Debug, Default)]
pub struct AttackSlot {
    current: Option<Weapon>,
}

impl AttackSlot {
    pub fn current(&self) -> Option<&Weapon> {
        self.current.as_ref()
    }
}

impl AttackHandler for AttackSlot {
    fn create_attack(&mut self, attacker: &Player) {
        self.current = Some(Weapon::new(attacker));
    }

    fn destroy_attack(&mut self) {
        self.current = None;
    }
}

/// A loaded level: static obstacles plus the entities moving among them
#[derive(Debug)]
pub struct Level {
    tiles: Vec<Tile>,
    obstacles: ObstacleSet,
    player: Player,
    enemies: Vec<Enemy>,
    attack: AttackSlot,
}

impl Level {
    /// Create tiles from the map layers, then the player and enemies.
    ///
    /// `rng` picks the grass variant of each grass tile.
    pub fn build(
        layouts: &LevelLayouts,
        frames: &dyn FrameSource,
        rng: &mut impl Rng,
    ) -> Result<Self, LevelError> {
        let tiles = build_tiles(layouts, frames, rng);
        let obstacles: ObstacleSet = tiles.iter().map(|tile| tile.hitbox).collect();

        let mut player_spawn = None;
        let mut enemies = Vec::new();
        if let Some(entities) = &layouts.entities {
            for (row, column, code) in entities.occupied() {
                let position = cell_position(row, column);
                if code == PLAYER_CODE {
                    if player_spawn.is_some() {
                        debug!("Extra player cell at row {} column {} ignored", row, column);
                        continue;
                    }
                    player_spawn = Some(position);
                } else {
                    let species = species_for_code(code);
                    let animations = AnimationSet::load(
                        frames,
                        species,
                        &format!("monsters/{}", species),
                        EnemyStatus::ALL.map(EnemyStatus::as_str),
                    )?;
                    enemies.push(Enemy::new(species, position, animations)?);
                }
            }
        }

        let animations = AnimationSet::load(
            frames,
            "player",
            "player",
            PlayerStatus::all().map(|status| status.to_string()),
        )?;
        let player = Player::new(player_spawn.unwrap_or(PLAYER_DEFAULT_SPAWN), animations)?;

        info!(
            "Level built: {} tiles, {} enemies, player at {:?}",
            tiles.len(),
            enemies.len(),
            player.rect().top_left()
        );

        Ok(Self {
            tiles,
            obstacles,
            player,
            enemies,
            attack: AttackSlot::default(),
        })
    }

    /// Run one frame: player, then every enemy's AI, then every enemy's
    /// movement, animation and cooldowns
    pub fn update(&mut self, input: &PlayerInput, clock: &dyn Clock) -> Result<(), EntityError> {
        self.player
            .update(input, clock, &self.obstacles, &mut self.attack)?;

        for enemy in &mut self.enemies {
            enemy.enemy_update(&self.player, clock);
        }
        for enemy in &mut self.enemies {
            enemy.update(clock, &self.obstacles)?;
        }

        Ok(())
    }
}

// Read access for drawing
#[allow(dead_code)]
impl Level {
    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    /// The weapon of the attack in progress, if any
    pub fn current_attack(&self) -> Option<&Weapon> {
        self.attack.current()
    }
}

fn cell_position(row: usize, column: usize) -> Vec2 {
    Vec2::new(column as f32 * TILESIZE, row as f32 * TILESIZE)
}

fn build_tiles(layouts: &LevelLayouts, frames: &dyn FrameSource, rng: &mut impl Rng) -> Vec<Tile> {
    let grass_frames = frames.frames("grass");
    let object_frames = frames.frames("objects");
    let mut tiles = Vec::new();

    for (row, column, _) in layouts.boundary.occupied() {
        tiles.push(Tile::new(TileKind::Boundary, cell_position(row, column), None));
    }

    for (row, column, _) in layouts.grass.occupied() {
        let image = grass_frames.choose(rng).copied();
        tiles.push(Tile::new(TileKind::Grass, cell_position(row, column), image));
    }

    for (row, column, code) in layouts.objects.occupied() {
        // The code indexes the object graphics
        let image = usize::try_from(code)
            .ok()
            .and_then(|index| object_frames.get(index).copied());
        tiles.push(Tile::new(TileKind::Object, cell_position(row, column), image));
    }

    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rect;
    use crate::engine::clock::ManualClock;
    use crate::engine::input::Action;
    use crate::game::entities::animation::tests::FixedFrames;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn layout(text: &str) -> TileLayout {
        TileLayout::parse(text).unwrap()
    }

    fn layouts(entities: Option<&str>) -> LevelLayouts {
        LevelLayouts {
            boundary: layout("-1,0,-1,-1\n-1,-1,-1,-1"),
            grass: layout("-1,-1,-1,-1\n-1,-1,5,-1"),
            objects: layout("-1,-1,-1,-1\n-1,-1,-1,1"),
            entities: entities.map(layout),
        }
    }

    fn pressing(actions: &[Action]) -> PlayerInput {
        let mut input = PlayerInput::default();
        for action in actions {
            input.press(*action);
        }
        input
    }

    #[test]
    fn test_species_codes() {
        assert_eq!(species_for_code(390), "bamboo");
        assert_eq!(species_for_code(391), "spirit");
        assert_eq!(species_for_code(392), "raccoon");
        assert_eq!(species_for_code(393), "squid");
    }

    #[test]
    fn test_build_tiles_and_obstacles() {
        let level = Level::build(&layouts(None), &FixedFrames(3), &mut rng()).unwrap();

        assert_eq!(level.tiles().len(), 3);
        assert_eq!(level.obstacles().iter().count(), 3);

        let kinds: Vec<_> = level.tiles().iter().map(|tile| tile.kind).collect();
        assert_eq!(kinds, vec![TileKind::Boundary, TileKind::Grass, TileKind::Object]);

        let object = &level.tiles()[2];
        assert_eq!(object.rect, Rect::new(192.0, 0.0, 64.0, 128.0));
        assert!(object.image.is_some());
        assert!(level.tiles()[0].image.is_none());
    }

    #[test]
    fn test_grass_variants_come_from_rng() {
        let field = LevelLayouts {
            grass: layout(&vec!["0,0,0,0,0,0,0,0"; 4].join("\n")),
            ..LevelLayouts::default()
        };
        let grass = FixedFrames(4).frames("grass");

        let images = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let level = Level::build(&field, &FixedFrames(4), &mut rng).unwrap();
            level
                .tiles()
                .iter()
                .map(|tile| tile.image.unwrap())
                .collect::<Vec<_>>()
        };

        let first = images(3);
        assert_eq!(first.len(), 32);
        assert!(first.iter().all(|image| grass.contains(image)));
        assert_eq!(first, images(3), "same seed, same scatter");

        let distinct: std::collections::HashSet<_> = first.iter().collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn test_default_player_spawn() {
        let level = Level::build(&layouts(None), &FixedFrames(1), &mut rng()).unwrap();
        assert_eq!(level.player().rect().top_left(), PLAYER_DEFAULT_SPAWN);
        assert!(level.enemies().is_empty());
    }

    #[test]
    fn test_entities_layer() {
        let level = Level::build(
            &layouts(Some("394,-1,-1,390\n391,392,7,-1")),
            &FixedFrames(2),
            &mut rng(),
        )
        .unwrap();

        assert_eq!(level.player().rect().top_left(), Vec2::ZERO);
        let species: Vec<_> = level.enemies().iter().map(Enemy::species).collect();
        assert_eq!(species, vec!["bamboo", "spirit", "raccoon", "squid"]);
        assert_eq!(level.enemies()[0].spawn_position(), Vec2::new(224.0, 32.0));
    }

    #[test]
    fn test_missing_frames_fail_the_build() {
        let result = Level::build(&layouts(Some("394")), &FixedFrames(0), &mut rng());
        assert!(matches!(
            result,
            Err(LevelError::Entity(EntityError::EmptyAnimation { .. }))
        ));
    }

    #[test]
    fn test_player_stops_flush_at_boundary() {
        let mut level = Level::build(&layouts(Some("394")), &FixedFrames(2), &mut rng()).unwrap();
        let clock = ManualClock::new();
        let wall = level.tiles()[0].hitbox;
        let input = pressing(&[Action::MoveRight]);

        for frame in 0..10 {
            clock.set(frame * 16);
            level.update(&input, &clock).unwrap();
        }

        assert_eq!(level.player().hitbox().right(), wall.left());
        assert_eq!(level.player().hitbox().y, 13.0);
    }

    #[test]
    fn test_attack_slot_follows_player_attack() {
        let mut level = Level::build(&layouts(Some("394")), &FixedFrames(2), &mut rng()).unwrap();
        let clock = ManualClock::new();

        level.update(&pressing(&[Action::Attack]), &clock).unwrap();
        let weapon = level.current_attack().expect("weapon spawned");
        assert_eq!(weapon.data.name, "sword");

        clock.set(level.player().attack_window_ms());
        level.update(&PlayerInput::default(), &clock).unwrap();
        assert!(level.current_attack().is_none());
    }

    #[test]
    fn test_enemies_think_before_moving() {
        let open_field = LevelLayouts {
            entities: Some(layout("394,-1,-1,390")),
            ..LevelLayouts::default()
        };
        let mut level = Level::build(&open_field, &FixedFrames(2), &mut rng()).unwrap();
        let clock = ManualClock::new();

        level.update(&PlayerInput::default(), &clock).unwrap();

        let enemy = &level.enemies()[0];
        assert_eq!(enemy.status(), EnemyStatus::Move);
        assert_eq!(enemy.center(), Vec2::new(224.0 - 3.0, 32.0));
    }
}
