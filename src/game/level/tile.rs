// Static map tiles

use glam::Vec2;

use crate::core::Rect;
use crate::engine::assets::FrameHandle;
use crate::game::settings::TILESIZE;

/// Which map layer a tile came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Invisible wall from the floor-blocks layer
    Boundary,
    Grass,
    /// Two tiles tall (trees, statues, ...)
    Object,
}

/// An obstacle placed on the tile grid
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub kind: TileKind,
    pub rect: Rect,
    pub hitbox: Rect,
    /// `None` for boundaries, or when the layer's graphics are missing
    pub image: Option<FrameHandle>,
}

impl Tile {
    /// Build the tile whose grid cell has its top-left at `position`
    pub fn new(kind: TileKind, position: Vec2, image: Option<FrameHandle>) -> Self {
        let (rect, hitbox) = match kind {
            TileKind::Boundary | TileKind::Grass => {
                let rect = Rect::from_top_left(position, Vec2::splat(TILESIZE));
                (rect, rect.inflate(0.0, -30.0).translate(0.0, -10.0))
            }
            TileKind::Object => {
                // Objects overhang the cell above
                let rect = Rect::new(position.x, position.y - TILESIZE, TILESIZE, TILESIZE * 2.0);
                (rect, rect.inflate(-2.0, -62.0).translate(0.0, -8.0))
            }
        };

        Self {
            kind,
            rect,
            hitbox,
            image,
        }
    }

    /// Boundaries block movement but are never drawn
    #[allow(dead_code)]
    pub fn is_visible(&self) -> bool {
        self.kind != TileKind::Boundary
    }
}
