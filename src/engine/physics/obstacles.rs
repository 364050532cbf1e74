// Static obstacle set shared by every moving body

use crate::core::Rect;

/// Hitboxes of everything a body can bump into.
///
/// Built once while the level loads and then only read; bodies take it by
/// shared reference for their collision pass.
#[derive(Debug, Clone, Default)]
pub struct ObstacleSet {
    hitboxes: Vec<Rect>,
}

impl ObstacleSet {
    pub fn iter(&self) -> impl Iterator<Item = &Rect> {
        self.hitboxes.iter()
    }
}

impl FromIterator<Rect> for ObstacleSet {
    fn from_iter<I: IntoIterator<Item = Rect>>(iter: I) -> Self {
        Self {
            hitboxes: iter.into_iter().collect(),
        }
    }
}
