// Physics: tile-map collision and kinematic movement
//
// Movement is resolved one axis at a time against a static set of obstacle
// hitboxes. There is no simulation step; each body moves during its owner's
// per-frame update.

pub mod body;
pub mod collision;
pub mod obstacles;

pub use body::Body;
pub use obstacles::ObstacleSet;
