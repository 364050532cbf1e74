// Axis-separated collision response against static obstacles

use glam::Vec2;

use super::obstacles::ObstacleSet;
use crate::core::Rect;

/// The axis a displacement was just applied along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Push `hitbox` out of every obstacle it overlaps, along `axis` only.
///
/// The hitbox ends flush against the obstacle edge it ran into, judged by the
/// sign of `direction` on that axis. A zero component means the overlap was
/// not caused by movement on this axis, so nothing happens. Obstacles are
/// checked in order against the already-corrected hitbox.
pub fn resolve_axis(hitbox: &mut Rect, direction: Vec2, axis: Axis, obstacles: &ObstacleSet) {
    for obstacle in obstacles.iter() {
        if !obstacle.overlaps(hitbox) {
            continue;
        }

        match axis {
            Axis::Horizontal => {
                if direction.x > 0.0 {
                    hitbox.set_right(obstacle.left());
                }
                if direction.x < 0.0 {
                    hitbox.set_left(obstacle.right());
                }
            }
            Axis::Vertical => {
                if direction.y > 0.0 {
                    hitbox.set_bottom(obstacle.top());
                }
                if direction.y < 0.0 {
                    hitbox.set_top(obstacle.bottom());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall_at(x: f32, y: f32) -> ObstacleSet {
        std::iter::once(Rect::new(x, y, 64.0, 64.0)).collect()
    }

    #[test]
    fn test_moving_right_snaps_to_left_edge() {
        let obstacles = wall_at(100.0, 0.0);
        let mut hitbox = Rect::new(40.0, 10.0, 64.0, 40.0);

        resolve_axis(&mut hitbox, Vec2::X, Axis::Horizontal, &obstacles);

        assert_eq!(hitbox.right(), 100.0);
        assert_eq!(hitbox.y, 10.0);
    }

    #[test]
    fn test_moving_left_snaps_to_right_edge() {
        let obstacles = wall_at(0.0, 0.0);
        let mut hitbox = Rect::new(60.0, 10.0, 64.0, 40.0);

        resolve_axis(&mut hitbox, -Vec2::X, Axis::Horizontal, &obstacles);

        assert_eq!(hitbox.left(), 64.0);
    }

    #[test]
    fn test_moving_down_and_up() {
        let obstacles = wall_at(0.0, 100.0);

        let mut falling = Rect::new(0.0, 50.0, 64.0, 64.0);
        resolve_axis(&mut falling, Vec2::Y, Axis::Vertical, &obstacles);
        assert_eq!(falling.bottom(), 100.0);

        let mut rising = Rect::new(0.0, 150.0, 64.0, 64.0);
        resolve_axis(&mut rising, -Vec2::Y, Axis::Vertical, &obstacles);
        assert_eq!(rising.top(), 164.0);
    }

    #[test]
    fn test_no_response_without_movement_on_axis() {
        let obstacles = wall_at(0.0, 0.0);
        let before = Rect::new(10.0, 10.0, 20.0, 20.0);

        let mut hitbox = before;
        resolve_axis(&mut hitbox, Vec2::Y, Axis::Horizontal, &obstacles);
        assert_eq!(hitbox, before);

        resolve_axis(&mut hitbox, Vec2::X, Axis::Vertical, &obstacles);
        assert_eq!(hitbox, before);
    }

    #[test]
    fn test_never_left_penetrating_on_resolved_axis() {
        let obstacles: ObstacleSet = vec![
            Rect::new(100.0, 0.0, 64.0, 64.0),
            Rect::new(100.0, 64.0, 64.0, 64.0),
        ]
        .into_iter()
        .collect();

        for start in [37.0, 40.0, 60.0, 90.0] {
            let mut hitbox = Rect::new(start, 40.0, 64.0, 40.0);
            resolve_axis(&mut hitbox, Vec2::X, Axis::Horizontal, &obstacles);
            assert!(obstacles.iter().all(|o| !o.overlaps(&hitbox)));
        }
    }

    #[test]
    fn test_empty_obstacle_set() {
        let mut hitbox = Rect::new(0.0, 0.0, 10.0, 10.0);
        resolve_axis(&mut hitbox, Vec2::ONE, Axis::Horizontal, &ObstacleSet::default());
        assert_eq!(hitbox, Rect::new(0.0, 0.0, 10.0, 10.0));
    }
}
