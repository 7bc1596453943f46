//! Directional input to player velocity

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Four-directional pressed state, polled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Velocity for the held directions.
///
/// Axes are assigned in order left, right, up, down, so when both keys of a
/// pair are held the later one wins (right over left, down over up).
pub fn player_velocity(input: DirectionInput, speed: f32) -> Vec2 {
    let mut vel = Vec2::ZERO;
    if input.left {
        vel.x = -speed;
    }
    if input.right {
        vel.x = speed;
    }
    if input.up {
        vel.y = -speed;
    }
    if input.down {
        vel.y = speed;
    }
    vel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_input_is_still() {
        assert_eq!(player_velocity(DirectionInput::default(), 420.0), Vec2::ZERO);
    }

    #[test]
    fn test_diagonal() {
        let input = DirectionInput {
            left: true,
            up: true,
            ..Default::default()
        };
        assert_eq!(player_velocity(input, 420.0), Vec2::new(-420.0, -420.0));
    }

    #[test]
    fn test_right_overrides_left() {
        let input = DirectionInput {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(player_velocity(input, 420.0), Vec2::new(420.0, 0.0));
    }

    #[test]
    fn test_down_overrides_up() {
        let input = DirectionInput {
            up: true,
            down: true,
            ..Default::default()
        };
        assert_eq!(player_velocity(input, 420.0), Vec2::new(0.0, 420.0));
    }
}
