//! Ball vs paddle collision
//!
//! Paddles are axis-aligned rectangles and the ball is tested with its
//! bounding box, so a hit is a plain interval overlap on both axes.

use glam::Vec2;

use super::state::{Playfield, Side};
use crate::consts::*;

/// Outcome of a paddle hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounce {
    /// Ball center, flush against the paddle face
    pub pos: Vec2,
    /// Outgoing velocity
    pub vel: Vec2,
    /// Outgoing angle from horizontal (radians)
    pub angle: f32,
}

/// Check if the ball's bounding box overlaps a paddle at (`paddle_x`, `paddle_y`)
pub fn overlaps_paddle(ball_pos: Vec2, paddle_x: f32, paddle_y: f32) -> bool {
    ball_pos.x - BALL_RADIUS <= paddle_x + PADDLE_WIDTH
        && ball_pos.x + BALL_RADIUS >= paddle_x
        && ball_pos.y + BALL_RADIUS >= paddle_y
        && ball_pos.y - BALL_RADIUS <= paddle_y + PADDLE_HEIGHT
}

/// Where on the paddle the ball struck, from -1 (top end) to 1 (bottom end)
pub fn relative_intersect(ball_y: f32, paddle_y: f32) -> f32 {
    let paddle_center = paddle_y + PADDLE_HEIGHT / 2.0;
    ((ball_y - paddle_center) / (PADDLE_HEIGHT / 2.0)).clamp(-1.0, 1.0)
}

/// Deflect the ball off the paddle belonging to `paddle`.
///
/// The outgoing angle scales with the strike offset up to `MAX_BOUNCE_ANGLE`,
/// speed grows by `PADDLE_BOOST` up to `MAX_BALL_SPEED`, and the ball is moved
/// to touch the paddle face so it cannot register a second hit next tick.
pub fn bounce_off_paddle(
    ball_pos: Vec2,
    ball_vel: Vec2,
    paddle_y: f32,
    paddle: Side,
    field: &Playfield,
) -> Bounce {
    let angle = relative_intersect(ball_pos.y, paddle_y) * MAX_BOUNCE_ANGLE;
    let speed = (ball_vel.length() * PADDLE_BOOST).min(MAX_BALL_SPEED);

    // Left paddle sends the ball right and vice versa
    let (direction, x) = match paddle {
        Side::Left => (1.0, field.left_x() + PADDLE_WIDTH + BALL_RADIUS),
        Side::Right => (-1.0, field.right_x() - BALL_RADIUS),
    };

    Bounce {
        pos: Vec2::new(x, ball_pos.y),
        vel: Vec2::new(direction * speed * angle.cos(), speed * angle.sin()),
        angle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Playfield {
        Playfield::new(800, 480)
    }

    #[test]
    fn test_overlap_detects_touching_ball() {
        let f = field();
        let paddle_y = 200.0;
        // Ball edge exactly on the left paddle's right face
        let pos = Vec2::new(f.left_x() + PADDLE_WIDTH + BALL_RADIUS, 240.0);
        assert!(overlaps_paddle(pos, f.left_x(), paddle_y));
    }

    #[test]
    fn test_overlap_misses_above_and_beside() {
        let f = field();
        let paddle_y = 200.0;
        let above = Vec2::new(f.left_x() + 5.0, paddle_y - BALL_RADIUS - 1.0);
        assert!(!overlaps_paddle(above, f.left_x(), paddle_y));

        let beside = Vec2::new(f.left_x() + PADDLE_WIDTH + BALL_RADIUS + 1.0, 240.0);
        assert!(!overlaps_paddle(beside, f.left_x(), paddle_y));
    }

    #[test]
    fn test_center_hit_bounces_horizontally() {
        let f = field();
        let paddle_y = 200.0;
        let pos = Vec2::new(f.left_x() + PADDLE_WIDTH, paddle_y + PADDLE_HEIGHT / 2.0);
        let bounce = bounce_off_paddle(pos, Vec2::new(-360.0, 0.0), paddle_y, Side::Left, &f);

        assert_eq!(bounce.angle, 0.0);
        assert!(bounce.vel.y.abs() < 1e-4);
        assert!((bounce.vel.x - 378.0).abs() < 1e-3);
        assert_eq!(bounce.pos.x, f.left_x() + PADDLE_WIDTH + BALL_RADIUS);
    }

    #[test]
    fn test_edge_hit_clamps_to_max_angle() {
        let f = field();
        let paddle_y = 200.0;
        // Far below the paddle center; offset clamps to 1
        let pos = Vec2::new(f.right_x(), paddle_y + PADDLE_HEIGHT + 6.0);
        let bounce = bounce_off_paddle(pos, Vec2::new(360.0, 0.0), paddle_y, Side::Right, &f);

        assert!((bounce.angle - MAX_BOUNCE_ANGLE).abs() < 1e-6);
        assert!(bounce.vel.x < 0.0);
        assert!(bounce.vel.y > 0.0);
        assert_eq!(bounce.pos.x, f.right_x() - BALL_RADIUS);
    }

    #[test]
    fn test_speed_is_capped() {
        let f = field();
        let pos = Vec2::new(f.left_x() + PADDLE_WIDTH, 246.0);
        let bounce = bounce_off_paddle(pos, Vec2::new(-890.0, 0.0), 200.0, Side::Left, &f);
        assert!(bounce.vel.length() <= MAX_BALL_SPEED + 1e-3);
    }
}
