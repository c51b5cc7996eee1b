//! Collision detection and response
//!
//! Walls only flip the vertical heading. Paddles send the ball back with an
//! angle set by how far from the paddle center it struck, and speed it up.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};
use crate::consts::*;

/// Result of a paddle hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleHit {
    pub side: Side,
    /// Vertical offset of the ball from the paddle center at impact
    pub offset: f32,
    /// Ball speed after the hit
    pub speed: f32,
}

/// Normalize `v`, leaving it as-is when it has no usable length
#[inline]
pub fn unit_or_unchanged(v: Vec2) -> Vec2 {
    v.normalize_or(v)
}

/// Flip the vertical heading if the ball is past the top or bottom edge.
///
/// The position is not clamped, so a ball sitting outside for several
/// frames flips every frame.
pub fn bounce_off_walls(ball: &mut Ball) -> bool {
    if ball.pos.y > FIELD_HALF_HEIGHT || ball.pos.y < -FIELD_HALF_HEIGHT {
        ball.dir.y = -ball.dir.y;
        return true;
    }
    false
}

/// Whether the ball is heading into `paddle` and has reached its face
fn touches_paddle(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let reached = match side {
        Side::Right => ball.dir.x > 0.0 && ball.pos.x > paddle.pos.x - PADDLE_HIT_OFFSET,
        Side::Left => ball.dir.x < 0.0 && ball.pos.x < paddle.pos.x + PADDLE_HIT_OFFSET,
    };
    reached && paddle.spans_y(ball.pos.y)
}

/// Check the ball against one paddle and reflect it on contact
///
/// On a hit the ball is pushed back in front of the paddle so the next frame
/// doesn't register the same contact again.
pub fn paddle_collision(ball: &mut Ball, paddle: &Paddle, side: Side) -> Option<PaddleHit> {
    if !touches_paddle(ball, paddle, side) {
        return None;
    }

    ball.pos.x = match side {
        Side::Right => paddle.pos.x - PADDLE_SNAP_OFFSET,
        Side::Left => paddle.pos.x + PADDLE_SNAP_OFFSET,
    };

    // Linear reflection angle: center sends it back flat, edges send it steep
    let offset = ball.pos.y - paddle.pos.y;
    ball.dir.x = -ball.dir.x;
    ball.dir.y = offset.signum() * offset.abs() / PADDLE_HALF_HEIGHT;
    ball.dir = unit_or_unchanged(ball.dir);
    ball.speed += PADDLE_SPEEDUP;

    Some(PaddleHit {
        side,
        offset,
        speed: ball.speed,
    })
}
