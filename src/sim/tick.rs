//! Per-frame simulation tick
//!
//! Advances the match by one variable-length frame. The checks run in a fixed
//! order; each one sees the ball after the previous steps of the same frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{bounce_off_walls, paddle_collision};
use super::serve::{ServeSource, serve_direction};
use super::state::{MatchState, Side};
use crate::consts::*;

/// Active pointer (touch or pressed mouse) in raw screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
    /// Pixels from the left edge
    pub x: f32,
    /// Pixels from the top edge
    pub y: f32,
    pub screen_width: f32,
    pub screen_height: f32,
}

impl Pointer {
    pub fn new(x: f32, y: f32, screen_width: f32, screen_height: f32) -> Self {
        Self {
            x,
            y,
            screen_width,
            screen_height,
        }
    }

    /// Map the screen position into field coordinates (origin at center, y up)
    pub fn to_field(&self) -> Vec2 {
        Vec2::new(
            FIELD_WIDTH * (self.x / self.screen_width - 0.5),
            FIELD_HEIGHT * (0.5 - self.y / self.screen_height),
        )
    }
}

/// What the pointer steers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerTarget {
    /// Pointer height is written straight onto the ball
    #[default]
    Ball,
    /// Pointer height moves the left paddle
    LeftPaddle,
}

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds since the previous frame
    pub dt: f32,
    /// `None` when nothing is touching the screen
    pub pointer: Option<Pointer>,
}

impl FrameInput {
    pub fn new(dt: f32, pointer: Option<Pointer>) -> Self {
        Self { dt, pointer }
    }
}

/// Something that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// `side` won a point; the ball has been served again
    Scored { side: Side },
    /// Ball flipped its vertical heading at the top or bottom edge
    WallBounce,
    /// Ball came off a paddle at the given speed
    PaddleHit { side: Side, speed: f32 },
}

/// Advance the match by one frame
pub fn tick<S: ServeSource + ?Sized>(
    state: &mut MatchState,
    input: &FrameInput,
    target: PointerTarget,
    serve: &mut S,
) -> Vec<MatchEvent> {
    let mut events = Vec::new();
    state.frame += 1;

    // Negative or NaN frame times move nothing
    let dt = if input.dt > 0.0 { input.dt } else { 0.0 };
    state.ball.advance(dt);

    // Out the left edge: point to the right side
    if state.ball.pos.x < -FIELD_HALF_WIDTH {
        score_point(state, Side::Right, serve, &mut events);
    }

    // Out the right edge: point to the left side
    if state.ball.pos.x > FIELD_HALF_WIDTH {
        score_point(state, Side::Left, serve, &mut events);
    }

    if bounce_off_walls(&mut state.ball) {
        log::trace!("wall bounce at y={:.1}", state.ball.pos.y);
        events.push(MatchEvent::WallBounce);
    }

    for side in [Side::Right, Side::Left] {
        let paddle = *state.paddle(side);
        if let Some(hit) = paddle_collision(&mut state.ball, &paddle, side) {
            log::debug!(
                "{} paddle hit, offset {:.1}, speed now {}",
                side.as_str(),
                hit.offset,
                hit.speed
            );
            events.push(MatchEvent::PaddleHit {
                side,
                speed: hit.speed,
            });
        }
    }

    if let Some(pointer) = input.pointer {
        let touch = pointer.to_field();
        if touch.x > state.left_paddle.pos.x {
            match target {
                PointerTarget::Ball => state.ball.pos.y = touch.y,
                PointerTarget::LeftPaddle => state.left_paddle.pos.y = touch.y,
            }
        }
    }

    events
}

fn score_point<S: ServeSource + ?Sized>(
    state: &mut MatchState,
    side: Side,
    serve: &mut S,
    events: &mut Vec<MatchEvent>,
) {
    state.ball.serve(serve_direction(serve.draw()));
    state.score.award(side);
    log::debug!(
        "{} side scores ({}), serving toward {}",
        side.as_str(),
        state.score,
        state.ball.dir
    );
    events.push(MatchEvent::Scored { side });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::serve::FixedServe;

    fn run(state: &mut MatchState, dt: f32, pointer: Option<Pointer>) -> Vec<MatchEvent> {
        let mut serve = FixedServe::constant(0.0, 0.0);
        tick(state, &FrameInput::new(dt, pointer), PointerTarget::Ball, &mut serve)
    }

    #[test]
    fn test_first_second_moves_ball_left() {
        let mut state = MatchState::new();
        let events = run(&mut state, 1.0, None);
        assert_eq!(state.ball.pos, Vec2::new(-30.0, 0.0));
        assert_eq!(state.score.to_string(), "0 : 0");
        assert_eq!(state.ball.speed, BASE_SPEED);
        assert!(events.is_empty());
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn test_right_exit_scores_for_left() {
        let mut state = MatchState::new();
        state.ball.pos = Vec2::new(245.0, 0.0);
        state.ball.dir = Vec2::X;
        state.ball.speed = 70.0;

        let events = run(&mut state, 0.0, None);
        assert_eq!(events, vec![MatchEvent::Scored { side: Side::Left }]);
        assert_eq!(state.score.left, 1);
        assert_eq!(state.score.right, 0);
        assert_eq!(state.ball.pos, Vec2::ZERO);
        assert_eq!(state.ball.speed, BASE_SPEED);
        assert!((state.ball.dir - Vec2::X).length() < 1e-6);
    }

    #[test]
    fn test_left_exit_scores_for_right() {
        let mut state = MatchState::new();
        state.ball.pos = Vec2::new(-239.0, 100.0);
        state.ball.speed = 60.0;

        let mut serve = FixedServe::constant(0.5, 0.6);
        let events = tick(
            &mut state,
            &FrameInput::new(0.1, None),
            PointerTarget::Ball,
            &mut serve,
        );
        assert_eq!(events, vec![MatchEvent::Scored { side: Side::Right }]);
        assert_eq!(state.score.right, 1);
        assert_eq!(state.ball.pos, Vec2::ZERO);
        assert_eq!(state.ball.speed, BASE_SPEED);
        assert!((state.ball.dir - Vec2::new(0.6, 0.6).normalize()).length() < 1e-6);
    }

    #[test]
    fn test_right_paddle_return() {
        let mut state = MatchState::new();
        state.ball.pos = Vec2::new(194.0, 0.0);
        state.ball.dir = Vec2::X;

        // 2 units at 30 u/s
        let events = run(&mut state, 2.0 / 30.0, None);
        assert_eq!(
            events,
            vec![MatchEvent::PaddleHit {
                side: Side::Right,
                speed: 40.0
            }]
        );
        assert!(state.ball.dir.x < 0.0);
        assert_eq!(state.ball.speed, 40.0);
        assert_eq!(state.ball.pos.x, 194.0);
    }

    #[test]
    fn test_wall_bounce_flips_heading() {
        let mut state = MatchState::new();
        state.ball.pos = Vec2::new(0.0, 159.0);
        state.ball.dir = Vec2::new(0.6, 0.8);

        let events = run(&mut state, 0.1, None);
        assert_eq!(events, vec![MatchEvent::WallBounce]);
        assert!(state.ball.pos.y > 160.0);
        assert_eq!(state.ball.dir, Vec2::new(0.6, -0.8));
    }

    #[test]
    fn test_negative_dt_moves_nothing() {
        let mut state = MatchState::new();
        state.ball.pos = Vec2::new(10.0, 10.0);
        let events = run(&mut state, -0.5, None);
        assert!(events.is_empty());
        assert_eq!(state.ball.pos, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_pointer_maps_to_field() {
        let pointer = Pointer::new(240.0, 80.0, 480.0, 320.0);
        assert_eq!(pointer.to_field(), Vec2::new(0.0, 80.0));

        let corner = Pointer::new(0.0, 0.0, 960.0, 640.0);
        assert_eq!(corner.to_field(), Vec2::new(-240.0, 160.0));
    }

    #[test]
    fn test_pointer_moves_ball() {
        let mut state = MatchState::new();
        // Screen is twice the field size; y = 160 px maps to field y = 80
        let pointer = Pointer::new(480.0, 160.0, 960.0, 640.0);
        run(&mut state, 0.0, Some(pointer));
        assert_eq!(state.ball.pos.y, 80.0);
        assert_eq!(state.left_paddle.pos.y, 20.0);
    }

    #[test]
    fn test_pointer_behind_left_paddle_is_ignored() {
        let mut state = MatchState::new();
        // x = 10 px on a 480 px screen maps to field x = -230
        let pointer = Pointer::new(10.0, 0.0, 480.0, 320.0);
        run(&mut state, 0.0, Some(pointer));
        assert_eq!(state.ball.pos.y, 0.0);
    }

    #[test]
    fn test_pointer_can_drive_left_paddle() {
        let mut state = MatchState::new();
        let pointer = Pointer::new(240.0, 240.0, 480.0, 320.0);
        let mut serve = FixedServe::constant(0.0, 0.0);
        tick(
            &mut state,
            &FrameInput::new(0.0, Some(pointer)),
            PointerTarget::LeftPaddle,
            &mut serve,
        );
        assert_eq!(state.left_paddle.pos.y, -80.0);
        assert_eq!(state.ball.pos.y, 0.0);
    }

    #[test]
    fn test_right_paddle_never_moves() {
        let mut state = MatchState::new();
        let pointer = Pointer::new(400.0, 10.0, 480.0, 320.0);
        for _ in 0..200 {
            run(&mut state, 0.05, Some(pointer));
        }
        assert_eq!(state.right_paddle.pos, RIGHT_PADDLE_START);
    }
}
