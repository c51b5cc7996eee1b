//! Match state and core simulation types
//!
//! Everything the renderer reads and `tick` mutates lives here.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// One side of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Negative x
    Left,
    /// Positive x
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// A paddle, positioned by its center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
}

impl Paddle {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    /// Whether `y` lies strictly inside the paddle's vertical span
    #[inline]
    pub fn spans_y(&self, y: f32) -> bool {
        y > self.pos.y - PADDLE_HALF_HEIGHT && y < self.pos.y + PADDLE_HALF_HEIGHT
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Heading, kept at unit length
    pub dir: Vec2,
    /// Field units per second
    pub speed: f32,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            dir: BALL_START_DIRECTION,
            speed: BASE_SPEED,
        }
    }

    /// Velocity in field units per second
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.dir * self.speed
    }

    /// Advance along the current heading
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.velocity() * dt;
    }

    /// Put the ball back on the center spot at serve speed with a new heading
    pub fn serve(&mut self, dir: Vec2) {
        self.pos = Vec2::ZERO;
        self.speed = BASE_SPEED;
        self.dir = dir;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub left: u32,
    pub right: u32,
}

impl Scoreboard {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.left, self.right)
    }
}

/// Complete match state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub score: Scoreboard,
    /// Frames simulated so far
    pub frame: u64,
}

impl MatchState {
    /// Kick-off layout: paddles at their start spots, ball centered heading left
    pub fn new() -> Self {
        Self {
            left_paddle: Paddle::new(LEFT_PADDLE_START),
            right_paddle: Paddle::new(RIGHT_PADDLE_START),
            ball: Ball::new(),
            score: Scoreboard::default(),
            frame: 0,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
