//! Paddle Duel - simulation core for a two-paddle ball game
//!
//! Core modules:
//! - `sim`: Frame simulation (ball motion, paddle collisions, scoring)
//! - `view`: Read-only render snapshot handed to the host renderer
//! - `settings`: Configuration for the headless runner

pub mod error;
pub mod settings;
pub mod sim;
pub mod view;

pub use error::SettingsError;
pub use settings::Settings;
pub use sim::{MatchEvent, MatchSimulator, MatchState, Pointer, PointerTarget, Side};
pub use view::MatchView;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Logical playfield size (the camera maps this onto any screen)
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 320.0;
    pub const FIELD_HALF_WIDTH: f32 = FIELD_WIDTH / 2.0;
    pub const FIELD_HALF_HEIGHT: f32 = FIELD_HEIGHT / 2.0;

    /// Paddle geometry
    pub const PADDLE_HALF_WIDTH: f32 = 5.0;
    pub const PADDLE_HALF_HEIGHT: f32 = 30.0;
    /// Distance from the paddle center line at which the ball counts as hitting it
    pub const PADDLE_HIT_OFFSET: f32 = 5.0;
    /// Distance from the paddle center line the ball is pushed back to after a hit
    pub const PADDLE_SNAP_OFFSET: f32 = 6.0;

    /// Ball defaults
    pub const BALL_HALF_SIZE: f32 = 5.0;
    /// Serve speed, in field units per second
    pub const BASE_SPEED: f32 = 30.0;
    /// Speed added on every paddle hit
    pub const PADDLE_SPEEDUP: f32 = 10.0;
    /// Added to the serve direction's x draw so every serve heads right
    pub const SERVE_X_BIAS: f32 = 0.1;

    /// Starting layout
    pub const LEFT_PADDLE_START: Vec2 = Vec2::new(-200.0, 20.0);
    pub const RIGHT_PADDLE_START: Vec2 = Vec2::new(200.0, 0.0);
    pub const BALL_START_DIRECTION: Vec2 = Vec2::new(-1.0, 0.0);
}
