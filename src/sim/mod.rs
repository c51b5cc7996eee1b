//! Match simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform code:
//! - Motion is always rate * dt
//! - Randomness only through a `ServeSource`
//! - Fixed check order inside a frame

pub mod collision;
pub mod serve;
pub mod simulator;
pub mod state;
pub mod tick;

pub use collision::{PaddleHit, bounce_off_walls, paddle_collision, unit_or_unchanged};
pub use serve::{FixedServe, SeededServe, ServeSource, serve_direction};
pub use simulator::MatchSimulator;
pub use state::{Ball, MatchState, Paddle, Scoreboard, Side};
pub use tick::{FrameInput, MatchEvent, Pointer, PointerTarget, tick};
