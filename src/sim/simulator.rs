//! The match simulator owned by the host's frame loop

use glam::Vec2;

use super::serve::{SeededServe, ServeSource};
use super::state::{Ball, MatchState, Paddle, Scoreboard};
use super::tick::{FrameInput, MatchEvent, Pointer, PointerTarget, tick};
use crate::view::MatchView;

/// Owns a match and its serve source; call `update` once per frame
#[derive(Debug, Clone)]
pub struct MatchSimulator<S: ServeSource = SeededServe> {
    state: MatchState,
    serve: S,
    pointer_target: PointerTarget,
}

impl MatchSimulator<SeededServe> {
    /// New match with a seeded serve generator
    pub fn new(seed: u64) -> Self {
        Self::with_serve(SeededServe::new(seed))
    }

    /// New match seeded from the thread RNG
    pub fn from_entropy() -> Self {
        Self::with_serve(SeededServe::from_entropy())
    }
}

impl<S: ServeSource> MatchSimulator<S> {
    pub fn with_serve(serve: S) -> Self {
        log::info!("match created");
        Self {
            state: MatchState::new(),
            serve,
            pointer_target: PointerTarget::default(),
        }
    }

    /// Choose what the pointer steers
    pub fn with_pointer_target(mut self, target: PointerTarget) -> Self {
        self.pointer_target = target;
        self
    }

    /// Advance by `dt` seconds with the current pointer state
    pub fn update(&mut self, dt: f32, pointer: Option<Pointer>) -> Vec<MatchEvent> {
        self.step(&FrameInput::new(dt, pointer))
    }

    pub fn step(&mut self, input: &FrameInput) -> Vec<MatchEvent> {
        tick(&mut self.state, input, self.pointer_target, &mut self.serve)
    }

    pub fn left_paddle(&self) -> &Paddle {
        &self.state.left_paddle
    }

    pub fn right_paddle(&self) -> &Paddle {
        &self.state.right_paddle
    }

    pub fn ball(&self) -> &Ball {
        &self.state.ball
    }

    pub fn ball_position(&self) -> Vec2 {
        self.state.ball.pos
    }

    pub fn scores(&self) -> Scoreboard {
        self.state.score
    }

    /// "{left} : {right}"
    pub fn score_text(&self) -> String {
        self.state.score.to_string()
    }

    pub fn frame(&self) -> u64 {
        self.state.frame
    }

    pub fn pointer_target(&self) -> PointerTarget {
        self.pointer_target
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Direct state access for hosts that stage positions (replays, tests)
    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    /// Everything the renderer needs for this frame
    pub fn view(&self) -> MatchView {
        MatchView::from_state(&self.state)
    }
}
