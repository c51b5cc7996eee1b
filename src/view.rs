//! Render snapshot
//!
//! Everything the host renderer reads after a frame: positions, the score
//! line, and ready-made quads in field coordinates. Camera and drawing stay
//! on the host side.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::Serialize;

use crate::consts::*;
use crate::sim::MatchState;

/// 2D vertex in field coordinates
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

impl Vertex {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }
}

/// Axis-aligned rectangle around a center point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quad {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Quad {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Corners counter-clockwise from bottom-left, for a triangle fan
    pub fn fan(&self) -> [Vertex; 4] {
        let min = self.center - self.half_extents;
        let max = self.center + self.half_extents;
        [
            Vertex::new(min.x, min.y),
            Vertex::new(max.x, min.y),
            Vertex::new(max.x, max.y),
            Vertex::new(min.x, max.y),
        ]
    }
}

/// Frame snapshot for the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchView {
    pub left_paddle: Quad,
    pub right_paddle: Quad,
    pub ball: Quad,
    /// "{left} : {right}", drawn centered at `score_anchor`
    pub score_text: String,
    pub score_anchor: Vec2,
}

impl MatchView {
    pub fn from_state(state: &MatchState) -> Self {
        let paddle_extents = Vec2::new(PADDLE_HALF_WIDTH, PADDLE_HALF_HEIGHT);
        Self {
            left_paddle: Quad::new(state.left_paddle.pos, paddle_extents),
            right_paddle: Quad::new(state.right_paddle.pos, paddle_extents),
            ball: Quad::new(state.ball.pos, Vec2::splat(BALL_HALF_SIZE)),
            score_text: state.score.to_string(),
            score_anchor: Vec2::new(0.0, FIELD_HALF_HEIGHT),
        }
    }

    /// Vertex data for all three shapes, 4 vertices each (ball, left, right)
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut vertices = Vec::with_capacity(12);
        vertices.extend_from_slice(&self.ball.fan());
        vertices.extend_from_slice(&self.left_paddle.fan());
        vertices.extend_from_slice(&self.right_paddle.fan());
        vertices
    }

    /// Vertex data as raw bytes for a vertex buffer upload
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.vertices()).to_vec()
    }
}
