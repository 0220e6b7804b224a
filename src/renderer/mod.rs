//! wgpu rendering module
//!
//! Each frame is three white rectangles on black: the ball and both paddles.
//! Geometry is built here in court pixels; `pipeline` maps it to the surface.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::Rect;
pub use vertex::Vertex;

use crate::consts::{PADDLE_HEIGHT, PADDLE_WIDTH};
use crate::sim::{GameState, Paddle};
use vertex::colors;

fn paddle_rect(paddle: &Paddle) -> Rect {
    Rect::new(paddle.pos.x, paddle.pos.y, PADDLE_WIDTH, PADDLE_HEIGHT).snapped()
}

/// Ball, left paddle, right paddle
pub fn frame_rects(state: &GameState) -> [Rect; 3] {
    let ball = &state.ball;
    [
        Rect::new(ball.pos.x, ball.pos.y, ball.diameter, ball.diameter).snapped(),
        paddle_rect(&state.left),
        paddle_rect(&state.right),
    ]
}

/// Triangle list for one frame
pub fn frame_vertices(state: &GameState) -> Vec<Vertex> {
    let [ball, left, right] = frame_rects(state);
    let mut vertices = Vec::with_capacity(18);
    vertices.extend(shapes::filled_rect(ball, colors::BALL));
    vertices.extend(shapes::filled_rect(left, colors::PADDLE));
    vertices.extend(shapes::filled_rect(right, colors::PADDLE));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::seeded;
    use glam::Vec2;

    #[test]
    fn test_frame_rects_follow_state() {
        let mut state = GameState::new(&mut seeded(5));
        state.ball.pos = Vec2::new(100.6, 200.4);
        state.left.pos.y = 33.3;

        let [ball, left, right] = frame_rects(&state);
        assert_eq!(ball, Rect::new(100.0, 200.0, 15.0, 15.0));
        assert_eq!(left, Rect::new(20.0, 33.0, PADDLE_WIDTH, PADDLE_HEIGHT));
        assert_eq!(right.min, state.right.pos.trunc());
    }

    #[test]
    fn test_frame_vertices_cover_three_rects() {
        let state = GameState::new(&mut seeded(5));
        let vertices = frame_vertices(&state);
        assert_eq!(vertices.len(), 18);
        assert!(vertices.iter().all(|v| v.color == colors::PADDLE));
    }
}
