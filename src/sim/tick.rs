//! Simulation step
//!
//! Advances the game by one variable-length frame. The order of operations is
//! fixed: serve, paddles, ball integration, walls, left paddle, right paddle.

use glam::Vec2;

use super::collision::{Contact, hits_wall, paddle_contact};
use super::rng::ServeRng;
use super::state::{Ball, Direction, GameEvent, GameState, Side};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: Direction,
    pub right: Direction,
    /// Recenter and reserve the ball (one-shot)
    pub serve: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, rng: &mut impl ServeRng) {
    state.events.clear();

    if input.serve {
        state.ball.serve(rng);
        state.events.push(GameEvent::Serve);
    }

    state.left.advance(input.left, dt);
    state.right.advance(input.right, dt);

    let ball = &mut state.ball;
    ball.pos += ball.vel * dt;

    // No repositioning: the ball may sit past the edge for a frame
    if hits_wall(ball) {
        ball.vel.y = -ball.vel.y;
        state.events.push(GameEvent::WallBounce);
    }

    for side in [Side::Left, Side::Right] {
        let paddle = *state.paddle(side);
        match paddle_contact(&state.ball, &paddle) {
            Some(Contact::Bounce) => {
                bounce(&mut state.ball, rng);
                state.events.push(GameEvent::PaddleHit { side });
            }
            Some(Contact::Miss) => {
                state.ball.serve(rng);
                state.score.award(side.opponent());
                state.events.push(GameEvent::Miss { side });
            }
            None => {}
        }
    }
}

/// Reverse and speed up horizontally, add spin vertically, then clamp
fn bounce(ball: &mut Ball, rng: &mut impl ServeRng) {
    ball.vel.x *= BOUNCE_FACTOR;
    ball.vel.y += rng.spin_step() as f32 * SPIN_PER_STEP;
    ball.vel = ball
        .vel
        .clamp(Vec2::splat(-BALL_MAX_SPEED), Vec2::splat(BALL_MAX_SPEED));
}
