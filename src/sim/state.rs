//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::ServeRng;
use crate::consts::*;

/// Which side of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Vertical paddle movement requested by a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Toward the top of the court (decreasing y)
    Up,
    #[default]
    Hold,
    /// Toward the bottom of the court (increasing y)
    Down,
}

impl Direction {
    /// -1, 0 or 1 along the court's y axis
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Hold => 0.0,
            Direction::Down => 1.0,
        }
    }
}

/// The ball. `pos` is the top-left corner of its bounding square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub diameter: f32,
}

impl Ball {
    /// Ball resting at court center with no velocity
    pub fn centered() -> Self {
        Self {
            pos: Self::center_pos(BALL_DIAMETER),
            vel: Vec2::ZERO,
            diameter: BALL_DIAMETER,
        }
    }

    fn center_pos(diameter: f32) -> Vec2 {
        Vec2::new(
            (COURT_WIDTH - diameter) * 0.5,
            (COURT_HEIGHT - diameter) * 0.5,
        )
    }

    /// Put the ball back at center and pick one of the four diagonals
    pub fn serve(&mut self, rng: &mut impl ServeRng) {
        self.pos = Self::center_pos(self.diameter);
        self.vel = serve_velocity(rng.serve_direction());
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.diameter
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.diameter
    }
}

/// Serve velocity for a quadrant index; indices wrap modulo four
pub fn serve_velocity(direction: u32) -> Vec2 {
    match direction % SERVE_DIRECTIONS {
        0 => Vec2::new(SERVE_SPEED_X, SERVE_SPEED_Y),
        1 => Vec2::new(SERVE_SPEED_X, -SERVE_SPEED_Y),
        2 => Vec2::new(-SERVE_SPEED_X, -SERVE_SPEED_Y),
        _ => Vec2::new(-SERVE_SPEED_X, SERVE_SPEED_Y),
    }
}

/// A player paddle. `pos` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub direction: Direction,
}

impl Paddle {
    /// Paddle at its side's fixed x, vertically centered
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_MARGIN,
            Side::Right => COURT_WIDTH - PADDLE_WIDTH - PADDLE_MARGIN,
        };
        Self {
            side,
            pos: Vec2::new(x, (COURT_HEIGHT - PADDLE_HEIGHT) * 0.5),
            direction: Direction::Hold,
        }
    }

    /// Move by direction * speed * dt, saturating at the court edges
    pub fn advance(&mut self, direction: Direction, dt: f32) {
        self.direction = direction;
        let y = self.pos.y + direction.sign() * PADDLE_SPEED * dt;
        self.pos.y = clamp_paddle_y(y);
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + PADDLE_HEIGHT
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + PADDLE_WIDTH
    }
}

/// Clamp a paddle's top edge into `[0, COURT_HEIGHT - PADDLE_HEIGHT]`
pub fn clamp_paddle_y(y: f32) -> f32 {
    y.clamp(0.0, COURT_HEIGHT - PADDLE_HEIGHT)
}

/// Points won by each side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball was recentered by the serve key
    Serve,
    /// Ball touched the top or bottom of the court
    WallBounce,
    /// Ball was returned by a paddle
    PaddleHit { side: Side },
    /// Ball got past a paddle; the other side scores
    Miss { side: Side },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub score: Score,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh game with paddles centered and the ball served
    pub fn new(rng: &mut impl ServeRng) -> Self {
        let mut ball = Ball::centered();
        ball.serve(rng);
        Self {
            ball,
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            score: Score::default(),
            events: Vec::new(),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}
