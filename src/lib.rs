//! Paddle Pong - a minimal two-paddle Pong game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, scoring)
//! - `renderer`: wgpu rectangle renderer
//! - `platform`: Keyboard state and frame pacing on top of winit/std
//! - `settings`: Optional presentation preferences

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Window / court dimensions in pixels
    pub const WINDOW_WIDTH: u32 = 800;
    pub const WINDOW_HEIGHT: u32 = 600;
    pub const COURT_WIDTH: f32 = WINDOW_WIDTH as f32;
    pub const COURT_HEIGHT: f32 = WINDOW_HEIGHT as f32;

    /// Target frame rate for the soft frame cap
    pub const FPS: u64 = 60;
    pub const TARGET_FRAME_TIME: Duration = Duration::from_millis(1000 / FPS);

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Vertical paddle speed (pixels/s)
    pub const PADDLE_SPEED: f32 = 400.0;
    /// Gap between the court edge and each paddle
    pub const PADDLE_MARGIN: f32 = 20.0;

    /// Ball defaults
    pub const BALL_DIAMETER: f32 = 15.0;
    /// Serve velocity components; the signs are chosen per serve
    pub const SERVE_SPEED_X: f32 = 150.0;
    pub const SERVE_SPEED_Y: f32 = 90.0;
    /// Per-axis speed cap applied after every paddle hit
    pub const BALL_MAX_SPEED: f32 = 600.0;
    /// Horizontal velocity multiplier on a paddle hit (sign-reversing)
    pub const BOUNCE_FACTOR: f32 = -1.05;
    /// Vertical speed added per spin step on a paddle hit
    pub const SPIN_PER_STEP: f32 = 0.2;
    /// Spin steps are drawn from 0..SPIN_STEPS
    pub const SPIN_STEPS: u32 = 10;
    /// Number of diagonal serve directions
    pub const SERVE_DIRECTIONS: u32 = 4;
}
