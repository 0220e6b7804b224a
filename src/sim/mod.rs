//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time comes in as an explicit `dt`
//! - Randomness comes in through `ServeRng`
//! - No rendering or platform dependencies

pub mod collision;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{Contact, paddle_contact};
pub use rng::ServeRng;
pub use state::{Ball, Direction, GameEvent, GameState, Paddle, Score, Side};
pub use tick::{TickInput, tick};
