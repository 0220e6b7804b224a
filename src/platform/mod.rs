//! Platform layer
//!
//! Thin helpers between winit/std and the simulation:
//! - Keyboard state and key bindings
//! - Frame pacing and elapsed time

pub mod input;
pub mod time;

pub use input::{KeyAction, KeyboardState};
pub use time::FramePacer;
