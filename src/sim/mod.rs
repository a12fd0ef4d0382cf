//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Snapshot in, snapshot out; no stage mutates state it was not handed
//! - Bricks are scanned in construction order
//! - No timers, I/O, randomness or rendering dependencies

pub mod collision;
pub mod difficulty;
pub mod dispatcher;
pub mod grid;
pub mod reducer;
pub mod state;
pub mod tick;

pub use collision::collides;
pub use difficulty::{apply_brick_hit, speed_for, step_bonus};
pub use dispatcher::{Dispatcher, Listener};
pub use grid::build_bricks;
pub use reducer::{Action, reduce};
pub use state::{Ball, Brick, BrickColor, GameState, GameStatus, HitHistory, Paddle, Rect, Score};
pub use tick::{PIPELINE, Stage, tick};
