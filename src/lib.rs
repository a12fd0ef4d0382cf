//! Breakout - a deterministic brick-breaking arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state, collisions, difficulty, tick pipeline, reducer)
//! - `tuning`: Data-driven arena geometry and brick layout
//! - `autoplay`: Paddle controller used by the headless host
//! - `web`: wasm-bindgen surface (wasm32 only)

pub mod autoplay;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use sim::{Action, Dispatcher, GameState, GameStatus};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (the bottom edge is open)
    pub const ARENA_WIDTH: f32 = 400.0;
    pub const ARENA_HEIGHT: f32 = 500.0;
    /// Thickness of the top, left and right walls
    pub const WALL_SIZE: f32 = 12.0;

    /// Brick grid pitch
    pub const BRICK_WIDTH: f32 = 25.0;
    pub const BRICK_HEIGHT: f32 = 12.0;
    pub const BRICK_GAP: f32 = 2.0;
    pub const BRICK_COLUMNS: usize = 14;

    /// Paddle defaults - one brick wide, fixed row near the bottom
    pub const PADDLE_WIDTH: f32 = BRICK_WIDTH;
    pub const PADDLE_HEIGHT: f32 = BRICK_HEIGHT;
    pub const PADDLE_Y: f32 = 440.0;
    /// Horizontal paddle speed (pixels per tick)
    pub const PADDLE_SPEED: f32 = 3.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 5.0;
    pub const BALL_START_X: f32 = 130.0;
    pub const BALL_START_Y: f32 = 260.0;
    /// Base ball speed before any difficulty bonus (pixels per tick per axis)
    pub const BALL_BASE_SPEED: f32 = 2.0;

    /// Balls available at the start of a game
    pub const STARTING_BALLS: u32 = 3;
}
