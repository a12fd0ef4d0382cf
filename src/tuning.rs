//! Arena tuning and brick layout
//!
//! Loaded once at startup; the simulation never changes it mid-game.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::BrickColor;

/// Errors raised while reading a tuning file
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Arena geometry, entity sizes and the brick layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub arena_width: f32,
    pub arena_height: f32,
    pub wall_size: f32,

    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_gap: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_y: f32,
    /// Magnitude of the paddle's horizontal velocity while a direction is held
    pub paddle_speed: f32,

    pub ball_size: f32,
    pub ball_start_x: f32,
    pub ball_start_y: f32,
    pub ball_base_speed: f32,

    pub starting_balls: u32,

    /// One string per row, top to bottom. `R`, `O`, `G` and `Y` place a brick
    /// of that colour; any other character leaves the cell empty.
    pub layout: Vec<String>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            wall_size: WALL_SIZE,

            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_gap: BRICK_GAP,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_y: PADDLE_Y,
            paddle_speed: PADDLE_SPEED,

            ball_size: BALL_SIZE,
            ball_start_x: BALL_START_X,
            ball_start_y: BALL_START_Y,
            ball_base_speed: BALL_BASE_SPEED,

            starting_balls: STARTING_BALLS,

            layout: default_layout(),
        }
    }
}

/// Six empty rows, then two full rows each of red, orange, green and yellow
pub fn default_layout() -> Vec<String> {
    let mut rows = vec![String::new(); 6];
    for color in [
        BrickColor::Red,
        BrickColor::Orange,
        BrickColor::Green,
        BrickColor::Yellow,
    ] {
        let row: String = std::iter::repeat_n(color.code(), BRICK_COLUMNS).collect();
        rows.push(row.clone());
        rows.push(row);
    }
    rows
}

impl Tuning {
    /// Parse and validate tuning from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject geometry the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("ball_base_speed", self.ball_base_speed),
        ];
        for (name, value) in positive {
            // NaN fails this too
            if !(value > 0.0 && value.is_finite()) {
                return Err(TuningError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        let non_negative = [
            ("wall_size", self.wall_size),
            ("brick_gap", self.brick_gap),
            ("paddle_speed", self.paddle_speed),
            ("paddle_y", self.paddle_y),
            ("ball_start_x", self.ball_start_x),
            ("ball_start_y", self.ball_start_y),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(TuningError::Invalid(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }

        let (min_x, max_x) = self.paddle_x_range();
        if min_x > max_x {
            return Err(TuningError::Invalid(format!(
                "paddle_width {} does not fit between the walls",
                self.paddle_width
            )));
        }
        if self.paddle_y + self.paddle_height > self.arena_height {
            return Err(TuningError::Invalid(format!(
                "paddle at y {} lies below the arena",
                self.paddle_y
            )));
        }

        let inner_right = self.arena_width - self.wall_size;
        let inside_x = self.ball_start_x >= self.wall_size
            && self.ball_start_x + self.ball_size <= inner_right;
        let inside_y = self.ball_start_y >= self.wall_size
            && self.ball_start_y + self.ball_size <= self.arena_height;
        if !(inside_x && inside_y) {
            return Err(TuningError::Invalid(format!(
                "ball spawn ({}, {}) is outside the arena",
                self.ball_start_x, self.ball_start_y
            )));
        }
        Ok(())
    }

    /// Read and parse a tuning file
    pub fn read(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load tuning from disk, falling back to defaults on any error
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::read(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("{e}; using default tuning");
                Self::default()
            }
        }
    }

    /// Legal range for the paddle's left edge
    pub fn paddle_x_range(&self) -> (f32, f32) {
        (
            self.wall_size,
            self.arena_width - self.wall_size - self.paddle_width,
        )
    }

    /// Paddle left edge when centred in the arena
    pub fn paddle_start_x(&self) -> f32 {
        self.arena_width / 2.0 - self.paddle_width / 2.0
    }
}
