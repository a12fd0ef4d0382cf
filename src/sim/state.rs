//! Game state and core simulation types
//!
//! Every type here is a plain value. The reducer produces a whole new
//! `GameState` for each action; nothing is mutated behind a shared handle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::build_bricks;
use crate::tuning::Tuning;

/// Axis-aligned rectangle in arena pixel space (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// Brick colours, top rows are worth the most
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrickColor {
    Red,
    Orange,
    Green,
    Yellow,
}

impl BrickColor {
    /// Layout code for this colour
    pub fn code(&self) -> char {
        match self {
            BrickColor::Red => 'R',
            BrickColor::Orange => 'O',
            BrickColor::Green => 'G',
            BrickColor::Yellow => 'Y',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'R' => Some(BrickColor::Red),
            'O' => Some(BrickColor::Orange),
            'G' => Some(BrickColor::Green),
            'Y' => Some(BrickColor::Yellow),
            _ => None,
        }
    }

    /// Score awarded for destroying a brick of this colour
    pub fn points(&self) -> u32 {
        match self {
            BrickColor::Red => 7,
            BrickColor::Orange => 5,
            BrickColor::Green => 3,
            BrickColor::Yellow => 1,
        }
    }
}

/// A destructible brick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub color: BrickColor,
}

/// What the ball has struck during the current life; drives its speed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitHistory {
    /// Bricks hit that were neither red nor orange
    pub hit_count: u32,
    pub hit_red_row: bool,
    pub hit_orange_row: bool,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Per-tick displacement; each component is `±speed` once launched
    pub vel: Vec2,
    /// Current speed magnitude per axis
    pub speed: f32,
    pub history: HitHistory,
}

impl Ball {
    /// A fresh, unlaunched ball at the spawn point
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            rect: Rect::new(
                tuning.ball_start_x,
                tuning.ball_start_y,
                tuning.ball_size,
                tuning.ball_size,
            ),
            vel: Vec2::ZERO,
            speed: tuning.ball_base_speed,
            history: HitHistory::default(),
        }
    }

    /// True once the ball has been given a velocity
    pub fn is_launched(&self) -> bool {
        self.vel != Vec2::ZERO
    }

    /// Send the ball toward the bottom-right at its current speed
    pub fn launched(self) -> Self {
        Self {
            vel: Vec2::splat(self.speed),
            ..self
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Horizontal velocity: `-paddle_speed`, `0` or `+paddle_speed`
    pub dx: f32,
}

impl Paddle {
    /// Centred, stationary paddle
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            rect: Rect::new(
                tuning.paddle_start_x(),
                tuning.paddle_y,
                tuning.paddle_width,
                tuning.paddle_height,
            ),
            dx: 0.0,
        }
    }
}

/// Score panel values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub value: u32,
    pub level: u32,
    /// Balls not yet launched
    pub balls_remaining: u32,
}

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Fresh board, waiting for the first start
    Initialized,
    /// Active gameplay
    Running,
    /// Paused by the player, or waiting for a respawned ball to be launched
    Paused,
    /// No balls left; only a reset leaves this state
    Ended,
}

/// Complete game snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
    /// Remaining bricks in construction order (row-major, top to bottom)
    pub bricks: Vec<Brick>,
    pub paddle: Paddle,
    pub ball: Ball,
    pub score: Score,
}

impl GameState {
    /// Construction-time state: full brick set, centred paddle, unlaunched ball
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            status: GameStatus::Initialized,
            bricks: build_bricks(tuning),
            paddle: Paddle::spawn(tuning),
            ball: Ball::spawn(tuning),
            score: Score {
                value: 0,
                level: 1,
                balls_remaining: tuning.starting_balls,
            },
        }
    }

    pub fn is_ball_launched(&self) -> bool {
        self.ball.is_launched()
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.len()
    }

    /// Launch the ball if it is at rest, consuming one of the remaining balls
    pub fn launch_ball(self) -> Self {
        if self.ball.is_launched() {
            return self;
        }
        Self {
            ball: self.ball.launched(),
            score: Score {
                balls_remaining: self.score.balls_remaining.saturating_sub(1),
                ..self.score
            },
            ..self
        }
    }
}
