//! Actions and the `(state, action) -> state` reducer

use serde::{Deserialize, Serialize};

use super::state::{GameState, GameStatus, Paddle};
use super::tick::tick;
use crate::tuning::Tuning;

/// Discrete input to the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    PaddleLeft,
    PaddleRight,
    PaddleStop,
    /// Start a fresh game, or toggle between running and paused
    TogglePauseOrStart,
    /// Advance one frame
    Tick,
    /// Throw the current game away and start over
    Reset,
}

impl Action {
    /// Stable name used by hosts that pass actions as strings
    pub fn name(&self) -> &'static str {
        match self {
            Action::PaddleLeft => "paddle_left",
            Action::PaddleRight => "paddle_right",
            Action::PaddleStop => "paddle_stop",
            Action::TogglePauseOrStart => "toggle",
            Action::Tick => "tick",
            Action::Reset => "reset",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "paddle_left" | "left" => Some(Action::PaddleLeft),
            "paddle_right" | "right" => Some(Action::PaddleRight),
            "paddle_stop" | "stop" => Some(Action::PaddleStop),
            "toggle" | "pause" | "start" => Some(Action::TogglePauseOrStart),
            "tick" => Some(Action::Tick),
            "reset" => Some(Action::Reset),
            _ => None,
        }
    }
}

/// Apply one action to a snapshot
///
/// An ended game only responds to `Reset`.
pub fn reduce(state: GameState, action: Action, tuning: &Tuning) -> GameState {
    if state.status == GameStatus::Ended && action != Action::Reset {
        return state;
    }

    match action {
        Action::PaddleLeft => steer(state, -tuning.paddle_speed),
        Action::PaddleRight => steer(state, tuning.paddle_speed),
        Action::PaddleStop => steer(state, 0.0),
        Action::TogglePauseOrStart => toggle(state),
        Action::Tick => tick(state, tuning),
        Action::Reset => GameState::new(tuning),
    }
}

/// Set the paddle's velocity. Applies in any status so a direction can be
/// held while paused.
fn steer(state: GameState, dx: f32) -> GameState {
    GameState {
        paddle: Paddle {
            dx,
            ..state.paddle
        },
        ..state
    }
}

fn toggle(state: GameState) -> GameState {
    match state.status {
        GameStatus::Initialized | GameStatus::Paused => GameState {
            status: GameStatus::Running,
            ..state
        }
        .launch_ball(),
        GameStatus::Running => GameState {
            status: GameStatus::Paused,
            ..state
        },
        GameStatus::Ended => state,
    }
}
