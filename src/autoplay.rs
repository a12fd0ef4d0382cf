//! Demo controller that steers the paddle under the ball
//!
//! Stands in for keyboard input in the headless host.

use crate::sim::{Action, GameState};

/// Pick a steering action that moves the paddle's centre toward the ball's
///
/// Holds still once the two centres are within one paddle step of each other.
pub fn steer_toward_ball(state: &GameState, paddle_speed: f32) -> Action {
    let offset = state.ball.rect.center().x - state.paddle.rect.center().x;
    if offset > paddle_speed {
        Action::PaddleRight
    } else if offset < -paddle_speed {
        Action::PaddleLeft
    } else {
        Action::PaddleStop
    }
}
