//! Fixed per-tick simulation pipeline
//!
//! One tick is a fold of the previous state through the stages in
//! [`PIPELINE`]. Movement comes first so that every collision check sees the
//! new positions; wall checks run before paddle and brick checks.

use super::collision::collides;
use super::difficulty::apply_brick_hit;
use super::state::{Ball, GameState, GameStatus, Paddle};
use crate::tuning::Tuning;

/// A single pure pipeline stage
pub type Stage = fn(GameState, &Tuning) -> GameState;

/// Stages applied, in order, on every tick
pub const PIPELINE: [Stage; 7] = [
    move_paddle,
    move_ball,
    check_side_walls,
    check_top_wall,
    check_off_screen,
    check_paddle_collision,
    check_brick_collisions,
];

/// Advance the game by one tick. A paused game passes through unchanged.
pub fn tick(state: GameState, tuning: &Tuning) -> GameState {
    if state.status == GameStatus::Paused {
        return state;
    }
    PIPELINE.iter().fold(state, |state, stage| stage(state, tuning))
}

/// Move the paddle by its velocity, clamped between the side walls
pub fn move_paddle(state: GameState, tuning: &Tuning) -> GameState {
    let (min_x, max_x) = tuning.paddle_x_range();
    let mut rect = state.paddle.rect;
    // min_x may exceed max_x for a tuning that skipped validation
    rect.pos.x = (rect.pos.x + state.paddle.dx).max(min_x).min(max_x);
    GameState {
        paddle: Paddle {
            rect,
            ..state.paddle
        },
        ..state
    }
}

/// Move the ball by its velocity
pub fn move_ball(state: GameState, _tuning: &Tuning) -> GameState {
    let mut rect = state.ball.rect;
    rect.pos += state.ball.vel;
    GameState {
        ball: Ball {
            rect,
            ..state.ball
        },
        ..state
    }
}

/// Reflect off the left or right wall
pub fn check_side_walls(state: GameState, tuning: &Tuning) -> GameState {
    let mut ball = state.ball;
    let right_wall = tuning.arena_width - tuning.wall_size;

    if ball.rect.left() < tuning.wall_size {
        ball.rect.pos.x = tuning.wall_size;
        ball.vel.x = -ball.vel.x;
    } else if ball.rect.right() > right_wall {
        ball.rect.pos.x = right_wall - ball.rect.size.x;
        ball.vel.x = -ball.vel.x;
    } else {
        return state;
    }

    GameState { ball, ..state }
}

/// Reflect off the top wall
pub fn check_top_wall(state: GameState, tuning: &Tuning) -> GameState {
    if state.ball.rect.top() >= tuning.wall_size {
        return state;
    }
    let mut ball = state.ball;
    ball.rect.pos.y = tuning.wall_size;
    ball.vel.y = -ball.vel.y;
    GameState { ball, ..state }
}

/// Handle the ball leaving through the open bottom edge
///
/// With balls in reserve the game pauses with a fresh ball at the spawn point;
/// the reserve is only decremented when that ball is launched. With none left
/// the game ends and the board is left as it was.
pub fn check_off_screen(state: GameState, tuning: &Tuning) -> GameState {
    if state.ball.rect.top() <= tuning.arena_height {
        return state;
    }

    if state.score.balls_remaining > 0 {
        log::debug!(
            "Ball lost, {} remaining, respawning",
            state.score.balls_remaining
        );
        GameState {
            status: GameStatus::Paused,
            ball: Ball::spawn(tuning),
            ..state
        }
    } else {
        log::debug!("Last ball lost, final score {}", state.score.value);
        GameState {
            status: GameStatus::Ended,
            ..state
        }
    }
}

/// Bounce off the paddle, resting the ball on its top edge
pub fn check_paddle_collision(state: GameState, _tuning: &Tuning) -> GameState {
    if !collides(&state.ball.rect, &state.paddle.rect) {
        return state;
    }
    let mut ball = state.ball;
    ball.vel.y = -ball.vel.y;
    ball.rect.pos.y = state.paddle.rect.top() - ball.rect.size.y;
    GameState { ball, ..state }
}

/// Destroy the first brick (in brick-set order) the ball overlaps
///
/// At most one brick is removed per tick. The bounce axis is chosen by
/// shrinking the brick by the ball's speed: a ball whose bottom is within one
/// step of the brick's top (or top within one step of its bottom) hit a
/// horizontal face, otherwise a vertical one.
pub fn check_brick_collisions(state: GameState, tuning: &Tuning) -> GameState {
    let Some(index) = state
        .bricks
        .iter()
        .position(|brick| collides(&state.ball.rect, &brick.rect))
    else {
        return state;
    };

    let mut bricks = state.bricks;
    let brick = bricks.remove(index);

    let mut ball = apply_brick_hit(state.ball, brick.color, tuning.ball_base_speed);
    if ball.rect.bottom() - ball.speed <= brick.rect.top()
        || ball.rect.top() >= brick.rect.bottom() - ball.speed
    {
        ball.vel.y = -ball.vel.y;
    } else {
        ball.vel.x = -ball.vel.x;
    }

    let mut score = state.score;
    score.value += brick.color.points();
    log::debug!(
        "{:?} brick destroyed, score {}, ball speed {}",
        brick.color,
        score.value,
        ball.speed
    );

    GameState {
        bricks,
        ball,
        score,
        ..state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{BrickColor, Rect};
    use glam::Vec2;

    fn running(tuning: &Tuning) -> GameState {
        GameState {
            status: GameStatus::Running,
            ..GameState::new(tuning)
        }
    }

    fn with_ball(state: GameState, x: f32, y: f32, vel: Vec2) -> GameState {
        let mut ball = state.ball;
        ball.rect.pos = Vec2::new(x, y);
        ball.vel = vel;
        GameState { ball, ..state }
    }

    #[test]
    fn test_paused_tick_is_identity() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning).launch_ball();
        state.status = GameStatus::Paused;
        state.paddle.dx = 3.0;
        assert_eq!(tick(state.clone(), &tuning), state);
    }

    #[test]
    fn test_paddle_clamped_at_walls() {
        let tuning = Tuning::default();
        let mut state = running(&tuning);
        state.paddle.rect.pos.x = 13.0;
        state.paddle.dx = -3.0;
        let state = move_paddle(state, &tuning);
        assert_eq!(state.paddle.rect.pos.x, 12.0);

        let mut state = state;
        state.paddle.rect.pos.x = 362.0;
        state.paddle.dx = 3.0;
        let state = move_paddle(state, &tuning);
        assert_eq!(state.paddle.rect.pos.x, 363.0);
    }

    #[test]
    fn test_oversized_paddle_does_not_panic() {
        let tuning = Tuning {
            paddle_width: 390.0,
            ..Tuning::default()
        };
        let mut state = running(&tuning);
        state.paddle.dx = 3.0;
        let state = tick(state, &tuning);
        let (_, max_x) = tuning.paddle_x_range();
        assert_eq!(state.paddle.rect.pos.x, max_x);
    }

    #[test]
    fn test_left_wall_reflection() {
        let tuning = Tuning::default();
        let state = with_ball(running(&tuning), 11.0, 300.0, Vec2::new(-2.0, 2.0));
        let state = tick(state, &tuning);
        assert_eq!(state.ball.rect.pos.x, 12.0);
        assert_eq!(state.ball.vel.x, 2.0);
        assert_eq!(state.ball.rect.pos.y, 302.0);
    }

    #[test]
    fn test_right_wall_reflection() {
        let tuning = Tuning::default();
        let state = with_ball(running(&tuning), 382.0, 300.0, Vec2::new(2.0, 2.0));
        let state = tick(state, &tuning);
        assert_eq!(state.ball.rect.pos.x, 383.0);
        assert_eq!(state.ball.vel.x, -2.0);
    }

    #[test]
    fn test_top_wall_reflection() {
        let tuning = Tuning {
            layout: Vec::new(),
            ..Tuning::default()
        };
        let state = with_ball(running(&tuning), 200.0, 13.0, Vec2::new(2.0, -2.0));
        let state = tick(state, &tuning);
        assert_eq!(state.ball.rect.pos.y, 12.0);
        assert_eq!(state.ball.vel.y, 2.0);
    }

    #[test]
    fn test_off_screen_with_reserve_pauses_and_respawns() {
        let tuning = Tuning::default();
        let mut state = with_ball(running(&tuning), 200.0, 499.0, Vec2::new(2.0, 2.0));
        state.score.balls_remaining = 2;
        state.ball.speed = 2.5;
        let state = tick(state, &tuning);
        assert_eq!(state.status, GameStatus::Paused);
        assert_eq!(state.ball, Ball::spawn(&tuning));
        assert_eq!(state.score.balls_remaining, 2);
    }

    #[test]
    fn test_off_screen_without_reserve_ends() {
        let tuning = Tuning::default();
        let mut state = with_ball(running(&tuning), 200.0, 499.0, Vec2::new(2.0, 2.0));
        state.score.balls_remaining = 0;
        let state = tick(state, &tuning);
        assert_eq!(state.status, GameStatus::Ended);
        assert_eq!(state.ball.rect.pos, Vec2::new(202.0, 501.0));
    }

    #[test]
    fn test_paddle_bounce() {
        let tuning = Tuning::default();
        // Paddle spans x 187.5..212.5, y 440..452
        let state = with_ball(running(&tuning), 195.0, 434.0, Vec2::new(2.0, 2.0));
        let state = tick(state, &tuning);
        assert_eq!(state.ball.vel.y, -2.0);
        assert_eq!(state.ball.rect.pos.y, 435.0);
        assert_eq!(state.ball.rect.pos.x, 197.0);
    }

    #[test]
    fn test_brick_hit_from_below() {
        let tuning = Tuning::default();
        // Bottom yellow row spans y 194..206; first brick x 12..37
        let state = with_ball(running(&tuning), 20.0, 207.0, Vec2::new(2.0, -2.0));
        let before = state.bricks_remaining();
        let state = tick(state, &tuning);
        assert_eq!(state.bricks_remaining(), before - 1);
        assert_eq!(state.score.value, 1);
        assert_eq!(state.ball.vel, Vec2::new(2.0, 2.0));
        assert_eq!(state.ball.history.hit_count, 1);
        assert!(!state.bricks.iter().any(|b| b.rect.pos == Vec2::new(12.0, 194.0)));
    }

    #[test]
    fn test_brick_hit_from_side() {
        let tuning = Tuning {
            layout: vec!["".into(), "".into(), ".G".into()],
            ..Tuning::default()
        };
        // Single green brick at x 39..64, y 40..52; ball enters its left face
        let state = with_ball(running(&tuning), 33.0, 44.0, Vec2::new(2.0, 2.0));
        let state = tick(state, &tuning);
        assert_eq!(state.bricks_remaining(), 0);
        assert_eq!(state.score.value, 3);
        assert_eq!(state.ball.vel, Vec2::new(-2.0, 2.0));
    }

    #[test]
    fn test_one_brick_per_tick() {
        let tuning = Tuning {
            layout: vec!["YY".into()],
            ..Tuning::default()
        };
        // Ball straddles the gap between the two bricks (x 12..37 and 39..64)
        let mut state = running(&tuning);
        state.ball = Ball {
            rect: Rect::new(35.0, 14.0, 5.0, 5.0),
            vel: Vec2::ZERO,
            ..state.ball
        };
        let state = check_brick_collisions(state, &tuning);
        assert_eq!(state.bricks.len(), 1);
        assert_eq!(state.bricks[0].rect.pos.x, 39.0);
        assert_eq!(state.bricks[0].color, BrickColor::Yellow);
    }

    #[test]
    fn test_red_hit_speeds_ball_before_bounce() {
        let tuning = Tuning {
            layout: vec!["R".into()],
            ..Tuning::default()
        };
        // Brick at x 12..37, y 12..24; ball enters from below
        let state = with_ball(running(&tuning), 20.0, 25.0, Vec2::new(2.0, -2.0));
        let state = tick(state, &tuning);
        assert_eq!(state.score.value, 7);
        assert!(state.ball.history.hit_red_row);
        assert_eq!(state.ball.speed, 2.25);
        assert_eq!(state.ball.vel, Vec2::new(2.25, 2.25));
    }
}
