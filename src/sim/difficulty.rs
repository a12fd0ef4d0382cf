//! Ball speed as a function of what it has hit this life
//!
//! Reaching the orange and red rows each add a fixed bonus; every other brick
//! counts toward a stepped bonus at 6 and 14 hits.

use glam::Vec2;

use super::state::{Ball, BrickColor, HitHistory};

/// Bonus for having reached the red or orange rows
pub const ROW_BONUS: f32 = 0.25;

/// Hit counts at which the stepped bonus increases
pub const FIRST_STEP_HITS: u32 = 6;
pub const SECOND_STEP_HITS: u32 = 14;

/// Stepped bonus once each threshold is reached
pub const FIRST_STEP_BONUS: f32 = 0.25;
pub const SECOND_STEP_BONUS: f32 = 0.5;

impl HitHistory {
    /// History after striking a brick of the given colour
    pub fn record(self, color: BrickColor) -> Self {
        match color {
            BrickColor::Orange => Self {
                hit_orange_row: true,
                ..self
            },
            BrickColor::Red => Self {
                hit_red_row: true,
                ..self
            },
            BrickColor::Green | BrickColor::Yellow => Self {
                hit_count: self.hit_count + 1,
                ..self
            },
        }
    }
}

/// Stepped bonus from the count of ordinary hits
pub fn step_bonus(hit_count: u32) -> f32 {
    if hit_count < FIRST_STEP_HITS {
        0.0
    } else if hit_count < SECOND_STEP_HITS {
        FIRST_STEP_BONUS
    } else {
        SECOND_STEP_BONUS
    }
}

/// Speed for a ball with the given history
pub fn speed_for(base_speed: f32, history: &HitHistory) -> f32 {
    let mut speed = base_speed + step_bonus(history.hit_count);
    if history.hit_red_row {
        speed += ROW_BONUS;
    }
    if history.hit_orange_row {
        speed += ROW_BONUS;
    }
    speed
}

/// Set a velocity component to `speed`, keeping its direction. Zero stays zero.
#[inline]
fn with_magnitude(component: f32, speed: f32) -> f32 {
    if component == 0.0 {
        0.0
    } else {
        speed.copysign(component)
    }
}

/// Ball after striking a brick: history updated, speed and velocity rescaled
pub fn apply_brick_hit(ball: Ball, color: BrickColor, base_speed: f32) -> Ball {
    let history = ball.history.record(color);
    let speed = speed_for(base_speed, &history);
    Ball {
        vel: Vec2::new(
            with_magnitude(ball.vel.x, speed),
            with_magnitude(ball.vel.y, speed),
        ),
        speed,
        history,
        ..ball
    }
}
