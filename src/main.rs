//! Breakout headless entry point
//!
//! Drives the simulation with the autoplay controller, one tick per frame.
//! Usage: `breakout [tuning.json]`

#[cfg(not(target_arch = "wasm32"))]
use breakout::{Action, Dispatcher, GameStatus, Tuning, autoplay::steer_toward_ball};

/// Stop the demo after this many frames even if balls remain
#[cfg(not(target_arch = "wasm32"))]
const MAX_FRAMES: u32 = 60 * 60 * 5;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Breakout (headless) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load(path),
        None => Tuning::default(),
    };
    let paddle_speed = tuning.paddle_speed;
    let mut dispatcher = Dispatcher::new(tuning);

    let mut frames = 0;
    while frames < MAX_FRAMES {
        let status = dispatcher.current_state().status;
        match status {
            GameStatus::Ended => break,
            // Start the game, and relaunch after each lost ball
            GameStatus::Initialized | GameStatus::Paused => {
                dispatcher.dispatch(Action::TogglePauseOrStart);
            }
            GameStatus::Running => {}
        }

        let steer = steer_toward_ball(dispatcher.current_state(), paddle_speed);
        dispatcher.dispatch(steer);
        dispatcher.dispatch(Action::Tick);
        frames += 1;

        if dispatcher.current_state().bricks.is_empty() {
            log::info!("Board cleared");
            break;
        }
    }

    let state = dispatcher.current_state();
    log::info!(
        "Finished after {} frames: {:?}, score {}, {} bricks left, {} balls left",
        frames,
        state.status,
        state.score.value,
        state.bricks_remaining(),
        state.score.balls_remaining
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::start, this is just to satisfy the compiler
}
