//! Single owner of the current game snapshot

use super::reducer::{Action, reduce};
use super::state::GameState;
use crate::tuning::Tuning;

/// Callback invoked with every new snapshot
pub type Listener = Box<dyn FnMut(&GameState)>;

/// Holds the current state and applies actions to it one at a time
pub struct Dispatcher {
    tuning: Tuning,
    state: GameState,
    listeners: Vec<Listener>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl Dispatcher {
    pub fn new(tuning: Tuning) -> Self {
        let state = GameState::new(&tuning);
        Self {
            tuning,
            state,
            listeners: Vec::new(),
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Latest snapshot
    pub fn current_state(&self) -> &GameState {
        &self.state
    }

    /// Register a callback that receives each snapshot after it is produced
    pub fn subscribe(&mut self, listener: impl FnMut(&GameState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Apply one action and publish the resulting snapshot
    pub fn dispatch(&mut self, action: Action) -> &GameState {
        let previous = self.state.status;
        self.state = reduce(self.state.clone(), action, &self.tuning);

        if self.state.status != previous {
            log::info!(
                "{:?} -> {:?} on {} (score {}, balls {})",
                previous,
                self.state.status,
                action.name(),
                self.state.score.value,
                self.state.score.balls_remaining
            );
        }

        for listener in &mut self.listeners {
            listener(&self.state);
        }
        &self.state
    }

    /// Apply an action given by name. Unknown names leave the state untouched.
    pub fn dispatch_named(&mut self, name: &str) -> &GameState {
        match Action::from_name(name) {
            Some(action) => self.dispatch(action),
            None => {
                log::warn!("Ignoring unknown action '{name}'");
                &self.state
            }
        }
    }

    /// Run an action sequence against a fresh game and return the final snapshot
    pub fn replay(tuning: Tuning, actions: impl IntoIterator<Item = Action>) -> GameState {
        let mut dispatcher = Self::new(tuning);
        for action in actions {
            dispatcher.dispatch(action);
        }
        dispatcher.state
    }
}
