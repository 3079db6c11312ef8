//! Shared handle to the session state.

use std::sync::{Mutex, PoisonError};
use wardrobe_domain::WardrobeState;

/// Owns the [`WardrobeState`] for one session.
///
/// The lock is only ever held for synchronous state transitions, never
/// across an `.await`, so intake and selection stay responsive while a
/// suggestion request is in flight.
#[derive(Debug, Default)]
pub struct WardrobeSession {
    state: Mutex<WardrobeState>,
}

impl WardrobeSession {
    pub fn new(state: WardrobeState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    /// Run a read-only closure against the state
    pub fn read<R>(&self, f: impl FnOnce(&WardrobeState) -> R) -> R {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Run a mutating closure against the state
    pub fn update<R>(&self, f: impl FnOnce(&mut WardrobeState) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    /// Copy of the current state, for rendering
    pub fn snapshot(&self) -> WardrobeState {
        self.read(WardrobeState::clone)
    }
}
