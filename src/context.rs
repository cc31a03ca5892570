//! Application Context
//!
//! View state and the fetch trigger, provided via Leptos Context API.

use leptos::prelude::*;
use tracing::debug;

use crate::state::ViewState;

/// Screen-wide signals provided via context
#[derive(Clone, Copy)]
pub struct ViewContext {
    /// Lifecycle state of the screen, written only by the fetch task and `retry`
    pub state: RwSignal<ViewState>,
    /// Fetch attempt counter - read (the fetch effect in `App` tracks it)
    pub attempt: ReadSignal<u32>,
    /// Fetch attempt counter - write
    set_attempt: WriteSignal<u32>,
}

impl ViewContext {
    pub fn new(state: RwSignal<ViewState>, attempt: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            state,
            attempt: attempt.0,
            set_attempt: attempt.1,
        }
    }

    /// Start another fetch after a failure. No-op in any other state.
    pub fn retry(&self) {
        let restarted = self.state.try_update(|s| s.retry()).unwrap_or(false);
        if restarted {
            debug!("retry requested");
            self.set_attempt.update(|n| *n += 1);
        }
    }
}

pub fn use_view_context() -> ViewContext {
    expect_context::<ViewContext>()
}
