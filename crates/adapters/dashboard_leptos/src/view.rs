//! Signal-backed [`ConsoleView`].

use leptos::prelude::*;
use nodeconsole_app::ports::ConsoleView;
use nodeconsole_app::state::ConsoleState;

/// Pushes every console snapshot into a Leptos signal.
#[derive(Clone, Copy)]
pub struct SignalView {
    set_state: WriteSignal<ConsoleState>,
}

impl SignalView {
    pub fn new(set_state: WriteSignal<ConsoleState>) -> Self {
        Self { set_state }
    }
}

impl ConsoleView for SignalView {
    fn render(&self, state: &ConsoleState) {
        self.set_state.set(state.clone());
    }
}
