//! Progress of the node list, shown next to the Refresh button.

use leptos::prelude::*;
use nodeconsole_app::state::{ConsoleState, LoadState};
use nodeconsole_domain::render::{LOAD_FAILED, LOADING};

/// Spinner and label while a load is pending; the failure label once it
/// failed; nothing after a successful load.
#[component]
pub fn LoadIndicator(state: ReadSignal<ConsoleState>) -> impl IntoView {
    let busy = move || state.with(ConsoleState::is_loading);
    let label = move || {
        state.with(|s| match s.load {
            LoadState::Loading => Some(LOADING),
            LoadState::Failed(_) => Some(LOAD_FAILED),
            LoadState::Idle | LoadState::Loaded => None,
        })
    };

    view! {
        <span class="load-indicator" class:busy=busy role="status">
            {move || busy().then(|| view! { <span class="spinner"></span> })}
            {label}
        </span>
    }
}
