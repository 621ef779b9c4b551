use leptos::prelude::*;
use nodeconsole_app::state::ConsoleState;

/// Shared status area: load failures and the last command outcome.
#[component]
pub fn StatusPanel(state: ReadSignal<ConsoleState>) -> impl IntoView {
    view! {
        <pre class="status">{move || state.with(ConsoleState::status_text)}</pre>
    }
}
