use leptos::prelude::*;
use nodeconsole_app::state::ConsoleState;

/// Detail text of the selected node.
#[component]
pub fn NodeDetails(state: ReadSignal<ConsoleState>) -> impl IntoView {
    view! {
        <pre class="details">
            {move || state.with(ConsoleState::details).unwrap_or_default()}
        </pre>
    }
}
