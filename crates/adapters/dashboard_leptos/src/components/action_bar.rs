//! On / Off / Toggle buttons for the selected node.

use leptos::prelude::*;
use nodeconsole_app::state::ConsoleState;
use nodeconsole_domain::command::NodeAction;

use crate::{ConsoleHandle, run_command};

/// One button per [`NodeAction`], disabled while nothing is selected.
#[component]
pub fn ActionBar(
    /// Console state to display.
    state: ReadSignal<ConsoleState>,
    /// Console running the actions.
    console: ConsoleHandle,
) -> impl IntoView {
    let no_selection = move || state.with(|s| s.selection.is_empty());

    view! {
        <div class="actions">
            {NodeAction::ALL
                .into_iter()
                .map(|action| {
                    let on_click = move |_: leptos::ev::MouseEvent| {
                        run_command(console, move |c| async move { c.send_action(action).await });
                    };
                    view! {
                        <button class=format!("action action-{action}") on:click=on_click disabled=no_selection>
                            {action.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
