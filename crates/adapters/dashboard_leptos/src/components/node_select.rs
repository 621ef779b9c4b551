//! Node selector fed by the console's option list.

use leptos::prelude::*;
use nodeconsole_app::state::ConsoleState;
use nodeconsole_domain::render::NodeOption;

use crate::ConsoleHandle;

/// A `<select>` with one option per node, or a single placeholder.
#[component]
pub fn NodeSelect(
    /// Console state to display.
    state: ReadSignal<ConsoleState>,
    /// Console receiving the selection.
    console: ConsoleHandle,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let node = event_target_value(&ev);
        if !node.is_empty() {
            console.with_value(|c| c.select(&node));
        }
    };
    let selected = move || {
        state.with(|s| s.selection.node().unwrap_or_default().to_string())
    };

    view! {
        <select class="node-select" on:change=on_change prop:value=selected>
            {move || {
                state
                    .with(ConsoleState::options)
                    .into_iter()
                    .map(|option| {
                        let placeholder = option.is_placeholder();
                        let chosen = state.with(|s| is_selected(s, &option));
                        view! {
                            <option
                                value=option.value.unwrap_or_default()
                                disabled=placeholder
                                selected=chosen
                            >
                                {option.label}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}

/// Whether `option` is the selected node. Placeholders never are.
fn is_selected(state: &ConsoleState, option: &NodeOption) -> bool {
    option.value.is_some() && state.selection.node() == option.value.as_deref()
}
