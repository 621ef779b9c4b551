//! Inline form setting the selected node's number value.

use leptos::prelude::*;
use nodeconsole_app::state::ConsoleState;
use nodeconsole_domain::node::NumberAttrs;

use crate::{ConsoleHandle, run_command};

/// Number field bounded by the node's `number_attrs`, pre-filled with its
/// current state. Hidden when the selected node has no number capability.
#[component]
pub fn NumberForm(
    /// Console state to display.
    state: ReadSignal<ConsoleState>,
    /// Console receiving the value.
    console: ConsoleHandle,
) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());

    let has_number = move || {
        state.with(|s| {
            s.selected_node()
                .is_some_and(|n| n.number_capability().is_some())
        })
    };
    let attrs = move || {
        state.with(|s| {
            s.selected_node()
                .and_then(|n| n.number_attrs.clone())
                .unwrap_or_default()
        })
    };
    let bound = move |pick: fn(&NumberAttrs) -> Option<f64>| {
        move || pick(&attrs()).map(|v| v.to_string())
    };

    // Selected node and its reported value. Status updates leave it equal,
    // so the draft is only overwritten when either one changes.
    let reported = Memo::new(move |_| state.with(reported_number));
    Effect::new(move |_| {
        let value = reported.with(|r| r.as_ref().and_then(|(_, value)| *value));
        set_draft.set(value.map(|v| v.to_string()).unwrap_or_default());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = draft.get_untracked();
        run_command(console, move |c| async move { c.set_number_value(&input).await });
    };

    view! {
        <Show when=has_number>
            <form class="number-form" on:submit=on_submit>
                <label>
                    "Value "
                    <input
                        type="number"
                        min=bound(|a| a.min)
                        max=bound(|a| a.max)
                        step=bound(|a| a.step)
                        prop:value=draft
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                    />
                </label>
                {move || attrs().unit_of_measurement.map(|unit| view! { <span class="unit">{unit}</span> })}
                <button type="submit">"Set"</button>
            </form>
        </Show>
    }
}

/// The selected node and the numeric value it reports, if any.
fn reported_number(state: &ConsoleState) -> Option<(String, Option<f64>)> {
    state.selected_node().map(|n| {
        let value = n.number_capability().and_then(|number| number.value());
        (n.node.clone(), value)
    })
}
