use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use nodeconsole_app::console::{ConsoleError, NodeConsole};
use nodeconsole_app::state::{ConsoleState, LoadState};

pub mod api;
mod components;
pub mod view;

use api::GlooNodeApi;
use components::{ActionBar, LoadIndicator, NodeDetails, NodeSelect, NumberForm, StatusPanel};
use view::SignalView;

/// The console wired to the browser.
pub type Console = NodeConsole<GlooNodeApi, SignalView>;

/// Copyable handle to the console shared by every component.
pub type ConsoleHandle = StoredValue<Rc<Console>, LocalStorage>;

/// Reload the node list in the background.
pub(crate) fn refresh(console: ConsoleHandle) {
    let console = console.get_value();
    spawn_local(async move {
        console.load_nodes().await;
        log_load_failure(&console);
    });
}

/// Run a command in the background and log its outcome to the browser
/// console. The outcome itself is rendered into the status area.
pub(crate) fn run_command<F>(console: ConsoleHandle, command: impl FnOnce(Rc<Console>) -> F)
where
    F: Future<Output = Result<serde_json::Value, ConsoleError>> + 'static,
{
    let console = console.get_value();
    let pending = command(Rc::clone(&console));
    spawn_local(async move {
        match pending.await {
            Ok(_) => leptos::logging::log!("command completed"),
            // Nothing was sent, so no reload happened either.
            Err(ConsoleError::Validation(err)) => {
                leptos::logging::log!("command rejected: {err}");
                return;
            }
            Err(err) => leptos::logging::warn!("command failed: {err}"),
        }
        log_load_failure(&console);
    });
}

fn log_load_failure(console: &Console) {
    if let LoadState::Failed(message) = console.state().load {
        leptos::logging::warn!("failed to load nodes: {message}");
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let (state, set_state) = signal(ConsoleState::default());
    let console: ConsoleHandle = StoredValue::new_local(Rc::new(NodeConsole::new(
        GlooNodeApi::from_location(),
        SignalView::new(set_state),
    )));

    refresh(console);

    view! {
        <main>
            <h1>"Nodes"</h1>
            <div class="toolbar">
                <NodeSelect state console/>
                <button on:click=move |_| refresh(console)>"Refresh"</button>
                <LoadIndicator state/>
            </div>
            <NodeDetails state/>
            <ActionBar state console/>
            <NumberForm state console/>
            <StatusPanel state/>
        </main>
    }
}
