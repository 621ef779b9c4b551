//! Node console: the controller behind the single-page UI.
//!
//! Every write is followed by a reload of the node list (read-after-write,
//! client-driven). Overlapping operations are not coordinated: whichever
//! response resolves last wins. State borrows never span an `.await`.

use std::cell::RefCell;

use nodeconsole_domain::command::{
    ActionRequest, NodeAction, SetNumberRequest, parse_number_input,
};
use nodeconsole_domain::error::{PayloadError, ValidationError};
use nodeconsole_domain::node::parse_node_list;
use nodeconsole_domain::selection::Selection;

use crate::ports::{ApiError, ConsoleView, NodeApi};
use crate::state::{CommandStatus, ConsoleState, LoadState};

/// Errors returned by console operations. They are also rendered into the
/// status area, so callers may ignore them.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

/// Stateful controller holding the last fetched node list.
pub struct NodeConsole<A, V> {
    api: A,
    view: V,
    state: RefCell<ConsoleState>,
}

impl<A: NodeApi, V: ConsoleView> NodeConsole<A, V> {
    /// Create a console with an empty, idle state.
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            state: RefCell::new(ConsoleState::default()),
        }
    }

    /// The backend client.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// The view receiving state snapshots.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Copy of the current state.
    pub fn state(&self) -> ConsoleState {
        self.state.borrow().clone()
    }

    /// Fetch the node list and replace the cached one.
    ///
    /// The selection is kept when the node is still listed and otherwise
    /// defaults to the first node. Any failure empties the list and moves
    /// the load state to [`LoadState::Failed`]; nothing is returned to the
    /// caller.
    #[tracing::instrument(skip(self))]
    pub async fn load_nodes(&self) {
        self.update(|state| state.load = LoadState::Loading);

        let result = match self.api.list_nodes().await {
            Ok(payload) => parse_node_list(payload).map_err(ConsoleError::from),
            Err(err) => Err(err.into()),
        };

        match result {
            Ok(nodes) => {
                tracing::debug!(count = nodes.len(), "nodes loaded");
                self.update(|state| {
                    state.selection = state.selection.reconcile(&nodes);
                    state.nodes = nodes;
                    state.load = LoadState::Loaded;
                });
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load nodes");
                self.update(|state| {
                    state.nodes.clear();
                    state.selection = Selection::none();
                    state.load = LoadState::Failed(err.to_string());
                });
            }
        }
    }

    /// Detail text for the current selection.
    pub fn render_details(&self) -> Option<String> {
        self.state.borrow().details()
    }

    /// Select `node`. Returns `false`, leaving the selection untouched, when
    /// the node is not in the cached list.
    pub fn select(&self, node: &str) -> bool {
        let selection = Selection::of(&self.state.borrow().nodes, node);
        let Some(selection) = selection else {
            return false;
        };
        self.update(|state| state.selection = selection);
        true
    }

    /// Post `action` for the selected node, then reload the list.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Validation`] without sending anything when no
    /// node is selected, or [`ConsoleError::Api`] when the request failed.
    #[tracing::instrument(skip(self))]
    pub async fn send_action(&self, action: NodeAction) -> Result<serde_json::Value, ConsoleError> {
        let node = self.require_selection()?;
        let request = ActionRequest { node, action };

        self.update(|state| state.command = CommandStatus::Sending);
        let outcome = self.api.run_action(&request).await;
        self.complete(outcome).await
    }

    /// Parse `input` and post it as the selected node's number value, then
    /// reload the list.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Validation`] without sending anything when no
    /// node is selected or `input` is not a number, or [`ConsoleError::Api`]
    /// when the request failed.
    #[tracing::instrument(skip(self))]
    pub async fn set_number_value(&self, input: &str) -> Result<serde_json::Value, ConsoleError> {
        let node = self.require_selection()?;
        let value = parse_number_input(input).map_err(|err| self.reject(err))?;
        let request = SetNumberRequest { node, value };

        self.update(|state| state.command = CommandStatus::Sending);
        let outcome = self.api.set_number(&request).await;
        self.complete(outcome).await
    }

    fn require_selection(&self) -> Result<String, ConsoleError> {
        let node = self.state.borrow().selection.node().map(str::to_string);
        node.ok_or_else(|| self.reject(ValidationError::NoSelection))
    }

    fn reject(&self, err: ValidationError) -> ConsoleError {
        tracing::debug!(error = %err, "command rejected");
        self.update(|state| state.command = CommandStatus::Rejected(err.clone()));
        err.into()
    }

    /// Surface the result, then resynchronise whatever the outcome was.
    async fn complete(
        &self,
        outcome: Result<serde_json::Value, ApiError>,
    ) -> Result<serde_json::Value, ConsoleError> {
        match &outcome {
            Ok(result) => self.update(|state| state.command = CommandStatus::Completed(result.clone())),
            Err(err) => {
                tracing::warn!(error = %err, "command failed");
                self.update(|state| state.command = CommandStatus::Failed(err.to_string()));
            }
        }
        self.load_nodes().await;
        outcome.map_err(ConsoleError::from)
    }

    fn update(&self, change: impl FnOnce(&mut ConsoleState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            change(&mut state);
            state.clone()
        };
        self.view.render(&snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodeconsole_domain::render::{self, NodeOption};
    use serde_json::json;
    use std::cell::RefCell;
    use std::future::{Future, ready};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Action(ActionRequest),
        SetNumber(SetNumberRequest),
    }

    struct FakeApi {
        payload: RefCell<serde_json::Value>,
        list_error: RefCell<Option<ApiError>>,
        command_error: RefCell<Option<ApiError>>,
        calls: RefCell<Vec<Call>>,
    }

    impl FakeApi {
        fn with_payload(payload: serde_json::Value) -> Self {
            Self {
                payload: RefCell::new(payload),
                list_error: RefCell::new(None),
                command_error: RefCell::new(None),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn list_calls(&self) -> usize {
            self.calls.borrow().iter().filter(|c| **c == Call::List).count()
        }

        fn command_result(&self, body: serde_json::Value) -> Result<serde_json::Value, ApiError> {
            match self.command_error.borrow().clone() {
                Some(err) => Err(err),
                None => Ok(body),
            }
        }
    }

    impl NodeApi for FakeApi {
        fn list_nodes(&self) -> impl Future<Output = Result<serde_json::Value, ApiError>> {
            self.calls.borrow_mut().push(Call::List);
            let result = match self.list_error.borrow().clone() {
                Some(err) => Err(err),
                None => Ok(self.payload.borrow().clone()),
            };
            ready(result)
        }

        fn run_action(
            &self,
            request: &ActionRequest,
        ) -> impl Future<Output = Result<serde_json::Value, ApiError>> {
            self.calls.borrow_mut().push(Call::Action(request.clone()));
            ready(self.command_result(json!({"status": "ok", "action": request.action})))
        }

        fn set_number(
            &self,
            request: &SetNumberRequest,
        ) -> impl Future<Output = Result<serde_json::Value, ApiError>> {
            self.calls.borrow_mut().push(Call::SetNumber(request.clone()));
            ready(self.command_result(json!({"status": "ok", "value": request.value})))
        }
    }

    #[derive(Default)]
    struct RecordingView {
        history: RefCell<Vec<ConsoleState>>,
    }

    impl ConsoleView for RecordingView {
        fn render(&self, state: &ConsoleState) {
            self.history.borrow_mut().push(state.clone());
        }
    }

    fn two_nodes() -> serde_json::Value {
        json!([
            {
                "node": "kitchen",
                "switch": "switch.kitchen_plug",
                "switch_name": "Kitchen Plug",
                "switch_state": "off"
            },
            {
                "node": "desk",
                "number": "number.desk_level",
                "number_name": "Desk Level",
                "number_state": "10",
                "number_attrs": {"min": 0, "max": 20, "step": 1}
            }
        ])
    }

    fn make_console(payload: serde_json::Value) -> NodeConsole<FakeApi, RecordingView> {
        NodeConsole::new(FakeApi::with_payload(payload), RecordingView::default())
    }

    #[tokio::test]
    async fn should_list_one_option_per_node_after_load() {
        let console = make_console(two_nodes());
        console.load_nodes().await;

        let state = console.state();
        assert_eq!(state.load, LoadState::Loaded);
        let labels: Vec<String> = state.options().into_iter().map(|o| o.label).collect();
        assert_eq!(labels, vec!["Kitchen Plug (kitchen)", "desk (desk)"]);
    }

    #[tokio::test]
    async fn should_default_selection_to_first_node() {
        let console = make_console(two_nodes());
        console.load_nodes().await;

        assert_eq!(console.state().selection.node(), Some("kitchen"));
        let details = console.render_details().unwrap();
        assert!(details.starts_with("Node: kitchen\nSwitch: Kitchen Plug (switch.kitchen_plug)\n  state: off\n"));
        assert!(details.contains("Number: (not found)"));
    }

    #[tokio::test]
    async fn should_preserve_selection_across_reload() {
        let console = make_console(two_nodes());
        console.load_nodes().await;
        assert!(console.select("desk"));

        console.load_nodes().await;
        assert_eq!(console.state().selection.node(), Some("desk"));
    }

    #[tokio::test]
    async fn should_ignore_selection_of_unknown_node() {
        let console = make_console(two_nodes());
        console.load_nodes().await;

        assert!(!console.select("attic"));
        assert_eq!(console.state().selection.node(), Some("kitchen"));
    }

    #[tokio::test]
    async fn should_show_no_nodes_found_for_non_array_payload() {
        let console = make_console(json!({"error": "discover_failed"}));
        console.load_nodes().await;

        let state = console.state();
        assert_eq!(state.options(), vec![NodeOption::placeholder(render::NO_NODES)]);
        assert!(state.selection.is_empty());
        assert!(console.render_details().is_none());
    }

    #[tokio::test]
    async fn should_leave_list_empty_when_load_fails() {
        let console = make_console(two_nodes());
        console.load_nodes().await;
        *console.api().list_error.borrow_mut() = Some(ApiError::Transport {
            message: "connection refused".to_string(),
        });

        console.load_nodes().await;

        let state = console.state();
        assert!(state.nodes.is_empty());
        assert!(state.selection.is_empty());
        assert_eq!(
            state.load,
            LoadState::Failed("request failed: connection refused".to_string())
        );
        assert_eq!(state.options(), vec![NodeOption::placeholder(render::LOAD_FAILED)]);
    }

    #[tokio::test]
    async fn should_fail_load_on_malformed_node() {
        let console = make_console(json!([{"switch": "switch.orphan"}]));
        console.load_nodes().await;

        assert!(matches!(console.state().load, LoadState::Failed(_)));
    }

    #[tokio::test]
    async fn should_pass_through_loading_before_loaded() {
        let console = make_console(two_nodes());
        console.load_nodes().await;

        let history = console.view().history.borrow();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].load, LoadState::Loading);
        assert_eq!(history[1].load, LoadState::Loaded);
    }

    #[tokio::test]
    async fn should_post_action_for_selected_node_and_refetch_once() {
        let console = make_console(two_nodes());
        console.load_nodes().await;

        let result = console.send_action(NodeAction::Toggle).await.unwrap();
        assert_eq!(result, json!({"status": "ok", "action": "toggle"}));

        assert_eq!(
            console.api().calls(),
            vec![
                Call::List,
                Call::Action(ActionRequest {
                    node: "kitchen".to_string(),
                    action: NodeAction::Toggle,
                }),
                Call::List,
            ]
        );
        let state = console.state();
        assert_eq!(state.command, CommandStatus::Completed(result));
    }

    #[tokio::test]
    async fn should_show_sending_while_command_is_in_flight() {
        let console = make_console(two_nodes());
        console.load_nodes().await;
        console.send_action(NodeAction::On).await.unwrap();

        let history = console.view().history.borrow();
        assert!(history.iter().any(|s| s.status_text() == "Sending..."));
    }

    #[tokio::test]
    async fn should_reject_action_without_selection() {
        let console = make_console(json!([]));
        console.load_nodes().await;

        let result = console.send_action(NodeAction::On).await;
        assert!(matches!(
            result,
            Err(ConsoleError::Validation(ValidationError::NoSelection))
        ));
        assert_eq!(console.api().calls(), vec![Call::List]);
        assert_eq!(console.state().status_text(), "No node selected");
    }

    #[tokio::test]
    async fn should_report_action_failure_and_still_refetch() {
        let console = make_console(two_nodes());
        console.load_nodes().await;
        *console.api().command_error.borrow_mut() = Some(ApiError::Status {
            status: 400,
            message: "no_switch_for_node".to_string(),
        });

        let result = console.send_action(NodeAction::Off).await;
        assert!(matches!(result, Err(ConsoleError::Api(ApiError::Status { status: 400, .. }))));
        assert_eq!(console.api().list_calls(), 2);
        assert_eq!(console.state().status_text(), "Error: no_switch_for_node");
    }

    #[tokio::test]
    async fn should_reject_non_numeric_input_without_network_call() {
        let console = make_console(two_nodes());
        console.load_nodes().await;
        console.select("desk");

        let result = console.set_number_value("twelve").await;
        assert!(matches!(
            result,
            Err(ConsoleError::Validation(ValidationError::InvalidNumber { .. }))
        ));
        assert_eq!(console.api().calls(), vec![Call::List]);
        assert_eq!(console.state().status_text(), "Invalid number input");
    }

    #[tokio::test]
    async fn should_post_number_and_refetch_once() {
        let console = make_console(two_nodes());
        console.load_nodes().await;
        console.select("desk");

        let result = console.set_number_value(" 12.5 ").await.unwrap();
        assert_eq!(result, json!({"status": "ok", "value": 12.5}));
        assert_eq!(
            console.api().calls(),
            vec![
                Call::List,
                Call::SetNumber(SetNumberRequest {
                    node: "desk".to_string(),
                    value: 12.5,
                }),
                Call::List,
            ]
        );
    }

    #[tokio::test]
    async fn should_reject_number_without_selection() {
        let console = make_console(two_nodes());

        let result = console.set_number_value("3").await;
        assert!(matches!(
            result,
            Err(ConsoleError::Validation(ValidationError::NoSelection))
        ));
        assert!(console.api().calls().is_empty());
    }
}
