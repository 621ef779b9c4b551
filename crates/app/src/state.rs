//! Console state: everything the console displays, held explicitly.

use nodeconsole_domain::error::ValidationError;
use nodeconsole_domain::node::Node;
use nodeconsole_domain::render::{self, NodeOption};
use nodeconsole_domain::selection::Selection;

/// Status text shown while a command is in flight.
pub const SENDING: &str = "Sending...";

/// Progress of the node list. Reset to `Loading` on every refresh trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Outcome of the last command.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CommandStatus {
    #[default]
    Idle,
    Sending,
    /// Raw JSON returned by the backend.
    Completed(serde_json::Value),
    Failed(String),
    /// Rejected locally; nothing was sent.
    Rejected(ValidationError),
}

/// Snapshot of the console.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsoleState {
    /// Last fetched node list.
    pub nodes: Vec<Node>,
    pub selection: Selection,
    pub load: LoadState,
    pub command: CommandStatus,
}

impl ConsoleState {
    /// Entries of the node selector.
    ///
    /// While the first load is pending a single "Loading..." placeholder is
    /// shown; a reload keeps the previous list visible until it resolves.
    #[must_use]
    pub fn options(&self) -> Vec<NodeOption> {
        match &self.load {
            LoadState::Failed(_) => vec![NodeOption::placeholder(render::LOAD_FAILED)],
            LoadState::Idle | LoadState::Loading if self.nodes.is_empty() => {
                vec![NodeOption::placeholder(render::LOADING)]
            }
            _ => render::node_options(&self.nodes),
        }
    }

    /// Detail text for the selected node, `None` when nothing is selected.
    #[must_use]
    pub fn details(&self) -> Option<String> {
        render::render_details(&self.nodes, &self.selection)
    }

    #[must_use]
    pub fn selected_node(&self) -> Option<&Node> {
        self.selection.find(&self.nodes)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    /// Text for the shared status area: a load failure first, then the
    /// outcome of the last command.
    #[must_use]
    pub fn status_text(&self) -> String {
        let mut lines = Vec::new();
        if let LoadState::Failed(message) = &self.load {
            lines.push(format!("Failed to load nodes: {message}"));
        }
        match &self.command {
            CommandStatus::Idle => {}
            CommandStatus::Sending => lines.push(SENDING.to_string()),
            CommandStatus::Completed(result) => lines.push(
                serde_json::to_string_pretty(result).unwrap_or_else(|_| result.to_string()),
            ),
            CommandStatus::Failed(message) => lines.push(format!("Error: {message}")),
            CommandStatus::Rejected(err) => lines.push(err.to_string()),
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn loaded(ids: &[&str]) -> ConsoleState {
        let nodes: Vec<Node> = ids.iter().map(|id| Node::new(*id)).collect();
        ConsoleState {
            selection: Selection::none().reconcile(&nodes),
            nodes,
            load: LoadState::Loaded,
            command: CommandStatus::Idle,
        }
    }

    #[test]
    fn should_show_loading_placeholder_before_first_load() {
        let state = ConsoleState::default();
        let options = state.options();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, render::LOADING);
    }

    #[test]
    fn should_keep_previous_options_while_reloading() {
        let mut state = loaded(&["a", "b"]);
        state.load = LoadState::Loading;
        assert_eq!(state.options().len(), 2);
    }

    #[test]
    fn should_show_error_placeholder_after_failed_load() {
        let state = ConsoleState {
            load: LoadState::Failed("boom".to_string()),
            ..ConsoleState::default()
        };
        assert_eq!(state.options(), vec![NodeOption::placeholder(render::LOAD_FAILED)]);
        assert_eq!(state.status_text(), "Failed to load nodes: boom");
    }

    #[test]
    fn should_show_no_nodes_found_when_loaded_list_is_empty() {
        let state = loaded(&[]);
        assert_eq!(state.options(), vec![NodeOption::placeholder(render::NO_NODES)]);
        assert!(state.details().is_none());
    }

    #[test]
    fn should_render_status_for_each_command_outcome() {
        let mut state = loaded(&["a"]);
        assert_eq!(state.status_text(), "");

        state.command = CommandStatus::Sending;
        assert_eq!(state.status_text(), "Sending...");

        state.command = CommandStatus::Completed(json!({"status": "ok"}));
        assert_eq!(state.status_text(), "{\n  \"status\": \"ok\"\n}");

        state.command = CommandStatus::Failed("node_not_found".to_string());
        assert_eq!(state.status_text(), "Error: node_not_found");

        state.command = CommandStatus::Rejected(ValidationError::InvalidNumber {
            input: "x".to_string(),
        });
        assert_eq!(state.status_text(), "Invalid number input");
    }

    #[test]
    fn should_expose_selected_node() {
        let state = loaded(&["a", "b"]);
        assert_eq!(state.selected_node().map(|n| n.node.as_str()), Some("a"));
    }
}
