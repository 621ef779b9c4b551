//! Text rendering for the console: selectable options and node details.

use crate::node::{Node, NumberAttrs};
use crate::selection::Selection;

/// Shown in place of a capability the node does not expose.
pub const NOT_FOUND: &str = "(not found)";
/// Placeholder option when the list is empty.
pub const NO_NODES: &str = "No nodes found";
/// Placeholder option while the list is loading.
pub const LOADING: &str = "Loading...";
/// Placeholder option after a failed load.
pub const LOAD_FAILED: &str = "Error loading nodes";

/// One entry of the node selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeOption {
    /// Node identifier, `None` for a placeholder entry.
    pub value: Option<String>,
    pub label: String,
}

impl NodeOption {
    /// A non-selectable entry carrying only a message.
    #[must_use]
    pub fn placeholder(label: &str) -> Self {
        Self {
            value: None,
            label: label.to_string(),
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.value.is_none()
    }
}

/// Options for a loaded list: one per node, labelled
/// `"<switch name or node id> (<node id>)"`, or a single
/// [`NO_NODES`] placeholder when the list is empty.
#[must_use]
pub fn node_options(nodes: &[Node]) -> Vec<NodeOption> {
    if nodes.is_empty() {
        return vec![NodeOption::placeholder(NO_NODES)];
    }
    nodes
        .iter()
        .map(|node| NodeOption {
            value: Some(node.node.clone()),
            label: format!("{} ({})", node.display_name(), node.node),
        })
        .collect()
}

/// Human-readable summary of the selected node.
///
/// Returns `None` when nothing is selected or the selection is not in
/// `nodes`, so the detail view stays unpopulated.
#[must_use]
pub fn render_details(nodes: &[Node], selection: &Selection) -> Option<String> {
    selection.find(nodes).map(describe_node)
}

/// Detail text for a single node, one line per field.
#[must_use]
pub fn describe_node(node: &Node) -> String {
    let mut lines = vec![format!("Node: {}", node.node)];

    match node.switch_capability() {
        Some(switch) => {
            lines.push(format!("Switch: {} ({})", switch.name, switch.entity_id));
            lines.push(format!("  state: {}", state_or_unknown(switch.state)));
        }
        None => lines.push(format!("Switch: {NOT_FOUND}")),
    }

    match node.number_capability() {
        Some(number) => {
            lines.push(format!("Number: {} ({})", number.name, number.entity_id));
            lines.push(format!("  state: {}", state_or_unknown(number.state)));
            lines.push(number_bounds(number.attrs.unwrap_or(&NumberAttrs::default())));
        }
        None => lines.push(format!("Number: {NOT_FOUND}")),
    }

    // Sensors and lights are read-only; only show them when present.
    if let Some(sensor) = node.sensor_capability() {
        lines.push(format!("Sensor: {} ({})", sensor.name, sensor.entity_id));
        lines.push(format!("  state: {}", state_or_unknown(sensor.state)));
    }
    if let Some(light) = node.light_entity() {
        lines.push(format!("Light: {light}"));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn number_bounds(attrs: &NumberAttrs) -> String {
    let mut line = format!(
        "  min: {}  max: {}  step: {}",
        bound(attrs.min),
        bound(attrs.max),
        bound(attrs.step)
    );
    if let Some(unit) = attrs.unit_of_measurement.as_deref() {
        line.push_str("  unit: ");
        line.push_str(unit);
    }
    line
}

fn state_or_unknown(state: Option<&str>) -> &str {
    state.unwrap_or("(unknown)")
}

fn bound(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
