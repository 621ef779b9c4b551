//! Node: a remotely controlled device as reported by `api/nodes`.
//!
//! A node is an immutable snapshot: the backend creates it, the console
//! caches it until the next refresh and never mutates it locally.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::PayloadError;

/// A device exposing optional switch, number and sensor capabilities.
///
/// Each capability is present when its representative entity id is set
/// (`switch`, `number`, `sensor`). Names and states are whatever the backend
/// reported; unknown fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    /// Node identifier, unique within one list.
    pub node: String,

    /// Entity id of the representative switch.
    #[serde(default)]
    pub switch: Option<String>,
    #[serde(default)]
    pub switch_name: Option<String>,
    #[serde(default, deserialize_with = "state_text")]
    pub switch_state: Option<String>,

    /// Entity id of the representative number.
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub number_name: Option<String>,
    #[serde(default, deserialize_with = "state_text")]
    pub number_state: Option<String>,
    #[serde(default)]
    pub number_attrs: Option<NumberAttrs>,

    /// Entity id of the representative sensor.
    #[serde(default)]
    pub sensor: Option<String>,
    #[serde(default)]
    pub sensor_name: Option<String>,
    #[serde(default, deserialize_with = "state_text")]
    pub sensor_state: Option<String>,

    /// Entity id of the representative light, if any.
    #[serde(default)]
    pub light: Option<String>,
}

/// Bounds and unit of a number capability.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberAttrs {
    #[serde(deserialize_with = "lenient_f64")]
    pub min: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub max: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub step: Option<f64>,
    pub unit_of_measurement: Option<String>,
}

/// Borrowed view of a node's switch capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchCapability<'a> {
    pub entity_id: &'a str,
    pub name: &'a str,
    pub state: Option<&'a str>,
}

/// Borrowed view of a node's number capability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberCapability<'a> {
    pub entity_id: &'a str,
    pub name: &'a str,
    pub state: Option<&'a str>,
    pub attrs: Option<&'a NumberAttrs>,
}

/// Borrowed view of a node's sensor capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorCapability<'a> {
    pub entity_id: &'a str,
    pub name: &'a str,
    pub state: Option<&'a str>,
}

impl Node {
    /// Create a node with only an identifier and no capabilities.
    #[must_use]
    pub fn new(node: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            ..Self::default()
        }
    }

    /// Label used in the selectable list: the switch name, or the node id
    /// when the node has no named switch.
    #[must_use]
    pub fn display_name(&self) -> &str {
        non_empty(self.switch_name.as_deref()).unwrap_or(&self.node)
    }

    /// The switch capability, if the node exposes one.
    #[must_use]
    pub fn switch_capability(&self) -> Option<SwitchCapability<'_>> {
        let entity_id = non_empty(self.switch.as_deref())?;
        Some(SwitchCapability {
            entity_id,
            name: non_empty(self.switch_name.as_deref()).unwrap_or(entity_id),
            state: self.switch_state.as_deref(),
        })
    }

    /// The number capability, if the node exposes one.
    #[must_use]
    pub fn number_capability(&self) -> Option<NumberCapability<'_>> {
        let entity_id = non_empty(self.number.as_deref())?;
        Some(NumberCapability {
            entity_id,
            name: non_empty(self.number_name.as_deref()).unwrap_or(entity_id),
            state: self.number_state.as_deref(),
            attrs: self.number_attrs.as_ref(),
        })
    }

    /// Entity id of the representative light, if the node has one.
    #[must_use]
    pub fn light_entity(&self) -> Option<&str> {
        non_empty(self.light.as_deref())
    }

    /// The sensor capability, if the node exposes one.
    #[must_use]
    pub fn sensor_capability(&self) -> Option<SensorCapability<'_>> {
        let entity_id = non_empty(self.sensor.as_deref())?;
        Some(SensorCapability {
            entity_id,
            name: non_empty(self.sensor_name.as_deref()).unwrap_or(entity_id),
            state: self.sensor_state.as_deref(),
        })
    }
}

impl NumberCapability<'_> {
    /// Current value parsed as a number, when the reported state is numeric.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.state.and_then(|s| s.trim().parse::<f64>().ok())
    }
}

/// Decode the body of `GET api/nodes`.
///
/// Anything other than a JSON array (an error object, `null`, …) is
/// treated as an empty list.
///
/// # Errors
///
/// Returns [`PayloadError::MalformedNode`] when an array element does not
/// match the [`Node`] schema.
pub fn parse_node_list(payload: serde_json::Value) -> Result<Vec<Node>, PayloadError> {
    let serde_json::Value::Array(items) = payload else {
        return Ok(Vec::new());
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| PayloadError::MalformedNode { index, source })
        })
        .collect()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Entity states are strings in practice but numbers and booleans are
/// accepted and kept in their textual form.
fn state_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Accept numbers and numeric strings; anything else becomes `None`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
