//! Commands: outbound requests that change a node's state.
//!
//! Bodies are ephemeral: built, posted, and dropped.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Switch operation posted to `api/action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeAction {
    On,
    Off,
    Toggle,
}

impl NodeAction {
    /// All actions, in the order the console offers them.
    pub const ALL: [Self; 3] = [Self::On, Self::Off, Self::Toggle];

    /// Lowercase wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Toggle => "toggle",
        }
    }

    /// Button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::On => "On",
            Self::Off => "Off",
            Self::Toggle => "Toggle",
        }
    }
}

impl std::fmt::Display for NodeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST api/action`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub node: String,
    pub action: NodeAction,
}

/// Body of `POST api/set_number`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetNumberRequest {
    pub node: String,
    pub value: f64,
}

/// Parse the text typed into the number field.
///
/// Surrounding whitespace is ignored. Empty input and non-finite values
/// (`NaN`, `inf`) are rejected.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidNumber`] when the text is not a finite
/// number.
pub fn parse_number_input(input: &str) -> Result<f64, ValidationError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ValidationError::InvalidNumber {
            input: input.to_string(),
        })
}
