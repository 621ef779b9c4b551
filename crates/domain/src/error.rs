//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

/// A command was rejected locally, before any request was sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No node is currently selected.
    #[error("No node selected")]
    NoSelection,
    /// The value typed for a number command is not a finite number.
    #[error("Invalid number input")]
    InvalidNumber {
        /// The raw text that failed to parse.
        input: String,
    },
}

/// The node list payload could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// An element of the node array does not match the node schema.
    #[error("malformed node at index {index}")]
    MalformedNode {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_invalid_number_message() {
        let err = ValidationError::InvalidNumber {
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid number input");
    }

    #[test]
    fn should_display_no_selection_message() {
        assert_eq!(ValidationError::NoSelection.to_string(), "No node selected");
    }
}
