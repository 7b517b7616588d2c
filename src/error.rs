//! Discovery Error Types
//!
//! Structured errors for catalog, staging and registration operations.
//! Controller and CLI code wraps these in `anyhow` with context.

use thiserror::Error;

/// Main error type for discovery operations.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// A staged or registered record does not have the agent record shape.
    #[error("Invalid agent record: {0}")]
    InvalidRecord(String),

    /// The staging payload could not be interpreted at all.
    #[error("Malformed staging payload under '{key}': {reason}")]
    MalformedPayload { key: String, reason: String },

    /// Agent id not present in the catalog.
    #[error("Unknown agent: {agent_id}")]
    UnknownAgent { agent_id: String },

    /// Registration form failed validation.
    #[error("Registration rejected: {0}")]
    Registration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_error_carries_reason() {
        let err = DiscoveryError::Registration("name is required".to_string());
        assert_eq!(err.to_string(), "Registration rejected: name is required");
    }

    #[test]
    fn malformed_payload_names_key() {
        let err = DiscoveryError::MalformedPayload {
            key: "newAgents".to_string(),
            reason: "expected an array".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("newAgents"));
        assert!(msg.contains("expected an array"));
    }

    #[test]
    fn unknown_agent_includes_id() {
        let err = DiscoveryError::UnknownAgent {
            agent_id: "agent-ghost".to_string(),
        };
        assert!(err.to_string().contains("agent-ghost"));
        assert!(err.to_string().contains("Unknown agent"));
    }
}
