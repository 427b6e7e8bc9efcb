use serde::{Deserialize, Serialize};

/// Envelope returned by every mutating endpoint (insert, update, delete, webhook CRUD).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MutationResponse {
    /// Server-supplied reason for a `success: false` response.
    pub fn failure_message(&self) -> String {
        failure_message(self.error.as_deref(), self.message.as_deref())
    }
}

/// Picks `error`, then `message`, then a generic fallback.
pub fn failure_message(error: Option<&str>, message: Option<&str>) -> String {
    failure_message_or(error, message, "Unknown error")
}

/// First non-empty of `error` and `message`, else `fallback`.
pub fn failure_message_or(error: Option<&str>, message: Option<&str>, fallback: &str) -> String {
    error
        .filter(|e| !e.is_empty())
        .or(message.filter(|m| !m.is_empty()))
        .unwrap_or(fallback)
        .to_string()
}
