use crate::shared::api_response::failure_message_or;
use serde::{Deserialize, Serialize};

/// Response of `POST /delete`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteAllResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl DeleteAllResponse {
    pub fn failure_message(&self) -> String {
        failure_message_or(
            self.error.as_deref(),
            self.message.as_deref(),
            "Delete failed",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_skips_empty_fields() {
        let resp: DeleteAllResponse =
            serde_json::from_str(r#"{"success":false,"error":"","message":"locked"}"#).unwrap();
        assert_eq!(resp.failure_message(), "locked");

        let resp: DeleteAllResponse =
            serde_json::from_str(r#"{"success":false,"error":"","message":""}"#).unwrap();
        assert_eq!(resp.failure_message(), "Delete failed");
    }
}
