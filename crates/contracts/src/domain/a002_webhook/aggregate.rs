use crate::shared::api_response::failure_message;
use serde::{Deserialize, Serialize};

// ============================================================================
// Event type
// ============================================================================

/// Catalog event a webhook subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WebhookEventType {
    #[serde(rename = "product.created")]
    ProductCreated,
    #[serde(rename = "product.updated")]
    ProductUpdated,
    #[serde(rename = "product.deleted")]
    ProductDeleted,
    #[serde(rename = "product.uploaded")]
    ProductUploaded,
    #[serde(rename = "all")]
    All,
}

impl WebhookEventType {
    pub const ALL: [WebhookEventType; 5] = [
        WebhookEventType::ProductCreated,
        WebhookEventType::ProductUpdated,
        WebhookEventType::ProductDeleted,
        WebhookEventType::ProductUploaded,
        WebhookEventType::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WebhookEventType::ProductCreated => "product.created",
            WebhookEventType::ProductUpdated => "product.updated",
            WebhookEventType::ProductDeleted => "product.deleted",
            WebhookEventType::ProductUploaded => "product.uploaded",
            WebhookEventType::All => "all",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WebhookEventType::ProductCreated => "Product Created",
            WebhookEventType::ProductUpdated => "Product Updated",
            WebhookEventType::ProductDeleted => "Product Deleted",
            WebhookEventType::ProductUploaded => "Product Uploaded",
            WebhookEventType::All => "All Events",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Registered outbound webhook. `last_test_*` are written by the server after a test call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    pub id: i64,
    pub url: String,
    pub event_type: WebhookEventType,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub last_test_at: Option<String>,
    #[serde(default)]
    pub last_test_status: Option<u16>,
    #[serde(default)]
    pub last_test_response_time: Option<f64>,
}

impl Webhook {
    /// Label of the enable/disable action button
    pub fn toggle_label(&self) -> &'static str {
        if self.enabled {
            "Disable"
        } else {
            "Enable"
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.enabled {
            "Enabled"
        } else {
            "Disabled"
        }
    }

    pub fn last_test_succeeded(&self) -> bool {
        self.last_test_status.is_some_and(is_success_status)
    }
}

pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Create / update body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookDto {
    pub url: String,
    pub event_type: WebhookEventType,
    pub enabled: bool,
}

impl From<&Webhook> for WebhookDto {
    fn from(w: &Webhook) -> Self {
        Self {
            url: w.url.clone(),
            event_type: w.event_type,
            enabled: w.enabled,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookListResponse {
    pub success: bool,
    #[serde(default)]
    pub webhooks: Option<Vec<Webhook>>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl WebhookListResponse {
    /// The backend reports a missing webhooks table as an error mentioning a relation or table.
    pub fn is_missing_table(&self) -> bool {
        if self.success || self.error.is_none() {
            return false;
        }
        self.message
            .as_deref()
            .is_some_and(|m| m.contains("relation") || m.contains("table"))
    }

    pub fn failure_message(&self) -> String {
        // The list endpoint puts the human-readable part in `message`.
        failure_message(self.message.as_deref(), self.error.as_deref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookToggleResponse {
    pub success: bool,
    #[serde(default)]
    pub webhook: Option<Webhook>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Outcome of a synchronous delivery check
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookTestResponse {
    pub success: bool,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub response_time: Option<f64>,
    #[serde(default)]
    pub response_body: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub webhook: Option<Webhook>,
}

impl WebhookTestResponse {
    /// Result shown when the test request itself could not be completed.
    pub fn transport_failure(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(reason.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_wire_values() {
        for t in WebhookEventType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
            assert_eq!(WebhookEventType::from_str(t.as_str()), Some(t));
        }
        assert_eq!(WebhookEventType::from_str("order.created"), None);
    }

    #[test]
    fn test_webhook_decodes_optional_diagnostics() {
        let w: Webhook = serde_json::from_str(
            r#"{"id":7,"url":"https://example.com/hook","event_type":"all","enabled":false,
                "last_test_at":null,"created_at":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(w.id, 7);
        assert_eq!(w.event_type, WebhookEventType::All);
        assert_eq!(w.last_test_status, None);
        assert_eq!(w.toggle_label(), "Enable");
        assert_eq!(w.status_label(), "Disabled");
        assert!(!w.last_test_succeeded());
    }

    #[test]
    fn test_fractional_response_time() {
        let resp: WebhookTestResponse =
            serde_json::from_str(r#"{"success":true,"status_code":200,"response_time":123.45}"#)
                .unwrap();
        assert_eq!(resp.response_time, Some(123.45));

        let w: Webhook = serde_json::from_str(
            r#"{"id":1,"url":"https://example.com/hook","event_type":"all","enabled":true,
                "last_test_status":200,"last_test_response_time":87}"#,
        )
        .unwrap();
        assert_eq!(w.last_test_response_time, Some(87.0));
    }

    #[test]
    fn test_missing_table_detection() {
        let resp: WebhookListResponse = serde_json::from_str(
            r#"{"success":false,"error":"db","message":"relation \"webhooks\" does not exist"}"#,
        )
        .unwrap();
        assert!(resp.is_missing_table());

        let resp: WebhookListResponse =
            serde_json::from_str(r#"{"success":false,"error":"db","message":"timeout"}"#).unwrap();
        assert!(!resp.is_missing_table());
        assert_eq!(resp.failure_message(), "timeout");

        let resp: WebhookListResponse =
            serde_json::from_str(r#"{"success":false,"message":"no such table"}"#).unwrap();
        assert!(!resp.is_missing_table());
    }
}
