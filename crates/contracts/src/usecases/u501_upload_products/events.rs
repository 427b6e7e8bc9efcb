use serde::{Deserialize, Serialize};

/// Events streamed by `/upload` as `data: {...}` lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UploadEvent {
    /// A batch of rows was written
    Progress {
        #[serde(default)]
        current_batch: u64,
        #[serde(default)]
        total_batches: u64,
        #[serde(default)]
        total_rows: u64,
        #[serde(default)]
        rows_processed: u64,
    },

    /// Upload finished; terminal
    Complete {
        #[serde(default)]
        message: String,
        #[serde(default)]
        rows_processed: Option<u64>,
    },

    /// Upload aborted on the server; terminal
    Error {
        #[serde(default)]
        error: String,
        #[serde(default)]
        message: String,
    },

    #[serde(other)]
    Unknown,
}

impl UploadEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, UploadEvent::Complete { .. } | UploadEvent::Error { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_progress() {
        let ev: UploadEvent =
            serde_json::from_str(r#"{"type":"progress","current_batch":1,"total_batches":4}"#)
                .unwrap();
        assert_eq!(
            ev,
            UploadEvent::Progress {
                current_batch: 1,
                total_batches: 4,
                total_rows: 0,
                rows_processed: 0,
            }
        );
        assert!(!ev.is_terminal());
    }

    #[test]
    fn test_decode_terminal_events() {
        let ev: UploadEvent =
            serde_json::from_str(r#"{"type":"complete","message":"Done","rows_processed":1200}"#)
                .unwrap();
        assert!(ev.is_terminal());

        let ev: UploadEvent = serde_json::from_str(
            r#"{"type":"error","error":"Invalid CSV","message":"missing SKU column"}"#,
        )
        .unwrap();
        assert_eq!(
            ev,
            UploadEvent::Error {
                error: "Invalid CSV".to_string(),
                message: "missing SKU column".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_type_is_tolerated() {
        let ev: UploadEvent = serde_json::from_str(r#"{"type":"heartbeat"}"#).unwrap();
        assert_eq!(ev, UploadEvent::Unknown);
    }
}
