//! Upload validation, progress text and SSE event decoding.

use crate::shared::api_utils::ApiError;
use crate::shared::number_format::format_count;
use crate::shared::sse::{parse_data_line, SseLineBuffer};
use contracts::usecases::u501_upload_products::UploadEvent;

/// Check the picked file before anything is sent.
pub fn validate_csv_file(file_name: Option<&str>) -> Result<(), ApiError> {
    let name = file_name.ok_or_else(|| {
        ApiError::Validation("Please select a CSV file to upload.".to_string())
    })?;
    if !name.to_lowercase().ends_with(".csv") {
        return Err(ApiError::Validation(
            "Please select a valid CSV file.".to_string(),
        ));
    }
    Ok(())
}

/// Bar width in percent. A zero batch count counts as one batch.
pub fn percentage(current_batch: u64, total_batches: u64) -> u32 {
    let total = total_batches.max(1) as f64;
    let pct = (current_batch as f64 / total * 100.0).round();
    pct.clamp(0.0, 100.0) as u32
}

/// Rendered state of the progress bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadProgress {
    pub percent: u32,
    pub batch_text: String,
    pub rows_text: String,
}

impl Default for UploadProgress {
    fn default() -> Self {
        Self::from_counts(0, 0, 0, 0)
    }
}

impl UploadProgress {
    pub fn from_counts(
        current_batch: u64,
        total_batches: u64,
        total_rows: u64,
        rows_processed: u64,
    ) -> Self {
        Self {
            percent: percentage(current_batch, total_batches),
            batch_text: format!("Batch {} of {}", current_batch, total_batches.max(1)),
            rows_text: format!(
                "{} of {} rows processed",
                format_count(rows_processed),
                format_count(total_rows)
            ),
        }
    }

    pub fn width_style(&self) -> String {
        format!("width: {}%;", self.percent)
    }
}

pub fn complete_message(message: &str, rows_processed: Option<u64>) -> String {
    let rows = rows_processed
        .filter(|n| *n > 0)
        .map(|n| n.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    format!("✅ {}\n\nRows processed: {}", message, rows)
}

pub fn server_error_message(error: &str, message: &str) -> String {
    format!("❌ {}: {}", error, message)
}

pub fn upload_failed_message(reason: &str) -> String {
    format!("❌ Upload failed: {}", reason)
}

/// Turns raw response chunks into upload events.
///
/// Lines that are not `data:` lines are ignored; malformed JSON is logged
/// and skipped so later events still apply.
#[derive(Debug, Default)]
pub struct UploadStreamDecoder {
    lines: SseLineBuffer,
}

impl UploadStreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, chunk: &[u8]) -> Vec<UploadEvent> {
        self.lines
            .push(chunk)
            .iter()
            .filter_map(|line| match parse_data_line::<UploadEvent>(line)? {
                Ok(UploadEvent::Unknown) => None,
                Ok(event) => Some(event),
                Err(e) => {
                    log::error!("Error parsing SSE data: {} ({})", e, line);
                    None
                }
            })
            .collect()
    }

    /// Drop whatever incomplete line is left once the stream has ended.
    pub fn finish(self) {
        let leftover = self.lines.pending_len();
        if leftover > 0 {
            log::debug!("Discarding {} bytes of incomplete SSE line", leftover);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STREAM: &str = concat!(
        "data: {\"type\":\"progress\",\"current_batch\":1,\"total_batches\":2,\"total_rows\":1500,\"rows_processed\":1000}\n\n",
        "data: {\"type\":\"progress\",\"current_batch\":2,\"total_batches\":2,\"total_rows\":1500,\"rows_processed\":1500}\n\n",
        "data: {\"type\":\"complete\",\"message\":\"Upload complete – 1500 rows\",\"rows_processed\":1500}\n\n",
    );

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            validate_csv_file(None).unwrap_err().to_string(),
            "Please select a CSV file to upload."
        );
        assert_eq!(
            validate_csv_file(Some("products.xlsx")).unwrap_err().to_string(),
            "Please select a valid CSV file."
        );
        assert!(validate_csv_file(Some("PRODUCTS.CSV")).is_ok());
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(2, 4), 50);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(1, 0), 100);
    }

    #[test]
    fn test_progress_text() {
        let p = UploadProgress::from_counts(3, 10, 500_000, 150_000);
        assert_eq!(p.percent, 30);
        assert_eq!(p.batch_text, "Batch 3 of 10");
        assert_eq!(p.rows_text, "150,000 of 500,000 rows processed");
        assert_eq!(p.width_style(), "width: 30%;");

        let reset = UploadProgress::default();
        assert_eq!(reset.batch_text, "Batch 0 of 1");
        assert_eq!(reset.rows_text, "0 of 0 rows processed");
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            complete_message("Done", Some(42)),
            "✅ Done\n\nRows processed: 42"
        );
        assert_eq!(complete_message("Done", None), "✅ Done\n\nRows processed: N/A");
        assert_eq!(
            server_error_message("ValidationError", "missing SKU column"),
            "❌ ValidationError: missing SKU column"
        );
        assert_eq!(
            upload_failed_message("HTTP error! status: 500"),
            "❌ Upload failed: HTTP error! status: 500"
        );
    }

    #[test]
    fn test_events_independent_of_chunk_boundaries() {
        let bytes = STREAM.as_bytes();
        let mut whole = UploadStreamDecoder::new();
        let expected = whole.feed(bytes);
        assert_eq!(expected.len(), 3);
        assert!(expected[2].is_terminal());

        // The en dash is multi-byte, so some split points land inside it.
        for chunk_size in [1, 2, 3, 7, 64] {
            let mut decoder = UploadStreamDecoder::new();
            let mut events = Vec::new();
            for chunk in bytes.chunks(chunk_size) {
                events.extend(decoder.feed(chunk));
            }
            assert_eq!(events, expected, "chunk size {}", chunk_size);
        }
    }

    #[test]
    fn test_malformed_line_is_skipped() {
        let mut decoder = UploadStreamDecoder::new();
        let events = decoder.feed(
            b"data: {not json}\n: keep-alive\ndata: {\"type\":\"heartbeat\"}\ndata: {\"type\":\"error\",\"error\":\"DbError\",\"message\":\"locked\"}\n",
        );
        assert_eq!(
            events,
            vec![UploadEvent::Error {
                error: "DbError".to_string(),
                message: "locked".to_string(),
            }]
        );
    }
}
