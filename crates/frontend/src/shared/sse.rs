//! Incremental reader for `data:`-prefixed server-sent-event lines.

use serde::de::DeserializeOwned;

pub const DATA_PREFIX: &str = "data: ";

/// Reassembles newline-delimited lines from arbitrarily split byte chunks.
///
/// Splitting happens on raw bytes, so a multi-byte UTF-8 character cut in half
/// by a read boundary is decoded only once its line is complete. The trailing
/// incomplete segment stays pending until the next chunk.
#[derive(Debug, Default, Clone)]
pub struct SseLineBuffer {
    pending: Vec<u8>,
}

impl SseLineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk and return every line it completed, without the line terminator.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.pending.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            let text = String::from_utf8_lossy(&line[..line.len() - 1]);
            lines.push(text.trim_end_matches('\r').to_string());
        }
        lines
    }

    /// Bytes of the incomplete trailing line. Dropped when the stream ends.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

/// Parse one SSE line.
///
/// Returns `None` for lines without the `data: ` prefix (comments, blank
/// separators, `event:` fields), otherwise the JSON decode result.
pub fn parse_data_line<T: DeserializeOwned>(line: &str) -> Option<Result<T, serde_json::Error>> {
    line.strip_prefix(DATA_PREFIX)
        .map(|payload| serde_json::from_str::<T>(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_keeps_partial_line_pending() {
        let mut buf = SseLineBuffer::new();
        assert!(buf.push(b"data: {\"a\"").is_empty());
        assert_eq!(buf.pending_len(), 10);
        let lines = buf.push(b":1}\ndata: {");
        assert_eq!(lines, vec!["data: {\"a\":1}".to_string()]);
        assert_eq!(buf.pending_len(), 7);
    }

    #[test]
    fn test_multiple_lines_in_one_chunk() {
        let mut buf = SseLineBuffer::new();
        let lines = buf.push(b"data: 1\n\ndata: 2\r\n");
        assert_eq!(lines, vec!["data: 1", "", "data: 2"]);
        assert_eq!(buf.pending_len(), 0);
    }

    #[test]
    fn test_multibyte_split_across_chunks() {
        let text = "data: {\"message\":\"Готово ✅\"}\n".as_bytes();
        // Cut inside the multi-byte checkmark
        let cut = text.len() - 4;
        let mut buf = SseLineBuffer::new();
        assert!(buf.push(&text[..cut]).is_empty());
        let lines = buf.push(&text[cut..]);
        assert_eq!(lines, vec!["data: {\"message\":\"Готово ✅\"}"]);
    }

    #[test]
    fn test_parse_data_line() {
        let parsed: Option<Result<Value, _>> = parse_data_line("data: {\"type\":\"progress\"}");
        assert_eq!(parsed.unwrap().unwrap()["type"], "progress");

        assert!(parse_data_line::<Value>(": keep-alive").is_none());
        assert!(parse_data_line::<Value>("data:{}").is_none());
        assert!(parse_data_line::<Value>("data: {broken").unwrap().is_err());
    }
}
