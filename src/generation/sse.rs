//! SSE parsing for streaming chat-completion responses.

use anyhow::Result;
use bytes::Bytes;
use futures_util::Stream;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct StreamResponse {
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: Delta,
}

#[derive(Debug, Deserialize)]
struct Delta {
    content: Option<String>,
}

/// Converts a raw SSE byte stream into a stream of text chunks.
///
/// Buffers partial lines across network chunks, yields the content of each
/// `data:` event, and terminates on the `[DONE]` marker.
pub fn sse_to_text_stream(
    byte_stream: impl Stream<Item = reqwest::Result<Bytes>> + Send + 'static,
) -> impl Stream<Item = Result<String>> + Send {
    async_stream::stream! {
        use futures_util::StreamExt;

        let mut byte_stream = std::pin::pin!(byte_stream);
        let mut buffer = String::new();

        while let Some(chunk_result) = byte_stream.next().await {
            let chunk = match chunk_result {
                Ok(c) => c,
                Err(e) => {
                    yield Err(anyhow::anyhow!("Stream error: {e}"));
                    continue;
                }
            };

            buffer.push_str(&String::from_utf8_lossy(&chunk));

            while let Some(line_end) = buffer.find('\n') {
                let line: String = buffer.drain(..=line_end).collect();
                let line = line.trim();

                if line == "data: [DONE]" {
                    return;
                }
                if let Some(content) = parse_sse_line(line) {
                    yield Ok(content);
                }
            }
        }
    }
}

/// Extracts the text content from a single trimmed SSE line.
///
/// Returns `None` for non-data lines, empty deltas and parse errors.
fn parse_sse_line(line: &str) -> Option<String> {
    let json_str = line.strip_prefix("data: ")?;

    let response = serde_json::from_str::<StreamResponse>(json_str).ok()?;

    let content: String = response
        .choices
        .into_iter()
        .filter_map(|c| c.delta.content)
        .filter(|c| !c.is_empty())
        .collect();

    if content.is_empty() { None } else { Some(content) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sse_line_with_content() {
        let line = r#"data: {"choices":[{"delta":{"content":"Hello"}}]}"#;
        assert_eq!(parse_sse_line(line), Some("Hello".to_string()));
    }

    #[test]
    fn test_parse_sse_line_empty_content() {
        let line = r#"data: {"choices":[{"delta":{"content":""}}]}"#;
        assert_eq!(parse_sse_line(line), None);
    }

    #[test]
    fn test_parse_sse_line_null_content() {
        let line = r#"data: {"choices":[{"delta":{}}]}"#;
        assert_eq!(parse_sse_line(line), None);
    }

    #[test]
    fn test_parse_sse_line_multiple_choices() {
        let line =
            r#"data: {"choices":[{"delta":{"content":"Hello"}},{"delta":{"content":" World"}}]}"#;
        assert_eq!(parse_sse_line(line), Some("Hello World".to_string()));
    }

    #[test]
    fn test_parse_sse_line_no_data_prefix() {
        let line = r#"{"choices":[{"delta":{"content":"Hello"}}]}"#;
        assert_eq!(parse_sse_line(line), None);
    }

    #[test]
    fn test_parse_sse_line_invalid_json() {
        assert_eq!(parse_sse_line("data: not json"), None);
    }

    #[test]
    fn test_parse_sse_line_comment_and_empty() {
        assert_eq!(parse_sse_line(": keep-alive"), None);
        assert_eq!(parse_sse_line(""), None);
    }
}
