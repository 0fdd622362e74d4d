use reqwest::Method;

use crate::error::AnthropicError;

/// Line that ends a streaming body cleanly. Anything after it is ignored.
pub(crate) const STREAM_SENTINEL: &str = "[DONE]";

/// Assembles outbound requests with the fixed protocol headers. Construction
/// and building are total; a bad credential is the server's problem.
pub(crate) struct RequestBuilder<'a> {
    client: &'a reqwest::Client,
    base_url: &'a str,
    api_key: &'a str,
    api_version: &'a str,
    beta: &'a str,
}

impl<'a> RequestBuilder<'a> {
    pub(crate) fn new(
        client: &'a reqwest::Client,
        base_url: &'a str,
        api_key: &'a str,
        api_version: &'a str,
        beta: &'a str,
    ) -> Self {
        Self {
            client,
            base_url,
            api_key,
            api_version,
            beta,
        }
    }

    pub(crate) fn build(&self, path: &str, method: Method) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", self.base_url, path);
        self.client
            .request(method, url)
            .header("content-type", "application/json; charset=utf-8")
            .header("anthropic-version", self.api_version)
            .header("anthropic-beta", self.beta)
            .header("x-api-key", self.api_key)
    }
}

/// One newline-delimited unit of a streaming body.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Frame {
    /// A JSON payload ready to be decoded.
    Data(String),
    /// The end-of-stream sentinel.
    Done,
}

/// Splits an incoming byte stream into frames, carrying partial lines across
/// chunk boundaries. Owns the carry buffer exclusively; whatever is left in
/// it when the transport closes is discarded by the caller.
#[derive(Debug, Default)]
pub(crate) struct FrameDecoder {
    carry: Vec<u8>,
}

impl FrameDecoder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk and drains every complete line out of the carry.
    /// Empty lines are skipped; an optional `data:` prefix is stripped; the
    /// sentinel stops the scan, so frames after it are never produced.
    pub(crate) fn feed(&mut self, chunk: &[u8]) -> Result<Vec<Frame>, AnthropicError> {
        self.carry.extend_from_slice(chunk);

        let mut frames = Vec::new();
        while let Some(pos) = self.carry.iter().position(|&b| b == b'\n') {
            let line_bytes: Vec<u8> = self.carry.drain(..=pos).collect();
            let line = String::from_utf8(line_bytes).map_err(|e| {
                AnthropicError::InvalidEventData(format!("invalid UTF-8 in stream: {e}"))
            })?;

            let payload = line.trim();
            let payload = payload
                .strip_prefix("data:")
                .map_or(payload, str::trim_start);

            if payload.is_empty() {
                continue;
            }
            if payload == STREAM_SENTINEL {
                frames.push(Frame::Done);
                break;
            }
            frames.push(Frame::Data(payload.to_string()));
        }

        Ok(frames)
    }
}
