use bon::Builder;
use core::fmt;
use futures_util::StreamExt;
use futures_util::stream::BoxStream;
use reqwest::Method;

use crate::{
    error::{self, AnthropicError},
    internal::{Frame, FrameDecoder, RequestBuilder},
    model::{CATALOG, ModelListResponse},
    request::ChatRequest,
    response::ChatResponse,
};

const BASE_URL: &str = "https://api.anthropic.com";
const MESSAGES_URL: &str = "v1/messages";
const API_VERSION: &str = "2023-06-01";
const BETA: &str = "messages-2023-12-15";

#[derive(Clone, Builder)]
pub struct Anthropic {
    #[builder(into)]
    pub(crate) api_key: String,
    #[builder(default)]
    pub(crate) client: reqwest::Client,
    #[builder(default = BASE_URL.to_string(), into)]
    pub(crate) base_url: String,
    #[builder(default = API_VERSION.to_string(), into)]
    pub(crate) api_version: String,
    #[builder(default = BETA.to_string(), into)]
    pub(crate) beta: String,
}

impl Anthropic {
    /// Create a new Anthropic client with the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: reqwest::Client::new(),
            base_url: BASE_URL.to_string(),
            api_version: API_VERSION.to_string(),
            beta: BETA.to_string(),
        }
    }

    pub fn load_from_env() -> Result<Self, std::env::VarError> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")?;
        Ok(Self::builder().api_key(api_key).build())
    }

    fn request_builder(&self) -> RequestBuilder<'_> {
        RequestBuilder::new(
            &self.client,
            &self.base_url,
            &self.api_key,
            &self.api_version,
            &self.beta,
        )
    }

    /// Performs a single non-streaming completion round trip.
    ///
    /// The `stream` flag is cleared regardless of what the caller set; this
    /// path either yields one fully decoded response or fails. Any 2xx
    /// status counts as success; the service only ever answers 200 here.
    pub async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, AnthropicError> {
        let mut body = request.clone();
        body.stream = None;

        let res = self
            .request_builder()
            .build(MESSAGES_URL, Method::POST)
            .json(&body)
            .send()
            .await?;

        if res.status().is_success() {
            let bytes = res.bytes().await?;
            Ok(serde_json::from_slice::<ChatResponse>(&bytes)?)
        } else {
            let status = res.status();
            let bytes = res.bytes().await?;
            Err(error::parse_error_response(status, bytes))
        }
    }

    /// Opens a streaming completion and returns the decoded responses as a
    /// lazy, single-pass sequence.
    ///
    /// Responses arrive in frame order. The first transport or decode failure
    /// ends the sequence; a body that closes without the end-of-stream
    /// sentinel ends it with [`AnthropicError::UnexpectedEndOfStream`].
    /// Dropping the stream closes the connection.
    pub fn stream(
        &self,
        request: &ChatRequest,
    ) -> BoxStream<'static, Result<ChatResponse, AnthropicError>> {
        use async_stream::try_stream;

        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let api_key = self.api_key.clone();
        let api_version = self.api_version.clone();
        let beta = self.beta.clone();

        let mut body = request.clone();
        body.stream = Some(true);

        Box::pin(try_stream! {
            let builder = RequestBuilder::new(&client, &base_url, &api_key, &api_version, &beta);
            let response = builder
                .build(MESSAGES_URL, Method::POST)
                .json(&body)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let bytes = response.bytes().await?;
                Err(error::parse_error_response(status, bytes))?;
            } else {
                let mut byte_stream = response.bytes_stream();
                let mut decoder = FrameDecoder::new();
                let mut done = false;

                while !done {
                    let Some(chunk_result) = byte_stream.next().await else {
                        break;
                    };
                    let chunk = chunk_result?;

                    for frame in decoder.feed(&chunk)? {
                        match frame {
                            Frame::Done => {
                                done = true;
                                break;
                            }
                            Frame::Data(json) => {
                                let event: ChatResponse = serde_json::from_str(&json)
                                    .map_err(|e| AnthropicError::InvalidEventData(e.to_string()))?;
                                yield event;
                            }
                        }
                    }
                }

                // Remaining carry is dropped with the decoder; a close
                // without the sentinel is a protocol failure, not success.
                if !done {
                    Err(AnthropicError::UnexpectedEndOfStream)?;
                }
            }
        })
    }

    /// The fixed model catalog. No network round trip backs this list.
    pub fn models(&self) -> ModelListResponse {
        ModelListResponse {
            models: CATALOG.iter().map(ToString::to_string).collect(),
        }
    }
}

impl fmt::Debug for Anthropic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Anthropic")
            .field("api_key", &"[REDACTED]")
            .field("client", &self.client)
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("beta", &self.beta)
            .finish_non_exhaustive()
    }
}
