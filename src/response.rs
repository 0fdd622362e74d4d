use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{message::Role, usage::Usage};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    EndTurn,
    MaxTokens,
    StopSequence,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Text {
    pub text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Text {
            text: text.to_owned(),
        }
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Text { text }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Content {
    Text(Text),
}

impl Content {
    pub fn text<T: Into<String>>(text: T) -> Self {
        Self::Text(Text { text: text.into() })
    }

    pub fn as_text(&self) -> Option<&Text> {
        let Self::Text(v) = self;
        Some(v)
    }
}

/// One decoded message from the API, either the body of a non-streaming call
/// or a single frame of a streaming one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub id: String,
    pub r#type: String,
    pub role: Role,
    pub content: Vec<Content>,
    pub model: String,
    pub stop_reason: Option<StopReason>,
    pub stop_sequence: Option<String>,
    pub usage: Usage,
    /// Wire format is integer seconds since the Unix epoch, not a default
    /// numeric timestamp.
    #[serde(with = "epoch_seconds")]
    pub created_at: DateTime<Utc>,
}

impl ChatResponse {
    pub fn text_content(&self) -> Vec<&str> {
        self.content
            .iter()
            .map(|content| {
                let Content::Text(text) = content;
                text.as_str()
            })
            .collect()
    }
}

impl std::fmt::Display for ChatResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ChatResponse {{ id: {}, type: {}, role: {:?}, model: {}, text: [{}] }}",
            self.id,
            self.r#type,
            self.role,
            self.model,
            self.text_content().join(", ")
        )
    }
}

/// Integer-epoch-seconds coercion for timestamp fields.
pub(crate) mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(value.timestamp())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = i64::deserialize(deserializer)?;
        DateTime::<Utc>::from_timestamp(secs, 0)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {secs}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "content": [{"type": "text", "text": "Hello!"}],
            "model": "claude-2.1",
            "stop_reason": "end_turn",
            "stop_sequence": null,
            "usage": {"input_tokens": 10, "output_tokens": 20},
            "created_at": 1700000000
        }"#
    }

    #[test]
    fn decodes_full_response() {
        let response: ChatResponse = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(response.id, "msg_01");
        assert_eq!(response.model, "claude-2.1");
        assert_eq!(response.stop_reason, Some(StopReason::EndTurn));
        assert_eq!(response.text_content(), vec!["Hello!"]);
        assert_eq!(response.usage.total_tokens(), 30);
        assert_eq!(response.created_at.timestamp(), 1_700_000_000);
    }

    #[test]
    fn epoch_seconds_round_trips() {
        let response: ChatResponse = serde_json::from_str(sample_json()).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["created_at"], 1_700_000_000_i64);

        let decoded: ChatResponse = serde_json::from_value(json).unwrap();
        assert_eq!(decoded.created_at, response.created_at);
    }

    #[test]
    fn rfc3339_timestamp_is_rejected() {
        let json = sample_json().replace("1700000000", "\"2023-11-14T22:13:20Z\"");
        assert!(serde_json::from_str::<ChatResponse>(&json).is_err());
    }

    #[test]
    fn missing_fields_fail_decode() {
        let json = r#"{"id": "msg_01", "type": "message"}"#;
        assert!(serde_json::from_str::<ChatResponse>(json).is_err());
    }

    #[test]
    fn stop_reason_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&StopReason::MaxTokens).unwrap(),
            "\"max_tokens\""
        );
    }

    #[test]
    fn display_summarizes_text() {
        let response: ChatResponse = serde_json::from_str(sample_json()).unwrap();
        let display = response.to_string();
        assert!(display.contains("msg_01"));
        assert!(display.contains("Hello!"));
    }
}
