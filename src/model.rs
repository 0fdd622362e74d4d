use serde::{Deserialize, Serialize};

/// The models the client knows how to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, strum::EnumString, strum::Display)]
pub enum Model {
    #[strum(to_string = "claude-2.1")]
    Claude21,
    #[strum(to_string = "claude-instant-1.2")]
    ClaudeInstant12,
}

impl From<Model> for String {
    fn from(model: Model) -> Self {
        model.to_string()
    }
}

/// The full catalog. Fixed at compile time, no network call backs it.
pub const CATALOG: &[Model] = &[Model::Claude21, Model::ClaudeInstant12];

/// A response containing the list of supported model identifiers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelListResponse {
    pub models: Vec<String>,
}
