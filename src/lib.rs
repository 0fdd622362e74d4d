#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(clippy::pedantic, clippy::unwrap_used)]

pub mod client;
pub mod error;
pub mod message;
pub mod model;
pub mod prelude;
pub mod request;
pub mod response;
pub mod usage;

pub(crate) mod internal;

// Re-export main types
pub use client::Anthropic;
pub use error::{AnthropicError, ErrorKind};
pub use message::{Message, Role};
pub use model::{Model, ModelListResponse};
pub use request::ChatRequest;
pub use response::ChatResponse;
pub use usage::Usage;
