//! Common imports for working with the Anthropic API.
//!
//! ```rust,no_run
//! use anthropic_kit::prelude::*;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Anthropic::new("your-api-key");
//! let request = ChatRequest::builder()
//!     .model(Model::Claude21)
//!     .messages(vec![Message::user("Hello!")])
//!     .build();
//!
//! let response = client.send(&request).await?;
//! # Ok(())
//! # }
//! ```

pub use crate::{
    Anthropic, AnthropicError, ChatRequest, ChatResponse, ErrorKind, Model,
    message::{Message, Role},
    model::ModelListResponse,
    response::{Content, StopReason, Text},
    usage::Usage,
};
