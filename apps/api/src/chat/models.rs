use serde::{Deserialize, Serialize};

use crate::chat::prompts::DEFAULT_MODE;

/// Inbound body of `POST /chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_mode() -> String {
    DEFAULT_MODE.to_string()
}

/// Envelope for both successful and failed chat replies.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub response: String,
}
