// Career assistant chat. Free-text replies, no structured JSON contract.

pub mod handlers;
pub mod prompts;
pub mod service;

use serde::Deserialize;

/// A single turn of prior conversation supplied by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}
