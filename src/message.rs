// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Default)]
pub struct PromptRequest {
    pub text: String,
}

impl PromptRequest {
    /// Reads `text` out of a JSON object body. Returns `None` for any other top-level value.
    ///
    /// Missing and `null` both read as empty input; other non-string values are
    /// rendered as JSON text. With duplicate keys the last one wins.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut map) = value else {
            return None;
        };
        let text = match map.remove("text") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s,
            Some(other) => other.to_string(),
        };
        Some(Self { text })
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PromptResponse {
    pub prompt: String,
}
