// src/domain/memo.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::MEMO_TYPE;

/// Body of `POST /c/api/save/{api_key}`
///
/// `tags` and `folder` are left out of the JSON entirely when unset; the
/// remote must never see `null` or an empty array for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveMemoRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

impl SaveMemoRequest {
    pub fn memo(title: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            kind: MEMO_TYPE.to_string(),
            description: content.clone(),
            content,
            title: title.into(),
            tags: None,
            folder: None,
        }
    }

    pub fn with_tags(mut self, tags: Option<Vec<String>>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_folder(mut self, folder: Option<String>) -> Self {
        self.folder = folder;
        self
    }
}

/// Normalized result of a save call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveMemoOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SaveMemoOutcome {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Response envelope returned by the Cubox API
///
/// Fields are kept loose: `200.0` is still a success code and a non-string
/// message is still reported.
#[derive(Debug, Clone, Deserialize)]
pub struct CuboxResponse {
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl CuboxResponse {
    pub fn is_success(&self) -> bool {
        matches!(&self.code, Some(Value::Number(code)) if code.as_f64() == Some(200.0))
    }

    /// Message text, `None` when absent or falsy (`null`, `""`, `false`, `0`)
    pub fn message_text(&self) -> Option<String> {
        match self.message.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(text) if text.is_empty() => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }
}
