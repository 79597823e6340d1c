// src/domain/settings.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::DEFAULT_TAGS;
use crate::util::text::split_comma_list;

/// Persisted plugin settings
///
/// Stored keys override the defaults one by one; keys this version does not
/// know about are carried in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_api_key")]
    pub api_key: String,
    #[serde(default = "default_tags")]
    pub default_tags: String,
    #[serde(default = "default_folder")]
    pub default_folder: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_api_key() -> String {
    String::new()
}

fn default_tags() -> String {
    DEFAULT_TAGS.to_string()
}

fn default_folder() -> String {
    String::new()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            default_tags: default_tags(),
            default_folder: default_folder(),
            extra: Map::new(),
        }
    }
}

impl Settings {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Default tags as a trimmed list, `None` only when the setting is empty
    pub fn tags(&self) -> Option<Vec<String>> {
        if self.default_tags.is_empty() {
            None
        } else {
            Some(split_comma_list(&self.default_tags))
        }
    }

    pub fn folder(&self) -> Option<String> {
        if self.default_folder.is_empty() {
            None
        } else {
            Some(self.default_folder.clone())
        }
    }
}
