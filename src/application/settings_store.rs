// src/application/settings_store.rs
use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::application::Host;
use crate::domain::{DomainError, Settings};

/// Load and persist [`Settings`] through the host's key-value document
pub struct SettingsStore;

impl SettingsStore {
    /// Merge the stored document over the defaults
    #[instrument(level = "debug", skip(host))]
    pub fn load<H: Host>(host: &H) -> Result<Settings> {
        let settings = match host.load_data().context("Failed to load settings document")? {
            None | Some(Value::Null) => {
                debug!("No stored settings, using defaults");
                Settings::default()
            }
            Some(value @ Value::Object(_)) => serde_json::from_value(value)
                .map_err(|e| DomainError::SettingsError(e.to_string()))?,
            Some(other) => {
                return Err(DomainError::SettingsError(format!(
                    "expected a JSON object, found {}",
                    other
                ))
                .into())
            }
        };
        Ok(settings)
    }

    /// Write the settings verbatim
    #[instrument(level = "debug", skip_all)]
    pub fn save<H: Host>(host: &mut H, settings: &Settings) -> Result<()> {
        let value = serde_json::to_value(settings).context("Failed to serialize settings")?;
        host.save_data(&value).context("Failed to save settings document")
    }
}
