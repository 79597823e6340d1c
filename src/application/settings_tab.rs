// src/application/settings_tab.rs
use anyhow::Result;
use tracing::debug;

use crate::application::{Host, SettingsStore};
use crate::domain::Settings;
use crate::ports::Translation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    ApiKey,
    DefaultTags,
    DefaultFolder,
}

impl SettingField {
    pub const ALL: [SettingField; 3] = [
        SettingField::ApiKey,
        SettingField::DefaultTags,
        SettingField::DefaultFolder,
    ];

    pub fn get(self, settings: &Settings) -> &str {
        match self {
            SettingField::ApiKey => &settings.api_key,
            SettingField::DefaultTags => &settings.default_tags,
            SettingField::DefaultFolder => &settings.default_folder,
        }
    }

    pub fn set(self, settings: &mut Settings, value: String) {
        match self {
            SettingField::ApiKey => settings.api_key = value,
            SettingField::DefaultTags => settings.default_tags = value,
            SettingField::DefaultFolder => settings.default_folder = value,
        }
    }
}

/// One text input of the settings panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingControl {
    pub field: SettingField,
    pub name: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
    pub value: String,
}

/// The settings panel as the host should render it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsTab {
    pub heading: &'static str,
    pub controls: Vec<SettingControl>,
}

impl SettingsTab {
    pub fn display(settings: &Settings, translation: &'static Translation) -> Self {
        let controls = SettingField::ALL
            .into_iter()
            .map(|field| {
                let (name, description, placeholder) = match field {
                    SettingField::ApiKey => (
                        translation.settings.api_key,
                        translation.setting_descriptions.api_key,
                        translation.setting_placeholders.api_key,
                    ),
                    SettingField::DefaultTags => (
                        translation.settings.default_tags,
                        translation.setting_descriptions.default_tags,
                        translation.setting_placeholders.default_tags,
                    ),
                    SettingField::DefaultFolder => (
                        translation.settings.default_folder,
                        translation.setting_descriptions.default_folder,
                        translation.setting_placeholders.default_folder,
                    ),
                };
                SettingControl {
                    field,
                    name,
                    description,
                    placeholder,
                    value: field.get(settings).to_string(),
                }
            })
            .collect();

        Self {
            heading: translation.setting,
            controls,
        }
    }

    /// Apply an edit and persist right away
    pub fn on_change<H: Host>(
        host: &mut H,
        settings: &mut Settings,
        field: SettingField,
        value: String,
    ) -> Result<()> {
        debug!(?field, "Setting changed");
        field.set(settings, value);
        SettingsStore::save(host, settings)
    }
}
