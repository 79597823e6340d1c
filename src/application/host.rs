// src/application/host.rs
use anyhow::Result;
use serde_json::Value;

use crate::domain::ActiveDocument;

/// A command the plugin registers with the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub id: String,
    pub name: String,
}

/// A clickable icon that triggers a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RibbonIcon {
    pub icon: String,
    pub title: String,
    pub command_id: String,
}

/// Everything the plugin needs from the application embedding it
pub trait Host {
    /// Locale tag of the host UI, e.g. `zh-CN`
    fn locale(&self) -> Option<String>;

    /// Read the focused document, `None` when nothing is open
    fn active_document(&self) -> Result<Option<ActiveDocument>>;

    /// Show a transient one-line message
    fn show_notice(&mut self, message: &str);

    /// Last saved settings document, `None` when nothing was saved yet
    fn load_data(&self) -> Result<Option<Value>>;

    /// Overwrite the settings document
    fn save_data(&mut self, data: &Value) -> Result<()>;

    fn register_command(&mut self, command: CommandSpec);

    fn register_ribbon_icon(&mut self, icon: RibbonIcon);
}
