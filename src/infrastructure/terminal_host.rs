// src/infrastructure/terminal_host.rs
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::application::{CommandSpec, Host, RibbonIcon};
use crate::constants::{APP_DIR_NAME, SETTINGS_FILE_NAME};
use crate::domain::{ActiveDocument, DomainError};

/// Host for the command line: the active document is a file given on the
/// command line and notices go to stdout
#[derive(Debug)]
pub struct TerminalHost {
    data_dir: PathBuf,
    document_path: Option<PathBuf>,
    locale: Option<String>,
    commands: Vec<CommandSpec>,
    ribbon_icons: Vec<RibbonIcon>,
}

impl TerminalHost {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            document_path: None,
            locale: None,
            commands: vec![],
            ribbon_icons: vec![],
        }
    }

    pub fn with_document(mut self, path: Option<PathBuf>) -> Self {
        self.document_path = path;
        self
    }

    pub fn with_locale(mut self, locale: Option<String>) -> Self {
        self.locale = locale;
        self
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE_NAME)
    }

    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    pub fn ribbon_icons(&self) -> &[RibbonIcon] {
        &self.ribbon_icons
    }
}

/// `<config dir>/cubox-share`
pub fn default_data_dir() -> Result<PathBuf> {
    let config = dirs::config_dir().context("Could not find config directory")?;
    Ok(config.join(APP_DIR_NAME))
}

impl Host for TerminalHost {
    fn locale(&self) -> Option<String> {
        self.locale.clone()
    }

    #[instrument(level = "debug", skip(self))]
    fn active_document(&self) -> Result<Option<ActiveDocument>> {
        let Some(path) = &self.document_path else {
            return Ok(None);
        };

        if !path.is_file() {
            return Err(DomainError::DocumentError(format!(
                "Not a file: {}",
                path.display()
            ))
            .into());
        }

        let basename = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        debug!(?path, %basename, bytes = content.len(), "Read active document");
        Ok(Some(ActiveDocument { basename, content }))
    }

    fn show_notice(&mut self, message: &str) {
        println!("{message}");
    }

    fn load_data(&self) -> Result<Option<Value>> {
        let path = self.settings_path();
        if !path.exists() {
            debug!(?path, "No settings file");
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
        Ok(Some(value))
    }

    fn save_data(&mut self, data: &Value) -> Result<()> {
        fs::create_dir_all(&self.data_dir).with_context(|| {
            format!("Failed to create data directory {}", self.data_dir.display())
        })?;

        let path = self.settings_path();
        let content = serde_json::to_string_pretty(data).context("Failed to serialize settings")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write settings file {}", path.display()))?;

        info!(?path, "Saved settings");
        Ok(())
    }

    fn register_command(&mut self, command: CommandSpec) {
        debug!(id = %command.id, "Registered command");
        self.commands.push(command);
    }

    fn register_ribbon_icon(&mut self, icon: RibbonIcon) {
        debug!(icon = %icon.icon, "Registered ribbon icon");
        self.ribbon_icons.push(icon);
    }
}
