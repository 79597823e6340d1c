use anyhow::{Context, Result};
use cubox_share::cli::args::Args;
use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary data directory plus a folder of notes
#[allow(dead_code)]
pub struct TestWorkspace {
    _temp_dir: TempDir,
    pub data_dir: PathBuf,
    pub notes_dir: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let data_dir = temp_dir.path().join("data");
        let notes_dir = temp_dir.path().join("vault");
        std::fs::create_dir_all(&notes_dir).context("Failed to create notes directory")?;

        Ok(Self {
            _temp_dir: temp_dir,
            data_dir,
            notes_dir,
        })
    }

    pub fn write_note(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = self.notes_dir.join(file_name);
        std::fs::write(&path, content).context("Failed to write note")?;
        Ok(path)
    }

    pub fn write_settings(&self, settings: &Value) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::write(self.settings_path(), serde_json::to_string(settings)?)
            .context("Failed to write settings")
    }

    pub fn read_settings(&self) -> Result<Value> {
        let content =
            std::fs::read_to_string(self.settings_path()).context("Failed to read settings")?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("data.json")
    }

    /// Parse CLI arguments with `--data-dir` and `--locale en` already set
    pub fn args(&self, rest: &[&str]) -> Result<Args> {
        let data_dir = self.data_dir.to_string_lossy().into_owned();
        let mut argv = vec!["cubox-share", "--data-dir", &data_dir, "--locale", "en"];
        argv.extend_from_slice(rest);
        Ok(Args::try_parse_from(argv)?)
    }
}
