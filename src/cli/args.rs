// src/cli/args.rs
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::application::SettingField;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Directory holding the settings document (optional)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Locale of notices and labels; `zh*` selects Chinese
    #[arg(short, long, value_name = "LOCALE", env = "LANG", hide_env_values = true, global = true)]
    pub locale: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (share, settings, or commands)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Share a document to Cubox as a memo
    Share {
        /// Markdown file to share (the active document)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Show or change the plugin settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// List registered commands and ribbon icons
    Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SettingsAction {
    /// Print the settings panel
    Show,

    /// Change one setting and save immediately
    Set {
        #[arg(value_enum, value_name = "FIELD")]
        field: FieldArg,

        /// New value, may be empty
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldArg {
    ApiKey,
    DefaultTags,
    DefaultFolder,
}

impl From<FieldArg> for SettingField {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::ApiKey => SettingField::ApiKey,
            FieldArg::DefaultTags => SettingField::DefaultTags,
            FieldArg::DefaultFolder => SettingField::DefaultFolder,
        }
    }
}
