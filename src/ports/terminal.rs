// src/ports/terminal.rs
use crate::application::{CommandSpec, RibbonIcon, SettingsTab};

/// Plain-text rendering of the settings panel and registrations
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl TerminalPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_settings(&self, tab: &SettingsTab) -> String {
        let mut out = format!("{}\n", tab.heading);
        for control in &tab.controls {
            let value = if control.value.is_empty() {
                format!("<{}>", control.placeholder)
            } else {
                control.value.clone()
            };
            out.push_str(&format!(
                "\n{}\n  {}\n  {}\n",
                control.name, control.description, value
            ));
        }
        out
    }

    pub fn render_registrations(&self, commands: &[CommandSpec], icons: &[RibbonIcon]) -> String {
        let mut out = String::new();
        for command in commands {
            out.push_str(&format!("command  {:<12} {}\n", command.id, command.name));
        }
        for icon in icons {
            out.push_str(&format!(
                "ribbon   {:<12} {} -> {}\n",
                icon.icon, icon.title, icon.command_id
            ));
        }
        out
    }
}
