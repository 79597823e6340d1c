// src/application/plugin.rs
use anyhow::Result;
use tracing::{debug, info, instrument};

use crate::application::{
    CommandSpec, Host, MemoGateway, RibbonIcon, SettingField, SettingsStore, SettingsTab,
    ShareAction, ShareOutcome,
};
use crate::constants::{SHARE_COMMAND_ID, SHARE_RIBBON_ICON};
use crate::domain::{DomainError, Settings};
use crate::ports::{Locale, Translation};

/// Plugin lifecycle: settings, registrations and command dispatch
pub struct SharePlugin<H: Host, G: MemoGateway> {
    host: H,
    settings: Settings,
    translation: &'static Translation,
    action: ShareAction<G>,
}

impl<H: Host, G: MemoGateway> SharePlugin<H, G> {
    pub fn new(host: H, gateway: G) -> Self {
        let locale = Locale::from_tag(host.locale().as_deref());
        debug!(?locale, "Selected translation");
        Self {
            host,
            settings: Settings::default(),
            translation: locale.translation(),
            action: ShareAction::new(gateway),
        }
    }

    /// Load settings and register the share command and ribbon icon
    #[instrument(level = "debug", skip(self))]
    pub fn on_load(&mut self) -> Result<()> {
        self.settings = SettingsStore::load(&self.host)?;

        self.host.register_command(CommandSpec {
            id: SHARE_COMMAND_ID.to_string(),
            name: self.translation.share_to_cubox.to_string(),
        });
        self.host.register_ribbon_icon(RibbonIcon {
            icon: SHARE_RIBBON_ICON.to_string(),
            title: self.translation.share_to_cubox.to_string(),
            command_id: SHARE_COMMAND_ID.to_string(),
        });

        info!("Plugin loaded");
        Ok(())
    }

    pub fn run_command(&mut self, id: &str) -> Result<ShareOutcome> {
        match id {
            SHARE_COMMAND_ID => self.share(),
            _ => Err(DomainError::UnknownCommand(id.to_string()).into()),
        }
    }

    pub fn share(&mut self) -> Result<ShareOutcome> {
        self.action
            .share(&mut self.host, &self.settings, self.translation)
    }

    pub fn settings_tab(&self) -> SettingsTab {
        SettingsTab::display(&self.settings, self.translation)
    }

    pub fn update_setting(&mut self, field: SettingField, value: String) -> Result<()> {
        SettingsTab::on_change(&mut self.host, &mut self.settings, field, value)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn translation(&self) -> &'static Translation {
        self.translation
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}
