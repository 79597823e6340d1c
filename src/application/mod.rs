// src/application/mod.rs
pub mod host;
pub mod plugin;
pub mod settings_store;
pub mod settings_tab;
pub mod share;

pub use host::{CommandSpec, Host, RibbonIcon};
pub use plugin::SharePlugin;
pub use settings_store::SettingsStore;
pub use settings_tab::{SettingControl, SettingField, SettingsTab};
pub use share::{build_request, MemoGateway, ShareAction, ShareOutcome};
