// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::Result;
use application::{MemoGateway, ShareOutcome, SharePlugin};
use cli::args::{Args, Command, SettingsAction};
use constants::SHARE_COMMAND_ID;
use infrastructure::{CuboxClient, TerminalHost};
use ports::TerminalPresenter;
use tracing::{debug, info};

pub fn run(args: Args) -> Result<()> {
    let gateway = CuboxClient::new()?;
    run_with_gateway(args, gateway).map(|_| ())
}

/// Execute a command against the given gateway
///
/// Returns the share outcome for `share`, `None` for the other commands.
pub fn run_with_gateway<G: MemoGateway>(args: Args, gateway: G) -> Result<Option<ShareOutcome>> {
    debug!(?args, "Starting cubox-share with arguments");

    let data_dir = match args.data_dir {
        Some(dir) => {
            debug!(?dir, "Using provided data directory");
            dir
        }
        None => infrastructure::default_data_dir()?,
    };

    let mut host = TerminalHost::new(&data_dir).with_locale(args.locale);
    if let Command::Share { file } = &args.command {
        host = host.with_document(file.clone());
    }

    let mut plugin = SharePlugin::new(host, gateway);
    plugin.on_load()?;
    let presenter = TerminalPresenter::new();

    match args.command {
        Command::Share { .. } => {
            let outcome = plugin.run_command(SHARE_COMMAND_ID)?;
            info!(?outcome, "Share finished");
            return Ok(Some(outcome));
        }
        Command::Settings { action } => match action {
            SettingsAction::Show => {
                print!("{}", presenter.render_settings(&plugin.settings_tab()));
            }
            SettingsAction::Set { field, value } => {
                plugin.update_setting(field.into(), value)?;
            }
        },
        Command::Commands => {
            let host = plugin.host();
            print!(
                "{}",
                presenter.render_registrations(host.commands(), host.ribbon_icons())
            );
        }
    }

    Ok(None)
}
