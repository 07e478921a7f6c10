//! A desktop app for a cjdns node: view its status and edit its settings.
//!
//! Each time the user saves, the settings are logged and written to stdout as a line of JSON,
//! for whatever talks to the node to pick up.

use std::io::Write;
use anyhow::Context;
use tracing::info;
use cjdnsui::{Settings, Status};
use cjdnsui_gui::{View, Topic};

mod cli;

#[allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
fn main() -> anyhow::Result<()> {
    cjdnsui_gui::init_tracing(
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("cjdns_ui=info".parse()?)
            .add_directive("cjdnsui=info".parse()?)
    );

    let cli_args = cli::command().get_matches();
    let status = status_from_cli(&cli_args);
    let settings = settings_from_cli(&cli_args);

    let view = View::new();
    let weak = view.downgrade();
    view.add_observer(Topic::SettingsSave, move |_event| {
        let view = weak.upgrade().ok_or("The view has gone")?;
        report(&view.settings()?, &mut std::io::stdout().lock())?;
        Ok(())
    })?;

    view.run(move |view| {
        if let Some(status) = status {
            view.set_status(&status)?;
        }
        view.set_settings(&settings)?;
        Ok(())
    })
}

/// Status passed on the command line, if there was one.
fn status_from_cli(cli_args: &clap::ArgMatches) -> Option<Status> {
    let port = *cli_args.get_one::<u16>("port")?;
    Some(Status {
        address: cli_args.get_one::<String>("address").cloned().unwrap_or_default(),
        public_key: cli_args.get_one::<String>("public-key").cloned().unwrap_or_default(),
        port
    })
}

fn settings_from_cli(cli_args: &clap::ArgMatches) -> Settings {
    Settings {
        admin_address: cli_args.get_one::<String>("admin-address").cloned().unwrap_or_default(),
        admin_password: cli_args.get_one::<String>("admin-password").cloned().unwrap_or_default(),
        authorized_passwords: cli_args.get_many::<String>("authorized-password")
            .map(|passwords| passwords.cloned().collect())
            .unwrap_or_default()
    }
}

fn report(settings: &Settings, out: &mut impl Write) -> anyhow::Result<()> {
    info!("Saving {settings:?}");
    let json = serde_json::to_string(settings).context("Failed to generate JSON")?;
    writeln!(out, "{json}").context("Failed to write settings")?;
    out.flush().context("Failed to write settings")
}
