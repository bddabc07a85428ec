//! Startup sequence shared by the frontends.
//!
//! Handles the command line, loads and validates the config, and claims the
//! single-instance socket before any window is created.

use std::sync::mpsc::Receiver;
use tracing::{error, info};

use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::core::Picker;
use crate::error::{EmomeError, EmomeResult};
use crate::hotkey::HotkeySpec;
use crate::instance::{self, InstanceMessage, InstanceResult};

/// Everything a frontend needs to start its event loop.
pub struct Launch {
    pub config: Config,
    pub picker: Picker,
    pub hotkey: HotkeySpec,
    pub instance_rx: Receiver<InstanceMessage>,
}

/// Outcome of [`prepare`].
pub enum Prepared {
    /// Start the GUI.
    Run(Launch),
    /// Nothing more to do; exit with this status.
    Exit(i32),
}

/// Run everything that happens before the GUI.
pub fn prepare() -> Prepared {
    crate::logging::init();

    let command = match Cli::try_parse() {
        Ok(cli) => cli.command(),
        Err(e) => {
            // --help and --version land here too and go to stdout
            let _ = e.print();
            return Prepared::Exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    match command {
        Command::PrintConfig => match Config::load().to_toml_string() {
            Ok(text) => {
                print!("{}", text);
                Prepared::Exit(0)
            }
            Err(e) => exit_with(e),
        },
        Command::InitConfig => match Config::init_file() {
            Ok(path) => {
                info!("Wrote {}", path.display());
                Prepared::Exit(0)
            }
            Err(e) => exit_with(e),
        },
        Command::Toggle => match instance::send_toggle() {
            Ok(()) => Prepared::Exit(0),
            Err(e) => exit_with(e),
        },
        Command::Run => match load() {
            Ok(Some(launch)) => Prepared::Run(launch),
            Ok(None) => Prepared::Exit(0),
            Err(e) => exit_with(e),
        },
    }
}

/// Load config and become the primary instance. `None` when another
/// instance was signalled instead.
fn load() -> EmomeResult<Option<Launch>> {
    let config = Config::load();
    let picker = Picker::from_config(&config)?;
    let hotkey: HotkeySpec = config.general.hotkey.parse()?;

    let instance_rx = match instance::acquire_or_signal() {
        InstanceResult::Primary(rx) => rx,
        InstanceResult::Secondary => return Ok(None),
    };

    if let Err(e) = ctrlc::set_handler(|| {
        instance::cleanup();
        std::process::exit(130);
    }) {
        error!("Failed to install Ctrl+C handler: {}", e);
    }

    info!(
        "Loaded {} emoji sets of {} glyphs, hotkey {}",
        picker.catalog().iter().count(),
        picker.slot_count(),
        hotkey
    );

    Ok(Some(Launch {
        config,
        picker,
        hotkey,
        instance_rx,
    }))
}

fn exit_with(e: EmomeError) -> Prepared {
    error!("{}", e);
    Prepared::Exit(1)
}
