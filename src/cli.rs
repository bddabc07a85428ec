//! Command-line handling shared by both frontends.

use clap::{ArgGroup, Parser};

/// Floating emoji picker.
///
/// Hold Shift, Ctrl, Alt or a combination of them to switch emoji sets.
/// Click an emoji to copy it. Logging is controlled by RUST_LOG.
#[derive(Debug, Parser)]
#[command(name = "emome", version)]
#[command(group(ArgGroup::new("action").args(["toggle", "print_config", "init_config"])))]
pub struct Cli {
    /// Show or hide the running picker
    #[arg(short, long)]
    pub toggle: bool,

    /// Print the effective configuration
    #[arg(long)]
    pub print_config: bool,

    /// Write a starter config file
    #[arg(long)]
    pub init_config: bool,
}

/// What the binary was asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start the picker (or toggle an already running one).
    Run,
    /// Toggle a running instance and exit.
    Toggle,
    /// Print the effective config as TOML.
    PrintConfig,
    /// Write a starter config file.
    InitConfig,
}

impl Cli {
    pub fn command(&self) -> Command {
        if self.toggle {
            Command::Toggle
        } else if self.print_config {
            Command::PrintConfig
        } else if self.init_config {
            Command::InitConfig
        } else {
            Command::Run
        }
    }
}
