//! GTK UI module for Emome.
//!
//! This module contains all GTK-specific code for the Linux desktop.

mod keys;
mod state;
mod window;

pub use window::build_ui;
