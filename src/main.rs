//! Emome GTK frontend for Linux.

mod gtk;

use ::gtk::prelude::*;
use ::gtk::Application;
use std::cell::RefCell;
use std::rc::Rc;

use emome::hotkey;
use emome::instance;
use emome::launch::{self, Prepared};

const APP_ID: &str = "io.github.emome";

fn main() -> glib::ExitCode {
    let launch = match launch::prepare() {
        Prepared::Run(launch) => launch,
        Prepared::Exit(code) => std::process::exit(code),
    };

    let hotkey_rx = match hotkey::spawn_listener(&launch.hotkey) {
        Ok(rx) => Some(rx),
        Err(e) => {
            tracing::warn!("Global hotkey disabled: {}", e);
            None
        }
    };

    let app = Application::builder().application_id(APP_ID).build();

    // activate may fire more than once; only the first builds the window
    let pending = Rc::new(RefCell::new(Some((launch, hotkey_rx))));
    app.connect_activate(move |app| match pending.borrow_mut().take() {
        Some((launch, hotkey_rx)) => gtk::build_ui(app, launch, hotkey_rx),
        None => {
            if let Some(window) = app.active_window() {
                window.present();
            }
        }
    });

    tracing::info!("Starting with GTK UI");

    // Pass empty args to avoid GTK parsing our own flags
    let status = app.run_with_args(&[] as &[&str]);
    instance::cleanup();
    status
}
