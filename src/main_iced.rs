//! Emome - iced UI entry point.
//!
//! Cross-platform frontend using the iced UI framework.
//! Build with: cargo build --features iced-ui --bin emome-iced

use emome::hotkey;
use emome::instance;
use emome::launch::{self, Prepared};
use emome::layout::GridLayout;
use emome::ui::EmomeApp;
use iced::{window, Size};

fn main() -> iced::Result {
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

    let config = &launch.config;
    let layout = GridLayout::new(&config.appearance, launch.picker.slot_count());

    let window_settings = window::Settings {
        size: Size::new(layout.width as f32, layout.height as f32),
        position: window::Position::Centered,
        resizable: false,
        visible: config.general.start_visible,
        level: if config.behavior.always_on_top {
            window::Level::AlwaysOnTop
        } else {
            window::Level::Normal
        },
        ..Default::default()
    };

    tracing::info!("Starting with iced UI");

    let result = iced::application("Emome", EmomeApp::update, EmomeApp::view)
        .subscription(EmomeApp::subscription)
        .window(window_settings)
        .run_with(move || EmomeApp::new(launch, hotkey_rx));

    instance::cleanup();
    result
}
