//! Window building for the GTK frontend.

use gdk::{Keymap, ModifierType, Screen};
use gtk::prelude::*;
use gtk::{Application, ApplicationWindow, Button, CssProvider, Grid, StyleContext};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::Receiver;
use tracing::{error, info, warn};

use emome::config::AppearanceConfig;
use emome::hotkey::HotkeyMessage;
use emome::launch::Launch;
use emome::layout::{GridLayout, WINDOW_PADDING};
use emome::theme::{parse_hex_color, Palette};

use super::keys::{combo_after_key, combo_from_state};
use super::state::{dispatch, poll_channel, GtkClipboard, GtkSlots, UIState, UIStateHandle};

pub fn build_ui(app: &Application, launch: Launch, hotkey_rx: Option<Receiver<HotkeyMessage>>) {
    let Launch {
        config,
        picker,
        instance_rx,
        ..
    } = launch;
    let appearance = &config.appearance;
    let layout = GridLayout::new(appearance, picker.slot_count());

    let window = ApplicationWindow::builder()
        .application(app)
        .title("Emome")
        .default_width(layout.width as i32)
        .default_height(layout.height as i32)
        .resizable(false)
        .window_position(gtk::WindowPosition::Center)
        .build();
    window.set_keep_above(config.behavior.always_on_top);
    window.style_context().add_class("emome-window");

    load_css(&Palette::by_name(&appearance.theme), appearance);

    let grid = Grid::new();
    grid.set_row_spacing(appearance.spacing);
    grid.set_column_spacing(appearance.spacing);
    let padding = WINDOW_PADDING as i32;
    grid.set_margin_top(padding);
    grid.set_margin_bottom(padding);
    grid.set_margin_start(padding);
    grid.set_margin_end(padding);
    grid.set_halign(gtk::Align::Center);
    grid.set_valign(gtk::Align::Center);

    let size = appearance.button_size as i32;
    let buttons: Vec<Button> = (0..picker.slot_count())
        .map(|index| {
            let button = Button::with_label("");
            button.set_size_request(size, size);
            button.set_can_focus(false);
            button.style_context().add_class("emome-slot");
            let (row, col) = layout.cell(index);
            grid.attach(&button, col as i32, row as i32, 1, 1);
            button
        })
        .collect();
    window.add(&grid);

    let ui_state: UIStateHandle = Rc::new(RefCell::new(UIState {
        picker,
        slots: GtkSlots::new(window.clone(), buttons.clone()),
        clipboard: GtkClipboard,
    }));

    if let Err(e) = ui_state.borrow_mut().attach() {
        error!("{}", e);
        window.close();
        return;
    }

    for (index, button) in buttons.iter().enumerate() {
        let ui_state = ui_state.clone();
        button.connect_clicked(move |_| dispatch(&ui_state, move |state| state.activate(index)));
    }

    // Every modifier event resyncs from the full mask, so keys that went
    // down before the window had focus are counted too
    let ui_state_for_press = ui_state.clone();
    window.connect_key_press_event(move |_, event| {
        let key = event.keyval();
        if key == gdk::keys::constants::Escape {
            dispatch(&ui_state_for_press, UIState::hide);
            return glib::Propagation::Stop;
        }
        let combo = combo_after_key(event.state(), &key, true);
        dispatch(&ui_state_for_press, move |state| state.sync_modifiers(combo));
        glib::Propagation::Proceed
    });

    let ui_state_for_release = ui_state.clone();
    window.connect_key_release_event(move |_, event| {
        let combo = combo_after_key(event.state(), &event.keyval(), false);
        dispatch(&ui_state_for_release, move |state| state.sync_modifiers(combo));
        glib::Propagation::Proceed
    });

    // The hotkey's own modifiers are usually still down when we gain focus
    let ui_state_for_focus_in = ui_state.clone();
    window.connect_focus_in_event(move |window, _| {
        let state = Keymap::for_display(&window.display())
            .map(|keymap| ModifierType::from_bits_truncate(keymap.modifier_state()))
            .unwrap_or_else(ModifierType::empty);
        let combo = combo_from_state(state);
        dispatch(&ui_state_for_focus_in, move |state| state.sync_modifiers(combo));
        glib::Propagation::Proceed
    });

    // Releases that happen while unfocused never reach us
    let ui_state_for_focus_out = ui_state.clone();
    window.connect_focus_out_event(move |_, _| {
        dispatch(&ui_state_for_focus_out, UIState::release_all);
        glib::Propagation::Proceed
    });

    if let Some(rx) = hotkey_rx {
        poll_channel(rx, ui_state.clone(), |state, message| match message {
            HotkeyMessage::TogglePressed => state.toggle(),
            HotkeyMessage::RegistrationFailed(e) => {
                warn!("Running without global hotkey: {}", e)
            }
        });
    }

    poll_channel(instance_rx, ui_state.clone(), |state, _| state.toggle());

    info!("Started - {} toggles the window", config.general.hotkey);
}

fn load_css(palette: &Palette, appearance: &AppearanceConfig) {
    let provider = CssProvider::new();
    if let Err(e) = provider.load_from_data(generate_css(palette, appearance).as_bytes()) {
        warn!("Failed to load CSS: {}", e);
        return;
    }
    if let Some(screen) = Screen::default() {
        StyleContext::add_provider_for_screen(
            &screen,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_USER,
        );
    }
}

/// Generate CSS with appearance settings from config
pub fn generate_css(palette: &Palette, appearance: &AppearanceConfig) -> String {
    let (bg_r, bg_g, bg_b) = parse_hex_color(palette.background);

    format!(
        r#"
    .emome-window {{
        background-color: rgba({bg_r}, {bg_g}, {bg_b}, {opacity});
    }}

    .emome-slot {{
        background-image: none;
        background-color: {button};
        color: {text};
        border: 1px solid transparent;
        border-radius: 8px;
        font-size: {font_size}px;
        padding: 0;
    }}

    .emome-slot:hover {{
        background-color: {button_hover};
        border-color: {accent};
    }}

    .emome-slot:active {{
        border-color: {accent};
    }}
"#,
        bg_r = bg_r,
        bg_g = bg_g,
        bg_b = bg_b,
        opacity = appearance.opacity,
        button = palette.button,
        button_hover = palette.button_hover,
        text = palette.text,
        accent = palette.accent,
        font_size = appearance.font_size,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_uses_palette_and_appearance() {
        let css = generate_css(&Palette::rose_pine(), &AppearanceConfig::default());
        assert!(css.contains("rgba(25, 23, 36, 1)"));
        assert!(css.contains("background-color: #6e6a86;"));
        assert!(css.contains("font-size: 36px;"));
    }
}
