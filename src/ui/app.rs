//! Main Emome application using iced.

use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};

use iced::keyboard::{self, key::Named, Key};
use iced::widget::{button, container, text, Column, Row};
use iced::{event, window, Element, Event, Length, Subscription, Task};
use tracing::{error, warn};

use super::clipboard::ArboardClipboard;
use super::style;
use super::subscriptions::channel_stream;
use super::theme::EmomeTheme;
use crate::config::AppearanceConfig;
use crate::core::{ModifierCombo, Picker, SlotSurface};
use crate::hotkey::HotkeyMessage;
use crate::instance::InstanceMessage;
use crate::launch::Launch;
use crate::layout::{GridLayout, WINDOW_PADDING};

/// The slot labels iced renders, plus visibility changes waiting to become
/// window tasks.
#[derive(Debug, Default)]
pub struct SlotGrid {
    labels: Vec<String>,
    pending_visibility: Option<bool>,
}

impl SlotGrid {
    pub fn new(slots: usize) -> Self {
        Self {
            labels: vec![String::new(); slots],
            pending_visibility: None,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    fn take_visibility_change(&mut self) -> Option<bool> {
        self.pending_visibility.take()
    }
}

impl SlotSurface for SlotGrid {
    fn slot_count(&self) -> usize {
        self.labels.len()
    }

    fn show_glyphs(&mut self, glyphs: &[String]) {
        for (label, glyph) in self.labels.iter_mut().zip(glyphs) {
            label.clone_from(glyph);
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.pending_visibility = Some(visible);
    }
}

/// The main Emome application state.
pub struct EmomeApp {
    picker: Picker,
    slots: SlotGrid,
    clipboard: ArboardClipboard,

    appearance: AppearanceConfig,
    layout: GridLayout,
    theme: EmomeTheme,

    hotkey_rx: Option<Arc<Mutex<Receiver<HotkeyMessage>>>>,
    instance_rx: Arc<Mutex<Receiver<InstanceMessage>>>,
}

/// Messages that the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    // Input events
    ModifiersChanged(keyboard::Modifiers),
    Activate(usize),
    EscapePressed,

    // Window management
    WindowUnfocused,
    Hotkey(HotkeyMessage),
    Instance(InstanceMessage),
}

impl EmomeApp {
    /// Create the application from a prepared launch.
    pub fn new(
        launch: Launch,
        hotkey_rx: Option<Receiver<HotkeyMessage>>,
    ) -> (Self, Task<Message>) {
        let Launch {
            config,
            picker,
            instance_rx,
            ..
        } = launch;

        let mut slots = SlotGrid::new(picker.slot_count());
        if let Err(e) = picker.attach(&mut slots) {
            // Slots are sized from the picker itself, so this is a bug
            error!("Failed to attach picker: {}", e);
        }
        // Initial visibility is part of the window settings
        slots.take_visibility_change();

        let app = Self {
            layout: GridLayout::new(&config.appearance, picker.slot_count()),
            theme: EmomeTheme::by_name(&config.appearance.theme),
            appearance: config.appearance,
            picker,
            slots,
            clipboard: ArboardClipboard::new(),
            hotkey_rx: hotkey_rx.map(|rx| Arc::new(Mutex::new(rx))),
            instance_rx: Arc::new(Mutex::new(instance_rx)),
        };

        (app, Task::none())
    }

    /// Update the application state based on a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ModifiersChanged(modifiers) => {
                let combo =
                    ModifierCombo::new(modifiers.shift(), modifiers.control(), modifiers.alt());
                self.picker.sync_modifiers(combo, &mut self.slots);
            }

            Message::Activate(index) => {
                if let Err(e) = self
                    .picker
                    .activate(index, &mut self.clipboard, &mut self.slots)
                {
                    error!("{}", e);
                }
            }

            Message::EscapePressed => self.picker.hide(&mut self.slots),

            Message::WindowUnfocused => {
                self.picker.release_all(&mut self.slots);
            }

            Message::Hotkey(HotkeyMessage::TogglePressed)
            | Message::Instance(InstanceMessage::ToggleRequested) => {
                self.picker.toggle(&mut self.slots);
            }

            Message::Hotkey(HotkeyMessage::RegistrationFailed(e)) => {
                warn!("Running without global hotkey: {}", e);
            }
        }

        self.visibility_task()
    }

    /// Create the view for the application.
    pub fn view(&self) -> Element<'_, Message> {
        let columns = self.layout.columns as usize;
        let spacing = self.appearance.spacing as f32;

        let rows = self
            .slots
            .labels()
            .chunks(columns)
            .enumerate()
            .map(|(row, glyphs)| {
                let buttons = glyphs
                    .iter()
                    .enumerate()
                    .map(|(col, glyph)| self.emoji_button(row * columns + col, glyph));
                Row::with_children(buttons).spacing(spacing).into()
            });

        let grid = Column::with_children(rows).spacing(spacing);

        let opacity = self.appearance.opacity as f32;
        container(grid)
            .padding(WINDOW_PADDING as u16)
            .center(Length::Fill)
            .style(move |_| style::main_container(&self.theme, opacity))
            .into()
    }

    /// Handle subscriptions (keyboard, window, hotkey and instance channels).
    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![
            event::listen_with(|event, _status, _id| match event {
                Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
                    Some(Message::ModifiersChanged(modifiers))
                }
                Event::Keyboard(keyboard::Event::KeyPressed {
                    key: Key::Named(Named::Escape),
                    ..
                }) => Some(Message::EscapePressed),
                Event::Window(window::Event::Unfocused) => Some(Message::WindowUnfocused),
                _ => None,
            }),
            Subscription::run_with_id("instance", channel_stream(self.instance_rx.clone()))
                .map(Message::Instance),
        ];

        if let Some(rx) = &self.hotkey_rx {
            subscriptions.push(
                Subscription::run_with_id("hotkey", channel_stream(rx.clone()))
                    .map(Message::Hotkey),
            );
        }

        Subscription::batch(subscriptions)
    }

    // --- Private methods ---

    fn emoji_button<'a>(&self, index: usize, glyph: &'a str) -> Element<'a, Message> {
        let size = self.appearance.button_size as f32;
        let theme = self.theme.clone();

        let label = text(glyph)
            .size(self.appearance.font_size as f32)
            .shaping(text::Shaping::Advanced)
            .width(Length::Fill)
            .height(Length::Fill)
            .center();

        button(label)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .on_press(Message::Activate(index))
            .style(move |_, status| style::emoji_button(&theme, status))
            .into()
    }

    /// Turn a visibility change requested by the picker into a window task.
    fn visibility_task(&mut self) -> Task<Message> {
        match self.slots.take_visibility_change() {
            Some(true) => window::get_latest().and_then(|id| {
                Task::batch([
                    window::change_mode(id, window::Mode::Windowed),
                    window::gain_focus(id),
                ])
            }),
            Some(false) => {
                window::get_latest().and_then(|id| window::change_mode(id, window::Mode::Hidden))
            }
            None => Task::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EmojiCatalog, KeyEvent, Modifier, PickerOptions};

    #[test]
    fn test_slot_grid_follows_picker() {
        let mut picker = Picker::new(EmojiCatalog::builtin(), PickerOptions::default());
        let mut slots = SlotGrid::new(picker.slot_count());
        picker.attach(&mut slots).unwrap();
        assert_eq!(slots.labels()[0], "👾");
        assert_eq!(slots.take_visibility_change(), Some(true));

        picker.key_event(KeyEvent::pressed(Modifier::Alt), &mut slots);
        assert_eq!(slots.labels()[0], "🚗");
        assert_eq!(slots.take_visibility_change(), None);

        picker.toggle(&mut slots);
        assert_eq!(slots.take_visibility_change(), Some(false));
    }
}
