//! GTK implementations of the picker seams, and the shared UI state.

use glib::ControlFlow;
use gtk::prelude::*;
use gtk::{ApplicationWindow, Button};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;
use tracing::error;

use emome::core::{ClipboardSink, ModifierCombo, Picker, SlotSurface};
use emome::EmomeResult;

/// Fixed grid of emoji buttons inside the picker window.
pub struct GtkSlots {
    window: ApplicationWindow,
    buttons: Vec<Button>,
}

impl GtkSlots {
    pub fn new(window: ApplicationWindow, buttons: Vec<Button>) -> Self {
        Self { window, buttons }
    }
}

impl SlotSurface for GtkSlots {
    fn slot_count(&self) -> usize {
        self.buttons.len()
    }

    fn show_glyphs(&mut self, glyphs: &[String]) {
        for (button, glyph) in self.buttons.iter().zip(glyphs) {
            button.set_label(glyph);
        }
    }

    fn set_visible(&mut self, visible: bool) {
        if visible {
            self.window.show_all();
            self.window.present();
        } else {
            self.window.hide();
        }
    }
}

/// The CLIPBOARD selection of the default display.
#[derive(Default)]
pub struct GtkClipboard;

impl ClipboardSink for GtkClipboard {
    fn copy_text(&mut self, text: &str) -> EmomeResult<()> {
        let clipboard = gtk::Clipboard::get(&gdk::SELECTION_CLIPBOARD);
        clipboard.set_text(text);
        // Hand the text to the clipboard manager so it outlives us. store()
        // spins a nested main loop, so it must not run inside a state borrow.
        glib::idle_add_local_once(move || clipboard.store());
        Ok(())
    }
}

/// Everything the signal handlers mutate.
pub struct UIState {
    pub picker: Picker,
    pub slots: GtkSlots,
    pub clipboard: GtkClipboard,
}

/// Shared handle used by every signal handler and poller.
pub type UIStateHandle = Rc<RefCell<UIState>>;

impl UIState {
    pub fn attach(&mut self) -> EmomeResult<()> {
        self.picker.attach(&mut self.slots)
    }

    pub fn sync_modifiers(&mut self, combo: ModifierCombo) {
        self.picker.sync_modifiers(combo, &mut self.slots);
    }

    pub fn release_all(&mut self) {
        self.picker.release_all(&mut self.slots);
    }

    pub fn activate(&mut self, index: usize) {
        if let Err(e) = self
            .picker
            .activate(index, &mut self.clipboard, &mut self.slots)
        {
            error!("{}", e);
        }
    }

    pub fn toggle(&mut self) {
        self.picker.toggle(&mut self.slots);
    }

    pub fn hide(&mut self) {
        self.picker.hide(&mut self.slots);
    }
}

/// How often the hotkey and instance channels are drained.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run `f` on the shared state now, or on the next idle if a nested main
/// loop is already inside a borrow.
pub fn dispatch<S, F>(handle: &Rc<RefCell<S>>, f: F)
where
    S: 'static,
    F: FnOnce(&mut S) + 'static,
{
    match handle.try_borrow_mut() {
        Ok(mut state) => f(&mut state),
        Err(_) => {
            let handle = handle.clone();
            glib::idle_add_local_once(move || dispatch(&handle, f));
        }
    }
}

/// Drain a background-thread channel on the GTK main loop.
///
/// Messages stay queued while the state is borrowed.
pub fn poll_channel<S, T, F>(rx: Receiver<T>, handle: Rc<RefCell<S>>, mut on_message: F)
where
    S: 'static,
    T: 'static,
    F: FnMut(&mut S, T) + 'static,
{
    glib::timeout_add_local(POLL_INTERVAL, move || {
        let Ok(mut state) = handle.try_borrow_mut() else {
            return ControlFlow::Continue;
        };
        loop {
            match rx.try_recv() {
                Ok(message) => on_message(&mut state, message),
                Err(TryRecvError::Empty) => return ControlFlow::Continue,
                Err(TryRecvError::Disconnected) => return ControlFlow::Break,
            }
        }
    });
}
