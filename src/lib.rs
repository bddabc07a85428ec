//! Emome - floating emoji picker.
//!
//! A small window of emoji buttons. Clicking one copies it to the clipboard
//! and hides the window; holding Shift, Ctrl, Alt or a combination of them
//! swaps the displayed set; a global hotkey toggles the window.
//!
//! # Architecture
//!
//! - [`core`] - Toolkit-independent picker: set selection, held modifiers,
//!   visibility, and the [`SlotSurface`]/[`ClipboardSink`] seams
//! - [`config`] - Configuration loading and management
//! - [`hotkey`] - Hotkey accelerator parsing and the global listener
//! - [`theme`] - Colour palettes shared by the frontends
//!
//! Two frontends implement the seams: iced (`ui`, feature `iced-ui`) and
//! GTK 3 (the `emome` binary, feature `gtk-ui`).
//!
//! # Example
//!
//! ```
//! use emome::core::{EmojiCatalog, KeyEvent, Modifier, Picker, PickerOptions, SlotSurface};
//!
//! struct Labels(Vec<String>);
//!
//! impl SlotSurface for Labels {
//!     fn slot_count(&self) -> usize { 9 }
//!     fn show_glyphs(&mut self, glyphs: &[String]) { self.0 = glyphs.to_vec(); }
//!     fn set_visible(&mut self, _visible: bool) {}
//! }
//!
//! let mut picker = Picker::new(EmojiCatalog::builtin(), PickerOptions::default());
//! let mut labels = Labels(Vec::new());
//! picker.attach(&mut labels).unwrap();
//! picker.key_event(KeyEvent::pressed(Modifier::Ctrl), &mut labels);
//! assert_eq!(labels.0[2], "🐯");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod hotkey;
pub mod layout;
pub mod logging;
pub mod theme;

#[cfg(feature = "interprocess")]
pub mod instance;

#[cfg(any(feature = "iced-ui", feature = "gtk-ui"))]
pub mod launch;

pub mod ui;

mod error;

// Re-export commonly used types for convenience
pub use config::Config;
pub use core::{ClipboardSink, EmojiCatalog, EmojiSet, Picker, SetTag, SlotSurface};
pub use error::{EmomeError, EmomeResult};
