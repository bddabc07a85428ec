//! Core picker logic, independent of any GUI toolkit.

pub mod catalog;
pub mod modifier;
pub mod picker;
pub mod selector;
pub mod visibility;

pub use catalog::{EmojiCatalog, EmojiSet, SetTag};
pub use modifier::{HeldModifiers, KeyEvent, KeyState, Modifier, ModifierCombo};
pub use picker::{ClipboardSink, Picker, PickerOptions, SlotSurface};
pub use selector::Selector;
pub use visibility::Visibility;
