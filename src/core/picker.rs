//! Toolkit-independent picker driving a display surface and a clipboard.
//!
//! Each frontend implements [`SlotSurface`] over its own widgets and
//! [`ClipboardSink`] over its clipboard, then forwards key, click and hotkey
//! events here. All calls must come from the GUI thread.

use tracing::{debug, info, warn};

use super::catalog::{EmojiCatalog, EmojiSet};
use super::modifier::{HeldModifiers, KeyEvent, ModifierCombo};
use super::selector::Selector;
use super::visibility::Visibility;
use crate::config::Config;
use crate::error::{EmomeError, EmomeResult};

/// A fixed row of labeled, clickable slots.
pub trait SlotSurface {
    /// Number of slots the surface was built with.
    fn slot_count(&self) -> usize;

    /// Relabel every slot, in order.
    fn show_glyphs(&mut self, glyphs: &[String]);

    /// Show or hide the whole surface.
    fn set_visible(&mut self, visible: bool);
}

/// Destination for copied glyphs.
pub trait ClipboardSink {
    fn copy_text(&mut self, text: &str) -> EmomeResult<()>;
}

/// Behavior switches for the picker.
#[derive(Debug, Clone, Copy)]
pub struct PickerOptions {
    pub start_visible: bool,
    pub hide_after_copy: bool,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            start_visible: true,
            hide_after_copy: true,
        }
    }
}

impl From<&Config> for PickerOptions {
    fn from(config: &Config) -> Self {
        Self {
            start_visible: config.general.start_visible,
            hide_after_copy: config.behavior.hide_after_copy,
        }
    }
}

/// The picker state: selected set, held modifiers and visibility.
#[derive(Debug, Clone)]
pub struct Picker {
    selector: Selector,
    held: HeldModifiers,
    visibility: Visibility,
    options: PickerOptions,
}

impl Picker {
    pub fn new(catalog: EmojiCatalog, options: PickerOptions) -> Self {
        Self {
            selector: Selector::new(catalog),
            held: HeldModifiers::new(),
            visibility: Visibility::new(options.start_visible),
            options,
        }
    }

    /// Build from the loaded config, validating its emoji sets.
    pub fn from_config(config: &Config) -> EmomeResult<Self> {
        let catalog = EmojiCatalog::from_config(&config.sets)?;
        Ok(Self::new(catalog, PickerOptions::from(config)))
    }

    pub fn catalog(&self) -> &EmojiCatalog {
        self.selector.catalog()
    }

    /// Number of slots a surface must provide.
    pub fn slot_count(&self) -> usize {
        self.selector.catalog().slot_count()
    }

    /// Check the surface layout and paint the initial state.
    pub fn attach<S: SlotSurface + ?Sized>(&self, surface: &mut S) -> EmomeResult<()> {
        if surface.slot_count() != self.slot_count() {
            return Err(EmomeError::Config(format!(
                "display has {} slots but emoji sets have {} glyphs",
                surface.slot_count(),
                self.slot_count()
            )));
        }
        surface.show_glyphs(self.current().glyphs());
        surface.set_visible(self.visibility.is_visible());
        Ok(())
    }

    pub fn current(&self) -> &EmojiSet {
        self.selector.current()
    }

    pub fn held(&self) -> ModifierCombo {
        self.held.combo()
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    /// Feed one modifier transition. Returns true if the glyphs changed.
    pub fn key_event<S: SlotSurface + ?Sized>(&mut self, event: KeyEvent, surface: &mut S) -> bool {
        match self.held.apply(event) {
            Some(combo) => self.select(combo, surface),
            None => false,
        }
    }

    /// Replace the held modifiers with a snapshot from the toolkit.
    pub fn sync_modifiers<S: SlotSurface + ?Sized>(
        &mut self,
        combo: ModifierCombo,
        surface: &mut S,
    ) -> bool {
        match self.held.replace(combo) {
            Some(combo) => self.select(combo, surface),
            None => false,
        }
    }

    /// Forget every held modifier, e.g. when the window loses focus.
    pub fn release_all<S: SlotSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        match self.held.clear() {
            Some(combo) => self.select(combo, surface),
            None => false,
        }
    }

    /// Copy the glyph in slot `index` of the active set.
    ///
    /// Returns the copied glyph, or `None` when the slot is out of range.
    /// On clipboard failure the surface stays visible.
    pub fn activate<C, S>(
        &mut self,
        index: usize,
        clipboard: &mut C,
        surface: &mut S,
    ) -> EmomeResult<Option<String>>
    where
        C: ClipboardSink + ?Sized,
        S: SlotSurface + ?Sized,
    {
        let Some(glyph) = self.current().get(index).map(str::to_string) else {
            warn!("Ignoring activation of slot {} (only {})", index, self.slot_count());
            return Ok(None);
        };

        clipboard.copy_text(&glyph)?;
        info!("Copied {} to clipboard", glyph);

        if self.options.hide_after_copy {
            self.hide(surface);
        }
        Ok(Some(glyph))
    }

    /// Flip visibility. Returns the new state.
    pub fn toggle<S: SlotSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        let visible = self.visibility.toggle();
        debug!("Visibility toggled: {}", visible);
        surface.set_visible(visible);
        visible
    }

    pub fn show<S: SlotSurface + ?Sized>(&mut self, surface: &mut S) {
        if self.visibility.set(true) {
            surface.set_visible(true);
        }
    }

    pub fn hide<S: SlotSurface + ?Sized>(&mut self, surface: &mut S) {
        if self.visibility.set(false) {
            surface.set_visible(false);
        }
    }

    fn select<S: SlotSurface + ?Sized>(&mut self, combo: ModifierCombo, surface: &mut S) -> bool {
        let (set, changed) = self.selector.on_modifier_changed(combo);
        if changed {
            surface.show_glyphs(set.glyphs());
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::SetTag;
    use crate::core::modifier::Modifier;

    #[derive(Default)]
    struct RecordingSurface {
        slots: usize,
        labels: Vec<String>,
        visible: Option<bool>,
        renders: usize,
    }

    impl RecordingSurface {
        fn with_slots(slots: usize) -> Self {
            Self {
                slots,
                ..Default::default()
            }
        }
    }

    impl SlotSurface for RecordingSurface {
        fn slot_count(&self) -> usize {
            self.slots
        }

        fn show_glyphs(&mut self, glyphs: &[String]) {
            self.labels = glyphs.to_vec();
            self.renders += 1;
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = Some(visible);
        }
    }

    #[derive(Default)]
    struct RecordingClipboard {
        copies: Vec<String>,
        fail: bool,
    }

    impl ClipboardSink for RecordingClipboard {
        fn copy_text(&mut self, text: &str) -> EmomeResult<()> {
            if self.fail {
                return Err(EmomeError::Clipboard("unavailable".to_string()));
            }
            self.copies.push(text.to_string());
            Ok(())
        }
    }

    fn attached() -> (Picker, RecordingSurface) {
        let picker = Picker::new(EmojiCatalog::builtin(), PickerOptions::default());
        let mut surface = RecordingSurface::with_slots(9);
        picker.attach(&mut surface).unwrap();
        (picker, surface)
    }

    #[test]
    fn test_attach_renders_default_set() {
        let (picker, surface) = attached();
        assert_eq!(picker.current().tag(), SetTag::Default);
        assert_eq!(surface.labels[0], "👾");
        assert_eq!(surface.visible, Some(true));
    }

    #[test]
    fn test_attach_rejects_wrong_slot_count() {
        let picker = Picker::new(EmojiCatalog::builtin(), PickerOptions::default());
        let mut surface = RecordingSurface::with_slots(6);
        assert!(matches!(
            picker.attach(&mut surface),
            Err(EmomeError::Config(_))
        ));
    }

    #[test]
    fn test_shift_ctrl_scenario() {
        let (mut picker, mut surface) = attached();
        let steps = [
            (KeyEvent::pressed(Modifier::Shift), SetTag::Shift),
            (KeyEvent::pressed(Modifier::Ctrl), SetTag::CtrlShift),
            (KeyEvent::released(Modifier::Shift), SetTag::Ctrl),
            (KeyEvent::released(Modifier::Ctrl), SetTag::Default),
        ];
        for (event, expected) in steps {
            assert!(picker.key_event(event, &mut surface));
            assert_eq!(picker.current().tag(), expected);
            assert_eq!(surface.labels, picker.current().glyphs());
        }
        assert_eq!(surface.renders, 5);
    }

    #[test]
    fn test_key_repeat_does_not_rerender() {
        let (mut picker, mut surface) = attached();
        assert!(picker.key_event(KeyEvent::pressed(Modifier::Alt), &mut surface));
        assert!(!picker.key_event(KeyEvent::pressed(Modifier::Alt), &mut surface));
        assert!(!picker.key_event(KeyEvent::released(Modifier::Shift), &mut surface));
        assert_eq!(surface.renders, 2);
    }

    #[test]
    fn test_release_all_returns_to_default() {
        let (mut picker, mut surface) = attached();
        picker.sync_modifiers(ModifierCombo::new(false, true, true), &mut surface);
        assert_eq!(picker.current().tag(), SetTag::CtrlAlt);
        assert!(picker.release_all(&mut surface));
        assert_eq!(picker.current().tag(), SetTag::Default);
        assert!(picker.held().is_empty());
    }

    #[test]
    fn test_snapshots_cover_modifiers_held_before_focus() {
        // Ctrl+Alt are still down from the hotkey when the window appears
        let (mut picker, mut surface) = attached();
        let ctrl_alt = ModifierCombo::of(&[Modifier::Ctrl, Modifier::Alt]);
        assert!(picker.sync_modifiers(ctrl_alt, &mut surface));
        assert_eq!(picker.current().tag(), SetTag::CtrlAlt);

        // No ctrl_alt_shift set configured, so the triple shows the default
        picker.sync_modifiers(ctrl_alt.with(Modifier::Shift), &mut surface);
        assert_eq!(picker.current().tag(), SetTag::Default);

        let alt_shift = ModifierCombo::of(&[Modifier::Alt, Modifier::Shift]);
        assert!(picker.sync_modifiers(alt_shift, &mut surface));
        assert_eq!(picker.current().tag(), SetTag::AltShift);
        assert_eq!(surface.labels, picker.current().glyphs());
    }

    #[test]
    fn test_activate_copies_once_and_hides() {
        let (mut picker, mut surface) = attached();
        let mut clipboard = RecordingClipboard::default();
        picker.key_event(KeyEvent::pressed(Modifier::Ctrl), &mut surface);

        let copied = picker.activate(2, &mut clipboard, &mut surface).unwrap();
        assert_eq!(copied.as_deref(), Some("🐯"));
        assert_eq!(clipboard.copies, vec!["🐯".to_string()]);
        assert!(!picker.is_visible());
        assert_eq!(surface.visible, Some(false));
    }

    #[test]
    fn test_activate_out_of_range_is_ignored() {
        let (mut picker, mut surface) = attached();
        let mut clipboard = RecordingClipboard::default();
        assert_eq!(picker.activate(9, &mut clipboard, &mut surface).unwrap(), None);
        assert!(clipboard.copies.is_empty());
        assert!(picker.is_visible());
    }

    #[test]
    fn test_clipboard_failure_keeps_window() {
        let (mut picker, mut surface) = attached();
        let mut clipboard = RecordingClipboard {
            fail: true,
            ..Default::default()
        };
        assert!(picker.activate(0, &mut clipboard, &mut surface).is_err());
        assert!(picker.is_visible());
    }

    #[test]
    fn test_keep_open_after_copy() {
        let options = PickerOptions {
            hide_after_copy: false,
            ..Default::default()
        };
        let mut picker = Picker::new(EmojiCatalog::builtin(), options);
        let mut surface = RecordingSurface::with_slots(9);
        let mut clipboard = RecordingClipboard::default();
        picker.attach(&mut surface).unwrap();
        picker.activate(0, &mut clipboard, &mut surface).unwrap();
        assert!(picker.is_visible());
    }

    #[test]
    fn test_toggle_and_show_hide() {
        let (mut picker, mut surface) = attached();
        assert!(!picker.toggle(&mut surface));
        assert_eq!(surface.visible, Some(false));
        assert!(picker.toggle(&mut surface));

        surface.visible = None;
        picker.show(&mut surface);
        assert_eq!(surface.visible, None);
        picker.hide(&mut surface);
        assert_eq!(surface.visible, Some(false));
    }
}
