//! Emoji-set selection state machine.

use super::catalog::{EmojiCatalog, EmojiSet, SetTag};
use super::modifier::ModifierCombo;

/// Maps the held modifier combination to the active emoji set.
#[derive(Debug, Clone)]
pub struct Selector {
    catalog: EmojiCatalog,
    active: SetTag,
}

impl Selector {
    /// Create a selector with the default set active.
    pub fn new(catalog: EmojiCatalog) -> Self {
        Self {
            catalog,
            active: SetTag::Default,
        }
    }

    /// Resolve `combo` and make its set active.
    ///
    /// Returns the active set and whether it differs from the previous one.
    pub fn on_modifier_changed(&mut self, combo: ModifierCombo) -> (&EmojiSet, bool) {
        let tag = self.catalog.resolve(combo);
        let changed = tag != self.active;
        if changed {
            tracing::debug!("Modifiers {} -> set '{}'", combo, tag);
            self.active = tag;
        }
        (self.current(), changed)
    }

    /// The currently active set.
    pub fn current(&self) -> &EmojiSet {
        self.catalog
            .get(self.active)
            .unwrap_or_else(|| self.catalog.default_set())
    }

    pub fn active_tag(&self) -> SetTag {
        self.active
    }

    pub fn catalog(&self) -> &EmojiCatalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::modifier::Modifier::{self, *};

    fn combo(mods: &[Modifier]) -> ModifierCombo {
        ModifierCombo::of(mods)
    }

    #[test]
    fn test_starts_on_default() {
        let selector = Selector::new(EmojiCatalog::builtin());
        assert_eq!(selector.current().tag(), SetTag::Default);
        assert_eq!(selector.current().get(0), Some("👾"));
    }

    #[test]
    fn test_every_combo_maps_to_its_set() {
        let mut selector = Selector::new(EmojiCatalog::builtin());
        let cases = [
            (combo(&[Shift]), SetTag::Shift),
            (combo(&[Ctrl]), SetTag::Ctrl),
            (combo(&[Alt]), SetTag::Alt),
            (combo(&[Ctrl, Shift]), SetTag::CtrlShift),
            (combo(&[Alt, Shift]), SetTag::AltShift),
            (combo(&[Ctrl, Alt]), SetTag::CtrlAlt),
            (combo(&[Ctrl, Alt, Shift]), SetTag::Default),
            (ModifierCombo::EMPTY, SetTag::Default),
        ];
        for (combo, expected) in cases {
            let (set, _) = selector.on_modifier_changed(combo);
            assert_eq!(set.tag(), expected, "combo {}", combo);
        }
    }

    #[test]
    fn test_same_combo_twice_is_unchanged() {
        let mut selector = Selector::new(EmojiCatalog::builtin());
        let (_, changed) = selector.on_modifier_changed(combo(&[Alt]));
        assert!(changed);
        let (set, changed) = selector.on_modifier_changed(combo(&[Alt]));
        assert!(!changed);
        assert_eq!(set.tag(), SetTag::Alt);
    }

    #[test]
    fn test_empty_combo_always_returns_to_default() {
        let mut selector = Selector::new(EmojiCatalog::builtin());
        for history in [
            vec![combo(&[Shift]), combo(&[Ctrl, Shift])],
            vec![combo(&[Ctrl, Alt]), combo(&[Alt])],
            vec![combo(&[Ctrl, Alt, Shift])],
        ] {
            for c in history {
                selector.on_modifier_changed(c);
            }
            let (set, _) = selector.on_modifier_changed(ModifierCombo::EMPTY);
            assert_eq!(set.tag(), SetTag::Default);
        }
    }

    #[test]
    fn test_empty_combo_from_default_is_unchanged() {
        let mut selector = Selector::new(EmojiCatalog::builtin());
        let (_, changed) = selector.on_modifier_changed(ModifierCombo::EMPTY);
        assert!(!changed);
    }
}
