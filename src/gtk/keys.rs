//! Keyval and modifier-state mapping for the GTK frontend.

use gdk::keys::constants as key;
use gdk::keys::Key;
use gdk::ModifierType;

use emome::core::{Modifier, ModifierCombo};

/// The set-switching modifier a keyval belongs to, if any.
pub fn modifier_for_key(keyval: &Key) -> Option<Modifier> {
    const SHIFT: [Key; 2] = [key::Shift_L, key::Shift_R];
    const CTRL: [Key; 2] = [key::Control_L, key::Control_R];
    // X11 reports Alt as Meta while Shift is held
    const ALT: [Key; 4] = [key::Alt_L, key::Alt_R, key::Meta_L, key::Meta_R];

    if SHIFT.contains(keyval) {
        Some(Modifier::Shift)
    } else if CTRL.contains(keyval) {
        Some(Modifier::Ctrl)
    } else if ALT.contains(keyval) {
        Some(Modifier::Alt)
    } else {
        None
    }
}

/// Held modifiers according to a GDK modifier mask.
pub fn combo_from_state(state: ModifierType) -> ModifierCombo {
    ModifierCombo::new(
        state.contains(ModifierType::SHIFT_MASK),
        state.contains(ModifierType::CONTROL_MASK),
        state.contains(ModifierType::MOD1_MASK),
    )
}

/// Held modifiers once a key event has been applied.
///
/// GDK reports the mask as it was before the event, so the event's own
/// modifier key is added or removed here.
pub fn combo_after_key(state: ModifierType, keyval: &Key, pressed: bool) -> ModifierCombo {
    let combo = combo_from_state(state);
    match modifier_for_key(keyval) {
        Some(modifier) if pressed => combo.with(modifier),
        Some(modifier) => combo.without(modifier),
        None => combo,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_keys() {
        assert_eq!(modifier_for_key(&key::Shift_R), Some(Modifier::Shift));
        assert_eq!(modifier_for_key(&key::Control_L), Some(Modifier::Ctrl));
        assert_eq!(modifier_for_key(&key::Meta_L), Some(Modifier::Alt));
        assert_eq!(modifier_for_key(&key::Escape), None);
        assert_eq!(modifier_for_key(&key::a), None);
    }

    #[test]
    fn test_combo_from_state() {
        assert!(combo_from_state(ModifierType::empty()).is_empty());
        assert_eq!(
            combo_from_state(ModifierType::CONTROL_MASK | ModifierType::MOD1_MASK),
            ModifierCombo::of(&[Modifier::Ctrl, Modifier::Alt])
        );
        // Super and lock masks do not switch sets
        assert_eq!(
            combo_from_state(ModifierType::SHIFT_MASK | ModifierType::SUPER_MASK | ModifierType::LOCK_MASK),
            ModifierCombo::of(&[Modifier::Shift])
        );
    }

    #[test]
    fn test_combo_after_key_uses_full_state() {
        // Ctrl+Alt held from the hotkey, never delivered to the window
        let held = ModifierType::CONTROL_MASK | ModifierType::MOD1_MASK;
        assert_eq!(
            combo_after_key(held, &key::Shift_L, true),
            ModifierCombo::of(&[Modifier::Ctrl, Modifier::Alt, Modifier::Shift])
        );

        let held = held | ModifierType::SHIFT_MASK;
        assert_eq!(
            combo_after_key(held, &key::Control_L, false),
            ModifierCombo::of(&[Modifier::Alt, Modifier::Shift])
        );

        assert_eq!(
            combo_after_key(ModifierType::SHIFT_MASK, &key::a, true),
            ModifierCombo::of(&[Modifier::Shift])
        );
    }
}
