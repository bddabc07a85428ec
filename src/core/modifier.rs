//! Modifier key model.
//!
//! Frontends report individual Shift/Ctrl/Alt transitions (or a full
//! snapshot); [`HeldModifiers`] folds them into the combination that is
//! actually held right now.

use std::fmt;

/// A modifier key that switches emoji sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Shift,
    Ctrl,
    Alt,
}

impl Modifier {
    /// All tracked modifiers, in bit order.
    pub const ALL: [Modifier; 3] = [Modifier::Shift, Modifier::Ctrl, Modifier::Alt];

    fn bit(self) -> u8 {
        match self {
            Modifier::Shift => 0b001,
            Modifier::Ctrl => 0b010,
            Modifier::Alt => 0b100,
        }
    }
}

/// Set of simultaneously held modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModifierCombo(u8);

impl ModifierCombo {
    pub const EMPTY: ModifierCombo = ModifierCombo(0);

    pub fn new(shift: bool, ctrl: bool, alt: bool) -> Self {
        let mut combo = Self::EMPTY;
        combo.set(Modifier::Shift, shift);
        combo.set(Modifier::Ctrl, ctrl);
        combo.set(Modifier::Alt, alt);
        combo
    }

    pub fn of(modifiers: &[Modifier]) -> Self {
        modifiers
            .iter()
            .fold(Self::EMPTY, |combo, m| combo.with(*m))
    }

    pub fn with(mut self, modifier: Modifier) -> Self {
        self.0 |= modifier.bit();
        self
    }

    pub fn without(mut self, modifier: Modifier) -> Self {
        self.0 &= !modifier.bit();
        self
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0 & modifier.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn shift(&self) -> bool {
        self.contains(Modifier::Shift)
    }

    pub fn ctrl(&self) -> bool {
        self.contains(Modifier::Ctrl)
    }

    pub fn alt(&self) -> bool {
        self.contains(Modifier::Alt)
    }

    fn set(&mut self, modifier: Modifier, held: bool) {
        if held {
            self.0 |= modifier.bit();
        } else {
            self.0 &= !modifier.bit();
        }
    }
}

impl fmt::Display for ModifierCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = Modifier::ALL
            .iter()
            .filter(|m| self.contains(**m))
            .map(|m| match m {
                Modifier::Shift => "Shift",
                Modifier::Ctrl => "Ctrl",
                Modifier::Alt => "Alt",
            })
            .collect();
        f.write_str(&names.join("+"))
    }
}

/// Direction of a key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// A single modifier key transition reported by a frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub modifier: Modifier,
    pub state: KeyState,
}

impl KeyEvent {
    pub fn pressed(modifier: Modifier) -> Self {
        Self {
            modifier,
            state: KeyState::Pressed,
        }
    }

    pub fn released(modifier: Modifier) -> Self {
        Self {
            modifier,
            state: KeyState::Released,
        }
    }
}

/// Tracks which modifiers are currently held down.
#[derive(Debug, Clone, Default)]
pub struct HeldModifiers {
    held: ModifierCombo,
}

impl HeldModifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn combo(&self) -> ModifierCombo {
        self.held
    }

    /// Apply a transition. Returns the new combination only when membership
    /// actually changed, so auto-repeat and stray releases are ignored.
    pub fn apply(&mut self, event: KeyEvent) -> Option<ModifierCombo> {
        let held = event.state == KeyState::Pressed;
        if self.held.contains(event.modifier) == held {
            return None;
        }
        self.held.set(event.modifier, held);
        Some(self.held)
    }

    /// Replace membership with a full snapshot.
    pub fn replace(&mut self, combo: ModifierCombo) -> Option<ModifierCombo> {
        if self.held == combo {
            return None;
        }
        self.held = combo;
        Some(combo)
    }

    pub fn clear(&mut self) -> Option<ModifierCombo> {
        self.replace(ModifierCombo::EMPTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combo_construction() {
        let combo = ModifierCombo::new(true, false, true);
        assert!(combo.shift());
        assert!(!combo.ctrl());
        assert!(combo.alt());
        assert_eq!(combo, ModifierCombo::of(&[Modifier::Alt, Modifier::Shift]));
        assert!(ModifierCombo::default().is_empty());
        assert_eq!(combo.without(Modifier::Shift), ModifierCombo::of(&[Modifier::Alt]));
        assert_eq!(combo.without(Modifier::Ctrl), combo);
    }

    #[test]
    fn test_combo_display() {
        assert_eq!(ModifierCombo::EMPTY.to_string(), "none");
        assert_eq!(
            ModifierCombo::of(&[Modifier::Alt, Modifier::Ctrl]).to_string(),
            "Ctrl+Alt"
        );
    }

    #[test]
    fn test_press_and_release() {
        let mut held = HeldModifiers::new();
        assert_eq!(
            held.apply(KeyEvent::pressed(Modifier::Shift)),
            Some(ModifierCombo::of(&[Modifier::Shift]))
        );
        assert_eq!(
            held.apply(KeyEvent::pressed(Modifier::Ctrl)),
            Some(ModifierCombo::of(&[Modifier::Shift, Modifier::Ctrl]))
        );
        assert_eq!(
            held.apply(KeyEvent::released(Modifier::Shift)),
            Some(ModifierCombo::of(&[Modifier::Ctrl]))
        );
    }

    #[test]
    fn test_key_repeat_is_ignored() {
        let mut held = HeldModifiers::new();
        held.apply(KeyEvent::pressed(Modifier::Alt));
        assert_eq!(held.apply(KeyEvent::pressed(Modifier::Alt)), None);
        assert_eq!(held.combo(), ModifierCombo::of(&[Modifier::Alt]));
    }

    #[test]
    fn test_release_of_unheld_key_is_ignored() {
        let mut held = HeldModifiers::new();
        held.apply(KeyEvent::pressed(Modifier::Ctrl));
        assert_eq!(held.apply(KeyEvent::released(Modifier::Shift)), None);
        assert_eq!(held.combo(), ModifierCombo::of(&[Modifier::Ctrl]));
    }

    #[test]
    fn test_replace_and_clear() {
        let mut held = HeldModifiers::new();
        let all = ModifierCombo::new(true, true, true);
        assert_eq!(held.replace(all), Some(all));
        assert_eq!(held.replace(all), None);
        assert_eq!(held.clear(), Some(ModifierCombo::EMPTY));
        assert_eq!(held.clear(), None);
    }
}
