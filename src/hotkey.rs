//! Global hotkey configuration and listener.
//!
//! Accelerators come from the config as strings like `"ctrl+alt+e"`. Parsing
//! is always available so bad config is caught at startup; the OS listener
//! built on the `global-hotkey` crate is only compiled with a frontend.

use std::fmt;
use std::str::FromStr;

use crate::error::EmomeError;

/// Supported modifiers for the hotkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HotkeyModifier {
    Control,
    Alt,
    Shift,
    Super,
}

impl HotkeyModifier {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "ctrl" | "control" => Some(HotkeyModifier::Control),
            "alt" | "option" => Some(HotkeyModifier::Alt),
            "shift" => Some(HotkeyModifier::Shift),
            "super" | "cmd" | "command" | "meta" => Some(HotkeyModifier::Super),
            _ => None,
        }
    }

    fn accelerator(self) -> &'static str {
        match self {
            HotkeyModifier::Control => "control",
            HotkeyModifier::Alt => "alt",
            HotkeyModifier::Shift => "shift",
            HotkeyModifier::Super => "super",
        }
    }
}

/// Supported key codes for the hotkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyKey {
    Letter(char),
    Digit(char),
    Function(u8),
    Space,
}

impl HotkeyKey {
    fn parse(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return match c {
                'a'..='z' => Some(HotkeyKey::Letter(c.to_ascii_uppercase())),
                '0'..='9' => Some(HotkeyKey::Digit(c)),
                _ => None,
            };
        }
        if token == "space" {
            return Some(HotkeyKey::Space);
        }
        token
            .strip_prefix('f')
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (1..=12).contains(n))
            .map(HotkeyKey::Function)
    }

    fn accelerator(self) -> String {
        match self {
            HotkeyKey::Letter(c) => format!("Key{}", c),
            HotkeyKey::Digit(c) => format!("Digit{}", c),
            HotkeyKey::Function(n) => format!("F{}", n),
            HotkeyKey::Space => "Space".to_string(),
        }
    }
}

/// A parsed, validated hotkey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotkeySpec {
    pub modifiers: Vec<HotkeyModifier>,
    pub key: HotkeyKey,
}

impl HotkeySpec {
    /// Canonical accelerator string understood by `global-hotkey`.
    pub fn accelerator(&self) -> String {
        let mut parts: Vec<String> = self
            .modifiers
            .iter()
            .map(|m| m.accelerator().to_string())
            .collect();
        parts.push(self.key.accelerator());
        parts.join("+")
    }
}

impl FromStr for HotkeySpec {
    type Err = EmomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |why: &str| EmomeError::Config(format!("invalid hotkey '{}': {}", s, why));

        let mut modifiers = Vec::new();
        let mut key = None;
        for token in s.split('+').map(|t| t.trim().to_ascii_lowercase()) {
            if token.is_empty() {
                return Err(invalid("empty component"));
            }
            if let Some(modifier) = HotkeyModifier::parse(&token) {
                if !modifiers.contains(&modifier) {
                    modifiers.push(modifier);
                }
                continue;
            }
            let parsed = HotkeyKey::parse(&token)
                .ok_or_else(|| invalid(&format!("unknown key '{}'", token)))?;
            if key.replace(parsed).is_some() {
                return Err(invalid("more than one key"));
            }
        }

        let key = key.ok_or_else(|| invalid("no key"))?;
        if modifiers.is_empty() {
            return Err(invalid("at least one modifier is required"));
        }
        modifiers.sort();
        Ok(Self { modifiers, key })
    }
}

impl fmt::Display for HotkeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.accelerator())
    }
}

/// Messages from the hotkey system.
#[derive(Debug, Clone)]
pub enum HotkeyMessage {
    /// The toggle hotkey was pressed.
    TogglePressed,
    /// Failed to register the hotkey.
    RegistrationFailed(String),
}

#[cfg(feature = "global-hotkey")]
pub use listener::spawn_listener;

#[cfg(feature = "global-hotkey")]
mod listener {
    use global_hotkey::{hotkey::HotKey, GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
    use once_cell::sync::OnceCell;
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::thread;

    use super::{HotkeyMessage, HotkeySpec};
    use crate::error::{EmomeError, EmomeResult};

    /// Set once the listener thread has been started.
    static LISTENER_STARTED: OnceCell<()> = OnceCell::new();

    /// Start the global hotkey listener on a background thread.
    ///
    /// Events arrive on the returned channel and must be handled on the GUI
    /// thread. Only one listener may exist per process.
    pub fn spawn_listener(spec: &HotkeySpec) -> EmomeResult<Receiver<HotkeyMessage>> {
        LISTENER_STARTED
            .set(())
            .map_err(|_| EmomeError::Hotkey("hotkey listener already running".to_string()))?;

        let accelerator = spec.accelerator();
        let (tx, rx) = mpsc::channel();

        // The manager lives on its own thread so it can block on the event
        // receiver without stalling the GUI loop.
        thread::Builder::new()
            .name("emome-hotkey".to_string())
            .spawn(move || {
                // Reported to the GUI thread, which logs it
                if let Err(e) = run_hotkey_manager(&accelerator, &tx) {
                    let _ = tx.send(HotkeyMessage::RegistrationFailed(e.to_string()));
                }
            })?;

        Ok(rx)
    }

    fn run_hotkey_manager(accelerator: &str, tx: &Sender<HotkeyMessage>) -> EmomeResult<()> {
        let manager = GlobalHotKeyManager::new()
            .map_err(|e| EmomeError::Hotkey(format!("failed to create manager: {}", e)))?;

        let hotkey: HotKey = accelerator
            .parse()
            .map_err(|e| EmomeError::Hotkey(format!("failed to parse '{}': {}", accelerator, e)))?;

        let id = hotkey.id();
        manager
            .register(hotkey)
            .map_err(|e| EmomeError::Hotkey(format!("failed to register '{}': {}", accelerator, e)))?;

        tracing::info!("Registered global hotkey {}", accelerator);

        // Runs until the GUI side drops its receiver
        let events = GlobalHotKeyEvent::receiver();
        while let Ok(event) = events.recv() {
            if event.id == id
                && event.state == HotKeyState::Pressed
                && tx.send(HotkeyMessage::TogglePressed).is_err()
            {
                break;
            }
        }

        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_only_one_listener_per_process() {
            let spec: HotkeySpec = "ctrl+alt+e".parse().unwrap();
            // The first listener may fail to register without a display; that
            // arrives on its channel rather than as an error here
            assert!(spawn_listener(&spec).is_ok());
            assert!(matches!(
                spawn_listener(&spec),
                Err(EmomeError::Hotkey(_))
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_hotkey() {
        let spec: HotkeySpec = "ctrl+alt+e".parse().unwrap();
        assert_eq!(
            spec.modifiers,
            vec![HotkeyModifier::Control, HotkeyModifier::Alt]
        );
        assert_eq!(spec.key, HotkeyKey::Letter('E'));
        assert_eq!(spec.accelerator(), "control+alt+KeyE");
    }

    #[test]
    fn test_parse_aliases_and_case() {
        let spec: HotkeySpec = " Super + Shift + SPACE ".parse().unwrap();
        assert_eq!(spec.accelerator(), "shift+super+Space");

        let spec: HotkeySpec = "cmd+option+f5".parse().unwrap();
        assert_eq!(spec.accelerator(), "alt+super+F5");

        let spec: HotkeySpec = "control+ctrl+7".parse().unwrap();
        assert_eq!(spec.accelerator(), "control+Digit7");
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "e", "ctrl+", "ctrl+alt", "ctrl+e+f", "ctrl+f13", "ctrl+enter"] {
            assert!(bad.parse::<HotkeySpec>().is_err(), "{:?} should fail", bad);
        }
    }
}
