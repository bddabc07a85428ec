use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::core::catalog::{builtin_glyphs, SetTag};
use crate::error::{EmomeError, EmomeResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub appearance: AppearanceConfig,
    pub behavior: BehaviorConfig,
    pub sets: SetsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Global accelerator toggling the window, e.g. "ctrl+alt+e"
    pub hotkey: String,
    pub start_visible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub theme: String,
    pub opacity: f64,
    pub columns: u32,
    pub button_size: u32,
    pub font_size: u32,
    pub spacing: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    pub hide_after_copy: bool,
    pub always_on_top: bool,
}

/// Per-combination overrides of the builtin emoji sets.
///
/// A missing key keeps the builtin set. `ctrl_alt_shift` has no builtin;
/// without it Ctrl+Alt+Shift shows the default set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SetsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctrl: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctrl_shift: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_shift: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctrl_alt: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctrl_alt_shift: Option<Vec<String>>,
}

impl SetsConfig {
    /// Every builtin set spelled out, for writing a starter config.
    pub fn builtin() -> Self {
        let glyphs = |tag| -> Option<Vec<String>> {
            builtin_glyphs(tag).map(|g| g.iter().map(|s| s.to_string()).collect())
        };
        Self {
            default: glyphs(SetTag::Default),
            shift: glyphs(SetTag::Shift),
            ctrl: glyphs(SetTag::Ctrl),
            alt: glyphs(SetTag::Alt),
            ctrl_shift: glyphs(SetTag::CtrlShift),
            alt_shift: glyphs(SetTag::AltShift),
            ctrl_alt: glyphs(SetTag::CtrlAlt),
            ctrl_alt_shift: None,
        }
    }

    pub fn get(&self, tag: SetTag) -> Option<&[String]> {
        let glyphs = match tag {
            SetTag::Default => &self.default,
            SetTag::Shift => &self.shift,
            SetTag::Ctrl => &self.ctrl,
            SetTag::Alt => &self.alt,
            SetTag::CtrlShift => &self.ctrl_shift,
            SetTag::AltShift => &self.alt_shift,
            SetTag::CtrlAlt => &self.ctrl_alt,
            SetTag::CtrlAltShift => &self.ctrl_alt_shift,
        };
        glyphs.as_deref()
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            hotkey: "ctrl+alt+e".to_string(),
            start_visible: true,
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: "rose-pine".to_string(),
            opacity: 1.0,
            columns: 3,
            button_size: 120,
            font_size: 36,
            spacing: 20,
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            hide_after_copy: true,
            always_on_top: true,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("emome")
            .join("config.toml")
    }

    /// Load config from file, or return defaults if not found or unreadable
    pub fn load() -> Self {
        let path = Self::config_path();

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse a config document and clamp its values.
    pub fn from_toml_str(content: &str) -> EmomeResult<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.validate();
        Ok(config)
    }

    /// Config written by `--init-config`: defaults with every set spelled out.
    pub fn starter() -> Self {
        Self {
            sets: SetsConfig::builtin(),
            ..Self::default()
        }
    }

    /// Validate and clamp config values to acceptable ranges
    fn validate(&mut self) {
        self.appearance.opacity = self.appearance.opacity.clamp(0.5, 1.0);
        self.appearance.columns = self.appearance.columns.clamp(1, 9);
        self.appearance.button_size = self.appearance.button_size.clamp(48, 240);
        self.appearance.font_size = self.appearance.font_size.clamp(12, 96);
        self.appearance.spacing = self.appearance.spacing.min(64);
    }

    pub fn to_toml_string(&self) -> EmomeResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save config to file
    pub fn save(&self) -> EmomeResult<PathBuf> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&path, self.to_toml_string()?)?;
        Ok(path)
    }

    /// Write the starter config unless a file already exists.
    pub fn init_file() -> EmomeResult<PathBuf> {
        let path = Self::config_path();
        if path.exists() {
            return Err(EmomeError::Config(format!(
                "{} already exists",
                path.display()
            )));
        }
        Self::starter().save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.general.hotkey, "ctrl+alt+e");
        assert!(config.general.start_visible);
        assert!(config.behavior.hide_after_copy);
        assert_eq!(config.appearance.columns, 3);
        assert_eq!(config.appearance.theme, "rose-pine");
        assert!(config.sets.get(SetTag::Default).is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [general]
            hotkey = "super+space"

            [sets]
            ctrl_alt_shift = ["🐸", "🐢", "🦎", "🐊", "🐉", "🦕", "🦖", "🐲", "🐍"]
            "#,
        )
        .unwrap();
        assert_eq!(config.general.hotkey, "super+space");
        assert!(config.general.start_visible);
        assert_eq!(config.appearance.button_size, 120);
        assert_eq!(config.sets.get(SetTag::CtrlAltShift).map(|s| s.len()), Some(9));
        assert!(config.sets.get(SetTag::Shift).is_none());
    }

    #[test]
    fn test_values_are_clamped() {
        let config = Config::from_toml_str(
            r#"
            [appearance]
            opacity = 0.1
            columns = 0
            button_size = 1000
            font_size = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.appearance.opacity, 0.5);
        assert_eq!(config.appearance.columns, 1);
        assert_eq!(config.appearance.button_size, 240);
        assert_eq!(config.appearance.font_size, 12);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(matches!(
            Config::from_toml_str("[general\nhotkey = "),
            Err(EmomeError::TomlParse(_))
        ));
    }

    #[test]
    fn test_starter_round_trips_through_toml() {
        let text = Config::starter().to_toml_string().unwrap();
        assert!(text.contains("[sets]"));
        assert!(!text.contains("ctrl_alt_shift"));
        let parsed = Config::from_toml_str(&text).unwrap();
        assert_eq!(parsed.sets.get(SetTag::Ctrl).and_then(|s| s.get(2)).map(String::as_str), Some("🐯"));
    }
}
