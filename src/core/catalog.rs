//! Emoji set definitions and the validated catalog built from them.

use std::collections::BTreeMap;
use std::fmt;

use super::modifier::ModifierCombo;
use crate::config::SetsConfig;
use crate::error::{EmomeError, EmomeResult};

/// Identity of an emoji set. Sets are switched by tag, never by content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SetTag {
    Default,
    Shift,
    Ctrl,
    Alt,
    CtrlShift,
    AltShift,
    CtrlAlt,
    CtrlAltShift,
}

impl SetTag {
    /// Tags every catalog must define.
    pub const REQUIRED: [SetTag; 7] = [
        SetTag::Default,
        SetTag::Shift,
        SetTag::Ctrl,
        SetTag::Alt,
        SetTag::CtrlShift,
        SetTag::AltShift,
        SetTag::CtrlAlt,
    ];

    /// Table lookup from held modifiers to the set bound to them.
    pub fn for_combo(combo: ModifierCombo) -> SetTag {
        match (combo.shift(), combo.ctrl(), combo.alt()) {
            (false, false, false) => SetTag::Default,
            (true, false, false) => SetTag::Shift,
            (false, true, false) => SetTag::Ctrl,
            (false, false, true) => SetTag::Alt,
            (true, true, false) => SetTag::CtrlShift,
            (true, false, true) => SetTag::AltShift,
            (false, true, true) => SetTag::CtrlAlt,
            (true, true, true) => SetTag::CtrlAltShift,
        }
    }

    /// Key used for this set in the `[sets]` config table.
    pub fn config_key(self) -> &'static str {
        match self {
            SetTag::Default => "default",
            SetTag::Shift => "shift",
            SetTag::Ctrl => "ctrl",
            SetTag::Alt => "alt",
            SetTag::CtrlShift => "ctrl_shift",
            SetTag::AltShift => "alt_shift",
            SetTag::CtrlAlt => "ctrl_alt",
            SetTag::CtrlAltShift => "ctrl_alt_shift",
        }
    }
}

impl fmt::Display for SetTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

const BUILTIN_DEFAULT: [&str; 9] = ["👾", "🍕", "🔥", "😢", "😄", "⭐", "❤️", "👍", "🐙"];
const BUILTIN_SHIFT: [&str; 9] = ["🚀", "🌈", "🎉", "😎", "🌸", "🐶", "🐱", "🍔", "☕"];
const BUILTIN_CTRL: [&str; 9] = ["🦊", "🐻", "🐯", "🐺", "🐑", "🐗", "🦄", "🦉", "🦌"];
const BUILTIN_ALT: [&str; 9] = ["🚗", "🚲", "🚁", "🐍", "✈️", "🚀", "🚂", "🚢", "🚤"];
const BUILTIN_CTRL_SHIFT: [&str; 9] = ["🎮", "🕹️", "👾", "🎲", "🎯", "🎳", "🎰", "🃏", "🕶️"];
const BUILTIN_ALT_SHIFT: [&str; 9] = ["🎶", "🎵", "🎷", "🎸", "🎤", "🎹", "🥁", "🎺", "🎻"];
const BUILTIN_CTRL_ALT: [&str; 9] = ["🍉", "🍇", "🍓", "🍍", "🍊", "🍋", "🥭", "🍎", "🍏"];

/// Builtin glyphs for a tag, if one ships with the app.
pub fn builtin_glyphs(tag: SetTag) -> Option<&'static [&'static str]> {
    match tag {
        SetTag::Default => Some(&BUILTIN_DEFAULT),
        SetTag::Shift => Some(&BUILTIN_SHIFT),
        SetTag::Ctrl => Some(&BUILTIN_CTRL),
        SetTag::Alt => Some(&BUILTIN_ALT),
        SetTag::CtrlShift => Some(&BUILTIN_CTRL_SHIFT),
        SetTag::AltShift => Some(&BUILTIN_ALT_SHIFT),
        SetTag::CtrlAlt => Some(&BUILTIN_CTRL_ALT),
        SetTag::CtrlAltShift => None,
    }
}

/// An ordered, fixed-size list of glyphs bound to one modifier combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiSet {
    tag: SetTag,
    glyphs: Vec<String>,
}

impl EmojiSet {
    pub fn new(tag: SetTag, glyphs: Vec<String>) -> Self {
        Self { tag, glyphs }
    }

    pub fn tag(&self) -> SetTag {
        self.tag
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.glyphs.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// The statically configured emoji sets.
///
/// Always holds the seven required sets, all of the same length; the
/// Ctrl+Alt+Shift set is optional.
#[derive(Debug, Clone)]
pub struct EmojiCatalog {
    sets: BTreeMap<SetTag, EmojiSet>,
    slot_count: usize,
}

impl EmojiCatalog {
    /// Catalog made only of the builtin sets.
    pub fn builtin() -> Self {
        let sets = SetTag::REQUIRED
            .iter()
            .filter_map(|tag| builtin_glyphs(*tag).map(|g| (*tag, g)))
            .map(|(tag, glyphs)| {
                let glyphs = glyphs.iter().map(|g| g.to_string()).collect();
                (tag, EmojiSet::new(tag, glyphs))
            })
            .collect();

        Self {
            sets,
            slot_count: BUILTIN_DEFAULT.len(),
        }
    }

    /// Build a catalog from config overrides on top of the builtin sets.
    pub fn from_config(config: &SetsConfig) -> EmomeResult<Self> {
        let mut sets = Vec::new();
        for tag in SetTag::REQUIRED {
            let glyphs = match config.get(tag) {
                Some(glyphs) => glyphs.to_vec(),
                None => builtin_glyphs(tag)
                    .map(|g| g.iter().map(|s| s.to_string()).collect())
                    .unwrap_or_default(),
            };
            sets.push(EmojiSet::new(tag, glyphs));
        }
        if let Some(glyphs) = config.get(SetTag::CtrlAltShift) {
            sets.push(EmojiSet::new(SetTag::CtrlAltShift, glyphs.to_vec()));
        }
        Self::from_sets(sets)
    }

    /// Validate and assemble a catalog from explicit sets.
    pub fn from_sets(sets: Vec<EmojiSet>) -> EmomeResult<Self> {
        let mut by_tag = BTreeMap::new();
        for set in sets {
            if set.is_empty() {
                return Err(EmomeError::Config(format!("emoji set '{}' is empty", set.tag)));
            }
            if let Some(i) = set.glyphs.iter().position(|g| g.trim().is_empty()) {
                return Err(EmomeError::Config(format!(
                    "emoji set '{}' has a blank glyph at position {}",
                    set.tag, i
                )));
            }
            if by_tag.insert(set.tag, set).is_some() {
                return Err(EmomeError::Config("duplicate emoji set".to_string()));
            }
        }

        for tag in SetTag::REQUIRED {
            if !by_tag.contains_key(&tag) {
                return Err(EmomeError::Config(format!("emoji set '{}' is missing", tag)));
            }
        }

        let slot_count = by_tag
            .get(&SetTag::Default)
            .map(EmojiSet::len)
            .unwrap_or_default();
        if let Some(bad) = by_tag.values().find(|s| s.len() != slot_count) {
            return Err(EmomeError::Config(format!(
                "emoji set '{}' has {} glyphs, expected {} like the default set",
                bad.tag,
                bad.len(),
                slot_count
            )));
        }

        Ok(Self {
            sets: by_tag,
            slot_count,
        })
    }

    /// Number of glyphs in every set, which is the number of display slots.
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    pub fn get(&self, tag: SetTag) -> Option<&EmojiSet> {
        self.sets.get(&tag)
    }

    pub fn default_set(&self) -> &EmojiSet {
        // from_sets guarantees the default set exists
        &self.sets[&SetTag::Default]
    }

    /// Resolve held modifiers to a configured tag. Combinations without a
    /// configured set fall back to the default set.
    pub fn resolve(&self, combo: ModifierCombo) -> SetTag {
        let tag = SetTag::for_combo(combo);
        if self.sets.contains_key(&tag) {
            tag
        } else {
            SetTag::Default
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmojiSet> {
        self.sets.values()
    }
}

impl Default for EmojiCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
