//! Error types for Emome
//!
//! Selection logic is total and never fails; everything here comes from
//! startup configuration or the OS-facing collaborators.

use thiserror::Error;

/// Errors that can occur in Emome
#[derive(Debug, Error)]
pub enum EmomeError {
    /// Invalid emoji sets, display layout or hotkey in the configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Clipboard operation errors
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Global hotkey registration errors
    #[error("Hotkey error: {0}")]
    Hotkey(String),

    /// Single-instance IPC errors
    #[error("IPC error: {0}")]
    Ipc(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("Config serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Result type alias for Emome operations
pub type EmomeResult<T> = Result<T, EmomeError>;
