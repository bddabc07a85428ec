//! iced-based UI for Emome.
//!
//! This module provides the cross-platform frontend using the iced framework.

#[cfg(feature = "iced-ui")]
pub mod app;
#[cfg(feature = "iced-ui")]
pub mod clipboard;
#[cfg(feature = "iced-ui")]
pub mod style;
#[cfg(feature = "iced-ui")]
pub mod subscriptions;
#[cfg(feature = "iced-ui")]
pub mod theme;

#[cfg(feature = "iced-ui")]
pub use app::EmomeApp;
