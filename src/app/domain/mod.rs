//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Document, the dirty-tracked page buffer
//! - Word counting
//! - Theme state and size/color resolution
//! - Persisted configuration and the settings form
//! - Message types for the event system

pub mod document;
pub mod messages;
pub mod settings;
pub mod theme;
pub mod word_count;

pub use document::{save_all, Document};
pub use messages::Message;
pub use settings::{AppConfig, Dimensions, SettingsForm};
pub use theme::{DefaultTheme, Rgba, ThemeResolver, ThemeState, ThemeVariant};
pub use word_count::word_count;
