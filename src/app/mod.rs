//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, ThemeResolver, AppConfig, Message)
//! - `services/` - Daily page naming and the built-in default theme
//! - `infrastructure/` - Error types and platform detection
//! - `state.rs` - Main application coordinator

pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::{
    AppConfig, Document, Message, Rgba, SettingsForm, ThemeResolver, ThemeState, ThemeVariant,
    word_count,
};
pub use infrastructure::error::{ConfigError, DetailedError, SaveError};
pub use services::default_theme::BuiltinTheme;
pub use services::journal_files::JournalKind;
