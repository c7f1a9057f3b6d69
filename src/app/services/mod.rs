//! Services layer - business operations and utilities.
//!
//! - Daily journal file naming and loading
//! - The built-in default theme

pub mod default_theme;
pub mod journal_files;
