//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Platform-specific detection
//! - Error types

pub mod error;
pub mod platform;
