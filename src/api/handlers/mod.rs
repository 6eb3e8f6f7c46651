//! API request handlers.

/// Embedded UI asset handler.
pub mod assets;
/// Health and content handlers.
pub mod health;
