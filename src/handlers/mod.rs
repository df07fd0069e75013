//! Event Handlers
//!
//! This module contains handlers for the one event source:
//! - keyboard: User keyboard input
//!
//! Handlers take &mut App and dispatch to App orchestration methods.

pub mod keyboard;

// Re-export for convenience
pub use keyboard::handle_key;
