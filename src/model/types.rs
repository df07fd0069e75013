//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! fundamental domain concepts.

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}
