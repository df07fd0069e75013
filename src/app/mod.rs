//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in the library's model module)
//! - Actions (file-touching operations in the library's actions module)
//! - Handlers (in src/handlers/)
//! - UI rendering (in src/ui/)
//!
//! Methods are kept as `impl App` but organized by functional domain
//! for better discoverability and maintainability.

pub(crate) mod file_ops;
pub(crate) mod navigation;
pub(crate) mod preview;
