//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - category: Category binding construction and lookup
//! - file: Image file type detection
//! - navigation: Cursor wrapping and resume calculations
//! - ui: UI state transitions and timing

pub mod category;
pub mod file;
pub mod navigation;
pub mod ui;
