//! Sortui Library
//!
//! Exposes modules for testing

pub mod actions;
pub mod checklist;
pub mod config;
pub mod logic;
pub mod model;
pub mod scanner;
