//! UI state transition logic
//!
//! Pure functions for UI timing decisions.

/// How long a toast stays on screen, in milliseconds
pub const TOAST_DURATION_MS: u128 = 1500;

/// Decide whether a toast has been visible long enough to dismiss
///
/// # Examples
/// ```
/// use sortui::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast(0));
/// assert!(!should_dismiss_toast(1499));
/// assert!(should_dismiss_toast(1500));
/// assert!(should_dismiss_toast(60_000));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}
