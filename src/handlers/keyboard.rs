//! Keyboard Input Handler
//!
//! Handles all keyboard input and user interactions.
//! The folder prompt captures keystrokes while open; everything else
//! goes through a single dispatch table over global keys.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::model::VimCommandState;
use crate::App;

/// Handle keyboard input
///
/// Processes all keyboard events and dispatches to appropriate actions.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // The folder prompt captures every keystroke while open
    if app.model.ui.prompt_mode {
        match key.code {
            KeyCode::Enter => app.submit_folder_prompt(),
            KeyCode::Esc => app.cancel_folder_prompt(),
            KeyCode::Backspace => {
                app.model.ui.prompt_input.pop();
            }
            KeyCode::Char(c) => {
                app.model.ui.prompt_input.push(c);
            }
            _ => {
                // Ignore other keys while the prompt is showing
            }
        }
        return Ok(());
    }

    // Consume the pending 'gg' state; only the 'g' arm re-arms it
    let waiting_for_second_g =
        app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG;
    app.model.ui.vim_command_state = VimCommandState::None;

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Char('s') => app.open_folder_prompt(),

        // Review movement: forward marks the current image reviewed
        KeyCode::Right => app.show_next(),
        KeyCode::Left => app.show_previous(),
        KeyCode::Char('l') if app.model.ui.vim_mode => app.show_next(),
        KeyCode::Char('h') if app.model.ui.vim_mode => app.show_previous(),

        // List movement: reposition the cursor without marking anything
        KeyCode::Down => app.jump_by(1),
        KeyCode::Up => app.jump_by(-1),
        KeyCode::Char('j') if app.model.ui.vim_mode => app.jump_by(1),
        KeyCode::Char('k') if app.model.ui.vim_mode => app.jump_by(-1),
        KeyCode::PageDown => app.jump_by(10),
        KeyCode::PageUp => app.jump_by(-10),
        KeyCode::Home => app.jump_to(0),
        KeyCode::End => {
            let len = app.model.navigation.len();
            if len > 0 {
                app.jump_to(len - 1);
            }
        }
        KeyCode::Char('g') if app.model.ui.vim_mode => {
            if waiting_for_second_g {
                // gg - jump to first
                app.jump_to(0);
            } else {
                // First 'g' press
                app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
            }
        }
        KeyCode::Char('G') if app.model.ui.vim_mode => {
            let len = app.model.navigation.len();
            if len > 0 {
                app.jump_to(len - 1);
            }
        }

        // File operations
        KeyCode::Char('d') | KeyCode::Delete => app.delete_current(),
        KeyCode::Char(c) if c.is_ascii_digit() => app.copy_to_category(c),

        KeyCode::Esc => app.model.dismiss_toast(),
        _ => {}
    }

    Ok(())
}
