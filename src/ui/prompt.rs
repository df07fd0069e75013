//! Folder Prompt UI
//!
//! Renders the folder selection input box with the typed path and a blinking cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the folder path input box above the legend
///
/// # Arguments
/// - `f`: Ratatui frame
/// - `area`: Rectangular area to render in
/// - `input`: Path typed so far
pub fn render_folder_prompt(f: &mut Frame, area: Rect, input: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Select folder - Enter to open, Esc to cancel ")
        .style(Style::default().fg(Color::Cyan));

    // Build input line with cursor
    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = Line::from(vec![
        Span::raw("Path: "),
        Span::raw(input.to_string()),
        Span::styled("█", cursor_style), // Blinking cursor
    ]);

    let paragraph = Paragraph::new(vec![input_line])
        .block(block)
        .style(Style::default());

    f.render_widget(paragraph, area);
}
