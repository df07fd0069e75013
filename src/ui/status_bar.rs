use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::path::Path;

use crate::utils;

/// Render the bottom status bar
///
/// Shows the open folder, cursor position, review progress, and the file
/// under the cursor with its size.
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    folder: Option<&Path>,
    position: Option<(usize, usize)>,
    reviewed: (usize, usize),
    file_info: Option<(String, u64)>,
) {
    let status_line = if let Some(folder) = folder {
        let mut parts = vec![format!("Folder: {}", folder.display())];

        match position {
            Some((current, total)) => parts.push(format!("Image: {}/{}", current, total)),
            None => parts.push("Image: -".to_string()),
        }

        let (reviewed_count, total) = reviewed;
        parts.push(format!("Reviewed: {}/{}", reviewed_count, total));

        if let Some((name, size)) = file_info {
            parts.push(format!("File: {} ({})", name, utils::format_bytes(size)));
        }

        parts.join(" │ ")
    } else {
        "No folder selected".to_string()
    };

    // Color the labels (before colons) in each segment
    let status_spans: Vec<Span> = {
        let mut spans = vec![];
        for (idx, part) in status_line.split(" │ ").enumerate() {
            if idx > 0 {
                spans.push(Span::raw(" │ "));
            }

            if let Some(colon_pos) = part.find(':') {
                // Split on first colon to separate label from value
                let label = part[..=colon_pos].to_string();
                let value = part[colon_pos + 1..].to_string();
                spans.push(Span::styled(label, Style::default().fg(Color::Yellow)));
                spans.push(Span::raw(value));
            } else {
                spans.push(Span::raw(part.to_string()));
            }
        }
        spans
    };

    let status_bar = Paragraph::new(Line::from(status_spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}
