use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use std::collections::HashSet;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

/// Truncate a file name to fit the pane, keeping the tail (extension stays visible)
fn truncate_name(name: &str, max_width: usize) -> String {
    if name.width() <= max_width {
        return name.to_string();
    }

    // Walk backwards until the tail plus ellipsis fits
    let mut tail_width = 0;
    let mut tail_start = name.len();
    for (idx, ch) in name.char_indices().rev() {
        let ch_width = ch.to_string().width();
        if tail_width + ch_width + 3 > max_width {
            break;
        }
        tail_width += ch_width;
        tail_start = idx;
    }

    format!("...{}", &name[tail_start..])
}

/// Render the image list panel with review and delete markers
pub fn render_file_list(
    f: &mut Frame,
    area: Rect,
    images: &[PathBuf],
    reviewed: &HashSet<PathBuf>,
    deleted: &HashSet<PathBuf>,
    list_state: &mut ListState,
) {
    // Names must fit inside borders, highlight symbol, and the review marker
    let name_width = (area.width as usize).saturating_sub(6);

    let items: Vec<ListItem> = images
        .iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let marker = if reviewed.contains(path) { "✓ " } else { "  " };

            let line = if deleted.contains(path) {
                // Deleted entries keep their slot but are struck through
                Line::from(Span::styled(
                    format!("{}{}", marker, truncate_name(&name, name_width)),
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::CROSSED_OUT),
                ))
            } else {
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Green)),
                    Span::raw(truncate_name(&name, name_width)),
                ])
            };

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title("Images")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, list_state);
}
