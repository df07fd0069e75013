use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use ratatui_image::StatefulImage;

use crate::utils::format_bytes;
use crate::{App, ImageMetadata, ImagePreviewState};

/// Render the image viewer pane
///
/// Shows the decoded picture when one is loaded, otherwise a placeholder:
/// a welcome screen before any folder is open, an empty-folder notice, a
/// red marker for deleted entries, or the failure reason for broken files.
pub fn render_viewer(f: &mut Frame, area: Rect, app: &mut App) {
    let nav = &app.model.navigation;

    let title = match nav.current() {
        Some(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            format!(" {} ({}/{}) ", name, nav.cursor + 1, nav.len())
        }
        None => " Viewer ".to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match &mut app.current_preview {
        Some((_, ImagePreviewState::Ready { protocol, metadata })) => {
            // Reserve the bottom row of the pane for the metadata line
            let image_area = Rect {
                height: inner.height.saturating_sub(1),
                ..inner
            };
            f.render_stateful_widget(StatefulImage::default(), image_area, protocol);

            let info_area = Rect {
                y: inner.y + image_area.height,
                height: inner.height - image_area.height,
                ..inner
            };
            let info = Paragraph::new(Line::from(Span::styled(
                format_metadata(metadata),
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(Alignment::Center);
            f.render_widget(info, info_area);
        }
        Some((path, ImagePreviewState::Failed { metadata })) => {
            let lines = if app.model.navigation.is_deleted(path) {
                vec![
                    Line::from(Span::styled(
                        "Deleted Image",
                        Style::default()
                            .fg(Color::Red)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        "Removed from disk",
                        Style::default().fg(Color::DarkGray),
                    )),
                ]
            } else {
                let reason = metadata
                    .format
                    .clone()
                    .unwrap_or_else(|| "File not found".to_string());
                let mut lines = vec![
                    Line::from(Span::styled(
                        "Cannot preview",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::raw(reason)),
                ];
                if metadata.file_size > 0 {
                    lines.push(Line::from(Span::styled(
                        format_bytes(metadata.file_size),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                lines
            };
            render_centered_lines(f, inner, lines);
        }
        None => {
            let lines = if app.model.navigation.folder.is_none() {
                vec![
                    Line::from(Span::styled(
                        "sortui",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::raw("Press s to select a folder of images")),
                ]
            } else {
                vec![Line::from(Span::styled(
                    "No supported images in this folder",
                    Style::default().fg(Color::DarkGray),
                ))]
            };
            render_centered_lines(f, inner, lines);
        }
    }
}

/// One-line summary shown under the picture, e.g. "1920x1080 │ RGB 8-bit │ 2.4 MB"
fn format_metadata(metadata: &ImageMetadata) -> String {
    let mut parts = Vec::new();
    if let Some((w, h)) = metadata.dimensions {
        parts.push(format!("{}x{}", w, h));
    }
    if let Some(format) = &metadata.format {
        parts.push(format.clone());
    }
    parts.push(format_bytes(metadata.file_size));
    parts.join(" │ ")
}

/// Render a short block of text vertically and horizontally centered
fn render_centered_lines(f: &mut Frame, area: Rect, lines: Vec<Line>) {
    let text_height = lines.len() as u16;
    let vertical_pad = area.height.saturating_sub(text_height) / 2;
    let text_area = Rect {
        x: area.x,
        y: area.y + vertical_pad,
        width: area.width,
        height: text_height.min(area.height),
    };
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, text_area);
}
