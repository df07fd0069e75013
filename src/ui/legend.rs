use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    // Navigation keys (different for vim mode)
    if vim_mode {
        hotkey_spans.extend(vec![
            Span::styled("h/l", Style::default().fg(Color::Yellow)),
            Span::raw(":Prev/Next  "),
            Span::styled("j/k", Style::default().fg(Color::Yellow)),
            Span::raw(":Move  "),
            Span::styled("gg/G", Style::default().fg(Color::Yellow)),
            Span::raw(":First/Last  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            Span::styled("←/→", Style::default().fg(Color::Yellow)),
            Span::raw(":Prev/Next  "),
            Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
            Span::raw(":Move  "),
            Span::styled("Home/End", Style::default().fg(Color::Yellow)),
            Span::raw(":First/Last  "),
        ]);
    }

    hotkey_spans.extend(vec![
        Span::styled("PgUp/PgDn", Style::default().fg(Color::Yellow)),
        Span::raw(":Jump 10  "),
        Span::styled("0-9", Style::default().fg(Color::Yellow)),
        Span::raw(":Sort into category  "),
        Span::styled("d/Del", Style::default().fg(Color::Yellow)),
        Span::raw(":Delete  "),
        Span::styled("s", Style::default().fg(Color::Yellow)),
        Span::raw(":Select Folder  "),
    ]);

    // Quit - always available
    hotkey_spans.extend(vec![
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(vim_mode: bool) -> Paragraph<'static> {
    let hotkey_spans = build_hotkey_spans(vim_mode);
    let hotkey_line = Line::from(hotkey_spans);

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend (dynamically changes based on vim mode)
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool) {
    let legend = build_legend_paragraph(vim_mode);
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, vim_mode: bool) -> u16 {
    // Build paragraph WITHOUT block borders for accurate line counting
    // (line_count() doesn't account for borders correctly when block is attached)
    let hotkey_spans = build_hotkey_spans(vim_mode);
    let hotkey_line = Line::from(hotkey_spans);

    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    // Calculate available width (subtract left + right borders)
    let available_width = terminal_width.saturating_sub(2);

    // Get exact line count for wrapped text
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to convert spans to plain text for assertions
    fn spans_to_text(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn test_legend_shows_vim_keys_in_vim_mode() {
        let spans = build_hotkey_spans(true);
        let text = spans_to_text(&spans);

        assert!(
            text.contains("h/l") && text.contains("gg/G"),
            "Vim legend should list hjkl navigation, got: {}",
            text
        );
        assert!(
            !text.contains("←/→"),
            "Vim legend should not list arrow keys, got: {}",
            text
        );
    }

    #[test]
    fn test_legend_shows_arrow_keys_by_default() {
        let spans = build_hotkey_spans(false);
        let text = spans_to_text(&spans);

        assert!(
            text.contains("←/→") && text.contains("Home/End"),
            "Default legend should list arrow navigation, got: {}",
            text
        );
        assert!(
            !text.contains("gg/G"),
            "Default legend should not list vim keys, got: {}",
            text
        );
    }

    #[test]
    fn test_legend_always_shows_core_actions() {
        for vim_mode in [false, true] {
            let text = spans_to_text(&build_hotkey_spans(vim_mode));
            assert!(text.contains("0-9"), "Legend should list sort keys");
            assert!(text.contains("d/Del"), "Legend should list delete key");
            assert!(text.contains("s"), "Legend should list folder select key");
            assert!(text.contains("q:Quit"), "Legend should list quit key");
        }
    }

    #[test]
    fn test_legend_height_grows_on_narrow_terminals() {
        let wide = calculate_legend_height(200, false);
        let narrow = calculate_legend_height(40, false);

        assert_eq!(wide, 3, "Wide terminal should fit legend on one line");
        assert!(
            narrow > wide,
            "Narrow terminal should wrap the legend onto more lines"
        );
    }
}
