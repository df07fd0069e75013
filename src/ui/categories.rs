use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::logic::category::CategoryBinding;

/// Render the sort-target category panel
///
/// Labels carry their digit shortcut, e.g. "Cats (0)". When no category
/// folders exist yet, a short hint explains how to create them.
pub fn render_categories(f: &mut Frame, area: Rect, bindings: &[CategoryBinding]) {
    let block = Block::default()
        .title("Categories")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    if bindings.is_empty() {
        let hint = List::new(vec![ListItem::new(Line::from(Span::styled(
            "No categories yet - create subfolders in the sorted root",
            Style::default().fg(Color::DarkGray),
        )))])
        .block(block);
        f.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = bindings
        .iter()
        .map(|binding| {
            let style = if binding.shortcut.is_some() {
                Style::default().fg(Color::Yellow)
            } else {
                // Categories past the digit keys are listed but not triggerable
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Line::from(Span::styled(binding.label.clone(), style)))
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}
