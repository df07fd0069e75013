use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Image viewer pane area (left side)
    pub viewer_area: Rect,
    /// Category panel area (right side, top)
    pub categories_area: Rect,
    /// Image list panel area (right side, bottom)
    pub list_area: Rect,
    /// Folder prompt input area (if visible)
    pub prompt_area: Option<Rect>,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(
    terminal_size: Rect,
    vim_mode: bool,
    prompt_visible: bool,
) -> LayoutInfo {
    // Calculate dynamic legend height based on terminal width and content
    let legend_height = super::legend::calculate_legend_height(terminal_size.width, vim_mode);

    let prompt_height = if prompt_visible { 3 } else { 0 };

    // Create main layout: content area + prompt + legend + status bar (bottom)
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),                // Content area (viewer + side panels)
            Constraint::Length(prompt_height), // Folder prompt (3 lines when visible, 0 when hidden)
            Constraint::Length(legend_height), // Legend area (dynamic height, exact fit for wrapped content)
            Constraint::Length(3),             // Status bar (3 lines: top border, text, bottom border)
        ])
        .split(terminal_size);

    let content_area = main_chunks[0];
    let prompt_area = if prompt_visible {
        Some(main_chunks[1])
    } else {
        None
    };
    let legend_area = main_chunks[2];
    let status_area = main_chunks[3];

    // Split content horizontally: viewer gets the bulk, side panels the rest
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
        .split(content_area);

    let viewer_area = content_chunks[0];

    // Split the side column: categories (top) + image list (bottom)
    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(content_chunks[1]);

    LayoutInfo {
        viewer_area,
        categories_area: side_chunks[0],
        list_area: side_chunks[1],
        prompt_area,
        legend_area,
        status_area,
    }
}
