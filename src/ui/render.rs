use crate::{App, ImagePreviewState};
use ratatui::Frame;

use super::{categories, file_list, layout, legend, prompt, status_bar, toast, viewer};

/// Main render function - orchestrates all UI rendering
/// This replaces the large terminal.draw() closure in main.rs
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    // Calculate layout
    let layout_info =
        layout::calculate_layout(size, app.model.ui.vim_mode, app.model.ui.prompt_mode);

    // Render image viewer (left pane)
    viewer::render_viewer(f, layout_info.viewer_area, app);

    // Render category panel
    categories::render_categories(f, layout_info.categories_area, &app.categories);

    // Create temporary ListState for rendering the image list
    let mut temp_state = ratatui::widgets::ListState::default();
    if !app.model.navigation.images.is_empty() {
        temp_state.select(Some(app.model.navigation.cursor));
    }
    file_list::render_file_list(
        f,
        layout_info.list_area,
        &app.model.navigation.images,
        &app.model.navigation.reviewed,
        &app.model.navigation.deleted,
        &mut temp_state,
    );

    // Render folder prompt when open
    if let Some(prompt_area) = layout_info.prompt_area {
        prompt::render_folder_prompt(f, prompt_area, &app.model.ui.prompt_input);
    }

    // Render hotkey legend
    legend::render_legend(f, layout_info.legend_area, app.model.ui.vim_mode);

    // Render status bar
    let nav = &app.model.navigation;
    let position = if nav.is_empty() {
        None
    } else {
        Some((nav.cursor + 1, nav.len()))
    };
    let file_info = nav.current().map(|path| {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let size = match &app.current_preview {
            Some((preview_path, ImagePreviewState::Ready { metadata, .. }))
                if preview_path == path =>
            {
                metadata.file_size
            }
            Some((preview_path, ImagePreviewState::Failed { metadata }))
                if preview_path == path =>
            {
                metadata.file_size
            }
            _ => 0,
        };
        (name, size)
    });
    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        nav.folder.as_deref(),
        position,
        (nav.reviewed_count(), nav.len()),
        file_info,
    );

    // Render toast notification if active
    if let Some((message, _timestamp)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
