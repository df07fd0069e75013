// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (panes, splits, areas)
// - render: Main orchestration function that coordinates all rendering
// - viewer: Renders the image preview pane (picture, metadata, placeholders)
// - file_list: Renders the image list panel with review/delete markers
// - categories: Renders the sort-target category panel
// - legend: Renders hotkey legend
// - prompt: Renders the folder selection input box
// - status_bar: Renders bottom status bar with progress and file info
// - toast: Renders toast notifications (brief pop-up messages)

pub mod categories;
pub mod file_list;
pub mod layout;
pub mod legend;
pub mod prompt;
pub mod render;
pub mod status_bar;
pub mod toast;
pub mod viewer;

// Re-export main render function for convenience
pub use render::render;
