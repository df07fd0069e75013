use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs, io,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

/// Terminal image triage
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Folder of images to review at startup
    folder: Option<PathBuf>,

    /// Enable debug logging to the temp-dir log file
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

mod app;
mod handlers;
mod ui;
mod utils;

use sortui::actions;
use sortui::checklist::ChecklistStore;
use sortui::config::Config;
use sortui::logic::{self, category::CategoryBinding};
use sortui::model::{self, Model};
use sortui::scanner;

fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

#[derive(Clone, Debug)]
pub struct ImageMetadata {
    pub dimensions: Option<(u32, u32)>,
    pub format: Option<String>,
    pub file_size: u64,
}

pub enum ImagePreviewState {
    Ready {
        protocol: ratatui_image::protocol::StatefulProtocol,
        metadata: ImageMetadata,
    },
    Failed {
        metadata: ImageMetadata,
    },
}

impl std::fmt::Debug for ImagePreviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImagePreviewState::Ready { metadata, .. } => f
                .debug_struct("ImagePreviewState::Ready")
                .field("metadata", metadata)
                .field("protocol", &"<StatefulProtocol>")
                .finish(),
            ImagePreviewState::Failed { metadata } => f
                .debug_struct("ImagePreviewState::Failed")
                .field("metadata", metadata)
                .finish(),
        }
    }
}

pub struct App {
    pub model: Model,

    checklist: ChecklistStore,
    categories: Vec<CategoryBinding>,
    sorted_root: PathBuf,
    image_picker: Option<ratatui_image::picker::Picker>,

    /// Viewer state for the image under the cursor (path, render state)
    current_preview: Option<(PathBuf, ImagePreviewState)>,
}

impl App {
    fn new(config: Config) -> Result<Self> {
        let checklist_path = match &config.checklist_path {
            Some(path) => PathBuf::from(path),
            None => ChecklistStore::default_path(),
        };
        let checklist = ChecklistStore::new(checklist_path);
        log_debug(&format!("Checklist file: {}", checklist.path().display()));

        let sorted_root = PathBuf::from(&config.sorted_root);
        let categories = logic::category::build_bindings(scanner::scan_categories(&sorted_root));
        log_debug(&format!(
            "Found {} categories under {}",
            categories.len(),
            sorted_root.display()
        ));

        // Initialize image rendering protocol picker
        let image_picker = if config.image_preview_enabled {
            // Get picker with terminal dimensions
            let mut picker = match ratatui_image::picker::Picker::from_query_stdio() {
                Ok(p) => p,
                Err(e) => {
                    log_debug(&format!("Image rendering: Failed to detect terminal: {}", e));
                    ratatui_image::picker::Picker::from_fontsize((8, 16)) // Fallback font size
                }
            };

            let font_size = picker.font_size();
            log_debug(&format!("Image font size: {}x{}", font_size.0, font_size.1));

            // Apply protocol from config
            match config.image_protocol.to_lowercase().as_str() {
                "auto" => {
                    // Protocol already auto-detected by from_query_stdio()
                    log_debug("Image rendering: Auto-detected protocol");
                }
                "iterm2" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Iterm2);
                    log_debug("Image rendering: Using iTerm2 protocol");
                }
                "kitty" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Kitty);
                    log_debug("Image rendering: Using Kitty protocol");
                }
                "sixel" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Sixel);
                    log_debug("Image rendering: Using Sixel protocol");
                }
                "halfblocks" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Halfblocks);
                    log_debug("Image rendering: Using Halfblocks protocol");
                }
                unknown => {
                    // Protocol already auto-detected, just log the warning
                    log_debug(&format!(
                        "Image rendering: Unknown protocol '{}', using auto-detect",
                        unknown
                    ));
                }
            }

            Some(picker)
        } else {
            log_debug("Image rendering disabled in config");
            None
        };

        let model = Model::new(config.vim_mode);

        Ok(App {
            model,
            checklist,
            categories,
            sorted_root,
            image_picker,
            current_preview: None,
        })
    }

    /// Handle keyboard input
    /// Delegated to handlers::keyboard module
    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        handlers::handle_key(self, key)
    }
}

/// Determine the config file path with fallback logic
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, it must exist
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/sortui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("sortui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    // No config anywhere, run on defaults
    Ok(None)
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    if args.debug {
        log_debug("Debug mode enabled");
    }

    // Load configuration; a missing file means defaults, a broken one is an error
    let mut config: Config = match get_config_path(args.config)? {
        Some(config_path) => {
            if args.debug {
                log_debug(&format!("Loading config from: {:?}", config_path));
            }
            let config_str = fs::read_to_string(&config_path)?;
            serde_yaml::from_str(&config_str)?
        }
        None => Config::default(),
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }

    // Initialize app
    let mut app = App::new(config)?;
    if let Some(folder) = &args.folder {
        app.select_folder(folder);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Clear terminal to remove sixel graphics if needed (brief flash but necessary)
        if app.model.ui.sixel_cleanup_frames > 0 {
            terminal.clear()?;
            app.model.ui.sixel_cleanup_frames = 0;
        }

        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast after 1.5 seconds
        if app.model.should_dismiss_toast() {
            app.model.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Poll timeout keeps the toast timer ticking without burning CPU
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key)?;
            }
        }
    }

    Ok(())
}
