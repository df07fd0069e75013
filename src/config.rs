use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Root directory the category subdirectories live under
    #[serde(default = "default_sorted_root")]
    pub sorted_root: String,
    /// Overrides the checkpoint file location (default: next to the executable)
    #[serde(default)]
    pub checklist_path: Option<String>,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_image_preview_enabled")]
    pub image_preview_enabled: bool,
    /// Terminal graphics protocol: "auto", "sixel", "kitty", "iterm2", or "halfblocks"
    #[serde(default = "default_image_protocol")]
    pub image_protocol: String,
}

fn default_sorted_root() -> String {
    "sortedimg".to_string()
}

fn default_image_preview_enabled() -> bool {
    true
}

fn default_image_protocol() -> String {
    "auto".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sorted_root: default_sorted_root(),
            checklist_path: None,
            vim_mode: false,
            image_preview_enabled: default_image_preview_enabled(),
            image_protocol: default_image_protocol(),
        }
    }
}
