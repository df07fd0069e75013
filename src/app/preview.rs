//! Image viewer methods
//!
//! Methods for loading the image under the cursor into a terminal
//! graphics protocol, with metadata for the status bar.

use crate::{log_debug, App, ImageMetadata, ImagePreviewState};
use std::path::Path;

impl App {
    /// Reload the viewer for the image under the cursor
    ///
    /// Called after every cursor movement. The decode is synchronous and
    /// finishes before the next frame is drawn.
    pub(crate) fn reload_preview(&mut self) {
        let was_ready = matches!(
            self.current_preview,
            Some((_, ImagePreviewState::Ready { .. }))
        );

        let Some(path) = self.model.current_image().cloned() else {
            if was_ready {
                self.model.ui.sixel_cleanup_frames = 1;
            }
            self.current_preview = None;
            return;
        };

        let state = self.load_image_state(&path);

        // Moving off a rendered image onto a placeholder leaves pixels behind
        if was_ready && matches!(state, ImagePreviewState::Failed { .. }) {
            self.model.ui.sixel_cleanup_frames = 1;
        }

        self.current_preview = Some((path, state));
    }

    fn load_image_state(&self, path: &Path) -> ImagePreviewState {
        let max_size_bytes = 20 * 1024 * 1024; // 20MB limit

        // A missing file is expected after a delete; the viewer shows a placeholder
        let fs_metadata = match std::fs::metadata(path) {
            Ok(m) => m,
            Err(_) => {
                return ImagePreviewState::Failed {
                    metadata: ImageMetadata {
                        dimensions: None,
                        format: None,
                        file_size: 0,
                    },
                };
            }
        };
        let file_size = fs_metadata.len();

        let Some(picker) = self.image_picker.as_ref() else {
            return ImagePreviewState::Failed {
                metadata: ImageMetadata {
                    dimensions: None,
                    format: Some("Image rendering disabled in config".to_string()),
                    file_size,
                },
            };
        };

        if file_size > max_size_bytes {
            return ImagePreviewState::Failed {
                metadata: ImageMetadata {
                    dimensions: None,
                    format: Some("Too large".to_string()),
                    file_size,
                },
            };
        }

        let img = match image::open(path) {
            Ok(img) => img,
            Err(e) => {
                return ImagePreviewState::Failed {
                    metadata: ImageMetadata {
                        dimensions: None,
                        format: Some(format!("Load error: {}", e)),
                        file_size,
                    },
                };
            }
        };

        // Extract metadata (original dimensions)
        let dimensions = (img.width(), img.height());
        let format = match img.color() {
            image::ColorType::L8 => "Grayscale 8-bit",
            image::ColorType::La8 => "Grayscale+Alpha 8-bit",
            image::ColorType::Rgb8 => "RGB 8-bit",
            image::ColorType::Rgba8 => "RGBA 8-bit",
            image::ColorType::L16 => "Grayscale 16-bit",
            image::ColorType::La16 => "Grayscale+Alpha 16-bit",
            image::ColorType::Rgb16 => "RGB 16-bit",
            image::ColorType::Rgba16 => "RGBA 16-bit",
            image::ColorType::Rgb32F => "RGB 32-bit float",
            image::ColorType::Rgba32F => "RGBA 32-bit float",
            _ => "Unknown",
        };

        // Pre-downscale large images with adaptive quality/performance balance
        let font_size = picker.font_size();

        // Estimate maximum reasonable size: ~200 cells × ~60 cells (typical large terminal)
        // Use 1.25x headroom for quality (balanced for performance)
        let max_reasonable_width = 200 * font_size.0 as u32 * 5 / 4;
        let max_reasonable_height = 60 * font_size.1 as u32 * 5 / 4;

        let processed_img =
            if img.width() > max_reasonable_width || img.height() > max_reasonable_height {
                let scale_factor = (img.width() as f32 / max_reasonable_width as f32)
                    .max(img.height() as f32 / max_reasonable_height as f32);

                // Adaptive filter selection based on downscale amount
                let filter = if scale_factor > 4.0 {
                    // Extreme downscale (>4x): Use Triangle for speed
                    image::imageops::FilterType::Triangle
                } else if scale_factor > 2.0 {
                    // Large downscale (2-4x): Use CatmullRom for balance
                    image::imageops::FilterType::CatmullRom
                } else {
                    // Moderate downscale (<2x): Use Lanczos3 for quality
                    image::imageops::FilterType::Lanczos3
                };

                log_debug(&format!(
                    "Downscaling {}x{} by {:.2}x with {:?}",
                    img.width(),
                    img.height(),
                    scale_factor,
                    filter
                ));
                img.resize(max_reasonable_width, max_reasonable_height, filter)
            } else {
                img
            };

        let protocol = picker.new_resize_protocol(processed_img);

        ImagePreviewState::Ready {
            protocol,
            metadata: ImageMetadata {
                dimensions: Some(dimensions),
                format: Some(format.to_string()),
                file_size,
            },
        }
    }
}
