use crate::constants::PREVIEW_MAX_SIDE;
use crate::image_io::load_image;
use crate::selection::display_name;
use crate::types::*;
use std::path::{Path, PathBuf};

/// A downscaled copy of an image for on-screen preview.
///
/// The preview owns its pixels; whoever displays it decides how long they
/// live.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePreview {
    pub path: PathBuf,
    /// Thumbnail width in pixels
    pub width: u32,
    /// Thumbnail height in pixels
    pub height: u32,
    /// Size of the source image
    pub original_width: u32,
    pub original_height: u32,
    /// Unpremultiplied RGBA8 pixels, row-major
    pub rgba: Vec<u8>,
}

impl ImagePreview {
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }

    /// Caption shown under the preview
    pub fn info_text(&self) -> String {
        format!(
            "{}\nSize: {}x{} px",
            self.file_name(),
            self.original_width,
            self.original_height
        )
    }
}

/// Decode an image and shrink it to fit a `max_side` square.
///
/// Images already inside the square are kept at their natural size.
pub async fn generate_preview(path: impl AsRef<Path>, max_side: u32) -> Result<ImagePreview> {
    let path = path.as_ref().to_owned();
    tokio::task::spawn_blocking(move || generate_preview_sync(&path, max_side)).await?
}

/// Preview with the default size limit
pub async fn generate_default_preview(path: impl AsRef<Path>) -> Result<ImagePreview> {
    generate_preview(path, PREVIEW_MAX_SIDE).await
}

fn generate_preview_sync(path: &Path, max_side: u32) -> Result<ImagePreview> {
    if max_side == 0 {
        return Err(ConvertError::Config(
            "Preview size must be at least 1 pixel".to_string(),
        ));
    }

    let image = load_image(path)?;
    let (original_width, original_height) = (image.width(), image.height());

    let thumbnail = if original_width > max_side || original_height > max_side {
        image.thumbnail(max_side, max_side)
    } else {
        image
    };

    let rgba = thumbnail.to_rgba8();
    Ok(ImagePreview {
        path: path.to_path_buf(),
        width: rgba.width(),
        height: rgba.height(),
        original_width,
        original_height,
        rgba: rgba.into_raw(),
    })
}
