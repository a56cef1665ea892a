//! Image file probing and decoding

use crate::types::{ConvertError, Result};
use image::{DynamicImage, ImageReader};
use std::path::{Path, PathBuf};

/// File extensions offered by file pickers and picked up from directories
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff", "gif"];

/// Check whether a path has one of the supported image extensions
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Decode an image and return its pixel dimensions.
///
/// The whole image is decoded so truncated or corrupt files are caught here
/// rather than halfway through a conversion.
pub fn verify_image(path: impl AsRef<Path>) -> Result<(u32, u32)> {
    let image = load_image(path)?;
    Ok((image.width(), image.height()))
}

/// Fully decode an image file.
pub fn load_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    let invalid = |reason: String| ConvertError::InvalidImage {
        path: path.to_path_buf(),
        reason,
    };

    let reader = ImageReader::open(path)
        .map_err(|e| invalid(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| invalid(e.to_string()))?;

    if reader.format().is_none() {
        return Err(invalid("unrecognized image format".to_string()));
    }

    let image = reader.decode().map_err(|e| invalid(e.to_string()))?;

    if image.width() == 0 || image.height() == 0 {
        return Err(ConvertError::DegenerateLayout(format!(
            "{} has zero size ({}x{})",
            path.display(),
            image.width(),
            image.height()
        )));
    }

    Ok(image)
}

/// Expand directories into the supported image files they contain.
///
/// Files are passed through untouched (they are validated later). Directory
/// entries are sorted by file name; subdirectories are not descended into.
pub fn expand_image_paths(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let mut entries: Vec<PathBuf> = std::fs::read_dir(input)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|path| path.is_file() && has_supported_extension(path))
                .collect();
            entries.sort();
            log::debug!(
                "Expanded {} into {} image(s)",
                input.display(),
                entries.len()
            );
            paths.extend(entries);
        } else {
            paths.push(input.clone());
        }
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        assert!(has_supported_extension(Path::new("photo.JPG")));
        assert!(has_supported_extension(Path::new("scan.tiff")));
        assert!(has_supported_extension(Path::new("/tmp/a.b/c.png")));
        assert!(!has_supported_extension(Path::new("notes.txt")));
        assert!(!has_supported_extension(Path::new("no_extension")));
    }

    #[test]
    fn test_missing_file_is_invalid_image() {
        let result = verify_image("/definitely/not/here.png");
        assert!(matches!(result, Err(ConvertError::InvalidImage { .. })));
    }
}
