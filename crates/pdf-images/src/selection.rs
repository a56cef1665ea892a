//! The ordered set of images picked for conversion

use crate::image_io::verify_image;
use crate::types::Result;
use std::path::{Path, PathBuf};

/// A selected image file.
///
/// Pixel dimensions are loaded lazily and cached once known.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRef {
    path: PathBuf,
    dimensions: Option<(u32, u32)>,
}

impl ImageRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            dimensions: None,
        }
    }

    pub fn with_dimensions(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            dimensions: Some((width, height)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base file name, used for display and progress reporting
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }

    /// Cached dimensions, if they have been loaded
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }

    /// Load (and cache) the pixel dimensions by decoding the file
    pub fn load_dimensions(&mut self) -> Result<(u32, u32)> {
        if let Some(dimensions) = self.dimensions {
            return Ok(dimensions);
        }
        let dimensions = verify_image(&self.path)?;
        self.dimensions = Some(dimensions);
        Ok(dimensions)
    }
}

/// A file that failed validation when it was added
#[derive(Debug, Clone, PartialEq)]
pub struct Rejected {
    pub path: PathBuf,
    pub reason: String,
}

impl Rejected {
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }
}

/// Result of adding files to a selection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddOutcome {
    /// Number of files appended to the selection
    pub added: usize,
    /// Files that were not valid images
    pub rejected: Vec<Rejected>,
}

/// Ordered list of selected images. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    images: Vec<ImageRef>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.images.iter()
    }

    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.images.get(index)
    }

    /// Append without validation
    pub fn push(&mut self, image: ImageRef) {
        self.images.push(image);
    }

    /// Validate each path by decoding it and append the valid ones in order.
    ///
    /// An invalid file is reported in the outcome and does not stop the
    /// remaining files from being added.
    pub fn add_files<I, P>(&mut self, paths: I) -> AddOutcome
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut outcome = AddOutcome::default();

        for path in paths {
            let path = path.into();
            match verify_image(&path) {
                Ok((width, height)) => {
                    self.images
                        .push(ImageRef::with_dimensions(path, width, height));
                    outcome.added += 1;
                }
                Err(e) => {
                    log::warn!("Skipping {}: not a valid image file ({})", display_name(&path), e);
                    outcome.rejected.push(Rejected {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        outcome
    }

    /// Remove the images at the given positions.
    ///
    /// Duplicate and out-of-range indices are ignored. Returns how many
    /// images were removed.
    pub fn remove_indices(&mut self, indices: &[usize]) -> usize {
        let mut sorted: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&idx| idx < self.images.len())
            .collect();
        sorted.sort_unstable();
        sorted.dedup();

        for &idx in sorted.iter().rev() {
            self.images.remove(idx);
        }

        sorted.len()
    }

    pub fn remove(&mut self, index: usize) -> Option<ImageRef> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    /// Swap an image with the one before it
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.images.len() {
            return false;
        }
        self.images.swap(index, index - 1);
        true
    }

    /// Swap an image with the one after it
    pub fn move_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.images.len() {
            return false;
        }
        self.images.swap(index, index + 1);
        true
    }

    pub fn clear(&mut self) {
        self.images.clear();
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.images.iter().map(|img| img.path.clone()).collect()
    }

    /// Display names in selection order
    pub fn file_names(&self) -> Vec<String> {
        self.images.iter().map(ImageRef::file_name).collect()
    }

    pub fn status_line(&self) -> String {
        format!("{} images selected", self.images.len())
    }
}

impl FromIterator<ImageRef> for Selection {
    fn from_iter<T: IntoIterator<Item = ImageRef>>(iter: T) -> Self {
        Self {
            images: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a ImageRef;
    type IntoIter = std::slice::Iter<'a, ImageRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
