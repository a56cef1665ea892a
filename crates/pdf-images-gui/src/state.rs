use pdf_async_runtime::{ConversionOptions, ConvertUpdate, ImagePreview};
use pdf_images::Selection;
use std::collections::BTreeSet;

pub const READY_STATUS: &str = "Ready";
pub const FAILED_STATUS: &str = "Conversion failed";

/// Everything the window shows that is not a GPU resource
pub struct AppState {
    pub selection: Selection,
    /// Highlighted rows in the image list
    pub selected_rows: BTreeSet<usize>,
    /// Row a shift-click extends from
    pub anchor_row: Option<usize>,
    pub options: ConversionOptions,
    pub converting: bool,
    pub validating: bool,
    /// Conversion progress in `0.0..=1.0`
    pub progress: f32,
    pub status: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            selection: Selection::new(),
            selected_rows: BTreeSet::new(),
            anchor_row: None,
            options: ConversionOptions::default(),
            converting: false,
            validating: false,
            progress: 0.0,
            status: READY_STATUS.to_string(),
        }
    }
}

impl AppState {
    pub fn can_convert(&self) -> bool {
        !self.converting && !self.validating && !self.selection.is_empty()
    }

    /// Mark a run as started. Returns false if one is already in flight.
    pub fn begin_conversion(&mut self) -> bool {
        if !self.can_convert() {
            return false;
        }
        self.converting = true;
        self.progress = 0.0;
        self.status = format!("Processing 0/{}", self.selection.len());
        true
    }

    /// Drop the highlighted rows from the selection
    pub fn remove_selected(&mut self) -> usize {
        if self.selected_rows.is_empty() {
            self.status = "No images selected for removal".to_string();
            return 0;
        }
        let rows: Vec<usize> = self.selected_rows.iter().copied().collect();
        let removed = self.selection.remove_indices(&rows);
        self.selected_rows.clear();
        self.anchor_row = None;
        if removed > 0 {
            self.status = self.selection.status_line();
        }
        removed
    }

    /// Update row highlighting for a click.
    ///
    /// `toggle` adds or removes a single row, `extend` selects the range
    /// from the last clicked row.
    pub fn click_row(&mut self, row: usize, toggle: bool, extend: bool) {
        match (self.anchor_row, extend) {
            (Some(anchor), true) => {
                let (start, end) = (anchor.min(row), anchor.max(row));
                self.selected_rows = (start..=end).collect();
            }
            _ if toggle => {
                if !self.selected_rows.remove(&row) {
                    self.selected_rows.insert(row);
                }
                self.anchor_row = Some(row);
            }
            _ => {
                self.selected_rows = BTreeSet::from([row]);
                self.anchor_row = Some(row);
            }
        }
    }

    /// The single highlighted row, if exactly one is highlighted
    pub fn single_selected_row(&self) -> Option<usize> {
        if self.selected_rows.len() == 1 {
            self.selected_rows.first().copied()
        } else {
            None
        }
    }

    /// Fold a worker update into the state. A finished preview is handed
    /// back so the caller can turn it into a texture.
    pub fn apply_update(&mut self, update: ConvertUpdate) -> Option<ImagePreview> {
        match update {
            ConvertUpdate::ImagesValidated { added, rejected } => {
                self.validating = false;
                for image in added {
                    self.selection.push(image);
                }
                self.status = if rejected.is_empty() {
                    self.selection.status_line()
                } else {
                    format!(
                        "{} ({} file(s) were not valid images)",
                        self.selection.status_line(),
                        rejected.len()
                    )
                };
            }
            ConvertUpdate::Progress {
                processed,
                total,
                file_name,
            } => {
                self.progress = processed as f32 / total.max(1) as f32;
                self.status = format!("Processing {}/{}: {}", processed, total, file_name);
            }
            ConvertUpdate::ImageSkipped { .. } => {
                // Logged by the conversion loop; the run carries on
            }
            ConvertUpdate::ConversionComplete { summary } => {
                self.converting = false;
                self.progress = 1.0;
                self.status = summary.status_line();
            }
            ConvertUpdate::PreviewReady { preview } => return Some(preview),
            ConvertUpdate::ConversionFailed { .. } => {
                // The worker has already logged the cause
                self.converting = false;
                self.progress = 0.0;
                self.status = FAILED_STATUS.to_string();
            }
            ConvertUpdate::ValidationFailed { message } => {
                self.validating = false;
                self.status = format!("Error: {message}");
            }
            ConvertUpdate::PreviewFailed { message } => {
                // A running conversion keeps its own status line
                if !self.converting {
                    self.status = format!("Error: {message}");
                }
            }
        }
        None
    }
}
