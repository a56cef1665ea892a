//! Progress reporting for the conversion loop

use crate::selection::display_name;
use std::path::PathBuf;

/// Emitted after every committed page
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    /// Pages committed so far (never decreases during a run)
    pub processed: usize,
    /// Number of images in the run
    pub total: usize,
    /// Base name of the image that was just committed
    pub file_name: String,
}

impl Progress {
    /// Completion ratio in `0.0..=1.0`
    pub fn fraction(&self) -> f32 {
        self.processed as f32 / self.total.max(1) as f32
    }

    pub fn status_line(&self) -> String {
        format!(
            "Processing {}/{}: {}",
            self.processed, self.total, self.file_name
        )
    }
}

/// An image the loop could not turn into a page
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedImage {
    /// Position in the selection
    pub index: usize,
    pub path: PathBuf,
    pub reason: String,
}

impl SkippedImage {
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }

    pub fn warning_text(&self) -> String {
        format!("Could not process {}: {}", self.file_name(), self.reason)
    }
}

/// Outcome of a finished run
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    pub output_path: PathBuf,
    pub pages: usize,
    pub skipped: usize,
    pub total: usize,
}

impl ConversionSummary {
    pub fn status_line(&self) -> String {
        format!(
            "Successfully created {} with {} pages",
            self.output_path.display(),
            self.pages
        )
    }
}

/// Receives notifications from the conversion loop.
///
/// Notifications are fire-and-forget: the loop never waits on or reacts to
/// an observer.
pub trait ProgressObserver {
    /// A page was added to the output document
    fn page_committed(&mut self, progress: &Progress);

    /// An image was skipped; the loop carries on with the next one
    fn image_skipped(&mut self, _skipped: &SkippedImage) {}

    /// The output file has been written
    fn finished(&mut self, _summary: &ConversionSummary) {}
}

impl<T: ProgressObserver + ?Sized> ProgressObserver for &mut T {
    fn page_committed(&mut self, progress: &Progress) {
        (**self).page_committed(progress);
    }

    fn image_skipped(&mut self, skipped: &SkippedImage) {
        (**self).image_skipped(skipped);
    }

    fn finished(&mut self, summary: &ConversionSummary) {
        (**self).finished(summary);
    }
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {
    fn page_committed(&mut self, _progress: &Progress) {}
}

/// Adapts a closure into a page progress observer
pub struct FnObserver<F>(pub F);

impl<F> ProgressObserver for FnObserver<F>
where
    F: FnMut(&Progress),
{
    fn page_committed(&mut self, progress: &Progress) {
        (self.0)(progress);
    }
}
