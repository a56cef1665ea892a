use crate::ConvertUpdate;
use pdf_images::{ConversionSummary, Progress, ProgressObserver, SkippedImage};
use tokio::sync::mpsc;

/// Forwards conversion events to the UI as [`ConvertUpdate`]s.
///
/// Sends never block; if the receiving side has gone away the events are
/// dropped and the conversion carries on.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    update_tx: mpsc::UnboundedSender<ConvertUpdate>,
}

impl ChannelObserver {
    pub fn new(update_tx: mpsc::UnboundedSender<ConvertUpdate>) -> Self {
        Self { update_tx }
    }
}

impl ProgressObserver for ChannelObserver {
    fn page_committed(&mut self, progress: &Progress) {
        let _ = self.update_tx.send(ConvertUpdate::Progress {
            processed: progress.processed,
            total: progress.total,
            file_name: progress.file_name.clone(),
        });
    }

    fn image_skipped(&mut self, skipped: &SkippedImage) {
        let _ = self.update_tx.send(ConvertUpdate::ImageSkipped {
            path: skipped.path.clone(),
            reason: skipped.reason.clone(),
        });
    }

    fn finished(&mut self, summary: &ConversionSummary) {
        let _ = self.update_tx.send(ConvertUpdate::ConversionComplete {
            summary: summary.clone(),
        });
    }
}
