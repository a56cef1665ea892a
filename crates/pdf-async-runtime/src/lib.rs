use std::path::PathBuf;

mod observer;
mod worker;

pub use observer::ChannelObserver;
pub use worker::{WorkerHandle, spawn_worker, worker_task};

// Re-export types from library crates
pub use pdf_images::{
    ConversionOptions, ConversionSummary, ImagePreview, ImageRef, PageSize, Placement, Rejected,
};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum ConvertCommand {
    /// Decode candidate files and report which ones can be added
    ValidateImages { paths: Vec<PathBuf> },
    Convert {
        images: Vec<ImageRef>,
        options: ConversionOptions,
    },
    GeneratePreview { path: PathBuf },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum ConvertUpdate {
    ImagesValidated {
        added: Vec<ImageRef>,
        rejected: Vec<Rejected>,
    },
    Progress {
        processed: usize,
        total: usize,
        file_name: String,
    },
    ImageSkipped {
        path: PathBuf,
        reason: String,
    },
    ConversionComplete {
        summary: ConversionSummary,
    },
    PreviewReady {
        preview: ImagePreview,
    },
    /// Files could not be checked at all (individual bad files are `rejected`)
    ValidationFailed {
        message: String,
    },
    /// The run ended without writing a document
    ConversionFailed {
        message: String,
    },
    PreviewFailed {
        message: String,
    },
}
