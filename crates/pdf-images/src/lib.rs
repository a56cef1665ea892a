pub mod constants;
pub mod convert;
pub mod image_io;
pub mod layout;
mod options;
mod preview;
pub mod render;
mod selection;
mod types;

pub use convert::{
    AssembledDocument, ConversionReport, ConversionSummary, FnObserver, NoopObserver, PageRecord,
    Progress, ProgressObserver, SkippedImage, build_document, convert, save_pdf,
};
pub use layout::{compute_draw_rect, compute_draw_rect_with_margin, page_descriptor};
pub use options::*;
pub use preview::{ImagePreview, generate_default_preview, generate_preview};
pub use selection::*;
pub use types::*;
