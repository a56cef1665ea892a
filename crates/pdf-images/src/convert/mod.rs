//! Image-to-PDF conversion
//!
//! This module orchestrates a conversion run:
//! 1. Refuse empty selections before anything is created
//! 2. Decode each image in selection order and compute its page layout
//! 3. Render one page per image, skipping images that fail
//! 4. Write the finished document once

mod io;
mod observer;

pub use io::save_pdf;
pub use observer::{
    ConversionSummary, FnObserver, NoopObserver, Progress, ProgressObserver, SkippedImage,
};

use crate::constants::PDF_VERSION;
use crate::image_io::load_image;
use crate::layout::page_descriptor;
use crate::options::ConversionOptions;
use crate::render::{DocumentMetadata, create_image_xobject, finish_document, render_image_page};
use crate::selection::{ImageRef, Selection};
use crate::types::*;
use lopdf::{Document, Object, ObjectId};
use std::path::PathBuf;

/// One page of the output document
#[derive(Debug, Clone, PartialEq)]
pub struct PageRecord {
    /// Image the page was made from
    pub source: PathBuf,
    /// Natural image size in pixels
    pub image_size: (u32, u32),
    pub descriptor: PageDescriptor,
}

/// A finished in-memory document plus what went into it
#[derive(Debug)]
pub struct AssembledDocument {
    pub document: Document,
    pub pages: Vec<PageRecord>,
    pub skipped: Vec<SkippedImage>,
    pub total: usize,
}

/// What a conversion run produced
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub output_path: PathBuf,
    pub pages: Vec<PageRecord>,
    pub skipped: Vec<SkippedImage>,
    /// Number of images in the run
    pub total: usize,
}

impl ConversionReport {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn summary(&self) -> ConversionSummary {
        ConversionSummary {
            output_path: self.output_path.clone(),
            pages: self.pages.len(),
            skipped: self.skipped.len(),
            total: self.total,
        }
    }
}

/// Convert a selection to a PDF file at `options.output_path()`.
///
/// The document is assembled on a blocking task and written exactly once
/// at the end. Images that cannot be decoded or laid out are skipped and
/// reported through the observer; a failure to write the output is fatal.
pub async fn convert<O>(
    selection: &Selection,
    options: &ConversionOptions,
    mut observer: O,
) -> Result<ConversionReport>
where
    O: ProgressObserver + Send + 'static,
{
    if selection.is_empty() {
        return Err(ConvertError::EmptySelection);
    }
    options.validate()?;

    let output_path = options.output_path();
    log::info!(
        "Converting {} image(s) -> {}",
        selection.len(),
        output_path.display()
    );

    let images = selection.images().to_vec();
    let build_options = options.clone();
    let (mut observer, assembled) = tokio::task::spawn_blocking(move || {
        let assembled = build_document(&images, &build_options, &mut observer);
        (observer, assembled)
    })
    .await?;
    let assembled = assembled?;

    save_pdf(assembled.document, &output_path).await?;

    let report = ConversionReport {
        output_path,
        pages: assembled.pages,
        skipped: assembled.skipped,
        total: assembled.total,
    };

    let summary = report.summary();
    log::info!("{}", summary.status_line());
    observer.finished(&summary);

    Ok(report)
}

/// Assemble the output document in memory without touching the file system.
pub fn build_document(
    images: &[ImageRef],
    options: &ConversionOptions,
    observer: &mut dyn ProgressObserver,
) -> Result<AssembledDocument> {
    if images.is_empty() {
        return Err(ConvertError::EmptySelection);
    }
    options.validate()?;

    let total = images.len();
    let mut output = Document::with_version(PDF_VERSION);
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::with_capacity(total);
    let mut pages = Vec::with_capacity(total);
    let mut skipped = Vec::new();

    for (index, image_ref) in images.iter().enumerate() {
        match render_entry(&mut output, pages_tree_id, image_ref, options) {
            Ok((page_id, record)) => {
                page_refs.push(Object::Reference(page_id));
                pages.push(record);

                observer.page_committed(&Progress {
                    processed: pages.len(),
                    total,
                    file_name: image_ref.file_name(),
                });
            }
            Err(e) => {
                let skip = SkippedImage {
                    index,
                    path: image_ref.path().to_path_buf(),
                    reason: e.to_string(),
                };
                log::warn!("{}", skip.warning_text());
                observer.image_skipped(&skip);
                skipped.push(skip);
            }
        }
    }

    if pages.is_empty() {
        return Err(ConvertError::NoPages);
    }

    let metadata = DocumentMetadata {
        title: options.title.clone(),
        producer: format!("pdf-images {}", env!("CARGO_PKG_VERSION")),
    };
    finish_document(&mut output, pages_tree_id, page_refs, &metadata);

    Ok(AssembledDocument {
        document: output,
        pages,
        skipped,
        total,
    })
}

/// Decode, lay out and render a single image page.
fn render_entry(
    output: &mut Document,
    pages_tree_id: ObjectId,
    image_ref: &ImageRef,
    options: &ConversionOptions,
) -> Result<(ObjectId, PageRecord)> {
    let image = load_image(image_ref.path())?;
    let image_size = (image.width(), image.height());

    // Layout first so a rejected image leaves nothing behind in the document
    let descriptor = page_descriptor(
        (image_size.0 as f32, image_size.1 as f32),
        options.page_size,
        options.placement,
    )?;
    log::debug!(
        "{}: {}x{} px -> {:?}",
        image_ref.file_name(),
        image_size.0,
        image_size.1,
        descriptor.rect
    );

    let xobject_id = create_image_xobject(output, &image)?;
    let page_id = render_image_page(output, pages_tree_id, &descriptor, xobject_id)?;

    Ok((
        page_id,
        PageRecord {
            source: image_ref.path().to_path_buf(),
            image_size,
            descriptor,
        },
    ))
}
