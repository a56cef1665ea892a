//! PDF rendering for image pages
//!
//! This module handles all PDF-specific operations:
//! - Embedding decoded images as Image XObjects
//! - Building one output page per image
//! - Writing the page tree, catalog and document info

mod page;
mod xobject;

pub use page::{DocumentMetadata, finish_document, render_image_page};
pub use xobject::create_image_xobject;
