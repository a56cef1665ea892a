//! Output page rendering
//!
//! Each output page paints a white background over the whole MediaBox and
//! draws exactly one image XObject into its layout rectangle.

use crate::constants::IMAGE_XOBJECT_NAME;
use crate::types::{PageDescriptor, Result};
use chrono::Local;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, text_string};

/// Document-level metadata written to the Info dictionary
#[derive(Debug, Clone, Default)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub producer: String,
}

// =============================================================================
// Public API
// =============================================================================

/// Render one output page holding a single image.
///
/// # Arguments
/// * `output` - The output document
/// * `parent_pages_id` - The parent Pages object ID
/// * `descriptor` - Page size and image rectangle
/// * `xobject_id` - The image XObject to draw
pub fn render_image_page(
    output: &mut Document,
    parent_pages_id: ObjectId,
    descriptor: &PageDescriptor,
    xobject_id: ObjectId,
) -> Result<ObjectId> {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(descriptor.page_width),
            Object::Real(descriptor.page_height),
        ]),
    );

    let mut xobjects = Dictionary::new();
    xobjects.set(IMAGE_XOBJECT_NAME, Object::Reference(xobject_id));

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content = page_content(descriptor);
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

/// Write the page tree, catalog and Info dictionary.
///
/// `pages_tree_id` must have been reserved with `new_object_id` before the
/// pages referencing it were rendered.
pub fn finish_document(
    output: &mut Document,
    pages_tree_id: ObjectId,
    page_refs: Vec<Object>,
    metadata: &DocumentMetadata,
) {
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));
    output.trailer.set("Root", catalog_id);

    let info_id = output.add_object(info_dictionary(metadata));
    output.trailer.set("Info", info_id);
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Content stream: white page background, then the image in its rectangle.
fn page_content(descriptor: &PageDescriptor) -> String {
    let rect = &descriptor.rect;
    format!(
        "q 1 1 1 rg 0 0 {} {} re f Q\nq {} 0 0 {} {} {} cm /{} Do Q\n",
        descriptor.page_width,
        descriptor.page_height,
        rect.width,
        rect.height,
        rect.x,
        rect.y,
        IMAGE_XOBJECT_NAME
    )
}

fn info_dictionary(metadata: &DocumentMetadata) -> Dictionary {
    let mut info = Dictionary::new();
    // Non-ASCII text goes out as UTF-16BE with a BOM
    info.set("Producer", text_string(&metadata.producer));
    if let Some(title) = &metadata.title {
        info.set("Title", text_string(title));
    }

    // PDF date format: D:YYYYMMDDHHmmSS+HH'mm'
    let now = Local::now();
    let offset = now.format("%z").to_string();
    let (sign_hours, minutes) = offset.split_at(offset.len().saturating_sub(2));
    let date = format!("D:{}{}'{}'", now.format("%Y%m%d%H%M%S"), sign_hours, minutes);
    info.set(
        "CreationDate",
        Object::String(date.into_bytes(), StringFormat::Literal),
    );

    info
}
