//! Image placement on a page
//!
//! Given an image's natural size and the page size, this module computes the
//! rectangle the image is drawn into:
//! - Stretch fills the whole page and ignores aspect ratio
//! - Every other placement scales the image to fit inside the page margins
//!   while keeping its aspect ratio, then anchors it to the center or a corner
//!
//! All functions here are pure. Dimensions are validated up front; the layout
//! never produces a rectangle with a negative or zero size.

use crate::constants::PAGE_MARGIN_PT;
use crate::types::{ConvertError, DrawRect, PageDescriptor, PageSize, Placement, Result};

/// Compute the draw rectangle using the standard page margin.
///
/// # Arguments
/// * `image` - Natural image size (width, height), in pixels
/// * `page` - Page size (width, height), in points
/// * `placement` - Where the image goes on the page
pub fn compute_draw_rect(
    image: (f32, f32),
    page: (f32, f32),
    placement: Placement,
) -> Result<DrawRect> {
    compute_draw_rect_with_margin(image, page, placement, PAGE_MARGIN_PT)
}

/// Compute the draw rectangle with an explicit margin (in points).
pub fn compute_draw_rect_with_margin(
    image: (f32, f32),
    page: (f32, f32),
    placement: Placement,
    margin: f32,
) -> Result<DrawRect> {
    check_dimensions("image", image)?;
    check_dimensions("page", page)?;
    if !margin.is_finite() || margin < 0.0 {
        return Err(ConvertError::DegenerateLayout(format!(
            "margin must be a non-negative number, got {margin}"
        )));
    }

    let (page_width, page_height) = page;

    if placement == Placement::Stretch {
        return Ok(DrawRect::new(0.0, 0.0, page_width, page_height));
    }

    let scale = scale_factor(image, page, margin);
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ConvertError::NoPrintableArea {
            page_width,
            page_height,
            margin,
        });
    }

    let width = image.0 * scale;
    let height = image.1 * scale;
    let (x, y) = anchor(placement, page, (width, height), margin);

    Ok(DrawRect::new(x, y, width, height))
}

/// Compute the full page descriptor for an image on one of the standard page sizes.
pub fn page_descriptor(
    image: (f32, f32),
    page_size: PageSize,
    placement: Placement,
) -> Result<PageDescriptor> {
    let (page_width, page_height) = page_size.dimensions_pt();
    let rect = compute_draw_rect(image, (page_width, page_height), placement)?;
    Ok(PageDescriptor {
        page_width,
        page_height,
        rect,
    })
}

/// Uniform scale that fits `image` inside the page minus `margin` on every side.
///
/// This is the raw ratio; it can be zero or negative when the margins
/// consume the page. [`compute_draw_rect_with_margin`] rejects those cases.
pub fn scale_factor(image: (f32, f32), page: (f32, f32), margin: f32) -> f32 {
    let (image_width, image_height) = image;
    let (page_width, page_height) = page;
    let scale_w = (page_width - 2.0 * margin) / image_width;
    let scale_h = (page_height - 2.0 * margin) / image_height;
    scale_w.min(scale_h)
}

/// Bottom-left origin for a scaled image.
fn anchor(placement: Placement, page: (f32, f32), size: (f32, f32), margin: f32) -> (f32, f32) {
    let (page_width, page_height) = page;
    let (width, height) = size;

    match placement {
        Placement::Center => ((page_width - width) / 2.0, (page_height - height) / 2.0),
        Placement::TopLeft => (margin, page_height - height - margin),
        Placement::TopRight => (page_width - width - margin, page_height - height - margin),
        Placement::BottomLeft => (margin, margin),
        Placement::BottomRight => (page_width - width - margin, margin),
        Placement::Stretch => (0.0, 0.0),
    }
}

fn check_dimensions(what: &str, (width, height): (f32, f32)) -> Result<()> {
    let valid = |v: f32| v.is_finite() && v > 0.0;
    if valid(width) && valid(height) {
        Ok(())
    } else {
        Err(ConvertError::DegenerateLayout(format!(
            "{what} dimensions must be positive, got {width}x{height}"
        )))
    }
}
