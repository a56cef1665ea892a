//! Shared constants for image-to-PDF conversion
//!
//! This module centralizes magic numbers and constants used throughout
//! the layout and rendering code.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per inch
pub const INCH_PT: f32 = 72.0;

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = INCH_PT / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Layout
// =============================================================================

/// Gap kept between the image and the page edge for every placement except stretch
pub const PAGE_MARGIN_PT: f32 = 20.0;

// =============================================================================
// Output
// =============================================================================

/// File name (without extension) used when the user leaves the name empty
pub const DEFAULT_OUTPUT_NAME: &str = "output";

pub const PDF_EXTENSION: &str = "pdf";

/// Resource name of the image XObject on every page
pub const IMAGE_XOBJECT_NAME: &str = "Im0";

/// PDF version written to the output document
pub const PDF_VERSION: &str = "1.7";

// =============================================================================
// Previews
// =============================================================================

/// Longest side of a preview thumbnail in pixels
pub const PREVIEW_MAX_SIDE: u32 = 400;
