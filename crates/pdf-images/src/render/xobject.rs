//! Image XObject creation
//!
//! Decoded images are embedded as 8-bit Image XObjects. Pixel data is
//! Flate-compressed; an alpha channel becomes a separate soft mask.

use crate::types::Result;
use image::DynamicImage;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

// =============================================================================
// XObject Creation
// =============================================================================

/// Add an Image XObject for `image` to `output` and return its object ID.
///
/// Grayscale images stay in DeviceGray, everything else is written as
/// DeviceRGB. If the image has an alpha channel it is split off into a
/// DeviceGray `/SMask`.
pub fn create_image_xobject(output: &mut Document, image: &DynamicImage) -> Result<ObjectId> {
    let width = image.width();
    let height = image.height();
    let color = image.color();

    if color.has_alpha() {
        let rgba = image.to_rgba8();
        let pixel_count = (width as usize) * (height as usize);
        let mut rgb = Vec::with_capacity(pixel_count * 3);
        let mut alpha = Vec::with_capacity(pixel_count);
        for chunk in rgba.as_raw().chunks_exact(4) {
            rgb.extend_from_slice(&chunk[..3]);
            alpha.push(chunk[3]);
        }

        let smask_id = add_image_stream(output, width, height, b"DeviceGray", alpha, None)?;
        add_image_stream(output, width, height, b"DeviceRGB", rgb, Some(smask_id))
    } else if color.channel_count() == 1 {
        let gray = image.to_luma8().into_raw();
        add_image_stream(output, width, height, b"DeviceGray", gray, None)
    } else {
        let rgb = image.to_rgb8().into_raw();
        add_image_stream(output, width, height, b"DeviceRGB", rgb, None)
    }
}

/// Build an image stream dictionary for raw 8-bit samples.
fn image_dictionary(width: u32, height: u32, color_space: &[u8]) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(width as i64));
    dict.set("Height", Object::Integer(height as i64));
    dict.set("ColorSpace", Object::Name(color_space.to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));
    dict
}

fn add_image_stream(
    output: &mut Document,
    width: u32,
    height: u32,
    color_space: &[u8],
    samples: Vec<u8>,
    smask: Option<ObjectId>,
) -> Result<ObjectId> {
    let mut dict = image_dictionary(width, height, color_space);
    if let Some(smask_id) = smask {
        dict.set("SMask", Object::Reference(smask_id));
    }

    let mut stream = Stream::new(dict, samples);
    stream.compress()?;

    Ok(output.add_object(stream))
}
