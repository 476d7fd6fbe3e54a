use anyhow::Context;

use crate::foundation::error::PortrayResult;

/// Decode encoded image bytes and convert to straight (non-premultiplied)
/// RGBA8.
///
/// All supported input formats (PNG/JPEG/BMP) pass through here; formats
/// without an alpha channel come out fully opaque.
pub fn decode_rgba8(bytes: &[u8]) -> PortrayResult<image::RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(dyn_img.to_rgba8())
}

/// Convert straight RGBA8 to premultiplied RGBA8 in place.
pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
