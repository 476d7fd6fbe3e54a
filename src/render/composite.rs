use crate::foundation::error::{PortrayError, PortrayResult};

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over blend of one premultiplied pixel onto another.
///
/// `out = src + dst * (1 - src.a)` per channel, with `(x*y + 127)/255`
/// rounding and saturating adds.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);

    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// Source-over blend of a full premultiplied RGBA8 buffer onto `dst`.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> PortrayResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(PortrayError::validation(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Flatten a premultiplied RGBA8 buffer to opaque straight RGB8 over an
/// opaque backing color.
///
/// `rgb = src_c + backing_c * (1 - a)` per channel, so a fully opaque
/// composite reproduces itself exactly and uncovered pixels come out as pure
/// backing color.
pub fn flatten_over_backing(rgba8_premul: &[u8], backing: [u8; 3]) -> PortrayResult<Vec<u8>> {
    if !rgba8_premul.len().is_multiple_of(4) {
        return Err(PortrayError::validation(
            "flatten_over_backing expects an rgba8 buffer",
        ));
    }

    let mut out = Vec::with_capacity(rgba8_premul.len() / 4 * 3);
    for px in rgba8_premul.chunks_exact(4) {
        let inv = 255u16 - u16::from(px[3]);
        for i in 0..3 {
            out.push(px[i].saturating_add(mul_div255(u16::from(backing[i]), inv)));
        }
    }
    Ok(out)
}

fn mul_div255(x: u16, y: u16) -> u8 {
    ((x * y + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
