use std::io::Cursor;

use super::*;

fn encode_png(img: image::RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_keeps_straight_rgba() {
    let src_rgba = vec![100u8, 50u8, 200u8, 128u8];
    let buf = encode_png(image::RgbaImage::from_raw(1, 1, src_rgba.clone()).unwrap());

    let decoded = decode_rgba8(&buf).unwrap();
    assert_eq!(decoded.dimensions(), (1, 1));
    assert_eq!(decoded.into_raw(), src_rgba);
}

#[test]
fn decode_garbage_is_an_error() {
    assert!(decode_rgba8(b"not an image").is_err());
}

#[test]
fn premultiply_scales_color_by_alpha() {
    let mut px = vec![100u8, 50u8, 200u8, 128u8];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(
        px,
        vec![
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn premultiply_zero_alpha_clears_color() {
    let mut px = vec![10u8, 20u8, 30u8, 0u8];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![0, 0, 0, 0]);
}

#[test]
fn premultiply_full_alpha_is_identity() {
    let mut px = vec![10u8, 20u8, 30u8, 255u8];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![10, 20, 30, 255]);
}
