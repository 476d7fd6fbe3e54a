use std::path::{Path, PathBuf};

use super::*;
use crate::manifest::model::{CategoryKind, Manifest};

fn fixture_root(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("store_unit").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_solid_png(path: &Path, w: u32, h: u32, rgba: [u8; 4]) {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(rgba));
    img.save(path).unwrap();
}

fn manifest_with_dirs(root: &Path) -> Manifest {
    let json = format!(
        r##"
{{
  "canvas": {{ "width": 8, "height": 10 }},
  "variations": 1,
  "output_dir": "{root}/out",
  "categories": {{
    "background": "{root}/background",
    "hairstyle": "{root}/hairstyle",
    "eyes": "{root}/eyes",
    "beard": "{root}/beard",
    "head": "{root}/head",
    "clothes": "{root}/clothes"
  }}
}}
"##,
        root = root.display()
    );
    serde_json::from_str(&json).unwrap()
}

fn create_category_dirs(root: &Path) {
    for kind in CategoryKind::ALL {
        std::fs::create_dir_all(root.join(kind.label())).unwrap();
    }
}

#[test]
fn prepare_resizes_all_candidates_to_the_canvas() {
    let root = fixture_root("resize");
    create_category_dirs(&root);
    write_solid_png(&root.join("background/big.png"), 32, 48, [10, 20, 30, 255]);
    write_solid_png(&root.join("background/small.png"), 2, 3, [40, 50, 60, 255]);

    let manifest = manifest_with_dirs(&root);
    let store = PreparedLayerStore::prepare(&manifest).unwrap();

    assert_eq!(store.canvas(), manifest.canvas);
    let pool = store.pool(CategoryKind::Background);
    assert_eq!(pool.len(), 2);
    for layer in pool {
        assert_eq!(layer.rgba8_premul.len(), manifest.canvas.rgba8_len());
    }
}

#[test]
fn prepare_premultiplies_pixel_data() {
    let root = fixture_root("premul");
    create_category_dirs(&root);
    write_solid_png(&root.join("head/half.png"), 8, 10, [200, 100, 50, 128]);

    let store = PreparedLayerStore::prepare(&manifest_with_dirs(&root)).unwrap();
    let layer = &store.pool(CategoryKind::Head)[0];

    let expected = [
        ((200u16 * 128 + 127) / 255) as u8,
        ((100u16 * 128 + 127) / 255) as u8,
        ((50u16 * 128 + 127) / 255) as u8,
        128,
    ];
    for px in layer.rgba8_premul.chunks_exact(4) {
        assert_eq!(px, expected);
    }
}

#[test]
fn prepare_accepts_empty_category_directories() {
    let root = fixture_root("empty");
    create_category_dirs(&root);

    let store = PreparedLayerStore::prepare(&manifest_with_dirs(&root)).unwrap();
    for (kind, count) in store.candidate_counts() {
        assert_eq!(count, 0, "pool for '{kind}' should be empty");
    }
}

#[test]
fn prepare_fails_on_corrupt_candidate() {
    let root = fixture_root("corrupt");
    create_category_dirs(&root);
    std::fs::write(root.join("eyes/bad.png"), b"definitely not a png").unwrap();

    assert!(PreparedLayerStore::prepare(&manifest_with_dirs(&root)).is_err());
}

#[test]
fn prepare_fails_on_missing_category_directory() {
    let root = fixture_root("missing");
    create_category_dirs(&root);
    std::fs::remove_dir(root.join("clothes")).unwrap();

    assert!(PreparedLayerStore::prepare(&manifest_with_dirs(&root)).is_err());
}
