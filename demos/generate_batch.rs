use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;

use portray::{
    BackingColor, Canvas, CategoryDirs, CategoryKind, Manifest, PreparedLayerStore,
    generate_variations,
};

fn write_layer(dir: &Path, name: &str, rgba: [u8; 4]) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)?;
    let img = image::RgbaImage::from_pixel(250, 350, image::Rgba(rgba));
    img.save(dir.join(name))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let root = PathBuf::from("target").join("demo_batch");

    let categories = CategoryDirs {
        background: root.join("background"),
        hairstyle: root.join("hairstyle"),
        eyes: root.join("eyes"),
        beard: root.join("beard"),
        head: root.join("head"),
        clothes: root.join("clothes"),
    };

    // A toy layer set: opaque backgrounds, translucent accent layers.
    write_layer(&categories.background, "sky.png", [90, 140, 220, 255])?;
    write_layer(&categories.background, "sand.png", [220, 190, 120, 255])?;
    write_layer(&categories.hairstyle, "tint.png", [40, 20, 10, 120])?;
    write_layer(&categories.eyes, "shade.png", [10, 10, 10, 90])?;
    for kind in CategoryKind::ALL {
        std::fs::create_dir_all(categories.dir(kind))?;
    }

    let manifest = Manifest {
        canvas: Canvas::default(),
        variations: 4,
        seed: Some(7),
        backing: BackingColor::default(),
        output_dir: root.join("out"),
        categories,
    };
    manifest.validate()?;

    let store = PreparedLayerStore::prepare(&manifest)?;
    let mut rng = StdRng::seed_from_u64(manifest.seed.unwrap());
    let stats = generate_variations(
        &store,
        &manifest.output_dir,
        manifest.backing,
        manifest.variations,
        &mut rng,
    )?;

    eprintln!(
        "wrote {} variations to {}",
        stats.variations_written,
        manifest.output_dir.display()
    );
    Ok(())
}
