use std::path::{Path, PathBuf};

use anyhow::Context;
use rand::Rng;

use crate::{
    assets::store::PreparedLayerStore,
    foundation::error::PortrayResult,
    manifest::model::BackingColor,
    render::compose::compose_variation,
    render::composite::flatten_over_backing,
};

/// Aggregated generation counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerateStats {
    /// Portraits composed and written to disk.
    pub variations_written: u32,
}

/// File name for the 1-based variation index `i`.
pub fn variation_file_name(i: u32) -> String {
    format!("variation_{i}.png")
}

/// Compose and write `count` portrait variations into `output_dir`.
///
/// The output directory is created if absent. Variations are generated
/// strictly sequentially; each one samples, composites, flattens over
/// `backing`, and is saved as an opaque RGB8 PNG before the next begins. Any
/// write failure aborts the run with whatever files were already written left
/// in place. A `count` of zero writes nothing and succeeds.
#[tracing::instrument(skip(store, rng))]
pub fn generate_variations<R: Rng + ?Sized>(
    store: &PreparedLayerStore,
    output_dir: &Path,
    backing: BackingColor,
    count: u32,
    rng: &mut R,
) -> PortrayResult<GenerateStats> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir '{}'", output_dir.display()))?;

    let mut stats = GenerateStats::default();
    for i in 1..=count {
        let frame = compose_variation(store, rng)?;
        let rgb = flatten_over_backing(&frame.data, backing.rgb())?;

        let out_path: PathBuf = output_dir.join(variation_file_name(i));
        image::save_buffer_with_format(
            &out_path,
            &rgb,
            frame.width,
            frame.height,
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", out_path.display()))?;

        stats.variations_written += 1;
        tracing::debug!(path = %out_path.display(), "wrote variation");
    }

    tracing::info!(written = stats.variations_written, "generation complete");
    Ok(stats)
}
