use std::{path::PathBuf, sync::Arc};

use anyhow::Context;

use crate::{
    assets::{decode, scan},
    foundation::core::Canvas,
    foundation::error::PortrayResult,
    manifest::model::{CategoryKind, Manifest},
};

/// One candidate image, resized to the canvas and premultiplied.
#[derive(Clone, Debug)]
pub struct PreparedLayer {
    /// Path the candidate was loaded from.
    pub source: PathBuf,
    /// Canvas-sized pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Immutable per-category pools of prepared candidate layers.
///
/// `prepare` front-loads every read, decode, and resize, so composition
/// downstream is deterministic and IO-free. Pools keep the category order of
/// [`CategoryKind::ALL`].
#[derive(Clone, Debug)]
pub struct PreparedLayerStore {
    pub(crate) canvas: Canvas,
    pub(crate) pools: [Vec<PreparedLayer>; 6],
}

impl PreparedLayerStore {
    /// Scan, decode, and resize every candidate referenced by `manifest`.
    ///
    /// A category directory with no candidate images yields an empty pool,
    /// which simply never contributes a layer to any portrait; that is
    /// surfaced as a warning, not an error. Unreadable directories and
    /// corrupt images abort the run.
    #[tracing::instrument(skip(manifest))]
    pub fn prepare(manifest: &Manifest) -> PortrayResult<Self> {
        let canvas = manifest.canvas;
        let mut pools: [Vec<PreparedLayer>; 6] = Default::default();

        for (kind, dir) in manifest.categories.iter() {
            let candidates = scan::scan_category_dir(dir)?;
            let pool = &mut pools[kind.index()];
            pool.reserve(candidates.len());

            for path in candidates {
                let bytes = std::fs::read(&path)
                    .with_context(|| format!("read candidate image '{}'", path.display()))?;
                let rgba = decode::decode_rgba8(&bytes)
                    .with_context(|| format!("decode candidate image '{}'", path.display()))?;
                let mut resized = image::imageops::resize(
                    &rgba,
                    canvas.width,
                    canvas.height,
                    image::imageops::FilterType::Lanczos3,
                )
                .into_raw();
                decode::premultiply_rgba8_in_place(&mut resized);

                pool.push(PreparedLayer {
                    source: path,
                    rgba8_premul: Arc::new(resized),
                });
            }

            if pool.is_empty() {
                tracing::warn!(category = %kind, dir = %dir.display(), "category pool is empty");
            } else {
                tracing::debug!(category = %kind, candidates = pool.len(), "prepared pool");
            }
        }

        Ok(Self { canvas, pools })
    }

    /// Canvas every prepared layer was resized to.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Prepared candidates for one category.
    pub fn pool(&self, kind: CategoryKind) -> &[PreparedLayer] {
        &self.pools[kind.index()]
    }

    /// Candidate count per category, in compositing order.
    pub fn candidate_counts(&self) -> [(CategoryKind, usize); 6] {
        CategoryKind::ALL.map(|k| (k, self.pools[k.index()].len()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
