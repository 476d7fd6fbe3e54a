use rand::Rng;
use rand::seq::IndexedRandom;

use crate::{
    assets::store::PreparedLayerStore,
    foundation::error::PortrayResult,
    manifest::model::CategoryKind,
    render::composite,
};

/// One composed portrait in premultiplied RGBA8 form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major premultiplied RGBA8 pixel bytes.
    pub data: Vec<u8>,
}

/// Compose a single portrait by sampling one layer per category.
///
/// Starting from a fully transparent canvas, each category pool in
/// compositing order contributes one uniformly sampled prepared layer; empty
/// pools contribute nothing. The call is pure given the store and the
/// generator state, and carries no state between invocations.
pub fn compose_variation<R: Rng + ?Sized>(
    store: &PreparedLayerStore,
    rng: &mut R,
) -> PortrayResult<FrameRgba> {
    let canvas = store.canvas();
    let mut data = vec![0u8; canvas.rgba8_len()];

    for kind in CategoryKind::ALL {
        let Some(layer) = store.pool(kind).choose(rng) else {
            continue;
        };
        composite::over_in_place(&mut data, &layer.rgba8_premul)?;
        tracing::trace!(category = %kind, source = %layer.source.display(), "sampled layer");
    }

    Ok(FrameRgba {
        width: canvas.width,
        height: canvas.height,
        data,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
