//! Portray turns directories of layered transparent images into randomly
//! sampled character portraits.
//!
//! Each of the six fixed categories (background, hairstyle, eyes, beard,
//! head, clothes) maps to a source directory of candidate images. One run
//! produces `M` portraits; every portrait independently samples one candidate
//! per category, and the samples are alpha-composited in category order onto
//! a fixed-size canvas, then flattened to opaque RGB and written as
//! `variation_1.png` .. `variation_M.png`.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: load a [`Manifest`] (canvas, count, seed, category
//!    directories, output directory)
//! 2. **Prepare**: `Manifest -> PreparedLayerStore` (scan, decode, resize;
//!    all IO is front-loaded here)
//! 3. **Compose**: `PreparedLayerStore + Rng -> FrameRgba` per portrait
//!    (pure, IO-free "over" blending)
//! 4. **Write**: flatten over the backing color and save each frame as an
//!    opaque PNG
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No IO in composition**: decoding and resizing happen once in
//!   [`PreparedLayerStore::prepare`]; sampling and blending never touch the
//!   filesystem.
//! - **Injectable randomness**: every sampling entry point is generic over
//!   [`rand::Rng`], so a seeded generator reproduces a run exactly.
//! - **Premultiplied RGBA8** during composition; outputs are flattened to
//!   straight RGB8.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;
mod manifest;
mod render;

pub use assets::decode::decode_rgba8;
pub use assets::scan::{SUPPORTED_EXTENSIONS, scan_category_dir};
pub use assets::store::{PreparedLayer, PreparedLayerStore};
pub use foundation::core::Canvas;
pub use foundation::error::{PortrayError, PortrayResult};
pub use manifest::model::{BackingColor, CategoryDirs, CategoryKind, Manifest};
pub use render::compose::{FrameRgba, compose_variation};
pub use render::composite::{PremulRgba8, flatten_over_backing, over, over_in_place};
pub use render::pipeline::{GenerateStats, generate_variations, variation_file_name};
