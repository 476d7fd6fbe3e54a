use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::core::Canvas;
use crate::foundation::error::{PortrayError, PortrayResult};

/// The six fixed portrait layer categories, in compositing order.
///
/// Layers are stacked bottom-up in this order, so later categories are drawn
/// on top of earlier ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    /// Backdrop behind the character.
    Background,
    /// Hairstyle layer.
    Hairstyle,
    /// Eyes or sunglasses layer.
    Eyes,
    /// Beard or moustache layer.
    Beard,
    /// Head type layer.
    Head,
    /// Clothes layer, drawn on top of everything else.
    Clothes,
}

impl CategoryKind {
    /// All categories in compositing order (bottom layer first).
    pub const ALL: [CategoryKind; 6] = [
        CategoryKind::Background,
        CategoryKind::Hairstyle,
        CategoryKind::Eyes,
        CategoryKind::Beard,
        CategoryKind::Head,
        CategoryKind::Clothes,
    ];

    /// Stable lowercase label, matching the manifest field names.
    pub fn label(self) -> &'static str {
        match self {
            CategoryKind::Background => "background",
            CategoryKind::Hairstyle => "hairstyle",
            CategoryKind::Eyes => "eyes",
            CategoryKind::Beard => "beard",
            CategoryKind::Head => "head",
            CategoryKind::Clothes => "clothes",
        }
    }

    /// Zero-based layer position used to index per-category storage.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One candidate-image source directory per category.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CategoryDirs {
    /// Background image directory.
    pub background: PathBuf,
    /// Hairstyle image directory.
    pub hairstyle: PathBuf,
    /// Eyes/sunglasses image directory.
    pub eyes: PathBuf,
    /// Beard/moustache image directory.
    pub beard: PathBuf,
    /// Head type image directory.
    pub head: PathBuf,
    /// Clothes image directory.
    pub clothes: PathBuf,
}

impl CategoryDirs {
    /// Source directory for `kind`.
    pub fn dir(&self, kind: CategoryKind) -> &Path {
        match kind {
            CategoryKind::Background => &self.background,
            CategoryKind::Hairstyle => &self.hairstyle,
            CategoryKind::Eyes => &self.eyes,
            CategoryKind::Beard => &self.beard,
            CategoryKind::Head => &self.head,
            CategoryKind::Clothes => &self.clothes,
        }
    }

    /// Iterate `(kind, dir)` pairs in compositing order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryKind, &Path)> {
        CategoryKind::ALL.into_iter().map(|k| (k, self.dir(k)))
    }
}

/// Opaque backing color flattened under the finished composite.
///
/// Uncovered canvas pixels come out as this color in the final opaque PNG.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackingColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Default for BackingColor {
    /// White, the classic paper-like portrait backing.
    fn default() -> Self {
        Self {
            r: 255,
            g: 255,
            b: 255,
        }
    }
}

impl BackingColor {
    /// Channels as an `[r, g, b]` array.
    pub fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

fn parse_hex(s: &str) -> Result<BackingColor, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if s.len() != 6 {
        return Err("backing color must be #RRGGBB (case-insensitive)".to_owned());
    }

    Ok(BackingColor {
        r: hex_byte(&s[0..2])?,
        g: hex_byte(&s[2..4])?,
        b: hex_byte(&s[4..6])?,
    })
}

impl serde::Serialize for BackingColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b))
    }
}

impl<'de> serde::Deserialize<'de> for BackingColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Complete configuration for one generation run.
///
/// This is the explicit value-object replacement for interactive directory
/// selection: everything a run needs is named here, and the library never
/// reads configuration from anywhere else.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Manifest {
    /// Output canvas, defaults to 250x350.
    #[serde(default)]
    pub canvas: Canvas,
    /// Requested number of output portraits (M).
    pub variations: u32,
    /// Optional RNG seed; omit for a fresh sampling every run.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Backing color for uncovered pixels, defaults to `#ffffff`.
    #[serde(default)]
    pub backing: BackingColor,
    /// Directory receiving `variation_<i>.png` files (created if absent).
    pub output_dir: PathBuf,
    /// Candidate source directories, one per category.
    pub categories: CategoryDirs,
}

impl Manifest {
    /// Read and JSON-decode a manifest from `path`.
    pub fn from_path(path: impl AsRef<Path>) -> PortrayResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read manifest '{}'", path.display()))?;
        serde_json::from_str(&text)
            .map_err(|e| PortrayError::serde(format!("parse manifest '{}': {e}", path.display())))
    }

    /// Validate interface-level constraints before any side effects.
    ///
    /// The generation loop itself accepts any count, including zero; this is
    /// the user-facing gate that rejects nonsensical runs up front.
    pub fn validate(&self) -> PortrayResult<()> {
        if self.variations == 0 {
            return Err(PortrayError::validation(
                "variation count must be a positive integer",
            ));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(PortrayError::validation("canvas dimensions must be > 0"));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(PortrayError::validation("output_dir must be selected"));
        }
        for (kind, dir) in self.categories.iter() {
            if dir.as_os_str().is_empty() {
                return Err(PortrayError::validation(format!(
                    "category '{kind}' has no source directory"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/manifest/model.rs"]
mod tests;
