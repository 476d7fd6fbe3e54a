use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::PortrayResult;

/// File extensions treated as candidate images, matched case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

/// List candidate image files in one category directory.
///
/// Only regular files with a supported extension are returned. Results are
/// sorted by file name so a seeded run samples identically across platforms
/// and filesystems. An empty directory yields an empty list; an unreadable
/// directory is an error.
pub fn scan_category_dir(dir: &Path) -> PortrayResult<Vec<PathBuf>> {
    let rd = std::fs::read_dir(dir)
        .with_context(|| format!("read category directory '{}'", dir.display()))?;

    let mut out = Vec::new();
    for entry in rd {
        let entry = entry.with_context(|| format!("read entry in '{}'", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if has_supported_extension(&path) {
            out.push(path);
        }
    }

    out.sort();
    Ok(out)
}

fn has_supported_extension(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
        return false;
    };
    let ext = ext.to_ascii_lowercase();
    SUPPORTED_EXTENSIONS.contains(&ext.as_str())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/scan.rs"]
mod tests;
