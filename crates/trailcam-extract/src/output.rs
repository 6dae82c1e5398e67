//! Output-file naming for extracted tiles.
//!
//! Tiles land in `<out_dir>/true/` or `<out_dir>/false/` according to their
//! tag. The file name keeps the source image's stem and extension and
//! embeds the tile's zero-padded origin so a directory listing stays
//! roughly sorted by position: `IMG_0042_@0224x0448.JPG`. Augmented copies
//! get a variant suffix before the extension.

use std::path::{Path, PathBuf};

use trailcam_core::TaggedRegion;

/// The subfolder (`true` or `false`) a tile belongs in.
pub fn tag_folder(tag: bool) -> &'static str {
    if tag {
        "true"
    } else {
        "false"
    }
}

/// Full output path for one tile of `source_path`, with an optional
/// augmentation variant suffix.
pub fn output_file_path(
    out_dir: &Path,
    source_path: &str,
    tile: &TaggedRegion,
    variant: Option<&str>,
) -> PathBuf {
    let source = Path::new(source_path);
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let ext = source
        .extension()
        .map(|s| format!(".{}", s.to_string_lossy()))
        .unwrap_or_default();

    let variant = match variant {
        Some(v) => format!("_{v}"),
        None => String::new(),
    };
    let name = format!(
        "{stem}_@{:04}x{:04}{variant}{ext}",
        tile.region.x, tile.region.y
    );
    out_dir.join(tag_folder(tile.tag)).join(name)
}
