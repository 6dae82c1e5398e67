//! Augmented variants of positively tagged tiles.
//!
//! Animal tiles are rare, so each one is also saved rotated and flipped to
//! stretch the positive class. The variant names are embedded in the output
//! file names and must stay stable across runs, otherwise re-running the
//! batch duplicates files under new names.

use image::{imageops, RgbImage};

/// All augmented copies of a positive tile, paired with their file-name
/// variant suffix. The unmodified original is not included.
pub fn augmented_variants(tile: &RgbImage) -> Vec<(&'static str, RgbImage)> {
    vec![
        ("rotate_90°c", imageops::rotate90(tile)),
        ("rotate_90°cc", imageops::rotate270(tile)),
        ("flipped_x", imageops::flip_horizontal(tile)),
        ("flipped_y", imageops::flip_vertical(tile)),
        ("flipped_xy", imageops::rotate180(tile)),
    ]
}
