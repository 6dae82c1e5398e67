//! Fixed-size tiling of a large image and overlap tagging of the tiles.
//!
//! A full-resolution trail-camera frame is cut into a grid of equal-size
//! sub-images for training. The grid covers every pixel: when the image
//! extent is not an exact multiple of the block size, the last row/column of
//! tiles is shifted back so it ends flush with the image edge, overlapping
//! its neighbour instead of leaving a truncated strip.

use crate::region::{intersects_any, Region, Size, TaggedRegion};

/// Errors from tile-grid generation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    /// The requested block does not fit strictly inside the image extent.
    /// Tiling needs at least two tiles along an axis to be meaningful.
    #[error("block size {block} must be smaller than the image extent {extent}")]
    BlockTooLarge { block: u32, extent: u32 },
    #[error("block size must be positive")]
    EmptyBlock,
}

/// Starting offsets along one axis for tiles of `block_size` covering
/// `[0, extent)`.
///
/// Offsets advance in `block_size` steps through the last full multiple.
/// If pixels remain past that point, one extra offset at
/// `extent - block_size` is appended so the final tile ends exactly at the
/// image edge; it overlaps the previous tile by
/// `block_size - extent % block_size` pixels. With an exact fit there is no
/// extra offset.
///
/// ```
/// use trailcam_core::sub_image_offsets;
/// assert_eq!(sub_image_offsets(10, 45).unwrap(), vec![0, 10, 20, 30, 35]);
/// assert_eq!(sub_image_offsets(10, 40).unwrap(), vec![0, 10, 20, 30]);
/// ```
pub fn sub_image_offsets(block_size: u32, extent: u32) -> Result<Vec<u32>, TileError> {
    if block_size == 0 {
        return Err(TileError::EmptyBlock);
    }
    if block_size >= extent {
        return Err(TileError::BlockTooLarge {
            block: block_size,
            extent,
        });
    }

    let end = extent - extent % block_size;
    let mut offsets: Vec<u32> = (0..end).step_by(block_size as usize).collect();

    // Optional last entry for the leftover pixels.
    if extent % block_size > 0 {
        offsets.push(extent - block_size);
    }
    Ok(offsets)
}

/// All tile regions of `block` dimensions covering an image of `image`
/// dimensions, in row-major order (outer loop over y, inner over x).
///
/// Every returned region is exactly `block`-sized; consumers rely on the
/// row-major enumeration order for positional comparison, so it must not
/// change.
pub fn sub_image_regions(block: Size, image: Size) -> Result<Vec<Region>, TileError> {
    let x_offsets = sub_image_offsets(block.width, image.width)?;
    let y_offsets = sub_image_offsets(block.height, image.height)?;

    let mut regions = Vec::with_capacity(x_offsets.len() * y_offsets.len());
    for &y in &y_offsets {
        for &x in &x_offsets {
            regions.push(Region::new(
                x as i32,
                y as i32,
                block.width as i32,
                block.height as i32,
            ));
        }
    }
    Ok(regions)
}

/// Attach a training label to each tile: `true` iff the tile overlaps at
/// least one human-annotated region.
///
/// Output order matches `tiles` one-to-one. With no annotated regions every
/// tag is `false`.
pub fn tag_regions(tiles: &[Region], annotated: &[Region]) -> Vec<TaggedRegion> {
    tiles
        .iter()
        .map(|r| TaggedRegion::new(*r, intersects_any(r, annotated)))
        .collect()
}
