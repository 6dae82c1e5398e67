//! The extraction batch: annotated sequences in, labeled tiles out.
//!
//! Each image group (same folder, consecutive frame numbers) is walked in
//! order; every frame past the first is differenced against its
//! predecessor to suppress static background, the diff is cut into tiles,
//! and each tile is saved under `true/` or `false/` according to its
//! overlap with the annotated regions.

use std::fs;
use std::path::Path;

use image::{imageops, RgbImage};
use log::{info, warn};
use rand::Rng;

use trailcam_core::{group_images, sub_image_regions, tag_regions, Size, TaggedRegion};
use trailcam_dataset::ImagesCollection;

use crate::augment::augmented_variants;
use crate::output::{output_file_path, tag_folder};
use crate::{ExtractConfig, ExtractError};

/// Counters describing one completed batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub groups: usize,
    pub images_processed: usize,
    pub images_skipped: usize,
    pub tiles_saved_true: usize,
    pub tiles_saved_false: usize,
}

/// Pixel-wise wrapping subtraction of two equal-sized frames.
///
/// Wrapping on u8 matches the numpy-era behavior of `current - previous`;
/// static pixels come out near 0 (or 255) and moving subjects stand out.
pub fn frame_diff(current: &RgbImage, previous: &RgbImage) -> RgbImage {
    debug_assert_eq!(current.dimensions(), previous.dimensions());
    let mut diff = current.clone();
    for (d, p) in diff.iter_mut().zip(previous.iter()) {
        *d = d.wrapping_sub(*p);
    }
    diff
}

/// Run the extraction batch described by `config`.
pub fn run(config: &ExtractConfig) -> Result<ExtractStats, ExtractError> {
    run_with_rng(config, &mut rand::thread_rng())
}

/// Same as [`run`] but with a caller-supplied random source, so the
/// negative-tile subsampling can be made deterministic.
pub fn run_with_rng(
    config: &ExtractConfig,
    rng: &mut impl Rng,
) -> Result<ExtractStats, ExtractError> {
    let session = ImagesCollection::load_json(&config.session_path)?;
    let groups = group_images(&session.images)?;

    let out_dir = Path::new(&config.out_dir);
    info!("output folder: {}", out_dir.display());
    fs::create_dir_all(out_dir.join(tag_folder(true)))?;
    fs::create_dir_all(out_dir.join(tag_folder(false)))?;

    let mut stats = ExtractStats {
        groups: groups.len(),
        ..ExtractStats::default()
    };

    for (group_number, group) in groups.iter().enumerate() {
        info!("group #{} of {}", group_number + 1, groups.len());
        let mut previous: Option<RgbImage> = None;

        for image_info in group {
            let current = image::open(&image_info.file_path)?.to_rgb8();

            // The first frame of a group only seeds the differencing.
            let Some(prev) = previous.take() else {
                previous = Some(current);
                continue;
            };

            // Cameras occasionally change resolution mid-sequence; such a
            // frame cannot be differenced against its predecessor.
            if prev.dimensions() != current.dimensions() {
                warn!(
                    "frame size changed at {}, skipping",
                    image_info.file_path
                );
                stats.images_skipped += 1;
                previous = Some(current);
                continue;
            }

            info!("processing {}", image_info.file_path);
            let diff = frame_diff(&current, &prev);
            let image_size = Size::new(current.width(), current.height());
            let tiles = sub_image_regions(config.block, image_size)?;
            let tagged = tag_regions(&tiles, &image_info.regions);

            for tile in &tagged {
                save_tile(config, out_dir, &image_info.file_path, tile, &diff, rng, &mut stats)?;
            }

            stats.images_processed += 1;
            previous = Some(current);
        }
    }

    info!(
        "saved {} positive and {} negative tiles from {} images",
        stats.tiles_saved_true, stats.tiles_saved_false, stats.images_processed
    );
    Ok(stats)
}

fn save_tile(
    config: &ExtractConfig,
    out_dir: &Path,
    source_path: &str,
    tile: &TaggedRegion,
    diff: &RgbImage,
    rng: &mut impl Rng,
    stats: &mut ExtractStats,
) -> Result<(), ExtractError> {
    let r = tile.region;
    let sub = imageops::crop_imm(diff, r.x as u32, r.y as u32, r.w as u32, r.h as u32).to_image();

    if tile.tag {
        sub.save(output_file_path(out_dir, source_path, tile, None))?;
        stats.tiles_saved_true += 1;
        if config.augment_positives {
            for (variant, img) in augmented_variants(&sub) {
                img.save(output_file_path(out_dir, source_path, tile, Some(variant)))?;
                stats.tiles_saved_true += 1;
            }
        }
    } else if rng.gen::<f64>() < config.negative_keep_probability {
        sub.save(output_file_path(out_dir, source_path, tile, None))?;
        stats.tiles_saved_false += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid(width: u32, height: u32, value: u8) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb([value, value, value]))
    }

    #[test]
    fn frame_diff_of_identical_frames_is_zero() {
        let a = solid(4, 4, 77);
        let diff = frame_diff(&a, &a);
        assert!(diff.iter().all(|&v| v == 0));
    }

    #[test]
    fn frame_diff_wraps_below_zero() {
        let current = solid(2, 2, 10);
        let previous = solid(2, 2, 20);
        let diff = frame_diff(&current, &previous);
        assert!(diff.iter().all(|&v| v == 246));
    }

    #[test]
    fn frame_diff_highlights_changed_pixels() {
        let previous = solid(4, 4, 100);
        let mut current = solid(4, 4, 100);
        current.put_pixel(2, 1, Rgb([180, 100, 100]));
        let diff = frame_diff(&current, &previous);
        assert_eq!(*diff.get_pixel(2, 1), Rgb([80, 0, 0]));
        assert_eq!(*diff.get_pixel(0, 0), Rgb([0, 0, 0]));
    }
}
