//! Full extraction batch over a synthetic capture sequence in a temp dir.

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::SeedableRng;

use trailcam::extract::{run, run_with_rng, ExtractConfig};
use trailcam::{ImageInfo, ImagesCollection, Region, Size};

fn write_frame(path: &Path, width: u32, height: u32, value: u8) {
    let img = RgbImage::from_pixel(width, height, Rgb([value, value, value]));
    img.save(path).unwrap();
}

/// Three consecutive 8x8 frames in one folder; the second has an annotated
/// region in its top-left corner.
fn write_session(root: &Path) -> ExtractConfig {
    let cam = root.join("cam1");
    fs::create_dir_all(&cam).unwrap();
    write_frame(&cam.join("IMG_0001.png"), 8, 8, 10);
    write_frame(&cam.join("IMG_0002.png"), 8, 8, 30);
    write_frame(&cam.join("IMG_0003.png"), 8, 8, 50);

    let session = ImagesCollection {
        max_viewed: 2,
        current_index: 2,
        images: vec![
            ImageInfo::untagged(cam.join("IMG_0001.png").to_string_lossy()),
            ImageInfo::new(
                cam.join("IMG_0002.png").to_string_lossy(),
                vec![Region::new(0, 0, 2, 2)],
            ),
            ImageInfo::untagged(cam.join("IMG_0003.png").to_string_lossy()),
        ],
    };
    let session_path = root.join("animals.json");
    session.write_json(&session_path).unwrap();

    let mut config = ExtractConfig::new(
        session_path.to_string_lossy(),
        root.join("out").to_string_lossy(),
    );
    config.block = Size::new(4, 4);
    config
}

#[test]
fn batch_writes_labeled_tiles_with_augmentation() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = write_session(dir.path());
    // Deterministic: keep every negative tile.
    config.negative_keep_probability = 1.0;

    let stats = run(&config).unwrap();

    // One group of three frames; the first only seeds the differencing.
    assert_eq!(stats.groups, 1);
    assert_eq!(stats.images_processed, 2);
    assert_eq!(stats.images_skipped, 0);

    // 8x8 with 4x4 blocks is a 2x2 grid. Frame 2 has one positive tile
    // (saved 6 times with augmentation) and 3 negatives; frame 3 has 4
    // negatives.
    assert_eq!(stats.tiles_saved_true, 6);
    assert_eq!(stats.tiles_saved_false, 7);

    let true_files = fs::read_dir(dir.path().join("out/true")).unwrap().count();
    let false_files = fs::read_dir(dir.path().join("out/false")).unwrap().count();
    assert_eq!(true_files, 6);
    assert_eq!(false_files, 7);

    // The positive tile is the 4x4 diff crop at the origin of frame 2.
    let original = dir.path().join("out/true/IMG_0002_@0000x0000.png");
    let tile = image::open(&original).unwrap().to_rgb8();
    assert_eq!(tile.dimensions(), (4, 4));
    assert_eq!(*tile.get_pixel(0, 0), Rgb([20, 20, 20]));
}

#[test]
fn augmentation_can_be_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = write_session(dir.path());
    config.negative_keep_probability = 0.0;
    config.augment_positives = false;

    let mut rng = StdRng::seed_from_u64(42);
    let stats = run_with_rng(&config, &mut rng).unwrap();

    assert_eq!(stats.tiles_saved_true, 1);
    assert_eq!(stats.tiles_saved_false, 0);
}

#[test]
fn resolution_change_mid_sequence_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let cam = dir.path().join("cam1");
    fs::create_dir_all(&cam).unwrap();
    write_frame(&cam.join("IMG_0001.png"), 8, 8, 10);
    write_frame(&cam.join("IMG_0002.png"), 12, 8, 30);

    let session = ImagesCollection {
        max_viewed: 1,
        current_index: 1,
        images: vec![
            ImageInfo::untagged(cam.join("IMG_0001.png").to_string_lossy()),
            ImageInfo::untagged(cam.join("IMG_0002.png").to_string_lossy()),
        ],
    };
    let session_path = dir.path().join("animals.json");
    session.write_json(&session_path).unwrap();

    let mut config = ExtractConfig::new(
        session_path.to_string_lossy(),
        dir.path().join("out").to_string_lossy(),
    );
    config.block = Size::new(4, 4);
    config.negative_keep_probability = 1.0;

    let stats = run(&config).unwrap();
    assert_eq!(stats.images_processed, 0);
    assert_eq!(stats.images_skipped, 1);
    assert_eq!(stats.tiles_saved_true + stats.tiles_saved_false, 0);
}
