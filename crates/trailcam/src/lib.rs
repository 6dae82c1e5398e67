//! High-level facade crate for the `trailcam-*` workspace.
//!
//! This crate provides stable re-exports of the underlying crates and the
//! `trailcam` CLI binary (feature `cli`) that runs the extraction batch.
//!
//! ## Quickstart
//!
//! ```
//! use trailcam::core::{sub_image_regions, tag_regions, Region, Size};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tiles = sub_image_regions(Size::new(224, 224), Size::new(1920, 1080))?;
//! let annotated = [Region::new(600, 400, 180, 150)];
//! let tagged = tag_regions(&tiles, &annotated);
//! println!("{} positive tiles", tagged.iter().filter(|t| t.tag).count());
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - [`core`]: regions, tile grids, tagging, sequence grouping.
//! - [`dataset`]: the annotation-session JSON file.
//! - [`extract`]: the batch that writes `true/`/`false/` training tiles.

pub use trailcam_core as core;
pub use trailcam_dataset as dataset;
pub use trailcam_extract as extract;

pub use trailcam_core::{ImageInfo, Region, Size, TaggedRegion};
pub use trailcam_dataset::ImagesCollection;
pub use trailcam_extract::{ExtractConfig, ExtractStats};
