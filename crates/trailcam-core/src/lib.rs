//! Core types and algorithms for trail-camera training-data curation.
//!
//! This crate is intentionally small and purely geometric/combinatorial. It
//! does *not* touch pixel data or the filesystem: image decoding, session
//! persistence, and sub-image writing live in the `trailcam-dataset` and
//! `trailcam-extract` crates.

mod annotation;
mod grouping;
mod logger;
mod region;
mod tiles;

pub use annotation::ImageInfo;
pub use grouping::{group_images, GroupError};
pub use logger::init_with_level;
pub use region::{intersects_any, Region, Size, TaggedRegion};
pub use tiles::{sub_image_offsets, sub_image_regions, tag_regions, TileError};
