//! Annotation-session persistence for trail-camera datasets.
//!
//! The annotation tool keeps its whole session in one JSON file
//! (historically `animals.json`): the list of photos, the rectangles drawn
//! on each, and how far through the set the annotator has been. This crate
//! owns that schema and its load/save path; the geometry itself lives in
//! `trailcam-core`.

mod session;

pub use session::{DatasetIoError, ImagesCollection};
