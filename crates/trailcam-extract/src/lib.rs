//! Batch extraction of labeled training tiles from annotated trail-camera
//! sequences.
//!
//! The input is an annotation session (`trailcam-dataset`) whose images are
//! grouped into capture bursts (`trailcam-core`); the output is a folder of
//! fixed-size sub-images sorted into `true/` and `false/` classes, ready
//! for classifier training.

mod augment;
mod config;
mod error;
mod output;
mod pipeline;

pub use augment::augmented_variants;
pub use config::ExtractConfig;
pub use error::ExtractError;
pub use output::{output_file_path, tag_folder};
pub use pipeline::{frame_diff, run, run_with_rng, ExtractStats};
