use trailcam_core::{GroupError, TileError};
use trailcam_dataset::DatasetIoError;

/// Errors from the tile-extraction batch.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error(transparent)]
    Tile(#[from] TileError),
    #[error(transparent)]
    Group(#[from] GroupError),
    #[error(transparent)]
    Dataset(#[from] DatasetIoError),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
