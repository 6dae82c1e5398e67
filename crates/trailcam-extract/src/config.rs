use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use trailcam_core::Size;

use crate::ExtractError;

fn default_block() -> Size {
    // Matches the input size of the classifier being trained.
    Size::new(224, 224)
}

fn default_negative_keep_probability() -> f64 {
    // Untagged tiles vastly outnumber tagged ones; keeping them all would
    // drown the positives.
    0.075
}

fn default_augment_positives() -> bool {
    true
}

/// Settings for the tile-extraction batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Path to the annotation-session JSON file.
    pub session_path: String,
    /// Root output directory; `true/` and `false/` subfolders are created
    /// under it.
    pub out_dir: String,
    /// Dimensions of the extracted tiles.
    #[serde(default = "default_block")]
    pub block: Size,
    /// Chance of keeping any one negatively tagged tile.
    #[serde(default = "default_negative_keep_probability")]
    pub negative_keep_probability: f64,
    /// Save rotated/flipped copies of every positively tagged tile.
    #[serde(default = "default_augment_positives")]
    pub augment_positives: bool,
}

impl ExtractConfig {
    pub fn new(session_path: impl Into<String>, out_dir: impl Into<String>) -> Self {
        ExtractConfig {
            session_path: session_path.into(),
            out_dir: out_dir.into(),
            block: default_block(),
            negative_keep_probability: default_negative_keep_probability(),
            augment_positives: default_augment_positives(),
        }
    }

    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ExtractError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ExtractError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
