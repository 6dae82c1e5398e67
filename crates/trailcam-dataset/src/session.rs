use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use trailcam_core::ImageInfo;

/// Errors from reading or writing the session file.
#[derive(thiserror::Error, Debug)]
pub enum DatasetIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The persisted state of one annotation session.
///
/// `max_viewed` is the highest image index the annotator has reached; it
/// only ever moves forward. `current_index` is where the annotator left
/// off; older session files predate the field, so it defaults to 0 on load.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagesCollection {
    pub max_viewed: usize,
    #[serde(default)]
    pub current_index: usize,
    pub images: Vec<ImageInfo>,
}

impl ImagesCollection {
    /// Load a session from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, DatasetIoError> {
        let raw = fs::read_to_string(&path)?;
        let session: ImagesCollection = serde_json::from_str(&raw)?;
        log::debug!(
            "loaded {} images from {}",
            session.images.len(),
            path.as_ref().display()
        );
        Ok(session)
    }

    /// Write this session to disk as pretty JSON.
    ///
    /// Every region is normalized before serialization so the file never
    /// carries negative extents, whatever direction the user dragged in.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), DatasetIoError> {
        let mut normalized = self.clone();
        for image in &mut normalized.images {
            for region in &mut image.regions {
                *region = region.normalize();
            }
        }
        let json = serde_json::to_string_pretty(&normalized)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Record that the annotator has navigated to `index`.
    ///
    /// `current_index` follows the navigation; `max_viewed` never
    /// decreases.
    pub fn visit(&mut self, index: usize) {
        self.current_index = index;
        self.max_viewed = self.max_viewed.max(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trailcam_core::Region;

    fn sample() -> ImagesCollection {
        ImagesCollection {
            max_viewed: 2,
            current_index: 1,
            images: vec![
                ImageInfo::new("cam1/IMG_0001.JPG", vec![Region::new(10, 20, 30, 40)]),
                ImageInfo::untagged("cam1/IMG_0002.JPG"),
            ],
        }
    }

    #[test]
    fn json_roundtrip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animals.json");
        let session = sample();
        session.write_json(&path).unwrap();
        let back = ImagesCollection::load_json(&path).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn load_tolerates_missing_current_index() {
        let raw = r#"{
            "maxViewed": 7,
            "images": [
                { "tagged": false, "filePath": "cam1/IMG_0001.JPG", "regions": [] }
            ]
        }"#;
        let session: ImagesCollection = serde_json::from_str(raw).unwrap();
        assert_eq!(session.max_viewed, 7);
        assert_eq!(session.current_index, 0);
        assert_eq!(session.images.len(), 1);
    }

    #[test]
    fn write_normalizes_backward_drawn_regions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animals.json");
        let session = ImagesCollection {
            max_viewed: 0,
            current_index: 0,
            images: vec![ImageInfo::new(
                "cam1/IMG_0001.JPG",
                vec![Region::new(110, 225, -50, -75)],
            )],
        };
        session.write_json(&path).unwrap();
        let back = ImagesCollection::load_json(&path).unwrap();
        assert_eq!(back.images[0].regions[0], Region::new(60, 150, 50, 75));
    }

    #[test]
    fn visit_advances_max_viewed_monotonically() {
        let mut session = sample();
        session.visit(5);
        assert_eq!((session.current_index, session.max_viewed), (5, 5));
        session.visit(3);
        assert_eq!((session.current_index, session.max_viewed), (3, 5));
    }

    #[test]
    fn load_reports_missing_file_as_io_error() {
        let err = ImagesCollection::load_json("no/such/animals.json").unwrap_err();
        assert!(matches!(err, DatasetIoError::Io(_)));
    }
}
