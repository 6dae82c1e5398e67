use serde::{Deserialize, Serialize};

use crate::Region;

/// One captured photo and the regions a human annotator has drawn on it.
///
/// Wire names are camelCase to stay compatible with the session files the
/// annotation tool has already written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageInfo {
    /// True iff `regions` is non-empty. Maintained by constructors and by
    /// whoever mutates `regions`; grouping and tagging treat `regions` as
    /// the authoritative list.
    pub tagged: bool,
    pub file_path: String,
    pub regions: Vec<Region>,
}

impl ImageInfo {
    /// Build an entry for `file_path`, deriving `tagged` from `regions`.
    pub fn new(file_path: impl Into<String>, regions: Vec<Region>) -> Self {
        ImageInfo {
            tagged: !regions.is_empty(),
            file_path: file_path.into(),
            regions,
        }
    }

    /// An entry with no annotations yet.
    pub fn untagged(file_path: impl Into<String>) -> Self {
        ImageInfo::new(file_path, Vec::new())
    }
}
