//! Grouping of annotated images into contiguous capture sequences.
//!
//! Motion-triggered cameras write bursts of consecutively numbered frames
//! into one folder. Frame differencing (subtracting each frame from its
//! predecessor to suppress static background) is only valid between frames
//! of the same burst, so images are grouped by folder and strictly
//! consecutive file index before extraction.

use std::path::{Path, PathBuf};

use crate::ImageInfo;

/// Errors from sequence grouping.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// The file-name stem carries no digit run, so no sequence index can be
    /// extracted. Skipping such an image would silently corrupt group
    /// adjacency, so the whole grouping fails instead.
    #[error("file name has no sequence number: {path}")]
    MalformedFileName { path: String },
}

/// The sequence index of an image file: the first run of decimal digits in
/// its file-name stem (`IMG_0042.JPG` → 42).
fn sequence_index(path: &Path) -> Result<u64, GroupError> {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    let digits: String = stem
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits
        .parse()
        .map_err(|_| GroupError::MalformedFileName {
            path: path.display().to_string(),
        })
}

/// Partition `images` into maximal runs sharing a parent folder with
/// file indices increasing by exactly 1 between consecutive entries.
///
/// The partition preserves input order: concatenating the groups yields the
/// original list. A folder change, an index gap, or a repeated index all
/// start a new group; mere sortedness is not enough, consecutive frames
/// must be strictly adjacent (`index == previous + 1`) to be differenced.
pub fn group_images(images: &[ImageInfo]) -> Result<Vec<Vec<ImageInfo>>, GroupError> {
    let mut groups: Vec<Vec<ImageInfo>> = Vec::new();
    let mut current: Vec<ImageInfo> = Vec::new();
    let mut previous: Option<(PathBuf, u64)> = None;

    for image in images {
        let file_path = Path::new(&image.file_path);
        let parent = file_path.parent().unwrap_or_else(|| Path::new(""));
        let index = sequence_index(file_path)?;

        let continues_run = previous
            .as_ref()
            .is_some_and(|(prev_parent, prev_index)| {
                prev_parent == parent && index == prev_index + 1
            });
        if !continues_run && !current.is_empty() {
            log::debug!("new group at {} (index {index})", file_path.display());
            groups.push(std::mem::take(&mut current));
        }

        current.push(image.clone());
        previous = Some((parent.to_path_buf(), index));
    }
    if !current.is_empty() {
        groups.push(current);
    }

    Ok(groups)
}
