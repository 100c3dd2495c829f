//! 動画ファイルの確認（アップロードはしない）

use crate::error::ValidationError;
use std::path::{Path, PathBuf};

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "m4v", "webm", "mkv", "avi", "3gp"];

pub fn is_video_extension(ext: &str) -> bool {
    VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str())
}

/// 存在する動画ファイルならそのパスを返す
pub fn check_video_file(path: &Path) -> Result<PathBuf, ValidationError> {
    if !path.is_file() {
        return Err(ValidationError::InvalidVideo(format!(
            "{} does not exist",
            path.display()
        )));
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default();
    if !is_video_extension(&ext) {
        return Err(ValidationError::InvalidVideo(format!(
            "{} is not a video (expected {})",
            path.display(),
            VIDEO_EXTENSIONS.join("/")
        )));
    }

    Ok(path.to_path_buf())
}
