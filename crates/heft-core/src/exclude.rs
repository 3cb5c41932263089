//! Fixed media-extension exclusion data.
//!
//! Files with these extensions are never reported, regardless of size.

use std::path::Path;

/// Video file extensions, lowercase, without the leading dot.
pub const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "mov", "avi", "mkv", "flv", "wmv", "webm", "m4v", "mpg", "mpeg", "3gp", "3g2", "mxf",
    "ogv",
];

/// Photo file extensions, lowercase, without the leading dot.
pub const PHOTO_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "tiff", "tif", "webp", "svg", "ico", "heic", "heif", "raw",
    "psd", "ai",
];

/// Check whether an already-lowercased extension is a known media type.
pub fn is_media_extension(ext: &str) -> bool {
    VIDEO_EXTENSIONS.contains(&ext) || PHOTO_EXTENSIONS.contains(&ext)
}

/// Check whether a path names a media file.
///
/// The extension is the portion of the file name after the last `.`,
/// compared case-insensitively. A file without an extension never matches.
pub fn is_media_file(path: &Path) -> bool {
    match path.extension() {
        Some(ext) => is_media_extension(&ext.to_string_lossy().to_lowercase()),
        None => false,
    }
}
