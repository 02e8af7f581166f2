//! I/O helpers for encoded images and JSON.
//!
//! - `parse_format`: map a format name such as `"PNG"` to an encoder.
//! - `save_dynamic`: write a decoded image, creating parent directories.
//! - `load_dynamic`: read a PNG/JPEG/BMP into a `DynamicImage`.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::error::{Error, Result};
use image::{DynamicImage, ImageFormat};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Resolve a format name (case-insensitive, `"jpg"` and `"jpeg"` both work)
/// to an image format this build can encode.
pub fn parse_format(name: &str) -> Result<ImageFormat> {
    ImageFormat::from_extension(name.trim().to_ascii_lowercase())
        .filter(|f| f.writing_enabled())
        .ok_or_else(|| Error::UnknownFormat(name.to_string()))
}

/// Encode `image` to `path` using `format`.
pub fn save_dynamic(image: &DynamicImage, path: &Path, format: ImageFormat) -> Result<()> {
    ensure_parent_dir(path)?;
    image
        .save_with_format(path, format)
        .map_err(|source| Error::Image {
            path: path.to_path_buf(),
            source,
        })
}

/// Decode an image from disk, guessing the format from its contents.
pub fn load_dynamic(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| Error::Image {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_are_case_insensitive() {
        assert_eq!(parse_format("PNG").unwrap(), ImageFormat::Png);
        assert_eq!(parse_format("jpg").unwrap(), ImageFormat::Jpeg);
        assert_eq!(parse_format("Jpeg").unwrap(), ImageFormat::Jpeg);
        assert!(matches!(parse_format("xyz"), Err(Error::UnknownFormat(_))));
    }
}
