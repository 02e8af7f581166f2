//! Crate-wide error type.
use std::path::PathBuf;

use crate::types::Mode;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("canvas size must be non-zero, got {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("minimum size fraction must lie in [0, 1), got {0}")]
    InvalidFraction(f64),

    #[error("no {min_px}px region fits a canvas axis of {extent}px")]
    InfeasibleRegion { min_px: u32, extent: u32 },

    #[error("a polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("bounding box ({x_min}, {y_min}, {x_max}, {y_max}) is degenerate")]
    InvalidBox {
        x_min: u32,
        y_min: u32,
        x_max: u32,
        y_max: u32,
    },

    #[error("bounding box exceeds the {width}x{height} canvas")]
    BoxOutOfBounds { width: u32, height: u32 },

    #[error("color value {value} is out of range for {mode} mode")]
    ColorOutOfRange { value: u32, mode: Mode },

    #[error("{mode} mode expects {expected} color channel(s), got {got}")]
    ChannelMismatch {
        mode: Mode,
        expected: usize,
        got: usize,
    },

    #[error("cannot parse color {0:?}")]
    UnknownColor(String),

    #[error("unsupported image format {0:?}")]
    UnknownFormat(String),

    #[error("image codec failure on {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("i/o failure on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
