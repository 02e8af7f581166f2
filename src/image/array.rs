//! Owned multi-channel array in row-major `(height, width, channels)` layout.
//!
//! This is what [`crate::Canvas::to_array`] hands out: a plain copy of the
//! pixel buffer that callers can feed to numeric code without touching the
//! `image` crate types.

/// Dense array indexed as `(y, x, channel)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Array<T> {
    /// Rows
    pub h: usize,
    /// Columns
    pub w: usize,
    /// Values per pixel (3 for RGB, 1 otherwise)
    pub channels: usize,
    /// Backing storage in row-major, channel-interleaved order
    pub data: Vec<T>,
}

impl<T: Copy> Array<T> {
    pub fn new(h: usize, w: usize, channels: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), h * w * channels);
        Self {
            h,
            w,
            channels,
            data,
        }
    }

    pub fn shape(&self) -> (usize, usize, usize) {
        (self.h, self.w, self.channels)
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, c: usize) -> usize {
        (y * self.w + x) * self.channels + c
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, c: usize) -> T {
        self.data[self.idx(x, y, c)]
    }

    pub fn map<U: Copy>(&self, f: impl Fn(T) -> U) -> Array<U> {
        Array::new(
            self.h,
            self.w,
            self.channels,
            self.data.iter().copied().map(f).collect(),
        )
    }
}

/// Canvas contents with the element type implied by mode and normalization.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasArray {
    /// Binary canvases, normalized or not.
    Binary(Array<bool>),
    /// 8-bit channels as stored.
    Raw(Array<u8>),
    /// 8-bit channels scaled into `[0, 1]`.
    Normalized(Array<f32>),
}

impl CanvasArray {
    pub fn shape(&self) -> (usize, usize, usize) {
        match self {
            CanvasArray::Binary(a) => a.shape(),
            CanvasArray::Raw(a) => a.shape(),
            CanvasArray::Normalized(a) => a.shape(),
        }
    }

    pub fn as_binary(&self) -> Option<&Array<bool>> {
        match self {
            CanvasArray::Binary(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> Option<&Array<u8>> {
        match self {
            CanvasArray::Raw(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_normalized(&self) -> Option<&Array<f32>> {
        match self {
            CanvasArray::Normalized(a) => Some(a),
            _ => None,
        }
    }
}
