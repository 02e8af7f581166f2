use crate::error::{Error, Result};
use serde::Serialize;

/// Axis-aligned pixel box with `x_min < x_max` and `y_min < y_max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    x_min: u32,
    y_min: u32,
    x_max: u32,
    y_max: u32,
}

impl BoundingBox {
    pub fn new(x_min: u32, y_min: u32, x_max: u32, y_max: u32) -> Result<Self> {
        if x_min >= x_max || y_min >= y_max {
            return Err(Error::InvalidBox {
                x_min,
                y_min,
                x_max,
                y_max,
            });
        }
        Ok(Self {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    #[inline]
    pub fn x_min(&self) -> u32 {
        self.x_min
    }
    #[inline]
    pub fn y_min(&self) -> u32 {
        self.y_min
    }
    #[inline]
    pub fn x_max(&self) -> u32 {
        self.x_max
    }
    #[inline]
    pub fn y_max(&self) -> u32 {
        self.y_max
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.y_max - self.y_min
    }

    /// True when the box lies inside `[0, width] × [0, height]`.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x_max <= width && self.y_max <= height
    }

    /// Closed 5-point outline of the box, clockwise from the top-left corner.
    pub fn to_coords(&self) -> [[i32; 2]; 5] {
        let (x0, y0) = (self.x_min as i32, self.y_min as i32);
        let (x1, y1) = (self.x_max as i32, self.y_max as i32);
        [[x0, y0], [x1, y0], [x1, y1], [x0, y1], [x0, y0]]
    }

    /// Half extents of the inscribed ellipse, rounded down.
    pub fn radii(&self) -> (i32, i32) {
        ((self.width() / 2) as i32, (self.height() / 2) as i32)
    }

    /// Integer centers whose [`radii`](Self::radii)-sized ellipses together
    /// cover the box from `min` to `max` inclusive. An odd extent has its
    /// true center between two pixels and contributes both of them, so one,
    /// two or four centers come back.
    pub fn ellipse_centers(&self) -> Vec<(i32, i32)> {
        let xs = axis_centers(self.x_min, self.x_max);
        let ys = axis_centers(self.y_min, self.y_max);
        xs.iter()
            .flat_map(|&x| ys.iter().map(move |&y| (x, y)))
            .collect()
    }
}

fn axis_centers(min: u32, max: u32) -> Vec<i32> {
    let mid = ((min + max) / 2) as i32;
    if (max - min) % 2 == 1 {
        vec![mid, mid + 1]
    } else {
        vec![mid]
    }
}

impl TryFrom<(u32, u32, u32, u32)> for BoundingBox {
    type Error = Error;

    fn try_from((x_min, y_min, x_max, y_max): (u32, u32, u32, u32)) -> Result<Self> {
        BoundingBox::new(x_min, y_min, x_max, y_max)
    }
}
