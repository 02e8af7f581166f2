//! Pixel canvas backed by `image` buffers.
//!
//! A [`Canvas`] owns a buffer whose size and pixel format never change after
//! construction. Binary canvases keep one byte per pixel holding 0 or 1 and
//! are widened to 0/255 only when encoded to a file.
use crate::color::Color;
use crate::error::{Error, Result};
use crate::geometry::BoundingBox;
use crate::image::io::{load_dynamic, save_dynamic};
use crate::image::{Array, CanvasArray};
use crate::types::{Mode, PixelColor};
use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_ellipse_mut, draw_polygon_mut};
use imageproc::point::Point;
use log::{debug, warn};
use rand::Rng;
use std::path::Path;

#[derive(Clone, Debug)]
enum PixelBuffer {
    Rgb(RgbImage),
    Gray(GrayImage),
    /// Values are 0 or 1.
    Binary(GrayImage),
}

#[derive(Clone, Debug)]
pub struct Canvas {
    mode: Mode,
    buffer: PixelBuffer,
}

impl Canvas {
    /// Allocate a zero-filled canvas.
    pub fn new(width: u32, height: u32, mode: Mode) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidSize { width, height });
        }
        let buffer = match mode {
            Mode::Rgb => PixelBuffer::Rgb(RgbImage::new(width, height)),
            Mode::Gray => PixelBuffer::Gray(GrayImage::new(width, height)),
            Mode::Binary => PixelBuffer::Binary(GrayImage::new(width, height)),
        };
        Ok(Self { mode, buffer })
    }

    /// Paint the background.
    ///
    /// An explicit color fills every pixel uniformly. `Color::RandomUniform`
    /// draws every channel of every pixel independently.
    pub fn create<R: Rng + ?Sized>(&mut self, color: &Color, rng: &mut R) -> Result<&mut Self> {
        if color.is_random() {
            let max = self.mode.max_value();
            for v in self.raw_mut() {
                *v = rng.gen_range(0..max) as u8;
            }
            debug!(
                "Canvas::create random {} {}x{}",
                self.mode,
                self.width(),
                self.height()
            );
        } else {
            let px = color.resolve(self.mode, rng)?;
            match &mut self.buffer {
                PixelBuffer::Rgb(img) => img.pixels_mut().for_each(|p| *p = Rgb(px.to_rgb())),
                PixelBuffer::Gray(img) => {
                    img.pixels_mut().for_each(|p| *p = Luma([px.to_luma()]))
                }
                PixelBuffer::Binary(img) => {
                    let v = binary_level(px);
                    img.pixels_mut().for_each(|p| *p = Luma([v]))
                }
            }
        }
        Ok(self)
    }

    pub fn width(&self) -> u32 {
        match &self.buffer {
            PixelBuffer::Rgb(img) => img.width(),
            PixelBuffer::Gray(img) | PixelBuffer::Binary(img) => img.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match &self.buffer {
            PixelBuffer::Rgb(img) => img.height(),
            PixelBuffer::Gray(img) | PixelBuffer::Binary(img) => img.height(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Pixel at `(x, y)`; panics when out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> PixelColor {
        match &self.buffer {
            PixelBuffer::Rgb(img) => PixelColor::Rgb(img.get_pixel(x, y).0),
            PixelBuffer::Gray(img) | PixelBuffer::Binary(img) => {
                PixelColor::Luma(img.get_pixel(x, y).0[0])
            }
        }
    }

    /// Copy of the buffer as a `(height, width, channels)` array.
    ///
    /// With `normalize`, 8-bit modes are divided by 255 into `[0, 1]`. Binary
    /// canvases always come back as booleans.
    pub fn to_array(&self, normalize: bool) -> CanvasArray {
        let h = self.height() as usize;
        let w = self.width() as usize;
        let raw = Array::new(h, w, self.mode.channels(), self.raw().to_vec());
        match self.mode {
            Mode::Binary => CanvasArray::Binary(raw.map(|v| v != 0)),
            _ if normalize => {
                let scale = (self.mode.max_value() - 1) as f32;
                CanvasArray::Normalized(raw.map(|v| f32::from(v) / scale))
            }
            _ => CanvasArray::Raw(raw),
        }
    }

    /// Encode as PNG.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_with_format(path, ImageFormat::Png)
    }

    /// Encode with an explicit format. Encoder errors are returned unchanged.
    pub fn save_with_format(&self, path: impl AsRef<Path>, format: ImageFormat) -> Result<()> {
        let path = path.as_ref();
        save_dynamic(&self.to_dynamic(), path, format)?;
        debug!("Canvas::save {} ({format:?})", path.display());
        Ok(())
    }

    /// Decode a file into a canvas of `mode`, converting pixels as needed.
    /// Binary canvases threshold gray levels at 128.
    pub fn open(path: impl AsRef<Path>, mode: Mode) -> Result<Self> {
        let decoded = load_dynamic(path.as_ref())?;
        let buffer = match mode {
            Mode::Rgb => PixelBuffer::Rgb(decoded.into_rgb8()),
            Mode::Gray => PixelBuffer::Gray(decoded.into_luma8()),
            Mode::Binary => {
                let mut img = decoded.into_luma8();
                img.pixels_mut()
                    .for_each(|p| p.0[0] = u8::from(p.0[0] >= 128));
                PixelBuffer::Binary(img)
            }
        };
        Ok(Self { mode, buffer })
    }

    /// Encodable view; binary 0/1 levels become 0/255.
    pub fn to_dynamic(&self) -> DynamicImage {
        match &self.buffer {
            PixelBuffer::Rgb(img) => DynamicImage::ImageRgb8(img.clone()),
            PixelBuffer::Gray(img) => DynamicImage::ImageLuma8(img.clone()),
            PixelBuffer::Binary(img) => {
                let mut wide = img.clone();
                wide.pixels_mut().for_each(|p| p.0[0] = p.0[0].saturating_mul(255));
                DynamicImage::ImageLuma8(wide)
            }
        }
    }

    /// Fill the ellipse inscribed in `bbox`, touching all four box edges.
    pub fn fill_ellipse(&mut self, bbox: &BoundingBox, color: PixelColor) {
        let (rx, ry) = bbox.radii();
        for center in bbox.ellipse_centers() {
            match &mut self.buffer {
                PixelBuffer::Rgb(img) => {
                    draw_filled_ellipse_mut(img, center, rx, ry, Rgb(color.to_rgb()))
                }
                PixelBuffer::Gray(img) => {
                    draw_filled_ellipse_mut(img, center, rx, ry, Luma([color.to_luma()]))
                }
                PixelBuffer::Binary(img) => {
                    draw_filled_ellipse_mut(img, center, rx, ry, Luma([binary_level(color)]))
                }
            }
        }
    }

    /// Fill the polygon described by `ring` (closed or open).
    pub fn fill_polygon(&mut self, ring: &[[i32; 2]], color: PixelColor) {
        let mut pts: Vec<Point<i32>> = Vec::with_capacity(ring.len());
        for p in ring {
            let pt = Point::new(p[0], p[1]);
            if pts.last() != Some(&pt) {
                pts.push(pt);
            }
        }
        while pts.len() > 1 && pts.first() == pts.last() {
            pts.pop();
        }
        match pts.as_slice() {
            [] => {}
            [only] => {
                warn!("fill_polygon: ring {ring:?} collapsed to a single pixel");
                self.put_pixel(only.x, only.y, color);
            }
            poly => match &mut self.buffer {
                PixelBuffer::Rgb(img) => draw_polygon_mut(img, poly, Rgb(color.to_rgb())),
                PixelBuffer::Gray(img) => draw_polygon_mut(img, poly, Luma([color.to_luma()])),
                PixelBuffer::Binary(img) => {
                    draw_polygon_mut(img, poly, Luma([binary_level(color)]))
                }
            },
        }
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: PixelColor) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        match &mut self.buffer {
            PixelBuffer::Rgb(img) => img.put_pixel(x, y, Rgb(color.to_rgb())),
            PixelBuffer::Gray(img) => img.put_pixel(x, y, Luma([color.to_luma()])),
            PixelBuffer::Binary(img) => img.put_pixel(x, y, Luma([binary_level(color)])),
        }
    }

    fn raw(&self) -> &[u8] {
        match &self.buffer {
            PixelBuffer::Rgb(img) => img.as_raw().as_slice(),
            PixelBuffer::Gray(img) | PixelBuffer::Binary(img) => img.as_raw().as_slice(),
        }
    }

    fn raw_mut(&mut self) -> &mut [u8] {
        match &mut self.buffer {
            PixelBuffer::Rgb(img) => &mut **img,
            PixelBuffer::Gray(img) | PixelBuffer::Binary(img) => &mut **img,
        }
    }
}

/// Non-zero gray levels are "on".
fn binary_level(color: PixelColor) -> u8 {
    u8::from(color.to_luma() != 0)
}
