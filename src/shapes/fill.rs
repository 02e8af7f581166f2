//! Fill strategies: how a shape turns its bounding box into pixels.
use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::geometry::{polygon_vertices, BoundingBox};
use crate::types::PixelColor;
use log::debug;
use rand::Rng;

/// Region actually painted by a fill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Footprint {
    pub bbox: BoundingBox,
    /// Closed vertex ring for polygon-based fills.
    pub vertices: Option<Vec<[i32; 2]>>,
}

pub trait FillStrategy {
    /// Paint into `canvas`. `explicit_box` tells whether the caller supplied
    /// `bbox` or it was sampled for this draw.
    fn fill<R: Rng + ?Sized>(
        &mut self,
        canvas: &mut Canvas,
        bbox: BoundingBox,
        explicit_box: bool,
        color: PixelColor,
        rng: &mut R,
    ) -> Result<Footprint>;
}

/// Ellipse inscribed in the box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EllipseFill;

impl FillStrategy for EllipseFill {
    fn fill<R: Rng + ?Sized>(
        &mut self,
        canvas: &mut Canvas,
        bbox: BoundingBox,
        _explicit_box: bool,
        color: PixelColor,
        _rng: &mut R,
    ) -> Result<Footprint> {
        canvas.fill_ellipse(&bbox, color);
        Ok(Footprint {
            bbox,
            vertices: None,
        })
    }
}

/// The box itself, drawn as its closed four-corner ring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoxFill;

impl FillStrategy for BoxFill {
    fn fill<R: Rng + ?Sized>(
        &mut self,
        canvas: &mut Canvas,
        bbox: BoundingBox,
        _explicit_box: bool,
        color: PixelColor,
        _rng: &mut R,
    ) -> Result<Footprint> {
        let ring = bbox.to_coords().to_vec();
        canvas.fill_polygon(&ring, color);
        Ok(Footprint {
            bbox,
            vertices: Some(ring),
        })
    }
}

/// Random convex polygon placed inside the box.
///
/// By default every fill draws a fresh polygon. With `retain` set, the first
/// ring is kept and reused by later fills on sampled boxes; a fill on an
/// explicit box always replaces it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvexPolygonFill {
    vertices: usize,
    retain: bool,
    cached: Option<Footprint>,
}

impl ConvexPolygonFill {
    pub fn new(vertices: usize) -> Result<Self> {
        if vertices < 3 {
            return Err(Error::TooFewVertices(vertices));
        }
        Ok(Self {
            vertices,
            retain: false,
            cached: None,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    pub fn set_retain(&mut self, retain: bool) {
        self.retain = retain;
        if !retain {
            self.cached = None;
        }
    }

    pub fn retains(&self) -> bool {
        self.retain
    }

    /// Ring kept for reuse, if any.
    pub fn cached(&self) -> Option<&Footprint> {
        self.cached.as_ref()
    }
}

impl FillStrategy for ConvexPolygonFill {
    fn fill<R: Rng + ?Sized>(
        &mut self,
        canvas: &mut Canvas,
        bbox: BoundingBox,
        explicit_box: bool,
        color: PixelColor,
        rng: &mut R,
    ) -> Result<Footprint> {
        let footprint = match &self.cached {
            Some(kept) if self.retain && !explicit_box => {
                debug!("ConvexPolygonFill: reusing retained ring in {:?}", kept.bbox);
                kept.clone()
            }
            _ => Footprint {
                bbox,
                vertices: Some(polygon_vertices(&bbox, self.vertices, rng)?),
            },
        };
        if let Some(ring) = &footprint.vertices {
            canvas.fill_polygon(ring, color);
        }
        if self.retain {
            self.cached = Some(footprint.clone());
        }
        Ok(footprint)
    }
}
