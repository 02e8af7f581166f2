use super::fill::{BoxFill, ConvexPolygonFill, EllipseFill, FillStrategy};
use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::geometry::{AxisIntervals, BoundingBox, RegionSampler, SquareRegion};
use crate::types::{PixelColor, ShapeKind};
use log::debug;
use rand::Rng;
use serde::Serialize;

/// What a single draw put on the canvas.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub kind: ShapeKind,
    pub bbox: BoundingBox,
    pub color: PixelColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertices: Option<Vec<[i32; 2]>>,
}

/// A region sampler paired with a fill strategy.
#[derive(Clone, Debug)]
pub struct Shape<S, F> {
    kind: ShapeKind,
    sampler: S,
    fill: F,
}

pub type Ellipse = Shape<AxisIntervals, EllipseFill>;
pub type Circle = Shape<SquareRegion, EllipseFill>;
pub type Rectangle = Shape<AxisIntervals, BoxFill>;
pub type Square = Shape<SquareRegion, BoxFill>;
pub type Polygon = Shape<AxisIntervals, ConvexPolygonFill>;

impl<S: RegionSampler, F: FillStrategy> Shape<S, F> {
    pub fn from_parts(kind: ShapeKind, sampler: S, fill: F) -> Self {
        Self {
            kind,
            sampler,
            fill,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    pub fn fill_strategy(&self) -> &F {
        &self.fill
    }

    /// Check that this shape can be sampled on a `width × height` canvas.
    pub fn validate(&self, width: u32, height: u32) -> Result<()> {
        self.sampler.validate(width, height)
    }

    /// Sample a box for `canvas` without drawing anything.
    pub fn random_box<R: Rng + ?Sized>(&self, canvas: &Canvas, rng: &mut R) -> Result<BoundingBox> {
        self.sampler.sample(canvas.width(), canvas.height(), rng)
    }

    /// Draw one shape.
    ///
    /// Without `bbox` a new box is sampled. The color is resolved once against
    /// the canvas mode. An explicit box must lie inside the canvas.
    pub fn draw<R: Rng + ?Sized>(
        &mut self,
        canvas: &mut Canvas,
        bbox: Option<BoundingBox>,
        color: &Color,
        rng: &mut R,
    ) -> Result<Annotation> {
        let explicit_box = bbox.is_some();
        let bbox = match bbox {
            Some(b) if !b.fits_within(canvas.width(), canvas.height()) => {
                return Err(Error::BoxOutOfBounds {
                    width: canvas.width(),
                    height: canvas.height(),
                })
            }
            Some(b) => b,
            None => self.random_box(canvas, rng)?,
        };
        let color = color.resolve(canvas.mode(), rng)?;
        let footprint = self.fill.fill(canvas, bbox, explicit_box, color, rng)?;
        debug!(
            "{}::draw {:?} color={color:?}",
            self.kind.name(),
            footprint.bbox
        );
        Ok(Annotation {
            kind: self.kind,
            bbox: footprint.bbox,
            color,
            vertices: footprint.vertices,
        })
    }
}

impl Ellipse {
    pub fn new() -> Self {
        Shape::from_parts(ShapeKind::Ellipse, AxisIntervals::default(), EllipseFill)
    }

    pub fn with_min_extent(min_width: f64, min_height: f64) -> Result<Self> {
        let sampler = AxisIntervals::new(min_width, min_height)?;
        Ok(Shape::from_parts(ShapeKind::Ellipse, sampler, EllipseFill))
    }
}

impl Default for Ellipse {
    fn default() -> Self {
        Self::new()
    }
}

impl Circle {
    pub fn new() -> Self {
        Shape::from_parts(ShapeKind::Circle, SquareRegion::default(), EllipseFill)
    }

    pub fn with_min_size(min_size: f64) -> Result<Self> {
        let sampler = SquareRegion::new(min_size)?;
        Ok(Shape::from_parts(ShapeKind::Circle, sampler, EllipseFill))
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new()
    }
}

impl Rectangle {
    pub fn new() -> Self {
        Shape::from_parts(ShapeKind::Rectangle, AxisIntervals::default(), BoxFill)
    }

    pub fn with_min_extent(min_width: f64, min_height: f64) -> Result<Self> {
        let sampler = AxisIntervals::new(min_width, min_height)?;
        Ok(Shape::from_parts(ShapeKind::Rectangle, sampler, BoxFill))
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::new()
    }
}

impl Square {
    pub fn new() -> Self {
        Shape::from_parts(ShapeKind::Square, SquareRegion::default(), BoxFill)
    }

    pub fn with_min_size(min_size: f64) -> Result<Self> {
        let sampler = SquareRegion::new(min_size)?;
        Ok(Shape::from_parts(ShapeKind::Square, sampler, BoxFill))
    }
}

impl Default for Square {
    fn default() -> Self {
        Self::new()
    }
}

impl Polygon {
    pub fn new(vertices: usize) -> Result<Self> {
        Ok(Shape::from_parts(
            ShapeKind::Polygon,
            AxisIntervals::default(),
            ConvexPolygonFill::new(vertices)?,
        ))
    }

    pub fn with_min_extent(vertices: usize, min_width: f64, min_height: f64) -> Result<Self> {
        Ok(Shape::from_parts(
            ShapeKind::Polygon,
            AxisIntervals::new(min_width, min_height)?,
            ConvexPolygonFill::new(vertices)?,
        ))
    }

    /// Keep the first ring and reuse it on later draws without an explicit box.
    pub fn retain_vertices(mut self, retain: bool) -> Self {
        self.fill.set_retain(retain);
        self
    }

    /// The retained ring, once a retaining polygon has been drawn.
    pub fn vertices(&self) -> Option<&[[i32; 2]]> {
        self.fill.cached().and_then(|f| f.vertices.as_deref())
    }
}
