//! Drawable shapes.
//!
//! Every shape is a [`Shape`] built from two independent parts:
//!
//! | kind      | region sampler   | fill strategy        |
//! |-----------|------------------|----------------------|
//! | ellipse   | `AxisIntervals`  | `EllipseFill`        |
//! | circle    | `SquareRegion`   | `EllipseFill`        |
//! | rectangle | `AxisIntervals`  | `BoxFill`            |
//! | square    | `SquareRegion`   | `BoxFill`            |
//! | polygon   | `AxisIntervals`  | `ConvexPolygonFill`  |
//!
//! [`AnyShape`] selects one of the five at runtime, e.g. from a config file.

pub mod fill;
pub mod shape;

pub use fill::{BoxFill, ConvexPolygonFill, EllipseFill, FillStrategy, Footprint};
pub use shape::{Annotation, Circle, Ellipse, Polygon, Rectangle, Shape, Square};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::Result;
use crate::geometry::BoundingBox;
use crate::types::ShapeKind;
use rand::Rng;

#[derive(Clone, Debug)]
pub enum AnyShape {
    Ellipse(Ellipse),
    Circle(Circle),
    Rectangle(Rectangle),
    Square(Square),
    Polygon(Polygon),
}

impl AnyShape {
    /// Default-sized shape of `kind`; `vertices` is only used for polygons.
    pub fn with_defaults(kind: ShapeKind, vertices: usize) -> Result<Self> {
        Ok(match kind {
            ShapeKind::Ellipse => AnyShape::Ellipse(Ellipse::new()),
            ShapeKind::Circle => AnyShape::Circle(Circle::new()),
            ShapeKind::Rectangle => AnyShape::Rectangle(Rectangle::new()),
            ShapeKind::Square => AnyShape::Square(Square::new()),
            ShapeKind::Polygon => AnyShape::Polygon(Polygon::new(vertices)?),
        })
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            AnyShape::Ellipse(s) => s.kind(),
            AnyShape::Circle(s) => s.kind(),
            AnyShape::Rectangle(s) => s.kind(),
            AnyShape::Square(s) => s.kind(),
            AnyShape::Polygon(s) => s.kind(),
        }
    }

    pub fn validate(&self, width: u32, height: u32) -> Result<()> {
        match self {
            AnyShape::Ellipse(s) => s.validate(width, height),
            AnyShape::Circle(s) => s.validate(width, height),
            AnyShape::Rectangle(s) => s.validate(width, height),
            AnyShape::Square(s) => s.validate(width, height),
            AnyShape::Polygon(s) => s.validate(width, height),
        }
    }

    pub fn draw<R: Rng + ?Sized>(
        &mut self,
        canvas: &mut Canvas,
        bbox: Option<BoundingBox>,
        color: &Color,
        rng: &mut R,
    ) -> Result<Annotation> {
        match self {
            AnyShape::Ellipse(s) => s.draw(canvas, bbox, color, rng),
            AnyShape::Circle(s) => s.draw(canvas, bbox, color, rng),
            AnyShape::Rectangle(s) => s.draw(canvas, bbox, color, rng),
            AnyShape::Square(s) => s.draw(canvas, bbox, color, rng),
            AnyShape::Polygon(s) => s.draw(canvas, bbox, color, rng),
        }
    }
}
