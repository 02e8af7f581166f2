#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod canvas;
pub mod color;
pub mod error;
pub mod shapes;
pub mod types;

// Building blocks used by the shapes, exposed for tooling and tests.
pub mod config;
pub mod dataset;
pub mod geometry;
pub mod image;

// --- High-level re-exports -------------------------------------------------

pub use crate::canvas::Canvas;
pub use crate::color::Color;
pub use crate::error::{Error, Result};
pub use crate::geometry::BoundingBox;
pub use crate::shapes::{
    Annotation, AnyShape, Circle, Ellipse, Polygon, Rectangle, Shape, Square,
};
pub use crate::types::{Mode, PixelColor, ShapeKind};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use random_shapes::prelude::*;
/// use rand::SeedableRng;
///
/// # fn main() -> random_shapes::Result<()> {
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let mut canvas = Canvas::new(128, 128, Mode::Rgb)?;
/// canvas.create(&Color::RandomUniform, &mut rng)?;
///
/// let mut polygon = Polygon::new(5)?;
/// let annotation = polygon.draw(&mut canvas, None, &Color::rgb(255, 0, 0), &mut rng)?;
/// println!("{:?} in {:?}", annotation.kind, annotation.bbox);
/// canvas.save("polygon.png")?;
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::{
        BoundingBox, Canvas, Circle, Color, Ellipse, Mode, Polygon, Rectangle, Square,
    };
}
