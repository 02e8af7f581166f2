//! Shape geometry: bounding boxes, region samplers and convex polygons.
//!
//! Everything here works in pixel coordinates with the origin at the top-left
//! corner of the canvas, except the polygon generator which produces vertices
//! in the unit square before they are mapped into a box.

pub mod affine;
pub mod bbox;
pub mod polygon;
pub mod sampler;

pub use affine::{apply_affine_points, unit_square_to_box};
pub use bbox::BoundingBox;
pub use polygon::{close_ring, polygon_vertices, random_convex_polygon};
pub use sampler::{AxisIntervals, RegionSampler, SquareRegion};
