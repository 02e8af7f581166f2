//! Random convex polygons.
//!
//! `random_convex_polygon` implements Valtr's construction: two sorted random
//! coordinate sets are split into chains, turned into edge vectors that sum to
//! zero, ordered by angle and laid end to end. The result is convex by
//! construction, is ordered counter-clockwise (y up) and is rescaled to span
//! the unit square exactly.
//!
//! `polygon_vertices` places such a polygon in a pixel box and closes the
//! ring. It has no hidden state: every call draws a fresh polygon from `rng`.
use super::affine::{apply_affine_points, unit_square_to_box};
use super::bbox::BoundingBox;
use crate::error::{Error, Result};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

const EPS: f32 = 1e-9;

/// Random convex polygon with `n` vertices in `[0, 1]²`, as an open ring.
pub fn random_convex_polygon<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Vec<[f32; 2]>> {
    if n < 3 {
        return Err(Error::TooFewVertices(n));
    }
    let dx = chain_steps(n, rng);
    let mut dy = chain_steps(n, rng);
    dy.shuffle(rng);

    let mut edges: Vec<[f32; 2]> = dx.into_iter().zip(dy).map(|(x, y)| [x, y]).collect();
    edges.sort_by(|a, b| a[1].atan2(a[0]).total_cmp(&b[1].atan2(b[0])));

    let mut pts = Vec::with_capacity(n);
    let (mut x, mut y) = (0.0f32, 0.0f32);
    for e in &edges {
        pts.push([x, y]);
        x += e[0];
        y += e[1];
    }

    let (min_x, max_x) = extent(pts.iter().map(|p| p[0]));
    let (min_y, max_y) = extent(pts.iter().map(|p| p[1]));
    let sx = (max_x - min_x).max(EPS);
    let sy = (max_y - min_y).max(EPS);
    for p in &mut pts {
        p[0] = ((p[0] - min_x) / sx).clamp(0.0, 1.0);
        p[1] = ((p[1] - min_y) / sy).clamp(0.0, 1.0);
    }
    Ok(pts)
}

/// Fresh convex polygon with `n` vertices mapped into `bbox`, as a closed ring
/// of `n + 1` pixel coordinates.
pub fn polygon_vertices<R: Rng + ?Sized>(
    bbox: &BoundingBox,
    n: usize,
    rng: &mut R,
) -> Result<Vec<[i32; 2]>> {
    let unit = random_convex_polygon(n, rng)?;
    let mapped = apply_affine_points(&unit_square_to_box(bbox), &unit);
    let ring = close_ring(
        mapped
            .into_iter()
            .map(|p| [p[0].round() as i32, p[1].round() as i32])
            .collect(),
    );
    debug!("polygon_vertices: {n} vertices in {bbox:?} -> {ring:?}");
    Ok(ring)
}

/// Repeat the first vertex at the end unless the ring is already closed.
pub fn close_ring(mut pts: Vec<[i32; 2]>) -> Vec<[i32; 2]> {
    if let Some(&first) = pts.first() {
        if pts.len() < 2 || pts.last() != Some(&first) {
            pts.push(first);
        }
    }
    pts
}

/// Edge components along one axis: the sorted samples are split at random
/// into an upper and a lower chain between the extreme values.
fn chain_steps<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<f32> {
    let mut v: Vec<f32> = (0..n).map(|_| rng.gen::<f32>()).collect();
    v.sort_by(f32::total_cmp);
    let (lo, hi) = (v[0], v[n - 1]);
    let mut steps = Vec::with_capacity(n);
    let (mut last_a, mut last_b) = (lo, lo);
    for &value in &v[1..n - 1] {
        if rng.gen_bool(0.5) {
            steps.push(value - last_a);
            last_a = value;
        } else {
            steps.push(last_b - value);
            last_b = value;
        }
    }
    steps.push(hi - last_a);
    steps.push(last_b - hi);
    steps
}

fn extent(values: impl Iterator<Item = f32>) -> (f32, f32) {
    values.fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cross(o: [f32; 2], a: [f32; 2], b: [f32; 2]) -> f32 {
        (a[0] - o[0]) * (b[1] - o[1]) - (a[1] - o[1]) * (b[0] - o[0])
    }

    #[test]
    fn polygon_is_convex_and_normalized() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 3..12 {
            let pts = random_convex_polygon(n, &mut rng).unwrap();
            assert_eq!(pts.len(), n);
            for p in &pts {
                assert!((0.0..=1.0).contains(&p[0]) && (0.0..=1.0).contains(&p[1]));
            }
            for i in 0..n {
                let turn = cross(pts[i], pts[(i + 1) % n], pts[(i + 2) % n]);
                assert!(turn >= -1e-5, "n={n} reflex turn {turn} at {i}: {pts:?}");
            }
        }
    }

    #[test]
    fn polygon_spans_unit_square() {
        let mut rng = StdRng::seed_from_u64(5);
        let pts = random_convex_polygon(6, &mut rng).unwrap();
        let (min_x, max_x) = extent(pts.iter().map(|p| p[0]));
        let (min_y, max_y) = extent(pts.iter().map(|p| p[1]));
        assert!(min_x.abs() < 1e-6 && (max_x - 1.0).abs() < 1e-5);
        assert!(min_y.abs() < 1e-6 && (max_y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn too_few_vertices_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            random_convex_polygon(2, &mut rng),
            Err(Error::TooFewVertices(2))
        ));
    }

    #[test]
    fn triangle_ring_is_closed_and_inside_box() {
        let mut rng = StdRng::seed_from_u64(9);
        let bbox = BoundingBox::new(20, 30, 120, 90).unwrap();
        let ring = polygon_vertices(&bbox, 3, &mut rng).unwrap();
        assert_eq!(ring.len(), 4);
        assert_eq!(ring[0], ring[3]);
        for p in &ring {
            assert!((20..=120).contains(&p[0]) && (30..=90).contains(&p[1]), "{p:?}");
        }
    }

    #[test]
    fn close_ring_is_idempotent() {
        let ring = close_ring(vec![[0, 0], [4, 0], [0, 4]]);
        assert_eq!(ring.len(), 4);
        assert_eq!(close_ring(ring.clone()), ring);
    }
}
