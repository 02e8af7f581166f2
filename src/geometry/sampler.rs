//! Random bounding-box samplers.
//!
//! Both samplers draw candidate boxes uniformly in the unit square, scale them
//! to canvas pixels (truncating) and reject candidates until the size
//! constraint holds in pixel units. The rejection loops are unbounded; each
//! sampler checks up front that at least one admissible box exists for the
//! canvas so a loop never starts on an impossible constraint.
use super::bbox::BoundingBox;
use crate::error::{Error, Result};
use log::debug;
use rand::Rng;

/// Source of random shape footprints.
pub trait RegionSampler {
    /// Check that a box satisfying the constraint exists for this canvas.
    fn validate(&self, width: u32, height: u32) -> Result<()>;

    /// Draw a random box inside `[0, width] × [0, height]`.
    fn sample<R: Rng + ?Sized>(&self, width: u32, height: u32, rng: &mut R)
        -> Result<BoundingBox>;
}

/// Independent random interval per axis, each at least a fraction of the
/// canvas extent along that axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisIntervals {
    pub min_width: f64,
    pub min_height: f64,
}

impl Default for AxisIntervals {
    fn default() -> Self {
        Self {
            min_width: 0.1,
            min_height: 0.1,
        }
    }
}

impl AxisIntervals {
    pub fn new(min_width: f64, min_height: f64) -> Result<Self> {
        check_fraction(min_width)?;
        check_fraction(min_height)?;
        Ok(Self {
            min_width,
            min_height,
        })
    }
}

impl RegionSampler for AxisIntervals {
    fn validate(&self, width: u32, height: u32) -> Result<()> {
        min_extent_px(self.min_width, width)?;
        min_extent_px(self.min_height, height)?;
        Ok(())
    }

    fn sample<R: Rng + ?Sized>(
        &self,
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Result<BoundingBox> {
        let min_w = min_extent_px(self.min_width, width)?;
        let min_h = min_extent_px(self.min_height, height)?;
        let mut attempts = 0usize;
        loop {
            attempts += 1;
            let (x0, x1) = random_interval(width, rng);
            let (y0, y1) = random_interval(height, rng);
            if x1 - x0 >= min_w && y1 - y0 >= min_h {
                debug!(
                    "AxisIntervals::sample -> ({x0}, {y0}, {x1}, {y1}) after {attempts} attempt(s)"
                );
                return BoundingBox::new(x0, y0, x1, y1);
            }
        }
    }
}

/// Square box whose side is at least a fraction of the shorter canvas side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SquareRegion {
    pub min_size: f64,
}

impl Default for SquareRegion {
    fn default() -> Self {
        Self { min_size: 0.1 }
    }
}

impl SquareRegion {
    pub fn new(min_size: f64) -> Result<Self> {
        check_fraction(min_size)?;
        Ok(Self { min_size })
    }
}

impl RegionSampler for SquareRegion {
    fn validate(&self, width: u32, height: u32) -> Result<()> {
        min_extent_px(self.min_size, width.min(height)).map(|_| ())
    }

    fn sample<R: Rng + ?Sized>(
        &self,
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Result<BoundingBox> {
        let side_scale = width.min(height);
        let min_side = min_extent_px(self.min_size, side_scale)?;
        let mut attempts = 0usize;
        loop {
            attempts += 1;
            let x0 = (rng.gen::<f64>() * f64::from(width)) as u32;
            let y0 = (rng.gen::<f64>() * f64::from(height)) as u32;
            let side = (rng.gen::<f64>() * f64::from(side_scale)) as u32;
            if side < min_side || x0 + side > width || y0 + side > height {
                continue;
            }
            debug!(
                "SquareRegion::sample -> ({x0}, {y0}) side {side} after {attempts} attempt(s)"
            );
            return BoundingBox::new(x0, y0, x0 + side, y0 + side);
        }
    }
}

fn check_fraction(value: f64) -> Result<()> {
    if !(0.0..1.0).contains(&value) {
        return Err(Error::InvalidFraction(value));
    }
    Ok(())
}

/// Minimum admissible extent in pixels along an axis of `extent` pixels.
///
/// Truncated unit samples reach at most `extent - 1`, so the minimum has to
/// stay at or below that.
fn min_extent_px(fraction: f64, extent: u32) -> Result<u32> {
    check_fraction(fraction)?;
    let min_px = ((fraction * f64::from(extent)).ceil() as u32).max(1);
    if extent == 0 || min_px > extent - 1 {
        return Err(Error::InfeasibleRegion { min_px, extent });
    }
    Ok(min_px)
}

fn random_interval<R: Rng + ?Sized>(extent: u32, rng: &mut R) -> (u32, u32) {
    let a = rng.gen::<f64>();
    let b = rng.gen::<f64>();
    let scale = f64::from(extent);
    let lo = (a.min(b) * scale) as u32;
    let hi = (a.max(b) * scale) as u32;
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn intervals_respect_minimum_extent() {
        let mut rng = StdRng::seed_from_u64(11);
        let sampler = AxisIntervals::new(0.3, 0.5).unwrap();
        for _ in 0..500 {
            let b = sampler.sample(120, 80, &mut rng).unwrap();
            assert!(f64::from(b.width()) >= 0.3 * 120.0, "{b:?}");
            assert!(f64::from(b.height()) >= 0.5 * 80.0, "{b:?}");
            assert!(b.fits_within(120, 80));
        }
    }

    #[test]
    fn squares_have_equal_sides_on_wide_canvas() {
        let mut rng = StdRng::seed_from_u64(3);
        let sampler = SquareRegion::default();
        for _ in 0..500 {
            let b = sampler.sample(200, 50, &mut rng).unwrap();
            assert_eq!(b.width(), b.height());
            assert!(b.width() >= 5);
            assert!(b.fits_within(200, 50), "{b:?}");
        }
    }

    #[test]
    fn fractions_outside_unit_interval_are_rejected() {
        assert!(matches!(
            AxisIntervals::new(1.0, 0.1),
            Err(Error::InvalidFraction(_))
        ));
        assert!(SquareRegion::new(-0.1).is_err());
    }

    #[test]
    fn tiny_canvas_is_infeasible() {
        let sampler = AxisIntervals::default();
        assert!(matches!(
            sampler.validate(1, 10),
            Err(Error::InfeasibleRegion { extent: 1, .. })
        ));
        let mut rng = StdRng::seed_from_u64(0);
        let large = SquareRegion::new(0.95).unwrap();
        assert!(large.sample(10, 10, &mut rng).is_err());
        let b = large.sample(40, 40, &mut rng).unwrap();
        assert!(b.width() >= 38 && b.fits_within(40, 40));
    }
}
