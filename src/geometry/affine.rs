use super::bbox::BoundingBox;
use nalgebra::{Matrix3, Vector3};

/// Affine map taking the unit square onto the pixel box `bbox`.
pub fn unit_square_to_box(bbox: &BoundingBox) -> Matrix3<f32> {
    let sx = bbox.width() as f32;
    let sy = bbox.height() as f32;
    let tx = bbox.x_min() as f32;
    let ty = bbox.y_min() as f32;
    Matrix3::new(sx, 0.0, tx, 0.0, sy, ty, 0.0, 0.0, 1.0)
}

/// Apply an affine transform (last row `[0, 0, 1]`) to 2D points.
pub fn apply_affine_points(m: &Matrix3<f32>, pts: &[[f32; 2]]) -> Vec<[f32; 2]> {
    pts.iter()
        .map(|p| {
            let v = m * Vector3::new(p[0], p[1], 1.0);
            [v[0], v[1]]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_corners_land_on_box_corners() {
        let bbox = BoundingBox::new(10, 20, 50, 40).unwrap();
        let m = unit_square_to_box(&bbox);
        let out = apply_affine_points(&m, &[[0.0, 0.0], [1.0, 1.0], [0.5, 0.25]]);
        assert_eq!(out[0], [10.0, 20.0]);
        assert_eq!(out[1], [50.0, 40.0]);
        assert_eq!(out[2], [30.0, 25.0]);
    }
}
