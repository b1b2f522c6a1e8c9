//! Joint-Angle Primitive
//!
//! Computes the angle at a vertex joint from its two neighboring joints using
//! the dot-product formula. This is the only piece of vector math in the
//! crate; everything downstream consumes degrees.

use serde::{Deserialize, Serialize};

/// A point in the detector's normalized model space.
///
/// Coordinates are unitless floats; x/y are normalized to the image frame and
/// z is depth relative to the wrist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Component-wise difference `self - other`.
    fn sub(&self, other: &Point3) -> (f64, f64, f64) {
        (self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

/// Angle in degrees at vertex `b`, formed by the vectors `b -> a` and `b -> c`.
///
/// Fails with [`Error::DegenerateVector`](crate::Error::DegenerateVector) when
/// either vector has zero length (coincident points); the caller must skip the
/// angle rather than fall back to a default.
///
/// The cosine is clamped to `[-1, 1]` before the inverse cosine: floating-point
/// error can push the ratio slightly outside the domain and must not produce a
/// NaN.
pub fn angle_at_vertex(a: Point3, b: Point3, c: Point3) -> crate::Result<f64> {
    let (abx, aby, abz) = a.sub(&b);
    let (cbx, cby, cbz) = c.sub(&b);

    let dot = abx * cbx + aby * cby + abz * cbz;

    let mag_ab = (abx * abx + aby * aby + abz * abz).sqrt();
    let mag_cb = (cbx * cbx + cby * cby + cbz * cbz).sqrt();

    if mag_ab == 0.0 {
        return Err(crate::Error::DegenerateVector("AB"));
    }
    if mag_cb == 0.0 {
        return Err(crate::Error::DegenerateVector("CB"));
    }

    let cos_theta = (dot / (mag_ab * mag_cb)).clamp(-1.0, 1.0);

    Ok(cos_theta.acos().to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_right_angle() {
        let wrist = Point3::new(0.0, 0.0, 0.0);
        let a = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);
        let angle = angle_at_vertex(a, wrist, c).unwrap();
        assert!((angle - 90.0).abs() < EPS);
    }

    #[test]
    fn test_collinear_opposing_is_straight() {
        let a = Point3::new(-1.0, 0.0, 0.0);
        let b = Point3::new(0.0, 0.0, 0.0);
        let c = Point3::new(1.0, 0.0, 0.0);
        let angle = angle_at_vertex(a, b, c).unwrap();
        assert!((angle - 180.0).abs() < EPS);
    }

    #[test]
    fn test_collinear_same_direction_is_zero() {
        let a = Point3::new(1.0, 0.0, 0.0);
        let b = Point3::new(0.0, 0.0, 0.0);
        let c = Point3::new(2.0, 0.0, 0.0);
        let angle = angle_at_vertex(a, b, c).unwrap();
        assert!(angle.abs() < EPS);
    }

    #[test]
    fn test_coincident_a_fails() {
        let b = Point3::new(0.5, 0.5, 0.5);
        let c = Point3::new(1.0, 0.0, 0.0);
        let err = angle_at_vertex(b, b, c).unwrap_err();
        assert!(matches!(err, Error::DegenerateVector("AB")));
    }

    #[test]
    fn test_coincident_c_fails() {
        let a = Point3::new(1.0, 0.0, 0.0);
        let b = Point3::new(0.5, 0.5, 0.5);
        let err = angle_at_vertex(a, b, b).unwrap_err();
        assert!(matches!(err, Error::DegenerateVector("CB")));
    }

    #[test]
    fn test_result_always_in_range() {
        // A spread of non-degenerate triples; every angle lands in [0, 180].
        let points = [
            Point3::new(0.1, 0.2, 0.3),
            Point3::new(-1.0, 0.5, 2.0),
            Point3::new(3.0, -2.0, 0.7),
            Point3::new(0.0, 1.0, -1.0),
        ];
        for a in &points {
            for c in &points {
                let b = Point3::new(10.0, 10.0, 10.0);
                let angle = angle_at_vertex(*a, b, *c).unwrap();
                assert!((0.0..=180.0).contains(&angle));
            }
        }
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let a = Point3::new(0.3, 0.1, 0.9);
        let b = Point3::new(0.2, 0.5, 0.4);
        let c = Point3::new(0.8, 0.7, 0.1);
        let first = angle_at_vertex(a, b, c).unwrap();
        let second = angle_at_vertex(a, b, c).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_nearly_collinear_does_not_produce_nan() {
        // Floating-point error can push |cos| marginally past 1 here; the
        // clamp keeps acos in-domain.
        let a = Point3::new(1.0 + 1e-16, 0.0, 0.0);
        let b = Point3::new(0.0, 0.0, 0.0);
        let c = Point3::new(2.0, 0.0, 0.0);
        let angle = angle_at_vertex(a, b, c).unwrap();
        assert!(!angle.is_nan());
    }
}
