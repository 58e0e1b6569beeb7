//! Joint angle geometry.

use crate::constants::EPSILON;
use nalgebra::{distance, Point2};

/// Interior angle at `b`, in degrees, between the rays `b→a` and `b→c`.
///
/// Returns `0.0` when any point is absent or a ray is degenerate. Callers
/// treat `0.0` as "cannot evaluate", not as a measurement.
#[must_use]
pub fn angle_at_vertex(a: Option<Point2<f64>>, b: Option<Point2<f64>>, c: Option<Point2<f64>>) -> f64 {
    match (a, b, c) {
        (Some(a), Some(b), Some(c)) => joint_angle(&a, &b, &c).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Law of cosines over the three pairwise distances.
///
/// `None` when a ray has zero length and so no direction.
#[must_use]
pub fn joint_angle(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> Option<f64> {
    let ab = distance(a, b);
    let cb = distance(c, b);
    let ac = distance(a, c);

    if ab < EPSILON || cb < EPSILON {
        return None;
    }

    let cosine = ((ab * ab + cb * cb - ac * ac) / (2.0 * ab * cb)).clamp(-1.0, 1.0);
    Some(cosine.acos().to_degrees())
}

/// Straightness of a shoulder-hip-ankle line, folded into `[0, 360)`.
///
/// The raw hip angle is returned when the hip sits on or below the
/// shoulder-ankle line (sagging) and `360 - angle` when it is above it
/// (piking), so values below 180 mean "too low" and above 180 "too high".
#[must_use]
pub fn signed_body_angle(shoulder: &Point2<f64>, hip: &Point2<f64>, ankle: &Point2<f64>) -> Option<f64> {
    let angle = joint_angle(shoulder, hip, ankle)?;
    if hip_above_line(shoulder, hip, ankle) {
        Some(360.0 - angle)
    } else {
        Some(angle)
    }
}

fn hip_above_line(shoulder: &Point2<f64>, hip: &Point2<f64>, ankle: &Point2<f64>) -> bool {
    let dx = ankle.x - shoulder.x;
    if dx.abs() < EPSILON {
        return false;
    }
    let line_y = shoulder.y + (ankle.y - shoulder.y) * (hip.x - shoulder.x) / dx;
    hip.y < line_y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Option<Point2<f64>> {
        Some(Point2::new(x, y))
    }

    #[test]
    fn test_missing_point_returns_zero() {
        assert_eq!(angle_at_vertex(None, p(0.0, 0.0), p(1.0, 0.0)), 0.0);
        assert_eq!(angle_at_vertex(p(0.0, 0.0), None, p(1.0, 0.0)), 0.0);
        assert_eq!(angle_at_vertex(p(0.0, 0.0), p(1.0, 0.0), None), 0.0);
    }

    #[test]
    fn test_straight_line_is_180() {
        let angle = angle_at_vertex(p(0.0, 0.0), p(5.0, 5.0), p(10.0, 10.0));
        assert!((angle - 180.0).abs() < 1e-6);
    }

    #[test]
    fn test_right_angle() {
        let angle = angle_at_vertex(p(0.0, 10.0), p(0.0, 0.0), p(10.0, 0.0));
        assert!((angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_ray_returns_zero() {
        assert_eq!(angle_at_vertex(p(1.0, 1.0), p(1.0, 1.0), p(5.0, 1.0)), 0.0);
        assert_eq!(
            joint_angle(&Point2::new(3.0, 3.0), &Point2::new(3.0, 3.0), &Point2::new(3.0, 9.0)),
            None
        );
    }

    #[test]
    fn test_collapsed_hip_has_no_body_angle() {
        let point = Point2::new(250.0, 200.0);
        assert_eq!(signed_body_angle(&point, &point, &Point2::new(400.0, 200.0)), None);
    }

    #[test]
    fn test_signed_body_angle_sag_and_pike() {
        let shoulder = Point2::new(100.0, 200.0);
        let ankle = Point2::new(400.0, 200.0);

        let sag = signed_body_angle(&shoulder, &Point2::new(250.0, 240.0), &ankle).unwrap();
        let pike = signed_body_angle(&shoulder, &Point2::new(250.0, 160.0), &ankle).unwrap();

        assert!(sag < 180.0);
        assert!(pike > 180.0);
        assert!((sag + pike - 360.0).abs() < 1e-9);
    }
}
