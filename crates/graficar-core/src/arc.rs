//! Polar geometry and SVG path construction for pie wedges and bars.
//!
//! Angles are measured in degrees, clockwise from 12 o'clock: 0° points at
//! the top of the circle, 90° at the right. Slice aggregation, label
//! anchoring, and hit testing all share this frame.

use crate::geometry::{CornerRadius, Point, Rect};

/// Angular span (degrees) at and above which a wedge is drawn as a circle.
///
/// At exactly 360° the wedge's chord collapses to zero length and the SVG
/// elliptical-arc command degenerates; 99.99% of a full turn is the tolerance
/// for floating-point summation error in the aggregator.
pub const FULL_CIRCLE_SPAN: f64 = 359.964;

/// Convert a polar coordinate to a cartesian point.
///
/// The frame rotation (`angle - 90`) moves 0° from the positive x-axis
/// (standard trig convention) to the top of the circle.
#[must_use]
pub fn polar_to_cartesian(center: Point, radius: f32, angle_degrees: f64) -> Point {
    let radians = (angle_degrees - 90.0).to_radians();
    Point::new(
        center.x + radius * radians.cos() as f32,
        center.y + radius * radians.sin() as f32,
    )
}

/// Recover the angle (degrees, `[0, 360)`) of a point relative to a center.
///
/// Inverse of [`polar_to_cartesian`] up to the modulus: the recovered angle
/// is in the same clockwise-from-top frame.
#[must_use]
pub fn angle_at(center: Point, point: Point) -> f64 {
    let dx = f64::from(point.x - center.x);
    let dy = f64::from(point.y - center.y);
    let degrees = dy.atan2(dx).to_degrees() + 90.0;
    degrees.rem_euclid(360.0)
}

/// Build the SVG path for a pie wedge from `start_angle` to `end_angle`.
///
/// The path moves to the center, draws a line out to the rim at the end
/// angle, sweeps an elliptical arc back to the rim at the start angle, and
/// closes. The sweep flag is always 0 to match the aggregator's cumulative
/// angle direction; the large-arc flag is set exactly when the span exceeds
/// 180°. Callers must special-case spans at or beyond [`FULL_CIRCLE_SPAN`]
/// with a circle primitive.
#[must_use]
pub fn describe_arc(center: Point, radius: f32, start_angle: f64, end_angle: f64) -> String {
    let arc_start = polar_to_cartesian(center, radius, end_angle);
    let arc_end = polar_to_cartesian(center, radius, start_angle);
    let large_arc = i32::from(end_angle - start_angle > 180.0);

    format!(
        "M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 0 {:.2} {:.2} Z",
        center.x, center.y, arc_start.x, arc_start.y, radius, radius, large_arc, arc_end.x,
        arc_end.y
    )
}

/// Build the SVG path for a rectangle with per-corner radii.
///
/// Radii are clamped so opposing corners never overlap. Zero-radius corners
/// emit plain line joins.
#[must_use]
pub fn rounded_rect_path(rect: Rect, corners: CornerRadius) -> String {
    let max_r = (rect.width / 2.0).min(rect.height / 2.0).max(0.0);
    let tl = corners.top_left.clamp(0.0, max_r);
    let tr = corners.top_right.clamp(0.0, max_r);
    let br = corners.bottom_right.clamp(0.0, max_r);
    let bl = corners.bottom_left.clamp(0.0, max_r);

    let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);
    let mut path = format!("M {:.2} {:.2}", x + tl, y);

    path.push_str(&format!(" H {:.2}", x + w - tr));
    if tr > 0.0 {
        path.push_str(&format!(" A {tr:.2} {tr:.2} 0 0 1 {:.2} {:.2}", x + w, y + tr));
    }
    path.push_str(&format!(" V {:.2}", y + h - br));
    if br > 0.0 {
        path.push_str(&format!(" A {br:.2} {br:.2} 0 0 1 {:.2} {:.2}", x + w - br, y + h));
    }
    path.push_str(&format!(" H {:.2}", x + bl));
    if bl > 0.0 {
        path.push_str(&format!(" A {bl:.2} {bl:.2} 0 0 1 {:.2} {:.2}", x, y + h - bl));
    }
    path.push_str(&format!(" V {:.2}", y + tl));
    if tl > 0.0 {
        path.push_str(&format!(" A {tl:.2} {tl:.2} 0 0 1 {:.2} {:.2}", x + tl, y));
    }
    path.push_str(" Z");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point { x: 100.0, y: 100.0 };

    fn assert_close(p: Point, x: f32, y: f32) {
        assert!(
            (p.x - x).abs() < 1e-3 && (p.y - y).abs() < 1e-3,
            "expected ({x}, {y}), got ({}, {})",
            p.x,
            p.y
        );
    }

    #[test]
    fn test_polar_cardinal_points() {
        assert_close(polar_to_cartesian(CENTER, 50.0, 0.0), 100.0, 50.0);
        assert_close(polar_to_cartesian(CENTER, 50.0, 90.0), 150.0, 100.0);
        assert_close(polar_to_cartesian(CENTER, 50.0, 180.0), 100.0, 150.0);
        assert_close(polar_to_cartesian(CENTER, 50.0, 270.0), 50.0, 100.0);
    }

    #[test]
    fn test_angle_roundtrip_representative_angles() {
        for angle in [0.0, 90.0, 180.0, 270.0, 359.0] {
            let point = polar_to_cartesian(CENTER, 50.0, angle);
            let recovered = angle_at(CENTER, point);
            let diff = (recovered - angle).rem_euclid(360.0);
            let diff = diff.min(360.0 - diff);
            assert!(diff < 0.01, "angle {angle} recovered as {recovered}");
        }
    }

    #[test]
    fn test_angle_at_normalized_range() {
        let angle = angle_at(CENTER, Point::new(60.0, 60.0));
        assert!((0.0..360.0).contains(&angle));
    }

    #[test]
    fn test_describe_arc_small_span_flag() {
        let path = describe_arc(CENTER, 50.0, 0.0, 90.0);
        assert!(path.contains("A 50.00 50.00 0 0 0"));
        assert!(path.starts_with("M 100.00 100.00 L"));
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn test_describe_arc_large_span_flag() {
        let path = describe_arc(CENTER, 50.0, 90.0, 360.0);
        assert!(path.contains("A 50.00 50.00 0 1 0"));
    }

    #[test]
    fn test_describe_arc_sweep_always_zero() {
        for (start, end) in [(0.0, 45.0), (45.0, 300.0), (180.0, 181.0)] {
            let path = describe_arc(CENTER, 40.0, start, end);
            // "A rx ry rot large 0 x y" - the sweep flag is the token before
            // the end coordinates
            let after_a = path.split(" A ").nth(1).expect("arc command");
            let tokens: Vec<&str> = after_a.split_whitespace().collect();
            assert_eq!(tokens[4], "0", "sweep flag must be 0 in {path}");
        }
    }

    #[test]
    fn test_describe_arc_endpoints_on_rim() {
        let path = describe_arc(CENTER, 50.0, 0.0, 90.0);
        // line-to lands at the 90 deg rim point, arc ends at the 0 deg point
        assert!(path.contains("L 150.00 100.00"));
        assert!(path.ends_with("100.00 50.00 Z"));
    }

    #[test]
    fn test_rounded_rect_path_uniform() {
        let path = rounded_rect_path(
            Rect::new(0.0, 0.0, 20.0, 40.0),
            CornerRadius::uniform(4.0),
        );
        assert!(path.starts_with("M 4.00 0.00"));
        assert_eq!(path.matches(" A ").count(), 4);
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn test_rounded_rect_path_top_only() {
        let path = rounded_rect_path(Rect::new(0.0, 0.0, 20.0, 40.0), CornerRadius::top(4.0));
        assert_eq!(path.matches(" A ").count(), 2);
    }

    #[test]
    fn test_rounded_rect_path_square() {
        let path = rounded_rect_path(Rect::new(0.0, 0.0, 20.0, 40.0), CornerRadius::ZERO);
        assert_eq!(path.matches(" A ").count(), 0);
        assert!(path.contains("H 20.00"));
    }

    #[test]
    fn test_rounded_rect_path_clamps_oversized_radius() {
        // radius larger than half the short side must clamp, not overlap
        let path = rounded_rect_path(
            Rect::new(0.0, 0.0, 10.0, 40.0),
            CornerRadius::uniform(20.0),
        );
        assert!(path.contains("A 5.00 5.00"));
    }
}
