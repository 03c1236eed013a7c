//! Bezier path construction for the timeline stroke.
//!
//! Consecutive marker points are joined by cubic segments whose control
//! points lean left or right depending on travel direction, producing the
//! zigzag S-curve the layout alternates around. The output is a plain SVG
//! path string and a deterministic pure function of its inputs.

use super::geometry::Point;
use super::{BEZIER_CONTROL_OFFSET, BEZIER_CURVE_DIVISOR, SVG_INITIAL_HEIGHT, SVG_INITIAL_WIDTH, Y_OFFSET};

/// SVG viewport plus path data, replaced wholesale on every geometry pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PathState {
    pub width: f64,
    pub height: f64,
    pub path_data: String,
}

impl PathState {
    pub fn initial() -> Self {
        Self {
            width: SVG_INITIAL_WIDTH,
            height: SVG_INITIAL_HEIGHT,
            path_data: String::new(),
        }
    }
}

/// Control points for one cubic segment between `p1` and `p2`.
fn bezier_control_points(p1: Point, p2: Point) -> (Point, Point) {
    let mid_y = (p1.y + p2.y) / 2.0;
    let is_moving_right = p2.x > p1.x;
    let vertical_distance = (p2.y - p1.y).abs() / BEZIER_CURVE_DIVISOR;
    let lean = if is_moving_right {
        BEZIER_CONTROL_OFFSET
    } else {
        -BEZIER_CONTROL_OFFSET
    };

    (
        Point {
            x: p1.x + lean,
            y: mid_y - vertical_distance + Y_OFFSET,
        },
        Point {
            x: p2.x - lean,
            y: mid_y + vertical_distance + Y_OFFSET,
        },
    )
}

/// Build the zigzag path through `points`. Fewer than two points is a valid
/// "nothing to draw" state and yields an empty string.
pub fn zigzag_path(points: &[Point]) -> String {
    if points.len() < 2 {
        return String::new();
    }

    let mut path = format!(
        "M {} {}",
        coord(points[0].x),
        coord(points[0].y + Y_OFFSET)
    );

    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        let (cp1, cp2) = bezier_control_points(p1, p2);
        path.push_str(&format!(
            " C {} {}, {} {}, {} {}",
            coord(cp1.x),
            coord(cp1.y),
            coord(cp2.x),
            coord(cp2.y),
            coord(p2.x),
            coord(p2.y + Y_OFFSET)
        ));
    }

    path
}

/// Render a coordinate without a trailing `.0` on whole numbers, matching
/// how layout engines print numbers and keeping the output stable for
/// comparison.
fn coord(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    #[test]
    fn empty_and_single_point_draw_nothing() {
        assert_eq!(zigzag_path(&[]), "");
        assert_eq!(zigzag_path(&[p(10.0, 20.0)]), "");
    }

    #[test]
    fn two_point_segment_matches_the_reference_curve() {
        // midY = 50, verticalDistance = 25, moving right, yOffset = -20.
        let path = zigzag_path(&[p(0.0, 0.0), p(100.0, 100.0)]);
        assert_eq!(path, "M 0 -20 C 60 5, 40 55, 100 80");
    }

    #[test]
    fn leftward_segments_lean_the_other_way() {
        let path = zigzag_path(&[p(100.0, 0.0), p(0.0, 100.0)]);
        // Control offset flips sign when x decreases.
        assert_eq!(path, "M 100 -20 C 40 5, 60 55, 0 80");
    }

    #[test]
    fn output_is_deterministic() {
        let points = vec![p(12.5, 0.0), p(310.0, 420.0), p(40.0, 880.0)];
        assert_eq!(zigzag_path(&points), zigzag_path(&points));
    }

    #[test]
    fn three_points_emit_two_cubic_segments() {
        let path = zigzag_path(&[p(0.0, 0.0), p(100.0, 100.0), p(0.0, 200.0)]);
        assert_eq!(path.matches(" C ").count(), 2);
        assert!(path.starts_with("M 0 -20"));
        assert!(path.ends_with("0 180"));
    }

    #[test]
    fn fractional_coordinates_print_naturally() {
        let path = zigzag_path(&[p(0.5, 0.0), p(100.5, 50.0)]);
        assert!(path.starts_with("M 0.5 -20"));
        // verticalDistance = 12.5, midY = 25 -> cp1y = 25 - 12.5 - 20 = -7.5
        assert!(path.contains("C 60.5 -7.5"));
    }
}
