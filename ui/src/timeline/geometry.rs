//! Marker geometry sampling.
//!
//! The observer script reports viewport-relative bounding boxes; this module
//! reduces them to marker center points relative to the container's top-left
//! corner. Absent markers are an empty sequence, never an error: before the
//! first paint the layout simply is not there yet and the caller retries on
//! the next scheduled event.

use serde::Deserialize;

/// A marker's center relative to its container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Viewport-relative bounding box as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ElementBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementBox {
    /// Center of this box expressed relative to `container`'s top-left.
    /// Both boxes must come from the same layout pass so the shared scroll
    /// offset cancels out.
    pub fn center_relative_to(&self, container: &ElementBox) -> Point {
        Point {
            x: self.left - container.left + self.width / 2.0,
            y: self.top - container.top + self.height / 2.0,
        }
    }
}

/// One full measurement of the timeline container and its markers, in entry
/// order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineGeometry {
    pub container: ElementBox,
    pub container_width: f64,
    pub container_height: f64,
    pub markers: Vec<ElementBox>,
    pub viewport_height: f64,
}

/// Ordered marker center points relative to the container.
pub fn marker_points(geometry: &TimelineGeometry) -> Vec<Point> {
    geometry
        .markers
        .iter()
        .map(|marker| marker.center_relative_to(&geometry.container))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(left: f64, top: f64, width: f64, height: f64) -> ElementBox {
        ElementBox {
            left,
            top,
            width,
            height,
        }
    }

    #[test]
    fn centers_are_container_relative() {
        let geometry = TimelineGeometry {
            container: boxed(100.0, 400.0, 800.0, 2000.0),
            container_width: 800.0,
            container_height: 2000.0,
            markers: vec![boxed(150.0, 500.0, 20.0, 20.0), boxed(650.0, 900.0, 20.0, 20.0)],
            viewport_height: 900.0,
        };

        let points = marker_points(&geometry);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], Point { x: 60.0, y: 110.0 });
        assert_eq!(points[1], Point { x: 560.0, y: 510.0 });
    }

    #[test]
    fn scroll_offset_cancels_out() {
        // Same layout measured at two scroll positions must produce the same
        // relative points.
        let at_rest = TimelineGeometry {
            container: boxed(0.0, 300.0, 600.0, 1200.0),
            container_width: 600.0,
            container_height: 1200.0,
            markers: vec![boxed(40.0, 380.0, 16.0, 16.0)],
            viewport_height: 800.0,
        };
        let scrolled = TimelineGeometry {
            container: boxed(0.0, -450.0, 600.0, 1200.0),
            markers: vec![boxed(40.0, -370.0, 16.0, 16.0)],
            ..at_rest.clone()
        };

        assert_eq!(marker_points(&at_rest), marker_points(&scrolled));
    }

    #[test]
    fn no_markers_yields_an_empty_sequence() {
        let geometry = TimelineGeometry {
            container: boxed(0.0, 0.0, 0.0, 0.0),
            container_width: 0.0,
            container_height: 0.0,
            markers: Vec::new(),
            viewport_height: 800.0,
        };
        assert!(marker_points(&geometry).is_empty());
    }
}
