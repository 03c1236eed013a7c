//! Scroll-driven experience timeline.
//!
//! The subsystem splits into pure stages and one stateful driver:
//! [`geometry`] turns measured marker boxes into container-relative points,
//! [`path`] threads a bezier stroke through them, [`progress`] maps the
//! container's viewport position to a fill ratio and highlighted entry, and
//! [`view::CustomTimeline`] wires the three to the page's scroll and resize
//! events. The [`beam`] overlay is a structurally parallel sibling with its
//! own lifecycle, not a client of the same machinery.

pub mod beam;
pub mod geometry;
pub mod path;
pub mod progress;

mod view;

pub use beam::TracingBeam;
pub use view::CustomTimeline;

// Scroll & resize throttling
pub const SCROLL_THROTTLE_MS: f64 = 16.0; // one animation frame
pub const RESIZE_THROTTLE_MS: f64 = 250.0; // resizes are rare and layout-expensive

// Marker geometry is not final on the mount tick; the first path pass waits.
pub const PATH_GENERATION_DELAY_MS: u64 = 100;

// Bezier curve parameters
pub const Y_OFFSET: f64 = -20.0; // vertical calibration so the stroke meets marker centers
pub const BEZIER_CONTROL_OFFSET: f64 = 60.0;
pub const BEZIER_CURVE_DIVISOR: f64 = 4.0;

// Progress & highlighting
pub const PROGRESS_PRECISION: f64 = 0.001;
pub const PROGRESS_HIGHLIGHT_THRESHOLD: f64 = 0.85;

// SVG viewport before the first real measurement arrives
pub const SVG_INITIAL_WIDTH: f64 = 100.0;
pub const SVG_INITIAL_HEIGHT: f64 = 1000.0;
