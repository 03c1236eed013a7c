//! Scroll progress and entry highlighting.
//!
//! Progress runs 0 while the container's top is still below the viewport and
//! reaches 1 once its bottom has scrolled past the top edge. Emission is
//! gated by a rounded epsilon so near-identical scroll offsets never
//! re-trigger downstream redraws.

use super::{PROGRESS_HIGHLIGHT_THRESHOLD, PROGRESS_PRECISION};

/// Fill ratio plus the entry the fill has reached. `-1` means no entry is
/// highlighted yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressState {
    pub scroll_progress: f64,
    pub highlighted_index: i32,
}

impl ProgressState {
    pub fn initial() -> Self {
        Self {
            scroll_progress: 0.0,
            highlighted_index: -1,
        }
    }
}

/// Normalized scroll progress for a container rect within the viewport:
/// `(viewportHeight - rect.top) / (viewportHeight + rect.height)`, clamped
/// to [0, 1] whatever the rect reports.
pub fn scroll_progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    let span = viewport_height + rect_height;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect_top) / span).clamp(0.0, 1.0)
}

/// Anti-churn gate around progress emission. Values are compared after
/// rounding to three decimals; the sentinel start value guarantees the first
/// sample always emits.
#[derive(Debug, Clone, Copy)]
pub struct ProgressTracker {
    last_emitted: f64,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self { last_emitted: -1.0 }
    }

    /// Returns the progress to publish, or `None` when the change is below
    /// the precision threshold and downstream state must stay untouched.
    pub fn update(&mut self, progress: f64) -> Option<f64> {
        let rounded = round_to_precision(progress);
        if (rounded - self.last_emitted).abs() > PROGRESS_PRECISION {
            self.last_emitted = rounded;
            Some(progress)
        } else {
            None
        }
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Largest marker index whose center the fill line has passed, `-1` when the
/// fill has not reached the first marker. Past the highlight threshold the
/// last entry is forced on so sub-pixel layout slack cannot keep it dark at
/// the end of the scroll range.
pub fn highlighted_index(progress: f64, container_height: f64, marker_ys: &[f64]) -> i32 {
    if marker_ys.is_empty() {
        return -1;
    }

    if progress >= PROGRESS_HIGHLIGHT_THRESHOLD {
        return marker_ys.len() as i32 - 1;
    }

    let fill_height = container_height * progress;
    let mut highest = -1;
    for (index, marker_y) in marker_ys.iter().enumerate() {
        if fill_height >= *marker_y {
            highest = index as i32;
        }
    }
    highest
}

fn round_to_precision(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_for_any_rect() {
        // Container far below the viewport.
        assert_eq!(scroll_progress(5_000.0, 1_000.0, 800.0), 0.0);
        // Container scrolled far past the top.
        assert_eq!(scroll_progress(-10_000.0, 1_000.0, 800.0), 1.0);
        // Degenerate span.
        assert_eq!(scroll_progress(100.0, -800.0, 800.0), 0.0);
    }

    #[test]
    fn progress_grows_as_the_container_scrolls_up() {
        let mut previous = -1.0;
        let mut top = 800.0;
        while top >= -1_000.0 {
            let progress = scroll_progress(top, 1_000.0, 800.0);
            assert!(progress >= previous);
            previous = progress;
            top -= 25.0;
        }
        assert_eq!(previous, 1.0);
    }

    #[test]
    fn partially_scrolled_container_highlights_first_marker() {
        // progress = (800 - 200) / (800 + 1000) = 1/3; fill = 333.3.
        let progress = scroll_progress(200.0, 1_000.0, 800.0);
        assert!((progress - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(
            highlighted_index(progress, 1_000.0, &[100.0, 500.0, 900.0]),
            0
        );
    }

    #[test]
    fn threshold_snaps_the_last_marker_on() {
        // progress = (800 + 850) / 1800 = 0.9166..., past the 0.85 snap.
        let progress = scroll_progress(-850.0, 1_000.0, 800.0);
        assert!(progress >= PROGRESS_HIGHLIGHT_THRESHOLD);
        assert_eq!(
            highlighted_index(progress, 1_000.0, &[100.0, 500.0, 900.0]),
            2
        );
    }

    #[test]
    fn snap_applies_for_any_layout_past_threshold() {
        // Even when the geometric fill test would select nothing.
        assert_eq!(highlighted_index(0.85, 10.0, &[1_000.0, 2_000.0]), 1);
    }

    #[test]
    fn no_markers_means_no_highlight() {
        assert_eq!(highlighted_index(0.9, 1_000.0, &[]), -1);
    }

    #[test]
    fn fill_short_of_the_first_marker_highlights_nothing() {
        assert_eq!(highlighted_index(0.05, 1_000.0, &[100.0, 500.0]), -1);
    }

    #[test]
    fn tracker_emits_first_sample_then_suppresses_jitter() {
        let mut tracker = ProgressTracker::new();
        assert_eq!(tracker.update(0.0), Some(0.0));
        // Sub-epsilon wobble around the emitted value stays silent, and a
        // delta of exactly the precision does not emit either.
        assert_eq!(tracker.update(0.0004), None);
        assert_eq!(tracker.update(0.001), None);
        // A real move emits again.
        assert_eq!(tracker.update(0.003), Some(0.003));
    }

    #[test]
    fn tracker_compares_against_last_emitted_value() {
        let mut tracker = ProgressTracker::new();
        assert!(tracker.update(0.5).is_some());
        // A suppressed sample must not shift the baseline: 0.5004 rounds back
        // to the emitted 0.5, and the following jump is measured from 0.5.
        assert_eq!(tracker.update(0.5004), None);
        assert_eq!(tracker.update(0.502), Some(0.502));
    }
}
