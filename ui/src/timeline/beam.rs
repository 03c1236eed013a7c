//! Full-page tracing beam overlay.
//!
//! A thin gradient bar in a fixed overlay that rides the page's scrollbar
//! position once the visitor has scrolled past the hero section. The loop has
//! the same shape as the timeline driver (measure scroll, normalize progress,
//! redraw) but the beam owns its observer, its canvas, and its state; the
//! two lifecycles are deliberately not shared.

use dioxus::document;
use dioxus::prelude::*;
use serde::Serialize;

use crate::core::dom::{self, WindowMetrics};
use crate::core::throttle::Throttle;
use crate::core::timing;

/// Fraction of the viewport the beam spans.
pub const BEAM_SPAN_FRACTION: f64 = 0.3;

/// Scroll sampling gate; the painter is cheap but not free.
const BEAM_THROTTLE_MS: f64 = 16.0;

/// One resolved paint state for the beam canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamFrame {
    pub visible: bool,
    pub top: f64,
    pub height: f64,
    pub canvas_height: f64,
}

/// Normalized scroll progress through the content below the reference
/// element (the hero). 0 until the reference has scrolled away, 1 at the
/// bottom of the document.
pub fn progress_past_reference(metrics: &WindowMetrics) -> f64 {
    let scroll_track = metrics.doc_height - metrics.viewport_height;
    let max_after = scroll_track - metrics.reference_height;
    if max_after <= 0.0 {
        return 0.0;
    }
    let after = (metrics.scroll_y - metrics.reference_height).max(0.0);
    (after / max_after).clamp(0.0, 1.0)
}

/// Resolve a window sample into the beam's paint state.
pub fn beam_frame(metrics: &WindowMetrics) -> BeamFrame {
    let canvas_height = metrics.viewport_height;
    let height = canvas_height * BEAM_SPAN_FRACTION;
    let top = progress_past_reference(metrics) * (canvas_height - height);

    BeamFrame {
        visible: metrics.scroll_y > metrics.reference_height,
        top,
        height,
        canvas_height,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
enum BeamMessage {
    Frame {
        visible: bool,
        top: f64,
        height: f64,
        canvas_height: f64,
    },
    Detach,
}

impl From<BeamFrame> for BeamMessage {
    fn from(frame: BeamFrame) -> Self {
        BeamMessage::Frame {
            visible: frame.visible,
            top: frame.top,
            height: frame.height,
            canvas_height: frame.canvas_height,
        }
    }
}

/// Painter script. Receives frames, sizes the canvas, toggles the overlay's
/// opacity, and draws the gradient beam: a main vertical gradient, a width
/// sweep that thickens toward the bottom, and a soft core glow.
const BEAM_PAINTER_SCRIPT: &str = r#"
const canvasId = "tracing-beam-canvas";
let canvas = null;
let ctx = null;

function getCanvas() {
    if (!canvas || !document.body.contains(canvas)) {
        canvas = document.getElementById(canvasId);
        ctx = canvas ? canvas.getContext("2d") : null;
    }
    return { canvas, ctx };
}

for (;;) {
    const msg = await dioxus.recv();
    if (!msg || msg.kind === "detach") {
        break;
    }
    if (msg.kind !== "frame") {
        continue;
    }

    const state = getCanvas();
    if (!state.canvas || !state.ctx) {
        continue;
    }

    const container = state.canvas.parentElement;
    if (container) {
        container.style.opacity = msg.visible ? "1" : "0";
    }
    if (state.canvas.height !== msg.canvasHeight) {
        state.canvas.height = msg.canvasHeight;
    }

    const w = state.canvas.width;
    state.ctx.clearRect(0, 0, w, state.canvas.height);
    if (!msg.visible) {
        continue;
    }

    const top = msg.top;
    const h = msg.height;

    const gradient = state.ctx.createLinearGradient(0, top, 0, top + h);
    gradient.addColorStop(0, "rgba(139, 92, 246, 0)");
    gradient.addColorStop(0.1, "rgba(139, 92, 246, 0.15)");
    gradient.addColorStop(0.25, "rgba(139, 92, 246, 0.4)");
    gradient.addColorStop(0.4, "rgba(217, 70, 239, 0.7)");
    gradient.addColorStop(0.55, "rgba(217, 70, 239, 0.8)");
    gradient.addColorStop(0.7, "rgba(100, 150, 246, 0.8)");
    gradient.addColorStop(0.85, "rgba(100, 150, 246, 0.7)");
    gradient.addColorStop(0.95, "rgba(100, 150, 246, 0.3)");
    gradient.addColorStop(1, "rgba(100, 150, 246, 0.05)");
    state.ctx.fillStyle = gradient;
    state.ctx.fillRect(0, top, w, h);

    for (let i = 0; i < h; i += 2) {
        const y = top + i;
        const t = i / h;
        const widthMultiplier = 0.5 + t * 1.5;
        const opacity = Math.pow(t, 0.8);
        const line = state.ctx.createLinearGradient(0, y, 0, y + 2);
        line.addColorStop(0, `rgba(100, 150, 246, ${0.1 * opacity})`);
        line.addColorStop(0.5, `rgba(217, 70, 239, ${0.3 * opacity})`);
        line.addColorStop(1, `rgba(139, 92, 246, ${0.1 * opacity})`);
        state.ctx.fillStyle = line;
        state.ctx.fillRect(0, y, w * widthMultiplier, 2);
    }

    const core = state.ctx.createLinearGradient(0, top, 0, top + h);
    core.addColorStop(0, "rgba(100, 150, 246, 0)");
    core.addColorStop(0.5, "rgba(217, 70, 239, 0.2)");
    core.addColorStop(1, "rgba(100, 150, 246, 0.3)");
    state.ctx.fillStyle = core;
    state.ctx.fillRect(0, top, w, h);
}
"#;

#[component]
pub fn TracingBeam() -> Element {
    let mut observer = use_signal(|| None::<document::Eval>);
    let mut painter = use_signal(|| None::<document::Eval>);

    use_effect(move || {
        if observer().is_some() {
            return;
        }
        observer.set(Some(document::eval(&dom::window_observer_script(".hero"))));
    });

    use_effect(move || {
        if painter().is_some() {
            return;
        }
        painter.set(Some(document::eval(BEAM_PAINTER_SCRIPT)));
    });

    use_future(move || async move {
        let mut source = loop {
            if let Some(eval) = observer() {
                break eval;
            }
            timing::sleep_ms(16).await;
        };

        let mut gate = Throttle::new(BEAM_THROTTLE_MS);
        let mut last_frame: Option<BeamFrame> = None;

        loop {
            match source.recv::<WindowMetrics>().await {
                Ok(metrics) => {
                    if !gate.ready(timing::now_ms()) {
                        continue;
                    }
                    let frame = beam_frame(&metrics);
                    if last_frame == Some(frame) {
                        continue;
                    }
                    last_frame = Some(frame);
                    if let Some(sink) = painter() {
                        let _ = sink.send(BeamMessage::from(frame));
                    }
                }
                Err(_) => break,
            }
        }
    });

    use_drop(move || {
        if let Some(eval) = observer.peek().clone() {
            let _ = eval.send(dom::DETACH);
        }
        if let Some(eval) = painter.peek().clone() {
            let _ = eval.send(BeamMessage::Detach);
        }
    });

    rsx! {
        div { class: "tracing-beam", aria_hidden: "true",
            canvas {
                id: "tracing-beam-canvas",
                class: "tracing-beam__canvas",
                width: "4",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_y: f64, reference_height: f64) -> WindowMetrics {
        WindowMetrics {
            scroll_y,
            viewport_height: 800.0,
            viewport_width: 1280.0,
            doc_height: 4_000.0,
            reference_height,
        }
    }

    #[test]
    fn hidden_until_the_reference_scrolls_away() {
        assert!(!beam_frame(&metrics(0.0, 600.0)).visible);
        assert!(!beam_frame(&metrics(600.0, 600.0)).visible);
        assert!(beam_frame(&metrics(601.0, 600.0)).visible);
    }

    #[test]
    fn progress_normalizes_over_the_post_reference_track() {
        // Scroll track = 4000 - 800 = 3200; after the 600px hero, 2600 remain.
        assert_eq!(progress_past_reference(&metrics(600.0, 600.0)), 0.0);
        assert_eq!(progress_past_reference(&metrics(1_900.0, 600.0)), 0.5);
        assert_eq!(progress_past_reference(&metrics(3_200.0, 600.0)), 1.0);
        // Overscroll clamps.
        assert_eq!(progress_past_reference(&metrics(9_999.0, 600.0)), 1.0);
    }

    #[test]
    fn degenerate_track_reports_zero_progress() {
        let short = WindowMetrics {
            scroll_y: 50.0,
            viewport_height: 800.0,
            viewport_width: 1280.0,
            doc_height: 700.0,
            reference_height: 600.0,
        };
        assert_eq!(progress_past_reference(&short), 0.0);
    }

    #[test]
    fn beam_spans_a_viewport_fraction_and_rides_progress() {
        let frame = beam_frame(&metrics(3_200.0, 600.0));
        assert_eq!(frame.height, 800.0 * BEAM_SPAN_FRACTION);
        assert_eq!(frame.canvas_height, 800.0);
        // Fully scrolled: the beam sits at the bottom of its track.
        assert_eq!(frame.top, 800.0 - frame.height);
    }
}
