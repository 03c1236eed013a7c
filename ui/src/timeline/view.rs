use dioxus::document;
use dioxus::prelude::*;
use serde::Deserialize;

use crate::content;
use crate::core::color;
use crate::core::dom;
use crate::core::throttle::Throttle;
use crate::core::{platform, timing};
use crate::theme;

use super::geometry::{marker_points, ElementBox, TimelineGeometry};
use super::path::{zigzag_path, PathState};
use super::progress::{highlighted_index, scroll_progress, ProgressState, ProgressTracker};
use super::{PATH_GENERATION_DELAY_MS, RESIZE_THROTTLE_MS, SCROLL_THROTTLE_MS};

/// Observer script for the timeline container. Scroll events carry only the
/// container box (progress is cheap and frequent); resize events and explicit
/// "measure" requests carry the full marker geometry, all boxes taken from
/// the same layout pass. The script parks on `dioxus.recv()` so the owning
/// component can ask for measurements or tell it to release its listeners.
const TIMELINE_OBSERVER_SCRIPT: &str = r#"
const containerId = "timeline-container";

function host() {
    return document.getElementById(containerId);
}

function box(el) {
    const rect = el.getBoundingClientRect();
    return { left: rect.left, top: rect.top, width: rect.width, height: rect.height };
}

function viewportHeight() {
    return window.innerHeight || document.documentElement.clientHeight || 0;
}

function fullGeometry(el) {
    const markers = [];
    el.querySelectorAll(".timeline-item").forEach((item) => {
        const dot = item.querySelector(".timeline-item__dot");
        if (dot) {
            markers.push(box(dot));
        }
    });
    return {
        container: box(el),
        containerWidth: el.offsetWidth,
        containerHeight: el.offsetHeight,
        markers: markers,
        viewportHeight: viewportHeight(),
    };
}

const onScroll = () => {
    const el = host();
    if (!el) {
        return;
    }
    dioxus.send({ kind: "scroll", container: box(el), viewportHeight: viewportHeight() });
};

const onResize = () => {
    const el = host();
    if (!el) {
        return;
    }
    dioxus.send({ kind: "resize", geometry: fullGeometry(el) });
};

window.addEventListener("scroll", onScroll, { passive: true });
window.addEventListener("resize", onResize, { passive: true });
onScroll();

for (;;) {
    const msg = await dioxus.recv();
    if (msg === "measure") {
        const el = host();
        if (el) {
            dioxus.send({ kind: "layout", geometry: fullGeometry(el) });
        }
        continue;
    }
    if (msg === "detach") {
        break;
    }
}
window.removeEventListener("scroll", onScroll);
window.removeEventListener("resize", onResize);
"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
enum TimelineSignal {
    Scroll {
        container: ElementBox,
        viewport_height: f64,
    },
    Resize {
        geometry: TimelineGeometry,
    },
    Layout {
        geometry: TimelineGeometry,
    },
}

/// Scroll-driven experience timeline: a zigzag bezier stroke threaded through
/// entry markers, with fill and highlight state tracking the page's scroll
/// position.
#[component]
pub fn CustomTimeline() -> Element {
    let entries = content::timeline_entries();
    let theme = theme::use_active_theme();

    let path_state = use_signal(PathState::initial);
    let progress_state = use_signal(ProgressState::initial);
    let mut observer = use_signal(|| None::<document::Eval>);

    use_effect(move || {
        if observer().is_some() {
            return;
        }
        observer.set(Some(document::eval(TIMELINE_OBSERVER_SCRIPT)));
    });

    use_future(move || async move {
        let mut eval = loop {
            if let Some(eval) = observer() {
                break eval;
            }
            timing::sleep_ms(16).await;
        };

        // The observer sends an initial scroll sample on attach, which covers
        // a timeline already in view on load. The first full measurement is
        // requested once layout has settled.
        {
            let handle = eval.clone();
            platform::spawn_future(async move {
                timing::sleep_ms(PATH_GENERATION_DELAY_MS).await;
                let _ = handle.send("measure");
            });
        }

        let mut scroll_gate = Throttle::new(SCROLL_THROTTLE_MS);
        let mut resize_gate = Throttle::new(RESIZE_THROTTLE_MS);
        let mut tracker = ProgressTracker::new();
        let mut marker_ys: Vec<f64> = Vec::new();

        loop {
            match eval.recv::<TimelineSignal>().await {
                Ok(TimelineSignal::Scroll {
                    container,
                    viewport_height,
                }) => {
                    if !scroll_gate.ready(timing::now_ms()) {
                        continue;
                    }
                    push_progress(
                        container,
                        viewport_height,
                        &marker_ys,
                        &mut tracker,
                        progress_state,
                    );
                }
                Ok(TimelineSignal::Resize { geometry }) => {
                    if !resize_gate.ready(timing::now_ms()) {
                        continue;
                    }
                    marker_ys = rebuild_path(&geometry, path_state);
                    push_progress(
                        geometry.container,
                        geometry.viewport_height,
                        &marker_ys,
                        &mut tracker,
                        progress_state,
                    );
                }
                Ok(TimelineSignal::Layout { geometry }) => {
                    marker_ys = rebuild_path(&geometry, path_state);
                    push_progress(
                        geometry.container,
                        geometry.viewport_height,
                        &marker_ys,
                        &mut tracker,
                        progress_state,
                    );
                }
                Err(_) => break,
            }
        }
    });

    use_drop(move || {
        if let Some(eval) = observer.peek().clone() {
            let _ = eval.send(dom::DETACH);
        }
    });

    let PathState {
        width,
        height,
        path_data,
    } = path_state();
    let ProgressState {
        scroll_progress,
        highlighted_index,
    } = progress_state();

    let palette = theme();
    let primary_rgb = color::rgb_string(palette.primary);
    let fill_percent = scroll_progress * 100.0;

    rsx! {
        section { id: "timeline", class: "timeline",
            div { class: "timeline__intro",
                h2 { class: "timeline__title", "Experience" }
                p { class: "timeline__subtitle",
                    "A decade of shipping interfaces, one era at a time."
                }
            }

            div { id: "timeline-container", class: "timeline__container",
                svg {
                    class: "timeline__stroke",
                    width: "{width}",
                    height: "{height}",
                    view_box: "0 0 {width} {height}",
                    preserve_aspect_ratio: "none",
                    "aria-hidden": "true",
                    defs {
                        linearGradient {
                            id: "timeline-stroke-gradient",
                            x1: "0%",
                            y1: "0%",
                            x2: "0%",
                            y2: "100%",
                            stop { offset: "0%", stop_color: "rgba({primary_rgb}, 0.25)" }
                            stop { offset: "35%", stop_color: "{palette.primary}" }
                            stop { offset: "70%", stop_color: "{palette.secondary}" }
                            stop { offset: "100%", stop_color: "{palette.secondary}" }
                        }
                    }
                    if !path_data.is_empty() {
                        path {
                            d: "{path_data}",
                            fill: "none",
                            stroke: "url(#timeline-stroke-gradient)",
                            stroke_width: "3",
                            stroke_linecap: "round",
                        }
                    }
                }

                div { class: "timeline__fill", style: "height: {fill_percent}%;" }

                for (index, entry) in entries.iter().enumerate() {
                    div {
                        key: "{entry.year}-{index}",
                        class: if (index as i32) <= highlighted_index {
                            "timeline-item timeline-item--lit"
                        } else {
                            "timeline-item"
                        },
                        div { class: "timeline-item__dot", aria_hidden: "true" }
                        span { class: "timeline-item__year", "{entry.year}" }
                        div { class: "timeline-item__card",
                            h3 { class: "timeline-item__role", "{entry.title}" }
                            p { class: "timeline-item__summary", "{entry.description}" }
                            ul { class: "timeline-item__details",
                                for detail in entry.details.iter() {
                                    li { "{detail}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Recompute the stroke from a fresh measurement and return the marker center
/// heights the highlight derivation reuses on scroll. A measurement with
/// fewer than two markers leaves the previous stroke alone; the layout is
/// not ready yet and the next scheduled event retries.
fn rebuild_path(geometry: &TimelineGeometry, mut path_state: Signal<PathState>) -> Vec<f64> {
    let points = marker_points(geometry);
    if points.len() >= 2 {
        let next = PathState {
            width: geometry.container_width,
            height: geometry.container_height,
            path_data: zigzag_path(&points),
        };
        if *path_state.peek() != next {
            #[cfg(debug_assertions)]
            println!("[timeline] path rebuilt through {} markers", points.len());
            path_state.set(next);
        }
    }
    points.iter().map(|point| point.y).collect()
}

/// Fold a scroll sample into progress + highlight state. The tracker
/// suppresses sub-epsilon changes so the presentation layer only sees real
/// movement.
fn push_progress(
    container: ElementBox,
    viewport_height: f64,
    marker_ys: &[f64],
    tracker: &mut ProgressTracker,
    mut progress_state: Signal<ProgressState>,
) {
    let progress = scroll_progress(container.top, container.height, viewport_height);
    let Some(progress) = tracker.update(progress) else {
        return;
    };

    let next = ProgressState {
        scroll_progress: progress,
        highlighted_index: highlighted_index(progress, container.height, marker_ys),
    };
    if *progress_state.peek() != next {
        progress_state.set(next);
    }
}
