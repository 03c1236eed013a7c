use dioxus::document;
use dioxus::prelude::*;

use crate::core::dom::{self, WindowMetrics};
use crate::core::timing;

/// Pixels scrolled before the button appears.
const SCROLL_VISIBILITY_THRESHOLD_PX: f64 = 600.0;

/// Below this viewport width the button stays hidden; small screens keep
/// their native scroll affordances.
const MIN_DESKTOP_VIEWPORT_PX: f64 = 768.0;

fn should_show(metrics: &WindowMetrics) -> bool {
    metrics.viewport_width >= MIN_DESKTOP_VIEWPORT_PX
        && metrics.scroll_y > SCROLL_VISIBILITY_THRESHOLD_PX
}

/// Floating back-to-top button. Visibility flips only when the computed
/// state actually changes, so the scroll stream causes no re-renders while
/// the button state is stable.
#[component]
pub fn ScrollToTop() -> Element {
    let mut visible = use_signal(|| false);
    let mut observer = use_signal(|| None::<document::Eval>);

    use_effect(move || {
        if observer().is_some() {
            return;
        }
        observer.set(Some(document::eval(&dom::window_observer_script(""))));
    });

    use_future(move || async move {
        let mut source = loop {
            if let Some(eval) = observer() {
                break eval;
            }
            timing::sleep_ms(16).await;
        };

        loop {
            match source.recv::<WindowMetrics>().await {
                Ok(metrics) => {
                    let next = should_show(&metrics);
                    if next != *visible.peek() {
                        visible.set(next);
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
    });

    let class = if visible() {
        "scroll-top scroll-top--visible"
    } else {
        "scroll-top"
    };

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            aria_label: "Back to top",
            onclick: move |_| dom::scroll_to_top(),
            "↑"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_y: f64, viewport_width: f64) -> WindowMetrics {
        WindowMetrics {
            scroll_y,
            viewport_height: 900.0,
            viewport_width,
            doc_height: 5_000.0,
            reference_height: 0.0,
        }
    }

    #[test]
    fn hidden_near_the_top_of_the_page() {
        assert!(!should_show(&metrics(0.0, 1_280.0)));
        assert!(!should_show(&metrics(600.0, 1_280.0)));
    }

    #[test]
    fn shown_after_the_threshold_on_desktop_widths() {
        assert!(should_show(&metrics(601.0, 1_280.0)));
        assert!(should_show(&metrics(4_000.0, 768.0)));
    }

    #[test]
    fn never_shown_on_narrow_viewports() {
        assert!(!should_show(&metrics(4_000.0, 767.0)));
        assert!(!should_show(&metrics(4_000.0, 480.0)));
    }
}
