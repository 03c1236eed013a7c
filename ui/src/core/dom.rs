//! Host-environment access: observer scripts and one-shot DOM commands.
//!
//! Layout is never read synchronously from Rust. Components hand the webview
//! an observer script via `document::eval`; the script attaches `window`
//! listeners, posts JSON samples back through `dioxus.send`, then parks on
//! `dioxus.recv()` until the owning component asks it to let go. That gives
//! every page-global listener an explicit acquire/release pair: the eval
//! starting is the acquire, the [`DETACH`] message is the release.

use dioxus::document;
use serde::Deserialize;

/// Message understood by every observer script: remove listeners and exit.
pub const DETACH: &str = "detach";

/// One sample of window-level scroll state, as posted by
/// [`window_observer_script`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub viewport_width: f64,
    pub doc_height: f64,
    /// `clientHeight` of the reference element the script was built with,
    /// or 0 when the selector is empty or matches nothing.
    pub reference_height: f64,
}

const WINDOW_OBSERVER_TEMPLATE: &str = r#"
const referenceSelector = __REFERENCE_SELECTOR__;

function referenceHeight() {
    if (!referenceSelector) {
        return 0;
    }
    const el = document.querySelector(referenceSelector);
    return el ? el.clientHeight : 0;
}

function sample() {
    return {
        scrollY: window.scrollY || 0,
        viewportHeight: window.innerHeight || document.documentElement.clientHeight || 0,
        viewportWidth: window.innerWidth || document.documentElement.clientWidth || 0,
        docHeight: document.documentElement.scrollHeight || 0,
        referenceHeight: referenceHeight(),
    };
}

const onScroll = () => dioxus.send(sample());
const onResize = () => dioxus.send(sample());
window.addEventListener("scroll", onScroll, { passive: true });
window.addEventListener("resize", onResize, { passive: true });
dioxus.send(sample());

await dioxus.recv();
window.removeEventListener("scroll", onScroll);
window.removeEventListener("resize", onResize);
"#;

/// Build the window observer script. `reference_selector` names an element
/// whose height the caller wants tracked alongside the scroll offset (the
/// tracing beam keys its visibility off the hero section); pass `""` when no
/// reference is needed.
pub fn window_observer_script(reference_selector: &str) -> String {
    WINDOW_OBSERVER_TEMPLATE.replace("__REFERENCE_SELECTOR__", &js_string(reference_selector))
}

/// Smooth-scroll the page back to the top.
pub fn scroll_to_top() {
    let _ = document::eval(r#"window.scrollTo({ top: 0, behavior: "smooth" });"#);
}

/// Smooth-scroll a section (by element id) to the top of the viewport.
pub fn scroll_to_section(id: &str) {
    let js = format!(
        r#"
const el = document.getElementById({id});
if (el) {{
    el.scrollIntoView({{ behavior: "smooth", block: "start" }});
}}
"#,
        id = js_string(id)
    );
    let _ = document::eval(&js);
}

/// Open an external link: mailto links navigate in place, everything else
/// opens a new tab.
pub fn open_external(url: &str) {
    let quoted = js_string(url);
    let js = if url.starts_with("mailto:") {
        format!("window.location.href = {quoted};")
    } else {
        format!(r#"window.open({quoted}, "_blank");"#)
    };
    let _ = document::eval(&js);
}

/// Lock or restore body scrolling (used while the project modal is open).
pub fn set_body_scroll_locked(locked: bool) {
    let js = if locked {
        r#"document.body.style.overflow = "hidden";"#
    } else {
        r#"document.body.style.overflow = "";"#
    };
    let _ = document::eval(js);
}

/// Set a CSS custom property on the document root.
pub fn set_root_property(name: &str, value: &str) {
    let js = format!(
        "document.documentElement.style.setProperty({}, {});",
        js_string(name),
        js_string(value)
    );
    let _ = document::eval(&js);
}

/// Quote a Rust string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}
