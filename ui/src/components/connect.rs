use dioxus::prelude::*;

use crate::core::dom;

#[derive(Debug, Clone, Copy)]
struct ConnectLink {
    label: &'static str,
    url: &'static str,
    glyph: &'static str,
}

const CONNECT_LINKS: &[ConnectLink] = &[
    ConnectLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/avery-lindqvist/",
        glyph: "in",
    },
    ConnectLink {
        label: "GitHub",
        url: "https://github.com/averylindqvist",
        glyph: "◆",
    },
    ConnectLink {
        label: "Email",
        url: "mailto:avery@averylindqvist.dev",
        glyph: "✉",
    },
];

/// "Let's connect" panel between the timeline and the footer.
#[component]
pub fn Connect() -> Element {
    rsx! {
        section { id: "connect", class: "connect",
            h2 { class: "connect__title", "Let's connect" }
            p { class: "connect__lead",
                "Open to interesting interface problems, design systems, and \
                 the occasional coffee."
            }
            div { class: "connect__links",
                for link in CONNECT_LINKS.iter().copied() {
                    button {
                        key: "{link.label}",
                        r#type: "button",
                        class: "connect__link",
                        aria_label: "{link.label}",
                        onclick: move |_| dom::open_external(link.url),
                        span { class: "connect__glyph", aria_hidden: "true", "{link.glyph}" }
                        span { class: "connect__label", "{link.label}" }
                    }
                }
            }
        }
    }
}
