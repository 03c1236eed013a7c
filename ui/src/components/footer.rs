use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::core::dom;

#[derive(Debug, Clone, Copy)]
struct FooterLink {
    label: &'static str,
    url: &'static str,
}

const SOCIAL_LINKS: &[FooterLink] = &[
    FooterLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/avery-lindqvist/",
    },
    FooterLink {
        label: "GitHub",
        url: "https://github.com/averylindqvist",
    },
    FooterLink {
        label: "Email",
        url: "mailto:avery@averylindqvist.dev",
    },
];

const NAVIGATION_LINKS: &[(&str, &str)] = &[
    ("Home", "hero"),
    ("Skills", "skills"),
    ("Projects", "projects"),
    ("Experience", "timeline"),
];

#[component]
pub fn Footer() -> Element {
    let current_year = OffsetDateTime::now_utc().year();

    rsx! {
        footer { class: "footer",
            div { class: "footer__columns",
                div { class: "footer__column",
                    h4 { class: "footer__heading", "Navigate" }
                    ul { class: "footer__list",
                        for (label, section) in NAVIGATION_LINKS.iter().copied() {
                            li { key: "{label}",
                                button {
                                    r#type: "button",
                                    class: "footer__link",
                                    onclick: move |_| dom::scroll_to_section(section),
                                    "{label}"
                                }
                            }
                        }
                    }
                }
                div { class: "footer__column",
                    h4 { class: "footer__heading", "Elsewhere" }
                    ul { class: "footer__list",
                        for link in SOCIAL_LINKS.iter().copied() {
                            li { key: "{link.label}",
                                button {
                                    r#type: "button",
                                    class: "footer__link",
                                    onclick: move |_| dom::open_external(link.url),
                                    "{link.label}"
                                }
                            }
                        }
                    }
                }
            }

            div { class: "footer__bottom",
                span { class: "footer__copyright",
                    "© {current_year} Avery Lindqvist. Built with Rust and Dioxus."
                }
            }
        }
    }
}
