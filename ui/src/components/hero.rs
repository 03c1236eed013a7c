use dioxus::prelude::*;

use crate::components::{AppButton, ButtonSize, ButtonVariant};
use crate::core::dom;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { id: "hero", class: "hero",
            div { class: "hero__inner",
                p { class: "hero__eyebrow", "Hi, I'm" }
                h1 { class: "hero__name", "Avery Lindqvist" }
                p { class: "hero__subtitle", "Senior UI / Front-End Developer" }
                p { class: "hero__description",
                    "Nine years of building fast, accessible, scalable user interfaces \
                     for the web — design systems, data-heavy dashboards, and the \
                     occasional pixel indulgence."
                }
                div { class: "hero__actions",
                    AppButton {
                        label: "See my work",
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Large,
                        onclick: move |_| dom::scroll_to_section("projects"),
                    }
                    AppButton {
                        label: "Experience",
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Large,
                        onclick: move |_| dom::scroll_to_section("timeline"),
                    }
                }
            }
        }
    }
}
