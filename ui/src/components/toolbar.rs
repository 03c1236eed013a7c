use dioxus::prelude::*;

use crate::core::dom;
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq)]
enum LinkTarget {
    Section(&'static str),
    External(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ToolbarLink {
    icon: &'static str,
    label: &'static str,
    target: LinkTarget,
}

const TOOLBAR_LINKS: &[ToolbarLink] = &[
    ToolbarLink {
        icon: "⌂",
        label: "Home",
        target: LinkTarget::Section("hero"),
    },
    ToolbarLink {
        icon: "⊕",
        label: "Skills",
        target: LinkTarget::Section("skills"),
    },
    ToolbarLink {
        icon: "▣",
        label: "Projects",
        target: LinkTarget::Section("projects"),
    },
    ToolbarLink {
        icon: "▦",
        label: "Experience",
        target: LinkTarget::Section("timeline"),
    },
    ToolbarLink {
        icon: "in",
        label: "LinkedIn",
        target: LinkTarget::External("https://www.linkedin.com/in/avery-lindqvist/"),
    },
    ToolbarLink {
        icon: "◆",
        label: "GitHub",
        target: LinkTarget::External("https://github.com/averylindqvist"),
    },
    ToolbarLink {
        icon: "✉",
        label: "Email",
        target: LinkTarget::External("mailto:avery@averylindqvist.dev"),
    },
];

fn activate(target: LinkTarget) {
    match target {
        LinkTarget::Section(id) => dom::scroll_to_section(id),
        LinkTarget::External(url) => dom::open_external(url),
    }
}

/// Floating toolbar: section navigation, external profiles, and the theme
/// picker. Selecting a palette persists it and pushes the choice into the
/// shared theme signal so color-aware components re-render.
#[component]
pub fn Toolbar() -> Element {
    let mut active_theme = theme::use_active_theme();

    let on_theme_change = move |evt: FormEvent| {
        let id = evt.value();
        let applied = theme::switch_theme(&id);
        active_theme.set(applied);
    };

    rsx! {
        nav { id: "toolbar", class: "toolbar", aria_label: "Site",
            ul { class: "toolbar__links",
                for link in TOOLBAR_LINKS.iter().copied() {
                    li { key: "{link.label}", class: "toolbar__item",
                        button {
                            r#type: "button",
                            class: "toolbar__link",
                            title: "{link.label}",
                            onclick: move |_| activate(link.target),
                            span { class: "toolbar__icon", aria_hidden: "true", "{link.icon}" }
                            span { class: "toolbar__label", "{link.label}" }
                        }
                    }
                }
            }

            div { class: "toolbar__theme",
                label {
                    class: "visually-hidden",
                    r#for: "theme-select",
                    "Color theme"
                }
                select {
                    id: "theme-select",
                    class: "toolbar__theme-select",
                    value: "{active_theme().id}",
                    oninput: on_theme_change,
                    for palette in theme::themes().iter() {
                        option { key: "{palette.id}", value: "{palette.id}", "{palette.name}" }
                    }
                }
            }
        }
    }
}
