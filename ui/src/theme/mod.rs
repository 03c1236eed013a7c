//! Theme palettes and the CSS-variable mechanism that applies them.
//!
//! Every component reads its accent colors from four custom properties on
//! the document root; switching themes rewrites those properties and nothing
//! else. The active palette also travels through a context signal so
//! components that paint colors directly (the timeline gradient) re-render
//! on switch without watching the DOM.

use dioxus::prelude::*;

use crate::core::{color, dom, storage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
}

pub const DEFAULT_THEME_ID: &str = "blue_vibrant";

const THEMES: &[Theme] = &[
    Theme {
        id: "blue_professional",
        name: "Blue Professional",
        primary: "#0284c7",
        secondary: "#0ea5e9",
    },
    Theme {
        id: "blue_vibrant",
        name: "Blue Vibrant",
        primary: "#2563eb",
        secondary: "#0ea5e9",
    },
    Theme {
        id: "blue_electric",
        name: "Blue Electric",
        primary: "#0ea5e9",
        secondary: "#06d6ff",
    },
    Theme {
        id: "blue_classic",
        name: "Blue Classic",
        primary: "#1e40af",
        secondary: "#0284c7",
    },
    Theme {
        id: "purple",
        name: "Purple",
        primary: "#8b5cf6",
        secondary: "#d946ef",
    },
    Theme {
        id: "orange",
        name: "Orange",
        primary: "#f97316",
        secondary: "#fb923c",
    },
    Theme {
        id: "yellow",
        name: "Yellow",
        primary: "#eab308",
        secondary: "#fbbf24",
    },
    Theme {
        id: "green",
        name: "Green",
        primary: "#22c55e",
        secondary: "#4ade80",
    },
];

/// All selectable palettes, in presentation order.
pub fn themes() -> &'static [Theme] {
    THEMES
}

pub fn default_theme() -> &'static Theme {
    lookup(DEFAULT_THEME_ID).unwrap_or(&THEMES[0])
}

/// Palette for `id`, falling back to the default for unknown ids (a stale
/// stored preference must never break the page).
pub fn theme_by_id(id: &str) -> &'static Theme {
    lookup(id).unwrap_or_else(default_theme)
}

fn lookup(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|theme| theme.id == id)
}

/// Push a palette into the CSS custom properties the stylesheet reads.
pub fn apply_theme(theme: &Theme) {
    dom::set_root_property("--accent-primary", theme.primary);
    dom::set_root_property("--accent-secondary", theme.secondary);
    dom::set_root_property("--theme-primary-rgb", &color::rgb_string(theme.primary));
    dom::set_root_property("--theme-secondary-rgb", &color::rgb_string(theme.secondary));
}

/// The stored preference, or the default palette.
pub fn load_initial_theme() -> &'static Theme {
    match storage::load_theme_id() {
        Some(id) => theme_by_id(&id),
        None => default_theme(),
    }
}

/// Persist and apply a palette. A storage failure still switches the
/// in-page palette; the preference just won't survive a reload.
pub fn switch_theme(id: &str) -> &'static Theme {
    let theme = theme_by_id(id);
    if let Err(_err) = storage::store_theme_id(theme.id) {
        #[cfg(debug_assertions)]
        println!("[theme] preference not stored: {_err}");
    }
    apply_theme(theme);
    theme
}

/// The active palette signal provided at the app root. Components rendered
/// outside that provider fall back to a local signal seeded from the stored
/// preference.
pub fn use_active_theme() -> Signal<&'static Theme> {
    let fallback = use_signal(load_initial_theme);
    try_use_context::<Signal<&'static Theme>>().unwrap_or(fallback)
}
