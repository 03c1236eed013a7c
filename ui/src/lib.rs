//! Shared UI crate for Folio. Most cross-platform logic and views live here.

pub mod content;
pub mod core;
pub mod theme;
pub mod timeline;
pub mod views;

pub mod components {
    pub mod button;
    pub use button::{AppButton, ButtonSize, ButtonVariant};

    pub mod connect;
    pub use connect::Connect;

    pub mod footer;
    pub use footer::Footer;

    pub mod hero;
    pub use hero::Hero;

    pub mod project_modal;
    pub use project_modal::ProjectModal;

    pub mod projects;
    pub use projects::Projects;

    pub mod scroll_to_top;
    pub use scroll_to_top::ScrollToTop;

    pub mod skills;
    pub use skills::Skills;

    pub mod toolbar;
    pub use toolbar::Toolbar;
}
