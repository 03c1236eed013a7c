use dioxus::prelude::*;

use crate::components::{Connect, Footer, Hero, Projects, ScrollToTop, Skills};
use crate::timeline::{CustomTimeline, TracingBeam};

#[cfg(debug_assertions)]
fn log_home_render() {
    // Lightweight render trace for diagnosing remount issues.
    println!("[home] render");
}

#[component]
pub fn Home() -> Element {
    #[cfg(debug_assertions)]
    {
        log_home_render();
    }

    rsx! {
        TracingBeam {}

        main { class: "page page-home",
            Hero {}
            Skills {}
            Projects {}
            CustomTimeline {}
            Connect {}
        }

        Footer {}
        ScrollToTop {}
    }
}
