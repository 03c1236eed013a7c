use dioxus::prelude::*;

use ui::components::Toolbar;
use ui::theme;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css).

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Provide the active palette as a global reactive signal and push the
    // stored preference into the CSS variables once on startup.
    let theme_signal = use_signal(theme::load_initial_theme);
    use_context_provider(|| theme_signal);
    use_effect(move || {
        theme::apply_theme(theme_signal());
    });

    rsx! {
        // Global app resources
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A web-specific Router shell around the shared `Toolbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebShell() -> Element {
    rsx! {
        Toolbar { }
        Outlet::<Route> {}
    }
}
