use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::{AppProviders, AppShell};

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("[mobile] logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        AppProviders {
            AppShell {}
        }
    }
}
