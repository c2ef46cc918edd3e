use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::{AppProviders, AppShell};

const MANIFEST: Asset = asset!("/assets/manifest.webmanifest");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("[web] logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        // Global app resources
        document::Title { "STEMQuest" }
        document::Link { rel: "manifest", href: MANIFEST }
        document::Meta { name: "theme-color", content: "#4f46e5" }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        AppProviders {
            AppShell {}
        }
    }
}
