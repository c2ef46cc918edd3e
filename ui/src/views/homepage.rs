use dioxus::prelude::*;

use crate::components::use_auth;
use crate::core::auth::AuthProvider;
use crate::core::page::Page;
use crate::i18n;
use crate::t;

#[component]
pub fn Homepage(on_navigate: EventHandler<Page>) -> Element {
    let auth = use_auth();
    let user = auth.user();
    let sign_out = move |_: MouseEvent| auth.sign_out();

    let cards = [
        (Page::Learn, t!("home-card-learn")),
        (Page::VirtualLab, t!("home-card-lab")),
        (Page::Arena, t!("home-card-arena")),
        (Page::Events, t!("home-card-events")),
    ];

    let session = match user {
        Some(profile) => {
            let role = i18n::tr(profile.role.label_key());
            let clock = profile.signed_in_clock();
            rsx! {
                div { class: "page-home__session",
                    p { class: "page-home__greeting", {t!("home-greeting", name = profile.name.as_str())} }
                    p { class: "page-home__meta", {t!("home-signed-in", role = role.as_str(), time = clock.as_str())} }
                    button { r#type: "button", class: "button button--ghost", onclick: sign_out, {t!("home-sign-out")} }
                }
            }
        }
        None => rsx! {
            div { class: "page-home__session",
                p { class: "page-home__greeting", {t!("home-guest")} }
            }
        },
    };

    rsx! {
        section { class: "page page-home",
            h1 { {t!("home-title")} }

            {session}

            p { {t!("home-intro")} }

            h2 { {t!("home-quick-title")} }
            div { class: "card-grid",
                for (page, blurb) in cards {
                    button {
                        key: "{page}",
                        r#type: "button",
                        class: "card card--link",
                        onclick: move |_| on_navigate.call(page),
                        span { class: "card__icon", aria_hidden: "true", {page.icon()} }
                        span { class: "card__title", {i18n::tr(page.label_key())} }
                        span { class: "card__body", "{blurb}" }
                    }
                }
            }
        }
    }
}
