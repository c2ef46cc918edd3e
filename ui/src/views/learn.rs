use dioxus::prelude::*;

use crate::core::page::Page;
use crate::t;

#[component]
pub fn Learn(on_navigate: EventHandler<Page>) -> Element {
    let modules = [
        ("⚛️", t!("subject-physics"), 12),
        ("⚗️", t!("subject-chemistry"), 10),
        ("🧬", t!("subject-biology"), 9),
        ("📐", t!("subject-math"), 15),
    ];

    rsx! {
        section { class: "page page-learn",
            h1 { {t!("learn-title")} }
            p { {t!("learn-intro")} }

            div { class: "card-grid",
                for (icon, subject, lessons) in modules {
                    article { key: "{subject}", class: "card",
                        span { class: "card__icon", aria_hidden: "true", "{icon}" }
                        span { class: "card__title", "{subject}" }
                        span { class: "card__body", {t!("learn-lessons", count = lessons)} }
                    }
                }
            }

            button {
                r#type: "button",
                class: "button button--primary",
                onclick: move |_| on_navigate.call(Page::Arena),
                {t!("learn-practice")}
            }
        }
    }
}
