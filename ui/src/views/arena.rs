use dioxus::prelude::*;

use crate::core::page::Page;
use crate::t;

#[component]
pub fn Arena(on_navigate: EventHandler<Page>) -> Element {
    let mut played = use_signal(|| 0u32);

    let challenges = [
        ("⚡", t!("arena-speed-round"), t!("subject-math"), 50),
        ("🧠", t!("arena-concept-duel"), t!("subject-physics"), 80),
        ("🧫", t!("arena-lab-mystery"), t!("subject-biology"), 120),
    ];

    rsx! {
        section { class: "page page-arena",
            h1 { {t!("arena-title")} }
            p { {t!("arena-intro")} }

            if played() > 0 {
                p { class: "badge badge--success", {t!("arena-played", count = played())} }
            }

            div { class: "card-grid",
                for (icon, name, subject, xp) in challenges {
                    article { key: "{name}", class: "card",
                        span { class: "card__icon", aria_hidden: "true", "{icon}" }
                        span { class: "card__title", "{name}" }
                        span { class: "card__body", "{subject}" }
                        span { class: "card__meta", {t!("arena-xp", xp = xp)} }
                        button {
                            r#type: "button",
                            class: "button button--accent",
                            onclick: move |_| played += 1,
                            {t!("arena-play")}
                        }
                    }
                }
            }

            button {
                r#type: "button",
                class: "button button--ghost",
                onclick: move |_| on_navigate.call(Page::Leaderboard),
                {t!("arena-see-ranks")}
            }
        }
    }
}
