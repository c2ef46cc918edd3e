use dioxus::prelude::*;

use crate::core::page::Page;
use crate::t;

#[component]
pub fn Events(on_navigate: EventHandler<Page>) -> Element {
    let mut registered = use_signal(Vec::<usize>::new);

    let events = [
        (t!("event-science-fair"), "12 Nov", t!("event-online")),
        (t!("event-math-olympiad"), "20 Nov", t!("event-district-hall")),
        (t!("event-robotics-workshop"), "02 Dec", t!("event-online")),
    ];

    rsx! {
        section { class: "page page-events",
            h1 { {t!("events-title")} }
            p { {t!("events-intro")} }

            ul { class: "list",
                { events.into_iter().enumerate().map(|(idx, (name, date, venue))| {
                    let is_registered = registered.read().contains(&idx);
                    rsx! {
                        li { key: "{idx}", class: "list__item",
                            span { class: "list__tag", "{date}" }
                            span { class: "list__title", "{name}" }
                            span { class: "list__meta", "{venue}" }
                            if is_registered {
                                span { class: "badge badge--success", {t!("events-registered")} }
                            } else {
                                button {
                                    r#type: "button",
                                    class: "button button--primary",
                                    onclick: move |_| registered.write().push(idx),
                                    {t!("events-register")}
                                }
                            }
                        }
                    }
                })}
            }

            button {
                r#type: "button",
                class: "button button--ghost",
                onclick: move |_| on_navigate.call(Page::Leaderboard),
                {t!("events-see-ranks")}
            }
        }
    }
}
