use dioxus::prelude::*;

use crate::core::page::Page;
use crate::t;

#[component]
pub fn VirtualLab(on_navigate: EventHandler<Page>) -> Element {
    let mut running = use_signal(|| Option::<String>::None);

    let experiments = [
        (t!("lab-exp-pendulum"), t!("subject-physics"), 10),
        (t!("lab-exp-titration"), t!("subject-chemistry"), 15),
        (t!("lab-exp-circuit"), t!("subject-physics"), 20),
        (t!("lab-exp-microscope"), t!("subject-biology"), 12),
    ];

    rsx! {
        section { class: "page page-lab",
            h1 { {t!("lab-title")} }
            p { {t!("lab-intro")} }

            if let Some(name) = running() {
                div { class: "lab-status",
                    span { {t!("lab-running", experiment = name.as_str())} }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| running.set(None),
                        {t!("lab-stop")}
                    }
                }
            }

            ul { class: "list",
                { experiments.into_iter().map(|(name, subject, minutes)| {
                    let selected = name.clone();
                    rsx! {
                        li { key: "{name}", class: "list__item",
                            span { class: "list__tag", "{subject}" }
                            span { class: "list__title", "{name}" }
                            span { class: "list__meta", {t!("lab-duration", minutes = minutes)} }
                            button {
                                r#type: "button",
                                class: "button button--primary",
                                onclick: move |_| running.set(Some(selected.clone())),
                                {t!("lab-start")}
                            }
                        }
                    }
                })}
            }

            button {
                r#type: "button",
                class: "button button--ghost",
                onclick: move |_| on_navigate.call(Page::Learn),
                {t!("lab-back-learn")}
            }
        }
    }
}
