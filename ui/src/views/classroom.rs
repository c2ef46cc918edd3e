use dioxus::prelude::*;

use crate::core::page::Page;
use crate::t;

struct Assignment {
    subject: String,
    title: &'static str,
    due: &'static str,
}

#[component]
pub fn Classroom(on_navigate: EventHandler<Page>) -> Element {
    let assignments = [
        Assignment {
            subject: t!("subject-physics"),
            title: "Newton's laws worksheet",
            due: "Mon",
        },
        Assignment {
            subject: t!("subject-chemistry"),
            title: "Acids and bases quiz",
            due: "Wed",
        },
        Assignment {
            subject: t!("subject-math"),
            title: "Fractions practice set",
            due: "Fri",
        },
    ];

    rsx! {
        section { class: "page page-classroom",
            h1 { {t!("classroom-title")} }
            p { {t!("classroom-intro")} }

            h2 { {t!("classroom-assignments")} }
            ul { class: "list",
                for item in assignments {
                    li { key: "{item.title}", class: "list__item",
                        span { class: "list__tag", "{item.subject}" }
                        span { class: "list__title", "{item.title}" }
                        span { class: "list__meta", {t!("classroom-due", day = item.due)} }
                    }
                }
            }

            button {
                r#type: "button",
                class: "button button--accent",
                onclick: move |_| on_navigate.call(Page::VirtualLab),
                {t!("classroom-open-lab")}
            }
        }
    }
}
