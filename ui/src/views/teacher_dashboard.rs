use dioxus::prelude::*;

use crate::t;

/// Class overview for teachers. Takes no navigation callback.
#[component]
pub fn TeacherDashboard() -> Element {
    let progress = [
        (t!("subject-physics"), 78),
        (t!("subject-chemistry"), 64),
        (t!("subject-biology"), 71),
        (t!("subject-math"), 85),
    ];

    rsx! {
        section { class: "page page-teacher",
            h1 { {t!("teacher-title")} }
            p { {t!("teacher-intro")} }

            div { class: "stat-grid",
                div { class: "stat",
                    span { class: "stat__value", "32" }
                    span { class: "stat__label", {t!("teacher-stat-students")} }
                }
                div { class: "stat",
                    span { class: "stat__value", "6" }
                    span { class: "stat__label", {t!("teacher-stat-assignments")} }
                }
                div { class: "stat",
                    span { class: "stat__value", "74%" }
                    span { class: "stat__label", {t!("teacher-stat-average")} }
                }
            }

            h2 { {t!("teacher-progress")} }
            ul { class: "list",
                for (subject, percent) in progress {
                    li { key: "{subject}", class: "list__item",
                        span { class: "list__title", "{subject}" }
                        div { class: "progress",
                            div { class: "progress__fill", style: "width: {percent}%" }
                        }
                        span { class: "list__meta", "{percent}%" }
                    }
                }
            }
        }
    }
}
