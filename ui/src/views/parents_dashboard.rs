use dioxus::prelude::*;

use crate::t;

#[component]
pub fn ParentsDashboard() -> Element {
    rsx! {
        section { class: "page page-parents",
            h1 { {t!("parents-title")} }
            p { {t!("parents-intro")} }

            div { class: "stat-grid",
                div { class: "stat",
                    span { class: "stat__value", "4h 20m" }
                    span { class: "stat__label", {t!("parents-weekly-time")} }
                }
                div { class: "stat",
                    span { class: "stat__value", "11" }
                    span { class: "stat__label", {t!("parents-completed")} }
                }
                div { class: "stat",
                    span { class: "stat__value", "🔥 5" }
                    span { class: "stat__label", {t!("parents-streak")} }
                }
            }

            p { class: "page-parents__note", {t!("parents-note")} }
        }
    }
}
