use dioxus::prelude::*;

use crate::core::page::Page;
use crate::core::shell::NavItem;

const BOTTOM_NAV_CSS: Asset = asset!("/assets/styling/bottom_nav.css");
const BOTTOM_NAV_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/bottom_nav.css"
));

/// Fixed bottom bar, one button per page. The active entry gets
/// `bottom-nav__item--active`.
#[component]
pub fn BottomNav(items: Vec<NavItem>, on_navigate: EventHandler<Page>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: BOTTOM_NAV_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{BOTTOM_NAV_CSS_INLINE}" }
        }

        nav { class: "bottom-nav",
            div { class: "bottom-nav__inner",
                { items.into_iter().map(|item| {
                    let page = item.page;
                    rsx! {
                        button {
                            key: "{page}",
                            r#type: "button",
                            class: format!(
                                "bottom-nav__item {}",
                                if item.active { "bottom-nav__item--active" } else { "" }
                            ),
                            onclick: move |_| on_navigate.call(page),
                            span { class: "bottom-nav__icon", aria_hidden: "true", "{item.icon}" }
                            span { class: "bottom-nav__label", "{item.label}" }
                        }
                    }
                })}
            }
        }
    }
}
