use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::auth::{AuthProvider, AuthSession, LoginData};
use crate::core::page::Page;
use crate::core::shell::{Shell, ShellView};
use crate::i18n::FluentLocalizer;
use crate::views::{
    Arena, Classroom, Events, Homepage, Leaderboard, Learn, Login, ParentsDashboard,
    TeacherDashboard, VirtualLab,
};

use super::{use_auth, use_language, AppHeader, BottomNav};

pub type ShellHandle = Rc<Shell<AuthSession, FluentLocalizer>>;

/// Root view: login gate, selected page and the bottom navigation bar.
///
/// The shell subscribes to the auth session first (in `Shell::new`); the
/// re-render listener registered here comes second, so the login gate is
/// already recomputed by the time the component renders again.
#[component]
pub fn AppShell() -> Element {
    let auth = use_auth();
    let mut revision = use_signal(|| 0u64);

    let shell: ShellHandle = use_hook({
        let auth = auth.clone();
        move || Rc::new(Shell::new(auth, FluentLocalizer))
    });
    let rerender = use_hook({
        let auth = auth.clone();
        move || auth.subscribe(Box::new(move |_: bool| revision += 1))
    });
    use_drop(move || auth.unsubscribe(rerender));

    // Reactive dependencies: local revision and the active language.
    let _revision = revision();
    let lang_marker = use_language().map(|code| code()).unwrap_or_default();

    let content = match shell.view() {
        ShellView::Login => {
            let on_success = {
                let shell = shell.clone();
                move |data: LoginData| {
                    shell.handle_login_success(data);
                    revision += 1;
                }
            };
            let on_skip = {
                let shell = shell.clone();
                move |_: ()| {
                    shell.handle_skip_login();
                    revision += 1;
                }
            };
            rsx! {
                Login { on_login_success: on_success, on_skip_login: on_skip }
            }
        }
        ShellView::Page { page, nav } => {
            let on_navigate = EventHandler::new({
                let shell = shell.clone();
                move |page: Page| {
                    shell.navigate(page);
                    revision += 1;
                }
            });
            rsx! {
                AppHeader {}
                main { class: "app__content", {render_page(page, on_navigate)} }
                BottomNav { items: nav, on_navigate }
            }
        }
    };

    rsx! {
        // Keyed by language to force a full remount of the subtree on change.
        div { class: "app", key: "{lang_marker}",
            {content}
        }
    }
}

fn render_page(page: Page, on_navigate: EventHandler<Page>) -> Element {
    match page {
        Page::Homepage => rsx! { Homepage { on_navigate } },
        Page::Classroom => rsx! { Classroom { on_navigate } },
        Page::Learn => rsx! { Learn { on_navigate } },
        Page::VirtualLab => rsx! { VirtualLab { on_navigate } },
        Page::Leaderboard => rsx! { Leaderboard { on_navigate } },
        Page::Events => rsx! { Events { on_navigate } },
        Page::Arena => rsx! { Arena { on_navigate } },
        Page::Teacher => rsx! { TeacherDashboard {} },
        Page::Parents => rsx! { ParentsDashboard {} },
    }
}
