//! End-to-end session flows through the public shell API, using the real
//! in-memory auth session and the bundled Fluent strings.

use std::rc::Rc;

use ui::core::auth::{AuthProvider, AuthSession, LoginForm, Role};
use ui::core::page::Page;
use ui::core::shell::{SessionPhase, Shell, ShellView};
use ui::i18n::{self, FluentLocalizer};

fn app() -> (Rc<AuthSession>, Shell<AuthSession, FluentLocalizer>) {
    i18n::init();
    let auth = Rc::new(AuthSession::new());
    let shell = Shell::new(auth.clone(), FluentLocalizer);
    (auth, shell)
}

#[test]
fn student_signs_in_browses_and_signs_out() {
    let (auth, shell) = app();
    assert!(shell.view().is_login());

    let form = LoginForm {
        name: " Asha ".into(),
        password: "stem2024".into(),
        role: Role::Student,
    };
    shell.handle_login_success(form.validate().expect("valid form"));
    assert_eq!(shell.phase(), SessionPhase::Authenticated);
    assert_eq!(auth.user().map(|u| u.name), Some("Asha".to_string()));

    shell.navigate(Page::Leaderboard);
    let ShellView::Page { page, nav } = shell.view() else {
        panic!("expected the page shell after sign-in");
    };
    assert_eq!(page, Page::Leaderboard);
    assert_eq!(nav.iter().filter(|item| item.active).count(), 1);
    assert!(nav.iter().all(|item| !item.label.is_empty()));

    auth.sign_out();
    assert!(shell.view().is_login());
}

#[test]
fn guest_is_sent_back_to_login_after_external_session_ends() {
    let (auth, shell) = app();
    shell.handle_skip_login();
    assert_eq!(shell.phase(), SessionPhase::LoginSkipped);
    assert_eq!(shell.view().page(), Some(Page::Homepage));

    // Another part of the app signs someone in, then out again.
    auth.sign_in(ui::core::auth::LoginData::new("Meera", Role::Teacher));
    assert_eq!(shell.phase(), SessionPhase::Authenticated);
    auth.sign_out();
    assert_eq!(shell.phase(), SessionPhase::LoginVisible);
}

#[test]
fn legacy_string_navigation_defaults_to_homepage() {
    let (_auth, shell) = app();
    shell.handle_skip_login();
    shell.navigate_to_id("virtuallab");
    assert_eq!(shell.current_page(), Page::VirtualLab);
    shell.navigate_to_id("virtual_lab");
    assert_eq!(shell.current_page(), Page::Homepage);
}
