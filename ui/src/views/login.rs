use dioxus::prelude::*;

use crate::core::auth::{LoginData, LoginError, LoginForm, Role};
use crate::i18n;
use crate::t;

/// Sign-in form. Calls exactly one of the two handlers per action: a valid
/// submission goes to `on_login_success`, the guest button to `on_skip_login`.
#[component]
pub fn Login(on_login_success: EventHandler<LoginData>, on_skip_login: EventHandler<()>) -> Element {
    let mut name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(Role::default);
    let mut error = use_signal(|| Option::<LoginError>::None);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = LoginForm {
            name: name(),
            password: password(),
            role: role(),
        };
        match form.validate() {
            Ok(data) => {
                error.set(None);
                on_login_success.call(data);
            }
            Err(err) => {
                tracing::debug!(%err, "login form rejected");
                error.set(Some(err));
            }
        }
    };

    let role_id = role().id();
    let error_text = error().map(|err| i18n::tr(err.label_key()));

    rsx! {
        section { class: "page page-login",
            div { class: "login-card",
                h1 { class: "login-card__title", {t!("login-title")} }
                p { class: "login-card__subtitle", {t!("login-subtitle")} }

                form { class: "login-form", onsubmit: on_submit,
                    label { class: "login-form__label", r#for: "login-name", {t!("login-name-label")} }
                    input {
                        id: "login-name",
                        class: "login-form__input",
                        r#type: "text",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }

                    label { class: "login-form__label", r#for: "login-password", {t!("login-password-label")} }
                    input {
                        id: "login-password",
                        class: "login-form__input",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }

                    label { class: "login-form__label", r#for: "login-role", {t!("login-role-label")} }
                    select {
                        id: "login-role",
                        class: "login-form__input",
                        value: "{role_id}",
                        onchange: move |evt| {
                            if let Some(next) = Role::from_id(&evt.value()) {
                                role.set(next);
                            }
                        },
                        { Role::ALL.into_iter().map(|option_role| {
                            let id = option_role.id();
                            rsx! {
                                option { key: "{id}", value: "{id}", {i18n::tr(option_role.label_key())} }
                            }
                        })}
                    }

                    if let Some(text) = error_text {
                        p { class: "login-form__error", "{text}" }
                    }

                    button { r#type: "submit", class: "button button--primary", {t!("login-submit")} }
                }

                button {
                    r#type: "button",
                    class: "button button--ghost login-card__skip",
                    onclick: move |_| on_skip_login.call(()),
                    {t!("login-skip")}
                }
            }
        }
    }
}
