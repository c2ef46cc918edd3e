//! Context providers: the auth session and the active language code.
//!
//! Both are injected once at the root so the shell and the pages read the
//! same instances; nothing here is process-global.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::auth::AuthSession;
use crate::i18n;

#[component]
pub fn AppProviders(children: Element) -> Element {
    i18n::init();

    use_context_provider(|| Rc::new(AuthSession::new()));
    // Global reactive language code; AppHeader updates it on selection.
    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! { {children} }
}

pub fn use_auth() -> Rc<AuthSession> {
    use_context::<Rc<AuthSession>>()
}

/// Language code signal, if an `AppProviders` ancestor exists.
pub fn use_language() -> Option<Signal<String>> {
    try_use_context::<Signal<String>>()
}
