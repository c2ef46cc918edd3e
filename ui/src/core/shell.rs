//! Application shell: login gating plus view selection.
//!
//! The shell owns two pieces of state, the current [`Page`] and the
//! login-visibility flag. The flag starts as the negation of the provider's
//! auth status and is recomputed from every auth notification; the skip
//! action clears it until the next notification.
//!
//! Rendering is described, not performed: [`Shell::view`] returns a
//! [`ShellView`] that the Dioxus layer (or a test) turns into output.

use std::cell::RefCell;
use std::rc::Rc;

use super::auth::{AuthProvider, ListenerId, LoginData};
use super::page::Page;

/// Key → display text for the active language.
pub trait Localizer {
    fn translate(&self, key: &str) -> String;
}

impl<F> Localizer for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellState {
    pub current_page: Page,
    pub login_visible: bool,
}

impl ShellState {
    pub fn new(authenticated: bool) -> Self {
        Self {
            current_page: Page::DEFAULT,
            login_visible: !authenticated,
        }
    }

    fn auth_changed(&mut self, authenticated: bool) {
        self.login_visible = !authenticated;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    LoginVisible,
    LoginSkipped,
    Authenticated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub page: Page,
    pub icon: &'static str,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellView {
    /// Only the login screen; no navigation bar.
    Login,
    Page { page: Page, nav: Vec<NavItem> },
}

impl ShellView {
    pub fn is_login(&self) -> bool {
        matches!(self, ShellView::Login)
    }

    pub fn page(&self) -> Option<Page> {
        match self {
            ShellView::Login => None,
            ShellView::Page { page, .. } => Some(*page),
        }
    }

    pub fn active_items(&self) -> impl Iterator<Item = &NavItem> {
        let nav: &[NavItem] = match self {
            ShellView::Login => &[],
            ShellView::Page { nav, .. } => nav,
        };
        nav.iter().filter(|item| item.active)
    }
}

pub struct Shell<A: AuthProvider, L: Localizer> {
    auth: Rc<A>,
    localizer: L,
    state: Rc<RefCell<ShellState>>,
    listener: ListenerId,
}

impl<A: AuthProvider, L: Localizer> Shell<A, L> {
    pub fn new(auth: Rc<A>, localizer: L) -> Self {
        let state = Rc::new(RefCell::new(ShellState::new(auth.is_authenticated())));
        let weak = Rc::downgrade(&state);
        let listener = auth.subscribe(Box::new(move |authenticated: bool| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().auth_changed(authenticated);
                tracing::debug!(authenticated, "login gate recomputed");
            }
        }));
        Self {
            auth,
            localizer,
            state,
            listener,
        }
    }

    pub fn state(&self) -> ShellState {
        *self.state.borrow()
    }

    pub fn current_page(&self) -> Page {
        self.state.borrow().current_page
    }

    pub fn phase(&self) -> SessionPhase {
        match (self.auth.is_authenticated(), self.state.borrow().login_visible) {
            (_, true) => SessionPhase::LoginVisible,
            (true, false) => SessionPhase::Authenticated,
            (false, false) => SessionPhase::LoginSkipped,
        }
    }

    pub fn navigate(&self, page: Page) {
        tracing::debug!(%page, "navigate");
        self.state.borrow_mut().current_page = page;
    }

    /// String entry point; unknown ids land on the homepage.
    pub fn navigate_to_id(&self, id: &str) {
        self.navigate(Page::resolve(id));
    }

    pub fn handle_login_success(&self, data: LoginData) {
        // No borrow may be held here: sign_in notifies our listener.
        self.auth.sign_in(data);
        self.state.borrow_mut().login_visible = false;
    }

    pub fn handle_skip_login(&self) {
        tracing::info!("login skipped, continuing as guest");
        self.state.borrow_mut().login_visible = false;
    }

    pub fn view(&self) -> ShellView {
        let state = self.state();
        if state.login_visible {
            return ShellView::Login;
        }
        let nav = Page::NAV_ORDER
            .into_iter()
            .map(|page| NavItem {
                page,
                icon: page.icon(),
                label: self.localizer.translate(page.label_key()),
                active: page == state.current_page,
            })
            .collect();
        ShellView::Page {
            page: state.current_page,
            nav,
        }
    }
}

impl<A: AuthProvider, L: Localizer> Drop for Shell<A, L> {
    fn drop(&mut self) {
        self.auth.unsubscribe(self.listener);
    }
}
