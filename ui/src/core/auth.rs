//! Authentication provider contract and the in-memory session behind it.
//!
//! The shell never reads ambient auth state. It receives an [`AuthProvider`]
//! and registers a listener, so the login gate is recomputed synchronously on
//! every status flip.
//!
//! Listener rules:
//! - listeners run in registration order, on the caller's thread;
//! - they fire only when the authenticated flag actually changes;
//! - a listener must not subscribe or unsubscribe while being notified.

use std::cell::{Cell, RefCell};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{macros::format_description, OffsetDateTime};

/// Minimum accepted password length on the login form.
pub const MIN_PASSWORD_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Teacher,
    Parent,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Teacher, Role::Parent];

    pub fn id(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Parent => "parent",
        }
    }

    pub fn from_id(id: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.id() == id)
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Role::Student => "role-student",
            Role::Teacher => "role-teacher",
            Role::Parent => "role-parent",
        }
    }
}

/// Payload handed from the login view to the provider's `sign_in`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    pub name: String,
    pub role: Role,
}

impl LoginData {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("a name is required")]
    MissingName,
    #[error("password must be at least {} characters", MIN_PASSWORD_LEN)]
    PasswordTooShort,
}

impl LoginError {
    pub fn label_key(&self) -> &'static str {
        match self {
            LoginError::MissingName => "login-error-name",
            LoginError::PasswordTooShort => "login-error-password",
        }
    }
}

/// Raw login form input, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub name: String,
    pub password: String,
    pub role: Role,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginData, LoginError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(LoginError::MissingName);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(LoginError::PasswordTooShort);
        }
        Ok(LoginData::new(name, self.role))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub role: Role,
    pub signed_in_at: OffsetDateTime,
}

impl UserProfile {
    /// `HH:MM` in UTC.
    pub fn signed_in_clock(&self) -> String {
        self.signed_in_at
            .format(format_description!("[hour]:[minute]"))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type AuthListener = Box<dyn FnMut(bool)>;

pub trait AuthProvider {
    fn is_authenticated(&self) -> bool;
    fn sign_in(&self, data: LoginData);
    fn sign_out(&self);
    fn subscribe(&self, listener: AuthListener) -> ListenerId;
    fn unsubscribe(&self, id: ListenerId);
}

/// In-memory auth provider. Nothing is persisted.
#[derive(Default)]
pub struct AuthSession {
    user: RefCell<Option<UserProfile>>,
    listeners: RefCell<Vec<(ListenerId, AuthListener)>>,
    next_id: Cell<u64>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.user.borrow().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify(&self, authenticated: bool) {
        let mut listeners = self.listeners.borrow_mut();
        for (_, listener) in listeners.iter_mut() {
            listener(authenticated);
        }
    }
}

impl AuthProvider for AuthSession {
    fn is_authenticated(&self) -> bool {
        self.user.borrow().is_some()
    }

    fn sign_in(&self, data: LoginData) {
        let profile = UserProfile {
            name: data.name,
            role: data.role,
            signed_in_at: OffsetDateTime::now_utc(),
        };
        tracing::info!(name = %profile.name, role = profile.role.id(), "signed in");
        let was_signed_in = self.user.replace(Some(profile)).is_some();
        if !was_signed_in {
            self.notify(true);
        }
    }

    fn sign_out(&self) {
        if let Some(profile) = self.user.take() {
            tracing::info!(name = %profile.name, "signed out");
            self.notify(false);
        }
    }

    fn subscribe(&self, listener: AuthListener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
    }
}
