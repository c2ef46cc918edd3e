//! Platform-agnostic shell logic. Nothing in here touches Dioxus.

pub mod auth;
pub mod page;
pub mod shell;
