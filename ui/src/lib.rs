//! Shared UI crate for STEMQuest: shell logic, localization, components and pages.

use dioxus::prelude::*;

pub mod components;
pub mod core;
pub mod i18n;
pub mod views;

/// Shared theme; linked on web/mobile, inlined on desktop via `include_str!`.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
