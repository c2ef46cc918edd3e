//! Every key the crate looks up must exist in the fallback bundle, and every
//! locale folder must carry every fallback key.
//!
//! Two kinds of lookups are checked:
//! - literal `t!("...")` calls, found by scanning `src/`;
//! - runtime keys (bottom bar labels, role names, login errors), taken from
//!   the types that produce them.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::auth::{LoginError, Role};
use crate::core::page::Page;

const FTL_FILENAME: &str = "stemquest_ui.ftl";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Message ids (`id = ...`) in a Fluent file; comments and terms skipped.
fn ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn read_locale(locale: &str) -> BTreeSet<String> {
    let path = crate_root().join("i18n").join(locale).join(FTL_FILENAME);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed reading {}: {err}", path.display()));
    ftl_keys(&content)
}

/// Literal first arguments of `t!("...")` across all `.rs` files under `root`.
fn literal_keys(root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|e| e.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for (idx, needle) in content.match_indices("t!(\"") {
            let rest = &content[idx + needle.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }
    found
}

fn runtime_keys() -> BTreeSet<String> {
    let pages = Page::NAV_ORDER.into_iter().map(Page::label_key);
    let roles = Role::ALL.into_iter().map(Role::label_key);
    let errors = [LoginError::MissingName, LoginError::PasswordTooShort]
        .into_iter()
        .map(|err| err.label_key());
    pages.chain(roles).chain(errors).map(str::to_string).collect()
}

fn locale_dirs() -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(crate_root().join("i18n"))
        .expect("i18n directory present")
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| name.contains('-'))
        .collect();
    dirs.sort();
    dirs
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let fallback = read_locale("en-US");
    assert!(!fallback.is_empty(), "fallback bundle has no messages");

    let mut referenced = literal_keys(&crate_root().join("src"));
    assert!(referenced.contains("login-title"), "scanner found no t! calls");
    referenced.extend(runtime_keys());

    let missing: Vec<_> = referenced.difference(&fallback).cloned().collect();
    assert!(
        missing.is_empty(),
        "keys referenced but missing from en-US:\n  {}",
        missing.join("\n  ")
    );
}

#[test]
fn every_locale_covers_fallback() {
    let fallback = read_locale("en-US");
    let mut report = Vec::new();
    for locale in locale_dirs() {
        let keys = read_locale(&locale);
        let missing: Vec<_> = fallback.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            report.push(format!("{locale} ({} missing): {}", missing.len(), missing.join(", ")));
        }
    }
    assert!(report.is_empty(), "incomplete locales:\n{}", report.join("\n"));
}

#[test]
fn bundled_locales_match_embedded_list() {
    assert_eq!(locale_dirs(), crate::i18n::available_languages());
}
