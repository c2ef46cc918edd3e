use std::collections::{BTreeMap, BTreeSet};

/// Translation consistency check over the embedded locale sources.
///
/// For every non-fallback locale:
/// - every en-US message id must be present;
/// - no id may be defined twice;
/// - each message must use the same `$variables` as its en-US counterpart,
///   otherwise `t!(..., name = ...)` calls would render a raw placeable.
///
/// If you add a new locale, register it in `LOCALES`.
const EN_US: &str = include_str!("../i18n/en-US/stemquest_ui.ftl");

const LOCALES: &[(&str, &str)] = &[
    ("es-ES", include_str!("../i18n/es-ES/stemquest_ui.ftl")),
    ("hi-IN", include_str!("../i18n/hi-IN/stemquest_ui.ftl")),
];

/// id -> set of `$variable` names used in its value (single-line messages).
fn messages(src: &str, locale: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut out = BTreeMap::new();
    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        let Some((id, value)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if id.is_empty() || id.contains(char::is_whitespace) || id.starts_with('-') {
            continue;
        }
        if out.insert(id.to_string(), variables(value)).is_some() {
            panic!("duplicate message `{id}` in {locale}");
        }
    }
    out
}

fn variables(value: &str) -> BTreeSet<String> {
    value
        .split('$')
        .skip(1)
        .map(|rest| {
            rest.chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect::<String>()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback = messages(EN_US, "en-US");
    assert!(!fallback.is_empty(), "Fallback (en-US) contains no keys.");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let translated = messages(src, locale);
        let missing: Vec<_> = fallback
            .keys()
            .filter(|id| !translated.contains_key(*id))
            .cloned()
            .collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} is missing: {}", missing.join(", ")));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n{}\nHint: copy the missing keys from en-US, then translate.",
        failures.join("\n")
    );
}

#[test]
fn placeables_match_fallback() {
    let fallback = messages(EN_US, "en-US");
    let mut mismatches = Vec::new();
    for (locale, src) in LOCALES {
        for (id, vars) in messages(src, locale) {
            if let Some(expected) = fallback.get(&id) {
                if *expected != vars {
                    mismatches.push(format!("{locale}/{id}: expected {expected:?}, found {vars:?}"));
                }
            }
        }
    }
    assert!(mismatches.is_empty(), "{}", mismatches.join("\n"));
}

#[test]
fn variable_extraction() {
    let vars = variables(" Signed in as { $role } at { $time } UTC");
    assert_eq!(vars, BTreeSet::from(["role".to_string(), "time".to_string()]));
    assert!(variables(" plain text").is_empty());
}
