#![cfg(test)]
//! The desktop build inlines the shared theme (`ui/assets/theme/main.css`);
//! a truncated or moved file would only show up as an unstyled window.
//!
//! If you relocate the theme, update both this test and the `include_str!`
//! constant in `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty."
    );
}

#[test]
fn embedded_css_defines_theme_tokens() {
    for token in ["--color-bg", "--color-primary", "--bottom-nav-height", "body {"] {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn braces_are_balanced() {
    let open = EMBEDDED_CSS.matches('{').count();
    let close = EMBEDDED_CSS.matches('}').count();
    assert_eq!(open, close, "unbalanced braces in theme ({open} open, {close} close)");
}
