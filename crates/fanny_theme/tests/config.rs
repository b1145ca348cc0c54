use std::io::Write;

use fanny_theme::{build_theme, ThemeConfig, ThemeEntry, ThemeError};
use pretty_assertions::assert_eq;

const BRAND: &str = r##"
name = "brand"

[palette]
primary = "#ff0066"

[spacing]
minorUnit = 0.5

[Button.css]
root = "border-radius: 0; &:hover { opacity: 0.9; }"

[Button.defaultProps]
palette = "primary"
isStatic = true
"##;

#[test]
fn loads_tokens_css_and_default_props() {
    let overrides = ThemeConfig::from_toml_str(BRAND)
        .unwrap()
        .into_overrides()
        .unwrap();
    let theme = build_theme(&overrides).unwrap();

    assert_eq!(theme.name(), "brand");
    assert_eq!(theme.palette("primary"), "#ff0066");
    assert_eq!(theme.space(2.0), "1rem");
    assert_eq!(
        theme.token_text("Button.defaultProps.palette").as_deref(),
        Some("primary")
    );
    assert_eq!(
        theme.token_text("Button.defaultProps.isStatic").as_deref(),
        Some("true")
    );

    let Some(ThemeEntry::Css(root)) = theme.get("Button.css.root") else {
        panic!("Button.css.root should be a parsed fragment");
    };
    assert_eq!(root.declaration("border-radius"), Some("0"));
    assert!(root.block("&:hover").is_some());
}

#[test]
fn broken_css_fails_at_load_time() {
    let err = ThemeConfig::from_toml_str("[Button.css]\nroot = \"color: red; }\"\n")
        .unwrap()
        .into_overrides()
        .unwrap_err();

    match err {
        ThemeError::Css { path, source } => {
            assert_eq!(path, "Button.css.root");
            assert_eq!(source.line, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_toml_is_a_config_error() {
    let err = ThemeConfig::from_toml_str("[palette\nprimary = 1").unwrap_err();
    assert!(matches!(err, ThemeError::Config(_)));
}

#[test]
fn load_reads_from_disk() {
    let path = std::env::temp_dir().join(format!("fanny-theme-{}.toml", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(BRAND.as_bytes()).unwrap();
    }

    let config = ThemeConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.name.as_deref(), Some("brand"));
    assert!(config.sections.contains_key("Button"));

    let missing = ThemeConfig::load(&path).unwrap_err();
    assert!(matches!(missing, ThemeError::Io { .. }));
}
