use fanny_core::{Css, StyleProps};
use fanny_theme::{
    build_theme, default_section, resolve_style, Color, ThemeEntry, ThemeError, ThemeOverrides,
    ThemeSection, TokenValue,
};
use pretty_assertions::assert_eq;

#[test]
fn build_is_pure_and_repeatable() {
    let overrides = ThemeOverrides::new()
        .token("palette", "primary", "#ff0066")
        .section(
            "Button",
            ThemeSection::new().css_literal("root", Css::new().decl("border-radius", "0")),
        );
    let before = overrides.clone();

    let a = build_theme(&overrides).unwrap();
    let b = build_theme(&overrides).unwrap();

    assert_eq!(a, b);
    assert_eq!(overrides, before);
}

#[test]
fn default_theme_has_every_token_table() {
    let theme = build_theme(&ThemeOverrides::new()).unwrap();
    assert_eq!(theme.name(), "default");
    for table in fanny_theme::TOKEN_TABLES {
        assert!(
            theme.section(table).is_some(),
            "default theme should carry the {table} table"
        );
    }
    assert_eq!(theme, fanny_theme::Theme::default());
}

#[test]
fn token_tables_merge_key_by_key() {
    let theme = build_theme(&ThemeOverrides::new().token("palette", "primary", "#ff0066")).unwrap();

    assert_eq!(theme.palette("primary"), "#ff0066");
    // untouched keys keep their defaults
    assert_eq!(theme.palette("danger"), "#da1717");
    assert_eq!(theme.token("fontWeights.bold"), Some(&TokenValue::Number(700.0)));
}

#[test]
fn palette_derivation_follows_overrides() {
    let theme = build_theme(&ThemeOverrides::new().token("palette", "primary", "#000000")).unwrap();
    let black = Color::BLACK;

    assert_eq!(theme.palette("primaryTint"), black.tint().to_hex());
    assert_eq!(theme.palette("primaryShade"), "#000000");
    assert_eq!(theme.palette("primaryInverted"), "#ffffff");
    assert_eq!(theme.palette("defaultInverted"), "#212121");
}

#[test]
fn explicit_derived_keys_win() {
    let theme = build_theme(
        &ThemeOverrides::new()
            .token("palette", "primary", "#000000")
            .token("palette", "primaryInverted", "#ffff00"),
    )
    .unwrap();
    assert_eq!(theme.palette("primaryInverted"), "#ffff00");
}

#[test]
fn default_component_sections_merge_key_by_key() {
    let theme = build_theme(
        &ThemeOverrides::new()
            .section(
                "Icon",
                ThemeSection::new().with("icons", ThemeSection::new().token("star", "M12 2 9 9H2z")),
            )
            .section("Container", ThemeSection::new().token("gutter", "2rem")),
    )
    .unwrap();

    assert_eq!(theme.token_text("Icon.icons.star").as_deref(), Some("M12 2 9 9H2z"));
    // built-in icons and the view box survive
    assert!(theme.get("Icon.icons.spinner").is_some());
    assert!(theme.get("Icon.icons.check").is_some());
    assert_eq!(theme.token_text("Icon.viewBox").as_deref(), Some("0 0 24 24"));
    assert_eq!(theme.token_text("Container.gutter").as_deref(), Some("2rem"));
}

#[test]
fn sections_without_defaults_are_taken_as_given() {
    let overrides = ThemeOverrides::new().section(
        "Button",
        ThemeSection::new().css_literal("root", Css::new().decl("border-radius", "0")),
    );
    let theme = build_theme(&overrides).unwrap();

    let button = theme.section("Button").unwrap();
    assert_eq!(button.len(), 1);
    assert_eq!(
        theme.get("Button.css.root"),
        Some(&ThemeEntry::Css(Css::new().decl("border-radius", "0")))
    );
}

#[test]
fn default_section_opts_into_partial_override() {
    let mut icon = default_section("Icon").unwrap();
    icon.insert("viewBox", ThemeEntry::Token("0 0 16 16".into()));
    let theme = build_theme(&ThemeOverrides::new().section("Icon", icon)).unwrap();

    assert_eq!(theme.token_text("Icon.viewBox").as_deref(), Some("0 0 16 16"));
    assert!(theme.get("Icon.icons.check").is_some());
}

#[test]
fn token_table_rejects_nested_sections() {
    let overrides = ThemeOverrides::new().section(
        "palette",
        ThemeSection::new().with("brand", ThemeSection::new().token("main", "#fff")),
    );
    let err = build_theme(&overrides).unwrap_err();
    assert!(
        matches!(err, ThemeError::InvalidOverride { ref section, .. } if section == "palette.brand"),
        "unexpected error: {err}"
    );
}

#[test]
fn section_names_are_validated() {
    let dotted = ThemeOverrides::new().section("Button.css", ThemeSection::new());
    assert!(matches!(
        build_theme(&dotted),
        Err(ThemeError::InvalidOverride { .. })
    ));

    let empty = ThemeOverrides::new().section("", ThemeSection::new());
    assert!(matches!(
        build_theme(&empty),
        Err(ThemeError::InvalidOverride { .. })
    ));
}

#[test]
fn overridden_style_functions_see_the_final_theme() {
    let theme = build_theme(
        &ThemeOverrides::new()
            .token("palette", "primary", "#123456")
            .section(
                "Badge",
                ThemeSection::new().css("root", |_, theme| {
                    Css::new().decl("border", "1px solid theme(palette.primary)").decl(
                        "background",
                        theme.palette("primaryTint"),
                    )
                }),
            ),
    )
    .unwrap();

    let css = resolve_style("Badge.css.root", &StyleProps::new("Badge"), &theme).unwrap();
    assert_eq!(css.declaration("border"), Some("1px solid #123456"));
    assert_eq!(
        css.declaration("background"),
        Some(Color::from_hex("#123456").unwrap().tint().to_hex().as_str())
    );
}
