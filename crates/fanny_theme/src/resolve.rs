//! Style resolution
//!
//! Turns a theme key plus instance style props into a [`Css`] fragment.

use fanny_core::{Css, StyleProps};
use tracing::trace;

use crate::error::{Result, ThemeError};
use crate::theme::{Theme, ThemeEntry, TokenValue};

/// Resolve the style at `theme_key` against `props`
///
/// - No entry at the key: empty fragment.
/// - Style function: called with `(props, theme)`.
/// - Literal fragment: cloned.
/// - Text token: parsed as CSS text.
///
/// Any other entry is a configuration error. `theme(path)` references in the
/// resolved values are replaced with token text.
///
/// ```rust
/// use fanny_core::StyleProps;
/// use fanny_theme::{resolve_style, Theme};
///
/// let theme = Theme::default();
/// let css = resolve_style("Nope.css.root", &StyleProps::new("Nope"), &theme).unwrap();
/// assert!(css.is_empty());
/// ```
pub fn resolve_style(theme_key: &str, props: &StyleProps, theme: &Theme) -> Result<Css> {
    let css = match theme.get(theme_key) {
        None => {
            trace!("resolve_style - no theme entry at `{}`", theme_key);
            return Ok(Css::new());
        }
        Some(ThemeEntry::Style(style)) => style.call(props, theme),
        Some(ThemeEntry::Css(css)) => css.clone(),
        Some(ThemeEntry::Token(TokenValue::Text(text))) => {
            Css::parse(text).map_err(|source| ThemeError::Css {
                path: theme_key.to_string(),
                source,
            })?
        }
        Some(entry) => {
            return Err(ThemeError::UnexpectedEntry {
                path: theme_key.to_string(),
                found: entry.kind(),
            })
        }
    };
    Ok(theme.interpolate_css(&css))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_theme, ThemeOverrides, ThemeSection};
    use pretty_assertions::assert_eq;

    fn theme_with(section: ThemeSection) -> Theme {
        build_theme(&ThemeOverrides::new().section("Widget", section)).unwrap()
    }

    #[test]
    fn test_missing_key_is_empty() {
        let theme = Theme::default();
        let props = StyleProps::new("Widget");
        assert!(resolve_style("Widget.css.root", &props, &theme)
            .unwrap()
            .is_empty());
        assert!(resolve_style("", &props, &theme).unwrap().is_empty());
    }

    #[test]
    fn test_style_fn_reads_props() {
        let theme = theme_with(ThemeSection::new().css("root", |props, theme| {
            Css::new()
                .decl("color", theme.palette("primary"))
                .decl_if(props.flag("isBold"), "font-weight", "700")
        }));

        let plain = resolve_style("Widget.css.root", &StyleProps::new("Widget"), &theme).unwrap();
        assert_eq!(plain.declaration("color"), Some("#574feb"));
        assert_eq!(plain.declaration("font-weight"), None);

        let bold = resolve_style(
            "Widget.css.root",
            &StyleProps::new("Widget").with("isBold", true),
            &theme,
        )
        .unwrap();
        assert_eq!(bold.declaration("font-weight"), Some("700"));
    }

    #[test]
    fn test_literal_fragment_and_text() {
        let theme = theme_with(
            ThemeSection::new()
                .css_literal("root", Css::new().decl("margin", "0"))
                .with(
                    "Title",
                    ThemeSection::new().with(
                        "css",
                        ThemeSection::new().token("root", "color: theme(palette.danger); &:hover { opacity: 0.5 }"),
                    ),
                ),
        );
        let props = StyleProps::new("Widget");

        let root = resolve_style("Widget.css.root", &props, &theme).unwrap();
        assert_eq!(root, Css::new().decl("margin", "0"));

        let title = resolve_style("Widget.Title.css.root", &props, &theme).unwrap();
        assert_eq!(title.declaration("color"), Some("#da1717"));
        assert_eq!(
            title.block("&:hover").and_then(|hover| hover.declaration("opacity")),
            Some("0.5")
        );
    }

    #[test]
    fn test_unexpected_entries() {
        let theme = theme_with(
            ThemeSection::new()
                .token("size", 4.0)
                .token("broken", "color: red; }"),
        );
        let props = StyleProps::new("Widget");

        let err = resolve_style("Widget", &props, &theme).unwrap_err();
        assert!(matches!(
            err,
            ThemeError::UnexpectedEntry { ref path, found: "section" } if path == "Widget"
        ));

        let err = resolve_style("Widget.size", &props, &theme).unwrap_err();
        assert!(matches!(err, ThemeError::UnexpectedEntry { found: "number token", .. }));

        let err = resolve_style("Widget.broken", &props, &theme).unwrap_err();
        assert!(matches!(err, ThemeError::Css { ref path, .. } if path == "Widget.broken"));
    }
}
