//! Document-level styles from the `global` token table

use fanny_core::Css;
use fanny_theme::Theme;

/// Rules for `html` and `body`
pub fn global_styles(theme: &Theme) -> Vec<(&'static str, Css)> {
    let token = |key: &str, fallback: &str| {
        theme
            .token_text(&format!("global.{key}"))
            .map(|value| theme.interpolate(&value))
            .unwrap_or_else(|| fallback.to_string())
    };

    let html = Css::new()
        .decl("box-sizing", "border-box")
        .decl("font-family", token("fontFamily", "sans-serif"))
        .decl("font-size", token("fontSize", "16px"))
        .decl("line-height", token("lineHeight", "1.5"));
    let body = Css::new()
        .decl("background-color", token("background", "#ffffff"))
        .decl("color", token("color", "#212121"))
        .decl("margin", "0");
    let inherit = Css::new().decl("box-sizing", "inherit");

    vec![("html", html), ("body", body), ("*, *::before, *::after", inherit)]
}

/// Register the global rules in the context's style sheet
///
/// Returns the number of selectors added; repeated calls add nothing.
pub fn inject_global_styles(cx: &crate::RenderContext<'_>) -> usize {
    global_styles(cx.theme())
        .into_iter()
        .filter(|(selector, css)| cx.sheet().insert_global(selector, css))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fanny_style::StyleSheet;

    #[test]
    fn test_global_tokens_are_interpolated() {
        let theme = Theme::default();
        let styles = global_styles(&theme);
        let (_, body) = &styles[1];
        assert_eq!(body.declaration("color"), Some(theme.palette("text").as_str()));
    }

    #[test]
    fn test_inject_is_idempotent() {
        let theme = Theme::default();
        let sheet = StyleSheet::new();
        let cx = crate::RenderContext::with_sheet(&theme, &sheet);
        assert_eq!(inject_global_styles(&cx), 3);
        assert_eq!(inject_global_styles(&cx), 0);
        assert!(sheet.to_css().starts_with("html{"));
    }
}
