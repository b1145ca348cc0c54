//! Breakpoints and global document tokens

use crate::theme::ThemeSection;

/// Viewport widths in pixels
pub fn breakpoints() -> ThemeSection {
    super::table(&[
        ("mobile", 520.0),
        ("tablet", 960.0),
        ("desktop", 1200.0),
        ("widescreen", 1440.0),
        ("fullHD", 1680.0),
    ])
}

/// Document-level defaults applied to `html` and `body`
pub fn global() -> ThemeSection {
    super::table(&[
        ("fontSize", "16px"),
        ("lineHeight", "1.5"),
        ("fontFamily", "theme(fonts.default)"),
        ("color", "theme(palette.text)"),
        ("background", "theme(palette.background)"),
    ])
}
