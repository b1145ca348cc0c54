//! Typography tokens

use crate::theme::ThemeSection;

/// Font families
pub fn fonts() -> ThemeSection {
    super::table(&[
        (
            "default",
            "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif",
        ),
        ("heading", "inherit"),
        (
            "mono",
            "SFMono-Regular, Menlo, Monaco, Consolas, 'Liberation Mono', 'Courier New', monospace",
        ),
    ])
}

/// Font size scale in rem, keyed by weight-style steps
pub fn font_sizes() -> ThemeSection {
    super::table(&[
        ("100", 0.75),
        ("150", 0.875),
        ("200", 1.0),
        ("300", 1.25),
        ("400", 1.5),
        ("500", 2.0),
        ("600", 2.5),
        ("700", 3.0),
        ("800", 3.75),
        ("900", 4.5),
        ("default", 1.0),
    ])
}

pub fn font_weights() -> ThemeSection {
    super::table(&[
        ("light", 300.0),
        ("normal", 400.0),
        ("semibold", 500.0),
        ("bold", 700.0),
    ])
}
