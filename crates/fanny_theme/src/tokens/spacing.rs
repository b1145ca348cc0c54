//! Spacing tokens

use crate::theme::ThemeSection;

/// Spacing scale
///
/// `minorUnit` and `majorUnit` are rem multipliers used by
/// [`Theme::space`](crate::Theme::space); the named steps are ready-made
/// lengths.
pub fn spacing() -> ThemeSection {
    let mut section = super::table(&[("minorUnit", 0.25), ("majorUnit", 1.0)]);
    section.extend(&super::table(&[
        ("xxsmall", "0.25rem"),
        ("xsmall", "0.5rem"),
        ("small", "0.75rem"),
        ("medium", "1rem"),
        ("large", "1.5rem"),
        ("xlarge", "2rem"),
        ("xxlarge", "3rem"),
    ]));
    section
}
