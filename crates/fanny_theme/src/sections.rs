//! Default per-component theme sections
//!
//! Component base styles live with the components; the theme only carries
//! the per-component data they read (icon sets, layout gutters). A
//! caller-supplied section for one of these components is merged into its
//! default by [`build_theme`](crate::build_theme).

use crate::theme::ThemeSection;

/// Icon path data, drawn in a 24x24 box
const ICONS: &[(&str, &str)] = &[
    ("check", "M9 16.17 4.83 12l-1.42 1.41L9 19 21 7l-1.41-1.41z"),
    (
        "close",
        "M19 6.41 17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z",
    ),
    ("chevron-down", "M16.59 8.59 12 13.17 7.41 8.59 6 10l6 6 6-6z"),
    ("chevron-left", "M15.41 7.41 14 6l-6 6 6 6 1.41-1.41L10.83 12z"),
    ("chevron-right", "M10 6 8.59 7.41 13.17 12l-4.58 4.59L10 18l6-6z"),
    (
        "info",
        "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-6h2v6zm0-8h-2V7h2v2z",
    ),
    ("menu", "M3 18h18v-2H3v2zm0-5h18v-2H3v2zm0-7v2h18V6H3z"),
    ("spinner", "M12 4V2A10 10 0 0 0 2 12h2a8 8 0 0 1 8-8z"),
];

/// Names of the components that ship a default section
pub const COMPONENT_SECTIONS: [&str; 2] = ["Container", "Icon"];

/// Default section for a component, if it has one
pub fn default_section(component: &str) -> Option<ThemeSection> {
    match component {
        "Container" => Some(container()),
        "Icon" => Some(icon()),
        _ => None,
    }
}

fn container() -> ThemeSection {
    ThemeSection::new().token("gutter", "1rem")
}

fn icon() -> ThemeSection {
    let icons = ICONS
        .iter()
        .fold(ThemeSection::new(), |section, (name, path)| {
            section.token(*name, *path)
        });
    ThemeSection::new()
        .token("viewBox", "0 0 24 24")
        .with("icons", icons)
}
