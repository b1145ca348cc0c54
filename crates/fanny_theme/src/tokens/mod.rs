//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system:
//! - Palette colors (with derived tints, shades, and readable foregrounds)
//! - Spacing
//! - Typography (fonts, sizes, weights)
//! - Borders and border radii
//! - Altitudes (box shadows)
//! - Breakpoints and global document styles
//!
//! Each table is a [`ThemeSection`] of token entries. Caller overrides merge
//! into a table key by key.

mod color;
mod layout;
mod shadow;
mod shape;
mod spacing;
mod typography;

pub use color::{derive_palette, palette, Color};
pub use layout::{breakpoints, global};
pub use shadow::altitudes;
pub use shape::{border_radii, borders};
pub use spacing::spacing;
pub use typography::{font_sizes, font_weights, fonts};

use crate::theme::ThemeSection;

/// Names of every token table, in theme order
pub const TOKEN_TABLES: [&str; 10] = [
    "altitudes",
    "borders",
    "borderRadii",
    "breakpoints",
    "fonts",
    "fontSizes",
    "fontWeights",
    "global",
    "spacing",
    "palette",
];

/// Check whether a top-level theme name is a token table
pub fn is_token_table(name: &str) -> bool {
    TOKEN_TABLES.contains(&name)
}

/// Default contents of a token table
pub fn default_table(name: &str) -> Option<ThemeSection> {
    let table = match name {
        "altitudes" => altitudes(),
        "borders" => borders(),
        "borderRadii" => border_radii(),
        "breakpoints" => breakpoints(),
        "fonts" => fonts(),
        "fontSizes" => font_sizes(),
        "fontWeights" => font_weights(),
        "global" => global(),
        "spacing" => spacing(),
        "palette" => palette(),
        _ => return None,
    };
    Some(table)
}

/// Build a token table from `(key, value)` pairs
fn table<V>(pairs: &[(&str, V)]) -> ThemeSection
where
    V: Clone + Into<crate::theme::TokenValue>,
{
    pairs
        .iter()
        .fold(ThemeSection::new(), |section, (key, value)| {
            section.token(*key, value.clone())
        })
}
