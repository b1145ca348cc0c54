//! Theme construction
//!
//! [`build_theme`] assembles the default token tables and component sections
//! and applies caller overrides:
//!
//! - Token tables (`palette`, `spacing`, ...) merge key by key, so a caller
//!   can change `palette.primary` without restating the palette.
//! - Components that ship a default section (`Container`, `Icon`) merge the
//!   caller's section into it, nested sections included, so adding one icon
//!   keeps the built-in set.
//! - Other component sections (`Button`, `SideNav`, ...) are taken as given.
//!
//! Palette tints, shades, and readable foregrounds are derived after the
//! overrides are applied.

use tracing::debug;

use crate::error::{Result, ThemeError};
use crate::sections::{default_section, COMPONENT_SECTIONS};
use crate::theme::{ThemeEntry, ThemeSection, Theme, TokenValue};
use crate::tokens::{default_table, derive_palette, is_token_table, TOKEN_TABLES};

/// Name of the theme when no override names it
pub const DEFAULT_THEME_NAME: &str = "default";

/// Caller-supplied partial theme
///
/// ```rust
/// use fanny_core::Css;
/// use fanny_theme::{build_theme, ThemeOverrides, ThemeSection};
///
/// let overrides = ThemeOverrides::new()
///     .name("brand")
///     .token("palette", "primary", "#ff0066")
///     .section(
///         "Button",
///         ThemeSection::new().css_literal("root", Css::new().decl("border-radius", "0")),
///     );
///
/// let theme = build_theme(&overrides).unwrap();
/// assert_eq!(theme.name(), "brand");
/// assert_eq!(theme.palette("primary"), "#ff0066");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeOverrides {
    name: Option<String>,
    sections: indexmap::IndexMap<String, ThemeSection>,
}

impl ThemeOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the theme name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Override a single token in a token table
    pub fn token(
        mut self,
        table: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<TokenValue>,
    ) -> Self {
        self.sections
            .entry(table.into())
            .or_default()
            .insert(key, ThemeEntry::Token(value.into()));
        self
    }

    /// Supply a whole section
    ///
    /// Token tables and default component sections merge into their
    /// defaults. Supplying the same name twice layers the second over the
    /// first.
    pub fn section(mut self, name: impl Into<String>, section: ThemeSection) -> Self {
        self.sections.entry(name.into()).or_default().extend(&section);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.sections.is_empty()
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = Some(name);
    }

    pub(crate) fn sections(&self) -> impl Iterator<Item = (&str, &ThemeSection)> {
        self.sections
            .iter()
            .map(|(name, section)| (name.as_str(), section))
    }
}

/// Build a theme from defaults and caller overrides
///
/// Pure: the overrides are not modified and every call returns a new theme.
/// Malformed overrides fail here rather than at render time.
pub fn build_theme(overrides: &ThemeOverrides) -> Result<Theme> {
    let mut root = default_root();

    for (name, section) in overrides.sections() {
        validate_section_name(name)?;
        if is_token_table(name) {
            merge_token_table(&mut root, name, section)?;
        } else {
            merge_component_section(&mut root, name, section);
        }
    }

    if let Some(ThemeEntry::Section(palette)) = root.get_mut("palette") {
        derive_palette(palette);
    }

    let name = overrides
        .name
        .clone()
        .unwrap_or_else(|| DEFAULT_THEME_NAME.to_string());
    debug!(
        "build_theme - '{}' with {} override section(s)",
        name,
        overrides.sections.len()
    );
    Ok(Theme::from_parts(name, root))
}

/// The theme with no overrides
pub(crate) fn default_theme() -> Theme {
    let mut root = default_root();
    if let Some(ThemeEntry::Section(palette)) = root.get_mut("palette") {
        derive_palette(palette);
    }
    Theme::from_parts(DEFAULT_THEME_NAME.to_string(), root)
}

fn default_root() -> ThemeSection {
    let mut root = ThemeSection::new();
    for table in TOKEN_TABLES {
        if let Some(section) = default_table(table) {
            root.insert(table, ThemeEntry::Section(section));
        }
    }
    for component in COMPONENT_SECTIONS {
        if let Some(section) = default_section(component) {
            root.insert(component, ThemeEntry::Section(section));
        }
    }
    root
}

fn validate_section_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ThemeError::invalid_override(name, "section name is empty"));
    }
    if name.contains('.') {
        return Err(ThemeError::invalid_override(
            name,
            "section names cannot contain `.`; nest a section instead",
        ));
    }
    Ok(())
}

fn merge_token_table(root: &mut ThemeSection, name: &str, overrides: &ThemeSection) -> Result<()> {
    if let Some((key, entry)) = overrides
        .iter()
        .find(|(_, entry)| !matches!(entry, ThemeEntry::Token(_)))
    {
        return Err(ThemeError::invalid_override(
            format!("{name}.{key}"),
            format!("token tables only hold tokens, found a {}", entry.kind()),
        ));
    }
    match root.get_mut(name) {
        Some(ThemeEntry::Section(table)) => table.extend(overrides),
        _ => root.insert(name, ThemeEntry::Section(overrides.clone())),
    }
    Ok(())
}

fn merge_component_section(root: &mut ThemeSection, name: &str, overrides: &ThemeSection) {
    if COMPONENT_SECTIONS.contains(&name) {
        if let Some(ThemeEntry::Section(section)) = root.get_mut(name) {
            section.merge(overrides);
            return;
        }
    }
    root.insert(name, ThemeEntry::Section(overrides.clone()));
}
