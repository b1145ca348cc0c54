//! Theme tree
//!
//! A [`Theme`] is a tree of named [`ThemeSection`]s: one per component plus
//! the shared token tables. Entries are addressed by dotted paths such as
//! `Button.css.root` or `palette.primary`.

use std::fmt;
use std::sync::{Arc, OnceLock};

use fanny_core::{Css, StyleProps};
use indexmap::IndexMap;
use regex::{Captures, Regex};

use crate::error::Result;
use crate::resolve::resolve_style;

/// Signature of a style-producing function
pub type StyleFnInner = dyn Fn(&StyleProps, &Theme) -> Css + Send + Sync;

/// A shared style-producing function
///
/// Two `StyleFn`s are equal only if they share the same function instance,
/// so cloning an override into two themes keeps them equal.
#[derive(Clone)]
pub struct StyleFn(Arc<StyleFnInner>);

impl StyleFn {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&StyleProps, &Theme) -> Css + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, props: &StyleProps, theme: &Theme) -> Css {
        (self.0)(props, theme)
    }
}

impl PartialEq for StyleFn {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for StyleFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StyleFn(..)")
    }
}

/// A literal token value
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl TokenValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            TokenValue::Number(number) => Some(*number),
            TokenValue::Text(text) => text.trim().parse().ok(),
            TokenValue::Bool(_) => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(text) => f.write_str(text),
            TokenValue::Number(number) => write!(f, "{number}"),
            TokenValue::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Text(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::Text(value)
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        TokenValue::Number(value)
    }
}

impl From<bool> for TokenValue {
    fn from(value: bool) -> Self {
        TokenValue::Bool(value)
    }
}

/// An entry in the theme tree
#[derive(Clone, Debug, PartialEq)]
pub enum ThemeEntry {
    /// A nested section
    Section(ThemeSection),
    /// A style function of the instance props
    Style(StyleFn),
    /// A literal style fragment
    Css(Css),
    /// A literal token value
    Token(TokenValue),
}

impl ThemeEntry {
    /// Wrap a closure as a style entry
    pub fn style<F>(f: F) -> Self
    where
        F: Fn(&StyleProps, &Theme) -> Css + Send + Sync + 'static,
    {
        ThemeEntry::Style(StyleFn::new(f))
    }

    /// Short description of the entry kind for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            ThemeEntry::Section(_) => "section",
            ThemeEntry::Style(_) => "style function",
            ThemeEntry::Css(_) => "style fragment",
            ThemeEntry::Token(TokenValue::Text(_)) => "text token",
            ThemeEntry::Token(TokenValue::Number(_)) => "number token",
            ThemeEntry::Token(TokenValue::Bool(_)) => "boolean token",
        }
    }

    pub fn as_section(&self) -> Option<&ThemeSection> {
        match self {
            ThemeEntry::Section(section) => Some(section),
            _ => None,
        }
    }

    pub fn as_token(&self) -> Option<&TokenValue> {
        match self {
            ThemeEntry::Token(token) => Some(token),
            _ => None,
        }
    }
}

impl From<ThemeSection> for ThemeEntry {
    fn from(section: ThemeSection) -> Self {
        ThemeEntry::Section(section)
    }
}

impl From<Css> for ThemeEntry {
    fn from(css: Css) -> Self {
        ThemeEntry::Css(css)
    }
}

impl From<StyleFn> for ThemeEntry {
    fn from(style: StyleFn) -> Self {
        ThemeEntry::Style(style)
    }
}

impl From<TokenValue> for ThemeEntry {
    fn from(token: TokenValue) -> Self {
        ThemeEntry::Token(token)
    }
}

/// An ordered mapping from slot names to theme entries
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeSection {
    entries: IndexMap<String, ThemeEntry>,
}

impl ThemeSection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an entry (builder form)
    pub fn with(mut self, key: impl Into<String>, entry: impl Into<ThemeEntry>) -> Self {
        self.insert(key, entry);
        self
    }

    /// Set a token (builder form)
    pub fn token(self, key: impl Into<String>, value: impl Into<TokenValue>) -> Self {
        self.with(key, ThemeEntry::Token(value.into()))
    }

    /// Set `css.<slot>` to a style function (builder form)
    ///
    /// ```rust
    /// use fanny_core::Css;
    /// use fanny_theme::ThemeSection;
    ///
    /// let section = ThemeSection::new()
    ///     .css("root", |_props, theme| Css::new().decl("color", theme.palette("primary")));
    /// assert!(section.get_path("css.root").is_some());
    /// ```
    pub fn css<F>(mut self, slot: &str, f: F) -> Self
    where
        F: Fn(&StyleProps, &Theme) -> Css + Send + Sync + 'static,
    {
        self.insert_path(&format!("css.{slot}"), ThemeEntry::style(f));
        self
    }

    /// Set `css.<slot>` to a literal fragment (builder form)
    pub fn css_literal(mut self, slot: &str, css: Css) -> Self {
        self.insert_path(&format!("css.{slot}"), ThemeEntry::Css(css));
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: impl Into<ThemeEntry>) {
        self.entries.insert(key.into(), entry.into());
    }

    /// Insert at a dotted path, creating intermediate sections
    ///
    /// A non-section entry in the way is replaced by a section.
    pub fn insert_path(&mut self, path: &str, entry: impl Into<ThemeEntry>) {
        match path.split_once('.') {
            None => self.insert(path, entry),
            Some((head, rest)) => {
                let slot = self
                    .entries
                    .entry(head.to_string())
                    .or_insert_with(|| ThemeEntry::Section(ThemeSection::new()));
                if !matches!(slot, ThemeEntry::Section(_)) {
                    *slot = ThemeEntry::Section(ThemeSection::new());
                }
                if let ThemeEntry::Section(section) = slot {
                    section.insert_path(rest, entry);
                }
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&ThemeEntry> {
        self.entries.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut ThemeEntry> {
        self.entries.get_mut(key)
    }

    /// Look up a dotted path relative to this section
    pub fn get_path(&self, path: &str) -> Option<&ThemeEntry> {
        let mut segments = path.split('.');
        let mut entry = self.entries.get(segments.next()?)?;
        for segment in segments {
            entry = entry.as_section()?.entries.get(segment)?;
        }
        Some(entry)
    }

    /// Layer every entry of `other` over this section (one level deep)
    pub fn extend(&mut self, other: &ThemeSection) {
        for (key, entry) in &other.entries {
            self.entries.insert(key.clone(), entry.clone());
        }
    }

    /// Layer `other` over this section, merging nested sections key by key
    ///
    /// Entries that are not sections on both sides are replaced.
    pub fn merge(&mut self, other: &ThemeSection) {
        for (key, entry) in &other.entries {
            match (self.entries.get_mut(key), entry) {
                (Some(ThemeEntry::Section(base)), ThemeEntry::Section(overlay)) => {
                    base.merge(overlay)
                }
                _ => {
                    self.entries.insert(key.clone(), entry.clone());
                }
            }
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ThemeEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An assembled, immutable theme
///
/// Cloning is cheap; clones share the same tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    name: String,
    root: Arc<ThemeSection>,
}

impl Theme {
    pub(crate) fn from_parts(name: String, root: ThemeSection) -> Self {
        Self {
            name,
            root: Arc::new(root),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The root section
    pub fn root(&self) -> &ThemeSection {
        &self.root
    }

    /// Look up an entry by dotted path
    pub fn get(&self, path: &str) -> Option<&ThemeEntry> {
        self.root.get_path(path)
    }

    /// Look up a section by dotted path
    pub fn section(&self, path: &str) -> Option<&ThemeSection> {
        self.get(path).and_then(ThemeEntry::as_section)
    }

    /// Look up a token by dotted path
    pub fn token(&self, path: &str) -> Option<&TokenValue> {
        self.get(path).and_then(ThemeEntry::as_token)
    }

    /// Look up a token by dotted path and format it as text
    pub fn token_text(&self, path: &str) -> Option<String> {
        self.token(path).map(ToString::to_string)
    }

    /// Resolve the style at `theme_key` against `props`
    ///
    /// See [`resolve_style`].
    pub fn resolve(&self, theme_key: &str, props: &StyleProps) -> Result<Css> {
        resolve_style(theme_key, props, self)
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    /// Color from the palette, or `name` itself when the palette lacks it
    ///
    /// ```rust
    /// use fanny_theme::Theme;
    ///
    /// let theme = Theme::default();
    /// assert!(theme.palette("primary").starts_with('#'));
    /// assert_eq!(theme.palette("rebeccapurple"), "rebeccapurple");
    /// ```
    pub fn palette(&self, name: &str) -> String {
        self.token_text(&format!("palette.{name}"))
            .unwrap_or_else(|| name.to_string())
    }

    /// Spacing in rem as a multiple of `spacing.minorUnit`
    pub fn space(&self, multiplier: f64) -> String {
        let unit = self
            .token("spacing.minorUnit")
            .and_then(TokenValue::as_number)
            .unwrap_or(0.25);
        format_rem(unit * multiplier)
    }

    /// Named spacing step (`xsmall`, `small`, `medium`, ...)
    pub fn spacing(&self, name: &str) -> String {
        self.lookup_or("spacing", name, "0")
    }

    pub fn font(&self, name: &str) -> String {
        self.lookup_or("fonts", name, "inherit")
    }

    /// Font size in rem from the `fontSizes` scale
    pub fn font_size(&self, name: &str) -> String {
        match self.token(&format!("fontSizes.{name}")) {
            Some(TokenValue::Number(rem)) => format_rem(*rem),
            Some(token) => token.to_string(),
            None => "inherit".to_string(),
        }
    }

    pub fn font_weight(&self, name: &str) -> String {
        self.lookup_or("fontWeights", name, "normal")
    }

    pub fn border(&self, name: &str) -> String {
        self.lookup_or("borders", name, "none")
    }

    pub fn border_radius(&self, name: &str) -> String {
        self.lookup_or("borderRadii", name, "0")
    }

    pub fn altitude(&self, name: &str) -> String {
        self.lookup_or("altitudes", name, "none")
    }

    /// Breakpoint width in pixels
    pub fn breakpoint(&self, name: &str) -> Option<f64> {
        self.token(&format!("breakpoints.{name}"))
            .and_then(TokenValue::as_number)
    }

    fn lookup_or(&self, table: &str, name: &str, fallback: &str) -> String {
        self.token_text(&format!("{table}.{name}"))
            .unwrap_or_else(|| fallback.to_string())
    }

    // =========================================================================
    // Interpolation
    // =========================================================================

    /// Replace `theme(path)` references in a value with token text
    ///
    /// Unknown paths are left untouched.
    ///
    /// ```rust
    /// use fanny_theme::Theme;
    ///
    /// let theme = Theme::default();
    /// let value = theme.interpolate("1px solid theme(palette.primary)");
    /// assert_eq!(value, format!("1px solid {}", theme.palette("primary")));
    /// ```
    pub fn interpolate(&self, value: &str) -> String {
        if !value.contains("theme(") {
            return value.to_string();
        }
        theme_reference()
            .replace_all(value, |caps: &Captures<'_>| {
                match self.token_text(&caps[1]) {
                    Some(token) => token,
                    None => {
                        tracing::trace!("unresolved theme reference `{}`", &caps[1]);
                        caps[0].to_string()
                    }
                }
            })
            .into_owned()
    }

    /// Interpolate every declaration value of a fragment
    pub fn interpolate_css(&self, css: &Css) -> Css {
        css.map_values(&|value| self.interpolate(value))
    }
}

impl Default for Theme {
    fn default() -> Self {
        crate::build::default_theme()
    }
}

fn theme_reference() -> &'static Regex {
    static THEME_REFERENCE: OnceLock<Regex> = OnceLock::new();
    THEME_REFERENCE.get_or_init(|| {
        Regex::new(r"theme\(\s*([A-Za-z0-9_.-]+)\s*\)").expect("theme reference pattern is valid")
    })
}

fn format_rem(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    format!("{rounded}rem")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_path_walks_sections() {
        let section = ThemeSection::new().with(
            "Button",
            ThemeSection::new().css_literal("root", Css::new().decl("color", "red")),
        );

        assert!(matches!(
            section.get_path("Button.css.root"),
            Some(ThemeEntry::Css(_))
        ));
        assert!(section.get_path("Button.css.icon").is_none());
        assert!(section.get_path("Button.css.root.deeper").is_none());
        assert!(section.get_path("Missing").is_none());
    }

    #[test]
    fn test_insert_path_replaces_leaf_in_the_way() {
        let mut section = ThemeSection::new().token("css", "oops");
        section.insert_path("css.root", Css::new().decl("color", "red"));
        assert!(matches!(section.get_path("css.root"), Some(ThemeEntry::Css(_))));
    }

    #[test]
    fn test_style_fn_equality_is_identity() {
        let a = StyleFn::new(|_, _| Css::new());
        let b = StyleFn::new(|_, _| Css::new());
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_token_helpers() {
        let theme = Theme::default();
        assert_eq!(theme.space(4.0), "1rem");
        assert_eq!(theme.font_size("200"), "1rem");
        assert_eq!(theme.font_weight("semibold"), "500");
        assert_eq!(theme.border_radius("missing"), "0");
        assert_eq!(theme.breakpoint("tablet"), Some(960.0));
    }

    #[test]
    fn test_interpolate_leaves_unknown_references() {
        let theme = Theme::default();
        assert_eq!(
            theme.interpolate("theme(palette.nope) theme( fontWeights.bold )"),
            "theme(palette.nope) 700"
        );
    }

    #[test]
    fn test_format_rem_rounds() {
        assert_eq!(format_rem(0.1 + 0.2), "0.3rem");
        assert_eq!(format_rem(2.0), "2rem");
    }
}
