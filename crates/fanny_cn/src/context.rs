//! Render context
//!
//! Everything a component needs beyond its props: the theme to read tokens
//! and style overrides from, and the style sheet its classes register into.

use fanny_core::{Css, StyleProps};
use fanny_style::{ClassName, StyleSheet};
use fanny_theme::{resolve_style, Theme};

use crate::error::Result;

/// Theme and style sheet for one render pass
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
    theme: &'a Theme,
    sheet: &'a StyleSheet,
}

impl<'a> RenderContext<'a> {
    /// Render against `theme` into the global style sheet
    pub fn new(theme: &'a Theme) -> Self {
        Self::with_sheet(theme, StyleSheet::global())
    }

    /// Render against `theme` into a caller-owned style sheet
    pub fn with_sheet(theme: &'a Theme, sheet: &'a StyleSheet) -> Self {
        Self { theme, sheet }
    }

    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    pub fn sheet(&self) -> &'a StyleSheet {
        self.sheet
    }

    /// Layer the theme's `<theme key>.css.root` entry over a base fragment
    pub fn style(&self, base: Css, props: &StyleProps) -> Result<Css> {
        let key = format!("{}.css.root", props.theme_key());
        let root = resolve_style(&key, props, self.theme)?;
        Ok(self.theme.interpolate_css(&base).merge(&root))
    }

    /// Style and compile in one step
    ///
    /// `previous` is the class the component composes over: a caller-supplied
    /// class, or the class of the component it wraps.
    pub fn class_name(
        &self,
        base: Css,
        props: &StyleProps,
        previous: Option<&ClassName>,
    ) -> Result<ClassName> {
        let css = self.style(base, props)?;
        Ok(self.sheet.compile(&css, previous))
    }
}
