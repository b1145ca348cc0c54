//! Side navigation
//!
//! `SideNav` composes [`Navigation`](super::navigation) and renders a list of
//! items, optionally grouped into titled levels. Selection is owned by the
//! caller:
//!
//! - Controlled: pass `selected_id` and handle `on_change`.
//! - Uncontrolled: pass a [`SideNavState`] and let [`SideNavProps::select`]
//!   update it. `default_selected_id` applies until something is selected.
//!
//! # Example
//!
//! ```rust
//! use fanny_cn::prelude::*;
//!
//! let theme = Theme::default();
//! let sheet = StyleSheet::new();
//! let cx = RenderContext::with_sheet(&theme, &sheet);
//!
//! let state = SideNavState::new();
//! let nav = SideNavProps::new()
//!     .state(state.clone())
//!     .default_selected_id("home")
//!     .item(SideNavItemProps::new("home").href("/").child("Home"))
//!     .item(SideNavItemProps::new("docs").href("/docs").child("Docs"));
//!
//! nav.select("docs");
//! assert_eq!(state.selected().as_deref(), Some("docs"));
//!
//! let element = nav.render(&cx).unwrap();
//! let current: Vec<_> = element
//!     .find_all("a")
//!     .into_iter()
//!     .filter(|a| a.attribute("aria-current") == Some("page"))
//!     .collect();
//! assert_eq!(current.len(), 1);
//! assert_eq!(current[0].text_content(), "Docs");
//! ```

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use fanny_core::{Css, Element, Node, StyleProps};
use fanny_theme::Theme;
use tracing::debug;

use crate::context::RenderContext;
use crate::error::Result;
use crate::factory::{
    create_component, Component, ComponentConfig, ComponentProps, HtmlProps, USE_PROPS,
};
use crate::types::ChangeHandler;

use super::box_::{box_, BoxProps};
use super::navigation::{navigation, NavigationProps};

pub const THEME_KEY: &str = "SideNav";
pub const ITEM_THEME_KEY: &str = "SideNav.Item";
pub const LEVEL_THEME_KEY: &str = "SideNav.Level";
pub const LEVEL_TITLE_THEME_KEY: &str = "SideNav.Level.Title";
pub const LIST_THEME_KEY: &str = "SideNav.List";

/// Selected item id, shared between a side nav and its owner
#[derive(Clone, Debug, Default)]
pub struct SideNavState(Arc<RwLock<Option<String>>>);

impl SideNavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<String> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set(&self, id: impl Into<String>) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = Some(id.into());
    }
}

impl PartialEq for SideNavState {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// An entry of a side nav
#[derive(Clone, Debug, PartialEq)]
pub enum SideNavChild {
    Item(SideNavItemProps),
    Level(SideNavLevelProps),
}

// =============================================================================
// SideNav
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SideNavProps {
    pub html: BoxProps,
    pub a11y_title: Option<String>,
    /// Controlled selection; wins over the state
    pub selected_id: Option<String>,
    pub default_selected_id: Option<String>,
    pub on_change: Option<ChangeHandler>,
    pub state: Option<SideNavState>,
    pub entries: Vec<SideNavChild>,
}

impl SideNavProps {
    pub fn new() -> Self {
        Self::default()
    }

    html_builders!();

    pub fn a11y_title(mut self, title: impl Into<String>) -> Self {
        self.a11y_title = Some(title.into());
        self
    }

    pub fn selected_id(mut self, id: impl Into<String>) -> Self {
        self.selected_id = Some(id.into());
        self
    }

    pub fn default_selected_id(mut self, id: impl Into<String>) -> Self {
        self.default_selected_id = Some(id.into());
        self
    }

    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_change = Some(ChangeHandler::new(f));
        self
    }

    pub fn state(mut self, state: SideNavState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn item(mut self, item: SideNavItemProps) -> Self {
        self.entries.push(SideNavChild::Item(item));
        self
    }

    pub fn level(mut self, level: SideNavLevelProps) -> Self {
        self.entries.push(SideNavChild::Level(level));
        self
    }

    /// The currently selected item id
    pub fn selected(&self) -> Option<String> {
        self.selected_id
            .clone()
            .or_else(|| self.state.as_ref().and_then(SideNavState::selected))
            .or_else(|| self.default_selected_id.clone())
    }

    /// Select an item
    ///
    /// Calls `on_change` when set; otherwise updates the state.
    pub fn select(&self, id: &str) {
        match (&self.on_change, &self.state) {
            (Some(on_change), _) => on_change.call(id),
            (None, Some(state)) => state.set(id),
            (None, None) => debug!("SideNav::select - `{}` ignored, no handler or state", id),
        }
    }

    pub fn render(self, cx: &RenderContext<'_>) -> Result<Element> {
        side_nav().render(self, cx)
    }
}

impl ComponentProps for SideNavProps {
    fn or_defaults(self, defaults: &Self) -> Self {
        Self {
            html: self.html.or_defaults(&defaults.html),
            a11y_title: self.a11y_title.or_else(|| defaults.a11y_title.clone()),
            selected_id: self.selected_id.or_else(|| defaults.selected_id.clone()),
            default_selected_id: self
                .default_selected_id
                .or_else(|| defaults.default_selected_id.clone()),
            on_change: self.on_change.or_else(|| defaults.on_change.clone()),
            state: self.state.or_else(|| defaults.state.clone()),
            entries: if self.entries.is_empty() {
                defaults.entries.clone()
            } else {
                self.entries
            },
        }
    }
}

fn styles(_props: &StyleProps, _theme: &Theme) -> Css {
    Css::new()
        .decl("display", "flex")
        .decl("flex-direction", "column")
}

fn list_styles(_props: &StyleProps, _theme: &Theme) -> Css {
    Css::new()
        .decl("list-style", "none")
        .decl("margin", "0")
        .decl("padding", "0")
}

fn use_props(props: &SideNavProps, cx: &RenderContext<'_>) -> Result<HtmlProps> {
    let navigation_props = NavigationProps {
        html: props.html.clone(),
        a11y_title: props.a11y_title.clone(),
    };
    let html = navigation().call_hook(USE_PROPS, &navigation_props, cx)?;

    let style_props = StyleProps::new(THEME_KEY);
    let class_name = cx.class_name(
        styles(&style_props, cx.theme()),
        &style_props,
        Some(&html.class_name),
    )?;
    let mut html = html.class_name(class_name);

    let selected = props.selected();
    let mut pending = Vec::new();
    for entry in &props.entries {
        match entry {
            SideNavChild::Item(item) => pending.push(mark_active(item, selected.as_deref())),
            SideNavChild::Level(level) => {
                if !pending.is_empty() {
                    html.children.push(item_list(&pending, cx)?.into());
                    pending.clear();
                }
                let level = SideNavLevelProps {
                    items: level
                        .items
                        .iter()
                        .map(|item| mark_active(item, selected.as_deref()))
                        .collect(),
                    ..level.clone()
                };
                html.children.push(side_nav_level().render(level, cx)?.into());
            }
        }
    }
    if !pending.is_empty() {
        html.children.push(item_list(&pending, cx)?.into());
    }
    Ok(html)
}

fn mark_active(item: &SideNavItemProps, selected: Option<&str>) -> SideNavItemProps {
    let mut item = item.clone();
    if item.is_active.is_none() {
        item.is_active = Some(selected.is_some() && item.item_id.as_deref() == selected);
    }
    item
}

/// Items as a `ul` of `li`s
fn item_list(items: &[SideNavItemProps], cx: &RenderContext<'_>) -> Result<Element> {
    let style_props = StyleProps::new(LIST_THEME_KEY);
    let class_name = cx.class_name(list_styles(&style_props, cx.theme()), &style_props, None)?;
    let mut list = Element::new("ul").class(class_name.as_str());
    for item in items {
        let rendered = side_nav_item().render(item.clone(), cx)?;
        list = list.child(Element::new("li").child(rendered));
    }
    Ok(list)
}

fn render_nav(html: HtmlProps, _cx: &RenderContext<'_>) -> Result<Element> {
    Ok(html.into_element("nav"))
}

/// The SideNav component
pub fn side_nav() -> &'static Component<SideNavProps> {
    static SIDE_NAV: OnceLock<Component<SideNavProps>> = OnceLock::new();
    SIDE_NAV.get_or_init(|| create_component(use_props, render_nav, ComponentConfig::new(THEME_KEY)))
}

// =============================================================================
// SideNav.Item
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SideNavItemProps {
    pub html: BoxProps,
    /// Id matched against the side nav selection
    pub item_id: Option<String>,
    /// Renders a link when set, a button otherwise
    pub href: Option<String>,
    pub is_active: Option<bool>,
}

impl SideNavItemProps {
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: Some(item_id.into()),
            ..Self::default()
        }
    }

    html_builders!();

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

impl ComponentProps for SideNavItemProps {
    fn or_defaults(self, defaults: &Self) -> Self {
        Self {
            html: self.html.or_defaults(&defaults.html),
            item_id: self.item_id.or_else(|| defaults.item_id.clone()),
            href: self.href.or_else(|| defaults.href.clone()),
            is_active: self.is_active.or(defaults.is_active),
        }
    }
}

fn item_styles(props: &StyleProps, theme: &Theme) -> Css {
    let active = props.flag("isActive");
    Css::new()
        .decl("background-color", "transparent")
        .decl("border", "none")
        .decl("border-radius", theme.border_radius("default"))
        .decl("color", theme.palette("text"))
        .decl("cursor", "pointer")
        .decl("display", "block")
        .decl("font-size", "inherit")
        .decl("padding", format!("{} {}", theme.space(1.0), theme.space(3.0)))
        .decl("text-align", "left")
        .decl("text-decoration", "none")
        .decl("width", "100%")
        .nest(
            "&:hover",
            Css::new().decl("background-color", theme.palette("defaultTint")),
        )
        .decl_if(active, "background-color", theme.palette("primaryTint"))
        .decl_if(active, "color", theme.palette("primary"))
        .decl_if(active, "font-weight", theme.font_weight("semibold"))
}

fn use_item_props(props: &SideNavItemProps, cx: &RenderContext<'_>) -> Result<HtmlProps> {
    let html = box_().call_hook(USE_PROPS, &props.html, cx)?;
    let active = props.is_active.unwrap_or(false);
    let style_props = StyleProps::new(ITEM_THEME_KEY).with("isActive", active);
    let class_name = cx.class_name(
        item_styles(&style_props, cx.theme()),
        &style_props,
        Some(&html.class_name),
    )?;
    let mut html = html.class_name(class_name);

    match &props.href {
        Some(href) => {
            html.use_tag.get_or_insert_with(|| "a".to_string());
            html.set_attr("href", href);
        }
        None => {
            html.use_tag.get_or_insert_with(|| "button".to_string());
            html.set_attr("type", "button");
        }
    }
    if let Some(id) = &props.item_id {
        html.set_attr("data-item-id", id);
    }
    if active {
        html.set_attr("aria-current", "page");
    }
    Ok(html)
}

fn render_item(html: HtmlProps, _cx: &RenderContext<'_>) -> Result<Element> {
    Ok(html.into_element("button"))
}

/// The SideNav.Item component
pub fn side_nav_item() -> &'static Component<SideNavItemProps> {
    static ITEM: OnceLock<Component<SideNavItemProps>> = OnceLock::new();
    ITEM.get_or_init(|| {
        create_component(
            use_item_props,
            render_item,
            ComponentConfig::new(ITEM_THEME_KEY),
        )
    })
}

// =============================================================================
// SideNav.Level
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SideNavLevelProps {
    pub html: BoxProps,
    pub title: Option<String>,
    pub items: Vec<SideNavItemProps>,
}

impl SideNavLevelProps {
    pub fn new() -> Self {
        Self::default()
    }

    html_builders!();

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn item(mut self, item: SideNavItemProps) -> Self {
        self.items.push(item);
        self
    }
}

impl ComponentProps for SideNavLevelProps {
    fn or_defaults(self, defaults: &Self) -> Self {
        Self {
            html: self.html.or_defaults(&defaults.html),
            title: self.title.or_else(|| defaults.title.clone()),
            items: if self.items.is_empty() {
                defaults.items.clone()
            } else {
                self.items
            },
        }
    }
}

fn level_styles(_props: &StyleProps, theme: &Theme) -> Css {
    Css::new().decl("margin-bottom", theme.space(4.0))
}

fn level_title_styles(_props: &StyleProps, theme: &Theme) -> Css {
    Css::new()
        .decl("color", theme.palette("gray"))
        .decl("display", "block")
        .decl("font-size", theme.font_size("150"))
        .decl("font-weight", theme.font_weight("semibold"))
        .decl("padding", format!("{} {}", theme.space(1.0), theme.space(3.0)))
        .decl("text-transform", "uppercase")
}

fn use_level_props(props: &SideNavLevelProps, cx: &RenderContext<'_>) -> Result<HtmlProps> {
    let html = box_().call_hook(USE_PROPS, &props.html, cx)?;
    let style_props = StyleProps::new(LEVEL_THEME_KEY);
    let class_name = cx.class_name(
        level_styles(&style_props, cx.theme()),
        &style_props,
        Some(&html.class_name),
    )?;
    let mut html = html.class_name(class_name);

    let mut children: Vec<Node> = Vec::new();
    if let Some(title) = &props.title {
        let title_props = StyleProps::new(LEVEL_TITLE_THEME_KEY);
        let title_class = cx.class_name(
            level_title_styles(&title_props, cx.theme()),
            &title_props,
            None,
        )?;
        children.push(
            Element::new("span")
                .class(title_class.as_str())
                .child(title.as_str())
                .into(),
        );
    }
    children.append(&mut html.children);
    if !props.items.is_empty() {
        children.push(item_list(&props.items, cx)?.into());
    }
    html.children = children;
    Ok(html)
}

fn render_level(html: HtmlProps, _cx: &RenderContext<'_>) -> Result<Element> {
    Ok(html.into_element("div"))
}

/// The SideNav.Level component
pub fn side_nav_level() -> &'static Component<SideNavLevelProps> {
    static LEVEL: OnceLock<Component<SideNavLevelProps>> = OnceLock::new();
    LEVEL.get_or_init(|| {
        create_component(
            use_level_props,
            render_level,
            ComponentConfig::new(LEVEL_THEME_KEY),
        )
    })
}
