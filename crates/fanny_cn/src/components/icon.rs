//! Icon component
//!
//! Renders an inline `svg` from a theme icon (`Icon.icons.<name>`) or an
//! explicit [`IconDef`].

use std::sync::OnceLock;

use fanny_core::{Css, Element, Node, StyleProps};
use fanny_theme::{Theme, TokenValue};
use tracing::warn;

use crate::context::RenderContext;
use crate::error::Result;
use crate::factory::{
    create_component, default_text, Component, ComponentConfig, ComponentProps, HtmlProps,
    USE_PROPS,
};

use super::box_::{box_, BoxProps};

pub const THEME_KEY: &str = "Icon";

const DEFAULT_VIEW_BOX: &str = "0 0 24 24";

/// Explicit icon path data
#[derive(Clone, Debug, PartialEq)]
pub struct IconDef {
    pub view_box: String,
    pub paths: Vec<String>,
}

impl IconDef {
    pub fn new(view_box: impl Into<String>) -> Self {
        Self {
            view_box: view_box.into(),
            paths: Vec::new(),
        }
    }

    pub fn path(mut self, d: impl Into<String>) -> Self {
        self.paths.push(d.into());
        self
    }
}

/// What an icon draws
#[derive(Clone, Debug, PartialEq)]
pub enum IconSource {
    /// Name of an icon in the theme
    Name(String),
    Def(IconDef),
}

impl IconSource {
    /// Look up path data, falling back to nothing for unknown names
    fn resolve(&self, theme: &Theme) -> IconDef {
        match self {
            IconSource::Def(def) => def.clone(),
            IconSource::Name(name) => {
                let view_box = theme
                    .token_text("Icon.viewBox")
                    .unwrap_or_else(|| DEFAULT_VIEW_BOX.to_string());
                let mut def = IconDef::new(view_box);
                match theme.token(&format!("Icon.icons.{name}")) {
                    Some(TokenValue::Text(d)) => def.paths.push(d.clone()),
                    _ => warn!("Icon - unknown icon `{}`", name),
                }
                def
            }
        }
    }
}

impl From<&str> for IconSource {
    fn from(name: &str) -> Self {
        IconSource::Name(name.to_string())
    }
}

impl From<IconDef> for IconSource {
    fn from(def: IconDef) -> Self {
        IconSource::Def(def)
    }
}

/// Icon props
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IconProps {
    pub html: BoxProps,
    pub icon: Option<IconSource>,
    /// CSS length; defaults to `1em`
    pub size: Option<String>,
    /// Palette key or CSS color
    pub color: Option<String>,
    /// Accessible label; unlabeled icons are hidden from assistive tech
    pub a11y_label: Option<String>,
}

impl IconProps {
    pub fn new(icon: impl Into<IconSource>) -> Self {
        Self {
            icon: Some(icon.into()),
            ..Self::default()
        }
    }

    html_builders!();

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn a11y_label(mut self, label: impl Into<String>) -> Self {
        self.a11y_label = Some(label.into());
        self
    }

    pub fn render(self, cx: &RenderContext<'_>) -> Result<Element> {
        icon().render(self, cx)
    }

    fn style_props(&self) -> StyleProps {
        StyleProps::new(THEME_KEY)
            .with_opt("size", self.size.clone())
            .with_opt("color", self.color.clone())
    }
}

impl ComponentProps for IconProps {
    fn or_defaults(self, defaults: &Self) -> Self {
        Self {
            html: self.html.or_defaults(&defaults.html),
            icon: self.icon.or_else(|| defaults.icon.clone()),
            size: self.size.or_else(|| defaults.size.clone()),
            color: self.color.or_else(|| defaults.color.clone()),
            a11y_label: self.a11y_label.or_else(|| defaults.a11y_label.clone()),
        }
    }

    fn or_theme_defaults(self, defaults: &fanny_theme::ThemeSection) -> Self {
        Self {
            size: self
                .size
                .or_else(|| default_text(defaults, "size").map(str::to_string)),
            color: self
                .color
                .or_else(|| default_text(defaults, "color").map(str::to_string)),
            ..self
        }
    }
}

fn styles(props: &IconProps, theme: &Theme) -> Css {
    let size = props.size.as_deref().unwrap_or("1em");
    Css::new()
        .decl("display", "inline-block")
        .decl("fill", "currentColor")
        .decl("flex-shrink", "0")
        .decl("height", size)
        .decl("width", size)
        .decl("vertical-align", "-0.125em")
        .decl_if(
            props.color.is_some(),
            "color",
            props
                .color
                .as_deref()
                .map(|color| theme.palette(color))
                .unwrap_or_default(),
        )
}

fn use_props(props: &IconProps, cx: &RenderContext<'_>) -> Result<HtmlProps> {
    let html = box_().call_hook(USE_PROPS, &props.html, cx)?;
    let class_name = cx.class_name(
        styles(props, cx.theme()),
        &props.style_props(),
        Some(&html.class_name),
    )?;
    let mut html = html.class_name(class_name);

    let def = props
        .icon
        .as_ref()
        .map(|source| source.resolve(cx.theme()))
        .unwrap_or_else(|| IconDef::new(DEFAULT_VIEW_BOX));

    html.set_attr("viewBox", def.view_box);
    html.set_attr("xmlns", "http://www.w3.org/2000/svg");
    match &props.a11y_label {
        Some(label) => {
            html.set_attr("role", "img");
            html.set_attr("aria-label", label);
        }
        None => html.set_attr("aria-hidden", "true"),
    }
    html.set_attr("focusable", "false");
    html.children = def
        .paths
        .into_iter()
        .map(|d| Node::from(Element::new("path").attr("d", d)))
        .collect();
    Ok(html)
}

fn render_svg(html: HtmlProps, _cx: &RenderContext<'_>) -> Result<Element> {
    Ok(html.into_element("svg"))
}

/// The Icon component
pub fn icon() -> &'static Component<IconProps> {
    static ICON: OnceLock<Component<IconProps>> = OnceLock::new();
    ICON.get_or_init(|| create_component(use_props, render_svg, ComponentConfig::new(THEME_KEY)))
}
