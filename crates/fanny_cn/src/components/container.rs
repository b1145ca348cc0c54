//! Container component
//!
//! Centers its content with a max width taken from the `breakpoints` tokens.

use std::sync::OnceLock;

use fanny_core::{Css, Element, StyleProps};
use fanny_theme::{Theme, ThemeSection};

use crate::context::RenderContext;
use crate::error::Result;
use crate::factory::{
    create_component, default_flag, default_text, Component, ComponentConfig, ComponentProps,
    HtmlProps, USE_PROPS,
};
use crate::types::Breakpoint;

use super::box_::{box_, BoxProps};

pub const THEME_KEY: &str = "Container";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContainerProps {
    pub html: BoxProps,
    pub breakpoint: Option<Breakpoint>,
    /// Span the full width instead of capping at the breakpoint
    pub is_fluid: Option<bool>,
    /// Add the theme gutter on both sides
    pub is_layout: Option<bool>,
}

impl ContainerProps {
    pub fn new() -> Self {
        Self::default()
    }

    html_builders!();

    pub fn breakpoint(mut self, breakpoint: Breakpoint) -> Self {
        self.breakpoint = Some(breakpoint);
        self
    }

    pub fn is_fluid(mut self, is_fluid: bool) -> Self {
        self.is_fluid = Some(is_fluid);
        self
    }

    pub fn is_layout(mut self, is_layout: bool) -> Self {
        self.is_layout = Some(is_layout);
        self
    }

    pub fn render(self, cx: &RenderContext<'_>) -> Result<Element> {
        container().render(self, cx)
    }

    fn style_props(&self) -> StyleProps {
        StyleProps::new(THEME_KEY)
            .with_opt("breakpoint", self.breakpoint.map(Breakpoint::token))
            .with("isFluid", self.is_fluid.unwrap_or(false))
            .with("isLayout", self.is_layout.unwrap_or(false))
    }
}

impl ComponentProps for ContainerProps {
    fn or_defaults(self, defaults: &Self) -> Self {
        Self {
            html: self.html.or_defaults(&defaults.html),
            breakpoint: self.breakpoint.or(defaults.breakpoint),
            is_fluid: self.is_fluid.or(defaults.is_fluid),
            is_layout: self.is_layout.or(defaults.is_layout),
        }
    }

    fn or_theme_defaults(self, defaults: &ThemeSection) -> Self {
        Self {
            breakpoint: self.breakpoint.or_else(|| {
                default_text(defaults, "breakpoint").and_then(Breakpoint::from_token)
            }),
            is_fluid: self.is_fluid.or_else(|| default_flag(defaults, "isFluid")),
            is_layout: self.is_layout.or_else(|| default_flag(defaults, "isLayout")),
            ..self
        }
    }
}

fn styles(props: &StyleProps, theme: &Theme) -> Css {
    let breakpoint = props.text("breakpoint").unwrap_or("desktop");
    let is_fluid = props.flag("isFluid");
    let gutter = theme
        .token_text("Container.gutter")
        .unwrap_or_else(|| "1rem".to_string());

    let css = Css::new()
        .decl("margin-left", "auto")
        .decl("margin-right", "auto");
    let css = match theme.breakpoint(breakpoint) {
        Some(width) if !is_fluid => css.decl("max-width", format!("{width}px")),
        _ => css.decl("width", "100%"),
    };
    css.decl_if(props.flag("isLayout"), "padding-left", gutter.as_str())
        .decl_if(props.flag("isLayout"), "padding-right", gutter.as_str())
}

fn use_props(props: &ContainerProps, cx: &RenderContext<'_>) -> Result<HtmlProps> {
    let html = box_().call_hook(USE_PROPS, &props.html, cx)?;
    let style_props = props.style_props();
    let class_name = cx.class_name(
        styles(&style_props, cx.theme()),
        &style_props,
        Some(&html.class_name),
    )?;
    Ok(html.class_name(class_name))
}

fn render_div(html: HtmlProps, _cx: &RenderContext<'_>) -> Result<Element> {
    Ok(html.into_element("div"))
}

/// The Container component
pub fn container() -> &'static Component<ContainerProps> {
    static CONTAINER: OnceLock<Component<ContainerProps>> = OnceLock::new();
    CONTAINER.get_or_init(|| {
        create_component(
            use_props,
            render_div,
            ComponentConfig::new(THEME_KEY).default_props(ContainerProps {
                breakpoint: Some(Breakpoint::Desktop),
                is_fluid: Some(false),
                is_layout: Some(false),
                ..ContainerProps::default()
            }),
        )
    })
}
