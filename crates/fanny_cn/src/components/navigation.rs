//! Navigation landmark

use std::sync::OnceLock;

use fanny_core::{Css, Element, StyleProps};

use crate::context::RenderContext;
use crate::error::Result;
use crate::factory::{
    create_component, Component, ComponentConfig, ComponentProps, HtmlProps, USE_PROPS,
};

use super::box_::{box_, BoxProps};

pub const THEME_KEY: &str = "Navigation";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationProps {
    pub html: BoxProps,
    /// Accessible name of the landmark
    pub a11y_title: Option<String>,
}

impl NavigationProps {
    pub fn new() -> Self {
        Self::default()
    }

    html_builders!();

    pub fn a11y_title(mut self, title: impl Into<String>) -> Self {
        self.a11y_title = Some(title.into());
        self
    }

    pub fn render(self, cx: &RenderContext<'_>) -> Result<Element> {
        navigation().render(self, cx)
    }
}

impl ComponentProps for NavigationProps {
    fn or_defaults(self, defaults: &Self) -> Self {
        Self {
            html: self.html.or_defaults(&defaults.html),
            a11y_title: self.a11y_title.or_else(|| defaults.a11y_title.clone()),
        }
    }
}

fn use_props(props: &NavigationProps, cx: &RenderContext<'_>) -> Result<HtmlProps> {
    let html = box_().call_hook(USE_PROPS, &props.html, cx)?;
    let class_name = cx.class_name(
        Css::new(),
        &StyleProps::new(THEME_KEY),
        Some(&html.class_name),
    )?;
    let mut html = html.class_name(class_name);
    if let Some(title) = &props.a11y_title {
        html.set_attr("aria-label", title);
    }
    Ok(html)
}

fn render_nav(html: HtmlProps, _cx: &RenderContext<'_>) -> Result<Element> {
    Ok(html.into_element("nav"))
}

/// The Navigation component
pub fn navigation() -> &'static Component<NavigationProps> {
    static NAVIGATION: OnceLock<Component<NavigationProps>> = OnceLock::new();
    NAVIGATION.get_or_init(|| {
        create_component(use_props, render_nav, ComponentConfig::new(THEME_KEY))
    })
}
