//! Box and Block primitives
//!
//! `Box` is the primitive every other component composes: it carries the
//! common HTML props (caller class, id, tag override, attributes, children).

use std::sync::OnceLock;

use fanny_core::{Css, Element, Node, StyleProps};
use fanny_style::ClassName;
use indexmap::IndexMap;

use crate::context::RenderContext;
use crate::error::Result;
use crate::factory::{create_component, Component, ComponentConfig, ComponentProps, HtmlProps, USE_PROPS};

pub const THEME_KEY: &str = "Box";
pub const BLOCK_THEME_KEY: &str = "Block";

/// Common HTML props
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoxProps {
    pub class_name: Option<ClassName>,
    pub id: Option<String>,
    pub use_tag: Option<String>,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Node>,
}

impl BoxProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caller class, kept in front of the generated one
    pub fn class_name(mut self, class_name: impl Into<ClassName>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Render as a different tag
    pub fn use_tag(mut self, tag: impl Into<String>) -> Self {
        self.use_tag = Some(tag.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn render(self, cx: &RenderContext<'_>) -> Result<Element> {
        box_().render(self, cx)
    }

    /// Render as a [`block`]
    pub fn render_block(self, cx: &RenderContext<'_>) -> Result<Element> {
        block().render(self, cx)
    }
}

impl ComponentProps for BoxProps {
    fn or_defaults(self, defaults: &Self) -> Self {
        let mut attributes = defaults.attributes.clone();
        attributes.extend(self.attributes);
        Self {
            class_name: self.class_name.or_else(|| defaults.class_name.clone()),
            id: self.id.or_else(|| defaults.id.clone()),
            use_tag: self.use_tag.or_else(|| defaults.use_tag.clone()),
            attributes,
            children: if self.children.is_empty() {
                defaults.children.clone()
            } else {
                self.children
            },
        }
    }
}

fn use_props(props: &BoxProps, cx: &RenderContext<'_>) -> Result<HtmlProps> {
    let base = Css::new().decl("box-sizing", "border-box");
    let class_name = cx.class_name(base, &StyleProps::new(THEME_KEY), props.class_name.as_ref())?;

    let mut html = HtmlProps::new().class_name(class_name);
    html.use_tag = props.use_tag.clone();
    if let Some(id) = &props.id {
        html.set_attr("id", id);
    }
    html.attributes.extend(props.attributes.clone());
    html.children = props.children.clone();
    Ok(html)
}

fn use_block_props(props: &BoxProps, cx: &RenderContext<'_>) -> Result<HtmlProps> {
    let html = box_().call_hook(USE_PROPS, props, cx)?;
    let base = Css::new().decl("display", "block");
    let class_name = cx.class_name(base, &StyleProps::new(BLOCK_THEME_KEY), Some(&html.class_name))?;
    Ok(html.class_name(class_name))
}

fn render_div(html: HtmlProps, _cx: &RenderContext<'_>) -> Result<Element> {
    Ok(html.into_element("div"))
}

/// The Box component
pub fn box_() -> &'static Component<BoxProps> {
    static BOX: OnceLock<Component<BoxProps>> = OnceLock::new();
    BOX.get_or_init(|| create_component(use_props, render_div, ComponentConfig::new(THEME_KEY)))
}

/// The Block component, a Box with `display: block`
pub fn block() -> &'static Component<BoxProps> {
    static BLOCK: OnceLock<Component<BoxProps>> = OnceLock::new();
    BLOCK.get_or_init(|| {
        create_component(
            use_block_props,
            render_div,
            ComponentConfig::new(BLOCK_THEME_KEY),
        )
    })
}
