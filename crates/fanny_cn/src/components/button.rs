//! Button component
//!
//! A themed button composed over [`Box`](super::box_). Supports palette,
//! size, and kind variants, a loading state, and icons on either side.
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
//! let element = ButtonProps::new()
//!     .palette(Palette::Primary)
//!     .icon_before("check")
//!     .child("Save")
//!     .render(&cx)
//!     .unwrap();
//!
//! assert_eq!(element.tag(), "button");
//! assert_eq!(element.attribute("type"), Some("button"));
//! assert_eq!(element.find_all("svg").len(), 1);
//! ```

use std::sync::OnceLock;

use fanny_core::{Css, Element, Node, StyleProps};
use fanny_theme::{Theme, ThemeSection};

use crate::context::RenderContext;
use crate::error::Result;
use crate::factory::{
    create_component, default_flag, default_text, Component, ComponentConfig, ComponentProps,
    HtmlProps, USE_PROPS,
};
use crate::types::{ButtonKind, ButtonType, Palette, Size};

use super::box_::{box_, BoxProps};
use super::icon::{icon, IconProps, IconSource};

pub const THEME_KEY: &str = "Button";
pub const ICON_THEME_KEY: &str = "Button.Icon";
pub const SPINNER_THEME_KEY: &str = "Button.Spinner";

/// Button props
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ButtonProps {
    pub html: BoxProps,
    pub kind: Option<ButtonKind>,
    pub palette: Option<Palette>,
    pub size: Option<Size>,
    pub button_type: Option<ButtonType>,
    pub disabled: Option<bool>,
    pub is_loading: Option<bool>,
    /// Render without hover, focus, and active feedback
    pub is_static: Option<bool>,
    pub icon_before: Option<IconSource>,
    pub icon_before_props: Option<IconProps>,
    pub icon_after: Option<IconSource>,
    pub icon_after_props: Option<IconProps>,
}

impl ButtonProps {
    pub fn new() -> Self {
        Self::default()
    }

    html_builders!();

    pub fn kind(mut self, kind: ButtonKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn palette(mut self, palette: impl Into<Palette>) -> Self {
        self.palette = Some(palette.into());
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn button_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = Some(button_type);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn is_loading(mut self, is_loading: bool) -> Self {
        self.is_loading = Some(is_loading);
        self
    }

    pub fn is_static(mut self, is_static: bool) -> Self {
        self.is_static = Some(is_static);
        self
    }

    pub fn icon_before(mut self, icon: impl Into<IconSource>) -> Self {
        self.icon_before = Some(icon.into());
        self
    }

    pub fn icon_before_props(mut self, props: IconProps) -> Self {
        self.icon_before_props = Some(props);
        self
    }

    pub fn icon_after(mut self, icon: impl Into<IconSource>) -> Self {
        self.icon_after = Some(icon.into());
        self
    }

    pub fn icon_after_props(mut self, props: IconProps) -> Self {
        self.icon_after_props = Some(props);
        self
    }

    pub fn render(self, cx: &RenderContext<'_>) -> Result<Element> {
        button().render(self, cx)
    }

    /// Style props under their public names
    pub fn style_props(&self) -> StyleProps {
        StyleProps::new(THEME_KEY)
            .with_opt("kind", self.kind.map(ButtonKind::token))
            .with_opt("palette", self.palette.as_ref().map(|p| p.token().to_string()))
            .with_opt("size", self.size.map(Size::token))
            .with_opt("type", self.button_type.map(ButtonType::token))
            .with("disabled", self.disabled.unwrap_or(false))
            .with("isLoading", self.is_loading.unwrap_or(false))
            .with("isStatic", self.is_static.unwrap_or(false))
    }
}

impl ComponentProps for ButtonProps {
    fn or_defaults(self, defaults: &Self) -> Self {
        Self {
            html: self.html.or_defaults(&defaults.html),
            kind: self.kind.or(defaults.kind),
            palette: self.palette.or_else(|| defaults.palette.clone()),
            size: self.size.or(defaults.size),
            button_type: self.button_type.or(defaults.button_type),
            disabled: self.disabled.or(defaults.disabled),
            is_loading: self.is_loading.or(defaults.is_loading),
            is_static: self.is_static.or(defaults.is_static),
            icon_before: self.icon_before.or_else(|| defaults.icon_before.clone()),
            icon_before_props: self
                .icon_before_props
                .or_else(|| defaults.icon_before_props.clone()),
            icon_after: self.icon_after.or_else(|| defaults.icon_after.clone()),
            icon_after_props: self
                .icon_after_props
                .or_else(|| defaults.icon_after_props.clone()),
        }
    }

    fn or_theme_defaults(self, defaults: &ThemeSection) -> Self {
        Self {
            kind: self
                .kind
                .or_else(|| default_text(defaults, "kind").and_then(ButtonKind::from_token)),
            palette: self
                .palette
                .or_else(|| default_text(defaults, "palette").map(Palette::from)),
            size: self
                .size
                .or_else(|| default_text(defaults, "size").and_then(Size::from_token)),
            button_type: self
                .button_type
                .or_else(|| default_text(defaults, "type").and_then(ButtonType::from_token)),
            disabled: self.disabled.or_else(|| default_flag(defaults, "disabled")),
            is_loading: self.is_loading.or_else(|| default_flag(defaults, "isLoading")),
            is_static: self.is_static.or_else(|| default_flag(defaults, "isStatic")),
            ..self
        }
    }
}

// =============================================================================
// Styles
// =============================================================================

fn styles(props: &StyleProps, theme: &Theme) -> Css {
    let palette = props.text("palette").unwrap_or("default");
    let size = props
        .text("size")
        .and_then(Size::from_token)
        .unwrap_or_default();
    let kind = props.text("kind").and_then(ButtonKind::from_token);
    let disabled = props.flag("disabled");
    let loading = props.flag("isLoading");
    let is_static = props.flag("isStatic");

    let base = Css::new()
        .decl("align-items", "center")
        .decl("border", "1px solid transparent")
        .decl("border-radius", theme.border_radius("default"))
        .decl("cursor", "pointer")
        .decl("display", "inline-flex")
        .decl("font-family", theme.font("default"))
        .decl("font-size", theme.font_size(size.font_size_step()))
        .decl("font-weight", theme.font_weight("semibold"))
        .decl("justify-content", "center")
        .decl("line-height", "1.5")
        .decl("min-height", "2.5em")
        .decl("padding", format!("0 {}", theme.space(4.0)))
        .decl("position", "relative")
        .decl("text-decoration", "none")
        .decl("user-select", "none")
        .decl("white-space", "nowrap");

    let mut css = base.merge(&kind_styles(kind, palette, theme));

    if !(disabled || loading || is_static) {
        css = css
            .nest("&:hover", hover_styles(kind, palette, theme))
            .nest(
                "&:focus",
                Css::new().decl("outline", "none").decl(
                    "box-shadow",
                    format!("0 0 0 3px {}", theme.palette(&format!("{palette}Tint"))),
                ),
            );
    }

    css.decl_if(disabled, "cursor", "not-allowed")
        .decl_if(disabled, "opacity", "0.7")
        .decl_if(loading, "cursor", "wait")
        .decl_if(is_static, "cursor", "default")
}

/// Foreground for kinds that draw on a transparent background
fn foreground(palette: &str, theme: &Theme) -> String {
    if palette == "default" {
        theme.palette("text")
    } else {
        theme.palette(palette)
    }
}

fn kind_styles(kind: Option<ButtonKind>, palette: &str, theme: &Theme) -> Css {
    match kind {
        None => Css::new()
            .decl("background-color", theme.palette(palette))
            .decl("color", theme.palette(&format!("{palette}Inverted"))),
        Some(ButtonKind::Ghost) => Css::new()
            .decl("background-color", "transparent")
            .decl("color", foreground(palette, theme)),
        Some(ButtonKind::Outlined) => Css::new()
            .decl("background-color", "transparent")
            .decl(
                "border",
                format!("{} {}", theme.border("default"), theme.palette(palette)),
            )
            .decl("color", foreground(palette, theme)),
        Some(ButtonKind::Link) => Css::new()
            .decl("background-color", "transparent")
            .decl("color", foreground(palette, theme))
            .decl("min-height", "unset")
            .decl("padding", "0"),
    }
}

fn hover_styles(kind: Option<ButtonKind>, palette: &str, theme: &Theme) -> Css {
    match kind {
        None => Css::new().decl("background-color", theme.palette(&format!("{palette}Shade"))),
        Some(ButtonKind::Ghost) | Some(ButtonKind::Outlined) => {
            Css::new().decl("background-color", theme.palette(&format!("{palette}Tint")))
        }
        Some(ButtonKind::Link) => Css::new().decl("text-decoration", "underline"),
    }
}

fn icon_styles(props: &StyleProps, theme: &Theme) -> Css {
    let gap = theme.space(2.0);
    let pull = format!("-{}", theme.space(1.0));
    Css::new()
        .decl_if(props.flag("isBefore"), "margin-left", pull.as_str())
        .decl_if(props.flag("isBefore"), "margin-right", gap.as_str())
        .decl_if(props.flag("isAfter"), "margin-left", gap.as_str())
        .decl_if(props.flag("isAfter"), "margin-right", pull.as_str())
}

fn spinner_styles() -> Css {
    Css::new()
        .decl("left", "50%")
        .decl("position", "absolute")
        .decl("top", "50%")
        .decl("transform", "translate(-50%, -50%)")
}

// =============================================================================
// Props
// =============================================================================

fn use_props(props: &ButtonProps, cx: &RenderContext<'_>) -> Result<HtmlProps> {
    let html = box_().call_hook(USE_PROPS, &props.html, cx)?;
    let style_props = props.style_props();
    let class_name = cx.class_name(
        styles(&style_props, cx.theme()),
        &style_props,
        Some(&html.class_name),
    )?;
    let mut html = html.class_name(class_name);

    let loading = props.is_loading.unwrap_or(false);
    html.set_attr("type", props.button_type.unwrap_or_default().token());
    html.set_flag("disabled", props.disabled.unwrap_or(false));
    if loading {
        html.set_attr("aria-busy", "true");
    }

    let mut children: Vec<Node> = Vec::new();
    if loading {
        children.push(spinner(&style_props, cx)?.into());
    }
    if let Some(source) = &props.icon_before {
        let slot = style_props.with_theme_key(ICON_THEME_KEY).with("isBefore", true);
        children.push(slot_icon(source, props.icon_before_props.clone(), &slot, cx)?.into());
    }
    children.append(&mut html.children);
    if let Some(source) = &props.icon_after {
        let slot = style_props.with_theme_key(ICON_THEME_KEY).with("isAfter", true);
        children.push(slot_icon(source, props.icon_after_props.clone(), &slot, cx)?.into());
    }
    html.children = children;
    Ok(html)
}

/// Icon in a before/after slot, classed from `Button.Icon`
fn slot_icon(
    source: &IconSource,
    icon_props: Option<IconProps>,
    style_props: &StyleProps,
    cx: &RenderContext<'_>,
) -> Result<Element> {
    let slot_class = cx.class_name(icon_styles(style_props, cx.theme()), style_props, None)?;
    let mut props = icon_props.unwrap_or_default();
    props.icon = Some(source.clone());
    props.html.class_name = Some(match props.html.class_name.take() {
        Some(caller) => slot_class.join(&caller),
        None => slot_class,
    });
    icon().render(props, cx)
}

fn spinner(style_props: &StyleProps, cx: &RenderContext<'_>) -> Result<Element> {
    let spinner_props = style_props.with_theme_key(SPINNER_THEME_KEY);
    let class_name = cx.class_name(spinner_styles(), &spinner_props, None)?;
    IconProps::new("spinner").class_name(class_name).render(cx)
}

fn render_button(html: HtmlProps, _cx: &RenderContext<'_>) -> Result<Element> {
    Ok(html.into_element("button"))
}

/// The Button component
pub fn button() -> &'static Component<ButtonProps> {
    static BUTTON: OnceLock<Component<ButtonProps>> = OnceLock::new();
    BUTTON.get_or_init(|| {
        create_component(
            use_props,
            render_button,
            ComponentConfig::new(THEME_KEY).default_props(ButtonProps {
                palette: Some(Palette::Default),
                size: Some(Size::Default),
                button_type: Some(ButtonType::Button),
                disabled: Some(false),
                is_loading: Some(false),
                is_static: Some(false),
                ..ButtonProps::default()
            }),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fanny_style::StyleSheet;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_size_scales_font() {
        let theme = Theme::default();
        let small = styles(&StyleProps::new(THEME_KEY).with("size", "small"), &theme);
        let large = styles(&StyleProps::new(THEME_KEY).with("size", "large"), &theme);
        assert_eq!(small.declaration("font-size"), Some("0.875rem"));
        assert_eq!(large.declaration("font-size"), Some("1.5rem"));
    }

    #[test]
    fn test_static_and_disabled_drop_feedback() {
        let theme = Theme::default();
        let live = styles(&StyleProps::new(THEME_KEY), &theme);
        assert!(live.block("&:hover").is_some());

        let disabled = styles(&StyleProps::new(THEME_KEY).with("disabled", true), &theme);
        assert!(disabled.block("&:hover").is_none());
        assert_eq!(disabled.declaration("cursor"), Some("not-allowed"));

        let fixed = styles(&StyleProps::new(THEME_KEY).with("isStatic", true), &theme);
        assert!(fixed.block("&:focus").is_none());
    }

    #[test]
    fn test_loading_renders_spinner() {
        let sheet = StyleSheet::new();
        let theme = Theme::default();
        let cx = RenderContext::with_sheet(&theme, &sheet);

        let element = ButtonProps::new()
            .is_loading(true)
            .child("Save")
            .render(&cx)
            .unwrap();

        assert_eq!(element.attribute("aria-busy"), Some("true"));
        let svgs = element.find_all("svg");
        assert_eq!(svgs.len(), 1);
        let spinner = sheet.fragment(svgs[0].class_name().unwrap()).unwrap();
        assert_eq!(spinner.declaration("position"), Some("absolute"));
        assert_eq!(element.text_content(), "Save");
    }

    #[test]
    fn test_kind_styles() {
        let theme = Theme::default();
        let outlined = styles(
            &StyleProps::new(THEME_KEY)
                .with("kind", "outlined")
                .with("palette", "primary"),
            &theme,
        );
        assert_eq!(outlined.declaration("background-color"), Some("transparent"));
        assert_eq!(outlined.declaration("border"), Some("1px solid #574feb"));
    }
}
