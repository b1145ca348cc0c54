//! Component factory
//!
//! A component is a pair of plain functions plus a config:
//!
//! - `use_props` turns resolved props into [`HtmlProps`] (class name,
//!   attributes, children). Components compose by calling each other's
//!   `"useProps"` hook and compiling their own class over the result.
//! - `render` turns [`HtmlProps`] into an [`Element`].
//!
//! Props left unset by the caller are filled from the theme's
//! `<ThemeKey>.defaultProps` section, then from the config defaults.

use fanny_core::{Element, Node};
use fanny_style::ClassName;
use fanny_theme::{ThemeSection, TokenValue};
use indexmap::IndexMap;

use crate::context::RenderContext;
use crate::error::{ComponentError, Result};

/// Name every component attaches its own `use_props` under
pub const USE_PROPS: &str = "useProps";

/// Props-processing function
pub type Hook<P> = fn(&P, &RenderContext<'_>) -> Result<HtmlProps>;

/// Rendering function
pub type RenderFn = fn(HtmlProps, &RenderContext<'_>) -> Result<Element>;

/// Props a component passes to its primitive element
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HtmlProps {
    pub class_name: ClassName,
    /// Tag to render instead of the component's default
    pub use_tag: Option<String>,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Node>,
}

impl HtmlProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_name(mut self, class_name: ClassName) -> Self {
        self.class_name = class_name;
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Set a boolean attribute when `on` holds
    pub fn set_flag(&mut self, name: impl Into<String>, on: bool) {
        if on {
            self.set_attr(name, "");
        }
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Build the element, honoring `use_tag`
    pub fn into_element(self, default_tag: &str) -> Element {
        let tag = self.use_tag.unwrap_or_else(|| default_tag.to_string());
        let mut element = Element::new(tag).class(self.class_name.as_str());
        for (name, value) in self.attributes {
            element.set_attr(name, value);
        }
        element.children(self.children)
    }
}

/// Props accepted by a component
pub trait ComponentProps: Clone + Default + Send + Sync + 'static {
    /// Fill fields the caller left unset from `defaults`
    fn or_defaults(self, defaults: &Self) -> Self;

    /// Fill fields the caller left unset from the theme's `defaultProps`
    fn or_theme_defaults(self, _defaults: &ThemeSection) -> Self {
        self
    }
}

/// Static description of a component
#[derive(Clone, Debug)]
pub struct ComponentConfig<P> {
    pub theme_key: &'static str,
    pub default_props: P,
    pub attach: IndexMap<&'static str, Hook<P>>,
}

impl<P: ComponentProps> ComponentConfig<P> {
    pub fn new(theme_key: &'static str) -> Self {
        Self {
            theme_key,
            default_props: P::default(),
            attach: IndexMap::new(),
        }
    }

    pub fn default_props(mut self, props: P) -> Self {
        self.default_props = props;
        self
    }

    /// Expose an auxiliary hook under `name`
    pub fn attach(mut self, name: &'static str, hook: Hook<P>) -> Self {
        self.attach.insert(name, hook);
        self
    }
}

/// A component built by [`create_component`]
#[derive(Debug)]
pub struct Component<P> {
    use_props: Hook<P>,
    render: RenderFn,
    config: ComponentConfig<P>,
}

/// Wire a component's props processing, rendering, and config together
///
/// `use_props` is attached as `"useProps"` unless the config already
/// attaches a hook under that name.
pub fn create_component<P: ComponentProps>(
    use_props: Hook<P>,
    render: RenderFn,
    mut config: ComponentConfig<P>,
) -> Component<P> {
    config.attach.entry(USE_PROPS).or_insert(use_props);
    Component {
        use_props,
        render,
        config,
    }
}

impl<P: ComponentProps> Component<P> {
    pub fn theme_key(&self) -> &'static str {
        self.config.theme_key
    }

    pub fn default_props(&self) -> &P {
        &self.config.default_props
    }

    /// Apply theme and config defaults to instance props
    pub fn resolve_props(&self, props: P, cx: &RenderContext<'_>) -> P {
        let key = format!("{}.defaultProps", self.config.theme_key);
        let props = match cx.theme().section(&key) {
            Some(section) => props.or_theme_defaults(section),
            None => props,
        };
        props.or_defaults(&self.config.default_props)
    }

    /// Resolve defaults, then run the component's props processing
    pub fn use_props(&self, props: P, cx: &RenderContext<'_>) -> Result<HtmlProps> {
        let props = self.resolve_props(props, cx);
        (self.use_props)(&props, cx)
    }

    pub fn render(&self, props: P, cx: &RenderContext<'_>) -> Result<Element> {
        let html = self.use_props(props, cx)?;
        self.render_html(html, cx)
    }

    /// Render already-processed props
    pub fn render_html(&self, html: HtmlProps, cx: &RenderContext<'_>) -> Result<Element> {
        (self.render)(html, cx)
    }

    pub fn hook(&self, name: &str) -> Option<Hook<P>> {
        self.config.attach.get(name).copied()
    }

    /// Call an attached hook on raw props, skipping default resolution
    pub fn call_hook(&self, name: &str, props: &P, cx: &RenderContext<'_>) -> Result<HtmlProps> {
        let hook = self.hook(name).ok_or_else(|| ComponentError::MissingHook {
            component: self.config.theme_key,
            hook: name.to_string(),
        })?;
        hook(props, cx)
    }
}

// =============================================================================
// Theme default helpers
// =============================================================================

/// Text value of a `defaultProps` entry
pub fn default_text<'a>(section: &'a ThemeSection, key: &str) -> Option<&'a str> {
    section
        .get(key)
        .and_then(|entry| entry.as_token())
        .and_then(TokenValue::as_text)
}

/// Boolean value of a `defaultProps` entry
pub fn default_flag(section: &ThemeSection, key: &str) -> Option<bool> {
    match section.get(key).and_then(|entry| entry.as_token())? {
        TokenValue::Bool(flag) => Some(*flag),
        TokenValue::Text(text) => text.parse().ok(),
        TokenValue::Number(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fanny_style::StyleSheet;
    use fanny_theme::{build_theme, Theme, ThemeOverrides};
    use pretty_assertions::assert_eq;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct BadgeProps {
        label: Option<String>,
        tone: Option<String>,
    }

    impl ComponentProps for BadgeProps {
        fn or_defaults(self, defaults: &Self) -> Self {
            Self {
                label: self.label.or_else(|| defaults.label.clone()),
                tone: self.tone.or_else(|| defaults.tone.clone()),
            }
        }

        fn or_theme_defaults(self, defaults: &ThemeSection) -> Self {
            Self {
                tone: self
                    .tone
                    .or_else(|| default_text(defaults, "tone").map(str::to_string)),
                ..self
            }
        }
    }

    fn use_badge_props(props: &BadgeProps, _cx: &RenderContext<'_>) -> Result<HtmlProps> {
        let mut html = HtmlProps::new();
        if let Some(tone) = &props.tone {
            html.set_attr("data-tone", tone);
        }
        if let Some(label) = &props.label {
            html.children.push(Node::text(label.as_str()));
        }
        Ok(html)
    }

    fn render_span(html: HtmlProps, _cx: &RenderContext<'_>) -> Result<Element> {
        Ok(html.into_element("span"))
    }

    fn badge() -> Component<BadgeProps> {
        create_component(
            use_badge_props,
            render_span,
            ComponentConfig::new("Badge").default_props(BadgeProps {
                label: Some("new".into()),
                tone: Some("neutral".into()),
            }),
        )
    }

    #[test]
    fn test_defaults_priority() {
        let sheet = StyleSheet::new();
        let plain = Theme::default();
        let themed = build_theme(
            &ThemeOverrides::new().section(
                "Badge",
                ThemeSection::new().with("defaultProps", ThemeSection::new().token("tone", "loud")),
            ),
        )
        .unwrap();
        let badge = badge();

        let resolved = badge.resolve_props(BadgeProps::default(), &RenderContext::with_sheet(&plain, &sheet));
        assert_eq!(resolved.tone.as_deref(), Some("neutral"));

        let resolved = badge.resolve_props(BadgeProps::default(), &RenderContext::with_sheet(&themed, &sheet));
        assert_eq!(resolved.tone.as_deref(), Some("loud"));
        assert_eq!(resolved.label.as_deref(), Some("new"));

        let instance = BadgeProps {
            tone: Some("quiet".into()),
            ..Default::default()
        };
        let resolved = badge.resolve_props(instance, &RenderContext::with_sheet(&themed, &sheet));
        assert_eq!(resolved.tone.as_deref(), Some("quiet"));
    }

    #[test]
    fn test_use_props_is_attached() {
        let sheet = StyleSheet::new();
        let theme = Theme::default();
        let cx = RenderContext::with_sheet(&theme, &sheet);
        let badge = badge();

        assert!(badge.hook(USE_PROPS).is_some());
        let html = badge.call_hook(USE_PROPS, &BadgeProps::default(), &cx).unwrap();
        // hooks see raw props
        assert!(html.attributes.is_empty());

        let err = badge.call_hook("useState", &BadgeProps::default(), &cx).unwrap_err();
        assert!(matches!(err, ComponentError::MissingHook { component: "Badge", .. }));
    }

    #[test]
    fn test_render_and_use_tag() {
        let sheet = StyleSheet::new();
        let theme = Theme::default();
        let cx = RenderContext::with_sheet(&theme, &sheet);

        let element = badge().render(BadgeProps::default(), &cx).unwrap();
        assert_eq!(element.to_html(), r#"<span data-tone="neutral">new</span>"#);

        let html = HtmlProps {
            use_tag: Some("strong".into()),
            ..HtmlProps::new()
        };
        assert_eq!(html.into_element("span").tag(), "strong");
    }

    #[test]
    fn test_default_flag_accepts_text() {
        let section = ThemeSection::new()
            .token("a", true)
            .token("b", "false")
            .token("c", 1.0);
        assert_eq!(default_flag(&section, "a"), Some(true));
        assert_eq!(default_flag(&section, "b"), Some(false));
        assert_eq!(default_flag(&section, "c"), None);
        assert_eq!(default_flag(&section, "d"), None);
    }
}
