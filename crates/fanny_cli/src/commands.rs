//! Command implementations

use std::path::Path;

use anyhow::{Context, Result};
use fanny_cn::prelude::*;
use fanny_theme::{is_token_table, ThemeConfig};
use serde::Serialize;
use tracing::{debug, info};

/// Summary printed by `fanny check`
#[derive(Debug, Default, Serialize, PartialEq)]
pub struct ThemeReport {
    pub name: String,
    /// Token tables the file overrides
    pub token_tables: Vec<String>,
    /// Component sections the file overrides
    pub components: Vec<String>,
    /// Rules generated when the showcase renders with this theme
    pub rules: usize,
}

impl ThemeReport {
    fn print(&self) {
        println!("theme `{}` is valid", self.name);
        if !self.token_tables.is_empty() {
            println!("  token tables: {}", self.token_tables.join(", "));
        }
        if !self.components.is_empty() {
            println!("  components:   {}", self.components.join(", "));
        }
        println!("  rules:        {}", self.rules);
    }
}

pub fn check(path: &Path, json: bool) -> Result<()> {
    let config = ThemeConfig::load(path)
        .with_context(|| format!("Failed to load theme {}", path.display()))?;
    let report = report(config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print();
    }
    Ok(())
}

pub fn css(theme: Option<&Path>) -> Result<()> {
    let theme = load_theme(theme)?;
    let sheet = StyleSheet::new();
    render_page(&theme, &sheet)?;
    println!("{}", sheet.to_css());
    Ok(())
}

pub fn showcase(theme: Option<&Path>) -> Result<()> {
    let theme = load_theme(theme)?;
    let sheet = StyleSheet::new();
    let page = render_page(&theme, &sheet)?;
    println!("{}", document(theme.name(), &sheet.to_css(), &page.to_html()));
    Ok(())
}

fn load_theme(path: Option<&Path>) -> Result<Theme> {
    let Some(path) = path else {
        return Ok(Theme::default());
    };
    let overrides = ThemeConfig::load(path)
        .and_then(ThemeConfig::into_overrides)
        .with_context(|| format!("Failed to load theme {}", path.display()))?;
    let theme = build_theme(&overrides).context("Invalid theme overrides")?;
    info!("Loaded theme `{}` from {}", theme.name(), path.display());
    Ok(theme)
}

fn report(config: ThemeConfig) -> Result<ThemeReport> {
    let (token_tables, components): (Vec<String>, Vec<String>) = config
        .sections
        .keys()
        .cloned()
        .partition(|name| is_token_table(name));

    let overrides = config.into_overrides()?;
    let theme = build_theme(&overrides).context("Invalid theme overrides")?;

    let sheet = StyleSheet::new();
    render_page(&theme, &sheet).context("Theme failed to render the showcase")?;

    Ok(ThemeReport {
        name: theme.name().to_string(),
        token_tables,
        components,
        rules: sheet.rule_count(),
    })
}

/// Render the showcase with global styles into `sheet`
fn render_page(theme: &Theme, sheet: &StyleSheet) -> Result<Element> {
    let cx = RenderContext::with_sheet(theme, sheet);
    let globals = inject_global_styles(&cx);
    debug!("render_page - {} global selector(s)", globals);
    Ok(showcase_page(&cx)?)
}

fn document(title: &str, css: &str, body: &str) -> String {
    let head = Element::new("meta").attr("charset", "utf-8").to_html();
    let title = Element::new("title")
        .child(format!("Fanny showcase: {title}"))
        .to_html();
    format!(
        "<!doctype html>\n<html>\n<head>\n{head}\n{title}\n<style>\n{css}\n</style>\n</head>\n<body>\n{body}\n</body>\n</html>"
    )
}

/// Every component in its main variants
fn showcase_page(cx: &RenderContext<'_>) -> fanny_cn::Result<Element> {
    let palettes = [
        Palette::Default,
        Palette::Primary,
        Palette::Secondary,
        Palette::Success,
        Palette::Danger,
        Palette::Warning,
        Palette::Info,
    ];
    let kinds = [None, Some(ButtonKind::Ghost), Some(ButtonKind::Outlined), Some(ButtonKind::Link)];

    let mut buttons = BoxProps::new();
    for kind in kinds {
        let mut row = BoxProps::new();
        for palette in &palettes {
            let mut props = ButtonProps::new()
                .palette(palette.clone())
                .child(palette.token().to_string());
            props.kind = kind;
            row = row.child(props.render(cx)?);
        }
        buttons = buttons.child(row.render_block(cx)?);
    }

    let mut sizes = BoxProps::new();
    for size in [Size::Small, Size::Default, Size::Medium, Size::Large] {
        sizes = sizes.child(
            ButtonProps::new()
                .size(size)
                .child(size.token())
                .render(cx)?,
        );
    }

    let states = BoxProps::new()
        .child(ButtonProps::new().disabled(true).child("Disabled").render(cx)?)
        .child(ButtonProps::new().is_loading(true).child("Loading").render(cx)?)
        .child(ButtonProps::new().is_static(true).child("Static").render(cx)?)
        .child(
            ButtonProps::new()
                .palette(Palette::Primary)
                .icon_before("check")
                .icon_after("chevron-right")
                .child("With icons")
                .render(cx)?,
        );

    let icons = ["check", "close", "chevron-left", "chevron-right", "chevron-down", "info", "menu"]
        .into_iter()
        .try_fold(BoxProps::new(), |row, name| {
            Ok::<_, fanny_cn::ComponentError>(
                row.child(IconProps::new(name).a11y_label(name).size("1.5em").render(cx)?),
            )
        })?;

    let nav = SideNavProps::new()
        .a11y_title("Showcase")
        .default_selected_id("buttons")
        .item(SideNavItemProps::new("buttons").href("#buttons").child("Buttons"))
        .item(SideNavItemProps::new("icons").href("#icons").child("Icons"))
        .level(
            SideNavLevelProps::new()
                .title("Layout")
                .item(SideNavItemProps::new("container").href("#container").child("Container"))
                .item(SideNavItemProps::new("navigation").href("#navigation").child("Navigation")),
        )
        .render(cx)?;

    ContainerProps::new()
        .is_layout(true)
        .use_tag("main")
        .child(nav)
        .child(section("buttons", buttons, cx)?)
        .child(section("sizes", sizes, cx)?)
        .child(section("states", states, cx)?)
        .child(section("icons", icons, cx)?)
        .render(cx)
}

fn section(id: &str, content: BoxProps, cx: &RenderContext<'_>) -> fanny_cn::Result<Element> {
    content.id(id).use_tag("section").render_block(cx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_showcase_renders_with_default_theme() {
        let theme = Theme::default();
        let sheet = StyleSheet::new();
        let page = render_page(&theme, &sheet).unwrap();

        assert_eq!(page.tag(), "main");
        assert_eq!(page.find_all("nav").len(), 1);
        assert!(page.find_all("button").len() >= 28 + 4 + 4);
        assert!(sheet.to_css().starts_with("html{"));
    }

    #[test]
    fn test_report_splits_tables_and_components() {
        let config = ThemeConfig::from_toml_str(
            r##"
            name = "brand"

            [palette]
            primary = "#ff0066"

            [Button.css]
            root = "border-radius: 0;"
            "##,
        )
        .unwrap();

        let report = report(config).unwrap();
        assert_eq!(report.name, "brand");
        assert_eq!(report.token_tables, vec!["palette".to_string()]);
        assert_eq!(report.components, vec!["Button".to_string()]);
        assert!(report.rules > 0);
    }

    #[test]
    fn test_report_surfaces_render_errors() {
        let config = ThemeConfig::from_toml_str("[Button.css]\nroot = 3\n").unwrap();
        let err = report(config).unwrap_err();
        assert!(format!("{err:#}").contains("Button.css.root"));
    }

    #[test]
    fn test_document_embeds_css_and_body() {
        let html = document("default", "a{}", "<main></main>");
        assert!(html.contains("<meta charset=\"utf-8\">\n<title>Fanny showcase: default</title>"));
        assert!(html.contains("<style>\na{}\n</style>"));
        assert!(html.contains("<body>\n<main></main>\n</body>"));
    }

    #[test]
    fn test_document_escapes_theme_name() {
        let html = document("</title><script>x</script>", "", "");
        assert!(html.contains("<title>Fanny showcase: &lt;/title&gt;&lt;script&gt;x&lt;/script&gt;</title>"));
        assert!(!html.contains("<script>"));
    }
}
