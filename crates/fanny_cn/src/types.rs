//! Shared prop types

use std::fmt;
use std::sync::Arc;

/// Palette color a component is painted with
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Palette {
    #[default]
    Default,
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Text,
    /// Any other palette key
    Custom(String),
}

impl Palette {
    /// Palette key in the theme
    pub fn token(&self) -> &str {
        match self {
            Palette::Default => "default",
            Palette::Primary => "primary",
            Palette::Secondary => "secondary",
            Palette::Success => "success",
            Palette::Danger => "danger",
            Palette::Warning => "warning",
            Palette::Info => "info",
            Palette::Text => "text",
            Palette::Custom(name) => name,
        }
    }
}

impl From<&str> for Palette {
    fn from(token: &str) -> Self {
        match token {
            "default" => Palette::Default,
            "primary" => Palette::Primary,
            "secondary" => Palette::Secondary,
            "success" => Palette::Success,
            "danger" => Palette::Danger,
            "warning" => Palette::Warning,
            "info" => Palette::Info,
            "text" => Palette::Text,
            other => Palette::Custom(other.to_string()),
        }
    }
}

/// Component size
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Size {
    Small,
    #[default]
    Default,
    Medium,
    Large,
}

impl Size {
    pub fn token(self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Default => "default",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "small" => Some(Size::Small),
            "default" => Some(Size::Default),
            "medium" => Some(Size::Medium),
            "large" => Some(Size::Large),
            _ => None,
        }
    }

    /// Step on the `fontSizes` scale
    pub fn font_size_step(self) -> &'static str {
        match self {
            Size::Small => "150",
            Size::Default => "200",
            Size::Medium => "300",
            Size::Large => "400",
        }
    }
}

/// Visual kind of a button
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    Ghost,
    Outlined,
    Link,
}

impl ButtonKind {
    pub fn token(self) -> &'static str {
        match self {
            ButtonKind::Ghost => "ghost",
            ButtonKind::Outlined => "outlined",
            ButtonKind::Link => "link",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "ghost" => Some(ButtonKind::Ghost),
            "outlined" => Some(ButtonKind::Outlined),
            "link" => Some(ButtonKind::Link),
            _ => None,
        }
    }
}

/// HTML `type` of a button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn token(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "button" => Some(ButtonType::Button),
            "submit" => Some(ButtonType::Submit),
            "reset" => Some(ButtonType::Reset),
            _ => None,
        }
    }
}

/// Named layout breakpoint
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    #[default]
    Desktop,
    Widescreen,
    FullHd,
}

impl Breakpoint {
    /// Key in the `breakpoints` token table
    pub fn token(self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
            Breakpoint::Widescreen => "widescreen",
            Breakpoint::FullHd => "fullHD",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "mobile" => Some(Breakpoint::Mobile),
            "tablet" => Some(Breakpoint::Tablet),
            "desktop" => Some(Breakpoint::Desktop),
            "widescreen" => Some(Breakpoint::Widescreen),
            "fullHD" => Some(Breakpoint::FullHd),
            _ => None,
        }
    }
}

/// Callback receiving a selected item id
#[derive(Clone)]
pub struct ChangeHandler(Arc<dyn Fn(&str) + Send + Sync>);

impl ChangeHandler {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, id: &str) {
        (self.0)(id)
    }
}

impl PartialEq for ChangeHandler {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ChangeHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChangeHandler(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_tokens() {
        assert_eq!(Palette::from("primary"), Palette::Primary);
        assert_eq!(Palette::from("brand").token(), "brand");
        assert_eq!(Palette::default().token(), "default");
    }

    #[test]
    fn test_token_round_trip() {
        for size in [Size::Small, Size::Default, Size::Medium, Size::Large] {
            assert_eq!(Size::from_token(size.token()), Some(size));
        }
        assert_eq!(Breakpoint::from_token("fullHD"), Some(Breakpoint::FullHd));
        assert_eq!(ButtonType::from_token("menu"), None);
    }
}
