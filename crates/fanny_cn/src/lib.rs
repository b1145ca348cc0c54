//! Fanny Component Library
//!
//! Themeable components built on the Fanny style pipeline. Every component
//! resolves its style from the theme, compiles it into a class, and renders
//! an [`Element`](fanny_core::Element):
//!
//! instance props → defaults → `use_props` → theme style → class name → element
//!
//! # Quick Start
//!
//! ```rust
//! use fanny_cn::prelude::*;
//!
//! let theme = build_theme(&ThemeOverrides::new().token("palette", "primary", "#ff0066")).unwrap();
//! let sheet = StyleSheet::new();
//! let cx = RenderContext::with_sheet(&theme, &sheet);
//!
//! let button = ButtonProps::new()
//!     .palette(Palette::Primary)
//!     .child("Save")
//!     .render(&cx)
//!     .unwrap();
//!
//! assert!(button.to_html().starts_with("<button class=\"fanny-"));
//! assert!(sheet.to_css().contains("background-color:#ff0066;"));
//! ```
//!
//! # Available Components
//!
//! - **Layout**: [`BoxProps`](components::BoxProps) (Box and Block),
//!   [`ContainerProps`](components::ContainerProps)
//! - **Media**: [`IconProps`](components::IconProps)
//! - **Actions**: [`ButtonProps`](components::ButtonProps)
//! - **Navigation**: [`NavigationProps`](components::NavigationProps),
//!   [`SideNavProps`](components::SideNavProps)

pub mod components;
pub mod context;
pub mod error;
pub mod factory;
pub mod global;
pub mod types;

pub use context::RenderContext;
pub use error::{ComponentError, Result};
pub use factory::{
    create_component, Component, ComponentConfig, ComponentProps, Hook, HtmlProps, RenderFn,
    USE_PROPS,
};
pub use global::{global_styles, inject_global_styles};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::components::*;
    pub use crate::context::RenderContext;
    pub use crate::error::{ComponentError, Result};
    pub use crate::factory::{ComponentProps, HtmlProps};
    pub use crate::global::inject_global_styles;
    pub use crate::types::{Breakpoint, ButtonKind, ButtonType, ChangeHandler, Palette, Size};

    pub use fanny_core::{Css, Element, Node, StyleProps};
    pub use fanny_style::{ClassName, StyleSheet};
    pub use fanny_theme::{build_theme, default_section, Theme, ThemeOverrides, ThemeSection};
}
