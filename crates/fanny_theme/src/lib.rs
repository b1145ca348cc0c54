//! Fanny Theme System
//!
//! Design tokens, the theme tree, and style resolution.
//!
//! # Overview
//!
//! - **Design tokens**: palette, spacing, typography, borders, altitudes,
//!   breakpoints, and global document styles
//! - **Theme tree**: per-component sections addressed by dotted keys such as
//!   `Button.css.root`
//! - **Overrides**: partial themes from code ([`ThemeOverrides`]) or TOML
//!   ([`ThemeConfig`])
//! - **Resolution**: [`resolve_style`] turns a theme key plus style props
//!   into a [`Css`](fanny_core::Css) fragment
//!
//! # Quick Start
//!
//! ```rust
//! use fanny_core::{Css, StyleProps};
//! use fanny_theme::{build_theme, resolve_style, ThemeOverrides, ThemeSection};
//!
//! let theme = build_theme(
//!     &ThemeOverrides::new().section(
//!         "Badge",
//!         ThemeSection::new().css("root", |props, theme| {
//!             Css::new().decl("background", theme.palette(props.text("palette").unwrap_or("default")))
//!         }),
//!     ),
//! )
//! .unwrap();
//!
//! let props = StyleProps::new("Badge").with("palette", "primary");
//! let css = resolve_style("Badge.css.root", &props, &theme).unwrap();
//! assert_eq!(css.declaration("background"), Some(theme.palette("primary").as_str()));
//! ```
//!
//! # Overrides
//!
//! Token tables merge key by key. Components that ship a default section
//! (see [`default_section`]) merge the caller's section into it; other
//! component sections are taken as given.

pub mod build;
pub mod config;
pub mod error;
pub mod resolve;
pub mod sections;
pub mod theme;
pub mod tokens;

pub use build::{build_theme, ThemeOverrides, DEFAULT_THEME_NAME};
pub use config::ThemeConfig;
pub use error::{Result, ThemeError};
pub use resolve::resolve_style;
pub use sections::default_section;
pub use theme::{StyleFn, Theme, ThemeEntry, ThemeSection, TokenValue};
pub use tokens::{derive_palette, is_token_table, Color, TOKEN_TABLES};
