//! Fanny Style
//!
//! Compiles [`Css`](fanny_core::Css) fragments into stable class names and
//! collects their rules into a [`StyleSheet`].
//!
//! Equal fragments always compile to the same class, and each distinct
//! fragment contributes its rules to the sheet once.
//!
//! ```rust
//! use fanny_core::Css;
//! use fanny_style::StyleSheet;
//!
//! let sheet = StyleSheet::new();
//! let css = Css::new().decl("color", "red");
//!
//! let a = sheet.compile(&css, None);
//! let b = sheet.compile(&css, None);
//! assert_eq!(a, b);
//! assert_eq!(sheet.rule_count(), 1);
//! assert!(sheet.to_css().contains("color:red;"));
//! ```

mod class_name;
mod sheet;

pub use class_name::ClassName;
pub use sheet::{compile_class_name, StyleSheet, DEFAULT_PREFIX};
