//! Fanny Core
//!
//! This crate provides the foundational types for the Fanny component library:
//!
//! - **Style fragments**: [`Css`], an ordered set of declarations with nested
//!   selector blocks, plus a parser for raw CSS text
//! - **Style props**: [`StyleProps`], the per-instance values style functions read
//! - **Element tree**: [`Element`] and [`Node`], the rendered output of components
//!
//! # Example
//!
//! ```rust
//! use fanny_core::Css;
//!
//! let base = Css::new()
//!     .decl("display", "block")
//!     .decl("color", "black");
//! let hover = Css::parse("color: red; &:hover { color: blue; }").unwrap();
//!
//! let merged = base.merge(&hover);
//! assert_eq!(merged.declaration("color"), Some("red"));
//! assert_eq!(merged.declaration("display"), Some("block"));
//! ```

pub mod css;
pub mod element;
pub mod error;
pub mod props;

pub use css::Css;
pub use element::{Element, Node};
pub use error::{CssError, Result};
pub use props::{PropValue, StyleProps};
