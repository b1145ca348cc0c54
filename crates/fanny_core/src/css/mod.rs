//! Structured style fragments
//!
//! A [`Css`] fragment is what a style function produces: an ordered list of
//! declarations plus nested blocks keyed by selector. Selectors use `&` for
//! the owning class (`&:hover`, `& + &`); selectors without `&` are treated as
//! descendants (`svg` becomes `.class svg`). Blocks whose selector starts
//! with `@` are at-rules that wrap the rules generated for their contents.
//!
//! A nested `&` block is flattened into its parent, so
//! `display: block; & { color: red; }` and `display: block; color: red;` are
//! the same fragment.
//!
//! # Merging
//!
//! [`Css::merge`] layers one fragment over another. Declarations from the
//! later fragment win on conflicting properties; nested blocks with the same
//! selector merge recursively.
//!
//! ```rust
//! use fanny_core::Css;
//!
//! let base = Css::new().decl("padding", "0").decl("color", "black");
//! let over = Css::new().decl("color", "white").nest("&:hover", Css::new().decl("opacity", "0.8"));
//!
//! let merged = base.merge(&over);
//! assert_eq!(merged.canonical(), "padding:0;color:white;&:hover{opacity:0.8;}");
//! ```

mod parser;

use std::fmt;

use indexmap::IndexMap;

/// A structured style fragment
#[derive(Clone, Default, Debug)]
pub struct Css {
    declarations: IndexMap<String, String>,
    blocks: IndexMap<String, Css>,
}

impl Css {
    /// Create an empty fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse raw CSS text into a fragment
    ///
    /// The text is the body of a rule: declarations and nested blocks, no
    /// outer selector.
    ///
    /// ```rust
    /// use fanny_core::Css;
    ///
    /// let css = Css::parse("display: block; &:focus { outline: none; }").unwrap();
    /// assert_eq!(css.declaration("display"), Some("block"));
    /// assert!(css.block("&:focus").is_some());
    /// ```
    pub fn parse(text: &str) -> crate::Result<Self> {
        parser::parse_fragment(text)
    }

    /// Check if the fragment contributes no style
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.blocks.values().all(Css::is_empty)
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Add a declaration, replacing any previous value for the property
    pub fn decl(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    /// Add a declaration only when `condition` holds
    pub fn decl_if(
        self,
        condition: bool,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        if condition {
            self.decl(property, value)
        } else {
            self
        }
    }

    /// Add a nested block under `selector`
    pub fn nest(mut self, selector: impl AsRef<str>, css: Css) -> Self {
        self.insert_block(selector, css);
        self
    }

    /// Merge `other` into this fragment only when `condition` holds
    pub fn merge_if(self, condition: bool, other: &Css) -> Self {
        if condition {
            self.merge(other)
        } else {
            self
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Insert a declaration in place
    ///
    /// An existing property keeps its position and takes the new value.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into().trim().to_string();
        if property.is_empty() {
            return;
        }
        self.declarations
            .insert(property, value.into().trim().to_string());
    }

    /// Insert a nested block in place, merging with an existing block
    pub fn insert_block(&mut self, selector: impl AsRef<str>, css: Css) {
        let selector = normalize_selector(selector.as_ref());
        if selector.is_empty() || selector == "&" {
            self.extend(&css);
            return;
        }
        match self.blocks.get_mut(&selector) {
            Some(existing) => existing.extend(&css),
            None => {
                self.blocks.insert(selector, css);
            }
        }
    }

    /// Layer `other` over this fragment in place
    pub fn extend(&mut self, other: &Css) {
        for (property, value) in &other.declarations {
            self.declarations.insert(property.clone(), value.clone());
        }
        for (selector, block) in &other.blocks {
            match self.blocks.get_mut(selector) {
                Some(existing) => existing.extend(block),
                None => {
                    self.blocks.insert(selector.clone(), block.clone());
                }
            }
        }
    }

    /// Layer `other` over this fragment, returning the result
    ///
    /// Declarations from `other` win on conflicting properties.
    pub fn merge(&self, other: &Css) -> Css {
        let mut merged = self.clone();
        merged.extend(other);
        merged
    }

    /// Rewrite every declaration value with `f`
    pub fn map_values(&self, f: &dyn Fn(&str) -> String) -> Css {
        Css {
            declarations: self
                .declarations
                .iter()
                .map(|(property, value)| (property.clone(), f(value)))
                .collect(),
            blocks: self
                .blocks
                .iter()
                .map(|(selector, block)| (selector.clone(), block.map_values(f)))
                .collect(),
        }
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Get the value of a top-level declaration
    pub fn declaration(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(String::as_str)
    }

    /// Iterate top-level declarations in order
    pub fn declarations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }

    /// Get a nested block by selector
    pub fn block(&self, selector: &str) -> Option<&Css> {
        self.blocks.get(&normalize_selector(selector))
    }

    /// Iterate nested blocks in order
    pub fn blocks(&self) -> impl Iterator<Item = (&str, &Css)> {
        self.blocks
            .iter()
            .map(|(selector, block)| (selector.as_str(), block))
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    /// Canonical serialization used for hashing and equality
    ///
    /// Two fragments are equal exactly when their canonical forms are equal.
    pub fn canonical(&self) -> String {
        let mut out = String::new();
        self.write_canonical(&mut out);
        out
    }

    fn write_canonical(&self, out: &mut String) {
        for (property, value) in &self.declarations {
            out.push_str(property);
            out.push(':');
            out.push_str(value);
            out.push(';');
        }
        for (selector, block) in &self.blocks {
            if block.is_empty() {
                continue;
            }
            out.push_str(selector);
            out.push('{');
            block.write_canonical(out);
            out.push('}');
        }
    }

    /// Generate stylesheet rules with `&` bound to `scope`
    ///
    /// ```rust
    /// use fanny_core::Css;
    ///
    /// let css = Css::parse("color: red; &:hover { color: blue; } @media (min-width: 768px) { color: green; }").unwrap();
    /// assert_eq!(
    ///     css.to_rules(".btn"),
    ///     vec![
    ///         ".btn{color:red;}".to_string(),
    ///         ".btn:hover{color:blue;}".to_string(),
    ///         "@media (min-width: 768px){.btn{color:green;}}".to_string(),
    ///     ]
    /// );
    /// ```
    pub fn to_rules(&self, scope: &str) -> Vec<String> {
        let mut rules = Vec::new();
        self.write_rules(scope, &mut rules);
        rules
    }

    fn write_rules(&self, scope: &str, rules: &mut Vec<String>) {
        if !self.declarations.is_empty() {
            let mut body = String::new();
            for (property, value) in &self.declarations {
                body.push_str(property);
                body.push(':');
                body.push_str(value);
                body.push(';');
            }
            rules.push(format!("{scope}{{{body}}}"));
        }
        for (selector, block) in &self.blocks {
            if selector.starts_with('@') {
                let mut inner = Vec::new();
                block.write_rules(scope, &mut inner);
                if !inner.is_empty() {
                    rules.push(format!("{selector}{{{}}}", inner.concat()));
                }
            } else {
                block.write_rules(&resolve_selector(scope, selector), rules);
            }
        }
    }
}

impl PartialEq for Css {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Css {}

impl fmt::Display for Css {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

/// Collapse runs of whitespace so `&:hover ` and `&:hover` share a block
fn normalize_selector(selector: &str) -> String {
    selector.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Bind a nested selector list to every selector of its parent
fn resolve_selector(parent: &str, selector: &str) -> String {
    let mut resolved = Vec::new();
    for outer in parent.split(',').map(str::trim) {
        for inner in selector.split(',').map(str::trim) {
            if inner.contains('&') {
                resolved.push(inner.replace('&', outer));
            } else {
                resolved.push(format!("{outer} {inner}"));
            }
        }
    }
    resolved.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_later_declarations_win() {
        let base = Css::new().decl("color", "black").decl("display", "block");
        let over = Css::new().decl("color", "white");

        let merged = base.merge(&over);
        assert_eq!(merged.declaration("color"), Some("white"));
        assert_eq!(merged.declaration("display"), Some("block"));
        // Overridden property keeps its original position
        assert_eq!(merged.canonical(), "color:white;display:block;");
    }

    #[test]
    fn test_nested_blocks_merge_recursively() {
        let base = Css::new().nest("&:hover", Css::new().decl("color", "red").decl("opacity", "1"));
        let over = Css::new().nest("&:hover", Css::new().decl("opacity", "0.5"));

        let merged = base.merge(&over);
        let hover = merged.block("&:hover").unwrap();
        assert_eq!(hover.declaration("color"), Some("red"));
        assert_eq!(hover.declaration("opacity"), Some("0.5"));
    }

    #[test]
    fn test_self_block_is_flattened() {
        let nested = Css::new()
            .decl("display", "block")
            .nest("&", Css::new().decl("color", "red"));
        let flat = Css::new().decl("display", "block").decl("color", "red");
        assert_eq!(nested, flat);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a = Css::new().decl("border", "0").decl("border-left", "1px solid");
        let b = Css::new().decl("border-left", "1px solid").decl("border", "0");
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_blocks_do_not_count() {
        let css = Css::new().nest("&:hover", Css::new());
        assert!(css.is_empty());
        assert_eq!(css.canonical(), "");
        assert_eq!(css, Css::new());
    }

    #[test]
    fn test_descendant_and_list_selectors() {
        let css = Css::new().nest(
            "&:hover, &:focus",
            Css::new().nest("svg", Css::new().decl("fill", "red")),
        );
        assert_eq!(
            css.to_rules(".a"),
            vec![".a:hover svg,.a:focus svg{fill:red;}".to_string()]
        );
    }

    #[test]
    fn test_selector_whitespace_is_normalized() {
        let css = Css::new()
            .nest("&:hover ", Css::new().decl("color", "red"))
            .nest(" &:hover", Css::new().decl("opacity", "1"));
        assert_eq!(css.blocks().count(), 1);
    }

    #[test]
    fn test_map_values() {
        let css = Css::new()
            .decl("color", "x")
            .nest("&:hover", Css::new().decl("color", "x"));
        let mapped = css.map_values(&|value| value.replace('x', "red"));
        assert_eq!(mapped.canonical(), "color:red;&:hover{color:red;}");
    }
}
