//! Style sheet registry
//!
//! Maps fragments to generated class tokens and keeps the rules for each
//! token in insertion order. Registration is insert-if-absent under the write
//! lock, so concurrent renders never produce duplicate or conflicting rules.

use std::hash::{Hash, Hasher};
use std::sync::{OnceLock, PoisonError, RwLock};

use fanny_core::Css;
use indexmap::IndexMap;
use rustc_hash::FxHasher;
use tracing::debug;

use crate::class_name::ClassName;

/// Prefix of generated class tokens
pub const DEFAULT_PREFIX: &str = "fanny";

/// Global style sheet instance
static STYLE_SHEET: OnceLock<StyleSheet> = OnceLock::new();

#[derive(Debug)]
struct Registered {
    fragment: Css,
    canonical: String,
    rules: Vec<String>,
}

#[derive(Debug, Default)]
struct Inner {
    classes: IndexMap<String, Registered>,
    globals: IndexMap<String, Vec<String>>,
}

/// Where a fragment lives (or would live) in the registry
enum Slot {
    Existing(String),
    Vacant(String),
}

/// Registry of compiled classes and global rules
#[derive(Debug)]
pub struct StyleSheet {
    prefix: String,
    inner: RwLock<Inner>,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleSheet {
    /// Create an empty sheet with the default prefix
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    /// Create an empty sheet whose tokens start with `prefix`
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            inner: RwLock::new(Inner::default()),
        }
    }

    /// The process-wide sheet
    pub fn global() -> &'static StyleSheet {
        STYLE_SHEET.get_or_init(StyleSheet::new)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Compile a fragment into a class name, registering its rules
    ///
    /// Tokens of `previous` that this sheet generated contribute their
    /// fragments as the base, with `fragment` merged on top. Other tokens are
    /// kept in front of the generated one. An empty result registers nothing.
    ///
    /// ```rust
    /// use fanny_core::Css;
    /// use fanny_style::StyleSheet;
    ///
    /// let sheet = StyleSheet::new();
    /// let base = sheet.compile(&Css::new().decl("color", "red").decl("margin", "0"), None);
    /// let composed = sheet.compile(&Css::new().decl("color", "blue"), Some(&base));
    ///
    /// let merged = sheet.fragment(composed.as_str()).unwrap();
    /// assert_eq!(merged.declaration("color"), Some("blue"));
    /// assert_eq!(merged.declaration("margin"), Some("0"));
    /// ```
    pub fn compile(&self, fragment: &Css, previous: Option<&ClassName>) -> ClassName {
        let mut merged = Css::new();
        let mut passthrough = Vec::new();

        if let Some(previous) = previous {
            let inner = self.read();
            for token in previous.tokens() {
                match inner.classes.get(token) {
                    Some(registered) => merged.extend(&registered.fragment),
                    None => passthrough.push(token.to_string()),
                }
            }
        }
        merged.extend(fragment);

        if !merged.is_empty() {
            passthrough.push(self.register(&merged));
        }
        ClassName::new(passthrough.join(" "))
    }

    /// Add rules for a global selector such as `body`
    ///
    /// Returns `false` if the selector already has rules; the first rules win.
    pub fn insert_global(&self, selector: &str, css: &Css) -> bool {
        let selector = selector.trim();
        if selector.is_empty() || css.is_empty() {
            return false;
        }
        let mut inner = self.write();
        if inner.globals.contains_key(selector) {
            return false;
        }
        let rules = css.to_rules(selector);
        debug!(
            "StyleSheet::insert_global - {} ({} rule(s))",
            selector,
            rules.len()
        );
        inner.globals.insert(selector.to_string(), rules);
        true
    }

    /// Render every rule, global rules first
    pub fn to_css(&self) -> String {
        let inner = self.read();
        inner
            .globals
            .values()
            .flatten()
            .chain(inner.classes.values().flat_map(|registered| &registered.rules))
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of rules in the sheet
    pub fn rule_count(&self) -> usize {
        let inner = self.read();
        inner.globals.values().map(Vec::len).sum::<usize>()
            + inner
                .classes
                .values()
                .map(|registered| registered.rules.len())
                .sum::<usize>()
    }

    /// Number of generated classes
    pub fn class_count(&self) -> usize {
        self.read().classes.len()
    }

    /// Check whether `token` was generated by this sheet
    pub fn contains(&self, token: &str) -> bool {
        self.read().classes.contains_key(token)
    }

    /// The fragment behind a generated token
    pub fn fragment(&self, token: &str) -> Option<Css> {
        self.read()
            .classes
            .get(token)
            .map(|registered| registered.fragment.clone())
    }

    fn register(&self, fragment: &Css) -> String {
        let canonical = fragment.canonical();

        if let Slot::Existing(token) = self.locate(&self.read(), &canonical) {
            return token;
        }

        let mut inner = self.write();
        match self.locate(&inner, &canonical) {
            Slot::Existing(token) => token,
            Slot::Vacant(token) => {
                let rules = fragment.to_rules(&format!(".{token}"));
                debug!(
                    "StyleSheet::register - {} ({} rule(s))",
                    token,
                    rules.len()
                );
                inner.classes.insert(
                    token.clone(),
                    Registered {
                        fragment: fragment.clone(),
                        canonical,
                        rules,
                    },
                );
                token
            }
        }
    }

    /// Probe salted tokens until one matches `canonical` or is free
    fn locate(&self, inner: &Inner, canonical: &str) -> Slot {
        let mut salt = 0u32;
        loop {
            let token = self.token_for(canonical, salt);
            match inner.classes.get(&token) {
                None => return Slot::Vacant(token),
                Some(registered) if registered.canonical == canonical => {
                    return Slot::Existing(token)
                }
                Some(_) => salt += 1,
            }
        }
    }

    fn token_for(&self, canonical: &str, salt: u32) -> String {
        let mut hasher = FxHasher::default();
        canonical.hash(&mut hasher);
        if salt > 0 {
            salt.hash(&mut hasher);
        }
        let hash = hasher.finish();
        format!("{}-{:08x}", self.prefix, (hash ^ (hash >> 32)) as u32)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Compile a fragment against the global sheet
pub fn compile_class_name(fragment: &Css, previous: Option<&ClassName>) -> ClassName {
    StyleSheet::global().compile(fragment, previous)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_same_fragment_same_token() {
        let sheet = StyleSheet::new();
        let a = sheet.compile(&Css::new().decl("color", "red"), None);
        let b = sheet.compile(&Css::parse("color: red;").unwrap(), None);

        assert_eq!(a, b);
        assert!(a.as_str().starts_with("fanny-"));
        assert_eq!(sheet.class_count(), 1);
        assert_eq!(sheet.rule_count(), 1);
    }

    #[test]
    fn test_tokens_are_stable_across_sheets() {
        let css = Css::new().decl("padding", "1rem");
        assert_eq!(
            StyleSheet::new().compile(&css, None),
            StyleSheet::new().compile(&css, None)
        );
    }

    #[test]
    fn test_empty_fragment_registers_nothing() {
        let sheet = StyleSheet::new();
        assert!(sheet.compile(&Css::new(), None).is_empty());
        assert_eq!(sheet.rule_count(), 0);

        let kept = sheet.compile(&Css::new(), Some(&ClassName::new("user-class")));
        assert_eq!(kept.as_str(), "user-class");
        assert_eq!(sheet.class_count(), 0);
    }

    #[test]
    fn test_unknown_previous_tokens_are_kept_in_front() {
        let sheet = StyleSheet::new();
        let class = sheet.compile(
            &Css::new().decl("color", "red"),
            Some(&ClassName::new("user-class")),
        );
        let tokens: Vec<_> = class.tokens().collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], "user-class");
        assert!(sheet.contains(tokens[1]));
    }

    #[test]
    fn test_collision_is_salted() {
        let sheet = StyleSheet::new();
        let css = Css::new().decl("color", "red");
        let canonical = css.canonical();
        let taken = sheet.token_for(&canonical, 0);

        // occupy the unsalted slot with different content
        sheet.write().classes.insert(
            taken.clone(),
            Registered {
                fragment: Css::new().decl("color", "blue"),
                canonical: "color:blue;".to_string(),
                rules: Vec::new(),
            },
        );

        let class = sheet.compile(&css, None);
        assert_ne!(class.as_str(), taken);
        assert_eq!(class.as_str(), sheet.token_for(&canonical, 1));
        assert_eq!(sheet.compile(&css, None), class);
    }

    #[test]
    fn test_nested_rules_are_scoped_to_the_token() {
        let sheet = StyleSheet::new();
        let class = sheet.compile(
            &Css::parse("color: red; &:hover { color: blue; }").unwrap(),
            None,
        );
        let css = sheet.to_css();
        assert!(css.contains(&format!(".{class}{{color:red;}}")));
        assert!(css.contains(&format!(".{class}:hover{{color:blue;}}")));
        assert_eq!(sheet.rule_count(), 2);
    }

    #[test]
    fn test_globals_are_idempotent_and_rendered_first() {
        let sheet = StyleSheet::new();
        sheet.compile(&Css::new().decl("color", "red"), None);
        assert!(sheet.insert_global("body", &Css::new().decl("margin", "0")));
        assert!(!sheet.insert_global("body", &Css::new().decl("margin", "1px")));

        assert!(sheet.to_css().starts_with("body{margin:0;}"));
        assert_eq!(sheet.rule_count(), 2);
    }
}
