//! Style props
//!
//! [`StyleProps`] carry the per-instance values a style function reads:
//! the component's theme key plus its declared props (kind, palette, size,
//! state flags) under their public camelCase names.

use std::fmt;

use indexmap::IndexMap;

/// A single style prop value
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    Bool(bool),
    Text(String),
    Number(f64),
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Bool(value) => write!(f, "{value}"),
            PropValue::Text(value) => f.write_str(value),
            PropValue::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

/// Input to style functions
#[derive(Clone, Debug, PartialEq)]
pub struct StyleProps {
    theme_key: String,
    values: IndexMap<String, PropValue>,
}

impl StyleProps {
    /// Create style props for a theme key with no values
    pub fn new(theme_key: impl Into<String>) -> Self {
        Self {
            theme_key: theme_key.into(),
            values: IndexMap::new(),
        }
    }

    /// The theme key of the component being styled
    pub fn theme_key(&self) -> &str {
        &self.theme_key
    }

    /// Copy these props under a different theme key
    ///
    /// Used for sub-slots such as `Button.Icon` that share the parent's props.
    pub fn with_theme_key(&self, theme_key: impl Into<String>) -> Self {
        Self {
            theme_key: theme_key.into(),
            values: self.values.clone(),
        }
    }

    /// Set a value (builder form)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a value only if present
    pub fn with_opt<V: Into<PropValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.set(key, value);
        }
        self
    }

    /// Set a value in place
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.values.get(key)
    }

    /// Get a text value
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(PropValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// Get a boolean flag, treating absence as `false`
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(PropValue::Bool(true)))
    }

    /// Get a numeric value
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.values.get(key) {
            Some(PropValue::Number(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_default_to_false() {
        let props = StyleProps::new("Button").with("isBefore", true);
        assert!(props.flag("isBefore"));
        assert!(!props.flag("isAfter"));
    }

    #[test]
    fn test_with_theme_key_keeps_values() {
        let props = StyleProps::new("Button").with("palette", "primary");
        let icon = props.with_theme_key("Button.Icon").with("isAfter", true);

        assert_eq!(icon.theme_key(), "Button.Icon");
        assert_eq!(icon.text("palette"), Some("primary"));
        assert!(!props.flag("isAfter"));
    }

    #[test]
    fn test_typed_getters() {
        let props = StyleProps::new("Container")
            .with("breakpoint", "desktop")
            .with("scale", 1.5)
            .with_opt::<&str>("kind", None);

        assert_eq!(props.text("breakpoint"), Some("desktop"));
        assert_eq!(props.number("scale"), Some(1.5));
        assert_eq!(props.text("scale"), None);
        assert!(props.get("kind").is_none());
    }
}
