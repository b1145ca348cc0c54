//! Theme overrides from TOML
//!
//! A theme file mirrors the theme tree. Top-level tables are sections; keys
//! under a `css` table hold CSS text and are parsed when the file is loaded.
//!
//! ```toml
//! name = "brand"
//!
//! [palette]
//! primary = "#ff0066"
//!
//! [Button.css]
//! root = "border-radius: 0; &:hover { opacity: 0.9; }"
//!
//! [Button.defaultProps]
//! palette = "primary"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use fanny_core::Css;
use serde::Deserialize;
use tracing::debug;

use crate::build::ThemeOverrides;
use crate::error::{Result, ThemeError};
use crate::theme::{ThemeEntry, ThemeSection, TokenValue};

/// Raw theme file contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeConfig {
    /// Theme name
    #[serde(default)]
    pub name: Option<String>,

    /// Top-level sections by name
    #[serde(flatten)]
    pub sections: BTreeMap<String, toml::Table>,
}

impl ThemeConfig {
    /// Parse a theme file from a string
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a theme file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("ThemeConfig::load - {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Convert into overrides for [`build_theme`](crate::build_theme)
    ///
    /// CSS text is parsed here so a broken file fails at load time.
    pub fn into_overrides(self) -> Result<ThemeOverrides> {
        let mut overrides = ThemeOverrides::new();
        if let Some(name) = self.name {
            overrides.set_name(name);
        }
        for (name, table) in self.sections {
            let section = convert_table(&name, &table, false)?;
            overrides = overrides.section(name, section);
        }
        Ok(overrides)
    }
}

fn convert_table(path: &str, table: &toml::Table, in_css: bool) -> Result<ThemeSection> {
    let mut section = ThemeSection::new();
    for (key, value) in table {
        let child_path = format!("{path}.{key}");
        let entry = convert_value(&child_path, value, in_css || key == "css")?;
        section.insert(key.as_str(), entry);
    }
    Ok(section)
}

fn convert_value(path: &str, value: &toml::Value, in_css: bool) -> Result<ThemeEntry> {
    let entry = match value {
        toml::Value::String(text) if in_css => {
            let css = Css::parse(text).map_err(|source| ThemeError::Css {
                path: path.to_string(),
                source,
            })?;
            ThemeEntry::Css(css)
        }
        toml::Value::String(text) => ThemeEntry::Token(TokenValue::Text(text.clone())),
        toml::Value::Integer(number) => ThemeEntry::Token(TokenValue::Number(*number as f64)),
        toml::Value::Float(number) => ThemeEntry::Token(TokenValue::Number(*number)),
        toml::Value::Boolean(flag) => ThemeEntry::Token(TokenValue::Bool(*flag)),
        toml::Value::Table(table) => ThemeEntry::Section(convert_table(path, table, in_css)?),
        toml::Value::Array(_) | toml::Value::Datetime(_) => {
            return Err(ThemeError::invalid_override(
                path,
                format!("unsupported value type `{}`", value.type_str()),
            ))
        }
    };
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_keys_parse_eagerly() {
        let config = ThemeConfig::from_toml_str(
            r#"
            [Button.css]
            root = "color: red;"
            "#,
        )
        .unwrap();
        let overrides = config.into_overrides().unwrap();
        let theme = crate::build_theme(&overrides).unwrap();
        assert!(matches!(theme.get("Button.css.root"), Some(ThemeEntry::Css(_))));
    }

    #[test]
    fn test_arrays_are_rejected() {
        let config = ThemeConfig::from_toml_str("[palette]\nprimary = [1, 2]\n").unwrap();
        let err = config.into_overrides().unwrap_err();
        assert!(matches!(
            err,
            ThemeError::InvalidOverride { ref section, .. } if section == "palette.primary"
        ));
    }
}
