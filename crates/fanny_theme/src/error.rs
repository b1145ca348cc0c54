//! Theme error types

use std::path::PathBuf;

use fanny_core::CssError;
use thiserror::Error;

/// Theme configuration errors
///
/// These only arise from malformed configuration. A theme key with no entry
/// is not an error; it resolves to an empty style.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A theme key resolved to an entry that cannot produce a style
    #[error("theme entry `{path}` is a {found}, expected a style function or a style value")]
    UnexpectedEntry { path: String, found: &'static str },

    /// An override does not have the shape its section requires
    #[error("invalid theme override `{section}`: {reason}")]
    InvalidOverride { section: String, reason: String },

    /// CSS text in the theme failed to parse
    #[error("invalid CSS at `{path}`: {source}")]
    Css {
        path: String,
        #[source]
        source: CssError,
    },

    /// A theme config file failed to parse
    #[error("failed to parse theme config: {0}")]
    Config(#[from] toml::de::Error),

    /// A theme config file could not be read
    #[error("failed to read theme config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ThemeError {
    pub(crate) fn invalid_override(section: impl Into<String>, reason: impl Into<String>) -> Self {
        ThemeError::InvalidOverride {
            section: section.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
