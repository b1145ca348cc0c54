//! Component error types

use fanny_theme::ThemeError;
use thiserror::Error;

/// Errors raised while resolving component props or styles
#[derive(Error, Debug)]
pub enum ComponentError {
    /// A theme entry the component reads is malformed
    #[error(transparent)]
    Theme(#[from] ThemeError),

    /// A component was asked for a hook it does not attach
    #[error("component `{component}` has no `{hook}` hook")]
    MissingHook {
        component: &'static str,
        hook: String,
    },
}

/// Result type for component operations
pub type Result<T> = std::result::Result<T, ComponentError>;
