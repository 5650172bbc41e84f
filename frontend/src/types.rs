//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Label Types** - validated user-visible text
//! - **Error Types** - frontend error handling

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

// =============================================================================
// Label Types
// =============================================================================

/// Human-readable text shown on the page.
///
/// Always non-blank. The text is kept verbatim: it is never trimmed,
/// truncated or re-cased, so what the configuration says is what renders.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct DisplayLabel(String);

impl DisplayLabel {
    /// Build a label, rejecting empty or whitespace-only text.
    pub fn new(text: impl Into<String>) -> AppResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(AppError::Validation("display label must not be blank".into()));
        }
        Ok(Self(text))
    }

    /// Label for a built-in string constant.
    pub(crate) fn from_static(text: &'static str) -> Self {
        debug_assert!(!text.trim().is_empty(), "built-in label is blank");
        Self(text.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for DisplayLabel {
    type Error = AppError;

    fn try_from(text: String) -> AppResult<Self> {
        Self::new(text)
    }
}

impl From<DisplayLabel> for String {
    fn from(label: DisplayLabel) -> Self {
        label.0
    }
}

impl fmt::Display for DisplayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Components cannot fail; these come from loading the site content.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// The content document is not valid JSON for a site config.
    #[error("Config error: {0}")]
    Config(String),

    /// The content document parsed but breaks a content rule.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
