use std::{fmt, io};

use style_tokens_schema::HexColorError;
use thiserror::Error;

/// A leaf or group of the color table broke the schema.
///
/// `path` is dotted, e.g. `accent.hover`, so the diagnostic points at the
/// exact entry to fix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color at '{path}' ({value:?}): {reason}")]
pub struct ValidationError {
    pub path: String,
    pub value: String,
    pub reason: ValidationErrorReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorReason {
    InvalidHex(HexColorError),
    NotAString(&'static str),
    MissingDefault,
    EmptyVariants,
    EmptyName,
}

impl fmt::Display for ValidationErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHex(err) => write!(f, "not a hex color, {err}"),
            Self::NotAString(kind) => write!(f, "expected a hex color string, found {kind}"),
            Self::MissingDefault => f.write_str("variant group has no DEFAULT key"),
            Self::EmptyVariants => f.write_str("variant group is empty"),
            Self::EmptyName => f.write_str("name can't be empty"),
        }
    }
}

/// A category was asked for that the table does not define.
///
/// Callers usually fall back to their own base palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no color category named '{category}'")]
pub struct NotFoundError {
    pub category: String,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("no preset named '{0}'")]
    PresetNotFound(String),
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
