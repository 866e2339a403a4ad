use std::{fs, path::Path};

use enum_assoc::Assoc;
use tracing::{debug, warn};

use crate::{LoadError, SaveError, ValidationError, theme::StyleConfig};

/// Serialization formats a [`StyleConfig`] can be read from and written to.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn extension(&self) -> &'static str)]
pub enum ConfigFormat {
    #[assoc(extension = "json")]
    Json,
    #[assoc(extension = "toml")]
    Toml,
}

impl ConfigFormat {
    /// Picks the format from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();

        [Self::Json, Self::Toml]
            .into_iter()
            .find(|format| format.extension() == extension)
    }
}

impl StyleConfig {
    /// Parses and validates a JSON document. Nothing is returned unless every
    /// color in it is valid.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let config: StyleConfig = serde_json::from_str(json)?;
        config.checked()
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, LoadError> {
        let config: StyleConfig = serde_json::from_slice(bytes)?;
        config.checked()
    }

    pub fn from_toml_str(toml: &str) -> Result<Self, LoadError> {
        let config: StyleConfig = toml::from_str(toml)?;
        config.checked()
    }

    pub fn from_str_with_format(source: &str, format: ConfigFormat) -> Result<Self, LoadError> {
        match format {
            ConfigFormat::Json => Self::from_json_str(source),
            ConfigFormat::Toml => Self::from_toml_str(source),
        }
    }

    /// Reads a config file, choosing the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| LoadError::UnsupportedFormat(path.display().to_string()))?;

        debug!(path = %path.display(), ?format, "loading style config");

        let source = fs::read_to_string(path)?;
        Self::from_str_with_format(&source, format).inspect_err(|err| {
            warn!(path = %path.display(), error = %err, "failed to load style config");
        })
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.theme.extend.colors.validate()
    }

    fn checked(self) -> Result<Self, LoadError> {
        self.validate()?;

        debug!(
            categories = self.theme.extend.colors.len(),
            plugins = self.plugins.len(),
            "style config loaded"
        );

        Ok(self)
    }

    pub fn to_json_string(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_toml_string(&self) -> Result<String, SaveError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_string_with_format(&self, format: ConfigFormat) -> Result<String, SaveError> {
        match format {
            ConfigFormat::Json => self.to_json_string(),
            ConfigFormat::Toml => self.to_toml_string(),
        }
    }

    /// Writes the config, choosing the format from the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| SaveError::UnsupportedFormat(path.display().to_string()))?;

        let mut contents = self.to_string_with_format(format)?;
        if !contents.ends_with('\n') {
            contents.push('\n');
        }

        debug!(path = %path.display(), ?format, "saving style config");
        fs::write(path, contents)?;
        Ok(())
    }
}
