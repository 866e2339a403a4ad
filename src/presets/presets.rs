use std::borrow::Cow;

use anyhow::Result;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{LoadError, theme::StyleConfig};

/// A chain of preset providers searched in order.
pub struct Presets<const N: usize> {
    providers: SmallVec<[Box<dyn PresetProvider>; N]>,
}

impl<const N: usize> Presets<N> {
    pub fn new(providers: [Box<dyn PresetProvider>; N]) -> Presets<N> {
        Self {
            providers: SmallVec::from(providers),
        }
    }

    /// Raw bytes of the first preset named `name`.
    pub fn get(&self, name: &str) -> Option<Cow<'static, [u8]>> {
        if name.is_empty() {
            return None;
        }

        self.providers.iter().find_map(|provider| provider.get(name))
    }

    /// Parses and validates the first preset named `name`.
    pub fn load(&self, name: &str) -> Result<StyleConfig, LoadError> {
        let Some(bytes) = self.get(name) else {
            debug!(name, "preset not found in any provider");
            return Err(LoadError::PresetNotFound(name.to_string()));
        };

        trace!(name, len = bytes.len(), "loading preset");
        StyleConfig::from_json_slice(&bytes)
    }

    /// Names from every provider that start with `prefix`, in provider order.
    pub fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for provider in &self.providers {
            for name in provider.list(prefix)? {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }

        Ok(names)
    }
}

#[macro_export]
macro_rules! presets {
    ( $( $item:expr ),* $(,)? ) => {
        $crate::presets::Presets::new([
            $( Box::new($item) ),*
        ])
    };
}

/// Somewhere preset documents (JSON) can be read from by name.
pub trait PresetProvider: Send + Sync {
    fn get(&self, name: &str) -> Option<Cow<'static, [u8]>>;
    fn list(&self, prefix: &str) -> Result<Vec<String>>;
}

#[cfg(all(test, feature = "presets"))]
mod tests {
    use std::fs;

    use super::*;
    use crate::presets::{DirectoryPresets, EmbeddedPresets};

    #[test]
    fn test_embedded_default_matches_builtin() {
        let presets = presets![EmbeddedPresets];
        let config = presets.load("default").unwrap();
        assert_eq!(&config, StyleConfig::builtin());
    }

    #[test]
    fn test_missing_preset() {
        let presets = presets![EmbeddedPresets];
        assert!(matches!(
            presets.load("nonexistent"),
            Err(LoadError::PresetNotFound(name)) if name == "nonexistent"
        ));
        assert!(presets.get("").is_none());
    }

    #[test]
    fn test_earlier_provider_wins() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.json"),
            r##"{ "theme": { "extend": { "colors": { "secondary": "#000" } } } }"##,
        )
        .unwrap();

        let presets = presets![DirectoryPresets::new(dir.path()), EmbeddedPresets];
        let config = presets.load("default").unwrap();

        assert_eq!(config.colors().len(), 1);
        assert_eq!(
            config.colors().lookup("secondary").unwrap().default_color().unwrap().as_str(),
            "#000"
        );
    }

    #[test]
    fn test_invalid_preset_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("broken.json"),
            r##"{ "theme": { "extend": { "colors": { "accent": { "hover": "#0EA5E9" } } } } }"##,
        )
        .unwrap();

        let presets = presets![DirectoryPresets::new(dir.path())];
        let Err(LoadError::Validation(err)) = presets.load("broken") else {
            panic!("broken preset should fail validation");
        };
        assert_eq!(err.path, "accent.DEFAULT");
    }

    #[test]
    fn test_list_merges_providers() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("dashboard.json"), "{}").unwrap();
        fs::write(dir.path().join("default.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let presets = presets![DirectoryPresets::new(dir.path()), EmbeddedPresets];

        assert_eq!(presets.list("").unwrap(), ["dashboard", "default"]);
        assert_eq!(presets.list("das").unwrap(), ["dashboard"]);
    }

    #[test]
    fn test_directory_rejects_path_names() {
        let dir = tempfile::tempdir().unwrap();
        let presets = DirectoryPresets::new(dir.path());

        assert!(presets.get("../default").is_none());
        assert!(presets.get(".hidden").is_none());
    }

    #[test]
    fn test_unreadable_preset_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("default.json")).unwrap();

        let directory = DirectoryPresets::new(dir.path());
        assert!(
            directory.get("default").is_none(),
            "A directory in place of a preset file should not be read"
        );

        let presets = presets![DirectoryPresets::new(dir.path()), EmbeddedPresets];
        assert_eq!(&presets.load("default").unwrap(), StyleConfig::builtin());
    }

    #[test]
    fn test_missing_directory_list_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let presets = DirectoryPresets::new(dir.path().join("absent"));
        assert!(presets.list("").is_err());
    }
}
