use std::{
    borrow::Cow,
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::{trace, warn};

use crate::presets::PresetProvider;

/// Presets read from `<root>/<name>.json` on disk.
pub struct DirectoryPresets {
    root: PathBuf,
}

impl DirectoryPresets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> Option<PathBuf> {
        // Names are single path components only.
        if name.contains(['/', '\\']) || name.starts_with('.') {
            return None;
        }

        Some(self.root.join(format!("{name}.json")))
    }
}

impl PresetProvider for DirectoryPresets {
    fn get(&self, name: &str) -> Option<Cow<'static, [u8]>> {
        let path = self.path_for(name)?;
        trace!(path = %path.display(), "reading preset from disk");

        match fs::read(&path) {
            Ok(bytes) => Some(Cow::Owned(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not read preset");
                None
            }
        }
    }

    fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.root)
            .with_context(|| format!("could not read preset directory \"{}\"", self.root.display()))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();

            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            if let Some(name) = path.file_stem().and_then(|stem| stem.to_str())
                && name.starts_with(prefix)
            {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }
}
