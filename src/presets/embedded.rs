use std::borrow::Cow;

use anyhow::Result;
use rust_embed::RustEmbed;

use crate::presets::PresetProvider;

/// Presets bundled with the crate.
#[derive(RustEmbed)]
#[folder = "presets/"]
#[include = "*.json"]
#[exclude = "*.DS_Store"]
pub struct EmbeddedPresets;

impl PresetProvider for EmbeddedPresets {
    fn get(&self, name: &str) -> Option<Cow<'static, [u8]>> {
        <Self as RustEmbed>::get(&format!("{name}.json")).map(|f| f.data)
    }

    fn list(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(EmbeddedPresets::iter()
            .filter_map(|path| path.strip_suffix(".json").map(str::to_string))
            .filter(|name| name.starts_with(prefix))
            .collect())
    }
}
