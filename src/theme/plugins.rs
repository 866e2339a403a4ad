use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use style_tokens_schema::{PluginDescriptor, deserializers::de_plugins};

/// Ordered plugin descriptors handed to the style generator.
///
/// Always serializes as an array, `[]` when empty. A missing or `null` list
/// reads as empty.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Plugins {
    #[serde(deserialize_with = "de_plugins")]
    pub descriptors: SmallVec<[PluginDescriptor; 1]>,
}

impl Plugins {
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn push(&mut self, descriptor: PluginDescriptor) {
        self.descriptors.push(descriptor);
    }

    pub fn iter(&self) -> impl Iterator<Item = &PluginDescriptor> {
        self.descriptors.iter()
    }

    pub fn get(&self, name: &str) -> Option<&PluginDescriptor> {
        self.descriptors.iter().find(|plugin| plugin.name == name)
    }
}
