use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::deserializers::de_plugin_descriptor;

/// One entry of the plugin list.
///
/// Written either as a bare name (`"forms"`) or as an object carrying options
/// (`{ "name": "forms", "options": { "strategy": "class" } }`).
#[derive(Debug, Clone, PartialEq)]
pub struct PluginDescriptor {
    pub name: String,
    pub options: Option<Map<String, Value>>,
}

impl PluginDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: None,
        }
    }

    pub fn with_options(mut self, options: Map<String, Value>) -> Self {
        self.options = Some(options);
        self
    }
}

impl<'de> Deserialize<'de> for PluginDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        de_plugin_descriptor(deserializer)
    }
}

impl Serialize for PluginDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct WithOptions<'a> {
            name: &'a str,
            options: &'a Map<String, Value>,
        }

        match &self.options {
            None => serializer.serialize_str(&self.name),
            Some(options) => WithOptions {
                name: &self.name,
                options,
            }
            .serialize(serializer),
        }
    }
}
