use serde::{Deserialize, Deserializer, de::Error};
use serde_json::{Map, Value};
use smallvec::SmallVec;

use crate::{HexColor, PluginDescriptor};

/// Reads a color leaf without rejecting anything. Values that aren't strings
/// are kept as an invalid marker so validation can name their path.
pub fn de_hex_color<'de, D>(deserializer: D) -> Result<HexColor, D::Error>
where
    D: Deserializer<'de>,
{
    let (kind, value) = match Value::deserialize(deserializer)? {
        Value::String(text) => return Ok(HexColor::new_unchecked(text)),
        Value::Null => ("null", Value::Null),
        value @ Value::Bool(_) => ("a boolean", value),
        value @ Value::Number(_) => ("a number", value),
        value @ Value::Array(_) => ("a list", value),
        value @ Value::Object(_) => ("a map", value),
    };

    Ok(HexColor::not_a_string(kind, value.to_string()))
}

pub fn de_plugin_descriptor<'de, D>(deserializer: D) -> Result<PluginDescriptor, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NameOrObject {
        Name(String),
        Object {
            name: String,
            #[serde(default)]
            options: Option<Map<String, Value>>,
        },
    }

    let (name, options) = match NameOrObject::deserialize(deserializer)? {
        NameOrObject::Name(name) => (name, None),
        NameOrObject::Object { name, options } => (name, options),
    };

    if name.trim().is_empty() {
        return Err(D::Error::custom("plugin name can't be empty."));
    }

    Ok(PluginDescriptor { name, options })
}

/// Reads the plugin list, treating an explicit `null` the same as a missing list.
pub fn de_plugins<'de, D>(deserializer: D) -> Result<SmallVec<[PluginDescriptor; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<SmallVec<[PluginDescriptor; 1]>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
