use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::theme::{ColorTable, Plugins};

/// The whole style generator configuration: a theme plus plugins.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct StyleConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub plugins: Plugins,
}

macro_rules! generate_builtin_configs {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub fn $name() -> &'static StyleConfig {
                static CONFIG: LazyLock<StyleConfig> = LazyLock::new(|| {
                    StyleConfig::from_json_str(include_str!($path))
                        .expect(concat!("builtin config ", $path, " should load"))
                });

                &CONFIG
            }
        )+
    };
}

impl StyleConfig {
    generate_builtin_configs!(["../../presets/default.json", builtin]);

    /// Shorthand for `theme.extend.colors`.
    pub fn colors(&self) -> &ColorTable {
        &self.theme.extend.colors
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ThemeConfig {
    /// Tokens merged into the generator's base theme rather than replacing it.
    #[serde(default)]
    pub extend: ExtendConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ExtendConfig {
    #[serde(default)]
    pub colors: ColorTable,
}
