pub mod theme;

pub mod presets;

mod error;
pub use error::*;

pub use style_tokens_schema::{HexColor, HexColorError, PluginDescriptor, Rgb};
