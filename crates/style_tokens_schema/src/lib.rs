//! Leaf types and serde helpers shared by the style token schema.

mod hex;
pub use hex::*;

mod plugin;
pub use plugin::*;

pub mod deserializers;
