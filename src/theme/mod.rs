//! Typed style generator configuration.
//!
//! A [`StyleConfig`] carries a table of semantic color categories under
//! `theme.extend.colors` and an ordered plugin list. Tables are loaded from
//! JSON or TOML and validated as a whole before they are handed out.

mod schema;
pub use schema::*;

mod colors;
pub use colors::*;

mod plugins;
pub use plugins::*;

mod kinds;
pub use kinds::*;

mod load;
pub use load::*;
