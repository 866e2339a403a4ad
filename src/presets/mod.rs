//! Named configuration documents, looked up through a chain of providers.

mod presets;
pub use presets::*;

mod directory;
pub use directory::*;

use cfg_if::cfg_if;

cfg_if!(
    if #[cfg(feature = "presets")] {
        mod embedded;
        pub use embedded::*;
    }
);
