#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;

use crate::{
    NotFoundError,
    theme::{ColorSpec, ColorTable},
};

/// The color categories the builtin configuration authors.
///
/// Tables may hold any other category name as well; these are the ones
/// consumers commonly address by meaning.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn key(&self) -> &'static str)]
pub enum ColorCategoryKind {
    /// Sidebar and other dark chrome.
    #[assoc(key = "primary")]
    Primary,
    /// Content background.
    #[assoc(key = "secondary")]
    Secondary,
    /// Links, focus and call to action.
    #[assoc(key = "accent")]
    Accent,
    #[assoc(key = "success")]
    Success,
    #[assoc(key = "danger")]
    Danger,
    #[assoc(key = "warning")]
    Warning,
}

impl ColorCategoryKind {
    pub const ALL: [ColorCategoryKind; 6] = [
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Success,
        Self::Danger,
        Self::Warning,
    ];

    pub fn resolve<'a>(&self, table: &'a ColorTable) -> Result<&'a ColorSpec, NotFoundError> {
        table.lookup(self.key())
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::StyleConfig;

    #[test]
    fn test_every_kind_resolves_in_default_config() {
        let colors = StyleConfig::builtin().colors();

        for kind in ColorCategoryKind::ALL {
            let spec = kind.resolve(colors);
            assert!(spec.is_ok(), "{} should be defined", kind.key());
        }
    }

    #[test]
    fn test_nesting_is_per_category() {
        let colors = StyleConfig::builtin().colors();

        let grouped: Vec<_> = ColorCategoryKind::ALL
            .into_iter()
            .filter(|kind| !kind.resolve(colors).unwrap().is_single())
            .collect();

        assert_eq!(
            grouped,
            [ColorCategoryKind::Primary, ColorCategoryKind::Accent]
        );
    }

    #[test]
    fn test_from_key() {
        assert_eq!(
            ColorCategoryKind::from_key("danger"),
            Some(ColorCategoryKind::Danger)
        );
        assert_eq!(ColorCategoryKind::from_key("Danger"), None);
    }
}
