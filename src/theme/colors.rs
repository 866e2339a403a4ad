use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use style_tokens_schema::{HexColor, HexColorError};
use tracing::{trace, warn};

use crate::{NotFoundError, ValidationError, ValidationErrorReason};

/// Key of the variant a grouped color resolves to when no variant is named.
pub const DEFAULT_VARIANT: &str = "DEFAULT";

/// The value of one color category.
///
/// Whether a category is a single color or a group of named variants is
/// decided per entry by the author; nothing here infers or adds variants.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ColorSpec {
    // Leaves accept any value, so maps must be tried before single colors.
    Variants(IndexMap<String, HexColor>),
    Single(HexColor),
}

impl ColorSpec {
    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single(_))
    }

    /// The single color, or the `DEFAULT` variant of a group.
    pub fn default_color(&self) -> Option<&HexColor> {
        self.variant(DEFAULT_VARIANT)
    }

    pub fn variant(&self, name: &str) -> Option<&HexColor> {
        match self {
            Self::Single(color) => (name == DEFAULT_VARIANT).then_some(color),
            Self::Variants(variants) => variants.get(name),
        }
    }

    fn validate(&self, category: &str) -> Result<(), ValidationError> {
        match self {
            Self::Single(color) => check_leaf(category.to_string(), color),
            Self::Variants(variants) => {
                if variants.is_empty() {
                    return Err(ValidationError {
                        path: category.to_string(),
                        value: String::new(),
                        reason: ValidationErrorReason::EmptyVariants,
                    });
                }

                for (name, color) in variants {
                    let path = format!("{category}.{name}");

                    if name.trim().is_empty() {
                        return Err(ValidationError {
                            path,
                            value: color.to_string(),
                            reason: ValidationErrorReason::EmptyName,
                        });
                    }

                    check_leaf(path, color)?;
                }

                if !variants.contains_key(DEFAULT_VARIANT) {
                    return Err(ValidationError {
                        path: format!("{category}.{DEFAULT_VARIANT}"),
                        value: String::new(),
                        reason: ValidationErrorReason::MissingDefault,
                    });
                }

                Ok(())
            }
        }
    }

    /// Lays `self` over `base`. Two groups merge variant by variant with
    /// `self` winning; any other pairing replaces `base` outright.
    fn merged_onto(&self, base: &ColorSpec) -> ColorSpec {
        match (base, self) {
            (Self::Variants(base_variants), Self::Variants(variants)) => {
                let mut merged = base_variants.clone();
                for (name, color) in variants {
                    merged.insert(name.clone(), color.clone());
                }
                Self::Variants(merged)
            }
            _ => self.clone(),
        }
    }
}

fn check_leaf(path: String, color: &HexColor) -> Result<(), ValidationError> {
    color.check().map_err(|err| ValidationError {
        path,
        value: color.to_string(),
        reason: match err {
            HexColorError::NotAString(kind) => ValidationErrorReason::NotAString(kind),
            err => ValidationErrorReason::InvalidHex(err),
        },
    })
}

fn insert_flat(flat: &mut IndexMap<String, HexColor>, key: String, color: &HexColor) {
    if let Some(previous) = flat.insert(key.clone(), color.clone()) {
        warn!(
            name = %key,
            replaced = %previous,
            color = %color,
            "two color entries flatten to the same utility name"
        );
    }
}

/// Semantic color categories in authored order.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ColorTable {
    pub categories: IndexMap<String, ColorSpec>,
}

impl ColorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: impl Into<String>, spec: ColorSpec) -> Option<ColorSpec> {
        self.categories.insert(category.into(), spec)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorSpec)> {
        self.categories.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn lookup(&self, category: &str) -> Result<&ColorSpec, NotFoundError> {
        self.categories.get(category).ok_or_else(|| NotFoundError {
            category: category.to_string(),
        })
    }

    /// Checks every category and leaf, stopping at the first offender.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (category, spec) in &self.categories {
            trace!(category = %category, "validating color category");

            if category.trim().is_empty() {
                return Err(ValidationError {
                    path: category.clone(),
                    value: String::new(),
                    reason: ValidationErrorReason::EmptyName,
                });
            }

            spec.validate(category)?;
        }

        Ok(())
    }

    /// Every leaf color with its dotted path, e.g. `("accent.hover", #0EA5E9)`.
    pub fn leaves(&self) -> impl Iterator<Item = (String, &HexColor)> {
        self.categories.iter().flat_map(|(category, spec)| {
            let (single, grouped) = match spec {
                ColorSpec::Single(color) => (Some((category.clone(), color)), None),
                ColorSpec::Variants(variants) => (
                    None,
                    Some(
                        variants
                            .iter()
                            .map(move |(name, color)| (format!("{category}.{name}"), color)),
                    ),
                ),
            };

            single.into_iter().chain(grouped.into_iter().flatten())
        })
    }

    /// Utility names a style generator derives from the table.
    ///
    /// A single color and a `DEFAULT` variant keep the bare category name,
    /// every other variant becomes `category-variant`. When two entries map to
    /// the same name (`primary-light` next to `primary.light`) the later one
    /// in authored order wins.
    pub fn flatten(&self) -> IndexMap<String, HexColor> {
        let mut flat = IndexMap::new();

        for (category, spec) in &self.categories {
            match spec {
                ColorSpec::Single(color) => insert_flat(&mut flat, category.clone(), color),
                ColorSpec::Variants(variants) => {
                    for (name, color) in variants {
                        let key = if name == DEFAULT_VARIANT {
                            category.clone()
                        } else {
                            format!("{category}-{name}")
                        };
                        insert_flat(&mut flat, key, color);
                    }
                }
            }
        }

        flat
    }

    /// Extends `base` with this table. Base categories this table does not
    /// mention are kept untouched.
    pub fn extend_onto(&self, base: &ColorTable) -> ColorTable {
        let mut merged = base.clone();

        for (category, spec) in &self.categories {
            let next = match merged.categories.get(category) {
                Some(existing) => spec.merged_onto(existing),
                None => spec.clone(),
            };
            merged.categories.insert(category.clone(), next);
        }

        merged
    }
}

impl FromIterator<(String, ColorSpec)> for ColorTable {
    fn from_iter<T: IntoIterator<Item = (String, ColorSpec)>>(iter: T) -> Self {
        Self {
            categories: iter.into_iter().collect(),
        }
    }
}
