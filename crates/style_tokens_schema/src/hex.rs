use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::deserializers::de_hex_color;

/// A color written as `#RGB` or `#RRGGBB`.
///
/// The text is kept exactly as authored so a loaded table serializes back to
/// the same strings. Deserializing never rejects a value, not even one that
/// isn't a string; call [`HexColor::check`] (or validate the owning table) to
/// enforce the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor {
    text: String,
    /// Kind of the non-string value this was read from, if any.
    not_a_string: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HexColorError {
    #[error("expected a leading '#'")]
    MissingHash,
    #[error("expected 3 or 6 hex digits, found {0}")]
    BadLength(usize),
    #[error("'{0}' is not a hex digit")]
    BadDigit(char),
    #[error("expected a string, found {0}")]
    NotAString(&'static str),
}

/// An 8-bit per channel color decoded from a [`HexColor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    /// Wraps `value` without checking it.
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self {
            text: value.into(),
            not_a_string: None,
        }
    }

    /// Records a value of another type (`kind`, e.g. "a number") so it can be
    /// reported by [`HexColor::check`]. `rendered` is its source text.
    pub fn not_a_string(kind: &'static str, rendered: impl Into<String>) -> Self {
        Self {
            text: rendered.into(),
            not_a_string: Some(kind),
        }
    }

    /// Wraps `value`, rejecting anything outside the `#RGB` / `#RRGGBB` grammar.
    pub fn parse(value: impl Into<String>) -> Result<Self, HexColorError> {
        let color = Self::new_unchecked(value);
        color.check()?;
        Ok(color)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn check(&self) -> Result<(), HexColorError> {
        if let Some(kind) = self.not_a_string {
            return Err(HexColorError::NotAString(kind));
        }

        let digits = self.text.strip_prefix('#').ok_or(HexColorError::MissingHash)?;

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(HexColorError::BadDigit(bad));
        }

        match digits.len() {
            3 | 6 => Ok(()),
            len => Err(HexColorError::BadLength(len)),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    /// Decodes the color. Shorthand digits are doubled, so `#0af` is `#00aaff`.
    pub fn to_rgb(&self) -> Result<Rgb, HexColorError> {
        self.check()?;
        let digits = &self.text[1..];

        let channel =
            |s: &str| u8::from_str_radix(s, 16).map_err(|_| HexColorError::BadLength(s.len()));

        if digits.len() == 3 {
            let [r, g, b] = [0usize, 1, 2].map(|i| channel(&digits[i..=i]).map(|v| v * 17));
            return Ok(Rgb { r: r?, g: g?, b: b? });
        }

        Ok(Rgb {
            r: channel(&digits[0..2])?,
            g: channel(&digits[2..4])?,
            b: channel(&digits[4..6])?,
        })
    }

    /// The six digit lowercase form, e.g. `#f9fafb`.
    pub fn normalized(&self) -> Result<HexColor, HexColorError> {
        self.to_rgb().map(|rgb| HexColor::new_unchecked(rgb.to_string()))
    }
}

impl FromStr for HexColor {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        de_hex_color(deserializer)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl Rgb {
    /// Packs the channels as `0xRRGGBB`.
    pub fn to_u32(self) -> u32 {
        u32::from_be_bytes([0, self.r, self.g, self.b])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_short_and_long_forms() {
        for value in ["#111827", "#F9FAFB", "#fff", "#0aF"] {
            assert!(HexColor::parse(value).is_ok(), "{value} should parse");
        }
    }

    #[test]
    fn test_rejects_malformed_values() {
        assert_eq!(
            HexColor::parse("38BDF8").unwrap_err(),
            HexColorError::MissingHash
        );
        assert_eq!(
            HexColor::parse("#38BD").unwrap_err(),
            HexColorError::BadLength(4)
        );
        assert_eq!(
            HexColor::parse("#38BDF8FF").unwrap_err(),
            HexColorError::BadLength(8)
        );
        assert_eq!(
            HexColor::parse("#GGGGGG").unwrap_err(),
            HexColorError::BadDigit('G')
        );
        assert_eq!(HexColor::parse("#").unwrap_err(), HexColorError::BadLength(0));
        assert_eq!(
            HexColor::parse("#１２３").unwrap_err(),
            HexColorError::BadDigit('１')
        );
    }

    #[test]
    fn test_to_rgb() {
        let rgb = HexColor::parse("#0EA5E9").unwrap().to_rgb().unwrap();
        assert_eq!(rgb, Rgb { r: 0x0E, g: 0xA5, b: 0xE9 });
        assert_eq!(rgb.to_u32(), 0x0EA5E9);

        let short = HexColor::parse("#0af").unwrap().to_rgb().unwrap();
        assert_eq!(short, Rgb { r: 0x00, g: 0xAA, b: 0xFF });
    }

    #[test]
    fn test_normalized_keeps_original_text() {
        let color = HexColor::parse("#F9FAFB").unwrap();
        assert_eq!(color.normalized().unwrap().as_str(), "#f9fafb");
        assert_eq!(color.as_str(), "#F9FAFB", "Authored text should be kept");
    }

    #[test]
    fn test_deserialize_is_lenient() {
        let color: HexColor = serde_json::from_str("\"not a color\"").unwrap();
        assert!(!color.is_valid());
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"not a color\"");
    }

    #[test]
    fn test_non_string_values_fail_check() {
        let number: HexColor = serde_json::from_str("5").unwrap();
        assert_eq!(number.check(), Err(HexColorError::NotAString("a number")));
        assert_eq!(number.as_str(), "5");

        let null: HexColor = serde_json::from_str("null").unwrap();
        assert_eq!(null.check(), Err(HexColorError::NotAString("null")));

        let nested: HexColor = serde_json::from_str(r##"{ "x": "#fff" }"##).unwrap();
        assert_eq!(nested.check(), Err(HexColorError::NotAString("a map")));
        assert!(nested.to_rgb().is_err());
    }
}
