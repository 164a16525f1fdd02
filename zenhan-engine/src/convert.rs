use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::table::{MappingTable, mapping_table};
use crate::variation::{VariationSequenceTable, variation_table};

/// Conversion direction
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Halfwidth -> fullwidth
    Widen,
    /// Fullwidth -> halfwidth
    #[default]
    Narrow,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Widen => f.write_str("widen"),
            Direction::Narrow => f.write_str("narrow"),
        }
    }
}

/// Error returned when parsing an unknown direction name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction: '{0}' (expected 'widen' or 'narrow')")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "widen" | "full" | "fullwidth" => Ok(Direction::Widen),
            "narrow" | "half" | "halfwidth" => Ok(Direction::Narrow),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// String converter bound to a pair of tables
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    mapping: &'a MappingTable,
    variations: &'a VariationSequenceTable,
}

impl Default for Converter<'static> {
    /// A converter over the process-wide tables
    fn default() -> Self {
        Self::new(mapping_table(), variation_table())
    }
}

impl<'a> Converter<'a> {
    pub fn new(mapping: &'a MappingTable, variations: &'a VariationSequenceTable) -> Self {
        Self {
            mapping,
            variations,
        }
    }

    pub fn to_fullwidth_char(&self, c: char) -> char {
        self.mapping.lookup_fullwidth(c).unwrap_or(c)
    }

    pub fn to_halfwidth_char(&self, c: char) -> char {
        self.mapping.lookup_halfwidth(c).unwrap_or(c)
    }

    /// Widen `text`: map each char to its fullwidth form, then compose (NFC).
    ///
    /// Composition merges a mapped voicing mark with the preceding Katakana,
    /// e.g. `ｶﾞ` -> `ガ`.
    pub fn to_fullwidth(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        text.chars()
            .map(|c| self.to_fullwidth_char(c))
            .collect::<String>()
            .nfc()
            .collect()
    }

    /// Narrow `text`: collapse variation sequences, decompose (NFD), then map each
    /// char to its halfwidth form.
    ///
    /// Decomposition splits `ガ` into `カ` + U+3099 so both halves have a mapping.
    /// The output may therefore hold more chars than the input.
    pub fn to_halfwidth(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        self.variations
            .expand_sequences(text)
            .nfd()
            .map(|c| self.to_halfwidth_char(c))
            .collect()
    }

    pub fn convert(&self, text: &str, direction: Direction) -> String {
        match direction {
            Direction::Widen => self.to_fullwidth(text),
            Direction::Narrow => self.to_halfwidth(text),
        }
    }
}

/// Convert a single char to fullwidth, or return it unchanged
pub fn to_fullwidth_char(c: char) -> char {
    mapping_table().lookup_fullwidth(c).unwrap_or(c)
}

/// Convert a single char to halfwidth, or return it unchanged
pub fn to_halfwidth_char(c: char) -> char {
    mapping_table().lookup_halfwidth(c).unwrap_or(c)
}

/// Convert a string to fullwidth
pub fn to_fullwidth(text: &str) -> String {
    Converter::default().to_fullwidth(text)
}

/// Convert a string to halfwidth
pub fn to_halfwidth(text: &str) -> String {
    Converter::default().to_halfwidth(text)
}

pub fn convert(text: &str, direction: Direction) -> String {
    Converter::default().convert(text, direction)
}
