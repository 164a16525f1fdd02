//! zenhan-engine: halfwidth <-> fullwidth conversion
//!
//! Converts between the halfwidth forms used by legacy East Asian encodings
//! (halfwidth Katakana, halfwidth Hangul jamo, ASCII) and their fullwidth
//! counterparts. Widening composes voicing marks with NFC; narrowing decomposes
//! with NFD so precomposed Katakana split into base + mark.

pub mod convert;
pub mod error;
pub mod range;
pub mod table;
pub mod variation;

pub use convert::{
    Converter, Direction, ParseDirectionError, convert, to_fullwidth, to_fullwidth_char,
    to_halfwidth, to_halfwidth_char,
};
pub use error::TableError;
pub use range::CharRange;
pub use table::{MappingEntry, MappingTable, TableRules, mapping_table};
pub use variation::{VariationSequenceTable, variation_table};
