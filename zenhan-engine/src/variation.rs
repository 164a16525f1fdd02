//! Standardized variation sequences on fullwidth punctuation
//!
//! Fullwidth punctuation may be followed by VS1 (corner-justified form) or VS2
//! (centered form). Halfwidth text cannot express the distinction, so before
//! narrowing each sequence collapses to its base char. Widening never restores
//! the selector.

use std::collections::HashSet;
use std::sync::OnceLock;

use tracing::debug;

/// U+FE00 VARIATION SELECTOR-1, corner-justified form
pub const CORNER_JUSTIFIED: char = '\u{FE00}';
/// U+FE01 VARIATION SELECTOR-2, centered form
pub const CENTERED: char = '\u{FE01}';

/// Fullwidth punctuation that takes the corner-justified and centered selectors
const PUNCTUATION_BASES: [char; 8] = [
    '\u{3001}', // 、
    '\u{3002}', // 。
    '\u{FF01}', // ！
    '\u{FF0C}', // ，
    '\u{FF0E}', // ．
    '\u{FF1A}', // ：
    '\u{FF1B}', // ；
    '\u{FF1F}', // ？
];

/// Lookup of (base, selector) sequences that collapse to the bare base
#[derive(Debug, Clone, Default)]
pub struct VariationSequenceTable {
    sequences: HashSet<(char, char)>,
}

static VARIATION_TABLE: OnceLock<VariationSequenceTable> = OnceLock::new();

/// Return the global variation sequence table.
pub fn variation_table() -> &'static VariationSequenceTable {
    VARIATION_TABLE.get_or_init(|| {
        let table =
            VariationSequenceTable::build(&PUNCTUATION_BASES, &[CORNER_JUSTIFIED, CENTERED]);
        debug!("Built variation sequence table: {} sequences", table.len());
        table
    })
}

impl VariationSequenceTable {
    /// Declare every combination of `bases` and `selectors`.
    pub fn build(bases: &[char], selectors: &[char]) -> Self {
        let sequences = bases
            .iter()
            .flat_map(|&base| selectors.iter().map(move |&selector| (base, selector)))
            .collect();
        Self { sequences }
    }

    /// The process-wide table of standardized punctuation sequences
    pub fn default_table() -> &'static Self {
        variation_table()
    }

    pub fn contains(&self, base: char, selector: char) -> bool {
        self.sequences.contains(&(base, selector))
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Replace every known (base, selector) sequence with the bare base.
    ///
    /// Single left-to-right pass: matches are leftmost and never overlap, and a
    /// selector left behind by a replacement is not rescanned.
    pub fn expand_sequences(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            result.push(c);
            if let Some(&next) = chars.peek()
                && self.contains(c, next)
            {
                chars.next();
            }
        }
        result
    }
}
