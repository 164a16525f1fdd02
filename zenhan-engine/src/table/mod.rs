//! Halfwidth <-> fullwidth mapping table
//!
//! The forward table (halfwidth -> fullwidth) is authored in [`rules`]. The reverse
//! table is derived from it by inverting every pair in declaration order, so when two
//! halfwidth chars share a fullwidth form the one declared last wins.

mod rules;

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TableError};
use crate::range::CharRange;

pub use rules::build_rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Pair {
        halfwidth: char,
        fullwidth: char,
    },
    Range {
        narrow: (char, char),
        wide: (char, char),
    },
}

/// Declared table contents: single pairs and contiguous range pairs, kept in
/// declaration order.
#[derive(Debug, Clone, Default)]
pub struct TableRules {
    rules: Vec<Rule>,
}

impl TableRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a single halfwidth -> fullwidth pair
    pub fn pair(&mut self, halfwidth: char, fullwidth: char) -> &mut Self {
        self.rules.push(Rule::Pair {
            halfwidth,
            fullwidth,
        });
        self
    }

    /// Declare that `narrow_start..=narrow_end` maps position by position onto
    /// `wide_start..=wide_end`. Validated when the rules are expanded.
    pub fn range(
        &mut self,
        narrow_start: char,
        narrow_end: char,
        wide_start: char,
        wide_end: char,
    ) -> &mut Self {
        self.rules.push(Rule::Range {
            narrow: (narrow_start, narrow_end),
            wide: (wide_start, wide_end),
        });
        self
    }

    /// Expand all rules into `(halfwidth, fullwidth)` pairs, in declaration order.
    pub fn expand(&self) -> Result<Vec<(char, char)>> {
        let mut pairs = Vec::new();
        for rule in &self.rules {
            match *rule {
                Rule::Pair {
                    halfwidth,
                    fullwidth,
                } => pairs.push((halfwidth, fullwidth)),
                Rule::Range { narrow, wide } => {
                    let narrow = CharRange::new(narrow.0, narrow.1)?;
                    let wide = CharRange::new(wide.0, wide.1)?;
                    pairs.extend(narrow.map(&wide)?);
                }
            }
        }
        Ok(pairs)
    }
}

/// One row of the mapping table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub halfwidth: char,
    pub fullwidth: char,
}

/// Immutable bidirectional lookup between halfwidth and fullwidth chars
#[derive(Debug, Clone)]
pub struct MappingTable {
    forward: HashMap<char, char>,
    reverse: HashMap<char, char>,
}

static MAPPING_TABLE: OnceLock<MappingTable> = OnceLock::new();

/// Return the global mapping table, built once from [`build_rules`].
pub fn mapping_table() -> &'static MappingTable {
    MAPPING_TABLE.get_or_init(|| {
        let table = MappingTable::build(&build_rules())
            .expect("built-in halfwidth/fullwidth rules must be valid");
        debug!(
            "Built mapping table: {} forward, {} reverse entries",
            table.forward.len(),
            table.reverse.len()
        );
        table
    })
}

impl MappingTable {
    /// Build a table from declared rules.
    ///
    /// Fails if a range is malformed or a halfwidth key is declared twice.
    pub fn build(rules: &TableRules) -> Result<Self> {
        let pairs = rules.expand()?;

        let mut forward = HashMap::with_capacity(pairs.len());
        for &(halfwidth, fullwidth) in &pairs {
            match forward.entry(halfwidth) {
                Entry::Occupied(_) => return Err(TableError::DuplicateKey { key: halfwidth }),
                Entry::Vacant(slot) => {
                    slot.insert(fullwidth);
                }
            }
        }

        let mut reverse = HashMap::with_capacity(pairs.len());
        for &(halfwidth, fullwidth) in &pairs {
            if let Some(previous) = reverse.insert(fullwidth, halfwidth) {
                debug!(
                    "Reverse mapping for {:?}: {:?} replaced by {:?}",
                    fullwidth, previous, halfwidth
                );
            }
        }

        Ok(Self { forward, reverse })
    }

    /// The process-wide table built from the built-in rules
    pub fn default_table() -> &'static Self {
        mapping_table()
    }

    /// Fullwidth counterpart of a halfwidth char
    pub fn lookup_fullwidth(&self, c: char) -> Option<char> {
        self.forward.get(&c).copied()
    }

    /// Halfwidth counterpart of a fullwidth char
    pub fn lookup_halfwidth(&self, c: char) -> Option<char> {
        self.reverse.get(&c).copied()
    }

    pub fn is_halfwidth(&self, c: char) -> bool {
        self.forward.contains_key(&c)
    }

    pub fn is_fullwidth(&self, c: char) -> bool {
        self.reverse.contains_key(&c)
    }

    /// Number of halfwidth keys
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Forward entries sorted by halfwidth code point
    pub fn entries(&self) -> Vec<MappingEntry> {
        let mut entries: Vec<MappingEntry> = self
            .forward
            .iter()
            .map(|(&halfwidth, &fullwidth)| MappingEntry {
                halfwidth,
                fullwidth,
            })
            .collect();
        entries.sort_by_key(|e| e.halfwidth);
        entries
    }

    /// Reverse entries sorted by fullwidth code point
    pub fn reverse_entries(&self) -> Vec<MappingEntry> {
        let mut entries: Vec<MappingEntry> = self
            .reverse
            .iter()
            .map(|(&fullwidth, &halfwidth)| MappingEntry {
                halfwidth,
                fullwidth,
            })
            .collect();
        entries.sort_by_key(|e| e.fullwidth);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_lookups() {
        let table = mapping_table();
        assert_eq!(table.lookup_fullwidth(' '), Some('\u{3000}'));
        assert_eq!(table.lookup_halfwidth('\u{3000}'), Some(' '));
        assert_eq!(table.lookup_fullwidth('A'), Some('\u{FF21}'));
        assert_eq!(table.lookup_halfwidth('\u{FF21}'), Some('A'));
        assert_eq!(table.lookup_fullwidth('ｶ'), Some('カ'));
        assert_eq!(table.lookup_halfwidth('カ'), Some('ｶ'));
        assert_eq!(table.lookup_fullwidth('ﾞ'), Some('\u{3099}'));

        // Not a key in either direction
        assert_eq!(table.lookup_fullwidth('あ'), None);
        assert_eq!(table.lookup_halfwidth('あ'), None);
        // Fullwidth chars are not halfwidth keys
        assert_eq!(table.lookup_fullwidth('Ａ'), None);
    }

    #[test]
    fn test_default_table_size() {
        let table = MappingTable::default_table();
        assert_eq!(table.len(), 226);
        assert_eq!(table.reverse_entries().len(), 226);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_hangul_jamo_ranges() {
        let table = mapping_table();
        assert_eq!(table.lookup_fullwidth('\u{FFA0}'), Some('\u{3164}'));
        assert_eq!(table.lookup_fullwidth('\u{FFA1}'), Some('ㄱ'));
        assert_eq!(table.lookup_fullwidth('\u{FFBE}'), Some('ㅎ'));
        assert_eq!(table.lookup_fullwidth('\u{FFC2}'), Some('ㅏ'));
        assert_eq!(table.lookup_fullwidth('\u{FFDC}'), Some('ㅣ'));
        assert_eq!(table.lookup_halfwidth('ㅣ'), Some('\u{FFDC}'));
        // Gaps between the sub-ranges are unassigned
        assert_eq!(table.lookup_fullwidth('\u{FFC0}'), None);
        assert_eq!(table.lookup_fullwidth('\u{FFD0}'), None);
    }

    #[test]
    fn test_symbol_variants() {
        let table = mapping_table();
        assert_eq!(table.lookup_fullwidth('¥'), Some('￥'));
        assert_eq!(table.lookup_halfwidth('￥'), Some('¥'));
        assert_eq!(table.lookup_fullwidth('\u{FFE9}'), Some('←'));
        assert_eq!(table.lookup_halfwidth('○'), Some('\u{FFEE}'));
    }

    #[test]
    fn test_entries_sorted() {
        let entries = mapping_table().entries();
        assert_eq!(
            entries[0],
            MappingEntry {
                halfwidth: ' ',
                fullwidth: '\u{3000}'
            }
        );
        assert!(entries.windows(2).all(|w| w[0].halfwidth < w[1].halfwidth));
    }

    #[test]
    fn test_reverse_collision_last_wins() {
        let mut rules = TableRules::new();
        rules.pair('a', 'X').pair('b', 'X').pair('c', 'Y');
        let table = MappingTable::build(&rules).unwrap();
        assert_eq!(table.lookup_fullwidth('a'), Some('X'));
        assert_eq!(table.lookup_fullwidth('b'), Some('X'));
        assert_eq!(table.lookup_halfwidth('X'), Some('b'));
        assert_eq!(table.lookup_halfwidth('Y'), Some('c'));
    }

    #[test]
    fn test_range_after_pair_wins_collision() {
        let mut rules = TableRules::new();
        rules
            .pair('\u{2460}', '\u{FF21}')
            .range('A', 'C', '\u{FF21}', '\u{FF23}');
        let table = MappingTable::build(&rules).unwrap();
        assert_eq!(table.lookup_halfwidth('\u{FF21}'), Some('A'));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut rules = TableRules::new();
        rules.pair('a', 'X').range('a', 'b', 'Y', 'Z');
        assert_eq!(
            MappingTable::build(&rules).err(),
            Some(TableError::DuplicateKey { key: 'a' })
        );
    }

    #[test]
    fn test_malformed_range_rejected() {
        let mut rules = TableRules::new();
        rules.range('z', 'a', 'Y', 'Z');
        assert!(matches!(
            MappingTable::build(&rules),
            Err(TableError::InvalidRange { .. })
        ));

        let mut rules = TableRules::new();
        rules.range('a', 'c', 'Y', 'Z');
        assert_eq!(
            MappingTable::build(&rules).err(),
            Some(TableError::RangeLengthMismatch { narrow: 3, wide: 2 })
        );
    }

    #[test]
    fn test_entry_serializes() {
        let entry = MappingEntry {
            halfwidth: '!',
            fullwidth: '！',
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"halfwidth":"!","fullwidth":"！"}"#);
    }
}
