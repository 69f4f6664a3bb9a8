//! core/lookup.rs — Per-position variant metadata and the derived leaf lookup.
//!
//! A position maps variant codes to `(count, leaf)`. Inverting that gives
//! `leaf -> (count, position)`, used to label dendrogram leaves.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

/// Count and leaf index recorded for one variant at one position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantTally {
    pub count: u32,
    pub leaf: usize,
}

/// Variant codes observed at one position, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionEntry {
    pub position: i64,
    pub variants: Vec<(String, VariantTally)>,
}

/// Ordered `position -> {variant: (count, leaf)}` mapping.
///
/// Entry order is the iteration order used when building a [`LeafLookup`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionTable {
    entries: Vec<PositionEntry>,
}

impl PositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(position, [(variant, (count, leaf))])` literals.
    ///
    /// A position listed again replaces its earlier variants in place, the way
    /// a repeated key in a map literal does.
    pub fn from_literal(table: &[(i64, &[(&str, (u32, usize))])]) -> Self {
        let mut out = Self::new();
        for &(position, variants) in table {
            if let Some(entry) = out.entries.iter_mut().find(|e| e.position == position) {
                entry.variants.clear();
            }
            for &(variant, (count, leaf)) in variants {
                out.insert(position, variant, count, leaf);
            }
        }
        out
    }

    /// Record a variant at `position`. A repeated position keeps its original
    /// slot; a repeated variant at the same position replaces its tally.
    pub fn insert(&mut self, position: i64, variant: &str, count: u32, leaf: usize) {
        let tally = VariantTally { count, leaf };
        let entry = match self.entries.iter_mut().position(|e| e.position == position) {
            Some(i) => &mut self.entries[i],
            None => {
                self.entries.push(PositionEntry {
                    position,
                    variants: Vec::new(),
                });
                let last = self.entries.len() - 1;
                &mut self.entries[last]
            }
        };
        match entry.variants.iter_mut().find(|(v, _)| v == variant) {
            Some((_, t)) => *t = tally,
            None => entry.variants.push((variant.to_string(), tally)),
        }
    }

    pub fn entries(&self) -> &[PositionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every `(position, variant, tally)` triple in iteration order.
    pub fn triples(&self) -> impl Iterator<Item = (i64, &str, VariantTally)> + '_ {
        self.entries.iter().flat_map(|e| {
            e.variants
                .iter()
                .map(move |(v, t)| (e.position, v.as_str(), *t))
        })
    }
}

/// What a leaf index points back to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeafLabel {
    pub count: u32,
    pub position: i64,
}

impl fmt::Display for LeafLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.count, self.position)
    }
}

/// `leaf -> (count, position)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeafLookup {
    map: HashMap<usize, LeafLabel>,
    overwritten: usize,
}

impl LeafLookup {
    /// Invert a position table. When two triples share a leaf index the later
    /// one wins; the number of such overwrites is kept in [`Self::overwritten`].
    pub fn build(table: &PositionTable) -> Self {
        let mut map = HashMap::new();
        let mut overwritten = 0;
        for (position, variant, tally) in table.triples() {
            let label = LeafLabel {
                count: tally.count,
                position,
            };
            if let Some(prev) = map.insert(tally.leaf, label) {
                overwritten += 1;
                debug!(
                    leaf = tally.leaf,
                    %variant,
                    prev = %prev,
                    next = %label,
                    "leaf index collision, keeping later entry"
                );
            }
        }
        Self { map, overwritten }
    }

    pub fn get(&self, leaf: usize) -> Option<&LeafLabel> {
        self.map.get(&leaf)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Triples that were shadowed by a later triple with the same leaf.
    pub fn overwritten(&self) -> usize {
        self.overwritten
    }

    /// Label text for `leaf`, falling back to the bare index.
    pub fn label_for(&self, leaf: usize) -> String {
        match self.map.get(&leaf) {
            Some(label) => label.to_string(),
            None => leaf.to_string(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, LeafLabel)> + '_ {
        self.map.iter().map(|(&k, &v)| (k, v))
    }
}
