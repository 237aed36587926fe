//! Element filtering and node feature construction.
//!
//! Filtering and encoding happen in one pass so that every array derived
//! from the retained atoms (features, positions, symbols, labels) shares a
//! single index space: index `i` always names the same atom.

use super::vocab::TypeDictionary;
use crate::model::graph::NodeFeature;
use crate::model::record::AtomRecord;
use crate::model::types::ElementSymbol;

/// Returns `true` if `record` belongs in the node set.
///
/// This is the single retention predicate shared by feature and label
/// extraction.
#[inline]
pub fn is_retained(record: &AtomRecord, vocabulary: &TypeDictionary) -> bool {
    record.symbol().is_some_and(|sym| vocabulary.contains(sym))
}

/// Retained atoms with index-aligned features and element symbols.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredAtoms {
    /// One-hot encoding plus position, one per retained atom.
    pub features: Vec<NodeFeature>,
    /// Element symbol of each retained atom.
    pub symbols: Vec<ElementSymbol>,
    /// Row of each retained atom in the source table.
    pub source_rows: Vec<usize>,
}

impl FilteredAtoms {
    #[inline]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn positions(&self) -> Vec<[f64; 3]> {
        self.features.iter().map(|f| f.position).collect()
    }

    /// Replaces every node position, keeping encodings and order.
    ///
    /// `positions` must hold exactly one entry per retained atom.
    pub fn with_positions(self, positions: &[[f64; 3]]) -> Self {
        debug_assert_eq!(positions.len(), self.features.len());
        let features = self
            .features
            .iter()
            .zip(positions)
            .map(|(f, &pos)| f.with_position(pos))
            .collect();
        Self { features, ..self }
    }
}

/// Builds node features for the atoms known to a [`TypeDictionary`].
#[derive(Debug, Clone, Copy)]
pub struct FeatureBuilder<'a> {
    vocabulary: &'a TypeDictionary,
}

impl<'a> FeatureBuilder<'a> {
    pub fn new(vocabulary: &'a TypeDictionary) -> Self {
        Self { vocabulary }
    }

    /// Encodes every retained record in table order.
    ///
    /// Records whose element symbol is unknown (or whose label is empty)
    /// are skipped silently.
    pub fn build(&self, records: &[AtomRecord]) -> FilteredAtoms {
        let mut features = Vec::with_capacity(records.len());
        let mut symbols = Vec::with_capacity(records.len());
        let mut source_rows = Vec::with_capacity(records.len());

        for (row, record) in records.iter().enumerate() {
            let Some(symbol) = record.symbol() else {
                continue;
            };
            let Some(one_hot) = self.vocabulary.one_hot(symbol) else {
                continue;
            };
            features.push(NodeFeature::new(one_hot, record.position));
            symbols.push(symbol);
            source_rows.push(row);
        }

        FilteredAtoms {
            features,
            symbols,
            source_rows,
        }
    }
}
