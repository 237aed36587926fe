//! Per-node regression targets.

use super::features::is_retained;
use super::vocab::TypeDictionary;
use crate::model::record::AtomRecord;

/// Magnetic moments of the retained records, in table order.
///
/// Uses the same retention predicate as
/// [`FeatureBuilder`](super::features::FeatureBuilder), so label `i` belongs
/// to node `i`.
pub fn extract_labels(records: &[AtomRecord], vocabulary: &TypeDictionary) -> Vec<f64> {
    records
        .iter()
        .filter(|record| is_retained(record, vocabulary))
        .map(|record| record.magnetic_moment)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::features::FeatureBuilder;

    #[test]
    fn labels_follow_filtered_order() {
        let records = vec![
            AtomRecord::new("C1", [0.0; 3], 0.25),
            AtomRecord::new("Fe1", [0.0; 3], 4.0),
            AtomRecord::new("O1", [0.0; 3], -0.5),
            AtomRecord::new("N7", [0.0; 3], 1.5),
        ];
        let vocab = TypeDictionary::default();
        assert_eq!(extract_labels(&records, &vocab), vec![0.25, -0.5, 1.5]);
    }

    #[test]
    fn label_count_matches_node_count() {
        let records = vec![
            AtomRecord::new("H1", [0.0; 3], 0.1),
            AtomRecord::new("C1", [0.0; 3], 0.2),
            AtomRecord::new("S1", [0.0; 3], 0.3),
        ];
        let vocab = TypeDictionary::default();
        let filtered = FeatureBuilder::new(&vocab).build(&records);
        let labels = extract_labels(&records, &vocab);

        assert_eq!(labels.len(), filtered.len());
        for (label, &row) in labels.iter().zip(&filtered.source_rows) {
            assert_eq!(*label, records[row].magnetic_moment);
        }
    }

    #[test]
    fn no_retained_records_gives_no_labels() {
        let records = vec![AtomRecord::new("H1", [0.0; 3], 0.1)];
        assert!(extract_labels(&records, &TypeDictionary::default()).is_empty());
    }
}
