mod assemble;
mod bonding;
mod config;
mod error;
mod features;
mod labels;
mod normalize;
mod vocab;

pub use assemble::{assemble, validate};
pub use bonding::{BOND_RULES, BondGraphBuilder, BondRule, MAX_BONDS_PER_ATOM, distance, rule_for};
pub use config::{DEFAULT_THRESHOLD, GraphConfig};
pub use error::Error;
pub use features::{FeatureBuilder, FilteredAtoms, is_retained};
pub use labels::extract_labels;
pub use normalize::{centroid, normalize};
pub use vocab::TypeDictionary;

use log::debug;

use crate::model::graph::Graph;
use crate::model::record::AtomRecord;

/// Converts an atom table into a bond graph.
///
/// Runs the full pipeline: element filtering and one-hot encoding, bond
/// inference on the retained atoms' input coordinates, recentering of the
/// feature positions, label extraction, and assembly. Positions, symbols, and labels all
/// come from the same filtered set, so every edge indexes a row of the
/// feature matrix.
///
/// # Errors
///
/// Returns [`Error::InvalidThreshold`] for an unusable threshold and
/// [`Error::EmptyGraph`] when no record survives filtering.
pub fn build_graph(records: &[AtomRecord], config: &GraphConfig) -> Result<Graph, Error> {
    config.validate()?;

    let filtered = FeatureBuilder::new(&config.vocabulary).build(records);
    debug!(
        "retained {} of {} atoms ({} dropped as unknown)",
        filtered.len(),
        records.len(),
        records.len() - filtered.len()
    );

    // Bond on input coordinates; centering can shift distances by an ulp.
    let raw = filtered.positions();
    let edges = BondGraphBuilder::new(config.threshold).build(&raw, &filtered.symbols)?;

    let filtered = filtered.with_positions(&normalize(&raw));

    let labels = extract_labels(records, &config.vocabulary);

    assemble(filtered.features, edges, labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::graph::Edge;
    use crate::model::types::ElementSymbol;

    fn scenario_a() -> Vec<AtomRecord> {
        vec![
            AtomRecord::new("C1", [0.0, 0.0, 0.0], 0.1),
            AtomRecord::new("N1", [1.0, 0.0, 0.0], 0.2),
            AtomRecord::new("O1", [5.0, 5.0, 5.0], 0.3),
        ]
    }

    #[test]
    fn carbon_nitrogen_bond_leaves_oxygen_isolated() {
        let graph = build_graph(&scenario_a(), &GraphConfig::default()).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.labels, vec![0.1, 0.2, 0.3]);
        for edge in &graph.edges {
            assert!([0, 1].contains(&edge.source) && [0, 1].contains(&edge.target));
            assert!(!edge.is_self_loop());
        }
        assert!(graph.edges.contains(&Edge::new(0, 1)));
        assert!(graph.edges.contains(&Edge::new(1, 0)));
        assert_eq!(graph.out_degrees()[2], 0);
    }

    #[test]
    fn two_nitrogens_give_placeholder() {
        let records = vec![
            AtomRecord::new("N1", [0.0, 0.0, 0.0], 0.0),
            AtomRecord::new("N2", [1.0, 0.0, 0.0], 0.0),
        ];
        let graph = build_graph(&records, &GraphConfig::default()).unwrap();
        assert_eq!(graph.edges, vec![Edge::PLACEHOLDER]);
    }

    #[test]
    fn single_carbon_gives_placeholder_on_valid_node() {
        let records = vec![AtomRecord::new("C1", [3.0, 4.0, 5.0], 1.0)];
        let graph = build_graph(&records, &GraphConfig::default()).unwrap();

        assert_eq!(graph.edges, vec![Edge::PLACEHOLDER]);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.nodes[0].position, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn positions_are_centered() {
        let records = vec![
            AtomRecord::new("C1", [10.0, 1.0, -3.0], 0.0),
            AtomRecord::new("C2", [11.3, 2.2, -2.1], 0.0),
            AtomRecord::new("O1", [9.1, 0.4, -4.4], 0.0),
        ];
        let graph = build_graph(&records, &GraphConfig::default()).unwrap();
        let positions: Vec<[f64; 3]> = graph.nodes.iter().map(|n| n.position).collect();
        let mean = centroid(&positions).unwrap();
        assert!(mean.iter().all(|v| v.abs() < 1e-6));
    }

    #[test]
    fn unknown_atoms_do_not_shift_edge_indices() {
        // The hydrogen sits between the carbons in table order; after
        // filtering, the second carbon is node 1, not row 2.
        let records = vec![
            AtomRecord::new("C1", [0.0, 0.0, 0.0], 0.0),
            AtomRecord::new("H1", [0.5, 0.0, 0.0], 0.0),
            AtomRecord::new("C2", [1.5, 0.0, 0.0], 0.0),
        ];
        let graph = build_graph(&records, &GraphConfig::default()).unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(
            graph.edges,
            vec![
                Edge::new(0, 1),
                Edge::new(1, 0),
                Edge::new(1, 0),
                Edge::new(0, 1)
            ]
        );
        assert!(validate(&graph).is_ok());
    }

    #[test]
    fn fully_filtered_input_is_rejected() {
        let records = vec![AtomRecord::new("H1", [0.0; 3], 0.0)];
        let result = build_graph(&records, &GraphConfig::default());
        assert!(matches!(result, Err(Error::EmptyGraph)));

        let result = build_graph(&[], &GraphConfig::default());
        assert!(matches!(result, Err(Error::EmptyGraph)));
    }

    #[test]
    fn invalid_threshold_is_rejected_before_building() {
        let config = GraphConfig::default().with_threshold(-1.0);
        let result = build_graph(&scenario_a(), &config);
        assert!(matches!(result, Err(Error::InvalidThreshold(_))));
    }

    #[test]
    fn custom_vocabulary_widens_features() {
        let vocab = TypeDictionary::new(
            ['C', 'H', 'N', 'O'].into_iter().map(ElementSymbol::new),
        )
        .unwrap();
        let config = GraphConfig::default().with_vocabulary(vocab);
        let records = vec![
            AtomRecord::new("C1", [0.0; 3], 0.0),
            AtomRecord::new("H1", [1.0, 0.0, 0.0], 0.0),
        ];
        let graph = build_graph(&records, &config).unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.nodes[0].width(), 7);
        // Hydrogen is known but has no bonding rule, and carbon does not accept it.
        assert_eq!(graph.edges, vec![Edge::PLACEHOLDER]);
    }

    #[test]
    fn rebuild_is_deterministic() {
        let records = vec![
            AtomRecord::new("C1", [0.0, 0.0, 0.0], 0.1),
            AtomRecord::new("C2", [1.0, 0.0, 0.0], 0.2),
            AtomRecord::new("N1", [0.0, 1.0, 0.0], 0.3),
            AtomRecord::new("O1", [1.0, 1.0, 0.0], 0.4),
            AtomRecord::new("C3", [0.5, 0.5, 0.5], 0.5),
        ];
        let config = GraphConfig::default().with_threshold(1.2);
        let first = build_graph(&records, &config).unwrap();
        let second = build_graph(&records, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn bond_at_exact_threshold_survives_centering() {
        // 2.373 - 0.373 is exactly 2.0, but not after subtracting the centroid.
        let records = vec![
            AtomRecord::new("C1", [0.373, 0.0, 0.0], 0.0),
            AtomRecord::new("O1", [2.373, 0.0, 0.0], 0.0),
            AtomRecord::new("O2", [7.321, 0.0, 0.0], 0.0),
        ];
        let graph = build_graph(&records, &GraphConfig::default()).unwrap();

        assert_eq!(graph.edges, vec![Edge::new(0, 1), Edge::new(1, 0)]);
        assert!(!graph.has_placeholder_edge());
    }
}
