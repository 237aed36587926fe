//! Distance-threshold bond inference.
//!
//! Every atom whose element has a [`BondRule`] scans the other atoms in
//! ascending distance order and accepts up to [`MAX_BONDS_PER_ATOM`] partners
//! that lie within the threshold and belong to the rule's partner set. Each
//! acceptance emits both directed edges. Atoms are processed independently,
//! so a pair accepted from both sides is emitted twice, and an atom can
//! receive more than [`MAX_BONDS_PER_ATOM`] bonds from other atoms' scans.
//!
//! If no atom accepts any partner the edge list is the single placeholder
//! [`Edge::PLACEHOLDER`], so the edge index is never empty.

use log::debug;

use super::error::Error;
use crate::model::graph::Edge;
use crate::model::types::ElementSymbol;

/// Maximum number of bonds a single atom may initiate.
pub const MAX_BONDS_PER_ATOM: usize = 3;

/// Partners an element may initiate bonds with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BondRule {
    pub source: ElementSymbol,
    pub partners: &'static [ElementSymbol],
}

impl BondRule {
    #[inline]
    pub fn accepts(&self, partner: ElementSymbol) -> bool {
        self.partners.contains(&partner)
    }
}

/// Carbon bonds to carbon, nitrogen, or oxygen; nitrogen bonds to carbon.
/// Oxygen has no rule and never initiates a bond.
pub static BOND_RULES: [BondRule; 2] = [
    BondRule {
        source: ElementSymbol::CARBON,
        partners: &[
            ElementSymbol::CARBON,
            ElementSymbol::NITROGEN,
            ElementSymbol::OXYGEN,
        ],
    },
    BondRule {
        source: ElementSymbol::NITROGEN,
        partners: &[ElementSymbol::CARBON],
    },
];

/// Returns the bonding rule for `symbol`, if it initiates bonds at all.
pub fn rule_for(symbol: ElementSymbol) -> Option<&'static BondRule> {
    BOND_RULES.iter().find(|rule| rule.source == symbol)
}

#[inline]
pub fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Infers a directed edge list from atom positions and element symbols.
#[derive(Debug, Clone, Copy)]
pub struct BondGraphBuilder {
    threshold: f64,
    max_bonds: usize,
}

impl BondGraphBuilder {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            max_bonds: MAX_BONDS_PER_ATOM,
        }
    }

    /// Builds the edge list for index-aligned `positions` and `symbols`.
    ///
    /// Edges are ordered by source atom, then by the distance rank of the
    /// accepted partner, with `(i, j)` immediately followed by `(j, i)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MisalignedInput`] if the two slices differ in length.
    pub fn build(
        &self,
        positions: &[[f64; 3]],
        symbols: &[ElementSymbol],
    ) -> Result<Vec<Edge>, Error> {
        if positions.len() != symbols.len() {
            return Err(Error::MisalignedInput {
                positions: positions.len(),
                symbols: symbols.len(),
            });
        }

        let mut edges = Vec::new();
        for (i, &symbol) in symbols.iter().enumerate() {
            let Some(rule) = rule_for(symbol) else {
                continue;
            };
            for j in self.accepted_partners(i, rule, positions, symbols) {
                let edge = Edge::new(i, j);
                edges.push(edge);
                edges.push(edge.reversed());
            }
        }

        if edges.is_empty() {
            debug!(
                "no bonds within {} among {} atoms; emitting placeholder edge",
                self.threshold,
                positions.len()
            );
            edges.push(Edge::PLACEHOLDER);
        } else {
            debug!(
                "accepted {} bonds ({} directed edges) among {} atoms",
                edges.len() / 2,
                edges.len(),
                positions.len()
            );
        }

        Ok(edges)
    }

    /// Partners accepted by atom `i`, nearest first.
    fn accepted_partners(
        &self,
        i: usize,
        rule: &BondRule,
        positions: &[[f64; 3]],
        symbols: &[ElementSymbol],
    ) -> Vec<usize> {
        ranked_neighbors(i, positions)
            .into_iter()
            .filter(|&(dist, j)| dist <= self.threshold && rule.accepts(symbols[j]))
            .map(|(_, j)| j)
            .take(self.max_bonds)
            .collect()
    }
}

/// All atoms other than `i`, sorted by ascending distance from it.
///
/// The sort is stable, so equidistant atoms keep their index order.
fn ranked_neighbors(i: usize, positions: &[[f64; 3]]) -> Vec<(f64, usize)> {
    let origin = positions[i];
    let mut ranked: Vec<(f64, usize)> = positions
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .map(|(j, &pos)| (distance(origin, pos), j))
        .collect();
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
    ranked
}
