//! Translation-only recentering of atom positions.

/// Arithmetic mean of `positions`, or `None` when there are none.
pub fn centroid(positions: &[[f64; 3]]) -> Option<[f64; 3]> {
    if positions.is_empty() {
        return None;
    }
    let mut sum = [0.0; 3];
    for pos in positions {
        for (acc, v) in sum.iter_mut().zip(pos) {
            *acc += v;
        }
    }
    let n = positions.len() as f64;
    Some([sum[0] / n, sum[1] / n, sum[2] / n])
}

/// Translates `positions` so that their centroid sits at the origin.
///
/// No rotation or scaling is applied, so pairwise distances are preserved
/// up to rounding. An empty slice yields an empty vector.
pub fn normalize(positions: &[[f64; 3]]) -> Vec<[f64; 3]> {
    let Some(center) = centroid(positions) else {
        return Vec::new();
    };
    positions
        .iter()
        .map(|p| [p[0] - center[0], p[1] - center[1], p[2] - center[2]])
        .collect()
}
