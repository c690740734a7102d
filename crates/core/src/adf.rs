//! Angular distribution function engine.
//!
//! For every central particle, collects the neighbors within a cutoff
//! radius under the minimum-image convention and histograms the angles
//! each unordered neighbor pair subtends at the center. The result is
//! a probability density over angle (in radians) spanning [0°, 180°).

use crate::pbc::BoxSize;
use crate::util::{dot, norm};

/// Angle histogram produced by a single engine invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct AdfResult {
    /// Left bin edges in degrees: 0, dtheta, 2*dtheta, ...
    pub theta_edges: Vec<f64>,
    /// Per-bin density after normalization, or all zeros when no angle
    /// was found within the cutoff.
    pub adf: Vec<f64>,
    /// Sum of raw bin counts before normalization. Zero means the
    /// histogram is the raw (unnormalized) zero histogram.
    pub total_count: u64,
}

/// Compute the angular distribution function of a particle configuration.
///
/// For each central particle, every other particle with minimum-image
/// distance strictly between 0 and `r_max` is a neighbor; each unordered
/// pair of neighbors contributes the angle it subtends at the center.
///
/// # Arguments
/// * `positions` - Particle positions as [x, y, z] coordinates
/// * `box_size` - Orthorhombic periodic cell edge lengths
/// * `r_max` - Neighbor cutoff radius (exclusive); must not exceed
///   `box_size.max_cutoff()` for correct nearest-image detection
/// * `num_bins` - Number of equal-width angle bins over [0°, 180°)
///
/// # Returns
/// Bin edges in degrees and the normalized per-bin density
pub fn compute_adf(
    positions: &[[f64; 3]],
    box_size: &BoxSize,
    r_max: f64,
    num_bins: usize,
) -> Result<AdfResult, String> {
    validate_params(r_max, num_bins)?;

    let dtheta = 180.0 / num_bins as f64;
    let mut counts = vec![0u64; num_bins];
    let mut displacements: Vec<[f64; 3]> = Vec::new();

    for center in 0..positions.len() {
        collect_neighbor_displacements(positions, center, box_size, r_max, &mut displacements);
        accumulate_pair_angles(&displacements, dtheta, &mut counts);
    }

    Ok(finalize(counts, dtheta))
}

/// Reject parameters the engine has no defined behavior for.
pub(crate) fn validate_params(r_max: f64, num_bins: usize) -> Result<(), String> {
    if !(r_max > 0.0) {
        return Err(format!("Cutoff radius must be positive, got {}", r_max));
    }
    if num_bins == 0 {
        return Err("Number of angle bins must be at least 1".to_string());
    }
    Ok(())
}

/// Gather minimum-image displacements from `center` to every neighbor
/// with distance strictly inside (0, r_max), reusing `out`.
fn collect_neighbor_displacements(
    positions: &[[f64; 3]],
    center: usize,
    box_size: &BoxSize,
    r_max: f64,
    out: &mut Vec<[f64; 3]>,
) {
    out.clear();
    let origin = positions[center];
    for pos in positions {
        let d = box_size.displacement(&origin, pos);
        let dist = norm(&d);
        // Half-open shell: the center itself sits at distance zero and
        // particles exactly at the cutoff are excluded.
        if dist > 0.0 && dist < r_max {
            out.push(d);
        }
    }
}

/// Bin the angle of every unordered pair of neighbor displacements.
///
/// Each pair increments its bin by 2, counting the angle once per
/// orientation of the pair. Angles landing exactly on 180° fall on the
/// open upper edge and are dropped.
pub(crate) fn accumulate_pair_angles(
    displacements: &[[f64; 3]],
    dtheta: f64,
    counts: &mut [u64],
) {
    let num_bins = counts.len();
    for j in 0..displacements.len() {
        for k in (j + 1)..displacements.len() {
            let norm_j = norm(&displacements[j]);
            let norm_k = norm(&displacements[k]);
            if norm_j == 0.0 || norm_k == 0.0 {
                // Degenerate displacement, no angle to form. Cannot be
                // reached through the strict distance filter.
                continue;
            }
            let cos_theta = (dot(&displacements[j], &displacements[k]) / (norm_j * norm_k))
                .clamp(-1.0, 1.0);
            let theta = cos_theta.acos().to_degrees();
            let bin = (theta / dtheta).floor() as usize;
            if bin < num_bins {
                counts[bin] += 2;
            }
        }
    }
}

/// Turn raw bin counts into the final histogram.
///
/// With no counts the raw zero histogram is returned unchanged and an
/// advisory is logged; otherwise each bin becomes
/// `count / (total * dtheta_radians)`, a density integrating to 1 over
/// [0, pi].
pub(crate) fn finalize(counts: Vec<u64>, dtheta: f64) -> AdfResult {
    let num_bins = counts.len();
    let theta_edges: Vec<f64> = (0..num_bins).map(|b| b as f64 * dtheta).collect();
    let total: u64 = counts.iter().sum();

    if total == 0 {
        log::warn!("No angles found within the cutoff radius; returning a zero histogram");
        return AdfResult {
            theta_edges,
            adf: vec![0.0; num_bins],
            total_count: 0,
        };
    }

    let denom = total as f64 * dtheta.to_radians();
    let adf = counts.iter().map(|&c| c as f64 / denom).collect();

    AdfResult {
        theta_edges,
        adf,
        total_count: total,
    }
}
