//! Orthorhombic periodic box and minimum-image displacements.

/// Edge lengths of an orthorhombic, axis-aligned periodic cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSize {
    edges: [f64; 3],
}

impl BoxSize {
    /// Create a box from its three edge lengths.
    ///
    /// All components must be finite and strictly positive; the
    /// minimum-image formula divides by the edge length.
    pub fn new(edges: [f64; 3]) -> Result<Self, String> {
        if edges.iter().any(|&e| !e.is_finite() || e <= 0.0) {
            return Err(format!(
                "Box edge lengths must be positive, got [{}, {}, {}]",
                edges[0], edges[1], edges[2]
            ));
        }
        Ok(Self { edges })
    }

    /// Create a box from per-axis lower and upper bounds (edge = hi - lo).
    pub fn from_bounds(lo: [f64; 3], hi: [f64; 3]) -> Result<Self, String> {
        Self::new([hi[0] - lo[0], hi[1] - lo[1], hi[2] - lo[2]])
    }

    /// Edge lengths [x, y, z].
    #[inline]
    pub fn edges(&self) -> [f64; 3] {
        self.edges
    }

    /// Largest cutoff radius for which the minimum image is guaranteed
    /// to be the true nearest periodic image (half the smallest edge).
    ///
    /// Neighbor searches do not enforce this; callers that pass a larger
    /// cutoff silently miss neighbors whose nearest image lies beyond
    /// the half-box.
    pub fn max_cutoff(&self) -> f64 {
        0.5 * self.edges[0].min(self.edges[1]).min(self.edges[2])
    }

    /// Map a displacement onto its nearest periodic image, per axis.
    #[inline]
    pub fn minimum_image(&self, mut d: [f64; 3]) -> [f64; 3] {
        for axis in 0..3 {
            d[axis] -= self.edges[axis] * (d[axis] / self.edges[axis]).round();
        }
        d
    }

    /// Displacement from `from` to `to` under the minimum-image convention.
    #[inline]
    pub fn displacement(&self, from: &[f64; 3], to: &[f64; 3]) -> [f64; 3] {
        self.minimum_image([to[0] - from[0], to[1] - from[1], to[2] - from[2]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::norm;

    #[test]
    fn test_rejects_non_positive_edges() {
        assert!(BoxSize::new([10.0, 0.0, 10.0]).is_err());
        assert!(BoxSize::new([10.0, -1.0, 10.0]).is_err());
        assert!(BoxSize::new([f64::NAN, 10.0, 10.0]).is_err());
        assert!(BoxSize::new([10.0, 10.0, 10.0]).is_ok());
    }

    #[test]
    fn test_from_bounds() {
        let b = BoxSize::from_bounds([-5.0, 0.0, 2.5], [5.0, 20.0, 12.5]).unwrap();
        assert_eq!(b.edges(), [10.0, 20.0, 10.0]);
        assert!(BoxSize::from_bounds([0.0, 0.0, 0.0], [10.0, 0.0, 10.0]).is_err());
    }

    #[test]
    fn test_minimum_image_wraps_across_boundary() {
        let b = BoxSize::new([10.0, 10.0, 10.0]).unwrap();
        // Particles at x=0.5 and x=9.5: unwrapped separation 9.0,
        // wrapped separation 1.0.
        let d = b.displacement(&[0.5, 5.0, 5.0], &[9.5, 5.0, 5.0]);
        assert!((norm(&d) - 1.0).abs() < 1e-12);
        assert!((d[0] - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_minimum_image_identity_inside_half_box() {
        let b = BoxSize::new([10.0, 10.0, 10.0]).unwrap();
        let d = b.minimum_image([3.0, -4.0, 1.5]);
        assert_eq!(d, [3.0, -4.0, 1.5]);
    }

    #[test]
    fn test_max_cutoff() {
        let b = BoxSize::new([10.0, 8.0, 12.0]).unwrap();
        assert!((b.max_cutoff() - 4.0).abs() < 1e-12);
    }
}
