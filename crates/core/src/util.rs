//! Common numeric helpers shared across modules.

/// Dot product of two 3D vectors.
#[inline(always)]
pub fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Euclidean norm of a 3D vector.
#[inline(always)]
pub fn norm(v: &[f64; 3]) -> f64 {
    dot(v, v).sqrt()
}
