//! Closed-form 2x2 linear algebra for the Newton solver.
//!
//! Matrices are row-major `[[a, b], [c, d]]`.

/// Returns the eigenvalues of a 2x2 matrix in ascending order.
///
/// Uses `½(a + d) ∓ ½√((a − d)² + 4bc)`. The discriminant is clamped at zero,
/// which only matters for non-symmetric input or rounding noise.
#[must_use]
pub fn eigenvalues(m: &[[f64; 2]; 2]) -> [f64; 2] {
    let [[a, b], [c, d]] = *m;

    let root = ((a - d).powi(2) + 4.0 * b * c).max(0.0).sqrt();
    [0.5 * (a + d - root), 0.5 * (a + d + root)]
}

/// Shifts the diagonal so the smallest eigenvalue becomes at least `shift`.
///
/// The applied amount is `shift − min(0, λ_min)`, so a matrix that is
/// already positive semidefinite is only nudged by `shift`.
/// Returns the amount added to each diagonal entry.
pub fn regularize(m: &mut [[f64; 2]; 2], shift: f64) -> f64 {
    let [low, high] = eigenvalues(m);
    let correction = low.min(high).min(0.0);

    let amount = shift - correction;
    m[0][0] += amount;
    m[1][1] += amount;
    amount
}

/// Solves `m · p = rhs` with Cramer's rule.
///
/// Returns `None` if the determinant is zero or non-finite, or if the
/// solution is not finite.
#[must_use]
pub fn solve(m: &[[f64; 2]; 2], rhs: [f64; 2]) -> Option<[f64; 2]> {
    let [[a, b], [c, d]] = *m;
    let [x, y] = rhs;

    let det = a * d - b * c;
    if det == 0.0 || !det.is_finite() {
        return None;
    }

    let p = [(d * x - b * y) / det, (a * y - c * x) / det];
    p.iter().all(|v| v.is_finite()).then_some(p)
}
