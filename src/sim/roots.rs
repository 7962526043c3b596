//! Durand-Kerner continuation solver
//!
//! Maintains n root estimates that track the roots of the current monic
//! polynomial as its coefficients change a little each tick. Feeding the
//! previous tick's output back as the next seed keeps slot i on "the same"
//! algebraic root through a drag gesture, which is what target matching
//! binds to.
//!
//! The contract is best effort within a fixed budget: no convergence check,
//! no retry, no error. The caller refreshes the estimates every tick.

use num_complex::Complex64;

use crate::consts::SEED_ANGLE_OFFSET;

/// Both denominator components below this means two estimates collided
const COLLISION_EPS: f64 = 1e-9;

/// Substituted for a collided denominator; trades local accuracy for
/// guaranteed finite arithmetic
const COLLISION_FALLBACK: Complex64 = Complex64::new(1e-3, 1e-3);

/// Evaluate P(z) = z^n + Σ c_i z^i for the monic polynomial given by
/// `coeffs` = [c_0, c_1, ..., c_{n-1}]
pub fn evaluate(z: Complex64, coeffs: &[Complex64]) -> Complex64 {
    let mut z_pow = Complex64::new(1.0, 0.0);
    let mut sum = Complex64::new(0.0, 0.0);
    for &c in coeffs {
        sum += c * z_pow;
        z_pow *= z;
    }
    // z_pow is now z^n, the implicit leading term
    sum + z_pow
}

/// Generate fresh seeds for the roots of `coeffs`.
///
/// Seeds sit on the unit circle with a small angular offset (a perfectly
/// symmetric start can stall at a symmetric fixed point), then shift by the
/// root centroid -c_{n-1}/n from Vieta's formulas. The shift is applied only
/// here, at seeding time; later coefficient edits do not re-derive it.
pub fn seed_roots(coeffs: &[Complex64]) -> Vec<Complex64> {
    let n = coeffs.len();
    if n == 0 {
        return Vec::new();
    }

    let shift = -coeffs[n - 1] / n as f64;

    (0..n)
        .map(|k| {
            let angle = std::f64::consts::TAU * k as f64 / n as f64 + SEED_ANGLE_OFFSET;
            Complex64::new(angle.cos(), angle.sin()) + shift
        })
        .collect()
}

/// Advance the root estimates by `iterations` Durand-Kerner sweeps.
///
/// Re-seeds when the estimate count does not match the degree (first load or
/// degree change); otherwise continues from the previous estimates. Each
/// sweep updates slots in index order and later slots see already-updated
/// earlier slots, which converges faster than a batched update and must be
/// preserved.
pub fn track(roots: &mut Vec<Complex64>, coeffs: &[Complex64], iterations: usize) {
    if roots.len() != coeffs.len() {
        *roots = seed_roots(coeffs);
    }

    for _ in 0..iterations {
        for i in 0..roots.len() {
            let z = roots[i];
            let p = evaluate(z, coeffs);

            let mut denom = Complex64::new(1.0, 0.0);
            for (j, &other) in roots.iter().enumerate() {
                if j != i {
                    denom *= z - other;
                }
            }
            if denom.re.abs() < COLLISION_EPS && denom.im.abs() < COLLISION_EPS {
                denom = COLLISION_FALLBACK;
            }

            roots[i] = z - p / denom;
        }
    }
}
