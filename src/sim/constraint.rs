//! Constraint projection and authoring edits
//!
//! Projection maps a proposed free position onto a coefficient's constraint
//! manifold. It is pure and total: every input produces a finite position.

use num_complex::Complex64;

use super::state::{Coefficient, Constraint};

/// Below this, a proposed point is treated as coinciding with a circle's
/// center and the projection angle falls back to 0 instead of going NaN.
const CENTER_EPS: f64 = 1e-12;

/// Project a proposed position onto the constraint manifold.
///
/// `current` is the coefficient's stored value; only `Frozen` consults it.
pub fn project(constraint: &Constraint, current: Complex64, proposed: Complex64) -> Complex64 {
    match *constraint {
        Constraint::None => proposed,
        Constraint::Frozen => current,
        Constraint::Horizontal { y } => Complex64::new(proposed.re, y),
        Constraint::Vertical { x } => Complex64::new(x, proposed.im),
        Constraint::Circle { center, radius } => {
            let delta = proposed - center;
            let angle = if delta.re.abs() < CENTER_EPS && delta.im.abs() < CENTER_EPS {
                0.0
            } else {
                delta.im.atan2(delta.re)
            };
            center + Complex64::from_polar(radius, angle)
        }
    }
}

/// An authoring edit that rewrites a coefficient's constraint itself.
///
/// Distinct from projection: invoked by an explicit editing interaction, not
/// on every drag. Each snap captures its parameters from the coefficient's
/// current value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuthoringOp {
    /// Constrain to the horizontal line through the current position
    SnapHorizontal,
    /// Constrain to the vertical line through the current position
    SnapVertical,
    /// Constrain to the origin-centered circle through the current position
    SnapCircleOrigin,
    /// Constrain to the circle about `center` through the current position
    SetCircleCenter { center: Complex64 },
    /// Pin the coefficient at its current position
    Freeze,
    /// Remove the constraint
    Release,
}

/// Apply an authoring edit, capturing params from the current value
pub fn apply_authoring(coeff: &mut Coefficient, op: AuthoringOp) {
    coeff.constraint = match op {
        AuthoringOp::SnapHorizontal => Constraint::Horizontal { y: coeff.value.im },
        AuthoringOp::SnapVertical => Constraint::Vertical { x: coeff.value.re },
        AuthoringOp::SnapCircleOrigin => Constraint::Circle {
            center: Complex64::new(0.0, 0.0),
            radius: coeff.value.norm(),
        },
        AuthoringOp::SetCircleCenter { center } => Constraint::Circle {
            center,
            radius: (coeff.value - center).norm(),
        },
        AuthoringOp::Freeze => Constraint::Frozen,
        AuthoringOp::Release => Constraint::None,
    };
}
