//! Gameplay state and core engine types
//!
//! Everything defining one live level instance lives here. The aggregate is
//! built from a validated `LevelDescriptor` and replaced as one unit on
//! reset/advance so no stale roots or win progress leak across levels.

use num_complex::Complex64;

use super::roots;
use super::win::WinState;
use crate::consts::TARGET_RADIUS;
use crate::levels::{LevelDescriptor, LevelError};

/// Geometric constraint on a coefficient's position
///
/// Each variant carries exactly the parameters its manifold needs; a tag can
/// never carry another tag's parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// Free to move anywhere
    None,
    /// Immovable; drags snap back to the stored value
    Frozen,
    /// Restricted to the horizontal line im = y
    Horizontal { y: f64 },
    /// Restricted to the vertical line re = x
    Vertical { x: f64 },
    /// Restricted to a circle in the coefficient plane
    Circle { center: Complex64, radius: f64 },
}

/// One coefficient of the monic polynomial P(z) = z^n + Σ c_i z^i
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficient {
    /// Power of z this coefficient multiplies (0..degree)
    pub id: usize,
    pub value: Complex64,
    pub constraint: Constraint,
}

/// A target ring that a specific root slot must reach
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    /// Root slot this target binds to. Matching is by slot, not proximity.
    pub slot: usize,
    pub position: Complex64,
    pub radius: f64,
    /// Derived each tick from the current roots, never authoritative
    pub filled: bool,
}

/// Events emitted by a tick, for audio/visual layers to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A root entered its target ring
    TargetFilled { slot: usize },
    /// A root left its target ring
    TargetVacated { slot: usize },
    /// Win debounce confirmed; fired at most once per level instance
    LevelComplete,
}

/// Complete state of one level instance
#[derive(Debug, Clone)]
pub struct GameplayState {
    pub coefficients: Vec<Coefficient>,
    /// Slot-indexed root estimates, fed back as continuation seeds each tick
    pub roots: Vec<Complex64>,
    pub targets: Vec<Target>,
    pub win: WinState,
    /// Tick counter for this level instance
    pub time_ticks: u64,
}

impl GameplayState {
    /// Build a fresh instance from a descriptor, rejecting malformed input.
    ///
    /// This is the only path into the live loop; the per-tick hot path
    /// assumes a validated, internally consistent state.
    pub fn from_descriptor(desc: &LevelDescriptor) -> Result<Self, LevelError> {
        desc.validate()?;

        let coefficients = desc
            .coeffs
            .iter()
            .enumerate()
            .map(|(id, spec)| {
                Ok(Coefficient {
                    id,
                    value: spec.value(),
                    constraint: spec.resolve(id)?,
                })
            })
            .collect::<Result<Vec<_>, LevelError>>()?;

        let values: Vec<Complex64> = coefficients.iter().map(|c| c.value).collect();
        let roots = roots::seed_roots(&values);

        let targets = desc
            .targets
            .iter()
            .map(|t| Target {
                slot: t.id,
                position: Complex64::new(t.re, t.im),
                radius: TARGET_RADIUS,
                filled: false,
            })
            .collect();

        Ok(Self {
            coefficients,
            roots,
            targets,
            win: WinState::Idle,
            time_ticks: 0,
        })
    }

    /// Degree of the polynomial (== coefficient count == root count)
    #[inline]
    pub fn degree(&self) -> usize {
        self.coefficients.len()
    }

    /// Current coefficient values in ascending power order
    pub fn coefficient_values(&self) -> Vec<Complex64> {
        self.coefficients.iter().map(|c| c.value).collect()
    }

    /// Per-target filled flags, in target order
    pub fn filled_flags(&self) -> Vec<bool> {
        self.targets.iter().map(|t| t.filled).collect()
    }

    /// Replace the targets with rings at the current root positions.
    ///
    /// Authoring aid: lets a designer lock in the current configuration as
    /// the level's goal.
    pub fn capture_targets_from_roots(&mut self) {
        self.targets = self
            .roots
            .iter()
            .enumerate()
            .map(|(slot, &position)| Target {
                slot,
                position,
                radius: TARGET_RADIUS,
                filled: false,
            })
            .collect();
    }

    /// Export the live state as a descriptor (see `levels::export_level`)
    pub fn to_descriptor(&self, id: u32, formula: Option<&str>, zoom: f64) -> LevelDescriptor {
        crate::levels::export_level(self, id, formula, zoom)
    }
}
