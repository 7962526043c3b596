//! Engine tick
//!
//! Advances one level instance by one update step. Intra-tick ordering is
//! mandatory: (1) apply the pending edit through the constraint projector,
//! (2) run the root tracker on the now-current coefficients and the previous
//! tick's roots, (3) evaluate targets and the win machine on the new roots.

use num_complex::Complex64;

use super::constraint::{self, AuthoringOp};
use super::roots;
use super::state::{GameEvent, GameplayState};
use super::win;
use crate::consts::ROOT_ITERATIONS;

/// A coefficient edit, at most one per tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoeffEdit {
    /// Continuous drag to a proposed free position
    Drag { id: usize, proposed: Complex64 },
    /// Authoring edit that rewrites the constraint itself
    Author { id: usize, op: AuthoringOp },
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pending drag or authoring edit, if any
    pub edit: Option<CoeffEdit>,
    /// Practice/dev mode: drags bypass constraints (frozen included) and the
    /// win confirmation never fires
    pub practice: bool,
}

/// Advance the level instance by one tick
pub fn tick(state: &mut GameplayState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // 1. Apply the pending edit. An id beyond the coefficient range is a
    // stale edit from a previous level and is dropped.
    match input.edit {
        Some(CoeffEdit::Drag { id, proposed }) => {
            if let Some(coeff) = state.coefficients.get_mut(id) {
                coeff.value = if input.practice {
                    proposed
                } else {
                    constraint::project(&coeff.constraint, coeff.value, proposed)
                };
            }
        }
        Some(CoeffEdit::Author { id, op }) => {
            if let Some(coeff) = state.coefficients.get_mut(id) {
                constraint::apply_authoring(coeff, op);
            }
        }
        None => {}
    }

    // 2. Continue the roots from the previous estimates
    let coeffs = state.coefficient_values();
    roots::track(&mut state.roots, &coeffs, ROOT_ITERATIONS);

    // 3. Targets, then the win debounce
    let all_satisfied = win::match_targets(&state.roots, &mut state.targets, &mut events);
    if win::advance(&mut state.win, all_satisfied, input.practice) {
        events.push(GameEvent::LevelComplete);
    }

    state.time_ticks += 1;
    events
}
