//! Target matching and win confirmation
//!
//! A target is satisfied when the root in its bound slot sits inside its
//! ring. Completion is debounced: every target must stay satisfied for a
//! full hold window before the level is confirmed, so a root briefly
//! sweeping through a ring does not end the level.

use num_complex::Complex64;

use super::state::{GameEvent, Target};
use crate::consts::WIN_HOLD_TICKS;

/// Win confirmation state for one level instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WinState {
    /// At least one target unsatisfied
    #[default]
    Idle,
    /// All targets satisfied for `progress` + 1 consecutive ticks
    Holding { progress: u32 },
    /// Confirmed. Terminal for this level instance.
    Complete,
}

impl WinState {
    /// Hold progress in [0, 1] for presentation (progress ring, fill alpha)
    pub fn hold_fraction(&self) -> f64 {
        match *self {
            WinState::Idle => 0.0,
            WinState::Holding { progress } => f64::from(progress.min(WIN_HOLD_TICKS)) / f64::from(WIN_HOLD_TICKS),
            WinState::Complete => 1.0,
        }
    }
}

/// Update per-target filled flags from the current roots, emitting
/// fill/vacate transitions. Returns whether every target is satisfied.
///
/// A target whose slot is beyond the current root count is never filled and
/// makes the set unsatisfied.
pub fn match_targets(
    roots: &[Complex64],
    targets: &mut [Target],
    events: &mut Vec<GameEvent>,
) -> bool {
    let mut all_satisfied = !targets.is_empty();

    for target in targets.iter_mut() {
        let hit = match roots.get(target.slot) {
            Some(&root) => (root - target.position).norm() < target.radius,
            None => false,
        };

        if hit && !target.filled {
            events.push(GameEvent::TargetFilled { slot: target.slot });
        } else if !hit && target.filled {
            events.push(GameEvent::TargetVacated { slot: target.slot });
        }
        target.filled = hit;

        if !hit {
            all_satisfied = false;
        }
    }

    all_satisfied
}

/// Advance the debounce machine by one tick. Returns true exactly on the
/// tick the state transitions into `Complete`.
///
/// In practice mode the Holding -> Complete transition is suppressed; the
/// hold counter still runs so presentation behaves identically.
pub fn advance(win: &mut WinState, all_satisfied: bool, practice: bool) -> bool {
    match *win {
        WinState::Complete => false,
        _ if !all_satisfied => {
            *win = WinState::Idle;
            false
        }
        WinState::Idle => {
            *win = WinState::Holding { progress: 0 };
            false
        }
        WinState::Holding { progress } => {
            let next = progress.saturating_add(1);
            if next >= WIN_HOLD_TICKS && !practice {
                *win = WinState::Complete;
                true
            } else {
                *win = WinState::Holding { progress: next };
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TARGET_RADIUS;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn target(slot: usize, re: f64, im: f64) -> Target {
        Target {
            slot,
            position: c(re, im),
            radius: TARGET_RADIUS,
            filled: false,
        }
    }

    #[test]
    fn test_match_targets_by_slot_not_proximity() {
        let roots = [c(1.0, 0.0), c(-1.0, 0.0)];
        // Each target sits exactly on the OTHER slot's root
        let mut targets = [target(0, -1.0, 0.0), target(1, 1.0, 0.0)];
        let mut events = Vec::new();

        assert!(!match_targets(&roots, &mut targets, &mut events));
        assert!(!targets[0].filled);
        assert!(!targets[1].filled);
        assert!(events.is_empty());
    }

    #[test]
    fn test_match_targets_out_of_range_slot() {
        let roots = [c(0.0, 0.0)];
        let mut targets = [target(0, 0.0, 0.0), target(5, 0.0, 0.0)];
        let mut events = Vec::new();

        assert!(!match_targets(&roots, &mut targets, &mut events));
        assert!(targets[0].filled);
        assert!(!targets[1].filled);
    }

    #[test]
    fn test_match_targets_fill_vacate_events() {
        let mut targets = [target(0, 1.0, 0.0)];
        let mut events = Vec::new();

        match_targets(&[c(1.0, 0.01)], &mut targets, &mut events);
        assert_eq!(events, vec![GameEvent::TargetFilled { slot: 0 }]);

        // Still inside: no repeat event
        events.clear();
        match_targets(&[c(1.0, -0.01)], &mut targets, &mut events);
        assert!(events.is_empty());

        events.clear();
        match_targets(&[c(2.0, 0.0)], &mut targets, &mut events);
        assert_eq!(events, vec![GameEvent::TargetVacated { slot: 0 }]);
    }

    #[test]
    fn test_debounce_resets_on_miss() {
        let mut win = WinState::Idle;

        // threshold - 1 satisfied ticks: still holding
        for _ in 0..(WIN_HOLD_TICKS - 1) {
            assert!(!advance(&mut win, true, false));
        }
        assert!(matches!(win, WinState::Holding { .. }));

        // One miss resets progress completely
        assert!(!advance(&mut win, false, false));
        assert_eq!(win, WinState::Idle);

        // A full new streak is required: threshold ticks is not enough
        for _ in 0..WIN_HOLD_TICKS {
            assert!(!advance(&mut win, true, false));
        }
        assert!(matches!(win, WinState::Holding { .. }));

        // ...threshold + 1 is
        assert!(advance(&mut win, true, false));
        assert_eq!(win, WinState::Complete);
    }

    #[test]
    fn test_complete_fires_exactly_once() {
        let mut win = WinState::Idle;
        let mut fired = 0;
        for _ in 0..(WIN_HOLD_TICKS * 3) {
            if advance(&mut win, true, false) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert_eq!(win, WinState::Complete);

        // Terminal: a miss does not leave Complete
        advance(&mut win, false, false);
        assert_eq!(win, WinState::Complete);
    }

    #[test]
    fn test_practice_mode_suppresses_complete() {
        let mut win = WinState::Idle;
        for _ in 0..(WIN_HOLD_TICKS * 3) {
            assert!(!advance(&mut win, true, true));
        }
        // Debounce still ran; only the final transition is held back
        assert!(matches!(win, WinState::Holding { .. }));
        assert_eq!(win.hold_fraction(), 1.0);

        // Leaving practice mode lets the pending hold confirm
        assert!(advance(&mut win, true, false));
        assert_eq!(win, WinState::Complete);
    }

    #[test]
    fn test_hold_fraction_range() {
        assert_eq!(WinState::Idle.hold_fraction(), 0.0);
        assert_eq!(WinState::Complete.hold_fraction(), 1.0);
        let half = WinState::Holding { progress: WIN_HOLD_TICKS / 2 };
        assert!((half.hold_fraction() - 0.5).abs() < 1e-9);
    }
}
