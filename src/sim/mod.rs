//! Deterministic gameplay engine
//!
//! All per-tick logic lives here. This module must be pure and deterministic:
//! - Tick-synchronous only, driven by the host's update loop
//! - Fixed iteration budgets, no convergence-dependent control flow
//! - No rendering or platform dependencies

pub mod constraint;
pub mod roots;
pub mod state;
pub mod tick;
pub mod win;

pub use constraint::{AuthoringOp, project};
pub use roots::{evaluate, seed_roots, track};
pub use state::{Coefficient, Constraint, GameEvent, GameplayState, Target};
pub use tick::{CoeffEdit, TickInput, tick};
pub use win::WinState;
