//! Monodromy - a polynomial root-steering puzzle engine
//!
//! The player drags the coefficients of a monic complex polynomial, subject
//! to per-coefficient geometric constraints, to steer its roots onto fixed
//! target positions. This crate is the numeric core and its immediate
//! collaborators; rendering, audio and input capture live in the host app.
//!
//! Core modules:
//! - `sim`: Deterministic engine (constraints, root tracking, win evaluation)
//! - `levels`: Level descriptors, validation, built-in campaign, export
//! - `session`: Level progression and per-level lifecycle
//! - `presentation`: Root trails and fireworks, downstream of the engine

pub mod levels;
pub mod presentation;
pub mod session;
pub mod sim;

pub use levels::{LevelDescriptor, LevelError, builtin_levels};
pub use session::LevelSession;
pub use sim::{
    AuthoringOp, CoeffEdit, Coefficient, Constraint, GameEvent, GameplayState, Target, TickInput,
    WinState, project, tick,
};

/// Complex scalar used throughout the engine.
pub use num_complex::Complex64;

/// Engine configuration constants
pub mod consts {
    /// Durand-Kerner iterations per tick. High for stability under drags.
    pub const ROOT_ITERATIONS: usize = 15;

    /// Consecutive satisfied ticks required to confirm a win (2 s at 60 Hz)
    pub const WIN_HOLD_TICKS: u32 = 120;

    /// Hit radius of every target ring, in world units
    pub const TARGET_RADIUS: f64 = 0.12;

    /// Angular offset applied to root seeds to break symmetric stalls
    pub const SEED_ANGLE_OFFSET: f64 = 0.1;

    /// Zoom clamp range for the view
    pub const MIN_ZOOM: f64 = 0.3;
    pub const MAX_ZOOM: f64 = 2.0;
}

/// Round to the 2-decimal precision used by level export
#[inline]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
