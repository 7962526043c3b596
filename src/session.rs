//! Level session: campaign progression and per-level lifecycle
//!
//! Owns the level catalog, the live gameplay state, and the presentation
//! buffers derived from it. Level swaps are atomic: gameplay state, root
//! estimates, win progress, trails and fireworks are replaced together so
//! nothing from the previous level leaks into the next.

use crate::consts::{MAX_ZOOM, MIN_ZOOM};
use crate::levels::{LevelDescriptor, LevelError, builtin_levels, export_level};
use crate::presentation::{Fireworks, RootTrails};
use crate::sim::state::{GameEvent, GameplayState};
use crate::sim::tick::{CoeffEdit, TickInput, tick};
use crate::sim::win::WinState;

/// A running game session over a validated level catalog
#[derive(Debug, Clone)]
pub struct LevelSession {
    catalog: Vec<LevelDescriptor>,
    index: usize,
    state: GameplayState,
    trails: RootTrails,
    fireworks: Fireworks,
    zoom: f64,
    practice: bool,
}

impl LevelSession {
    /// Start a session. Every descriptor is validated up front so the play
    /// loop never meets a malformed level.
    pub fn new(catalog: Vec<LevelDescriptor>, seed: u64) -> Result<Self, LevelError> {
        for desc in &catalog {
            desc.validate()?;
        }
        let first = catalog.first().ok_or(LevelError::EmptyCatalog)?;
        let state = GameplayState::from_descriptor(first)?;

        log::info!(
            "Session start: {} levels, opening level {}",
            catalog.len(),
            first.id
        );

        Ok(Self {
            trails: RootTrails::new(first.degree),
            fireworks: Fireworks::new(seed),
            zoom: first.zoom,
            practice: false,
            index: 0,
            state,
            catalog,
        })
    }

    /// Session over the built-in campaign
    pub fn with_builtin(seed: u64) -> Result<Self, LevelError> {
        Self::new(builtin_levels(), seed)
    }

    /// Advance the live level by one tick, with an optional coefficient edit
    pub fn tick(&mut self, edit: Option<CoeffEdit>) -> Vec<GameEvent> {
        let input = TickInput {
            edit,
            practice: self.practice,
        };
        let events = tick(&mut self.state, &input);

        self.trails.record(&self.state.roots);
        if events.contains(&GameEvent::LevelComplete) {
            log::info!("Level {} complete", self.level().id);
            self.fireworks.burst(&self.state.targets);
        }
        self.fireworks.step();

        events
    }

    /// Swap in the level at `index`, replacing all per-level state as a unit
    fn load(&mut self, index: usize) {
        let desc = &self.catalog[index];
        match GameplayState::from_descriptor(desc) {
            Ok(state) => {
                self.state = state;
                self.trails = RootTrails::new(desc.degree);
                self.fireworks.clear();
                self.zoom = desc.zoom;
                self.index = index;
                log::info!("Loaded level {} (degree {})", desc.id, desc.degree);
            }
            // Unreachable after the up-front validation in `new`; kept so a
            // bad descriptor can never poison the running level.
            Err(err) => log::error!("Level {} rejected: {err}", desc.id),
        }
    }

    /// Move to the next level, wrapping to the first after the last
    pub fn advance(&mut self) {
        let next = (self.index + 1) % self.catalog.len();
        if next == 0 {
            log::info!("Campaign cleared, wrapping to the first level");
        }
        self.load(next);
    }

    /// Move to the previous level, if any
    pub fn retreat(&mut self) {
        if self.index > 0 {
            self.load(self.index - 1);
        }
    }

    /// Restart the current level from its descriptor
    pub fn reset(&mut self) {
        self.load(self.index);
    }

    /// Toggle practice mode: unconstrained drags, no auto-advance
    pub fn set_practice(&mut self, on: bool) {
        self.practice = on;
    }

    pub fn practice(&self) -> bool {
        self.practice
    }

    /// Nudge the view zoom, clamped to the supported range
    pub fn adjust_zoom(&mut self, delta: f64) {
        self.zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Authoring aid: lock the current root positions in as the targets
    pub fn capture_targets_from_roots(&mut self) {
        self.state.capture_targets_from_roots();
    }

    /// Export the live level, WYSIWYG (see `levels::export_level`)
    pub fn export(&self) -> LevelDescriptor {
        let level = self.level();
        export_level(&self.state, level.id, level.formula.as_deref(), self.zoom)
    }

    pub fn level(&self) -> &LevelDescriptor {
        &self.catalog[self.index]
    }

    pub fn level_index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> &GameplayState {
        &self.state
    }

    pub fn win_state(&self) -> WinState {
        self.state.win
    }

    pub fn trails(&self) -> &RootTrails {
        &self.trails
    }

    pub fn fireworks(&self) -> &Fireworks {
        &self.fireworks
    }
}
