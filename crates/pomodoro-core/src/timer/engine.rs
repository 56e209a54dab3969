//! Phase-sequencing engine.
//!
//! The engine is a single-threaded state machine. It does not measure
//! time itself -- the driver forwards each clock tick to `tick()`, and
//! every mutation happens synchronously inside `start()`, `tick()`,
//! `stop()` or `skip()` before the call returns.
//!
//! ## Phase cycle
//!
//! ```text
//! work -> break -> work -> break -> work -> break -> work -> coffee -> (repeat)
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::phase_timer::PhaseTimer;
use super::sequence::{PhaseKind, PhaseSequence};
use crate::error::{EngineError, TimerError};
use crate::events::PhaseProgress;

/// Per-phase tick thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub work: u32,
    pub short_break: u32,
    pub coffee: u32,
}

impl Default for Thresholds {
    /// 25/5/10 minutes at one tick per second.
    fn default() -> Self {
        Self {
            work: 25 * 60,
            short_break: 5 * 60,
            coffee: 10 * 60,
        }
    }
}

/// Observer callback for [`PhaseProgress`] reports.
pub type ProgressObserver = Box<dyn FnMut(&PhaseProgress) + Send>;

/// Orchestrates one [`PhaseTimer`] per phase kind over the repeating
/// phase cycle.
///
/// Progress reports are delivered to registered observers synchronously
/// and in registration order, before the emitting call returns.
pub struct PhaseEngine {
    /// Indexed by `PhaseKind::index()`.
    timers: [PhaseTimer; 3],
    sequence: PhaseSequence,
    current: Option<PhaseKind>,
    observers: Vec<ProgressObserver>,
}

impl PhaseEngine {
    /// Create an inactive engine with fresh timers and the sequence
    /// cursor at the start of the pattern.
    ///
    /// # Errors
    ///
    /// [`TimerError::InvalidThreshold`] if any threshold is zero.
    pub fn new(thresholds: Thresholds) -> Result<Self, TimerError> {
        Ok(Self {
            timers: [
                PhaseTimer::new(thresholds.work)?,
                PhaseTimer::new(thresholds.short_break)?,
                PhaseTimer::new(thresholds.coffee)?,
            ],
            sequence: PhaseSequence::new(),
            current: None,
            observers: Vec::new(),
        })
    }

    /// Register a phase-progress observer.
    pub fn observe(&mut self, observer: impl FnMut(&PhaseProgress) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// The active phase kind, or `None` while inactive.
    pub fn current(&self) -> Option<PhaseKind> {
        self.current
    }

    /// 1..=4 while active, 0 while inactive.
    pub fn pomodoro(&self) -> u8 {
        if self.current.is_some() {
            self.sequence.pomodoro()
        } else {
            0
        }
    }

    pub fn is_started(&self) -> bool {
        self.current.is_some()
    }

    /// Elapsed ticks of the active phase timer.
    pub fn elapsed_ticks(&self) -> Option<u32> {
        self.current.map(|kind| self.timer(kind).count())
    }

    /// Current state as a progress report, without emitting anything.
    pub fn snapshot(&self) -> Option<PhaseProgress> {
        self.current.map(|kind| PhaseProgress {
            phase: kind,
            pomodoro: self.sequence.pomodoro(),
            elapsed_ticks: self.timer(kind).count(),
            total_ticks: self.timer(kind).threshold(),
            at: Utc::now(),
        })
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Activate the engine on the first phase of a fresh cycle and
    /// report the initial state (`elapsed_ticks == 0`).
    ///
    /// # Errors
    ///
    /// [`EngineError::AlreadyStarted`] if a phase is already active.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.current.is_some() {
            return Err(EngineError::AlreadyStarted);
        }
        let kind = self.sequence.current();
        self.current = Some(kind);
        tracing::info!(
            phase = kind.label(),
            pomodoro = self.sequence.pomodoro(),
            "engine started"
        );
        self.emit(kind, 0);
        Ok(())
    }

    /// Route one tick to the active phase timer.
    ///
    /// The progress report goes out before the counter moves: observers
    /// reacting to `elapsed_ticks == total_ticks` must see the boundary
    /// value still paired with the finishing phase, ahead of the fire
    /// side effect. When the timer fires, the transition to the next
    /// phase (and its `elapsed_ticks == 0` report) happens synchronously
    /// inside this same call.
    ///
    /// # Errors
    ///
    /// [`EngineError::NotYetStarted`] if the engine is inactive.
    pub fn tick(&mut self) -> Result<(), EngineError> {
        let kind = self.current.ok_or(EngineError::NotYetStarted)?;
        let upcoming = self.timer(kind).count() + 1;
        self.emit(kind, upcoming);
        if self.timer_mut(kind).tick() {
            self.advance_phase();
        }
        Ok(())
    }

    /// Deactivate and rewind, so the next `start()` begins a new cycle
    /// at work, pomodoro 1 -- never mid-pattern.
    ///
    /// # Errors
    ///
    /// [`EngineError::NotYetStarted`] if the engine is inactive.
    pub fn stop(&mut self) -> Result<(), EngineError> {
        let kind = self.current.take().ok_or(EngineError::NotYetStarted)?;
        self.timer_mut(kind).reset();
        self.sequence.rewind();
        tracing::info!("engine stopped");
        Ok(())
    }

    /// Force an immediate advance to the next phase, discarding the
    /// active phase's elapsed ticks.
    ///
    /// # Errors
    ///
    /// [`EngineError::NotYetStarted`] if the engine is inactive.
    pub fn skip(&mut self) -> Result<(), EngineError> {
        let kind = self.current.ok_or(EngineError::NotYetStarted)?;
        self.timer_mut(kind).reset();
        tracing::info!(from = kind.label(), "phase skipped");
        self.advance_phase();
        Ok(())
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Fire reaction: move the cursor, make the new phase current and
    /// announce it. Runs synchronously inside the tick or skip that
    /// caused it.
    fn advance_phase(&mut self) {
        let kind = self.sequence.advance();
        self.current = Some(kind);
        tracing::info!(
            phase = kind.label(),
            pomodoro = self.sequence.pomodoro(),
            "phase began"
        );
        self.emit(kind, 0);
    }

    fn emit(&mut self, kind: PhaseKind, elapsed_ticks: u32) {
        let progress = PhaseProgress {
            phase: kind,
            pomodoro: self.sequence.pomodoro(),
            elapsed_ticks,
            total_ticks: self.timer(kind).threshold(),
            at: Utc::now(),
        };
        for observer in &mut self.observers {
            observer(&progress);
        }
    }

    fn timer(&self, kind: PhaseKind) -> &PhaseTimer {
        &self.timers[kind.index()]
    }

    fn timer_mut(&mut self, kind: PhaseKind) -> &mut PhaseTimer {
        &mut self.timers[kind.index()]
    }
}

impl std::fmt::Debug for PhaseEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhaseEngine")
            .field("timers", &self.timers)
            .field("sequence", &self.sequence)
            .field("current", &self.current)
            .field("observers", &self.observers.len())
            .finish()
    }
}
