//! # Pomodoro Core Library
//!
//! Core logic for a Pomodoro timer: fixed-length work intervals
//! alternating with short breaks, and a longer coffee break after every
//! fourth work interval, repeating forever.
//!
//! ## Architecture
//!
//! - [`Clock`]: restartable periodic tick source backed by a tokio
//!   interval task; delivers ticks over a channel
//! - [`PhaseTimer`]: counts ticks against a threshold and fires exactly
//!   once when it is reached
//! - [`PhaseEngine`]: owns one timer per phase kind, advances through
//!   the repeating work/break/coffee pattern and reports
//!   [`PhaseProgress`] to registered observers
//!
//! The engine is single-threaded and event-driven. Nothing here
//! measures wall-clock time except the clock, and nothing persists
//! across restarts. A driver owns both halves: it forwards each clock
//! tick to [`PhaseEngine::tick`] and maps user intents onto `start()`,
//! `stop()` and `skip()`. The driver must not deliver the next tick
//! until the previous call has returned; all progress reports are
//! delivered synchronously before the emitting call returns.

pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod timer;

pub use clock::Clock;
pub use config::Config;
pub use error::{ClockError, ConfigError, CoreError, EngineError, Result, TimerError};
pub use events::PhaseProgress;
pub use timer::{PhaseEngine, PhaseKind, PhaseSequence, PhaseTimer, ProgressObserver, Thresholds};
