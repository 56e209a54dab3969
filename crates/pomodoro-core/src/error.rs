//! Core error types for pomodoro-core.
//!
//! Every error here is a caller-contract violation, never a transient
//! condition: nothing in the core performs I/O it could retry. Drivers
//! that only want "make sure it is in the desired state" may treat
//! `AlreadyStarted`/`NotYetStarted` as already satisfied.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-level error type.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Clock lifecycle errors
    #[error("clock error: {0}")]
    Clock(#[from] ClockError),

    /// Phase engine lifecycle errors
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Phase timer construction/reset errors
    #[error("timer error: {0}")]
    Timer(#[from] TimerError),

    /// Configuration-related errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Clock lifecycle violations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockError {
    /// `start()` called while the clock is already emitting ticks
    #[error("clock already started")]
    AlreadyStarted,

    /// `stop()` called on an inactive clock
    #[error("clock not yet started")]
    NotYetStarted,
}

/// Phase engine lifecycle violations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// `start()` called while a phase is already active
    #[error("phase engine already started")]
    AlreadyStarted,

    /// `tick()`, `stop()` or `skip()` called before `start()`
    #[error("phase engine not yet started")]
    NotYetStarted,
}

/// Phase timer construction and reset violations.
///
/// A non-positive threshold is a configuration bug, not a runtime
/// condition to recover from.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    #[error("tick threshold must be greater than 0")]
    InvalidThreshold,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
