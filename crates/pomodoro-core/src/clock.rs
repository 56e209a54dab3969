//! Restartable periodic tick source.
//!
//! The clock knows nothing about phases; it is a pure periodic signal
//! with idempotency guards. Ticks are delivered over a channel so the
//! driver owns the one logical thread that feeds the phase engine --
//! the engine never sees overlapping ticks.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::error::ClockError;

/// Emits one tick per `period` on the paired channel while started.
///
/// `start()` spawns the interval task and keeps its handle; `stop()`
/// takes the handle down. At most one task is alive at a time.
#[derive(Debug)]
pub struct Clock {
    period: Duration,
    tx: mpsc::UnboundedSender<()>,
    running: Option<JoinHandle<()>>,
}

impl Clock {
    /// Create an inactive clock and the receiving end of its ticks.
    pub fn new(period: Duration) -> (Self, mpsc::UnboundedReceiver<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                period,
                tx,
                running: None,
            },
            rx,
        )
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Begin emitting ticks, the first one a full period from now.
    ///
    /// # Errors
    ///
    /// [`ClockError::AlreadyStarted`] if the clock is already running.
    pub fn start(&mut self) -> Result<(), ClockError> {
        if self.running.is_some() {
            return Err(ClockError::AlreadyStarted);
        }
        let tx = self.tx.clone();
        let period = self.period;
        self.running = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first interval tick completes immediately; swallow it
            // so ticks start one period after start().
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(()).is_err() {
                    // Receiver gone, nobody left to drive.
                    break;
                }
            }
        }));
        tracing::debug!(period_ms = period.as_millis() as u64, "clock started");
        Ok(())
    }

    /// Halt tick emission.
    ///
    /// # Errors
    ///
    /// [`ClockError::NotYetStarted`] if the clock is not running.
    pub fn stop(&mut self) -> Result<(), ClockError> {
        let handle = self.running.take().ok_or(ClockError::NotYetStarted)?;
        handle.abort();
        tracing::debug!("clock stopped");
        Ok(())
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        if let Some(handle) = self.running.take() {
            handle.abort();
        }
    }
}
