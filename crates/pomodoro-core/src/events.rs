use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::PhaseKind;

/// Progress report emitted by the phase engine on every tick and on
/// every phase transition.
///
/// Two boundary values carry meaning for consumers:
/// - `elapsed_ticks == 0` -- the phase just began (surface a cue),
/// - `elapsed_ticks == total_ticks` -- the phase is about to roll over;
///   this report is delivered before the transition happens, so the
///   `phase`/`pomodoro` pairing still describes the finishing phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseProgress {
    pub phase: PhaseKind,
    /// 1-based count of the work interval within the current 4-cycle
    /// pattern (1..=4).
    pub pomodoro: u8,
    pub elapsed_ticks: u32,
    pub total_ticks: u32,
    pub at: DateTime<Utc>,
}

impl PhaseProgress {
    pub fn just_began(&self) -> bool {
        self.elapsed_ticks == 0
    }

    pub fn about_to_roll_over(&self) -> bool {
        self.elapsed_ticks == self.total_ticks
    }

    pub fn remaining_ticks(&self) -> u32 {
        self.total_ticks.saturating_sub(self.elapsed_ticks)
    }

    /// Remaining time as (minutes, seconds), given the wall-clock
    /// length of one tick.
    pub fn remaining_clock(&self, tick_secs: u64) -> (u64, u64) {
        let secs = u64::from(self.remaining_ticks()) * tick_secs;
        (secs / 60, secs % 60)
    }
}
