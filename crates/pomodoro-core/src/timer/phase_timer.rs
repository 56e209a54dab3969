use crate::error::TimerError;

/// Counts incoming ticks against a threshold.
///
/// The counter lives in `[0, threshold)`: the tick that would reach the
/// threshold fires and rolls the counter back to zero in the same call,
/// so exactly one fire is observable per overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseTimer {
    threshold: u32,
    count: u32,
}

impl PhaseTimer {
    /// # Errors
    ///
    /// [`TimerError::InvalidThreshold`] if `threshold` is zero.
    pub fn new(threshold: u32) -> Result<Self, TimerError> {
        if threshold == 0 {
            return Err(TimerError::InvalidThreshold);
        }
        Ok(Self {
            threshold,
            count: 0,
        })
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Count one tick. Returns true on fire.
    pub fn tick(&mut self) -> bool {
        self.count += 1;
        if self.count == self.threshold {
            self.count = 0;
            return true;
        }
        false
    }

    /// Zero the counter, keeping the threshold.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Zero the counter and replace the threshold.
    ///
    /// The counter is zeroed even when the new threshold is rejected;
    /// the old threshold stays in place in that case.
    ///
    /// # Errors
    ///
    /// [`TimerError::InvalidThreshold`] if `threshold` is zero.
    pub fn reset_with(&mut self, threshold: u32) -> Result<(), TimerError> {
        self.count = 0;
        if threshold == 0 {
            return Err(TimerError::InvalidThreshold);
        }
        self.threshold = threshold;
        Ok(())
    }
}
