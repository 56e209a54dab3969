use serde::{Deserialize, Serialize};

/// Kind of interval the engine can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseKind {
    Work,
    Break,
    Coffee,
}

impl PhaseKind {
    pub const ALL: [PhaseKind; 3] = [PhaseKind::Work, PhaseKind::Break, PhaseKind::Coffee];

    pub fn label(self) -> &'static str {
        match self {
            PhaseKind::Work => "work",
            PhaseKind::Break => "break",
            PhaseKind::Coffee => "coffee",
        }
    }

    /// Stable index used for the engine's per-kind timer table.
    pub(crate) fn index(self) -> usize {
        match self {
            PhaseKind::Work => 0,
            PhaseKind::Break => 1,
            PhaseKind::Coffee => 2,
        }
    }
}

/// The repeating phase pattern: three work/break rounds, then a fourth
/// work interval closed by the long coffee break.
const PATTERN: [PhaseKind; 8] = [
    PhaseKind::Work,
    PhaseKind::Break,
    PhaseKind::Work,
    PhaseKind::Break,
    PhaseKind::Work,
    PhaseKind::Break,
    PhaseKind::Work,
    PhaseKind::Coffee,
];

/// Cursor into the infinite repetition of the pattern.
///
/// An explicit step index replaces a resumable generator: `advance()`
/// moves modulo the pattern length, and rewinding for a fresh cycle is
/// just `step = 0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseSequence {
    step: usize,
}

impl PhaseSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Phase kind under the cursor.
    pub fn current(&self) -> PhaseKind {
        PATTERN[self.step]
    }

    /// Move one slot forward, wrapping at the end of the pattern, and
    /// return the new phase kind.
    pub fn advance(&mut self) -> PhaseKind {
        self.step = (self.step + 1) % PATTERN.len();
        self.current()
    }

    /// Rewind to the start of the pattern so the next cycle begins at
    /// work, pomodoro 1.
    pub fn rewind(&mut self) {
        self.step = 0;
    }

    /// 1-based number of the work interval this slot belongs to.
    /// Each pattern slot pairs with the work interval that opened it,
    /// so the number is simply `step / 2 + 1`.
    pub fn pomodoro(&self) -> u8 {
        (self.step / 2 + 1) as u8
    }
}
