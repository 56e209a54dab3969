mod engine;
mod phase_timer;
mod sequence;

pub use engine::{PhaseEngine, ProgressObserver, Thresholds};
pub use phase_timer::PhaseTimer;
pub use sequence::{PhaseKind, PhaseSequence};
