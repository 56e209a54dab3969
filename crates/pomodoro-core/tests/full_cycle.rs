//! End-to-end run of the classic 25/5/10 cycle (in tick units),
//! asserting the exact stream of progress reports across a full
//! pattern: three work/break rounds, a fourth work interval closed by
//! coffee, then the wrap back to work, pomodoro 1.

use std::sync::{Arc, Mutex};

use pomodoro_core::{PhaseEngine, PhaseKind, Thresholds};

const WORK: u32 = 25;
const BREAK: u32 = 5;
const COFFEE: u32 = 10;

type Report = (PhaseKind, u8, u32, u32);

fn recorded_engine() -> (PhaseEngine, Arc<Mutex<Vec<Report>>>) {
    let mut engine = PhaseEngine::new(Thresholds {
        work: WORK,
        short_break: BREAK,
        coffee: COFFEE,
    })
    .unwrap();
    let log: Arc<Mutex<Vec<Report>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    engine.observe(move |p| {
        sink.lock()
            .unwrap()
            .push((p.phase, p.pomodoro, p.elapsed_ticks, p.total_ticks));
    });
    (engine, log)
}

#[test]
fn full_pattern_report_stream() {
    let (mut engine, log) = recorded_engine();

    let mut expected: Vec<Report> = Vec::new();
    expected.push((PhaseKind::Work, 1, 0, WORK));
    engine.start().unwrap();

    for pomodoro in 1..=4u8 {
        // Work phase: reports 1..=WORK, then the transition report.
        for elapsed in 1..=WORK {
            expected.push((PhaseKind::Work, pomodoro, elapsed, WORK));
            engine.tick().unwrap();
        }
        let (rest_kind, rest_total) = if pomodoro != 4 {
            (PhaseKind::Break, BREAK)
        } else {
            (PhaseKind::Coffee, COFFEE)
        };
        expected.push((rest_kind, pomodoro, 0, rest_total));

        for elapsed in 1..=rest_total {
            expected.push((rest_kind, pomodoro, elapsed, rest_total));
            engine.tick().unwrap();
        }
        let next_pomodoro = if pomodoro == 4 { 1 } else { pomodoro + 1 };
        expected.push((PhaseKind::Work, next_pomodoro, 0, WORK));
    }

    assert_eq!(*log.lock().unwrap(), expected);
    assert_eq!(engine.current(), Some(PhaseKind::Work));
    assert_eq!(engine.pomodoro(), 1);
    assert_eq!(engine.elapsed_ticks(), Some(0));
}

#[test]
fn work_rollover_emits_boundary_pair() {
    let (mut engine, log) = recorded_engine();
    engine.start().unwrap();
    for _ in 0..WORK {
        engine.tick().unwrap();
    }
    let log = log.lock().unwrap();
    let n = log.len();
    // The final tick reports the boundary value for the finishing work
    // phase, immediately followed by the fresh break phase.
    assert_eq!(log[n - 2], (PhaseKind::Work, 1, WORK, WORK));
    assert_eq!(log[n - 1], (PhaseKind::Break, 1, 0, BREAK));
}

#[test]
fn stop_mid_pattern_restarts_from_scratch() {
    let (mut engine, log) = recorded_engine();
    engine.start().unwrap();
    // Through work and into the first break.
    for _ in 0..WORK + 2 {
        engine.tick().unwrap();
    }
    assert_eq!(engine.current(), Some(PhaseKind::Break));
    engine.stop().unwrap();
    assert_eq!(engine.current(), None);
    assert_eq!(engine.pomodoro(), 0);

    engine.start().unwrap();
    assert_eq!(
        log.lock().unwrap().last().copied(),
        Some((PhaseKind::Work, 1, 0, WORK))
    );
}
