//! The foreground timer loop: owns a clock and a phase engine, forwards
//! ticks, renders progress lines and maps keyboard intents onto the
//! engine.

use std::io::Write as _;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use pomodoro_core::{Clock, ClockError, Config, ConfigError, EngineError, PhaseEngine, PhaseKind};

#[derive(Args)]
pub struct RunArgs {
    /// Work interval length in ticks (overrides config)
    #[arg(long)]
    work: Option<u32>,
    /// Short break length in ticks (overrides config)
    #[arg(long)]
    short_break: Option<u32>,
    /// Coffee break length in ticks (overrides config)
    #[arg(long)]
    coffee: Option<u32>,
    /// Wall-clock seconds per tick (overrides config)
    #[arg(long)]
    tick_secs: Option<u64>,
}

pub fn run(args: RunArgs) -> pomodoro_core::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_loop(args))
}

async fn run_loop(args: RunArgs) -> pomodoro_core::Result<()> {
    let config = Config::load();

    let tick = match args.tick_secs {
        Some(0) => {
            return Err(ConfigError::InvalidValue {
                key: "tick-secs".into(),
                message: "must be greater than 0".into(),
            }
            .into())
        }
        Some(secs) => Duration::from_secs(secs),
        None => config.tick()?,
    };
    let mut thresholds = config.thresholds()?;
    if let Some(ticks) = args.work {
        thresholds.work = ticks;
    }
    if let Some(ticks) = args.short_break {
        thresholds.short_break = ticks;
    }
    if let Some(ticks) = args.coffee {
        thresholds.coffee = ticks;
    }

    let (mut clock, mut ticks) = Clock::new(tick);
    let mut engine = PhaseEngine::new(thresholds)?;

    let tick_secs = tick.as_secs();
    let rest_over = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&rest_over);
    engine.observe(move |p| {
        let (mins, secs) = p.remaining_clock(tick_secs);
        if p.just_began() {
            // \x07 rings the terminal bell to announce the new phase.
            println!("\x07>> {} (pomodoro {}) {mins}m{secs:02}s", p.phase.label(), p.pomodoro);
        } else {
            print!("\r{} {mins:02}:{secs:02}  ", p.phase.label());
            let _ = std::io::stdout().flush();
        }
        if p.about_to_roll_over() && p.phase != PhaseKind::Work {
            flag.store(true, Ordering::SeqCst);
        }
    });

    println!("commands: Enter = begin, s = skip, q = quit");
    engine.start()?;
    clock.start()?;

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            maybe_tick = ticks.recv() => {
                if maybe_tick.is_none() {
                    break;
                }
                engine.tick()?;
                // A finished break or coffee does not roll straight into
                // the next work interval: hold the clock until an
                // explicit begin.
                if rest_over.swap(false, Ordering::SeqCst) {
                    soft_stop(&mut clock)?;
                    // A tick may already sit in the channel from before
                    // the stop; it must not reach the engine during the
                    // hold.
                    drain_pending(&mut ticks);
                    println!("\npress Enter to begin the next phase");
                }
            }
            line = input.next_line() => {
                let Some(line) = line? else { break };
                match line.trim() {
                    "" => soft_start(&mut clock)?,
                    "s" | "skip" => engine.skip()?,
                    "q" | "quit" => break,
                    other => eprintln!("unknown command: {other}"),
                }
            }
        }
    }

    // Shutdown mirrors the begin/end handlers: clock first, engine
    // second, both tolerated as already stopped.
    soft_stop(&mut clock)?;
    soft_engine_stop(&mut engine)?;
    Ok(())
}

/// `AlreadyStarted` just means the clock is in the desired state.
fn soft_start(clock: &mut Clock) -> Result<(), ClockError> {
    match clock.start() {
        Ok(()) | Err(ClockError::AlreadyStarted) => Ok(()),
        Err(e) => Err(e),
    }
}

fn soft_stop(clock: &mut Clock) -> Result<(), ClockError> {
    match clock.stop() {
        Ok(()) | Err(ClockError::NotYetStarted) => Ok(()),
        Err(e) => Err(e),
    }
}

fn soft_engine_stop(engine: &mut PhaseEngine) -> Result<(), EngineError> {
    match engine.stop() {
        Ok(()) | Err(EngineError::NotYetStarted) => Ok(()),
        Err(e) => Err(e),
    }
}

/// Discard ticks that were queued before the clock was stopped.
fn drain_pending(ticks: &mut mpsc::UnboundedReceiver<()>) {
    while ticks.try_recv().is_ok() {}
}
