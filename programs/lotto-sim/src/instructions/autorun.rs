use std::time::Duration;

use rand::{CryptoRng, RngCore};
use tracing::info;

use crate::constants::*;
use crate::state::RunState;
use crate::Simulator;

use super::process_single_draw;

/// How autorun turns a draws-per-second rate into timer ticks.
///
/// Up to `BATCH_THRESHOLD` draws/sec each tick runs one draw and the ticks
/// are spaced `1000 / rate` ms apart. Faster rates keep a 1ms tick and run
/// `rate / 1000` draws per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub draws_per_tick: u32,
    pub tick: Duration,
}

impl Pacing {
    pub fn for_rate(rate_per_second: u32) -> Self {
        let rate = rate_per_second.max(1);
        if rate <= BATCH_THRESHOLD {
            Self {
                draws_per_tick: 1,
                tick: Duration::from_millis(u64::from((1000 / rate).max(1))),
            }
        } else {
            Self {
                draws_per_tick: (rate / 1000).max(1),
                tick: Duration::from_millis(1),
            }
        }
    }
}

/// Idle/Paused -> Running. Already running is a no-op.
pub fn process_start_run<R: RngCore + CryptoRng>(sim: &mut Simulator<R>) {
    if sim.state.is_running() {
        return;
    }
    sim.state.run_state = RunState::Running;
    sim.status = "Running.".to_string();
    info!(rate = sim.state.config.rate_per_second, "autorun started");
}

/// Running -> Paused. Tallies and the last draw are kept.
pub fn process_pause<R: RngCore + CryptoRng>(sim: &mut Simulator<R>) {
    if sim.state.is_running() {
        sim.state.run_state = RunState::Paused;
        info!(draws = sim.state.draw_count, "autorun paused");
    }
    sim.status = "Paused.".to_string();
}

/// One timer tick of autorun.
///
/// Runs the tick's batch of draw cycles back to back, each fully scored
/// before the next starts, and returns the delay until the next tick.
pub fn process_tick<R: RngCore + CryptoRng>(sim: &mut Simulator<R>) -> Option<Duration> {
    if !sim.state.is_running() {
        return None;
    }
    let pacing = Pacing::for_rate(sim.state.config.rate_per_second);
    for _ in 0..pacing.draws_per_tick {
        process_single_draw(sim);
    }
    Some(pacing.tick)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn simulator() -> Simulator<ChaCha20Rng> {
        let mut sim = Simulator::with_rng(ChaCha20Rng::seed_from_u64(3));
        sim.set_ticket_text("1 2 3 4 5 6");
        sim
    }

    #[test]
    fn pacing_table() {
        assert_eq!(
            Pacing::for_rate(1),
            Pacing {
                draws_per_tick: 1,
                tick: Duration::from_millis(1000),
            }
        );
        assert_eq!(
            Pacing::for_rate(3),
            Pacing {
                draws_per_tick: 1,
                tick: Duration::from_millis(333),
            }
        );
        assert_eq!(
            Pacing::for_rate(1000),
            Pacing {
                draws_per_tick: 1,
                tick: Duration::from_millis(1),
            }
        );
        assert_eq!(
            Pacing::for_rate(2500),
            Pacing {
                draws_per_tick: 2,
                tick: Duration::from_millis(1),
            }
        );
        assert_eq!(
            Pacing::for_rate(DEFAULT_RATE),
            Pacing {
                draws_per_tick: 10,
                tick: Duration::from_millis(1),
            }
        );
        assert_eq!(Pacing::for_rate(0), Pacing::for_rate(1));
    }

    #[test]
    fn tick_does_nothing_unless_running() {
        let mut sim = simulator();
        assert_eq!(sim.tick(), None);
        assert_eq!(sim.state().draw_count, 0);
    }

    #[test]
    fn tick_runs_a_batch() {
        let mut sim = simulator();
        sim.start_run();
        assert_eq!(sim.state().run_state, RunState::Running);
        assert_eq!(sim.tick(), Some(Duration::from_millis(1)));
        assert_eq!(sim.state().draw_count, 10);

        sim.set_rate(4).unwrap();
        assert_eq!(sim.tick(), Some(Duration::from_millis(250)));
        assert_eq!(sim.state().draw_count, 11);
    }

    #[test]
    fn pause_keeps_tallies_and_resume_continues() {
        let mut sim = simulator();
        sim.start_run();
        sim.tick();
        let spend = sim.ledger().total_spend();

        sim.pause();
        assert_eq!(sim.state().run_state, RunState::Paused);
        assert_eq!(sim.tick(), None);
        assert_eq!(sim.ledger().total_spend(), spend);
        assert!(sim.last_draw().is_some());
        assert_eq!(sim.status(), "Paused.");

        sim.start_run();
        sim.tick();
        assert_eq!(sim.state().draw_count, 20);
    }

    #[test]
    fn pause_from_idle_stays_idle() {
        let mut sim = simulator();
        sim.pause();
        assert_eq!(sim.state().run_state, RunState::Idle);
    }

    #[test]
    fn single_draw_works_while_paused_or_running() {
        let mut sim = simulator();
        sim.start_run();
        sim.single_draw();
        assert_eq!(sim.state().run_state, RunState::Running);
        sim.pause();
        sim.single_draw();
        assert_eq!(sim.state().run_state, RunState::Paused);
        assert_eq!(sim.state().draw_count, 2);
    }
}
