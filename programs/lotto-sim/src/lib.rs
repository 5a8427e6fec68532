use anchor_lang::Result;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use display::{DisplayState, DrawSummary};
use instructions::*;
use ledger::TallyLedger;
use state::{SimulationConfig, SimulationState};

/// Pools, prices and payout tables.
pub mod constants;
/// What front ends render: draw summary, tallies and status.
pub mod display;
/// Random draws.
pub mod draw;
/// Simulator errors.
pub mod error;
/// One handler per user action.
pub mod instructions;
/// Hit counts, prize money and spend.
pub mod ledger;
/// Async autorun loop.
pub mod runner;
/// Scores ticket lines against a draw.
pub mod scoring;
/// Draws, ticket lines and simulator settings.
pub mod state;
/// Ticket text parsing and formatting.
pub mod ticket;

pub use instructions::{Command, CycleOutcome, CycleReport, Pacing};

/// The lotto simulator: ticket buffer, settings, tallies and the autorun
/// state machine, all owned by one control thread.
///
/// Every user action goes through one of the methods below; a draw cycle
/// always runs to completion before the next action is taken.
pub struct Simulator<R = OsRng> {
    pub(crate) state: SimulationState,
    pub(crate) ledger: TallyLedger,
    pub(crate) last_draw: Option<DrawSummary>,
    pub(crate) status: String,
    pub(crate) rng: R,
}

impl Simulator<OsRng> {
    /// A simulator drawing from the operating system's CSPRNG.
    pub fn new() -> Self {
        Self::with_rng(OsRng)
    }
}

impl Default for Simulator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> Simulator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: SimulationState::default(),
            ledger: TallyLedger::new(),
            last_draw: None,
            status: "Ready.".to_string(),
            rng,
        }
    }

    pub fn update_config(&mut self, config: SimulationConfig) -> Result<()> {
        process_update_config(self, config)
    }

    pub fn set_rate(&mut self, rate_per_second: u32) -> Result<()> {
        process_set_rate(self, rate_per_second)
    }

    pub fn set_include_powerball(&mut self, enabled: bool) {
        process_set_include_powerball(self, enabled)
    }

    pub fn set_strike(&mut self, enabled: bool) {
        process_set_strike(self, enabled)
    }

    pub fn set_base_numbers(&mut self, text: &str) -> Result<()> {
        process_set_base_numbers(self, text)
    }

    pub fn set_ticket_text(&mut self, text: &str) {
        process_set_ticket_text(self, text)
    }

    pub fn add_line(&mut self, raw: &str) {
        process_add_line(self, raw)
    }

    pub fn add_quick_picks(&mut self, count: usize) -> Result<()> {
        process_add_quick_picks(self, count)
    }

    pub fn generate_system_wheel(&mut self, size: usize) -> Result<()> {
        process_generate_system_wheel(self, size)
    }

    pub fn clear_tickets(&mut self) {
        process_clear_tickets(self)
    }

    pub fn clear_base_and_tickets(&mut self) {
        process_clear_base_and_tickets(self)
    }

    pub fn start_run(&mut self) {
        process_start_run(self)
    }

    pub fn pause(&mut self) {
        process_pause(self)
    }

    pub fn single_draw(&mut self) -> CycleOutcome {
        process_single_draw(self)
    }

    /// Runs one timer tick's worth of draws if autorun is on. Returns how
    /// long to wait before the next tick, or `None` when not running.
    pub fn tick(&mut self) -> Option<std::time::Duration> {
        process_tick(self)
    }

    pub fn reset(&mut self) {
        process_reset(self)
    }

    pub fn execute(&mut self, command: Command) -> Result<()> {
        process_command(self, command)
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn ledger(&self) -> &TallyLedger {
        &self.ledger
    }

    pub fn last_draw(&self) -> Option<&DrawSummary> {
        self.last_draw.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn ticket_text(&self) -> &str {
        &self.state.ticket_text
    }

    pub fn display_state(&self) -> DisplayState {
        DisplayState {
            last_draw: self.last_draw,
            ledger: self.ledger.snapshot(),
            base_numbers: self.state.base_numbers.clone(),
            status: self.status.clone(),
        }
    }
}
