use serde::{Deserialize, Serialize};

use crate::constants::*;

/// One lotto draw. Created fresh per draw event and discarded once scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    /// The six main balls in the order they came out of the machine.
    pub main: [u8; MAIN_DRAWN],

    /// The seventh ball, distinct from every main ball.
    pub bonus: u8,

    /// The Powerball, drawn from its own `1..=10` pool.
    pub powerball: u8,
}

impl Draw {
    /// The first four balls in drawn order, which Strike plays against.
    pub fn strike_numbers(&self) -> &[u8] {
        &self.main[..STRIKE_POSITIONS]
    }

    pub fn is_main(&self, number: u8) -> bool {
        self.main.contains(&number)
    }
}

/// One parsed wager: six distinct numbers in the order the player typed
/// them, plus an optional Powerball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketLine {
    pub numbers: [u8; LINE_SIZE],
    pub powerball: Option<u8>,
}

impl TicketLine {
    pub fn new(numbers: [u8; LINE_SIZE], powerball: Option<u8>) -> Self {
        Self { numbers, powerball }
    }

    /// The player's Strike guess: the first four numbers as typed.
    pub fn strike_guess(&self) -> &[u8] {
        &self.numbers[..STRIKE_POSITIONS]
    }
}

/// Autorun state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    /// Same as `Idle` except that it is only reachable from `Running`.
    Paused,
}

/// User-adjustable settings. Restored to `Default` on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Autorun pacing in draws per second, `1..=MAX_RATE`.
    pub rate_per_second: u32,

    /// Attach a Powerball to lines produced by quick picks and wheels.
    pub include_powerball: bool,

    /// Play Strike on every line.
    pub strike_enabled: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rate_per_second: DEFAULT_RATE,
            include_powerball: false,
            strike_enabled: false,
        }
    }
}

/// Everything the simulation loop owns apart from the ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationState {
    pub run_state: RunState,

    /// Completed draws since the last reset.
    pub draw_count: u64,

    pub config: SimulationConfig,

    /// Base numbers for SYSTEM wheels, sorted ascending. Empty when unset.
    pub base_numbers: Vec<u8>,

    /// Raw ticket text. Re-parsed at the start of every draw cycle.
    pub ticket_text: String,
}

impl SimulationState {
    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }
}
