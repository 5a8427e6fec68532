use std::str::FromStr;

use anchor_lang::prelude::*;
use rand::{CryptoRng, RngCore};
use tracing::warn;

use crate::constants::DEFAULT_QUICK_PICKS;
use crate::error::{error_message, LottoError};
use crate::Simulator;

/// Settings, base numbers, ticket buffer and reset.
pub mod admin;
/// Autorun pacing, start and pause.
pub mod autorun;
/// Adding lines: typed, quick picks and SYSTEM wheels.
pub mod buy_ticket;
/// A single draw cycle.
pub mod draw_once;

pub use admin::*;
pub use autorun::*;
pub use buy_ticket::*;
pub use draw_once::*;

/// A user action, as issued by a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    QuickPicks(usize),
    SystemWheel(usize),
    SetBaseNumbers(String),
    AddLine(String),
    ClearTickets,
    ClearBaseAndTickets,
    SetRate(u32),
    IncludePowerball(bool),
    Strike(bool),
    Start,
    Pause,
    Draw,
    Reset,
    Show,
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    /// Console syntax: `qp [n]`, `system <7-11>`, `base <numbers>`,
    /// `add <ticket line>`, `clear`, `clear-all`, `rate <n>`,
    /// `pb on|off`, `strike on|off`, `start`, `pause`, `draw`, `reset`,
    /// `show`, `quit`.
    fn from_str(input: &str) -> Result<Self> {
        let input = input.trim();
        let (word, rest) = input.split_once(char::is_whitespace).unwrap_or((input, ""));
        let rest = rest.trim();

        let command = match word.to_ascii_lowercase().as_str() {
            "qp" | "quickpick" if rest.is_empty() => Command::QuickPicks(DEFAULT_QUICK_PICKS),
            "qp" | "quickpick" => Command::QuickPicks(
                rest.parse()
                    .map_err(|_| error!(LottoError::InvalidQuickPickCount))?,
            ),
            "system" => Command::SystemWheel(
                rest.parse()
                    .map_err(|_| error!(LottoError::InvalidWheelSize))?,
            ),
            "base" => Command::SetBaseNumbers(rest.to_string()),
            "add" => Command::AddLine(rest.to_string()),
            "clear" => Command::ClearTickets,
            "clear-all" => Command::ClearBaseAndTickets,
            "rate" | "speed" => {
                Command::SetRate(rest.parse().map_err(|_| error!(LottoError::InvalidRate))?)
            }
            "pb" | "powerball" => Command::IncludePowerball(parse_switch(rest)?),
            "strike" => Command::Strike(parse_switch(rest)?),
            "start" => Command::Start,
            "pause" => Command::Pause,
            "draw" => Command::Draw,
            "reset" => Command::Reset,
            "show" => Command::Show,
            "quit" | "exit" => Command::Quit,
            _ => return err!(LottoError::UnknownCommand),
        };
        Ok(command)
    }
}

fn parse_switch(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        _ => err!(LottoError::UnknownCommand),
    }
}

/// Applies one command. A rejected command leaves the simulator untouched
/// apart from a warning in the status line.
pub fn process_command<R: RngCore + CryptoRng>(
    sim: &mut Simulator<R>,
    command: Command,
) -> Result<()> {
    let result = match command {
        Command::QuickPicks(count) => process_add_quick_picks(sim, count),
        Command::SystemWheel(size) => process_generate_system_wheel(sim, size),
        Command::SetBaseNumbers(text) => process_set_base_numbers(sim, &text),
        Command::AddLine(text) => {
            process_add_line(sim, &text);
            Ok(())
        }
        Command::ClearTickets => {
            process_clear_tickets(sim);
            Ok(())
        }
        Command::ClearBaseAndTickets => {
            process_clear_base_and_tickets(sim);
            Ok(())
        }
        Command::SetRate(rate) => process_set_rate(sim, rate),
        Command::IncludePowerball(enabled) => {
            process_set_include_powerball(sim, enabled);
            Ok(())
        }
        Command::Strike(enabled) => {
            process_set_strike(sim, enabled);
            Ok(())
        }
        Command::Start => {
            process_start_run(sim);
            Ok(())
        }
        Command::Pause => {
            process_pause(sim);
            Ok(())
        }
        Command::Draw => {
            process_single_draw(sim);
            Ok(())
        }
        Command::Reset => {
            process_reset(sim);
            Ok(())
        }
        Command::Show | Command::Quit => Ok(()),
    };

    if let Err(err) = &result {
        let message = error_message(err);
        warn!(%message, "command rejected");
        sim.status = format!("Warning: {message}");
    }
    result
}
