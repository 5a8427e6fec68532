use anchor_lang::prelude::*;
use rand::{CryptoRng, RngCore};
use tracing::info;

use crate::constants::*;
use crate::error::LottoError;
use crate::state::{SimulationConfig, SimulationState};
use crate::ticket::parse_ticket_text;
use crate::Simulator;

/// Replaces the simulator settings after validating them.
///
/// The rate must be within `1..=MAX_RATE`. On error nothing changes.
pub fn process_update_config<R: RngCore + CryptoRng>(
    sim: &mut Simulator<R>,
    config: SimulationConfig,
) -> Result<()> {
    require!(
        (1..=MAX_RATE).contains(&config.rate_per_second),
        LottoError::InvalidRate
    );

    sim.state.config = config;
    info!(
        rate = config.rate_per_second,
        powerball = config.include_powerball,
        strike = config.strike_enabled,
        "config updated"
    );
    Ok(())
}

pub fn process_set_rate<R: RngCore + CryptoRng>(
    sim: &mut Simulator<R>,
    rate_per_second: u32,
) -> Result<()> {
    let config = SimulationConfig {
        rate_per_second,
        ..sim.state.config
    };
    process_update_config(sim, config)?;
    sim.status = format!("Speed set to {rate_per_second} draws/sec.");
    Ok(())
}

pub fn process_set_include_powerball<R: RngCore + CryptoRng>(
    sim: &mut Simulator<R>,
    enabled: bool,
) {
    sim.state.config.include_powerball = enabled;
    sim.status = format!(
        "Powerball on new lines {}.",
        if enabled { "on" } else { "off" }
    );
}

pub fn process_set_strike<R: RngCore + CryptoRng>(sim: &mut Simulator<R>, enabled: bool) {
    sim.state.config.strike_enabled = enabled;
    sim.status = format!("Strike {}.", if enabled { "on" } else { "off" });
}

/// Parses and stores the base numbers used by SYSTEM wheels.
///
/// Numbers may be separated by whitespace or commas; repeats collapse.
/// Any token that is not a number in 1..=40 rejects the whole entry.
pub fn process_set_base_numbers<R: RngCore + CryptoRng>(
    sim: &mut Simulator<R>,
    text: &str,
) -> Result<()> {
    let base = parse_base_numbers(text)?;
    info!(base = ?base, "base numbers set");
    sim.status = format!("Base numbers set: {base:?}");
    sim.state.base_numbers = base;
    Ok(())
}

pub fn parse_base_numbers(text: &str) -> Result<Vec<u8>> {
    let mut base = Vec::new();
    for token in text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        let value: i64 = token
            .parse()
            .map_err(|_| error!(LottoError::BaseNumberNotNumeric))?;
        require!(
            (1..=i64::from(MAIN_POOL)).contains(&value),
            LottoError::BaseNumberOutOfRange
        );
        base.push(value as u8);
    }
    require!(!base.is_empty(), LottoError::NoBaseNumbers);

    base.sort_unstable();
    base.dedup();
    Ok(base)
}

pub fn process_set_ticket_text<R: RngCore + CryptoRng>(sim: &mut Simulator<R>, text: &str) {
    sim.state.ticket_text = text.to_string();
    let valid = parse_ticket_text(text).len();
    sim.status = format!("Ticket loaded: {valid} valid lines.");
}

pub fn process_clear_tickets<R: RngCore + CryptoRng>(sim: &mut Simulator<R>) {
    sim.state.ticket_text.clear();
    sim.status = "Cleared ticket.".to_string();
}

pub fn process_clear_base_and_tickets<R: RngCore + CryptoRng>(sim: &mut Simulator<R>) {
    sim.state.base_numbers.clear();
    sim.state.ticket_text.clear();
    sim.status = "Cleared base and ticket.".to_string();
}

/// Stops autorun and puts everything back the way it was at start-up:
/// tallies, draw counter, settings, base numbers and the ticket.
pub fn process_reset<R: RngCore + CryptoRng>(sim: &mut Simulator<R>) {
    sim.state = SimulationState::default();
    sim.ledger.reset();
    sim.last_draw = None;
    sim.status = "Reset complete.".to_string();
    info!("simulator reset");
}
