use anchor_lang::prelude::*;
use rand::{CryptoRng, RngCore};
use tracing::info;

use crate::constants::*;
use crate::draw::{random_powerball, sample_numbers};
use crate::error::LottoError;
use crate::state::TicketLine;
use crate::ticket::{format_ticket_line, parse_ticket_line};
use crate::Simulator;

fn append_line(ticket: &mut String, line: &str) {
    if !ticket.is_empty() && !ticket.ends_with('\n') {
        ticket.push('\n');
    }
    ticket.push_str(line);
    ticket.push('\n');
}

/// Appends one line to the ticket in the standard text format.
///
/// The Strike column is added when Strike is on, matching what the player
/// would see on a printed ticket.
pub fn process_add_ticket_line<R: RngCore + CryptoRng>(sim: &mut Simulator<R>, line: &TicketLine) {
    let text = format_ticket_line(line, sim.state.config.strike_enabled);
    append_line(&mut sim.state.ticket_text, &text);
}

/// Appends a line exactly as the player typed it.
///
/// The text is kept even when it does not parse, so it can be fixed up in
/// the ticket later; the status says whether it will be played.
pub fn process_add_line<R: RngCore + CryptoRng>(sim: &mut Simulator<R>, raw: &str) {
    let raw = raw.trim();
    append_line(&mut sim.state.ticket_text, raw);
    sim.status = if parse_ticket_line(raw).is_some() {
        "Added 1 line.".to_string()
    } else {
        "Added 1 line. It is not a valid ticket line and will be skipped.".to_string()
    };
    info!(line = raw, "ticket line added");
}

/// Adds `count` quick pick lines: six sorted random numbers each, with a
/// random Powerball when Powerball is on for new lines.
pub fn process_add_quick_picks<R: RngCore + CryptoRng>(
    sim: &mut Simulator<R>,
    count: usize,
) -> Result<()> {
    require!(
        (1..=MAX_QUICK_PICKS).contains(&count),
        LottoError::InvalidQuickPickCount
    );

    for _ in 0..count {
        let numbers = sample_numbers(&mut sim.rng, LINE_SIZE);
        let line = random_line(sim, numbers);
        process_add_ticket_line(sim, &line);
    }

    info!(count, "quick picks added");
    sim.status = format!("Added {count} Quick Picks.");
    Ok(())
}

/// Expands a SYSTEM wheel of `size` numbers into every 6-number line.
///
/// The stored base numbers are used when there are exactly `size` of them;
/// otherwise a fresh random base is picked.
pub fn process_generate_system_wheel<R: RngCore + CryptoRng>(
    sim: &mut Simulator<R>,
    size: usize,
) -> Result<()> {
    require!(
        (MIN_WHEEL..=MAX_WHEEL).contains(&size),
        LottoError::InvalidWheelSize
    );

    let base = if sim.state.base_numbers.len() == size {
        sim.state.base_numbers.clone()
    } else {
        sample_numbers(&mut sim.rng, size)
    };

    let lines = combinations(&base, LINE_SIZE);
    for numbers in &lines {
        let line = random_line(sim, numbers.clone());
        process_add_ticket_line(sim, &line);
    }

    info!(size, lines = lines.len(), base = ?base, "system wheel generated");
    sim.status = format!("SYSTEM{size} base {base:?} produced {} lines.", lines.len());
    Ok(())
}

fn random_line<R: RngCore + CryptoRng>(sim: &mut Simulator<R>, numbers: Vec<u8>) -> TicketLine {
    let mut picked = [0u8; LINE_SIZE];
    picked.copy_from_slice(&numbers);
    let powerball = sim
        .state
        .config
        .include_powerball
        .then(|| random_powerball(&mut sim.rng));
    TicketLine::new(picked, powerball)
}

/// Every `k`-element combination of `items`, in lexicographic index order.
pub fn combinations(items: &[u8], k: usize) -> Vec<Vec<u8>> {
    let n = items.len();
    if k > n {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        out.push(idx.iter().map(|&i| items[i]).collect());

        // rightmost index that can still move up
        let Some(pos) = (0..k).rev().find(|&i| idx[i] != i + n - k) else {
            return out;
        };
        idx[pos] += 1;
        for j in pos + 1..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}
