use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::display::{format_cents, format_money, DrawSummary};
use crate::draw::generate_draw;
use crate::scoring::score_and_award;
use crate::ticket::parse_ticket_text;
use crate::Simulator;

/// Result of one draw cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// There were no valid ticket lines: nothing was drawn or counted.
    Skipped,
    Completed(CycleReport),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub draw: DrawSummary,
    pub lines: usize,
    /// Ticket cost for this draw, in cents.
    pub cost: u64,
    /// Prize money won in this draw, in cents.
    pub returns: u64,
}

/// Runs exactly one draw cycle, whatever the autorun state.
///
/// 1. Parse the ticket text; stop here if it holds no valid lines.
/// 2. Bump the draw counter and draw the balls.
/// 3. Score every line, paying prizes into the ledger.
/// 4. Add the cycle's cost to total spend and publish the draw.
pub fn process_single_draw<R: RngCore + CryptoRng>(sim: &mut Simulator<R>) -> CycleOutcome {
    let lines = parse_ticket_text(&sim.state.ticket_text);
    if lines.is_empty() {
        sim.status = "No valid ticket lines. Add some first.".to_string();
        return CycleOutcome::Skipped;
    }

    sim.state.draw_count += 1;
    let draw = generate_draw(&mut sim.rng);

    let strike = sim.state.config.strike_enabled;
    let returns_before = sim.ledger.total_returns();
    let cost: u64 = lines
        .iter()
        .map(|line| score_and_award(line, &draw, strike, &mut sim.ledger))
        .sum();
    sim.ledger.add_spend(cost);
    let returns = sim.ledger.total_returns() - returns_before;

    let summary = DrawSummary::new(sim.state.draw_count, &draw);
    sim.last_draw = Some(summary);

    let snapshot = sim.ledger.snapshot();
    sim.status = format!(
        "Draw done. Lines={} Cost={} BAL={}",
        lines.len(),
        format_cents(cost),
        format_money(snapshot.balance)
    );
    debug!(
        draw = sim.state.draw_count,
        main = ?draw.main,
        bonus = draw.bonus,
        powerball = draw.powerball,
        lines = lines.len(),
        cost,
        returns,
        "draw scored"
    );

    CycleOutcome::Completed(CycleReport {
        draw: summary,
        lines: lines.len(),
        cost,
        returns,
    })
}
