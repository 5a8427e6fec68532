use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::ledger::{LedgerSnapshot, PrizeCode};
use crate::state::Draw;
use crate::ticket::{join_numbers, z2};

/// The "Last draw" panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSummary {
    pub draw_number: u64,
    pub main: [u8; MAIN_DRAWN],
    pub bonus: u8,
    pub first_four: [u8; STRIKE_POSITIONS],
    pub powerball: u8,
}

impl DrawSummary {
    pub fn new(draw_number: u64, draw: &Draw) -> Self {
        let mut first_four = [0u8; STRIKE_POSITIONS];
        first_four.copy_from_slice(draw.strike_numbers());
        Self {
            draw_number,
            main: draw.main,
            bonus: draw.bonus,
            first_four,
            powerball: draw.powerball,
        }
    }
}

impl fmt::Display for DrawSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Draw #{}", self.draw_number)?;
        writeln!(f, "Main: {}", join_numbers(&self.main))?;
        writeln!(f, "Bonus: {}", z2(self.bonus))?;
        writeln!(f, "First 4: {}", join_numbers(&self.first_four))?;
        write!(f, "PB draw: {}", z2(self.powerball))
    }
}

/// Everything a front end needs to repaint after a command or draw cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    pub last_draw: Option<DrawSummary>,
    pub ledger: LedgerSnapshot,
    /// Stored SYSTEM base numbers, sorted. Empty when none are set.
    pub base_numbers: Vec<u8>,
    pub status: String,
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(draw) = &self.last_draw {
            writeln!(f, "{draw}")?;
            writeln!(f)?;
        }
        if !self.base_numbers.is_empty() {
            writeln!(f, "{}", base_label(&self.base_numbers))?;
        }
        writeln!(f, "{}", render_ledger(&self.ledger))?;
        write!(f, "{}", self.status)
    }
}

/// Display form of the base set, e.g. `Base: 03 07 11`.
pub fn base_label(base: &[u8]) -> String {
    if base.is_empty() {
        String::new()
    } else {
        format!("Base: {}", join_numbers(base))
    }
}

/// `$1,234.56`, or `-$1,234.56` for a loss.
pub fn format_money(cents: i128) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}${grouped}.{:02}", cents % 100)
}

pub fn format_cents(cents: u64) -> String {
    format_money(i128::from(cents))
}

/// The expenditure and payout tally panels.
pub fn render_ledger(snapshot: &LedgerSnapshot) -> String {
    let mut lines = vec![
        format!("Spent       {}", format_cents(snapshot.total_spend)),
        format!("Prizes won  {}", format_cents(snapshot.total_returns)),
        format!("BAL         {}", format_money(snapshot.balance)),
        String::new(),
    ];
    for code in PrizeCode::ALL {
        let entry = snapshot.entry(code);
        lines.push(format!(
            "{:<26}{:>8}",
            format!("{code} paid {}", format_cents(entry.paid)),
            entry.hits
        ));
    }
    lines.push(format!(
        "Total returns {}",
        format_cents(snapshot.total_returns)
    ));
    lines.join("\n")
}
