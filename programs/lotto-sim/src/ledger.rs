use std::fmt;

use serde::{Deserialize, Serialize};

/// A prize code: one of the seven Lotto divisions or one of the four
/// Strike tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PrizeCode {
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    S1,
    S2,
    S3,
    S4,
}

impl PrizeCode {
    pub const ALL: [PrizeCode; 11] = [
        PrizeCode::D1,
        PrizeCode::D2,
        PrizeCode::D3,
        PrizeCode::D4,
        PrizeCode::D5,
        PrizeCode::D6,
        PrizeCode::D7,
        PrizeCode::S1,
        PrizeCode::S2,
        PrizeCode::S3,
        PrizeCode::S4,
    ];

    /// Lotto division `1..=7`.
    pub fn division(division: u8) -> Option<Self> {
        match division {
            1..=7 => Some(Self::ALL[usize::from(division) - 1]),
            _ => None,
        }
    }

    /// Strike tier for `1..=4` positional hits.
    pub fn strike(hits: usize) -> Option<Self> {
        match hits {
            1..=4 => Some(Self::ALL[6 + hits]),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_division(self) -> bool {
        self.index() < 7
    }

    /// The 1-based division or tier number.
    pub fn rank(self) -> usize {
        if self.is_division() {
            self.index() + 1
        } else {
            self.index() - 6
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PrizeCode::D1 => "D1",
            PrizeCode::D2 => "D2",
            PrizeCode::D3 => "D3",
            PrizeCode::D4 => "D4",
            PrizeCode::D5 => "D5",
            PrizeCode::D6 => "D6",
            PrizeCode::D7 => "D7",
            PrizeCode::S1 => "S1",
            PrizeCode::S2 => "S2",
            PrizeCode::S3 => "S3",
            PrizeCode::S4 => "S4",
        }
    }
}

impl fmt::Display for PrizeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything prizes can be paid into. The scoring engine only talks to the
/// ledger through this, so it can be exercised against a recording sink.
pub trait AwardSink {
    fn award(&mut self, code: PrizeCode, amount: u64);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyEntry {
    /// Times this code has been won.
    pub hits: u64,

    /// Total paid for this code, in cents.
    pub paid: u64,
}

/// Every counter only grows between resets. Amounts are integer cents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TallyLedger {
    entries: [TallyEntry; 11],
    total_spend: u64,
}

impl TallyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a draw cycle's ticket cost to the aggregate spend.
    pub fn add_spend(&mut self, amount: u64) {
        self.total_spend = self.total_spend.saturating_add(amount);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn entry(&self, code: PrizeCode) -> TallyEntry {
        self.entries[code.index()]
    }

    pub fn total_spend(&self) -> u64 {
        self.total_spend
    }

    pub fn total_returns(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.paid))
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        let total_returns = self.total_returns();
        LedgerSnapshot {
            per_code: PrizeCode::ALL.map(|code| (code, self.entry(code))),
            total_spend: self.total_spend,
            total_returns,
            balance: i128::from(total_returns) - i128::from(self.total_spend),
        }
    }
}

impl AwardSink for TallyLedger {
    fn award(&mut self, code: PrizeCode, amount: u64) {
        let entry = &mut self.entries[code.index()];
        entry.hits = entry.hits.saturating_add(1);
        entry.paid = entry.paid.saturating_add(amount);
    }
}

/// Point-in-time copy of the ledger handed to the display boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub per_code: [(PrizeCode, TallyEntry); 11],
    pub total_spend: u64,
    pub total_returns: u64,
    /// `total_returns - total_spend`, in cents.
    pub balance: i128,
}

impl LedgerSnapshot {
    pub fn entry(&self, code: PrizeCode) -> TallyEntry {
        self.per_code[code.index()].1
    }
}

impl Default for LedgerSnapshot {
    fn default() -> Self {
        TallyLedger::default().snapshot()
    }
}
