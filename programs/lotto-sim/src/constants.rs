/// Highest ball in the main pool. Balls run `1..=MAIN_POOL`.
pub const MAIN_POOL: u8 = 40;

/// Highest Powerball. Powerballs run `1..=POWERBALL_POOL`.
pub const POWERBALL_POOL: u8 = 10;

/// Balls drawn for the main game (the bonus ball is drawn after these).
pub const MAIN_DRAWN: usize = 6;

/// Numbers on one ticket line.
pub const LINE_SIZE: usize = 6;

/// Leading positions compared by Strike.
pub const STRIKE_POSITIONS: usize = 4;

// Costs per line per draw, in cents.
pub const COST_LOTTO_ONLY: u64 = 70;
pub const COST_LOTTO_PB: u64 = 150;
pub const COST_STRIKE: u64 = 100;

/// Lotto payouts in cents for divisions 1..=7 when the Powerball did not match.
pub const LOTTO_NO_PB: [u64; 7] = [
    100_000_000,
    2_350_000,
    67_400,
    4_800,
    2_600,
    2_100,
    280,
];

/// Lotto payouts in cents for divisions 1..=7 when the Powerball matched.
pub const LOTTO_WITH_PB: [u64; 7] = [
    3_000_000_000,
    3_256_000,
    85_000,
    9_800,
    5_100,
    4_100,
    1_780,
];

/// Strike payouts in cents for 1..=4 positional hits.
pub const STRIKE_PAYOUT: [u64; 4] = [100, 7_700, 54_500, 100_000_000];

/// Autorun pacing in draws per second.
pub const DEFAULT_RATE: u32 = 10_000;
pub const MAX_RATE: u32 = 10_000;

/// Above this rate draws are batched into 1ms ticks.
pub const BATCH_THRESHOLD: u32 = 1_000;

pub const DEFAULT_QUICK_PICKS: usize = 10;
pub const MAX_QUICK_PICKS: usize = 1_000;

/// Supported SYSTEM wheel sizes.
pub const MIN_WHEEL: usize = 7;
pub const MAX_WHEEL: usize = 11;

/// Lines starting with this are ignored by the ticket parser.
pub const COMMENT_MARKER: char = '#';

/// Token introducing a Powerball on a ticket line.
pub const POWERBALL_MARKER: &str = "PB";
