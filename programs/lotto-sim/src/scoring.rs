use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::ledger::{AwardSink, PrizeCode};
use crate::state::{Draw, TicketLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub code: PrizeCode,
    pub amount: u64,
}

/// Outcome of one line in one draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineScore {
    /// What the line cost to play, in cents.
    pub cost: u64,

    /// At most one Lotto division.
    pub division: Option<Award>,

    /// At most one Strike tier. Always `None` when Strike is off.
    pub strike: Option<Award>,
}

impl LineScore {
    pub fn awards(&self) -> impl Iterator<Item = Award> {
        self.division.into_iter().chain(self.strike)
    }

    pub fn returns(&self) -> u64 {
        self.awards().map(|a| a.amount).sum()
    }

    pub fn pay_into<S: AwardSink + ?Sized>(&self, sink: &mut S) {
        for award in self.awards() {
            sink.award(award.code, award.amount);
        }
    }
}

/// Cost of one line for one draw. The Strike surcharge is paid whether or
/// not Strike wins.
pub fn line_cost(line: &TicketLine, strike_enabled: bool) -> u64 {
    let base = if line.powerball.is_some() {
        COST_LOTTO_PB
    } else {
        COST_LOTTO_ONLY
    };
    if strike_enabled {
        base + COST_STRIKE
    } else {
        base
    }
}

/// Division for `matches` main balls hit, with `bonus` set when the line
/// holds the bonus ball. Highest division wins.
pub fn division_for(matches: usize, bonus: bool) -> Option<PrizeCode> {
    let division = match (matches, bonus) {
        (6, _) => 1,
        (5, true) => 2,
        (5, false) => 3,
        (4, true) => 4,
        (4, false) => 5,
        (3, true) => 6,
        (3, false) => 7,
        _ => return None,
    };
    PrizeCode::division(division)
}

/// Payout for a division. The upgraded table applies only when the line
/// declared a Powerball equal to the drawn one.
pub fn division_payout(code: PrizeCode, powerball_matched: bool) -> u64 {
    let table = if powerball_matched {
        &LOTTO_WITH_PB
    } else {
        &LOTTO_NO_PB
    };
    table[code.rank() - 1]
}

pub fn strike_hits(line: &TicketLine, draw: &Draw) -> usize {
    line.strike_guess()
        .iter()
        .zip(draw.strike_numbers())
        .filter(|(guess, drawn)| guess == drawn)
        .count()
}

/// Lotto is unordered: a line's numbers are matched against the six main
/// balls wherever they sit. Strike is positional: the first four numbers as
/// typed are compared with the first four balls in drawn order.
pub fn score_line(line: &TicketLine, draw: &Draw, strike_enabled: bool) -> LineScore {
    let matches = line.numbers.iter().filter(|&&n| draw.is_main(n)).count();
    let bonus = line.numbers.contains(&draw.bonus);
    let powerball_matched = line.powerball == Some(draw.powerball);

    let division = division_for(matches, bonus).map(|code| Award {
        code,
        amount: division_payout(code, powerball_matched),
    });

    let strike = if strike_enabled {
        let hits = strike_hits(line, draw);
        PrizeCode::strike(hits).map(|code| Award {
            code,
            amount: STRIKE_PAYOUT[hits - 1],
        })
    } else {
        None
    };

    LineScore {
        cost: line_cost(line, strike_enabled),
        division,
        strike,
    }
}

/// Scores a line and pays any prizes straight into `sink`. Returns the
/// line's cost.
pub fn score_and_award<S: AwardSink + ?Sized>(
    line: &TicketLine,
    draw: &Draw,
    strike_enabled: bool,
    sink: &mut S,
) -> u64 {
    let score = score_line(line, draw, strike_enabled);
    score.pay_into(sink);
    score.cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TallyLedger;

    fn reference_draw() -> Draw {
        Draw {
            main: [1, 2, 3, 4, 5, 6],
            bonus: 7,
            powerball: 3,
        }
    }

    #[derive(Default)]
    struct Recorder(Vec<(PrizeCode, u64)>);

    impl AwardSink for Recorder {
        fn award(&mut self, code: PrizeCode, amount: u64) {
            self.0.push((code, amount));
        }
    }

    #[test]
    fn division_table() {
        assert_eq!(division_for(6, false), Some(PrizeCode::D1));
        assert_eq!(division_for(6, true), Some(PrizeCode::D1));
        assert_eq!(division_for(5, true), Some(PrizeCode::D2));
        assert_eq!(division_for(5, false), Some(PrizeCode::D3));
        assert_eq!(division_for(4, true), Some(PrizeCode::D4));
        assert_eq!(division_for(4, false), Some(PrizeCode::D5));
        assert_eq!(division_for(3, true), Some(PrizeCode::D6));
        assert_eq!(division_for(3, false), Some(PrizeCode::D7));
        assert_eq!(division_for(2, true), None);
        assert_eq!(division_for(0, false), None);
    }

    #[test]
    fn jackpot_with_powerball() {
        let line = TicketLine::new([1, 2, 3, 4, 5, 6], Some(3));
        let score = score_line(&line, &reference_draw(), false);
        assert_eq!(
            score.division,
            Some(Award {
                code: PrizeCode::D1,
                amount: 3_000_000_000
            })
        );
        assert_eq!(score.strike, None);
        assert_eq!(score.cost, COST_LOTTO_PB);
    }

    #[test]
    fn three_numbers_without_bonus_is_division_seven() {
        let line = TicketLine::new([1, 2, 3, 40, 39, 38], None);
        let score = score_line(&line, &reference_draw(), false);
        assert_eq!(
            score.division,
            Some(Award {
                code: PrizeCode::D7,
                amount: 280
            })
        );
        assert_eq!(score.cost, COST_LOTTO_ONLY);
    }

    #[test]
    fn bonus_upgrades_division() {
        let line = TicketLine::new([1, 2, 3, 4, 5, 7], None);
        let score = score_line(&line, &reference_draw(), false);
        assert_eq!(score.division.map(|a| a.code), Some(PrizeCode::D2));
        assert_eq!(score.returns(), 2_350_000);
    }

    #[test]
    fn undeclared_powerball_never_matches() {
        let line = TicketLine::new([1, 2, 3, 4, 5, 6], None);
        let score = score_line(&line, &reference_draw(), false);
        assert_eq!(score.returns(), 100_000_000);

        let wrong = TicketLine::new([1, 2, 3, 4, 5, 6], Some(4));
        assert_eq!(score_line(&wrong, &reference_draw(), false).returns(), 100_000_000);
    }

    #[test]
    fn powerball_alone_pays_nothing() {
        let line = TicketLine::new([10, 11, 12, 13, 14, 15], Some(3));
        let score = score_line(&line, &reference_draw(), false);
        assert_eq!(score.awards().count(), 0);
        assert_eq!(score.cost, COST_LOTTO_PB);
    }

    #[test]
    fn strike_is_positional() {
        let reversed = TicketLine::new([6, 5, 4, 3, 2, 1], None);
        let score = score_line(&reversed, &reference_draw(), true);
        assert_eq!(score.strike, None);
        // all six still match for Lotto
        assert_eq!(score.division.map(|a| a.code), Some(PrizeCode::D1));
        assert_eq!(score.cost, COST_LOTTO_ONLY + COST_STRIKE);
    }

    #[test]
    fn strike_tiers() {
        let draw = reference_draw();
        let cases = [
            ([1, 9, 10, 11, 20, 21], PrizeCode::S1, 100),
            ([1, 2, 30, 31, 20, 21], PrizeCode::S2, 7_700),
            ([1, 2, 3, 31, 20, 21], PrizeCode::S3, 54_500),
            ([1, 2, 3, 4, 20, 21], PrizeCode::S4, 100_000_000),
        ];
        for (numbers, code, amount) in cases {
            let line = TicketLine::new(numbers, None);
            assert_eq!(score_line(&line, &draw, true).strike, Some(Award { code, amount }));
        }
    }

    #[test]
    fn strike_ignored_when_off() {
        let line = TicketLine::new([1, 2, 3, 4, 20, 21], None);
        let score = score_line(&line, &reference_draw(), false);
        assert_eq!(score.strike, None);
        assert_eq!(score.division.map(|a| a.code), Some(PrizeCode::D5));
    }

    #[test]
    fn score_and_award_pays_the_sink() {
        let line = TicketLine::new([1, 2, 3, 4, 20, 21], Some(3));
        let mut recorder = Recorder::default();
        let cost = score_and_award(&line, &reference_draw(), true, &mut recorder);

        assert_eq!(cost, COST_LOTTO_PB + COST_STRIKE);
        assert_eq!(recorder.0, vec![(PrizeCode::D5, 5_100), (PrizeCode::S4, 100_000_000)]);

        let mut ledger = TallyLedger::new();
        score_and_award(&line, &reference_draw(), true, &mut ledger);
        assert_eq!(ledger.entry(PrizeCode::D5).hits, 1);
        assert_eq!(ledger.entry(PrizeCode::S4).paid, 100_000_000);
        assert_eq!(ledger.total_spend(), 0);
    }
}
