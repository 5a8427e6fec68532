use lotto_sim::constants::*;
use lotto_sim::display::DisplayState;
use lotto_sim::ledger::{LedgerSnapshot, PrizeCode};
use lotto_sim::scoring::score_line;
use lotto_sim::state::{Draw, RunState, TicketLine};
use lotto_sim::ticket::{format_ticket_line, parse_ticket_text};
use lotto_sim::{Command, CycleOutcome, Simulator};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn simulator(seed: u64) -> Simulator<ChaCha20Rng> {
    Simulator::with_rng(ChaCha20Rng::seed_from_u64(seed))
}

fn reference_draw() -> Draw {
    Draw {
        main: [1, 2, 3, 4, 5, 6],
        bonus: 7,
        powerball: 3,
    }
}

#[test]
fn jackpot_with_matching_powerball_pays_thirty_million() {
    let line = parse_ticket_text("01 02 03 04 05 06 | PB 03")[0];
    let score = score_line(&line, &reference_draw(), false);
    let award = score.division.unwrap();
    assert_eq!(award.code, PrizeCode::D1);
    assert_eq!(award.amount, 30_000_000 * 100);
}

#[test]
fn three_main_numbers_pay_division_seven() {
    let line = TicketLine::new([1, 2, 3, 40, 39, 38], None);
    let score = score_line(&line, &reference_draw(), true);
    assert_eq!(score.division.map(|a| (a.code, a.amount)), Some((PrizeCode::D7, 280)));
    // 1, 2, 3 sit in drawn positions 1..3, so Strike hits three times
    assert_eq!(score.strike.map(|a| a.code), Some(PrizeCode::S3));
}

#[test]
fn reversed_line_misses_strike() {
    let line = TicketLine::new([6, 5, 4, 3, 2, 1], None);
    assert_eq!(score_line(&line, &reference_draw(), true).strike, None);
}

#[test]
fn at_most_one_award_of_each_kind() {
    let mut rng = ChaCha20Rng::seed_from_u64(77);
    for _ in 0..2_000 {
        let draw = lotto_sim::draw::generate_draw(&mut rng);
        let numbers = lotto_sim::draw::sample_numbers(&mut rng, LINE_SIZE);
        let mut picked = [0u8; LINE_SIZE];
        picked.copy_from_slice(&numbers);
        let line = TicketLine::new(picked, Some(draw.powerball));

        let score = score_line(&line, &draw, true);
        assert!(score.awards().count() <= 2);
        assert!(score.division.map_or(true, |a| a.code.is_division()));
        assert!(score.strike.map_or(true, |a| !a.code.is_division()));
    }
}

#[test]
fn quick_pick_text_round_trips() {
    let mut sim = simulator(4);
    sim.set_include_powerball(true);
    sim.add_quick_picks(25).unwrap();

    let lines = parse_ticket_text(sim.ticket_text());
    assert_eq!(lines.len(), 25);
    let rendered: Vec<String> = lines.iter().map(|l| format_ticket_line(l, false)).collect();
    assert_eq!(rendered.join("\n") + "\n", sim.ticket_text());
}

#[test]
fn system_seven_makes_seven_lines() {
    let mut sim = simulator(5);
    sim.generate_system_wheel(7).unwrap();
    assert_eq!(parse_ticket_text(sim.ticket_text()).len(), 7);
}

#[test]
fn full_session_then_reset() {
    let mut sim = simulator(6);
    sim.execute(Command::Strike(true)).unwrap();
    sim.execute(Command::IncludePowerball(true)).unwrap();
    sim.execute(Command::QuickPicks(10)).unwrap();
    sim.execute(Command::SetBaseNumbers("2 4 6 8 10 12 14 16".to_string())).unwrap();
    sim.execute(Command::SystemWheel(8)).unwrap();
    assert_eq!(parse_ticket_text(sim.ticket_text()).len(), 10 + 28);
    assert_eq!(sim.display_state().base_numbers, vec![2, 4, 6, 8, 10, 12, 14, 16]);
    assert!(sim
        .display_state()
        .to_string()
        .contains("Base: 02 04 06 08 10 12 14 16"));

    sim.execute(Command::Start).unwrap();
    for _ in 0..50 {
        sim.tick();
    }
    sim.execute(Command::Pause).unwrap();
    assert_eq!(sim.state().draw_count, 500);
    assert_eq!(sim.state().run_state, RunState::Paused);

    let snap = sim.ledger().snapshot();
    assert_eq!(snap.total_spend, 500 * 38 * (COST_LOTTO_PB + COST_STRIKE));
    assert_eq!(
        snap.total_returns,
        PrizeCode::ALL.iter().map(|&c| snap.entry(c).paid).sum::<u64>()
    );
    assert_eq!(snap.balance, i128::from(snap.total_returns) - i128::from(snap.total_spend));

    sim.execute(Command::Reset).unwrap();
    assert_eq!(sim.ledger().snapshot(), LedgerSnapshot::default());
    assert_eq!(sim.state().draw_count, 0);
    assert_eq!(sim.single_draw(), CycleOutcome::Skipped);
    assert_eq!(
        sim.display_state(),
        DisplayState {
            last_draw: None,
            ledger: LedgerSnapshot::default(),
            base_numbers: Vec::new(),
            status: "No valid ticket lines. Add some first.".to_string(),
        }
    );
}
