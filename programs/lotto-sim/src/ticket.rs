use crate::constants::*;
use crate::state::TicketLine;

/// Parses free-form ticket text, one ticket line per text line.
///
/// ```text
/// line    := numbers [separator strike]
/// numbers := token { (ws | ',' | '|') token }
/// token   := int | "PB" int | "PB=" int | <anything else, ignored>
/// ```
///
/// Blank lines and lines starting with `#` are skipped. Anything after a tab
/// is the display-only Strike column and is ignored. Numbers outside 1..=40,
/// repeats and junk tokens are dropped; the first six survivors form the
/// line. Lines with fewer than six survivors are dropped entirely.
pub fn parse_ticket_text(text: &str) -> Vec<TicketLine> {
    text.lines().filter_map(parse_ticket_line).collect()
}

pub fn parse_ticket_line(raw: &str) -> Option<TicketLine> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with(COMMENT_MARKER) {
        return None;
    }

    let left = line.split('\t').next().unwrap_or_default();
    let tokens: Vec<&str> = left
        .split(|c: char| c.is_whitespace() || c == ',' || c == '|')
        .filter(|t| !t.is_empty())
        .collect();

    let mut numbers: Vec<u8> = Vec::with_capacity(LINE_SIZE);
    let mut powerball: Option<i64> = None;
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].to_ascii_uppercase();
        if let Some(rest) = token.strip_prefix(POWERBALL_MARKER) {
            if rest.is_empty() && i + 1 < tokens.len() {
                // "PB 05": the next token is consumed even when it is junk
                if let Ok(value) = tokens[i + 1].parse::<i64>() {
                    powerball = Some(value);
                }
                i += 2;
                continue;
            }
            if let Some((_, value)) = rest.split_once('=') {
                if let Ok(value) = value.parse::<i64>() {
                    powerball = Some(value);
                }
                i += 1;
                continue;
            }
        }

        if let Ok(value) = token.parse::<i64>() {
            if let Some(n) = main_number(value) {
                if numbers.len() < LINE_SIZE && !numbers.contains(&n) {
                    numbers.push(n);
                }
            }
        }
        i += 1;
    }

    let numbers: [u8; LINE_SIZE] = numbers.try_into().ok()?;
    let powerball = powerball.and_then(powerball_number);
    Some(TicketLine::new(numbers, powerball))
}

/// Renders a line the way quick picks and wheels add it to the ticket:
/// `03 11 14 22 33 36 | PB 05`, plus a tab and the Strike guess when Strike
/// is being played.
pub fn format_ticket_line(line: &TicketLine, with_strike: bool) -> String {
    let mut out = join_numbers(&line.numbers);
    if let Some(pb) = line.powerball {
        out.push_str(&format!(" | {} {}", POWERBALL_MARKER, z2(pb)));
    }
    if with_strike {
        out.push('\t');
        out.push_str(&join_numbers(line.strike_guess()));
    }
    out
}

/// Two-digit zero-padded ball.
pub fn z2(n: u8) -> String {
    format!("{n:02}")
}

pub fn join_numbers(numbers: &[u8]) -> String {
    numbers.iter().map(|&n| z2(n)).collect::<Vec<_>>().join(" ")
}

fn main_number(value: i64) -> Option<u8> {
    u8::try_from(value)
        .ok()
        .filter(|n| (1..=MAIN_POOL).contains(n))
}

fn powerball_number(value: i64) -> Option<u8> {
    u8::try_from(value)
        .ok()
        .filter(|n| (1..=POWERBALL_POOL).contains(n))
}
