use rand::seq::{index, SliceRandom};
use rand::{CryptoRng, Rng};

use crate::constants::*;
use crate::state::Draw;

/// Performs one draw.
///
/// The whole `1..=40` pool is shuffled; the first six balls are the main
/// numbers in drawn order and the seventh is the bonus ball. The Powerball
/// comes from its own pool, independently of the main barrel.
pub fn generate_draw<R: Rng + CryptoRng + ?Sized>(rng: &mut R) -> Draw {
    let mut balls: Vec<u8> = (1..=MAIN_POOL).collect();
    balls.shuffle(rng);

    let mut main = [0u8; MAIN_DRAWN];
    main.copy_from_slice(&balls[..MAIN_DRAWN]);

    Draw {
        main,
        bonus: balls[MAIN_DRAWN],
        powerball: rng.gen_range(1..=POWERBALL_POOL),
    }
}

/// `count` distinct numbers from `1..=40`, sorted ascending.
pub fn sample_numbers<R: Rng + CryptoRng + ?Sized>(rng: &mut R, count: usize) -> Vec<u8> {
    let mut picked: Vec<u8> = index::sample(rng, usize::from(MAIN_POOL), count)
        .into_iter()
        .map(|i| (i + 1) as u8)
        .collect();
    picked.sort_unstable();
    picked
}

pub fn random_powerball<R: Rng + CryptoRng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(1..=POWERBALL_POOL)
}
