//! Seeded generators for randomized rating tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::model::{
    constants::{DRAW, LOSS, WIN},
    structures::rating::{Glicko2Rating, GlickoRating}
};

/// Seeded RNG for reproducible results
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A plausible competitor on the natural scale: mu within 1000..2000,
/// deviation within 50..350.
pub fn generate_glicko_rating(rng: &mut ChaCha8Rng) -> GlickoRating {
    GlickoRating::new(rng.random_range(1000.0..2000.0), rng.random_range(50.0..350.0))
}

pub fn generate_glicko2_rating(rng: &mut ChaCha8Rng) -> Glicko2Rating {
    Glicko2Rating::new(
        rng.random_range(1000.0..2000.0),
        rng.random_range(50.0..350.0),
        rng.random_range(0.03..0.1)
    )
}

/// A series of `n_games` conventional outcomes against random opponents.
pub fn generate_glicko2_series(rng: &mut ChaCha8Rng, n_games: usize) -> Vec<(f64, Glicko2Rating)> {
    (0..n_games)
        .map(|_| {
            let score = match rng.random_range(0..3) {
                0 => WIN,
                1 => DRAW,
                _ => LOSS
            };
            (score, generate_glicko2_rating(rng))
        })
        .collect()
}

pub fn generate_glicko_series(rng: &mut ChaCha8Rng, n_games: usize) -> Vec<(f64, GlickoRating)> {
    (0..n_games)
        .map(|_| {
            let score = match rng.random_range(0..3) {
                0 => WIN,
                1 => DRAW,
                _ => LOSS
            };
            (score, generate_glicko_rating(rng))
        })
        .collect()
}
