//! Skill rating calculations for pairwise games using the Glicko and
//! Glicko-2 algorithms.
//!
//! Both engines are plain configuration values: construct one (or use
//! [`Default`]), build ratings with `create_rating`, and feed a batch of
//! `(actual_score, opponent)` pairs into [`RatingSystem::rate`] to obtain the
//! updated rating. Nothing is stored between calls.
//!
//! ```
//! use glicko_engine::{Glicko, RatingSystem, WIN};
//!
//! let engine = Glicko::default();
//! let player = engine.create_rating(Some(1500.0), Some(200.0), None);
//! let opponent = engine.create_rating(Some(1400.0), Some(30.0), None);
//!
//! let updated = engine.rate(&player, &[(WIN, opponent)], None).unwrap();
//! assert!(updated.mu > player.mu);
//! ```

pub mod model;
pub mod utils;

pub use model::{
    constants::{DRAW, LOSS, WIN},
    glicko::Glicko,
    glicko2::Glicko2,
    structures::rating::{Glicko2Rating, GlickoRating},
    RatingError, RatingSystem
};
