use chrono::{DateTime, Utc};
use thiserror::Error;

pub mod constants;
pub mod glicko;
pub mod glicko2;
pub mod structures;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RatingError {
    #[error("rating deviation must be a positive finite number, got {sigma}")]
    NonPositiveDeviation { sigma: f64 },

    #[error("volatility must be a positive finite number, got {volatility}")]
    NonPositiveVolatility { volatility: f64 },

    #[error("actual score must lie within [0, 1], got {score}")]
    ScoreOutOfRange { score: f64 },

    #[error("Glicko-2 requires at least one game per rating period")]
    EmptySeries,

    #[error("volatility solver did not converge within {iterations} iterations")]
    SolverDidNotConverge { iterations: u32 }
}

/// The operation set shared by both rating engines. Each engine is a
/// self-contained configuration value; no state is carried between calls and
/// every output rating is a newly constructed value.
pub trait RatingSystem {
    type Rating;

    /// A fresh rating filled entirely from the engine's defaults.
    fn default_rating(&self) -> Self::Rating;

    /// Applies a batch of `(actual_score, opponent)` game results to
    /// `rating`, producing the updated rating for the period. The output is
    /// tagged with `rated_at`, defaulting to the current time.
    fn rate(
        &self,
        rating: &Self::Rating,
        series: &[(f64, Self::Rating)],
        rated_at: Option<DateTime<Utc>>
    ) -> Result<Self::Rating, RatingError>;

    /// Updates both sides of a single game. `rating1` is the winner unless
    /// `drawn` is set.
    fn rate_1vs1(
        &self,
        rating1: &Self::Rating,
        rating2: &Self::Rating,
        drawn: bool
    ) -> Result<(Self::Rating, Self::Rating), RatingError>;

    /// How close the matchup is in expectation, from 0.0 (one side heavily
    /// favored) to 1.0 (a perfect coin-flip).
    fn quality_1vs1(&self, rating1: &Self::Rating, rating2: &Self::Rating) -> Result<f64, RatingError>;
}

pub(crate) fn check_deviation(sigma: f64) -> Result<(), RatingError> {
    if sigma.is_finite() && sigma > 0.0 {
        Ok(())
    } else {
        Err(RatingError::NonPositiveDeviation { sigma })
    }
}

pub(crate) fn check_volatility(volatility: f64) -> Result<(), RatingError> {
    if volatility.is_finite() && volatility > 0.0 {
        Ok(())
    } else {
        Err(RatingError::NonPositiveVolatility { volatility })
    }
}

pub(crate) fn check_score(score: f64) -> Result<(), RatingError> {
    if score.is_finite() && (0.0..=1.0).contains(&score) {
        Ok(())
    } else {
        Err(RatingError::ScoreOutOfRange { score })
    }
}
