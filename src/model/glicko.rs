use std::f64::consts::PI;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{
    check_deviation, check_score,
    constants::{DRAW, LOSS, MU, PERIOD_SECONDS, Q, SIGMA, WIN},
    structures::rating::GlickoRating,
    RatingError, RatingSystem
};

/// The original Glicko rating engine, operating on the natural 1500-centered
/// scale. Holds only immutable configuration; every operation is a pure
/// function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Glicko {
    /// Default strength estimate for new ratings
    pub mu: f64,
    /// Default rating deviation for new ratings
    pub sigma: f64,
    /// Length of one rating period in seconds. A design parameter for
    /// batching games; not consumed by the arithmetic itself.
    pub period: u64
}

impl Default for Glicko {
    fn default() -> Self {
        Self {
            mu: MU,
            sigma: SIGMA,
            period: PERIOD_SECONDS
        }
    }
}

impl Glicko {
    pub fn new(mu: f64, sigma: f64, period: u64) -> Self {
        Self { mu, sigma, period }
    }

    /// Builds a rating, filling omitted fields from the engine defaults.
    pub fn create_rating(
        &self,
        mu: Option<f64>,
        sigma: Option<f64>,
        rated_at: Option<DateTime<Utc>>
    ) -> GlickoRating {
        GlickoRating {
            mu: mu.unwrap_or(self.mu),
            sigma: sigma.unwrap_or(self.sigma),
            rated_at
        }
    }

    /// `g(RD)` in Glickman's paper: a damping factor in (0, 1] that shrinks
    /// the weight of evidence from opponents whose own rating is uncertain.
    pub fn reduce_impact(&self, rating: &GlickoRating) -> f64 {
        1.0 / (1.0 + (3.0 * Q.powi(2) * rating.sigma.powi(2)) / PI.powi(2)).sqrt()
    }

    /// Expected score of `rating` against `other`, in base-10 logistic form.
    pub fn expect_score(&self, rating: &GlickoRating, other: &GlickoRating, impact: f64) -> f64 {
        1.0 / (1.0 + 10f64.powf(impact * (rating.mu - other.mu) / -400.0))
    }
}

impl RatingSystem for Glicko {
    type Rating = GlickoRating;

    fn default_rating(&self) -> GlickoRating {
        self.create_rating(None, None, None)
    }

    fn rate(
        &self,
        rating: &GlickoRating,
        series: &[(f64, GlickoRating)],
        rated_at: Option<DateTime<Utc>>
    ) -> Result<GlickoRating, RatingError> {
        check_deviation(rating.sigma)?;

        // Glickman calls the first accumulator "Delta"
        let mut difference = 0.0;
        let mut d_square_inv = 0.0;
        for (actual_score, other) in series {
            check_score(*actual_score)?;
            check_deviation(other.sigma)?;

            let impact = self.reduce_impact(other);
            let expected_score = self.expect_score(rating, other, impact);
            difference += impact * (actual_score - expected_score);
            d_square_inv += expected_score * (1.0 - expected_score) * Q.powi(2) * impact.powi(2);
        }

        let denom = rating.sigma.powi(-2) + d_square_inv;
        let mu = rating.mu + Q / denom * difference;
        let sigma = (1.0 / denom).sqrt();

        Ok(GlickoRating {
            mu,
            sigma,
            rated_at: Some(rated_at.unwrap_or_else(Utc::now))
        })
    }

    fn rate_1vs1(
        &self,
        rating1: &GlickoRating,
        rating2: &GlickoRating,
        drawn: bool
    ) -> Result<(GlickoRating, GlickoRating), RatingError> {
        let (score1, score2) = if drawn { (DRAW, DRAW) } else { (WIN, LOSS) };

        Ok((
            self.rate(rating1, &[(score1, *rating2)], None)?,
            self.rate(rating2, &[(score2, *rating1)], None)?
        ))
    }

    fn quality_1vs1(&self, rating1: &GlickoRating, rating2: &GlickoRating) -> Result<f64, RatingError> {
        check_deviation(rating1.sigma)?;
        check_deviation(rating2.sigma)?;

        let expected1 = self.expect_score(rating1, rating2, self.reduce_impact(rating2));
        let expected2 = self.expect_score(rating2, rating1, self.reduce_impact(rating1));
        let average_expected = (expected1 + (1.0 - expected2)) / 2.0;

        Ok(2.0 * (0.5 - (0.5 - average_expected).abs()))
    }
}
