use std::f64::consts::PI;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::model::{
    check_deviation, check_score, check_volatility,
    constants::{
        DRAW, EPSILON, GLICKO2_SCALE, LOSS, MAX_BRACKET_STEPS, MAX_SOLVER_ITERATIONS, MU, PERIOD_SECONDS, SIGMA, TAU,
        VOLATILITY, WIN
    },
    structures::rating::Glicko2Rating,
    RatingError, RatingSystem
};

/// The Glicko-2 rating engine. Internally transforms ratings onto a
/// standardized 0-centered scale, tracks a volatility term per rating, and
/// re-estimates that volatility each period with an iterative solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Glicko2 {
    /// Default strength estimate for new ratings
    pub mu: f64,
    /// Default rating deviation for new ratings
    pub sigma: f64,
    /// Default volatility for new ratings
    pub volatility: f64,
    /// System constant constraining how much volatility can change per
    /// period. Smaller values give more conservative volatility updates.
    pub tau: f64,
    /// Convergence tolerance for the volatility solver
    pub epsilon: f64,
    /// Length of one rating period in seconds. A design parameter for
    /// batching games; not consumed by the arithmetic itself.
    pub period: u64
}

impl Default for Glicko2 {
    fn default() -> Self {
        Self {
            mu: MU,
            sigma: SIGMA,
            volatility: VOLATILITY,
            tau: TAU,
            epsilon: EPSILON,
            period: PERIOD_SECONDS
        }
    }
}

impl Glicko2 {
    pub fn new(mu: f64, sigma: f64, volatility: f64, tau: f64, epsilon: f64, period: u64) -> Self {
        Self {
            mu,
            sigma,
            volatility,
            tau,
            epsilon,
            period
        }
    }

    /// Builds a rating, filling omitted fields from the engine defaults.
    pub fn create_rating(
        &self,
        mu: Option<f64>,
        sigma: Option<f64>,
        volatility: Option<f64>,
        rated_at: Option<DateTime<Utc>>
    ) -> Glicko2Rating {
        Glicko2Rating {
            mu: mu.unwrap_or(self.mu),
            sigma: sigma.unwrap_or(self.sigma),
            volatility: volatility.unwrap_or(self.volatility),
            rated_at
        }
    }

    /// Converts a rating from the natural 1500-centered scale to the
    /// standardized Glicko-2 scale. Exact inverse of [`Self::scale_up`].
    pub fn scale_down(&self, rating: &Glicko2Rating) -> Glicko2Rating {
        Glicko2Rating {
            mu: (rating.mu - self.mu) / GLICKO2_SCALE,
            sigma: rating.sigma / GLICKO2_SCALE,
            volatility: rating.volatility,
            rated_at: rating.rated_at
        }
    }

    /// Converts a rating from the standardized scale back to the natural one.
    pub fn scale_up(&self, rating: &Glicko2Rating) -> Glicko2Rating {
        Glicko2Rating {
            mu: rating.mu * GLICKO2_SCALE + self.mu,
            sigma: rating.sigma * GLICKO2_SCALE,
            volatility: rating.volatility,
            rated_at: rating.rated_at
        }
    }

    /// `g(phi)` on the standardized scale: shrinks the weight of evidence
    /// from opponents whose own rating is uncertain.
    pub fn reduce_impact(&self, rating: &Glicko2Rating) -> f64 {
        1.0 / (1.0 + (3.0 * rating.sigma.powi(2)) / PI.powi(2)).sqrt()
    }

    /// Expected score of `rating` against `other` on the standardized scale.
    pub fn expect_score(&self, rating: &Glicko2Rating, other: &Glicko2Rating, impact: f64) -> f64 {
        1.0 / (1.0 + (-impact * (rating.mu - other.mu)).exp())
    }

    /// Solves the optimality condition for the new volatility with the
    /// Illinois variant of regula falsi (step 5 of Glickman's algorithm).
    ///
    /// `rating` must already be on the standardized scale; `difference` is
    /// the estimated rating improvement Delta and `variance` the estimated
    /// variance v, both computed from the period's game outcomes.
    pub fn determine_volatility(
        &self,
        rating: &Glicko2Rating,
        difference: f64,
        variance: f64
    ) -> Result<f64, RatingError> {
        let sigma = rating.sigma;
        let difference_squared = difference.powi(2);
        // f(x) is twice the conditional log-posterior density of the
        // volatility, the optimality criterion
        let alpha = rating.volatility.powi(2).ln();
        let f = |x: f64| {
            let tmp = sigma.powi(2) + variance + x.exp();
            let a = x.exp() * (difference_squared - tmp) / (2.0 * tmp.powi(2));
            let b = (x - alpha) / self.tau.powi(2);
            a - b
        };

        debug!(difference, variance, sigma, "determining new volatility");

        let mut a = alpha;
        let mut b = if difference_squared > sigma.powi(2) + variance {
            (difference_squared - sigma.powi(2) - variance).ln()
        } else {
            // Expand the bracket downward until f changes sign
            let mut k = 1u32;
            while f(alpha - f64::from(k) * self.tau) < 0.0 {
                k += 1;
                if k > MAX_BRACKET_STEPS {
                    warn!(steps = MAX_BRACKET_STEPS, "volatility bracket expansion failed");
                    return Err(RatingError::SolverDidNotConverge {
                        iterations: MAX_BRACKET_STEPS
                    });
                }
            }
            alpha - f64::from(k) * self.tau
        };

        let mut f_a = f(a);
        let mut f_b = f(b);
        let mut iterations = 0u32;
        while (b - a).abs() > self.epsilon {
            iterations += 1;
            if iterations > MAX_SOLVER_ITERATIONS {
                warn!(iterations, "volatility solver failed to converge");
                return Err(RatingError::SolverDidNotConverge {
                    iterations: MAX_SOLVER_ITERATIONS
                });
            }

            let c = a + (a - b) * f_a / (f_b - f_a);
            let f_c = f(c);
            if f_c * f_b < 0.0 {
                a = b;
                f_a = f_b;
            } else {
                // Illinois modification: halve the stagnant endpoint's value
                f_a /= 2.0;
            }
            b = c;
            f_b = f_c;
            trace!(iterations, a, b, "volatility solver step");
        }

        Ok((a / 2.0).exp())
    }
}

impl RatingSystem for Glicko2 {
    type Rating = Glicko2Rating;

    fn default_rating(&self) -> Glicko2Rating {
        self.create_rating(None, None, None, None)
    }

    fn rate(
        &self,
        rating: &Glicko2Rating,
        series: &[(f64, Glicko2Rating)],
        rated_at: Option<DateTime<Utc>>
    ) -> Result<Glicko2Rating, RatingError> {
        check_deviation(rating.sigma)?;
        check_volatility(rating.volatility)?;
        if series.is_empty() {
            return Err(RatingError::EmptySeries);
        }

        // Step 2: convert ratings onto the Glicko-2 scale
        let scaled = self.scale_down(rating);

        // Steps 3 and 4: estimated variance v from game outcomes alone, and
        // the estimated rating improvement Delta
        let mut variance_inv = 0.0;
        let mut difference = 0.0;
        for (actual_score, other) in series {
            check_score(*actual_score)?;
            check_deviation(other.sigma)?;
            check_volatility(other.volatility)?;

            let other = self.scale_down(other);
            let impact = self.reduce_impact(&other);
            let expected_score = self.expect_score(&scaled, &other, impact);
            variance_inv += impact.powi(2) * expected_score * (1.0 - expected_score);
            difference += impact * (actual_score - expected_score);
        }
        let variance = 1.0 / variance_inv;
        let difference = difference * variance;

        // Step 5: new volatility, by iteration
        let volatility = self.determine_volatility(&scaled, difference, variance)?;

        // Step 6: pre-rating-period deviation phi-star
        let sigma_star = (scaled.sigma.powi(2) + volatility.powi(2)).sqrt();

        // Step 7: new deviation and new mean
        let sigma = 1.0 / (1.0 / sigma_star.powi(2) + 1.0 / variance).sqrt();
        let mu = scaled.mu + sigma.powi(2) * (difference / variance);

        // Step 8: convert back to the natural scale
        Ok(self.scale_up(&Glicko2Rating {
            mu,
            sigma,
            volatility,
            rated_at: Some(rated_at.unwrap_or_else(Utc::now))
        }))
    }

    fn rate_1vs1(
        &self,
        rating1: &Glicko2Rating,
        rating2: &Glicko2Rating,
        drawn: bool
    ) -> Result<(Glicko2Rating, Glicko2Rating), RatingError> {
        let (score1, score2) = if drawn { (DRAW, DRAW) } else { (WIN, LOSS) };

        Ok((
            self.rate(rating1, &[(score1, *rating2)], None)?,
            self.rate(rating2, &[(score2, *rating1)], None)?
        ))
    }

    fn quality_1vs1(&self, rating1: &Glicko2Rating, rating2: &Glicko2Rating) -> Result<f64, RatingError> {
        check_deviation(rating1.sigma)?;
        check_deviation(rating2.sigma)?;

        let scaled1 = self.scale_down(rating1);
        let scaled2 = self.scale_down(rating2);
        let expected1 = self.expect_score(&scaled1, &scaled2, self.reduce_impact(&scaled2));
        let expected2 = self.expect_score(&scaled2, &scaled1, self.reduce_impact(&scaled1));
        let average_expected = (expected1 + (1.0 - expected2)) / 2.0;

        Ok(2.0 * (0.5 - (0.5 - average_expected).abs()))
    }
}
