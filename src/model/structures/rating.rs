use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::constants::{MU, SIGMA, VOLATILITY};

/// A competitor's rating under the original Glicko system: a strength
/// estimate `mu` and its deviation `sigma`, both on the conventional
/// 1500-centered scale.
///
/// Ratings are immutable snapshots. Updating one via
/// [`rate`](crate::RatingSystem::rate) always produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlickoRating {
    pub mu: f64,
    pub sigma: f64,
    /// When this rating was last updated, if known. Tagged onto the output of
    /// `rate` and otherwise ignored by the arithmetic.
    pub rated_at: Option<DateTime<Utc>>
}

impl GlickoRating {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Self {
            mu,
            sigma,
            rated_at: None
        }
    }
}

impl Default for GlickoRating {
    fn default() -> Self {
        Self::new(MU, SIGMA)
    }
}

impl fmt::Display for GlickoRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GlickoRating(mu={:.3}, sigma={:.3}", self.mu, self.sigma)?;
        if let Some(rated_at) = self.rated_at {
            write!(f, ", rated_at={}", rated_at)?;
        }
        write!(f, ")")
    }
}

/// A competitor's rating under Glicko-2, which carries an additional
/// volatility term measuring how erratic the competitor's performance is.
/// A low volatility indicates a consistent performer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Glicko2Rating {
    pub mu: f64,
    pub sigma: f64,
    pub volatility: f64,
    pub rated_at: Option<DateTime<Utc>>
}

impl Glicko2Rating {
    pub fn new(mu: f64, sigma: f64, volatility: f64) -> Self {
        Self {
            mu,
            sigma,
            volatility,
            rated_at: None
        }
    }
}

impl Default for Glicko2Rating {
    fn default() -> Self {
        Self::new(MU, SIGMA, VOLATILITY)
    }
}

impl fmt::Display for Glicko2Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Glicko2Rating(mu={:.3}, sigma={:.3}, volatility={:.3}",
            self.mu, self.sigma, self.volatility
        )?;
        if let Some(rated_at) = self.rated_at {
            write!(f, ", rated_at={}", rated_at)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::constants::{MU, SIGMA, VOLATILITY};

    #[test]
    fn default_glicko_rating_uses_model_constants() {
        let rating = GlickoRating::default();

        assert_eq!(rating.mu, MU);
        assert_eq!(rating.sigma, SIGMA);
        assert_eq!(rating.rated_at, None);
    }

    #[test]
    fn default_glicko2_rating_uses_model_constants() {
        let rating = Glicko2Rating::default();

        assert_eq!(rating.mu, MU);
        assert_eq!(rating.sigma, SIGMA);
        assert_eq!(rating.volatility, VOLATILITY);
    }

    #[test]
    fn display_formats_three_decimal_places() {
        let rating = GlickoRating::new(1464.1055, 151.3994);

        assert_eq!(format!("{}", rating), "GlickoRating(mu=1464.106, sigma=151.399)");
    }

    #[test]
    fn display_includes_volatility() {
        let rating = Glicko2Rating::new(1500.0, 350.0, 0.06);

        assert_eq!(
            format!("{}", rating),
            "Glicko2Rating(mu=1500.000, sigma=350.000, volatility=0.060)"
        );
    }
}
