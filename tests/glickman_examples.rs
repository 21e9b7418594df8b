//! Published worked examples from Glickman's Glicko and Glicko-2 papers,
//! exercised through the public API.

use approx::assert_abs_diff_eq;
use glicko_engine::{Glicko, Glicko2, Glicko2Rating, GlickoRating, RatingSystem, LOSS, WIN};

/// The Glicko worked example: a 1500/200 player beats 1400/30 and loses to
/// 1550/100 and 1700/300.
#[test]
fn glicko_reference_vector() {
    let engine = Glicko::default();
    let r1 = GlickoRating::new(1500.0, 200.0);
    let series = [
        (WIN, GlickoRating::new(1400.0, 30.0)),
        (LOSS, GlickoRating::new(1550.0, 100.0)),
        (LOSS, GlickoRating::new(1700.0, 300.0)),
    ];

    let updated = engine.rate(&r1, &series, None).unwrap();

    assert_abs_diff_eq!(updated.mu, 1464.106, epsilon = 0.01);
    assert_abs_diff_eq!(updated.sigma, 151.399, epsilon = 0.001);
}

/// The Glicko-2 worked example under tau = 0.5: same opponents and outcomes.
#[test]
fn glicko2_reference_vector() {
    let engine = Glicko2 {
        tau: 0.5,
        ..Glicko2::default()
    };
    let r1 = Glicko2Rating::new(1500.0, 200.0, 0.06);
    let series = [
        (WIN, Glicko2Rating::new(1400.0, 30.0, 0.06)),
        (LOSS, Glicko2Rating::new(1550.0, 100.0, 0.06)),
        (LOSS, Glicko2Rating::new(1700.0, 300.0, 0.06)),
    ];

    let updated = engine.rate(&r1, &series, None).unwrap();

    assert_abs_diff_eq!(updated.mu, 1464.06, epsilon = 0.05);
    assert_abs_diff_eq!(updated.sigma, 151.52, epsilon = 0.01);
    assert_abs_diff_eq!(updated.volatility, 0.05999, epsilon = 0.0001);
}

/// Both engines agree closely on the worked example; the volatility term only
/// matters over many periods.
#[test]
fn engines_agree_on_worked_example() {
    let glicko = Glicko::default();
    let glicko2 = Glicko2 {
        tau: 0.5,
        ..Glicko2::default()
    };

    let v1 = glicko
        .rate(
            &GlickoRating::new(1500.0, 200.0),
            &[
                (WIN, GlickoRating::new(1400.0, 30.0)),
                (LOSS, GlickoRating::new(1550.0, 100.0)),
                (LOSS, GlickoRating::new(1700.0, 300.0)),
            ],
            None
        )
        .unwrap();
    let v2 = glicko2
        .rate(
            &Glicko2Rating::new(1500.0, 200.0, 0.06),
            &[
                (WIN, Glicko2Rating::new(1400.0, 30.0, 0.06)),
                (LOSS, Glicko2Rating::new(1550.0, 100.0, 0.06)),
                (LOSS, Glicko2Rating::new(1700.0, 300.0, 0.06)),
            ],
            None
        )
        .unwrap();

    assert_abs_diff_eq!(v1.mu, v2.mu, epsilon = 0.5);
    assert_abs_diff_eq!(v1.sigma, v2.sigma, epsilon = 0.5);
}

#[test]
fn rate_1vs1_favors_the_winner() {
    let engine = Glicko2::default();
    let r1 = engine.default_rating();
    let r2 = engine.default_rating();

    let (winner, loser) = engine.rate_1vs1(&r1, &r2, false).unwrap();

    assert!(winner.mu > r1.mu);
    assert!(loser.mu < r2.mu);
}
