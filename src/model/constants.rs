// Model constants
pub const MU: f64 = 1500.0;
pub const SIGMA: f64 = 350.0;
pub const VOLATILITY: f64 = 0.06;
pub const TAU: f64 = 1.0;
pub const EPSILON: f64 = 0.000001;
pub const PERIOD_SECONDS: u64 = 86400;

/// The actual score for a win
pub const WIN: f64 = 1.0;
/// The actual score for a draw
pub const DRAW: f64 = 0.5;
/// The actual score for a loss
pub const LOSS: f64 = 0.0;

/// Converts the base-10 logistic exponent to base e
pub const Q: f64 = std::f64::consts::LN_10 / 400.0;
/// Ratio between the natural (1500-centered) scale and the Glicko-2 scale
pub const GLICKO2_SCALE: f64 = 173.7178;

pub const MAX_SOLVER_ITERATIONS: u32 = 100;
pub const MAX_BRACKET_STEPS: u32 = 100;
