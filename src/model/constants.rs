// Weighting constants
pub const DECAY_BASE: f64 = 0.95;
// Σ 0.95^i for i = 0..∞
pub const WEIGHT_NORMALIZATION: f64 = 20.0;
pub const DEFAULT_BONUS_PERFORMANCE: f64 = 0.0;
pub const DEFAULT_DISPLAY_LIMIT: usize = 25;
pub const DEFAULT_EXCLUDED_PLAYER: &str = "Guest";
