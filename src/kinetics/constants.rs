// ─────────────────────────────────────────────────────────────────────────────
// Volume of distribution (Seidl method)
// ─────────────────────────────────────────────────────────────────────────────

/// Intercept shared by both Seidl formulas.
pub const VDA_INTERCEPT: f64 = 0.31;

/// Female weight coefficient (per kg).
pub const VDA_FEMALE_WEIGHT_COEF: f64 = 0.0064;

/// Female height coefficient (per cm).
pub const VDA_FEMALE_HEIGHT_COEF: f64 = 0.0045;

/// Female plausible range.
pub const VDA_FEMALE_MIN: f64 = 0.44;
pub const VDA_FEMALE_MAX: f64 = 0.80;

/// Male weight coefficient (per kg).
pub const VDA_MALE_WEIGHT_COEF: f64 = 0.0048;

/// Male height coefficient (per cm).
pub const VDA_MALE_HEIGHT_COEF: f64 = 0.0046;

/// Male plausible range.
pub const VDA_MALE_MIN: f64 = 0.60;
pub const VDA_MALE_MAX: f64 = 0.87;

// ─────────────────────────────────────────────────────────────────────────────
// Elimination
// ─────────────────────────────────────────────────────────────────────────────

/// Baseline elimination rate at zero BAC (permille per hour).
pub const AER_FEMALE_BASE: f64 = 0.17;
pub const AER_MALE_BASE: f64 = 0.15;

/// Increase in elimination rate per permille of current BAC.
pub const AER_BAC_SLOPE: f64 = 0.05;

// ─────────────────────────────────────────────────────────────────────────────
// Simulation defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Concentrations below this are reported as exactly zero.
pub const DEFAULT_ZERO_THRESHOLD: f64 = 0.01;

/// An intake counts as fully absorbed once within this many grams of its total.
pub const DEFAULT_ABSORPTION_EPSILON: f64 = 1e-6;

/// Step cap for each simulation phase.
pub const DEFAULT_MAX_STEPS: usize = 100_000;
