//! Subdivision constants and runtime configuration defaults

/// Seed for the generator shared by a start path's triangle splits
pub const START_SEED: u64 = 0;

// A triangle is never cut closer than a quarter of an edge to either end
/// Smallest fraction along an edge where a triangle may be cut
pub const SPLIT_FRACTION_MIN: f64 = 0.25;
/// Upper bound (exclusive) of the fraction where a triangle may be cut
pub const SPLIT_FRACTION_MAX: f64 = 0.75;

/// Default number of uniform refinement rounds for the CLI
pub const DEFAULT_ROUNDS: usize = 4;

// Squares quadruple every round, so ten rounds already reach four million nodes
/// Maximum number of uniform refinement rounds accepted by the CLI
pub const MAX_ROUNDS: usize = 10;

/// Decimal places used when reporting stroke widths
pub const WIDTH_PRECISION: usize = 3;
