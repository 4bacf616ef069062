//! Tests for subdivision constants

#[cfg(test)]
mod tests {
    use art_path::io::configuration::{
        DEFAULT_ROUNDS, MAX_ROUNDS, SPLIT_FRACTION_MAX, SPLIT_FRACTION_MIN, START_SEED,
        WIDTH_PRECISION,
    };

    // Tests the split range is a proper sub-interval of the unit interval
    #[test]
    fn test_split_fraction_range() {
        assert!(SPLIT_FRACTION_MIN > 0.0);
        assert!(SPLIT_FRACTION_MIN < SPLIT_FRACTION_MAX);
        assert!(SPLIT_FRACTION_MAX < 1.0);
    }

    // Tests default rounds are accepted by the CLI limit
    #[test]
    fn test_rounds_defaults() {
        assert!(DEFAULT_ROUNDS > 0);
        assert!(DEFAULT_ROUNDS <= MAX_ROUNDS);
    }

    // Tests fixed values shared with the start paths and report
    #[test]
    fn test_fixed_values() {
        assert_eq!(START_SEED, 0);
        assert_eq!(WIDTH_PRECISION, 3);
    }
}
