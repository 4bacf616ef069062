//! Tests for refinement progress reporting

#[cfg(test)]
mod tests {
    use art_path::io::progress::RefinementProgress;

    // Tests the bar tracks the latest reported round
    #[test]
    fn test_progress_position() {
        let progress = RefinementProgress::new("triangles", 3);
        assert_eq!(progress.position(), 0);

        progress.update(1, 8);
        progress.update(2, 16);
        assert_eq!(progress.position(), 2);

        progress.finish();
    }

    // Tests a zero-round bar can be finished immediately
    #[test]
    fn test_progress_no_rounds() {
        let progress = RefinementProgress::new("squares", 0);

        progress.finish();
        assert_eq!(progress.position(), 0);
    }
}
