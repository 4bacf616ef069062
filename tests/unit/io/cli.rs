//! Tests for command-line parsing, uniform refinement and the segment report

#[cfg(test)]
mod tests {
    use art_path::SubdivisionError;
    use art_path::io::cli::{ChainProcessor, Cli, Report, Shape};
    use art_path::io::configuration::{DEFAULT_ROUNDS, START_SEED};
    use art_path::io::image::RasterImage;
    use clap::Parser;
    use image::{GrayImage, Luma};
    use ndarray::Array2;
    use std::path::PathBuf;

    fn processor(args: &[&str]) -> ChainProcessor {
        let mut full = vec!["art-path", "input.png", "--quiet"];
        full.extend_from_slice(args);
        ChainProcessor::new(Cli::parse_from(full))
    }

    fn gray(width: usize, height: usize) -> RasterImage {
        RasterImage::from_darkness(Array2::from_elem((height, width), 0.5))
    }

    // Tests CLI parsing with only the required image argument
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["art-path", "test.png"]);

        assert_eq!(cli.target, PathBuf::from("test.png"));
        assert_eq!(cli.shape, Shape::Triangle);
        assert_eq!(cli.rounds, DEFAULT_ROUNDS);
        assert_eq!(cli.seed, START_SEED);
        assert!(!cli.quiet);
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with every argument given
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "art-path", "input.png", "--shape", "square", "--rounds", "3", "--seed", "42",
            "--quiet",
        ]);

        assert_eq!(cli.target, PathBuf::from("input.png"));
        assert_eq!(cli.shape, Shape::Square);
        assert_eq!(cli.rounds, 3);
        assert_eq!(cli.seed, 42);
        assert!(!cli.should_show_progress());
    }

    // Tests unknown shapes are rejected by the parser
    #[test]
    fn test_cli_rejects_unknown_shape() {
        assert!(Cli::try_parse_from(["art-path", "input.png", "--shape", "hexagon"]).is_err());
    }

    // Tests each triangle round doubles the chain
    #[test]
    fn test_run_triangles() -> art_path::Result<()> {
        let report = processor(&["--rounds", "2"]).run(&gray(8, 6), 8, 6)?;

        assert_eq!(report.segments(), 16);
        assert!(report.total_length > 0.0);
        assert!(report.lines.iter().all(|line| line.starts_with("TrianglePath(")));
        Ok(())
    }

    // Tests each square round quadruples the chain
    #[test]
    fn test_run_squares() -> art_path::Result<()> {
        let report = processor(&["--shape", "square", "--rounds", "2"]).run(&gray(8, 8), 8, 8)?;

        assert_eq!(report.segments(), 64);
        assert!(report.lines.iter().all(|line| line.starts_with("SquarePath(")));
        Ok(())
    }

    // Tests squares fit inside the shorter side of the image
    #[test]
    fn test_run_squares_fit_short_side() -> art_path::Result<()> {
        let report = processor(&["--shape", "square", "--rounds", "0"]).run(&gray(12, 8), 12, 8)?;

        assert_eq!(
            report.lines.first().map(String::as_str),
            Some("SquarePath(Cell(0, 0, 4, 4), W, S) width=2.828")
        );
        Ok(())
    }

    // Tests zero rounds report the start loop itself
    #[test]
    fn test_run_zero_rounds() -> art_path::Result<()> {
        let report = processor(&["--rounds", "0"]).run(&gray(8, 4), 8, 4)?;

        assert_eq!(
            report.lines.first().map(String::as_str),
            Some("TrianglePath((4, 2), (0, 0), (8, 0), (2, 1)->(6, 1)) width=1.000")
        );
        assert_eq!(report.segments(), 4);
        Ok(())
    }

    // Tests the same seed reproduces the same report
    #[test]
    fn test_run_deterministic() -> art_path::Result<()> {
        let first = processor(&["--rounds", "3", "--seed", "9"]).run(&gray(16, 16), 16, 16)?;
        let second = processor(&["--rounds", "3", "--seed", "9"]).run(&gray(16, 16), 16, 16)?;
        let other = processor(&["--rounds", "3", "--seed", "10"]).run(&gray(16, 16), 16, 16)?;

        assert_eq!(first.lines, second.lines);
        assert_ne!(first.lines, other.lines);
        Ok(())
    }

    // Tests too many rounds are refused before any work
    #[test]
    fn test_run_rejects_rounds() {
        let result = processor(&["--rounds", "11"]).run(&gray(4, 4), 4, 4);

        assert!(matches!(
            result,
            Err(SubdivisionError::InvalidParameter {
                parameter: "rounds",
                ..
            })
        ));
    }

    // Tests an image without pixels is refused
    #[test]
    fn test_run_rejects_empty_image() {
        let result = processor(&[]).run(&gray(0, 0), 0, 0);

        assert!(matches!(
            result,
            Err(SubdivisionError::InvalidParameter {
                parameter: "image",
                ..
            })
        ));
    }

    // Tests processing loads the target file from disk
    #[test]
    fn test_process_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("black.png");
        GrayImage::from_pixel(8, 8, Luma([0])).save(&path)?;
        let target = path.to_string_lossy().to_string();

        let cli = Cli::parse_from(["art-path", target.as_str(), "--rounds", "1", "--quiet"]);
        let report = ChainProcessor::new(cli).process()?;

        assert_eq!(report.segments(), 8);
        Ok(())
    }

    // Tests the report ends with a summary line
    #[test]
    fn test_report_display() {
        let report = Report {
            lines: vec!["a width=1.000".to_string(), "b width=2.000".to_string()],
            total_length: 3.5,
        };

        assert_eq!(
            report.to_string(),
            "a width=1.000\nb width=2.000\n2 segments, total length 3.500"
        );
    }
}
