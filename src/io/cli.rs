//! Command-line interface for subdividing an image's start path and reporting the result

use crate::io::configuration::{DEFAULT_ROUNDS, MAX_ROUNDS, START_SEED, WIDTH_PRECISION};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{Image, RasterImage};
use crate::io::progress::RefinementProgress;
use crate::path::{PathId, Segment, SquarePath, StartPath, TrianglePath};
use clap::{Parser, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};
use std::fmt;
use std::path::PathBuf;

/// Cell shape used to subdivide the image
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    /// Four wedges around the image centre, each split in two per round
    Triangle,
    /// Four squares over the largest top-left square, each split in four per round
    Square,
}

#[derive(Parser, Debug)]
#[command(name = "art-path")]
#[command(
    author,
    version,
    about = "Subdivide an image into one continuous stroke and report its segments"
)]
/// Command-line arguments for the subdivision inspector
pub struct Cli {
    /// Input image to measure
    #[arg(value_name = "IMAGE")]
    pub target: PathBuf,

    /// Cell shape of the start path
    #[arg(short = 'S', long, value_enum, default_value_t = Shape::Triangle)]
    pub shape: Shape,

    /// Number of rounds; each round splits every segment once
    #[arg(short, long, default_value_t = DEFAULT_ROUNDS)]
    pub rounds: usize,

    /// Random seed for triangle split points
    #[arg(short, long, default_value_t = START_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Segments of a refined chain in stroke order
#[derive(Clone, Debug, Default)]
pub struct Report {
    /// One `<segment> width=<w>` line per segment
    pub lines: Vec<String>,
    /// Sum of segment lengths
    pub total_length: f64,
}

impl Report {
    /// Number of segments in the chain
    pub fn segments(&self) -> usize {
        self.lines.len()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        write!(
            f,
            "{} segments, total length {:.prec$}",
            self.segments(),
            self.total_length,
            prec = WIDTH_PRECISION
        )
    }
}

/// Loads an image, refines a start path over it and reports every segment
///
/// Refinement is uniform: each round splits every segment of the chain once.
pub struct ChainProcessor {
    cli: Cli,
}

impl ChainProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the target image and refine over it
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be loaded, has no pixels, or the
    /// round count exceeds the limit
    pub fn process(&self) -> Result<Report> {
        let image = RasterImage::open(&self.cli.target)?;
        let (width, height) = (image.width(), image.height());
        self.run(&image, width, height)
    }

    /// Refine a start path sized `width` x `height` and measure it against `image`
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the round count
    /// exceeds the limit
    pub fn run<I: Image + ?Sized>(
        &self,
        image: &I,
        width: usize,
        height: usize,
    ) -> Result<Report> {
        if self.cli.rounds > MAX_ROUNDS {
            return Err(invalid_parameter(
                "rounds",
                &self.cli.rounds,
                &format!("at most {MAX_ROUNDS} rounds are supported"),
            ));
        }
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "image",
                &format!("{width}x{height}"),
                &"image has no pixels",
            ));
        }

        let rng = StdRng::seed_from_u64(self.cli.seed);
        match self.cli.shape {
            Shape::Triangle => {
                let start = TrianglePath::create_start_path(width as f64, height as f64);
                self.refine(StartPath { rng, ..start }, image, "triangles")
            }
            Shape::Square => {
                let size = width.min(height) as f64;
                let start = SquarePath::create_start_path(size);
                self.refine(StartPath { rng, ..start }, image, "squares")
            }
        }
    }

    fn refine<S, I>(&self, mut start: StartPath<S>, image: &I, name: &str) -> Result<Report>
    where
        S: Segment + fmt::Display,
        I: Image + ?Sized,
    {
        let progress = self
            .cli
            .should_show_progress()
            .then(|| RefinementProgress::new(name, self.cli.rounds));

        for round in 1..=self.cli.rounds {
            let ids: Vec<PathId> = start
                .chain
                .iter_from(start.head)
                .map(|(id, _)| id)
                .collect();
            for id in ids {
                let children = start.chain.split(id, &mut start.rng)?;
                if id == start.head
                    && let Some(&first) = children.first()
                {
                    start.head = first;
                }
            }

            if let Some(ref pm) = progress {
                pm.update(round, start.chain.cycle_len(start.head));
            }
        }

        if let Some(ref pm) = progress {
            pm.finish();
        }

        let lines = start
            .chain
            .iter_from(start.head)
            .map(|(_, segment)| {
                format!(
                    "{segment} width={:.prec$}",
                    segment.optimal_width(image),
                    prec = WIDTH_PRECISION
                )
            })
            .collect();

        Ok(Report {
            lines,
            total_length: start.chain.total_length(start.head),
        })
    }
}
