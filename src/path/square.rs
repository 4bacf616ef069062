//! Square segments that split into four quadrants

use crate::geometry::{Cell, Direction, Point, Quadrant};
use crate::io::configuration::START_SEED;
use crate::io::error::{Result, SubdivisionError};
use crate::io::image::{Image, Measurement};
use crate::path::chain::StartPath;
use crate::path::segment::Segment;
use rand::Rng;
use std::fmt;

/// A square cell crossed from one side to another
///
/// Directions are directions of travel: a path moving `East` into the cell
/// enters through its west edge, and a path leaving `NorthEast` exits through
/// its north-east corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SquarePath {
    cell: Cell,
    input: Direction,
    output: Direction,
}

impl SquarePath {
    /// Create a segment crossing `cell`, travelling `input` on the way in and `output` on the way out
    pub const fn new(cell: Cell, input: Direction, output: Direction) -> Self {
        Self {
            cell,
            input,
            output,
        }
    }

    /// Region covered by the segment
    pub const fn cell(&self) -> Cell {
        self.cell
    }

    /// Direction of travel into the cell
    pub const fn input(&self) -> Direction {
        self.input
    }

    /// Direction of travel out of the cell
    pub const fn output(&self) -> Direction {
        self.output
    }

    /// Closed loop of four squares covering `[0, size]` in both axes
    ///
    /// The loop runs down the west half and back up the east half, so every
    /// square exits where the next one enters. The generator is seeded like
    /// the triangle start path; squares never draw from it.
    pub fn create_start_path(size: f64) -> StartPath<Self> {
        let half = size / 2.0;
        StartPath::new(
            [
                Self::new(
                    Cell::new(0.0, 0.0, half, half),
                    Direction::West,
                    Direction::South,
                ),
                Self::new(
                    Cell::new(0.0, half, half, size),
                    Direction::South,
                    Direction::East,
                ),
                Self::new(
                    Cell::new(half, half, size, size),
                    Direction::East,
                    Direction::North,
                ),
                Self::new(
                    Cell::new(half, 0.0, size, half),
                    Direction::North,
                    Direction::West,
                ),
            ],
            START_SEED,
        )
    }
}

impl Segment for SquarePath {
    fn entry(&self) -> Point {
        self.cell.resolve(self.input.opposite())
    }

    fn exit(&self) -> Point {
        self.cell.resolve(self.output)
    }

    fn measure<I: Image + ?Sized>(&self, image: &I) -> Measurement {
        image.measure_cell(&self.cell)
    }

    fn split<R: Rng + ?Sized>(&self, _rng: &mut R) -> Result<Vec<Self>> {
        let children = subdivision(self.input, self.output).ok_or(
            SubdivisionError::UnexpectedDirections {
                input: self.input,
                output: self.output,
            },
        )?;

        Ok(children
            .iter()
            .map(|&(quadrant, input, output)| {
                Self::new(self.cell.quadrant(quadrant), input, output)
            })
            .collect())
    }
}

impl fmt::Display for SquarePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SquarePath({}, {}, {})", self.cell, self.input, self.output)
    }
}

/// Ordered (quadrant, in, out) children for an (in, out) pair
///
/// Covers every pair whose exit point differs from its entry point. Children
/// of every entry are themselves entries, so repeated splitting never runs
/// out of table. Pairs with `output == input.opposite()` enter and exit at
/// the same point and have no entry.
const fn subdivision(
    input: Direction,
    output: Direction,
) -> Option<[(Quadrant, Direction, Direction); 4]> {
    const N: Direction = Direction::North;
    const S: Direction = Direction::South;
    const E: Direction = Direction::East;
    const W: Direction = Direction::West;
    const NE: Direction = Direction::NorthEast;
    const NW: Direction = Direction::NorthWest;
    const SE: Direction = Direction::SouthEast;
    const SW: Direction = Direction::SouthWest;
    const QNW: Quadrant = Quadrant::NorthWest;
    const QNE: Quadrant = Quadrant::NorthEast;
    const QSW: Quadrant = Quadrant::SouthWest;
    const QSE: Quadrant = Quadrant::SouthEast;

    let children = match (input, output) {
        (N, N) => [(QSW, NW, N), (QNW, N, SE), (QSE, SE, N), (QNE, N, NW)],
        (N, NE) => [(QSW, NW, N), (QNW, N, SE), (QSE, SE, N), (QNE, N, NE)],
        (N, E) => [(QSW, NW, N), (QNW, N, E), (QNE, E, S), (QSE, S, NE)],
        (N, SE) => [(QSW, NW, N), (QNW, N, E), (QNE, E, S), (QSE, S, SE)],
        (N, SW) => [(QSE, NE, N), (QNE, N, W), (QNW, W, S), (QSW, S, SW)],
        (N, W) => [(QSE, NE, N), (QNE, N, W), (QNW, W, S), (QSW, S, NW)],
        (N, NW) => [(QSE, NE, N), (QNE, N, SW), (QSW, SW, N), (QNW, N, NW)],
        (NE, N) => [(QSW, NE, N), (QNW, N, SE), (QSE, SE, N), (QNE, N, NW)],
        (NE, NE) => [(QSW, NE, N), (QNW, N, SE), (QSE, SE, N), (QNE, N, NE)],
        (NE, E) => [(QSW, NE, E), (QSE, E, NW), (QNW, NW, E), (QNE, E, SE)],
        (NE, SE) => [(QSW, NE, N), (QNW, N, E), (QNE, E, S), (QSE, S, SE)],
        (NE, S) => [(QSW, NE, N), (QNW, N, E), (QNE, E, S), (QSE, S, SW)],
        (NE, W) => [(QSW, NE, E), (QSE, E, N), (QNE, N, W), (QNW, W, SW)],
        (NE, NW) => [(QSW, NE, E), (QSE, E, N), (QNE, N, W), (QNW, W, NW)],
        (E, N) => [(QSW, SE, E), (QSE, E, N), (QNE, N, W), (QNW, W, NE)],
        (E, NE) => [(QSW, SE, E), (QSE, E, NW), (QNW, NW, E), (QNE, E, NE)],
        (E, E) => [(QNW, NE, E), (QNE, E, SW), (QSW, SW, E), (QSE, E, NE)],
        (E, SE) => [(QNW, NE, E), (QNE, E, SW), (QSW, SW, E), (QSE, E, SE)],
        (E, S) => [(QNW, NE, E), (QNE, E, S), (QSE, S, W), (QSW, W, SE)],
        (E, SW) => [(QNW, NE, E), (QNE, E, S), (QSE, S, W), (QSW, W, SW)],
        (E, NW) => [(QSW, SE, E), (QSE, E, N), (QNE, N, W), (QNW, W, NW)],
        (SE, N) => [(QNW, SE, S), (QSW, S, E), (QSE, E, N), (QNE, N, NW)],
        (SE, NE) => [(QNW, SE, S), (QSW, S, E), (QSE, E, N), (QNE, N, NE)],
        (SE, E) => [(QNW, SE, E), (QNE, E, SW), (QSW, SW, E), (QSE, E, NE)],
        (SE, SE) => [(QNW, SE, E), (QNE, E, SW), (QSW, SW, E), (QSE, E, SE)],
        (SE, S) => [(QNW, SE, S), (QSW, S, NE), (QNE, NE, S), (QSE, S, SW)],
        (SE, SW) => [(QNW, SE, E), (QNE, E, S), (QSE, S, W), (QSW, W, SW)],
        (SE, W) => [(QNW, SE, E), (QNE, E, S), (QSE, S, W), (QSW, W, NW)],
        (S, NE) => [(QNW, SW, S), (QSW, S, E), (QSE, E, N), (QNE, N, NE)],
        (S, E) => [(QNW, SW, S), (QSW, S, E), (QSE, E, N), (QNE, N, SE)],
        (S, SE) => [(QNW, SW, S), (QSW, S, NE), (QNE, NE, S), (QSE, S, SE)],
        (S, S) => [(QNE, SE, S), (QSE, S, NW), (QNW, NW, S), (QSW, S, SE)],
        (S, SW) => [(QNE, SE, S), (QSE, S, NW), (QNW, NW, S), (QSW, S, SW)],
        (S, W) => [(QNE, SE, S), (QSE, S, W), (QSW, W, N), (QNW, N, SW)],
        (S, NW) => [(QNE, SE, S), (QSE, S, W), (QSW, W, N), (QNW, N, NW)],
        (SW, N) => [(QNE, SW, S), (QSE, S, W), (QSW, W, N), (QNW, N, NE)],
        (SW, E) => [(QNE, SW, W), (QNW, W, S), (QSW, S, E), (QSE, E, NE)],
        (SW, SE) => [(QNE, SW, W), (QNW, W, S), (QSW, S, E), (QSE, E, SE)],
        (SW, S) => [(QNE, SW, S), (QSE, S, NW), (QNW, NW, S), (QSW, S, SE)],
        (SW, SW) => [(QNE, SW, S), (QSE, S, NW), (QNW, NW, S), (QSW, S, SW)],
        (SW, W) => [(QNE, SW, W), (QNW, W, SE), (QSE, SE, W), (QSW, W, NW)],
        (SW, NW) => [(QNE, SW, S), (QSE, S, W), (QSW, W, N), (QNW, N, NW)],
        (W, N) => [(QSE, SW, W), (QSW, W, N), (QNW, N, E), (QNE, E, NW)],
        (W, NE) => [(QSE, SW, W), (QSW, W, N), (QNW, N, E), (QNE, E, NE)],
        (W, SE) => [(QNE, NW, W), (QNW, W, S), (QSW, S, E), (QSE, E, SE)],
        (W, S) => [(QNE, NW, W), (QNW, W, S), (QSW, S, E), (QSE, E, SW)],
        (W, SW) => [(QNE, NW, W), (QNW, W, SE), (QSE, SE, W), (QSW, W, SW)],
        (W, W) => [(QSE, SW, W), (QSW, W, NE), (QNE, NE, W), (QNW, W, SW)],
        (W, NW) => [(QSE, SW, W), (QSW, W, NE), (QNE, NE, W), (QNW, W, NW)],
        (NW, N) => [(QSE, NW, N), (QNE, N, SW), (QSW, SW, N), (QNW, N, NE)],
        (NW, NE) => [(QSE, NW, W), (QSW, W, N), (QNW, N, E), (QNE, E, NE)],
        (NW, E) => [(QSE, NW, W), (QSW, W, N), (QNW, N, E), (QNE, E, SE)],
        (NW, S) => [(QSE, NW, N), (QNE, N, W), (QNW, W, S), (QSW, S, SE)],
        (NW, SW) => [(QSE, NW, N), (QNE, N, W), (QNW, W, S), (QSW, S, SW)],
        (NW, W) => [(QSE, NW, W), (QSW, W, NE), (QNE, NE, W), (QNW, W, SW)],
        (NW, NW) => [(QSE, NW, W), (QSW, W, NE), (QNE, NE, W), (QNW, W, NW)],
        _ => return None,
    };
    Some(children)
}
