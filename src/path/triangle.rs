//! Triangular wedges that split in two at a randomized point

use crate::geometry::Point;
use crate::io::configuration::{SPLIT_FRACTION_MAX, SPLIT_FRACTION_MIN, START_SEED};
use crate::io::error::Result;
use crate::io::image::{Image, Measurement};
use crate::path::chain::StartPath;
use crate::path::segment::Segment;
use rand::Rng;
use std::fmt;

/// A triangle crossed from a point on one edge to a point on another
///
/// The fulcrum is the vertex shared by both crossed edges: the entry lies on
/// the edge from the fulcrum to the entry vertex, and the exit on the edge
/// from the fulcrum to the exit vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrianglePath {
    fulcrum: Point,
    entry_vertex: Point,
    exit_vertex: Point,
    entry: Point,
    exit: Point,
}

impl TrianglePath {
    /// Create a wedge from its three corners and the points the stroke crosses
    pub const fn new(
        fulcrum: Point,
        entry_vertex: Point,
        exit_vertex: Point,
        entry: Point,
        exit: Point,
    ) -> Self {
        Self {
            fulcrum,
            entry_vertex,
            exit_vertex,
            entry,
            exit,
        }
    }

    /// Vertex adjacent to both the entry and the exit
    pub const fn fulcrum(&self) -> Point {
        self.fulcrum
    }

    /// Vertex adjacent only to the entry
    pub const fn entry_vertex(&self) -> Point {
        self.entry_vertex
    }

    /// Vertex adjacent only to the exit
    pub const fn exit_vertex(&self) -> Point {
        self.exit_vertex
    }

    /// Four wedges fanning out from the centre of a `width` x `height` frame
    ///
    /// Each wedge spans one side of the frame and is crossed between the
    /// midpoints of its two spokes. The loop runs north, east, south, west
    /// and back, and its generator is seeded with a fixed value so every
    /// run subdivides identically.
    pub fn create_start_path(width: f64, height: f64) -> StartPath<Self> {
        let centre = Point::new(width / 2.0, height / 2.0);
        let north_west = Point::new(0.0, 0.0);
        let north_east = Point::new(width, 0.0);
        let south_east = Point::new(width, height);
        let south_west = Point::new(0.0, height);
        let spoke = |corner: Point| centre.move_toward(corner, 0.5);

        StartPath::new(
            [
                Self::new(
                    centre,
                    north_west,
                    north_east,
                    spoke(north_west),
                    spoke(north_east),
                ),
                Self::new(
                    centre,
                    north_east,
                    south_east,
                    spoke(north_east),
                    spoke(south_east),
                ),
                Self::new(
                    centre,
                    south_east,
                    south_west,
                    spoke(south_east),
                    spoke(south_west),
                ),
                Self::new(
                    centre,
                    south_west,
                    north_west,
                    spoke(south_west),
                    spoke(north_west),
                ),
            ],
            START_SEED,
        )
    }
}

impl Segment for TrianglePath {
    fn entry(&self) -> Point {
        self.entry
    }

    fn exit(&self) -> Point {
        self.exit
    }

    fn measure<I: Image + ?Sized>(&self, image: &I) -> Measurement {
        image.measure_triangle(self.fulcrum, self.entry_vertex, self.exit_vertex)
    }

    /// Cut across the longest edge
    ///
    /// Ties go to the edge opposite the fulcrum, then to the exit edge. A base
    /// point is placed on the chosen edge and the new crossing point between
    /// the base and the remaining vertex, each at a random fraction drawn
    /// from `rng`.
    fn split<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Self>> {
        let entry_edge = self.fulcrum.distance_squared_to(self.entry_vertex);
        let exit_edge = self.fulcrum.distance_squared_to(self.exit_vertex);
        let opposite_edge = self.entry_vertex.distance_squared_to(self.exit_vertex);

        if opposite_edge >= exit_edge && opposite_edge >= entry_edge {
            let base = self
                .entry_vertex
                .move_toward(self.exit_vertex, split_fraction(rng));
            let crossing = self.fulcrum.move_toward(base, split_fraction(rng));
            return Ok(vec![
                Self::new(self.fulcrum, self.entry_vertex, base, self.entry, crossing),
                Self::new(self.fulcrum, base, self.exit_vertex, crossing, self.exit),
            ]);
        }

        // The base stays between the fulcrum and the exit so the exit remains
        // on the second child's exit edge.
        if exit_edge >= entry_edge {
            let base = self.fulcrum.move_toward(self.exit, split_fraction(rng));
            let crossing = self.entry_vertex.move_toward(base, split_fraction(rng));
            return Ok(vec![
                Self::new(self.entry_vertex, self.fulcrum, base, self.entry, crossing),
                Self::new(base, self.entry_vertex, self.exit_vertex, crossing, self.exit),
            ]);
        }

        let base = self.fulcrum.move_toward(self.entry, split_fraction(rng));
        let crossing = self.exit_vertex.move_toward(base, split_fraction(rng));
        Ok(vec![
            Self::new(base, self.entry_vertex, self.exit_vertex, self.entry, crossing),
            Self::new(self.exit_vertex, base, self.fulcrum, crossing, self.exit),
        ])
    }
}

fn split_fraction<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random_range(SPLIT_FRACTION_MIN..SPLIT_FRACTION_MAX)
}

impl fmt::Display for TrianglePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TrianglePath({}, {}, {}, {}->{})",
            self.fulcrum, self.entry_vertex, self.exit_vertex, self.entry, self.exit
        )
    }
}
