//! The contract shared by square and triangle segments

use crate::geometry::Point;
use crate::io::error::Result;
use crate::io::image::{Image, Measurement};
use crate::path::width::stroke_width;
use rand::Rng;

/// One piece of the stroke: a region entered at one point and left at another
///
/// Implementors only describe shape. Chain membership lives in
/// [`Chain`](crate::path::Chain), so equality between segments compares
/// geometry alone.
pub trait Segment: Sized {
    /// Point where the stroke enters the region
    fn entry(&self) -> Point;

    /// Point where the stroke leaves the region
    fn exit(&self) -> Point;

    /// Sample the region this segment covers
    fn measure<I: Image + ?Sized>(&self, image: &I) -> Measurement;

    /// Subdivide into children ordered from this segment's entry to its exit
    ///
    /// The first child enters where this segment enters, the last child exits
    /// where it exits, and each child exits where the next one enters.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment's geometry has no defined subdivision
    fn split<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Self>>;

    /// Straight-line distance from entry to exit
    fn length(&self) -> f64 {
        self.entry().distance_to(self.exit())
    }

    /// `[entry_x, entry_y, exit_x, exit_y]`
    fn coordinates(&self) -> [f64; 4] {
        let (entry, exit) = (self.entry(), self.exit());
        [entry.x(), entry.y(), exit.x(), exit.y()]
    }

    /// Stroke width that carries this region's ink along the segment
    fn optimal_width<I: Image + ?Sized>(&self, image: &I) -> f64 {
        let measurement = self.measure(image);
        stroke_width(measurement.intensity, measurement.area, self.length())
    }
}
