//! Single-stroke line art by recursive subdivision
//!
//! A raster image is traced by one closed path made of short segments. Each
//! segment crosses a region of the image, either a square cell or a
//! triangular wedge, and can be split into smaller segments that cross the
//! same region and still join head to tail. Sampling the image over a
//! segment's region gives the stroke width that reproduces its tone.

#![forbid(unsafe_code)]

/// Points, compass directions and square cells
pub mod geometry;
/// Input/output operations, image sampling and error handling
pub mod io;
/// Circular chain of segments and the square and triangle subdivisions
pub mod path;

pub use io::error::{Result, SubdivisionError};
