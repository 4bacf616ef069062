//! Plane geometry shared by both subdivision shapes
//!
//! Coordinates follow image conventions: x grows to the east and y grows to
//! the south, so `North` is the side of a cell with the smallest y.

/// Axis-aligned square cells and their quadrants
pub mod cell;
/// Eight-way compass directions
pub mod direction;
/// Immutable 2D points
pub mod point;

pub use cell::{Cell, Quadrant};
pub use direction::Direction;
pub use point::Point;
