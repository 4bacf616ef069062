//! Chain of stroke segments and the two shapes that subdivide it

/// Arena-backed circular chain of segments
pub mod chain;
/// Contract shared by every segment shape
pub mod segment;
/// Square cells split into four quadrants
pub mod square;
/// Triangular wedges split in two
pub mod triangle;
/// Stroke width estimation
pub mod width;

pub use chain::{Chain, PathId, StartPath};
pub use segment::Segment;
pub use square::SquarePath;
pub use triangle::TrianglePath;
