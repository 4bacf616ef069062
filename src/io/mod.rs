/// Command-line parsing and uniform refinement of a start path
pub mod cli;
/// Subdivision constants and CLI defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Image sampling over triangles and square cells
pub mod image;
/// Progress display for refinement rounds
pub mod progress;
