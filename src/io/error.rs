//! Error types for chain assembly, subdivision and image input

use crate::geometry::Direction;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all subdivision operations
#[derive(Debug)]
pub enum SubdivisionError {
    /// A path was appended while it still belonged to another chain
    AlreadyAttached,

    /// A square was asked to split with an in/out pair that has no subdivision
    ///
    /// Happens when the exit point coincides with the entry point, such as
    /// travelling west in and east out.
    UnexpectedDirections {
        /// Direction of travel into the cell
        input: Direction,
        /// Direction of travel out of the cell
        output: Direction,
    },

    /// A path id that was not issued by the chain it was used with
    UnknownPath {
        /// Arena index of the offending id
        index: usize,
    },

    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SubdivisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyAttached => {
                f.write_str("Path cannot be appended if it is already attached.")
            }
            Self::UnexpectedDirections { input, output } => {
                write!(f, "Unexpected in/out directions: {input}, {output}.")
            }
            Self::UnknownPath { index } => {
                write!(f, "Path {index} does not belong to this chain")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SubdivisionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for subdivision results
pub type Result<T> = std::result::Result<T, SubdivisionError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SubdivisionError {
    SubdivisionError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
