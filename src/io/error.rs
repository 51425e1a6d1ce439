//! Error types for tile loading, synthesis and the service facade

use crate::spatial::grid::CellPosition;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all synthesis operations
#[derive(Debug)]
pub enum SynthesisError {
    /// Failed to decode a tile image from the tile directory
    TileLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Tile set doesn't meet the solver's requirements
    ///
    /// Raised for an empty tile directory or tiles of differing pixel sizes.
    InvalidTileSet {
        /// Description of what's wrong with the tile set
        reason: String,
    },

    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Request body is not the expected JSON document
    MalformedRequest {
        /// Underlying JSON parsing error
        source: serde_json::Error,
    },

    /// Solver exhausted its attempt budget without a full solution
    Unsolved {
        /// Number of attempts made
        attempts: usize,
        /// Cell whose superposition emptied during the last attempt
        contradiction: Option<CellPosition>,
    },

    /// Failed to encode a rendered image
    ImageEncode {
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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

    /// HTTP server failed to bind or serve
    Server {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl SynthesisError {
    /// Whether the error was caused by the caller's input rather than the service
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::MalformedRequest { .. }
        )
    }
}

impl fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TileLoad { path, source } => {
                write!(f, "Failed to load tile '{}': {source}", path.display())
            }
            Self::InvalidTileSet { reason } => {
                write!(f, "Invalid tile set: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::MalformedRequest { source } => {
                write!(f, "Malformed request body: {source}")
            }
            Self::Unsolved {
                attempts,
                contradiction,
            } => {
                write!(f, "No solution found within {attempts} attempts")?;
                if let Some(position) = contradiction {
                    write!(f, " (last contradiction at {position})")?;
                }
                Ok(())
            }
            Self::ImageEncode { source } => {
                write!(f, "Failed to encode image: {source}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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
            Self::Server { operation, source } => {
                write!(f, "Server error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for SynthesisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TileLoad { source, .. }
            | Self::ImageEncode { source }
            | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } | Self::Server { source, .. } => Some(source),
            Self::MalformedRequest { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for synthesis results
pub type Result<T> = std::result::Result<T, SynthesisError>;

impl From<serde_json::Error> for SynthesisError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedRequest { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SynthesisError {
    SynthesisError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid tile set error
pub fn invalid_tile_set(reason: &impl ToString) -> SynthesisError {
    SynthesisError::InvalidTileSet {
        reason: reason.to_string(),
    }
}
