//! Error types for labelmorph

use thiserror::Error;

/// Main error type for labelmorph operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid grid dimensions: {nx}x{ny}x{nz}")]
    InvalidDimensions { nx: usize, ny: usize, nz: usize },

    #[error("Index out of bounds: {index:?} in grid of size {dimensions:?}")]
    IndexOutOfBounds {
        index: [usize; 3],
        dimensions: [usize; 3],
    },

    #[error("Grid size mismatch: expected {expected:?}, got {actual:?}")]
    SizeMismatch {
        expected: [usize; 3],
        actual: [usize; 3],
    },

    #[error("Input not ready: {reference} ({reason})")]
    InputNotReady { reference: String, reason: String },

    #[error("Image geometry does not match: {attribute}[{axis}] {primary} vs {secondary}")]
    GeometryMismatch {
        attribute: &'static str,
        axis: &'static str,
        primary: f64,
        secondary: f64,
    },

    #[error("Unsupported morphology operation code: {0}")]
    UnsupportedOperation(i32),

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Algorithm error: {0}")]
    Algorithm(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for labelmorph operations
pub type Result<T> = std::result::Result<T, Error>;
