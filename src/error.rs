use thiserror::Error;

/// Failures of the geometric core and of the raster sink.
#[derive(Debug, Error)]
pub enum Error {
    /// Matrix or tuple operation invoked on incompatible shapes.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("index ({row}, {col}) is out of bounds")]
    IndexOutOfBounds { row: usize, col: usize },

    /// Operation invoked on the wrong kind of tuple or a degenerate argument.
    #[error("invalid operand: {0}")]
    InvalidOperand(&'static str),

    #[error("matrix is not invertible (determinant is zero)")]
    NotInvertible,

    #[error("world has no light source")]
    NoLightSource,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to encode png: {0}")]
    PngEncoding(#[from] png::EncodingError),
}

pub type Result<T> = std::result::Result<T, Error>;
