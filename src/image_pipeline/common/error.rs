use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestorationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Empty input raster: width={0}, height={1}")]
    EmptyInput(usize, usize),

    #[error("Raster buffer has {actual} samples, expected {expected}")]
    InvalidBufferLength { expected: usize, actual: usize },

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RestorationError>;
