//! Error type shared by the generator and the layout helpers.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error("invalid puzzle dimensions {rows}x{columns}: rows and columns must be at least 1")]
    InvalidDimensions { rows: i64, columns: i64 },
    #[error("invalid image size {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },
}
