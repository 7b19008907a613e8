//! Geometry of a puzzle cut from an image.
//!
//! Pieces have a logical size (the square of image they own) and a larger
//! real size that leaves room for tabs. All values are in pixels; a piece's
//! real square is centered on its logical square, so it starts `offset`
//! pixels up and to the left of it.

use rand::Rng;

use crate::error::PuzzleError;
use crate::grid::Cell;

/// Available piece sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PieceSize {
    Small,
    #[default]
    Normal,
    Big,
}

impl PieceSize {
    /// Parses a size name; anything unrecognized is `Normal`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "small" => PieceSize::Small,
            "big" => PieceSize::Big,
            _ => PieceSize::Normal,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceSize::Small => "small",
            PieceSize::Normal => "normal",
            PieceSize::Big => "big",
        }
    }

    /// Side of the image square each piece owns.
    pub const fn logical(self) -> i64 {
        match self {
            PieceSize::Small => 25,
            PieceSize::Normal => 50,
            PieceSize::Big => 100,
        }
    }

    /// Side of the drawn piece, tabs included.
    pub const fn real(self) -> i64 {
        match self {
            PieceSize::Small => 43,
            PieceSize::Normal => 86,
            PieceSize::Big => 170,
        }
    }
}

/// Number of rows and columns needed to cover an image.
///
/// Partial pieces on the right and bottom count as whole pieces.
pub fn grid_dimensions(width: u32, height: u32, size: PieceSize) -> Result<(i64, i64), PuzzleError> {
    if width == 0 || height == 0 {
        return Err(PuzzleError::InvalidImageSize { width, height });
    }
    let logical = size.logical();
    let rows = (i64::from(height) + logical - 1) / logical;
    let columns = (i64::from(width) + logical - 1) / logical;
    Ok((rows, columns))
}

/// Pixel geometry shared by every piece of one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceGeometry {
    pub logical: i64,
    pub real: i64,
    pub offset: i64,
}

impl PieceGeometry {
    pub const fn new(size: PieceSize) -> Self {
        let logical = size.logical();
        let real = size.real();
        Self {
            logical,
            real,
            offset: (real - logical) / 2,
        }
    }

    /// Top-left corner of the piece when it sits in its solved position.
    pub fn home_position(&self, (row, col): Cell) -> (i64, i64) {
        (
            -self.offset + col as i64 * self.logical,
            -self.offset + row as i64 * self.logical,
        )
    }

    /// Offset of the image inside the piece so that it shows its own square.
    pub fn background_position(&self, (row, col): Cell) -> (i64, i64) {
        (
            self.offset - col as i64 * self.logical,
            self.offset - row as i64 * self.logical,
        )
    }

    /// Whether a piece dropped `(dx, dy)` away from home snaps into place.
    pub fn is_near_home(&self, dx: i64, dy: i64) -> bool {
        dx.abs() < self.offset && dy.abs() < self.offset
    }
}

/// Extra room around the puzzle area where shuffled pieces may land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShuffleLimits {
    pub left: i64,
    pub right: i64,
    pub top: i64,
    pub bottom: i64,
}

/// Random top-left positions for `count` pieces.
///
/// Positions cover the `width` x `height` puzzle area widened by `limits`,
/// keeping the whole piece inside that area whenever it fits.
pub fn scatter<R: Rng>(
    count: usize,
    width: i64,
    height: i64,
    geometry: &PieceGeometry,
    limits: &ShuffleLimits,
    rng: &mut R,
) -> Vec<(i64, i64)> {
    let span_x = width + limits.left + limits.right - geometry.real;
    let span_y = height + limits.top + limits.bottom - geometry.real;

    let mut draw = |span: i64| if span > 0 { rng.gen_range(0..span) } else { 0 };

    (0..count)
        .map(|_| {
            let x = draw(span_x) - limits.left;
            let y = draw(span_y) - limits.top;
            (x, y)
        })
        .collect()
}
