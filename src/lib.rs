//! Jigsaw Puzzle Library
//!
//! Computes the piece shapes of a jigsaw puzzle cut from an image: which
//! side of every piece carries a tab, a socket, or a straight border edge.
//! Also provides the pixel layout of the pieces and a progress tracker for
//! a puzzle being solved. Rendering and input handling belong to the caller.

pub mod census;
pub mod edge;
pub mod error;
pub mod generator;
pub mod grid;
pub mod layout;
pub mod session;

pub use edge::{EdgeState, PieceLabel, Side};
pub use error::PuzzleError;
pub use generator::{generate, PieceTypeGenerator};
pub use grid::Grid;
