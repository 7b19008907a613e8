//! Rectangular grid of puzzle cells.
//!
//! Cells are stored row-major in a flat vector. Row 0 is the top of the
//! puzzle and column 0 its left edge.

use std::ops::{Index, IndexMut};

use crate::edge::{PieceLabel, Side};

/// A (row, column) position in the grid.
pub type Cell = (usize, usize);

/// A `rows` x `columns` matrix of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    columns: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `value`.
    pub fn new(rows: usize, columns: usize, value: T) -> Self {
        Self {
            rows,
            columns,
            cells: vec![value; rows * columns],
        }
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Converts a cell position to its index in the flat storage.
    #[inline(always)]
    pub fn cell_to_idx(&self, (row, col): Cell) -> usize {
        row * self.columns + col
    }

    /// Converts a flat index back to a cell position.
    #[inline(always)]
    pub fn idx_to_cell(&self, idx: usize) -> Cell {
        (idx / self.columns, idx % self.columns)
    }

    pub fn get(&self, (row, col): Cell) -> Option<&T> {
        if row < self.rows && col < self.columns {
            self.cells.get(row * self.columns + col)
        } else {
            None
        }
    }

    /// Whether `side` of the cell lies on the outer border of the grid.
    #[inline]
    pub fn is_boundary(&self, (row, col): Cell, side: Side) -> bool {
        match side {
            Side::Top => row == 0,
            Side::Right => col + 1 == self.columns,
            Side::Bottom => row + 1 == self.rows,
            Side::Left => col == 0,
        }
    }

    /// The neighbor across `side`, or `None` on the border.
    pub fn neighbor(&self, cell: Cell, side: Side) -> Option<Cell> {
        if self.is_boundary(cell, side) {
            return None;
        }
        let (dr, dc) = side.offset();
        Some((
            cell.0.checked_add_signed(dr)?,
            cell.1.checked_add_signed(dc)?,
        ))
    }

    /// Iterates over all cells in row-major order with their positions.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, value)| (self.idx_to_cell(idx), value))
    }

    /// Iterates over the rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks(self.columns.max(1))
    }
}

impl<T> Index<Cell> for Grid<T> {
    type Output = T;

    fn index(&self, cell: Cell) -> &T {
        let idx = self.cell_to_idx(cell);
        &self.cells[idx]
    }
}

impl<T> IndexMut<Cell> for Grid<T> {
    fn index_mut(&mut self, cell: Cell) -> &mut T {
        let idx = self.cell_to_idx(cell);
        &mut self.cells[idx]
    }
}

/// Formats a label grid as text, one line per row.
///
/// Each piece prints as its four edge symbols in (top, right, bottom, left)
/// order: `O` tab, `I` socket, `-` flat.
pub fn format_labels(grid: &Grid<PieceLabel>) -> String {
    let mut output = String::new();
    for row in grid.row_slices() {
        let line: Vec<String> = row.iter().map(PieceLabel::code).collect();
        output.push_str(&line.join(" "));
        output.push('\n');
    }
    output
}

/// Formats a label grid as shape class names, one line per row.
pub fn format_class_names(grid: &Grid<PieceLabel>) -> String {
    let mut output = String::new();
    for row in grid.row_slices() {
        let line: Vec<String> = row.iter().map(PieceLabel::class_name).collect();
        output.push_str(&line.join(" "));
        output.push('\n');
    }
    output
}
