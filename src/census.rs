//! Shape census of a generated puzzle.
//!
//! Counts how many pieces share each edge pattern, which tells the renderer
//! how many distinct shapes it has to prepare, and how the pieces split into
//! corners, border pieces and interior pieces.

use rustc_hash::FxHashMap;

use crate::edge::PieceLabel;
use crate::grid::Grid;

#[derive(Debug, Clone, Default)]
pub struct ShapeCensus {
    /// Number of pieces per distinct label.
    pub by_label: FxHashMap<PieceLabel, usize>,
    /// Number of pieces per count of flat sides (index 0..=4).
    pub by_flat_count: [usize; 5],
}

impl ShapeCensus {
    pub fn of(grid: &Grid<PieceLabel>) -> Self {
        let mut census = Self::default();
        for (_, label) in grid.iter() {
            *census.by_label.entry(*label).or_insert(0) += 1;
            census.by_flat_count[label.flat_count()] += 1;
        }
        census
    }

    pub fn distinct_shapes(&self) -> usize {
        self.by_label.len()
    }

    pub fn corners(&self) -> usize {
        self.by_flat_count[2]
    }

    pub fn border(&self) -> usize {
        self.by_flat_count[1]
    }

    pub fn interior(&self) -> usize {
        self.by_flat_count[0]
    }

    /// Labels with their counts, most frequent first, ties broken by label.
    pub fn ranked(&self) -> Vec<(PieceLabel, usize)> {
        let mut ranked: Vec<(PieceLabel, usize)> =
            self.by_label.iter().map(|(&label, &count)| (label, count)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
    }
}
