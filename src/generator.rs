//! Piece-type generation.
//!
//! Assigns every cell of the grid a tab/socket/flat pattern so that all
//! shared edges interlock and the outer border is straight.
//!
//! The grid graph is bipartite under the parity of `row + col`:
//! - Even cells are labeled first, each side drawn independently at random.
//! - Odd cells are then derived from their already-labeled even neighbors.
//!
//! Adjacent cells always differ in parity, so no two randomly drawn sides
//! ever meet and the second pass cannot conflict.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::edge::{EdgeState, PieceLabel, Side};
use crate::error::PuzzleError;
use crate::grid::{Cell, Grid};

/// Generates piece labels for a `rows` x `columns` puzzle.
///
/// Fails with [`PuzzleError::InvalidDimensions`] if either dimension is less
/// than 1. Output is fully determined by the state of `rng`.
pub fn generate<R: Rng>(
    rows: i64,
    columns: i64,
    rng: &mut R,
) -> Result<Grid<PieceLabel>, PuzzleError> {
    let (row_count, column_count) = validate_dimensions(rows, columns)?;
    debug!(rows, columns, "generating piece types");

    let mut labels = Grid::new(row_count, column_count, PieceLabel::FLAT);
    assign_even_cells(&mut labels, rng);
    derive_odd_cells(&mut labels);

    Ok(labels)
}

fn validate_dimensions(rows: i64, columns: i64) -> Result<(usize, usize), PuzzleError> {
    let invalid = PuzzleError::InvalidDimensions { rows, columns };
    if rows < 1 || columns < 1 {
        return Err(invalid);
    }
    let row_count = usize::try_from(rows).map_err(|_| invalid.clone())?;
    let column_count = usize::try_from(columns).map_err(|_| invalid.clone())?;
    row_count.checked_mul(column_count).ok_or(invalid)?;
    Ok((row_count, column_count))
}

#[inline]
fn is_even(cell: Cell) -> bool {
    (cell.0 + cell.1) % 2 == 0
}

/// First pass: random sides for even cells, flattened on the border.
///
/// Four bits are drawn for every even cell, border or not, so the amount of
/// entropy consumed depends only on the grid size.
fn assign_even_cells<R: Rng>(labels: &mut Grid<PieceLabel>, rng: &mut R) {
    let mut assigned = 0usize;
    for row in 0..labels.rows() {
        for col in 0..labels.columns() {
            let cell = (row, col);
            if !is_even(cell) {
                continue;
            }

            let mut label = PieceLabel::FLAT;
            for side in Side::ALL {
                let state = if rng.gen::<bool>() {
                    EdgeState::Out
                } else {
                    EdgeState::In
                };
                label.set(side, state);
            }

            for side in Side::ALL {
                if labels.is_boundary(cell, side) {
                    label.set(side, EdgeState::Flat);
                }
            }

            labels[cell] = label;
            assigned += 1;
        }
    }
    trace!(assigned, "even pass complete");
}

/// Second pass: each odd cell mirrors its even neighbors.
///
/// Must run after `assign_even_cells` has labeled every even cell.
fn derive_odd_cells(labels: &mut Grid<PieceLabel>) {
    let mut derived = 0usize;
    for row in 0..labels.rows() {
        for col in 0..labels.columns() {
            let cell = (row, col);
            if is_even(cell) {
                continue;
            }

            let mut label = PieceLabel::FLAT;
            for side in Side::ALL {
                let state = match labels.neighbor(cell, side) {
                    Some(neighbor) => labels[neighbor].get(side.opposite()).complement(),
                    None => EdgeState::Flat,
                };
                label.set(side, state);
            }

            labels[cell] = label;
            derived += 1;
        }
    }
    trace!(derived, "odd pass complete");
}

/// A piece-type generator that owns its random source.
///
/// Holds no state between calls other than the random source itself.
#[derive(Debug)]
pub struct PieceTypeGenerator<R> {
    rng: R,
}

impl<R: Rng> PieceTypeGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a fresh labeling, advancing the random source.
    pub fn generate(&mut self, rows: i64, columns: i64) -> Result<Grid<PieceLabel>, PuzzleError> {
        generate(rows, columns, &mut self.rng)
    }
}

impl PieceTypeGenerator<StdRng> {
    /// A reproducible generator: equal seeds yield equal sequences of grids.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A generator seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;

    /// Checks every invariant a generated grid must satisfy.
    fn assert_valid(grid: &Grid<PieceLabel>) {
        for (cell, label) in grid.iter() {
            for side in Side::ALL {
                let state = label.get(side);
                match grid.neighbor(cell, side) {
                    None => assert_eq!(
                        state,
                        EdgeState::Flat,
                        "Border side {side:?} of {cell:?} should be flat"
                    ),
                    Some(neighbor) => {
                        assert_ne!(
                            state,
                            EdgeState::Flat,
                            "Inner side {side:?} of {cell:?} must not be flat"
                        );
                        let facing = grid[neighbor].get(side.opposite());
                        assert_eq!(
                            facing,
                            state.complement(),
                            "Side {side:?} of {cell:?} does not interlock with {neighbor:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let mut rng = StdRng::seed_from_u64(1);
        for (rows, columns) in [(0, 5), (5, 0), (-1, 3), (3, -1), (0, 0)] {
            assert_eq!(
                generate(rows, columns, &mut rng),
                Err(PuzzleError::InvalidDimensions { rows, columns }),
                "{rows}x{columns} should be rejected"
            );
        }
    }

    #[test]
    fn test_single_piece_is_flat_on_all_sides() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = generate(1, 1, &mut rng).unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[(0, 0)], PieceLabel::FLAT);
    }

    #[test]
    fn test_two_by_two_interlocks() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            let grid = generate(2, 2, &mut rng).unwrap();
            assert_valid(&grid);
            assert_eq!(grid[(0, 0)].right, grid[(0, 1)].left.complement());
            assert_eq!(grid[(1, 0)].right, grid[(1, 1)].left.complement());
            assert_eq!(grid[(0, 0)].bottom, grid[(1, 0)].top.complement());
            assert_eq!(grid[(0, 1)].bottom, grid[(1, 1)].top.complement());
            for (_, label) in grid.iter() {
                assert!(label.is_corner());
            }
        }
    }

    #[test]
    fn test_all_sizes_up_to_fifty_are_valid() {
        let mut rng = StdRng::seed_from_u64(2012);
        for rows in 1..=50 {
            for columns in 1..=50 {
                let grid = generate(rows, columns, &mut rng).unwrap();
                assert_eq!(grid.rows(), rows as usize);
                assert_eq!(grid.columns(), columns as usize);
                assert_eq!(grid.len(), (rows * columns) as usize);
                assert_valid(&grid);
            }
        }
    }

    #[test]
    fn test_ten_by_ten_flat_edge_distribution() {
        let mut rng = StdRng::seed_from_u64(10);
        let grid = generate(10, 10, &mut rng).unwrap();
        let count_with = |flats: usize| grid.iter().filter(|(_, l)| l.flat_count() == flats).count();
        assert_eq!(grid.len(), 100);
        assert_eq!(count_with(2), 4);
        assert_eq!(count_with(1), 32);
        assert_eq!(count_with(0), 64);
    }

    #[test]
    fn test_same_seed_gives_same_grid() {
        let mut first = PieceTypeGenerator::from_seed(99);
        let mut second = PieceTypeGenerator::from_seed(99);
        for _ in 0..5 {
            assert_eq!(first.generate(8, 13), second.generate(8, 13));
        }
    }

    #[test]
    fn test_sockets_everywhere_when_source_yields_false() {
        // an all-zero source draws `false` for every even side
        let grid = generate(4, 4, &mut StepRng::new(0, 0)).unwrap();
        assert_valid(&grid);
        for (cell, label) in grid.iter() {
            let expected = if is_even(cell) { EdgeState::In } else { EdgeState::Out };
            for side in Side::ALL {
                if grid.neighbor(cell, side).is_some() {
                    assert_eq!(label.get(side), expected, "{cell:?} {side:?}");
                }
            }
        }
    }

    #[test]
    fn test_tabs_everywhere_when_source_yields_true() {
        let grid = generate(3, 5, &mut StepRng::new(u64::MAX, 0)).unwrap();
        assert_valid(&grid);
        assert_eq!(grid[(1, 1)].edges(), [EdgeState::In; 4]);
        assert_eq!(grid[(1, 2)].edges(), [EdgeState::Out; 4]);
    }

    #[test]
    fn test_class_names_tell_border_shapes_apart() {
        let single = generate(1, 1, &mut StepRng::new(0, 0)).unwrap();
        assert_eq!(single[(0, 0)].class_name(), "piece_1111");

        // tabs on every inner side of the even corners, sockets on the odd ones
        let grid = generate(2, 2, &mut StepRng::new(u64::MAX, 0)).unwrap();
        let classes: Vec<String> = grid.iter().map(|(_, label)| label.class_name()).collect();
        assert_eq!(classes, ["piece_1111", "piece_1001", "piece_0110", "piece_1111"]);
        assert_ne!(grid[(0, 1)].class_name(), grid[(1, 0)].class_name());
    }

    #[test]
    fn test_generator_is_debug_printable() {
        let generator = PieceTypeGenerator::from_seed(4);
        assert!(format!("{generator:?}").starts_with("PieceTypeGenerator"));
    }

    #[test]
    fn test_every_raw_combination_appears_on_interior_even_cells() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = [false; 16];
        for _ in 0..20 {
            let grid = generate(12, 12, &mut rng).unwrap();
            assert_valid(&grid);
            for (cell, label) in grid.iter() {
                if is_even(cell) && !label.is_border() {
                    seen[label.bits() as usize] = true;
                }
            }
        }
        assert!(seen.iter().all(|&s| s), "Missing patterns: {seen:?}");
    }
}
