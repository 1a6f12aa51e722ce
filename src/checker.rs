use std::num::NonZeroU8;

use itertools::iproduct;

use crate::grid::Grid;

/// Checks whether `value` could be placed at `(row, col)` without violating
/// the row, column, or box uniqueness constraint. The target cell itself is
/// excluded from the scan: it is being considered for placement, not yet
/// placed.
///
/// Out-of-range coordinates or values are caller bugs, not runtime errors.
pub fn is_valid(grid: &Grid, row: usize, col: usize, value: NonZeroU8) -> bool {
    let order = grid.order();
    debug_assert!(row < order && col < order);
    debug_assert!(usize::from(value.get()) <= order);

    for c in 0..order {
        if c != col && grid.cell(row, c).get() == Some(value) {
            return false;
        }
    }
    for r in 0..order {
        if r != row && grid.cell(r, col).get() == Some(value) {
            return false;
        }
    }
    let box_size = grid.box_size();
    let box_row = row - row % box_size;
    let box_col = col - col % box_size;
    for (r, c) in iproduct!(box_row..box_row + box_size, box_col..box_col + box_size) {
        if (r, c) != (row, col) && grid.cell(r, c).get() == Some(value) {
            return false;
        }
    }
    true
}

/// Whether any filled cell duplicates a value in its row, column or box.
pub fn has_conflicts(grid: &Grid) -> bool {
    let order = grid.order();
    iproduct!(0..order, 0..order).any(|(row, col)| match grid.cell(row, col).get() {
        Some(value) => !is_valid(grid, row, col, value),
        None => false,
    })
}

/// Cell-by-cell win check: `true` iff `candidate` equals `solution` in every
/// cell. Grids of different orders never match.
///
/// This is deliberately an equality check against one particular solution and
/// not a constraint check: a carved puzzle is not guaranteed to have a unique
/// solution, so a constraint-valid completion could still differ from the
/// solution the puzzle was carved from.
pub fn matches(candidate: &Grid, solution: &Grid) -> bool {
    let order = solution.order();
    candidate.order() == order
        && iproduct!(0..order, 0..order)
            .all(|(row, col)| candidate.cell(row, col).get() == solution.cell(row, col).get())
}
