use bitvec::vec::BitVec;
use rand::Rng;
use thiserror::Error;

use crate::grid::Grid;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot blank {requested} cells of a grid with {num_cells} cells")]
pub struct InvalidRemovalCount {
    pub requested: usize,
    pub num_cells: usize,
}

/// Records which puzzle cells are givens: pre-filled from the solution and
/// not editable by the player. Derived once during carving, never changed
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GivenMask {
    order: usize,
    // One bit per cell, ordered by rows like the grid cells.
    given: BitVec,
}

impl GivenMask {
    fn all_given(order: usize) -> Self {
        GivenMask {
            order,
            given: BitVec::repeat(true, order * order),
        }
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    pub fn is_given(&self, row: usize, col: usize) -> bool {
        assert!(row < self.order && col < self.order);
        self.given[row * self.order + col]
    }

    pub fn num_given(&self) -> usize {
        self.given.count_ones()
    }

    fn clear(&mut self, row: usize, col: usize) {
        let index = row * self.order + col;
        self.given.set(index, false);
    }
}

/// Blanks `removal_count` distinct cells of `solution`, chosen uniformly at
/// random, and returns the resulting puzzle together with the mask of the
/// remaining givens.
pub fn carve(
    solution: Grid,
    removal_count: usize,
) -> Result<(Grid, GivenMask), InvalidRemovalCount> {
    carve_with_rng(solution, removal_count, &mut rand::thread_rng())
}

/// Same as [carve] but with an injectable random source.
///
/// The carved puzzle is not checked for unique solvability: distinct
/// solutions may complete the same puzzle. Win detection therefore compares
/// against the original solution, see [crate::matches].
pub fn carve_with_rng<R: Rng>(
    solution: Grid,
    removal_count: usize,
    rng: &mut R,
) -> Result<(Grid, GivenMask), InvalidRemovalCount> {
    let num_cells = solution.num_cells();
    if removal_count >= num_cells {
        return Err(InvalidRemovalCount {
            requested: removal_count,
            num_cells,
        });
    }

    let order = solution.order();
    let mut puzzle = solution;
    let mut mask = GivenMask::all_given(order);
    let mut remaining = removal_count;
    while remaining > 0 {
        let row = rng.gen_range(0..order);
        let col = rng.gen_range(0..order);
        // Rejection sampling: a cell that was already blanked doesn't count
        if puzzle.cell(row, col).is_empty() {
            continue;
        }
        puzzle.cell_mut(row, col).set(None);
        mask.clear(row, col);
        remaining -= 1;
    }
    log::debug!(
        "carved {removal_count} cells, {} givens left",
        mask.num_given()
    );
    Ok((puzzle, mask))
}
