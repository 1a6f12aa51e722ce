use std::num::NonZeroU8;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::checker::{has_conflicts, is_valid};
use crate::grid::{Grid, UnsupportedSize};

/// Generates a fully filled random solution grid of the given order.
pub fn generate_solution(order: usize) -> Result<Grid, UnsupportedSize> {
    generate_solution_with_rng(order, &mut rand::thread_rng())
}

/// Same as [generate_solution] but with an injectable random source, so that
/// generation is reproducible under a seeded rng.
pub fn generate_solution_with_rng<R: Rng>(
    order: usize,
    rng: &mut R,
) -> Result<Grid, UnsupportedSize> {
    let mut grid = Grid::new_empty(order)?;
    let filled = fill_cells(&mut grid, 0, rng);
    // An empty grid of any supported order has at least one completion, and
    // the search tries every candidate before giving up, so it cannot fail
    // at the top level.
    assert!(filled);
    debug_assert!(grid.is_filled());
    debug_assert!(!has_conflicts(&grid));
    log::debug!("generated an order-{order} solution");
    Ok(grid)
}

// Depth-first backtracking over cells in row-major order, with the candidate
// values tried in a freshly shuffled order at every cell.
//
// Invariant:
//  - When `fill_cells` returns `false`, `grid` is unchanged. Any cells filled
//    during the failed attempt have been reset to empty.
fn fill_cells<R: Rng>(grid: &mut Grid, index: usize, rng: &mut R) -> bool {
    if index == grid.num_cells() {
        // No cells left. The grid is fully filled.
        return true;
    }
    let order = grid.order();
    let row = index / order;
    let col = index % order;

    let mut candidates: Vec<NonZeroU8> = (1..=order as u8).filter_map(NonZeroU8::new).collect();
    candidates.shuffle(rng);

    for value in candidates {
        if is_valid(grid, row, col, value) {
            let mut cell = grid.cell_mut(row, col);
            debug_assert!(cell.is_empty());
            cell.set(Some(value));
            if fill_cells(grid, index + 1, rng) {
                return true;
            }
            // Undo the placement before trying the next candidate
            grid.cell_mut(row, col).set(None);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;
    use rand::{rngs::StdRng, SeedableRng};

    // Every row, column and box must contain each value in 1..=N exactly once.
    fn assert_complete(grid: &Grid) {
        let order = grid.order();
        assert!(grid.is_filled());
        assert!(!has_conflicts(grid));
        for unit in 0..order {
            let mut row_counts = vec![0; order + 1];
            let mut col_counts = vec![0; order + 1];
            for i in 0..order {
                row_counts[usize::from(grid.cell(unit, i).get().unwrap().get())] += 1;
                col_counts[usize::from(grid.cell(i, unit).get().unwrap().get())] += 1;
            }
            assert!(row_counts[1..].iter().all(|&count| count == 1));
            assert!(col_counts[1..].iter().all(|&count| count == 1));
        }
        let box_size = grid.box_size();
        for (box_row, box_col) in iproduct!(0..box_size, 0..box_size) {
            let mut counts = vec![0; order + 1];
            for (r, c) in iproduct!(0..box_size, 0..box_size) {
                let cell = grid.cell(box_row * box_size + r, box_col * box_size + c);
                counts[usize::from(cell.get().unwrap().get())] += 1;
            }
            assert!(counts[1..].iter().all(|&count| count == 1));
        }
    }

    #[test]
    fn generates_complete_order_9_solutions() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..10 {
            let grid = generate_solution_with_rng(9, &mut rng).unwrap();
            assert_complete(&grid);
        }
    }

    #[test]
    fn generates_complete_order_4_solutions() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            let grid = generate_solution_with_rng(4, &mut rng).unwrap();
            assert_complete(&grid);
        }
    }

    #[test]
    fn reproducible_under_fixed_seed() {
        let first = generate_solution_with_rng(9, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = generate_solution_with_rng(9, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn varies_across_seeds() {
        let solutions: Vec<Grid> = (0..5u64)
            .map(|seed| generate_solution_with_rng(9, &mut StdRng::seed_from_u64(seed)).unwrap())
            .collect();
        assert!(solutions.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn rejects_unsupported_order() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            Err(UnsupportedSize { order: 5 }),
            generate_solution_with_rng(5, &mut rng)
        );
        assert_eq!(
            Err(UnsupportedSize { order: 0 }),
            generate_solution_with_rng(0, &mut rng)
        );
    }

    #[test]
    fn thread_rng_entry_point() {
        let grid = generate_solution(9).unwrap();
        assert_complete(&grid);
    }
}
