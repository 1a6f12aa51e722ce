use std::fmt;
use std::num::NonZeroU8;

use itertools::Itertools;
use thiserror::Error;

/// Smallest supported box size. 2x2 boxes give the 4x4 grid.
const MIN_BOX_SIZE: usize = 2;
/// Largest supported box size. 5x5 boxes give the 25x25 grid, the largest
/// order the backtracking search handles in practice.
const MAX_BOX_SIZE: usize = 5;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("grid order {order} has no supported box decomposition (the order must be b*b for b in 2..=5)")]
pub struct UnsupportedSize {
    pub order: usize,
}

/// A [Grid] is a square sudoku-style grid of order N (9 for the classic game,
/// with 3x3 boxes). Each cell either holds a value in `1..=N` or is empty.
///
/// The same type serves as the full solution and as the carved player-facing
/// puzzle; the two only differ in how many cells are empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    order: usize,
    box_size: usize,
    // One byte per cell where 0 means the cell is empty.
    // Cells are ordered by rows, first left-to-right, then top-to-bottom.
    cells: Vec<u8>,
}

pub struct CellRef<T> {
    cell: T,
    max_value: u8,
}

impl CellRef<&u8> {
    #[inline]
    pub fn get(&self) -> Option<NonZeroU8> {
        debug_assert!(*self.cell <= self.max_value);
        NonZeroU8::new(*self.cell)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        *self.cell == 0
    }
}

impl CellRef<&mut u8> {
    #[inline]
    pub fn get(&self) -> Option<NonZeroU8> {
        CellRef::<&u8> {
            cell: self.cell,
            max_value: self.max_value,
        }
        .get()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        *self.cell == 0
    }

    #[inline]
    pub fn set(&mut self, value: Option<NonZeroU8>) {
        let value = value.map_or(0, NonZeroU8::get);
        assert!(value <= self.max_value);
        *self.cell = value;
    }
}

impl Grid {
    /// Creates an empty grid of the given order. The order must be a perfect
    /// square so that the grid decomposes into square boxes.
    pub fn new_empty(order: usize) -> Result<Self, UnsupportedSize> {
        let box_size = (MIN_BOX_SIZE..=MAX_BOX_SIZE)
            .find(|box_size| box_size * box_size == order)
            .ok_or(UnsupportedSize { order })?;
        Ok(Grid {
            order,
            box_size,
            cells: vec![0; order * order],
        })
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    #[inline]
    pub fn box_size(&self) -> usize {
        self.box_size
    }

    #[inline]
    pub fn num_cells(&self) -> usize {
        self.order * self.order
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.order && col < self.order);
        row * self.order + col
    }

    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> CellRef<&'_ u8> {
        let index = self.index(row, col);
        CellRef {
            cell: &self.cells[index],
            max_value: self.order as u8,
        }
    }

    #[inline]
    pub fn cell_mut(&mut self, row: usize, col: usize) -> CellRef<&'_ mut u8> {
        let index = self.index(row, col);
        let max_value = self.order as u8;
        CellRef {
            cell: &mut self.cells[index],
            max_value,
        }
    }

    /// Returns the first empty cell in row-major scan order, or [None] if the
    /// grid is fully filled.
    pub fn first_empty_cell(&self) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&cell| cell == 0)
            .map(|index| (index / self.order, index % self.order))
    }

    pub fn is_filled(&self) -> bool {
        self.first_empty_cell().is_none()
    }

    pub fn num_empty(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 0).count()
    }

    /// Parses the 9x9 fixture format used in tests and by [fmt::Debug]:
    /// digits `1..=9`, `_` for an empty cell, all whitespace ignored.
    ///
    /// Panics on anything that isn't exactly 81 cells of digits and `_`.
    pub fn from_str(s: &str) -> Self {
        let mut grid = Grid {
            order: 9,
            box_size: 3,
            cells: vec![0; 81],
        };
        let mut chars = s.chars().filter(|c| !c.is_whitespace());
        for index in 0..grid.num_cells() {
            let c = chars.next().expect("grid string must have 81 cells");
            grid.cells[index] = match c {
                '_' => 0,
                '1'..='9' => c as u8 - b'0',
                _ => panic!("invalid cell character {c:?}"),
            };
        }
        assert!(
            chars.next().is_none(),
            "grid string must have exactly 81 cells"
        );
        grid
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Cells within a box need a separator once values go multi-digit.
        let cell_sep = if self.order > 9 { " " } else { "" };
        for row in 0..self.order {
            if row > 0 {
                writeln!(f)?;
                if row % self.box_size == 0 {
                    writeln!(f)?;
                }
            }
            let line = (0..self.order)
                .chunks(self.box_size)
                .into_iter()
                .map(|chunk| {
                    chunk
                        .map(|col| match self.cell(row, col).get() {
                            Some(value) => value.to_string(),
                            None => "_".to_string(),
                        })
                        .join(cell_sep)
                })
                .join(" ");
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
