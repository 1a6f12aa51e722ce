mod carver;
mod checker;
mod generator;
mod grid;

pub use carver::{carve, carve_with_rng, GivenMask, InvalidRemovalCount};
pub use checker::{is_valid, matches};
pub use generator::{generate_solution, generate_solution_with_rng};
pub use grid::{CellRef, Grid, UnsupportedSize};
