//! Conway's Game of Life on a fixed-size grid, with bounded or toroidal
//! edges and a bordered text view for the console.

pub mod compute;
pub mod error;
pub mod grid;
pub mod render;
pub mod rules;

pub use compute::EdgePolicy;
pub use error::GridError;
pub use grid::Grid;
pub use render::RenderParams;
pub use rules::{CellState, Pattern};
