//! Rules module for Conway's Game of Life simulation
//!
//! This module contains the cell state representation, the B3/S23 transition
//! rule, and the preset patterns used to seed a grid.

pub mod patterns;

pub use patterns::{Pattern, PatternParseError};

/// Game of Life standard rules:
/// 1. Any live cell with fewer than two live neighbors dies (underpopulation)
/// 2. Any live cell with two or three live neighbors lives (survival)
/// 3. Any live cell with more than three live neighbors dies (overpopulation)
/// 4. Any dead cell with exactly three live neighbors becomes alive (reproduction)
pub const SURVIVAL_MIN: u8 = 2;
pub const SURVIVAL_MAX: u8 = 3;
pub const BIRTH_COUNT: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    /// Numeric view used when summing neighbors
    pub fn value(self) -> u8 {
        match self {
            CellState::Alive => 1,
            CellState::Dead => 0,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

/// Next state of a single cell given its live-neighbor count in the current generation
pub fn next_state(state: CellState, neighbors: u8) -> CellState {
    match state {
        CellState::Dead if neighbors == BIRTH_COUNT => CellState::Alive,
        CellState::Alive if !(SURVIVAL_MIN..=SURVIVAL_MAX).contains(&neighbors) => CellState::Dead,
        _ => state,
    }
}
